//! Tailwind CSS class merging.
//!
//! [`tw_merge`] joins class strings and drops every utility that is overridden
//! by a later, conflicting utility. Two utilities conflict when they target
//! the same CSS property group under the same set of variants:
//!
//! ```
//! use altar_core::plugins::tailwind::tw_merge;
//!
//! assert_eq!(tw_merge(["px-2 py-1 bg-red-500", "p-3 bg-primary"]), "p-3 bg-primary");
//! assert_eq!(tw_merge(["text-sm text-muted-foreground", "text-lg"]), "text-muted-foreground text-lg");
//! assert_eq!(tw_merge(["hover:bg-accent", "bg-muted"]), "hover:bg-accent bg-muted");
//! ```
//!
//! Classes the merger does not recognize are kept as-is; exact duplicates
//! collapse to their last occurrence.

use std::collections::HashSet;

/// Merges class strings, keeping the last utility of every conflicting pair.
///
/// The relative order of the surviving classes is preserved.
pub fn tw_merge<I, S>(classes: I) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let inputs: Vec<S> = classes.into_iter().collect();
	let tokens: Vec<&str> = inputs
		.iter()
		.flat_map(|s| s.as_ref().split_whitespace())
		.collect();

	let mut seen: HashSet<&str> = HashSet::new();
	let mut taken: HashSet<String> = HashSet::new();
	let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

	for token in tokens.into_iter().rev() {
		if seen.contains(token) {
			continue;
		}
		let Some(parsed) = ParsedClass::parse(token) else {
			seen.insert(token);
			kept.push(token);
			continue;
		};

		let prefix = parsed.modifier_key();
		if taken.contains(&format!("{prefix}{}", parsed.group)) {
			continue;
		}

		seen.insert(token);
		kept.push(token);
		taken.insert(format!("{prefix}{}", parsed.group));
		for group in conflicting_groups(parsed.group) {
			taken.insert(format!("{prefix}{group}"));
		}
	}

	kept.reverse();
	kept.join(" ")
}

/// Returns the class group of a single utility, ignoring its variants.
///
/// ```
/// use altar_core::plugins::tailwind::class_group;
///
/// assert_eq!(class_group("hover:px-4"), Some("px"));
/// assert_eq!(class_group("text-sm"), Some("font-size"));
/// assert_eq!(class_group("text-primary"), Some("text-color"));
/// assert_eq!(class_group("peer"), None);
/// ```
pub fn class_group(class: &str) -> Option<&'static str> {
	ParsedClass::parse(class).map(|parsed| parsed.group)
}

struct ParsedClass<'a> {
	variants: Vec<&'a str>,
	important: bool,
	group: &'static str,
}

impl<'a> ParsedClass<'a> {
	fn parse(class: &'a str) -> Option<Self> {
		let mut parts = split_top_level(class, ':');
		let mut base = parts.pop()?;
		let mut variants = parts;
		variants.sort_unstable();

		let mut important = false;
		if let Some(rest) = base.strip_prefix('!') {
			base = rest;
			important = true;
		}
		if let Some(rest) = base.strip_suffix('!') {
			base = rest;
			important = true;
		}
		if let Some(rest) = base.strip_prefix('-') {
			base = rest;
		}
		if base.is_empty() {
			return None;
		}

		let group = resolve_group(strip_modifier(base))?;
		Some(Self {
			variants,
			important,
			group,
		})
	}

	fn modifier_key(&self) -> String {
		let mut key = self.variants.join(":");
		key.push(if self.important { '!' } else { '|' });
		key
	}
}

/// Splits on `sep` outside of `[...]` and `(...)`.
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	for (i, c) in s.char_indices() {
		match c {
			'[' | '(' => depth += 1,
			']' | ')' => depth = depth.saturating_sub(1),
			c if c == sep && depth == 0 => {
				parts.push(&s[start..i]);
				start = i + c.len_utf8();
			}
			_ => {}
		}
	}
	parts.push(&s[start..]);
	parts
}

/// Drops a trailing `/modifier` (opacity, line height, fraction denominator).
fn strip_modifier(base: &str) -> &str {
	let mut depth = 0usize;
	let mut cut = None;
	for (i, c) in base.char_indices() {
		match c {
			'[' | '(' => depth += 1,
			']' | ')' => depth = depth.saturating_sub(1),
			'/' if depth == 0 => cut = Some(i),
			_ => {}
		}
	}
	match cut {
		Some(i) if i > 0 => &base[..i],
		_ => base,
	}
}

fn resolve_group(base: &str) -> Option<&'static str> {
	if let Some(group) = keyword_group(base) {
		return Some(group);
	}
	if let Some(group) = ambiguous_group(base) {
		return Some(group);
	}

	// Try the longest dash-separated prefix first: "min-w-0" -> "min-w".
	let mut rest = base;
	while let Some(i) = rest.rfind('-') {
		if i == 0 {
			break;
		}
		let value = &base[i + 1..];
		if !value.is_empty()
			&& let Some(group) = prefix_group(&base[..i])
		{
			return Some(group);
		}
		rest = &base[..i];
	}
	None
}

fn keyword_group(base: &str) -> Option<&'static str> {
	let group = match base {
		"block" | "inline-block" | "inline" | "flex" | "inline-flex" | "table"
		| "inline-table" | "table-caption" | "table-cell" | "table-column"
		| "table-column-group" | "table-footer-group" | "table-header-group"
		| "table-row-group" | "table-row" | "flow-root" | "grid" | "inline-grid"
		| "contents" | "list-item" | "hidden" => "display",
		"static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
		"visible" | "invisible" | "collapse" => "visibility",
		"sr-only" | "not-sr-only" => "sr",
		"italic" | "not-italic" => "font-style",
		"uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
		"underline" | "overline" | "line-through" | "no-underline" => "text-decoration-line",
		"truncate" | "text-ellipsis" | "text-clip" => "text-overflow",
		"antialiased" | "subpixel-antialiased" => "font-smoothing",
		"isolate" | "isolation-auto" => "isolation",
		"flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => "flex-direction",
		"flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => "flex-wrap",
		"grow" => "grow",
		"shrink" => "shrink",
		"border" => "border-w",
		"rounded" => "rounded",
		"shadow" => "shadow",
		"ring" => "ring-w",
		"ring-inset" => "ring-inset",
		"outline" => "outline-w",
		"transition" => "transition",
		"blur" => "blur",
		"resize" => "resize",
		"container" => "container",
		"border-collapse" | "border-separate" => "border-collapse",
		"table-auto" | "table-fixed" => "table-layout",
		"box-border" | "box-content" => "box-sizing",
		_ => return None,
	};
	Some(group)
}

/// Prefixes whose group depends on the kind of value that follows.
fn ambiguous_group(base: &str) -> Option<&'static str> {
	if let Some(value) = base.strip_prefix("text-") {
		return Some(text_group(value));
	}
	if let Some(value) = base.strip_prefix("bg-") {
		return Some(bg_group(value));
	}
	if let Some(value) = base.strip_prefix("border-") {
		return Some(border_group(value));
	}
	if let Some(value) = base.strip_prefix("rounded-") {
		return Some(rounded_group(value));
	}
	if let Some(value) = base.strip_prefix("shadow-") {
		return Some(if is_shadow_size(value) {
			"shadow"
		} else {
			"shadow-color"
		});
	}
	if let Some(value) = base.strip_prefix("ring-offset-") {
		return Some(if is_number(value) || is_arbitrary_length(value) {
			"ring-offset-w"
		} else {
			"ring-offset-color"
		});
	}
	if let Some(value) = base.strip_prefix("ring-") {
		return Some(if is_number(value) || is_arbitrary_length(value) {
			"ring-w"
		} else {
			"ring-color"
		});
	}
	if let Some(value) = base.strip_prefix("outline-") {
		return Some(outline_group(value));
	}
	if let Some(value) = base.strip_prefix("font-") {
		return Some(
			if is_number(value)
				|| matches!(
					value,
					"thin"
						| "extralight" | "light"
						| "normal" | "medium"
						| "semibold" | "bold"
						| "extrabold" | "black"
				) {
				"font-weight"
			} else {
				"font-family"
			},
		);
	}
	if let Some(value) = base.strip_prefix("stroke-") {
		return Some(if is_number(value) || is_arbitrary_length(value) {
			"stroke-w"
		} else {
			"stroke"
		});
	}
	if let Some(value) = base.strip_prefix("decoration-") {
		return Some(match value {
			"solid" | "double" | "dotted" | "dashed" | "wavy" => "decoration-style",
			"auto" | "from-font" => "decoration-thickness",
			v if is_number(v) || is_arbitrary_length(v) => "decoration-thickness",
			_ => "decoration-color",
		});
	}
	if let Some(value) = base.strip_prefix("object-") {
		return Some(match value {
			"contain" | "cover" | "fill" | "none" | "scale-down" => "object-fit",
			_ => "object-position",
		});
	}
	if let Some(value) = base.strip_prefix("flex-") {
		return Some(match value {
			"1" | "auto" | "initial" | "none" => "flex",
			v if is_arbitrary(v) => "flex",
			_ => return None,
		});
	}
	None
}

fn text_group(value: &str) -> &'static str {
	match value {
		"xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" | "7xl"
		| "8xl" | "9xl" => "font-size",
		"left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
		"wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
		v if is_arbitrary_length(v) => "font-size",
		_ => "text-color",
	}
}

fn bg_group(value: &str) -> &'static str {
	match value {
		"fixed" | "local" | "scroll" => "bg-attachment",
		"repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
			"bg-repeat"
		}
		"auto" | "cover" | "contain" => "bg-size",
		"bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
		| "right-top" | "top" => "bg-position",
		"none" => "bg-image",
		v if v.starts_with("clip-") => "bg-clip",
		v if v.starts_with("origin-") => "bg-origin",
		v if v.starts_with("blend-") => "bg-blend",
		v if v.starts_with("gradient-to-")
			|| v.starts_with("linear-")
			|| v.starts_with("radial")
			|| v.starts_with("conic") =>
		{
			"bg-image"
		}
		v if is_arbitrary(v) => {
			let inner = arbitrary_inner(v);
			if inner.starts_with("url(")
				|| inner.starts_with("image:")
				|| inner.contains("gradient(")
			{
				"bg-image"
			} else if inner.starts_with("length:") || inner.starts_with("size:") {
				"bg-size"
			} else {
				"bg-color"
			}
		}
		_ => "bg-color",
	}
}

fn border_group(value: &str) -> &'static str {
	const SIDES: [(&str, &str, &str); 8] = [
		("x", "border-w-x", "border-color-x"),
		("y", "border-w-y", "border-color-y"),
		("t", "border-w-t", "border-color-t"),
		("r", "border-w-r", "border-color-r"),
		("b", "border-w-b", "border-color-b"),
		("l", "border-w-l", "border-color-l"),
		("s", "border-w-s", "border-color-s"),
		("e", "border-w-e", "border-color-e"),
	];
	for (side, width, color) in SIDES {
		if value == side {
			return width;
		}
		if let Some(rest) = value.strip_prefix(side).and_then(|r| r.strip_prefix('-')) {
			return if is_number(rest) || is_arbitrary_length(rest) {
				width
			} else {
				color
			};
		}
	}
	match value {
		"solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => "border-style",
		v if v.starts_with("spacing") => "border-spacing",
		v if is_number(v) || is_arbitrary_length(v) => "border-w",
		_ => "border-color",
	}
}

fn rounded_group(value: &str) -> &'static str {
	let side = value.split('-').next().unwrap_or(value);
	match side {
		"t" => "rounded-t",
		"r" => "rounded-r",
		"b" => "rounded-b",
		"l" => "rounded-l",
		"s" => "rounded-s",
		"e" => "rounded-e",
		"tl" => "rounded-tl",
		"tr" => "rounded-tr",
		"br" => "rounded-br",
		"bl" => "rounded-bl",
		"ss" => "rounded-ss",
		"se" => "rounded-se",
		"es" => "rounded-es",
		"ee" => "rounded-ee",
		_ => "rounded",
	}
}

fn outline_group(value: &str) -> &'static str {
	match value {
		"none" | "hidden" | "solid" | "dashed" | "dotted" | "double" => "outline-style",
		v if v.starts_with("offset-") => "outline-offset",
		v if is_number(v) || is_arbitrary_length(v) => "outline-w",
		_ => "outline-color",
	}
}

fn prefix_group(prefix: &str) -> Option<&'static str> {
	let group = match prefix {
		"p" => "p",
		"px" => "px",
		"py" => "py",
		"pt" => "pt",
		"pr" => "pr",
		"pb" => "pb",
		"pl" => "pl",
		"ps" => "ps",
		"pe" => "pe",
		"m" => "m",
		"mx" => "mx",
		"my" => "my",
		"mt" => "mt",
		"mr" => "mr",
		"mb" => "mb",
		"ml" => "ml",
		"ms" => "ms",
		"me" => "me",
		"space-x" => "space-x",
		"space-y" => "space-y",
		"gap" => "gap",
		"gap-x" => "gap-x",
		"gap-y" => "gap-y",
		"w" => "w",
		"h" => "h",
		"size" => "size",
		"min-w" => "min-w",
		"min-h" => "min-h",
		"max-w" => "max-w",
		"max-h" => "max-h",
		"inset" => "inset",
		"inset-x" => "inset-x",
		"inset-y" => "inset-y",
		"top" => "top",
		"right" => "right",
		"bottom" => "bottom",
		"left" => "left",
		"start" => "start",
		"end" => "end",
		"z" => "z",
		"opacity" => "opacity",
		"order" => "order",
		"basis" => "basis",
		"grow" => "grow",
		"shrink" => "shrink",
		"items" => "align-items",
		"justify" => "justify-content",
		"justify-items" => "justify-items",
		"justify-self" => "justify-self",
		"content" => "align-content",
		"self" => "align-self",
		"place-content" => "place-content",
		"place-items" => "place-items",
		"place-self" => "place-self",
		"overflow" => "overflow",
		"overflow-x" => "overflow-x",
		"overflow-y" => "overflow-y",
		"overscroll" => "overscroll",
		"cursor" => "cursor",
		"select" => "select",
		"pointer-events" => "pointer-events",
		"appearance" => "appearance",
		"transition" => "transition",
		"duration" => "duration",
		"ease" => "ease",
		"delay" => "delay",
		"animate" => "animate",
		"translate" => "translate",
		"translate-x" => "translate-x",
		"translate-y" => "translate-y",
		"rotate" => "rotate",
		"scale" => "scale",
		"scale-x" => "scale-x",
		"scale-y" => "scale-y",
		"skew-x" => "skew-x",
		"skew-y" => "skew-y",
		"origin" => "transform-origin",
		"grid-cols" => "grid-cols",
		"grid-rows" => "grid-rows",
		"grid-flow" => "grid-flow",
		"col" | "col-span" => "col-span",
		"col-start" => "col-start",
		"col-end" => "col-end",
		"row" | "row-span" => "row-span",
		"row-start" => "row-start",
		"row-end" => "row-end",
		"auto-cols" => "auto-cols",
		"auto-rows" => "auto-rows",
		"aspect" => "aspect",
		"line-clamp" => "line-clamp",
		"leading" => "leading",
		"tracking" => "tracking",
		"whitespace" => "whitespace",
		"break" => "word-break",
		"list" => "list-style",
		"align" => "vertical-align",
		"indent" => "indent",
		"underline-offset" => "underline-offset",
		"blur" => "blur",
		"backdrop-blur" => "backdrop-blur",
		"fill" => "fill",
		"caption" => "caption",
		"field-sizing" => "field-sizing",
		"float" => "float",
		"clear" => "clear",
		"resize" => "resize",
		"touch" => "touch",
		"will-change" => "will-change",
		"columns" => "columns",
		"scroll-m" => "scroll-m",
		"scroll-p" => "scroll-p",
		"snap" => "snap",
		"divide-x" => "divide-x",
		"divide-y" => "divide-y",
		_ => return None,
	};
	Some(group)
}

/// Groups a later utility overrides in addition to its own.
fn conflicting_groups(group: &str) -> &'static [&'static str] {
	match group {
		"p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
		"px" => &["pr", "pl", "ps", "pe"],
		"py" => &["pt", "pb"],
		"m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
		"mx" => &["mr", "ml", "ms", "me"],
		"my" => &["mt", "mb"],
		"inset" => &[
			"inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end",
		],
		"inset-x" => &["right", "left", "start", "end"],
		"inset-y" => &["top", "bottom"],
		"size" => &["w", "h"],
		"gap" => &["gap-x", "gap-y"],
		"overflow" => &["overflow-x", "overflow-y"],
		"font-size" => &["leading"],
		"translate" => &["translate-x", "translate-y"],
		"scale" => &["scale-x", "scale-y"],
		"rounded" => &[
			"rounded-t",
			"rounded-r",
			"rounded-b",
			"rounded-l",
			"rounded-s",
			"rounded-e",
			"rounded-tl",
			"rounded-tr",
			"rounded-br",
			"rounded-bl",
			"rounded-ss",
			"rounded-se",
			"rounded-es",
			"rounded-ee",
		],
		"rounded-t" => &["rounded-tl", "rounded-tr"],
		"rounded-r" => &["rounded-tr", "rounded-br"],
		"rounded-b" => &["rounded-br", "rounded-bl"],
		"rounded-l" => &["rounded-tl", "rounded-bl"],
		"rounded-s" => &["rounded-ss", "rounded-es"],
		"rounded-e" => &["rounded-se", "rounded-ee"],
		"border-w" => &[
			"border-w-x",
			"border-w-y",
			"border-w-t",
			"border-w-r",
			"border-w-b",
			"border-w-l",
			"border-w-s",
			"border-w-e",
		],
		"border-w-x" => &["border-w-r", "border-w-l"],
		"border-w-y" => &["border-w-t", "border-w-b"],
		"border-color" => &[
			"border-color-x",
			"border-color-y",
			"border-color-t",
			"border-color-r",
			"border-color-b",
			"border-color-l",
			"border-color-s",
			"border-color-e",
		],
		"border-color-x" => &["border-color-r", "border-color-l"],
		"border-color-y" => &["border-color-t", "border-color-b"],
		_ => &[],
	}
}

fn is_number(value: &str) -> bool {
	!value.is_empty() && value.parse::<f64>().is_ok()
}

fn is_arbitrary(value: &str) -> bool {
	(value.starts_with('[') && value.ends_with(']'))
		|| (value.starts_with('(') && value.ends_with(')'))
}

fn arbitrary_inner(value: &str) -> &str {
	if is_arbitrary(value) {
		&value[1..value.len() - 1]
	} else {
		value
	}
}

fn is_arbitrary_length(value: &str) -> bool {
	if !is_arbitrary(value) {
		return false;
	}
	let inner = arbitrary_inner(value);
	if let Some(rest) = inner.strip_prefix("length:") {
		return !rest.is_empty();
	}
	inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
		|| inner.starts_with("calc(")
		|| inner.starts_with("clamp(")
		|| inner.starts_with("min(")
		|| inner.starts_with("max(")
}

fn is_shadow_size(value: &str) -> bool {
	matches!(
		value,
		"2xs" | "xs" | "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none"
	) || (is_arbitrary(value) && !arbitrary_inner(value).starts_with("color:"))
}
