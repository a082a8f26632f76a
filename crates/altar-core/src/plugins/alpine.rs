//! Alpine.js directive data.
//!
//! Components describe their client-side state as [`AlpineData`]: an ordered
//! map of keys to JSON values or JavaScript [`Statement`]s. Data from a parent
//! component and from the caller is combined with [`AlpineData::merge`] and
//! rendered into a directive value with [`AlpineData::render`].
//!
//! ```
//! use altar_core::plugins::alpine::{AlpineData, Directive, Statement};
//!
//! let base = AlpineData::new()
//!     .entry("isOpen", false)
//!     .entry("toggle()", Statement::definition("{ this.isOpen = !this.isOpen }"));
//! let merged = base.merge(AlpineData::new().entry("isOpen", true));
//!
//! assert_eq!(
//!     merged.render(Directive::Data),
//!     "{isOpen: true, toggle() { this.isOpen = !this.isOpen }}"
//! );
//! ```

use std::fmt;

use serde_json::Value;

/// How a [`Statement`] is placed in the rendered directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
	/// A method: the key is the signature, the content is the body.
	Definition,
	/// A property whose value is a JavaScript expression.
	Assignment,
	/// A statement executed as-is (`x-init`, `x-effect`).
	Instance,
}

/// A piece of JavaScript source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
	content: String,
	kind: StatementKind,
}

impl Statement {
	pub fn new(content: impl Into<String>, kind: StatementKind) -> Self {
		Self {
			content: content.into(),
			kind,
		}
	}

	/// Creates a method body, e.g. `"{ return this.open }"`.
	pub fn definition(content: impl Into<String>) -> Self {
		Self::new(content, StatementKind::Definition)
	}

	/// Creates an expression-valued property, e.g. `"$id('tab')"`.
	pub fn assignment(content: impl Into<String>) -> Self {
		Self::new(content, StatementKind::Assignment)
	}

	/// Creates a bare statement.
	pub fn instance(content: impl Into<String>) -> Self {
		Self::new(content, StatementKind::Instance)
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn kind(&self) -> StatementKind {
		self.kind
	}
}

/// A value stored under an [`AlpineData`] key.
#[derive(Debug, Clone, PartialEq)]
pub enum AlpineValue {
	/// A literal rendered as JavaScript.
	Json(Value),
	/// JavaScript source.
	Statement(Statement),
}

impl From<Value> for AlpineValue {
	fn from(value: Value) -> Self {
		Self::Json(value)
	}
}

impl From<Statement> for AlpineValue {
	fn from(statement: Statement) -> Self {
		Self::Statement(statement)
	}
}

impl From<bool> for AlpineValue {
	fn from(value: bool) -> Self {
		Self::Json(Value::Bool(value))
	}
}

impl From<&str> for AlpineValue {
	fn from(value: &str) -> Self {
		Self::Json(Value::String(value.to_owned()))
	}
}

impl From<String> for AlpineValue {
	fn from(value: String) -> Self {
		Self::Json(Value::String(value))
	}
}

impl From<i64> for AlpineValue {
	fn from(value: i64) -> Self {
		Self::Json(Value::from(value))
	}
}

impl From<u32> for AlpineValue {
	fn from(value: u32) -> Self {
		Self::Json(Value::from(value))
	}
}

impl From<f64> for AlpineValue {
	fn from(value: f64) -> Self {
		Self::Json(Value::from(value))
	}
}

/// Alpine.js directives carrying [`AlpineData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
	/// `x-data`
	Data,
	/// `x-init`
	Init,
	/// `x-effect`
	Effect,
}

impl Directive {
	/// Returns the attribute name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Data => "x-data",
			Self::Init => "x-init",
			Self::Effect => "x-effect",
		}
	}

	/// Parses an attribute name.
	pub fn from_attr(name: &str) -> Option<Self> {
		match name {
			"x-data" => Some(Self::Data),
			"x-init" => Some(Self::Init),
			"x-effect" => Some(Self::Effect),
			_ => None,
		}
	}
}

impl fmt::Display for Directive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Ordered directive data plus caller-written fragments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlpineData {
	entries: Vec<(String, AlpineValue)>,
	raw: Vec<String>,
}

impl AlpineData {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key`, keeping the position of an existing entry.
	pub fn entry(mut self, key: impl Into<String>, value: impl Into<AlpineValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Appends a caller-written fragment.
	///
	/// For `x-data` the fragment is an object literal (its members are spliced
	/// into the rendered object) or an expression (spread into it). For
	/// `x-init` and `x-effect` it is a statement.
	pub fn raw(mut self, fragment: impl Into<String>) -> Self {
		let fragment = fragment.into();
		if !fragment.trim().is_empty() {
			self.raw.push(fragment);
		}
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AlpineValue>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some(slot) => slot.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&AlpineValue> {
		self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Returns the number of keyed entries and raw fragments.
	pub fn len(&self) -> usize {
		self.entries.len() + self.raw.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty() && self.raw.is_empty()
	}

	pub fn entries(&self) -> impl Iterator<Item = (&str, &AlpineValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn raw_fragments(&self) -> &[String] {
		&self.raw
	}

	/// Merges `other` into `self`. Entries of `other` win.
	pub fn merge(mut self, other: AlpineData) -> Self {
		for (key, value) in other.entries {
			self.insert(key, value);
		}
		self.raw.extend(other.raw);
		self
	}

	pub fn merge_opt(self, other: Option<AlpineData>) -> Self {
		match other {
			Some(other) => self.merge(other),
			None => self,
		}
	}

	/// Renders the value of `directive`.
	pub fn render(&self, directive: Directive) -> String {
		match directive {
			Directive::Data => self.render_object(),
			Directive::Init | Directive::Effect => self.render_statements(),
		}
	}

	fn render_object(&self) -> String {
		let mut members: Vec<String> = self
			.entries
			.iter()
			.map(|(key, value)| match value {
				AlpineValue::Json(json) => format!("{key}: {}", js_literal(json)),
				AlpineValue::Statement(statement) => match statement.kind {
					StatementKind::Definition => format!("{key} {}", statement.content.trim()),
					StatementKind::Assignment => format!("{key}: {}", statement.content.trim()),
					StatementKind::Instance => statement.content.trim().to_owned(),
				},
			})
			.collect();

		for fragment in &self.raw {
			let fragment = fragment.trim();
			match fragment
				.strip_prefix('{')
				.and_then(|inner| inner.strip_suffix('}'))
			{
				Some(inner) => {
					let inner = inner.trim().trim_end_matches(',').trim_end();
					if !inner.is_empty() {
						members.push(inner.to_owned());
					}
				}
				None => {
					tracing::debug!(fragment, "spreading x-data expression into object");
					members.push(format!("...{fragment}"));
				}
			}
		}

		if members.is_empty() {
			"{}".to_owned()
		} else {
			format!("{{{}}}", members.join(", "))
		}
	}

	fn render_statements(&self) -> String {
		let mut statements: Vec<String> = self
			.entries
			.iter()
			.map(|(key, value)| match value {
				AlpineValue::Json(json) => format!("{key} = {}", js_literal(json)),
				AlpineValue::Statement(statement) => statement.content.trim().to_owned(),
			})
			.collect();
		statements.extend(
			self.raw
				.iter()
				.map(|fragment| fragment.trim().trim_end_matches(';').to_owned()),
		);
		statements.join("; ")
	}
}

impl From<&str> for AlpineData {
	fn from(fragment: &str) -> Self {
		Self::new().raw(fragment)
	}
}

impl From<String> for AlpineData {
	fn from(fragment: String) -> Self {
		Self::new().raw(fragment)
	}
}

impl From<Statement> for AlpineData {
	fn from(statement: Statement) -> Self {
		Self::new().raw(statement.content)
	}
}

/// Renders a JSON value as a JavaScript literal with single-quoted strings.
///
/// ```
/// use altar_core::plugins::alpine::js_literal;
/// use serde_json::json;
///
/// assert_eq!(js_literal(&json!("it's")), r"'it\'s'");
/// assert_eq!(js_literal(&json!({"a": [1, null]})), "{a: [1, null]}");
/// ```
pub fn js_literal(value: &Value) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::String(s) => js_string(s),
		Value::Array(items) => {
			let items: Vec<String> = items.iter().map(js_literal).collect();
			format!("[{}]", items.join(", "))
		}
		Value::Object(map) => {
			let members: Vec<String> = map
				.iter()
				.map(|(key, value)| {
					let key = if is_identifier(key) {
						key.clone()
					} else {
						js_string(key)
					};
					format!("{key}: {}", js_literal(value))
				})
				.collect();
			format!("{{{}}}", members.join(", "))
		}
	}
}

fn js_string(s: &str) -> String {
	let mut out = String::with_capacity(s.len() + 2);
	out.push('\'');
	for c in s.chars() {
		match c {
			'\\' => out.push_str("\\\\"),
			'\'' => out.push_str("\\'"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			c => out.push(c),
		}
	}
	out.push('\'');
	out
}

fn is_identifier(key: &str) -> bool {
	let mut chars = key.chars();
	chars
		.next()
		.is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
