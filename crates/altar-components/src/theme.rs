//! Theme system for customizing component appearance
//!
//! Components only reference semantic Tailwind colors (`bg-primary`,
//! `text-muted-foreground`, `border-input`, ...). A [`Theme`] supplies the CSS
//! variables behind those colors for the light and the `.dark` scheme.
//!
//! Themes can be loaded from TOML or JSON files that override any subset of
//! the defaults:
//!
//! ```toml
//! radius = "0.5rem"
//!
//! [light]
//! primary = "oklch(0.55 0.2 260)"
//!
//! [dark]
//! primary = "oklch(0.7 0.15 260)"
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! palette {
	($($field:ident => $var:literal),+ $(,)?) => {
		/// Semantic color variables of one color scheme
		#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
		pub struct Palette {
			$(
				#[serde(rename = $var)]
				pub $field: String,
			)+
		}

		impl Palette {
			/// Returns `(variable name, value)` pairs in declaration order
			pub fn variables(&self) -> Vec<(&'static str, &str)> {
				vec![$(($var, self.$field.as_str())),+]
			}

			/// Sets a variable by name. Returns `false` for unknown names.
			pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
				match name {
					$($var => self.$field = value.into(),)+
					_ => return false,
				}
				true
			}
		}
	};
}

palette! {
	background => "background",
	foreground => "foreground",
	card => "card",
	card_foreground => "card-foreground",
	popover => "popover",
	popover_foreground => "popover-foreground",
	primary => "primary",
	primary_foreground => "primary-foreground",
	secondary => "secondary",
	secondary_foreground => "secondary-foreground",
	muted => "muted",
	muted_foreground => "muted-foreground",
	accent => "accent",
	accent_foreground => "accent-foreground",
	destructive => "destructive",
	border => "border",
	input => "input",
	ring => "ring",
	chart_1 => "chart-1",
	chart_2 => "chart-2",
	chart_3 => "chart-3",
	chart_4 => "chart-4",
	chart_5 => "chart-5",
	sidebar => "sidebar",
	sidebar_foreground => "sidebar-foreground",
	sidebar_primary => "sidebar-primary",
	sidebar_primary_foreground => "sidebar-primary-foreground",
	sidebar_accent => "sidebar-accent",
	sidebar_accent_foreground => "sidebar-accent-foreground",
	sidebar_border => "sidebar-border",
	sidebar_ring => "sidebar-ring",
}

impl Palette {
	/// Neutral light scheme
	pub fn light() -> Self {
		Self {
			background: "oklch(1 0 0)".into(),
			foreground: "oklch(0.145 0 0)".into(),
			card: "oklch(1 0 0)".into(),
			card_foreground: "oklch(0.145 0 0)".into(),
			popover: "oklch(1 0 0)".into(),
			popover_foreground: "oklch(0.145 0 0)".into(),
			primary: "oklch(0.205 0 0)".into(),
			primary_foreground: "oklch(0.985 0 0)".into(),
			secondary: "oklch(0.97 0 0)".into(),
			secondary_foreground: "oklch(0.205 0 0)".into(),
			muted: "oklch(0.97 0 0)".into(),
			muted_foreground: "oklch(0.556 0 0)".into(),
			accent: "oklch(0.97 0 0)".into(),
			accent_foreground: "oklch(0.205 0 0)".into(),
			destructive: "oklch(0.577 0.245 27.325)".into(),
			border: "oklch(0.922 0 0)".into(),
			input: "oklch(0.922 0 0)".into(),
			ring: "oklch(0.708 0 0)".into(),
			chart_1: "oklch(0.646 0.222 41.116)".into(),
			chart_2: "oklch(0.6 0.118 184.704)".into(),
			chart_3: "oklch(0.398 0.07 227.392)".into(),
			chart_4: "oklch(0.828 0.189 84.429)".into(),
			chart_5: "oklch(0.769 0.188 70.08)".into(),
			sidebar: "oklch(0.985 0 0)".into(),
			sidebar_foreground: "oklch(0.145 0 0)".into(),
			sidebar_primary: "oklch(0.205 0 0)".into(),
			sidebar_primary_foreground: "oklch(0.985 0 0)".into(),
			sidebar_accent: "oklch(0.97 0 0)".into(),
			sidebar_accent_foreground: "oklch(0.205 0 0)".into(),
			sidebar_border: "oklch(0.922 0 0)".into(),
			sidebar_ring: "oklch(0.708 0 0)".into(),
		}
	}

	/// Neutral dark scheme
	pub fn dark() -> Self {
		Self {
			background: "oklch(0.145 0 0)".into(),
			foreground: "oklch(0.985 0 0)".into(),
			card: "oklch(0.205 0 0)".into(),
			card_foreground: "oklch(0.985 0 0)".into(),
			popover: "oklch(0.205 0 0)".into(),
			popover_foreground: "oklch(0.985 0 0)".into(),
			primary: "oklch(0.922 0 0)".into(),
			primary_foreground: "oklch(0.205 0 0)".into(),
			secondary: "oklch(0.269 0 0)".into(),
			secondary_foreground: "oklch(0.985 0 0)".into(),
			muted: "oklch(0.269 0 0)".into(),
			muted_foreground: "oklch(0.708 0 0)".into(),
			accent: "oklch(0.269 0 0)".into(),
			accent_foreground: "oklch(0.985 0 0)".into(),
			destructive: "oklch(0.704 0.191 22.216)".into(),
			border: "oklch(1 0 0 / 10%)".into(),
			input: "oklch(1 0 0 / 15%)".into(),
			ring: "oklch(0.556 0 0)".into(),
			chart_1: "oklch(0.488 0.243 264.376)".into(),
			chart_2: "oklch(0.696 0.17 162.48)".into(),
			chart_3: "oklch(0.769 0.188 70.08)".into(),
			chart_4: "oklch(0.627 0.265 303.9)".into(),
			chart_5: "oklch(0.645 0.246 16.439)".into(),
			sidebar: "oklch(0.205 0 0)".into(),
			sidebar_foreground: "oklch(0.985 0 0)".into(),
			sidebar_primary: "oklch(0.488 0.243 264.376)".into(),
			sidebar_primary_foreground: "oklch(0.985 0 0)".into(),
			sidebar_accent: "oklch(0.269 0 0)".into(),
			sidebar_accent_foreground: "oklch(0.985 0 0)".into(),
			sidebar_border: "oklch(1 0 0 / 10%)".into(),
			sidebar_ring: "oklch(0.556 0 0)".into(),
		}
	}

	fn write_block(&self, selector: &str, extra: &[(&str, &str)], out: &mut String) {
		out.push_str(selector);
		out.push_str(" {\n");
		for (name, value) in extra.iter().copied().chain(self.variables()) {
			out.push_str("  --");
			out.push_str(name);
			out.push_str(": ");
			out.push_str(value);
			out.push_str(";\n");
		}
		out.push_str("}\n");
	}
}

/// Theme configuration
///
/// Defines the color schemes, corner radius and sidebar dimensions the
/// components are styled against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Theme {
	/// Base corner radius (`--radius`)
	pub radius: String,
	/// Expanded sidebar width (`--sidebar-width`)
	pub sidebar_width: String,
	/// Sidebar width when collapsed to icons (`--sidebar-width-icon`)
	pub sidebar_width_icon: String,
	/// Sidebar width on small screens (`--sidebar-width-mobile`)
	pub sidebar_width_mobile: String,
	/// Light color scheme (`:root`)
	pub light: Palette,
	/// Dark color scheme (`.dark`)
	pub dark: Palette,
}

/// Error type for theme loading
#[derive(Debug, Error)]
pub enum ThemeError {
	#[error("File error: {0}")]
	FileError(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

/// On-disk shape of a theme: every value is an optional override.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct ThemeFile {
	radius: Option<String>,
	sidebar_width: Option<String>,
	sidebar_width_icon: Option<String>,
	sidebar_width_mobile: Option<String>,
	light: BTreeMap<String, String>,
	dark: BTreeMap<String, String>,
}

impl Theme {
	/// Create the default neutral theme
	pub fn default_theme() -> Self {
		Self {
			radius: "0.625rem".into(),
			sidebar_width: "16rem".into(),
			sidebar_width_icon: "3rem".into(),
			sidebar_width_mobile: "18rem".into(),
			light: Palette::light(),
			dark: Palette::dark(),
		}
	}

	/// Load a theme from a `.toml` or `.json` file
	///
	/// Values missing from the file keep their defaults.
	pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ThemeError> {
		let path = path.into();
		let contents = std::fs::read_to_string(&path).map_err(|e| {
			ThemeError::FileError(format!("Failed to read {}: {}", path.display(), e))
		})?;

		let file: ThemeFile = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => toml::from_str(&contents)
				.map_err(|e| ThemeError::ParseError(format!("TOML parse error: {}", e)))?,
			Some("json") => serde_json::from_str(&contents)
				.map_err(|e| ThemeError::ParseError(format!("JSON parse error: {}", e)))?,
			_ => {
				return Err(ThemeError::UnsupportedFormat(
					"Supported formats: .toml, .json".to_string(),
				));
			}
		};

		let theme = Self::default_theme().apply(file)?;
		tracing::debug!(path = %path.display(), "loaded theme");
		Ok(theme)
	}

	fn apply(mut self, file: ThemeFile) -> Result<Self, ThemeError> {
		if let Some(radius) = file.radius {
			self.radius = radius;
		}
		if let Some(width) = file.sidebar_width {
			self.sidebar_width = width;
		}
		if let Some(width) = file.sidebar_width_icon {
			self.sidebar_width_icon = width;
		}
		if let Some(width) = file.sidebar_width_mobile {
			self.sidebar_width_mobile = width;
		}
		for (scheme, overrides, palette) in [
			("light", file.light, &mut self.light),
			("dark", file.dark, &mut self.dark),
		] {
			for (name, value) in overrides {
				if !palette.set(&name, value) {
					return Err(ThemeError::ParseError(format!(
						"Unknown color variable `{name}` in [{scheme}]"
					)));
				}
			}
		}
		Ok(self)
	}

	/// Convert theme to CSS variables
	pub fn to_css_variables(&self) -> String {
		let mut css = String::new();
		self.light.write_block(
			":root",
			&[
				("radius", self.radius.as_str()),
				("sidebar-width", self.sidebar_width.as_str()),
				("sidebar-width-icon", self.sidebar_width_icon.as_str()),
				("sidebar-width-mobile", self.sidebar_width_mobile.as_str()),
			],
			&mut css,
		);
		self.dark.write_block(".dark", &[], &mut css);
		css
	}

	/// Convert theme to a complete stylesheet
	///
	/// Adds the `[x-cloak]` rule that hides Alpine.js-controlled elements until
	/// the runtime has initialized them.
	pub fn stylesheet(&self) -> String {
		format!(
			"[x-cloak] {{\n  display: none !important;\n}}\n{}",
			self.to_css_variables()
		)
	}

	/// Builder method for the corner radius
	pub fn radius(mut self, radius: impl Into<String>) -> Self {
		self.radius = radius.into();
		self
	}

	/// Builder method for the expanded sidebar width
	pub fn sidebar_width(mut self, width: impl Into<String>) -> Self {
		self.sidebar_width = width.into();
		self
	}

	/// Builder method for the light color scheme
	pub fn light(mut self, palette: Palette) -> Self {
		self.light = palette;
		self
	}

	/// Builder method for the dark color scheme
	pub fn dark(mut self, palette: Palette) -> Self {
		self.dark = palette;
		self
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}
