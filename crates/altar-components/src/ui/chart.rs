//! Chart.js charts
//!
//! [`Chart`] renders a `<canvas>` and the Alpine.js data that builds a
//! Chart.js instance from a [`ChartConfig`] once the component is mounted.
//! String values of the form `var(--name)` or `var(--name) / 0.5` are
//! resolved against the document's CSS custom properties on the client, so
//! theme colors can be used directly in datasets.
//!
//! Chart.js itself is not bundled; the page must load it.

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::component::{Component, Directives, Props, compose};
use crate::error::Result;

/// Chart.js chart type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
	#[default]
	Bar,
	Line,
	Pie,
	Doughnut,
	Radar,
	PolarArea,
	Bubble,
	Scatter,
}

/// One dataset of a chart
///
/// Styling keys Chart.js understands (`backgroundColor`, `borderColor`,
/// `tension`, ...) are kept in `extra` and serialized alongside `label` and
/// `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	#[serde(default)]
	pub data: Vec<Value>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl ChartDataset {
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: Some(label.into()),
			..Self::default()
		}
	}

	pub fn data<T: Into<Value>>(mut self, data: impl IntoIterator<Item = T>) -> Self {
		self.data = data.into_iter().map(Into::into).collect();
		self
	}

	/// Sets a Chart.js dataset option such as `backgroundColor`.
	pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}
}

/// Labels and datasets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
	#[serde(default)]
	pub labels: Vec<String>,
	#[serde(default)]
	pub datasets: Vec<ChartDataset>,
}

/// Chart.js configuration object
///
/// Deserializes from the same shape it serializes to, so configurations can
/// be kept in JSON or TOML files:
///
/// ```
/// use altar_components::ui::chart::{ChartConfig, ChartType};
///
/// let config: ChartConfig = toml::from_str(r#"
///     type = "line"
///
///     [data]
///     labels = ["Jan", "Feb"]
///
///     [[data.datasets]]
///     label = "Visitors"
///     data = [186, 305]
///     borderColor = "var(--chart-1)"
/// "#).unwrap();
/// assert_eq!(config.kind, ChartType::Line);
/// assert_eq!(config.data.datasets[0].extra["borderColor"], "var(--chart-1)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
	#[serde(rename = "type")]
	pub kind: ChartType,
	#[serde(default)]
	pub data: ChartData,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub options: Option<Value>,
}

impl ChartConfig {
	pub fn new(kind: ChartType) -> Self {
		Self {
			kind,
			..Self::default()
		}
	}

	pub fn labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
		self.data.labels = labels.into_iter().map(Into::into).collect();
		self
	}

	pub fn dataset(mut self, dataset: ChartDataset) -> Self {
		self.data.datasets.push(dataset);
		self
	}

	pub fn options(mut self, options: Value) -> Self {
		self.options = Some(options);
		self
	}
}

const RESOLVE_CSS_VARIABLES: &str = r"{
	if (typeof raw_config !== 'object' || raw_config === null) return raw_config;
	if (Array.isArray(raw_config)) {
		return raw_config.map(item => this.__resolveCSSVariablesFromConfig(item));
	}
	const resolved_config = {};
	for (const [key, value] of Object.entries(raw_config)) {
		if (typeof value === 'string' && value.includes('var(--')) {
			const match = value.match(/var\((--[^)]+)\)(?:\s*\/\s*([\d.]+))?/);
			if (!match) {
				resolved_config[key] = value;
				continue;
			}
			const opacity = match[2] ? parseFloat(match[2]) : 1;
			let color = getComputedStyle(document.documentElement).getPropertyValue(match[1]).trim();
			if (opacity < 1) {
				if (color.includes('oklch')) {
					const m = color.match(/oklch\(([\d.]+%?)\s+([\d.]+)\s+([\d.]+)\)/);
					if (m) color = `oklch(${m[1]} ${m[2]} ${m[3]} / ${opacity})`;
				} else if (color.includes('hsl')) {
					const m = color.match(/hsl\(([\d.]+)\s+([\d.]+)%\s+([\d.]+)%\)/);
					if (m) color = `hsla(${m[1]} ${m[2]}% ${m[3]}% / ${opacity})`;
				} else if (color.includes('rgb')) {
					const m = color.match(/rgb\(([\d.]+)\s+([\d.]+)\s+([\d.]+)\)/);
					if (m) color = `rgba(${m[1]} ${m[2]} ${m[3]} / ${opacity})`;
				} else if (color.startsWith('#')) {
					const hex = color.slice(1);
					const r = parseInt(hex.slice(0, 2), 16);
					const g = parseInt(hex.slice(2, 4), 16);
					const b = parseInt(hex.slice(4, 6), 16);
					color = `rgba(${r}, ${g}, ${b}, ${opacity})`;
				}
			}
			resolved_config[key] = color;
		} else if (typeof value === 'object') {
			resolved_config[key] = this.__resolveCSSVariablesFromConfig(value);
		} else {
			resolved_config[key] = value;
		}
	}
	return resolved_config;
}";

const INIT_CHART: &str = "{ const canvas = this.$refs.canvas; if (canvas && typeof Chart !== 'undefined') { this.chart_instance = new Chart(canvas.getContext('2d'), this.__resolveCSSVariablesFromConfig(this.chart_config)); } }";

const DESTROY_CHART: &str =
	"{ if (this.chart_instance) { this.chart_instance.destroy(); this.chart_instance = null; } }";

/// A Chart.js chart drawn on a full-size canvas
#[derive(Debug, Clone)]
pub struct Chart {
	config_json: String,
	props: Props,
}

crate::impl_builder!(Chart);

impl Chart {
	/// Serializes `config` for the client.
	pub fn new(config: ChartConfig) -> Result<Self> {
		let config_json = serde_json::to_string(&config)?;
		tracing::debug!(kind = ?config.kind, datasets = config.data.datasets.len(), "chart configured");
		Ok(Self {
			config_json,
			props: Props::new(),
		})
	}
}

impl Component for Chart {
	fn data_slot(&self) -> &'static str {
		"chart"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("chart_instance", Value::Null)
			.entry("chart_config", Statement::assignment(self.config_json))
			.entry(
				"__resolveCSSVariablesFromConfig(raw_config)",
				Statement::definition(RESOLVE_CSS_VARIABLES),
			)
			.entry("initChart()", Statement::definition(INIT_CHART))
			.entry("destroyChart()", Statement::definition(DESTROY_CHART));
		let init = AlpineData::new().entry(
			"initialize_chart",
			Statement::instance("$nextTick(() => initChart())"),
		);
		let canvas = PageElement::new("canvas")
			.attr("class", "w-full h-full")
			.attr("data-slot", "chart-canvas")
			.attr("x-ref", "canvas");
		let element = PageElement::new("div")
			.attr("data-slot", "chart")
			.child(canvas);
		Page::Element(compose(
			element,
			"relative w-full",
			Directives::new().data(data).init(init),
			self.props,
		))
	}
}

crate::impl_into_page!(Chart);
