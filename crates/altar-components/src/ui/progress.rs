//! Progress bar

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};

use crate::component::{Component, Directives, Props, compose};

/// A horizontal bar filled to `currentValue` within `[minValue, maxValue]`
///
/// The three values live in `x-data`, so callers can drive the bar from
/// Alpine by assigning `currentValue`.
#[derive(Debug, Clone)]
pub struct Progress {
	min: i64,
	max: i64,
	current: Option<i64>,
	props: Props,
}

crate::impl_builder!(Progress);

impl Progress {
	pub fn new(min: i64, max: i64) -> Self {
		Self {
			min,
			max,
			current: None,
			props: Props::new(),
		}
	}

	pub fn current(mut self, current: i64) -> Self {
		self.current = Some(current);
		self
	}
}

impl Component for Progress {
	fn data_slot(&self) -> &'static str {
		"progress"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("currentValue", self.current.unwrap_or(self.min))
			.entry("minValue", self.min)
			.entry("maxValue", self.max)
			.entry(
				"calcPercentage(min, max, val)",
				Statement::definition("{ return ((val-min)/(max-min))*100 }"),
			);

		let indicator = PageElement::new("div")
			.attr("data-slot", "progress-indicator")
			.attr("class", "flex-1 w-full h-full bg-primary transition-all")
			.attr(
				":style",
				"{ transform: `translateX(-${100 - calcPercentage(minValue, maxValue, currentValue)}%)` }",
			);

		let element = PageElement::new("div")
			.attr("data-slot", "progress")
			.attr("role", "progressbar")
			.attr(":aria-valuenow", "currentValue")
			.attr(":aria-valuemin", "minValue")
			.attr(":aria-valuemax", "maxValue")
			.child(indicator);
		Page::Element(compose(
			element,
			"bg-primary/20 relative h-2 w-full overflow-hidden rounded-full",
			Directives::new().data(data),
			self.props,
		))
	}
}

crate::impl_into_page!(Progress);
