//! Separator

use altar_core::page::{Page, PageElement};

use crate::component::{Component, Directives, Orientation, Props, compose};

const BASE_CLASS: &str = "bg-border shrink-0 data-[orientation=horizontal]:h-px data-[orientation=horizontal]:w-full data-[orientation=vertical]:h-full data-[orientation=vertical]:w-px";

/// A thin horizontal or vertical rule
#[derive(Debug, Clone)]
pub struct Separator {
	orientation: Orientation,
	decorative: bool,
	props: Props,
}

crate::impl_builder!(Separator);

impl Default for Separator {
	fn default() -> Self {
		Self {
			orientation: Orientation::default(),
			decorative: true,
			props: Props::new(),
		}
	}
}

impl Separator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn orientation(mut self, orientation: Orientation) -> Self {
		self.orientation = orientation;
		self
	}

	pub fn decorative(mut self, decorative: bool) -> Self {
		self.decorative = decorative;
		self
	}
}

impl Component for Separator {
	fn data_slot(&self) -> &'static str {
		"separator-root"
	}

	fn render(self) -> Page {
		let orientation = self.orientation.as_str();
		let element = PageElement::new("div")
			.attr("data-slot", "separator-root")
			.attr("data-orientation", orientation)
			.attr("role", if self.decorative { "separator" } else { "none" })
			.attr("aria-orientation", orientation);
		Page::Element(compose(element, BASE_CLASS, Directives::new(), self.props))
	}
}

crate::impl_into_page!(Separator);
