//! Collapsible: a panel toggled by a trigger button

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};

use crate::component::{Component, Directives, Props, compose};

/// Collapsible root holding `isOpen` and `isDisabled`
#[derive(Debug, Clone, Default)]
pub struct Collapsible {
	default_open: bool,
	disabled: bool,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Collapsible, children);

impl Collapsible {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn default_open(mut self, open: bool) -> Self {
		self.default_open = open;
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

impl Component for Collapsible {
	fn data_slot(&self) -> &'static str {
		"collapsible"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("isOpen", self.default_open)
			.entry("isDisabled", self.disabled)
			.entry(
				"toggleCollapsibleState()",
				Statement::definition("{ if (this.isDisabled === false) { this.isOpen = !this.isOpen } }"),
			);
		let element = PageElement::new("div")
			.attr("data-slot", "collapsible")
			.children(self.children);
		Page::Element(compose(element, "", Directives::new().data(data), self.props))
	}
}

crate::impl_into_page!(Collapsible);

trigger! {
	/// Button toggling the enclosing [`Collapsible`]
	CollapsibleTrigger, slot = "collapsible-trigger",
	attrs = [
		"@click" => "toggleCollapsibleState()",
		":aria-expanded" => "isOpen",
		":disabled" => "isDisabled",
	],
}

container! {
	/// Panel shown while the collapsible is open and enabled
	CollapsibleContent: "div", slot = "collapsible-content", class = "",
	attrs = ["x-show" => "isOpen && ! isDisabled"],
}
