//! Checkbox

use altar_core::page::{Page, PageElement};

use crate::component::{Component, Directives, ElementId, Props, WithProps, compose};
use crate::icons::{Icon, IconKind};

const INPUT_CLASS: &str = "peer cursor-pointer appearance-none border-input dark:bg-input/30 checked:bg-primary checked:text-primary-foreground dark:checked:bg-primary checked:border-primary focus-visible:border-ring focus-visible:ring-ring/50 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive size-4 shrink-0 rounded-[4px] border shadow-xs transition-shadow outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50";

/// A native checkbox styled with a check mark overlay
///
/// All props go to the inner `<input type="checkbox">`.
#[derive(Debug, Clone, Default)]
pub struct Checkbox {
	props: Props,
}

crate::impl_builder!(Checkbox);

impl Checkbox {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for Checkbox {
	fn data_slot(&self) -> &'static str {
		"checkbox"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "checkbox");
		let mut input = PageElement::new("input")
			.attr("type", "checkbox")
			.attr("data-slot", "checkbox");
		id.apply(&mut input);
		let input = compose(input, INPUT_CLASS, Directives::new(), self.props);

		let indicator = Icon::new(IconKind::Check)
			.data("slot", "checkbox-indicator")
			.class("pointer-events-none invisible absolute inset-0 peer-checked:text-primary-foreground peer-checked:transition-none peer-checked:visible size-4");

		Page::Element(
			PageElement::new("div")
				.attr("class", "peer relative inline-flex items-center")
				.child(input)
				.child(indicator),
		)
	}
}

crate::impl_into_page!(Checkbox);
