//! Switch

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Directive};

use crate::component::{Component, Directives, ElementId, Props, compose};

const THUMB_CLASS: &str = "inline-flex items-center w-8 h-[1.15rem] rounded-full border border-transparent outline-none shadow-xs transition-all appearance-none cursor-pointer peer shrink-0 disabled:opacity-50 disabled:cursor-not-allowed focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]";

/// A two-state toggle
///
/// The state lives in `checked` and is submitted through a hidden input named
/// after the caller's `name` (`toggle-switch` by default). Classes and other
/// attributes go to the toggle button; `x-data` goes to the wrapper.
#[derive(Debug, Clone, Default)]
pub struct Switch {
	default_value: bool,
	disabled: bool,
	props: Props,
}

crate::impl_builder!(Switch);

impl Switch {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn default_value(mut self, checked: bool) -> Self {
		self.default_value = checked;
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

impl Component for Switch {
	fn data_slot(&self) -> &'static str {
		"switch-thumb"
	}

	fn render(mut self) -> Page {
		let caller_data = self.props.take_directive(Directive::Data);
		let id = ElementId::resolve(&mut self.props, "switch");
		let name = self
			.props
			.take_text("name")
			.unwrap_or_else(|| "toggle-switch".to_owned());
		let modelable = self.props.contains("x-modelable");

		let hidden = PageElement::new("input")
			.attr("type", "hidden")
			.attr("name", name)
			.attr("x-model", "checked")
			.flag("disabled", self.disabled);

		let knob = PageElement::new("span")
			.attr("class", "block bg-background rounded-full ring-0 transition-transform pointer-events-none size-4")
			.attr(
				":class",
				"{ 'dark:bg-primary-foreground translate-x-[calc(100%-2px)]': checked, 'dark:bg-foreground translate-x-0': !checked }",
			)
			.attr("aria-hidden", "true");

		let mut thumb = PageElement::new("button")
			.attr("type", "button")
			.attr("data-slot", "switch-thumb")
			.flag("disabled", self.disabled);
		if modelable {
			thumb.set_attr("x-model", "checked");
		}
		id.apply(&mut thumb);
		thumb.set_attr("@click", "checked = !checked");
		thumb.set_attr(
			":class",
			"{ 'bg-primary': checked, 'bg-input dark:bg-input/80': !checked }",
		);
		thumb.add_child(knob);
		let thumb = compose(thumb, THUMB_CLASS, Directives::new(), self.props);

		let mut wrapper = Props::new();
		if let Some(data) = caller_data {
			wrapper.merge_directive(Directive::Data, data);
		}
		Page::Element(compose(
			PageElement::new("div").child(hidden).child(thumb),
			"inline-flex relative items-center peer",
			Directives::new().data(AlpineData::new().entry("checked", self.default_value)),
			wrapper,
		))
	}
}

crate::impl_into_page!(Switch);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::WithProps;
	use altar_core::page::IntoPage;
	use rstest::rstest;

	fn parts(page: &Page) -> (&PageElement, &PageElement, &PageElement) {
		let wrapper = page.as_element().unwrap();
		let hidden = wrapper.child_views()[0].as_element().unwrap();
		let thumb = wrapper.child_views()[1].as_element().unwrap();
		(wrapper, hidden, thumb)
	}

	#[rstest]
	fn test_switch_defaults() {
		let page = Switch::new().into_page();
		let (wrapper, hidden, thumb) = parts(&page);
		assert_eq!(wrapper.get_attr("x-data"), Some("{checked: false}"));
		assert_eq!(hidden.get_attr("name"), Some("toggle-switch"));
		assert_eq!(hidden.get_attr("x-model"), Some("checked"));
		assert_eq!(thumb.get_attr(":id"), Some("$id('switch')"));
		assert_eq!(thumb.get_attr("@click"), Some("checked = !checked"));
		assert!(!thumb.has_attr("disabled"));
		assert!(!thumb.has_attr("x-model"));
	}

	#[rstest]
	fn test_switch_options() {
		let page = Switch::new()
			.default_value(true)
			.disabled(true)
			.name("airplane-mode")
			.id("airplane-mode")
			.flag("x-modelable", true)
			.class("w-10")
			.into_page();
		let (wrapper, hidden, thumb) = parts(&page);
		assert_eq!(wrapper.get_attr("x-data"), Some("{checked: true}"));
		assert_eq!(hidden.get_attr("name"), Some("airplane-mode"));
		assert!(hidden.has_attr("disabled"));
		assert!(thumb.has_attr("disabled"));
		assert_eq!(thumb.get_attr("x-model"), Some("checked"));
		assert_eq!(thumb.get_attr("id"), Some("airplane-mode"));
		let class = thumb.get_attr("class").unwrap();
		assert!(class.ends_with("w-10"));
		assert!(!class.contains("w-8"));
	}
}
