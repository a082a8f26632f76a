//! Radio group

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::AlpineData;

use crate::component::{Component, Directives, ElementId, Props, WithProps, compose};
use crate::icons::{Icon, IconKind};

const ITEM_CLASS: &str = "peer cursor-pointer appearance-none border-input text-primary focus-visible:border-ring focus-visible:ring-ring/50 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive dark:bg-input/30 aspect-square size-4 shrink-0 rounded-full border shadow-xs transition-[color,box-shadow] outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50";

/// Group of radio items sharing `selectedRadioItem`
#[derive(Debug, Clone)]
pub struct RadioGroup {
	default_value: String,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(RadioGroup, children);

impl RadioGroup {
	pub fn new(default_value: impl Into<String>) -> Self {
		Self {
			default_value: default_value.into(),
			props: Props::new(),
			children: Vec::new(),
		}
	}
}

impl Component for RadioGroup {
	fn data_slot(&self) -> &'static str {
		"radio-group"
	}

	fn render(self) -> Page {
		let mut element = PageElement::new("div").attr("data-slot", "radio-group");
		if self.props.contains("x-modelable") {
			element.set_attr("x-model", "selectedRadioItem");
		}
		element = element.children(self.children);
		Page::Element(compose(
			element,
			"grid gap-3",
			Directives::new().data(AlpineData::new().entry("selectedRadioItem", self.default_value)),
			self.props,
		))
	}
}

crate::impl_into_page!(RadioGroup);

/// One option of a [`RadioGroup`]
///
/// Props go to the inner `<input type="radio">`, named `radio-group` unless
/// the caller sets `name`.
#[derive(Debug, Clone)]
pub struct RadioGroupItem {
	value: String,
	props: Props,
}

crate::impl_builder!(RadioGroupItem);

impl RadioGroupItem {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			props: Props::new(),
		}
	}
}

impl Component for RadioGroupItem {
	fn data_slot(&self) -> &'static str {
		"radio-group-item"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "radio-group-item");
		let name = self
			.props
			.take_text("name")
			.unwrap_or_else(|| "radio-group".to_owned());

		let mut input = PageElement::new("input")
			.attr("type", "radio")
			.attr("data-slot", "radio-group-item")
			.attr("name", name)
			.attr("value", self.value)
			.attr("x-model", "selectedRadioItem");
		id.apply(&mut input);
		let input = compose(input, ITEM_CLASS, Directives::new(), self.props);

		let indicator = Icon::new(IconKind::Circle)
			.data("slot", "radio-group-indicator")
			.class("pointer-events-none invisible absolute top-1/2 left-1/2 size-2 -translate-x-1/2 -translate-y-1/2 fill-primary peer-checked:visible");

		Page::Element(
			PageElement::new("div")
				.attr("class", "peer relative inline-flex items-center justify-center")
				.child(input)
				.child(indicator),
		)
	}
}

crate::impl_into_page!(RadioGroupItem);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::WithChildren;
	use altar_core::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	fn test_radio_group() {
		let html = RadioGroup::new("comfortable")
			.child(RadioGroupItem::new("default").id("r1"))
			.child(RadioGroupItem::new("comfortable").id("r2"))
			.into_page()
			.render_to_string();
		assert!(html.starts_with(
			"<div data-slot=\"radio-group\" class=\"grid gap-3\" x-data=\"{selectedRadioItem: 'comfortable'}\">"
		));
		assert!(html.contains(
			"<input type=\"radio\" data-slot=\"radio-group-item\" name=\"radio-group\" value=\"default\" x-model=\"selectedRadioItem\" id=\"r1\""
		));
		assert!(html.contains("data-slot=\"radio-group-indicator\""));
	}

	#[rstest]
	fn test_radio_group_modelable() {
		let page = RadioGroup::new("a").flag("x-modelable", true).into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("x-model"), Some("selectedRadioItem"));
		assert!(el.has_attr("x-modelable"));
	}

	#[rstest]
	fn test_radio_item_name_and_id() {
		let page = RadioGroupItem::new("x").name("plan").into_page();
		let input = page.as_element().unwrap().child_views()[0].as_element().unwrap();
		assert_eq!(input.get_attr("name"), Some("plan"));
		assert_eq!(input.get_attr(":id"), Some("$id('radio-group-item')"));
	}
}
