//! Accordion: vertically stacked sections that expand one at a time or
//! independently
//!
//! Every [`AccordionItem`] stores its id in `item_id`; triggers and content
//! panels read it from the enclosing scope to toggle and label themselves.

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};
use serde_json::json;

use crate::component::{Component, Directives, ElementId, Props, WithProps, compose};
use crate::icons::{Icon, IconKind};

/// Whether several items may be open at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionType {
	#[default]
	Single,
	Multiple,
}

impl AccordionType {
	fn data(&self) -> AlpineData {
		match self {
			Self::Single => AlpineData::new()
				.entry("activeAccordion", "")
				.entry(
					"isActive(id)",
					Statement::definition("{ return this.activeAccordion === id }"),
				)
				.entry(
					"toggleActiveAccordionState(id)",
					Statement::definition("{ this.activeAccordion = (this.isActive(id)) ? '' : id }"),
				),
			Self::Multiple => AlpineData::new()
				.entry("activeAccordions", json!([]))
				.entry(
					"isActive(id)",
					Statement::definition("{ return this.activeAccordions.includes(id) }"),
				)
				.entry(
					"toggleActiveAccordionState(id)",
					Statement::definition(
						"{ this.isActive(id) ? this.activeAccordions = this.activeAccordions.filter(i => i !== id) : this.activeAccordions.push(id) }",
					),
				),
		}
	}
}

/// Accordion root
#[derive(Debug, Clone, Default)]
pub struct Accordion {
	kind: AccordionType,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Accordion, children);

impl Accordion {
	pub fn new(kind: AccordionType) -> Self {
		Self {
			kind,
			..Self::default()
		}
	}
}

impl Component for Accordion {
	fn data_slot(&self) -> &'static str {
		"accordion"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("data-slot", "accordion")
			.children(self.children);
		Page::Element(compose(
			element,
			"",
			Directives::new().data(self.kind.data()),
			self.props,
		))
	}
}

crate::impl_into_page!(Accordion);

/// One section; `id` (or `:id`) names it, otherwise a unique id is generated
#[derive(Debug, Clone, Default)]
pub struct AccordionItem {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(AccordionItem, children);

impl AccordionItem {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for AccordionItem {
	fn data_slot(&self) -> &'static str {
		"accordion-item"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "accordion-item");
		let element = PageElement::new("div")
			.attr("data-slot", "accordion-item")
			.children(self.children);
		Page::Element(compose(
			element,
			"border-b last:border-b-0",
			Directives::new().data(AlpineData::new().entry("item_id", id.to_alpine())),
			self.props,
		))
	}
}

crate::impl_into_page!(AccordionItem);

/// Header button of an item
///
/// Props go to the inner `<button>`, which ends with a rotating chevron.
#[derive(Debug, Clone, Default)]
pub struct AccordionTrigger {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(AccordionTrigger, children);

impl AccordionTrigger {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for AccordionTrigger {
	fn data_slot(&self) -> &'static str {
		"accordion-trigger"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "accordion-trigger");
		let chevron = Icon::new(IconKind::ChevronDown)
			.class("text-muted-foreground transition-transform duration-200 translate-y-0.5 pointer-events-none size-4 shrink-0")
			.bind("class", "{ 'rotate-180': isActive(item_id) }");

		let button = PageElement::new("button")
			.attr("data-slot", "accordion-trigger")
			.attr("@click", "toggleActiveAccordionState(item_id)")
			.attr(":aria-controls", "item_id")
			.attr(":id", format!("`${{item_id}}-{}`", id.template_fragment()))
			.children(self.children)
			.child(chevron);
		let button = compose(
			button,
			"flex flex-1 gap-4 justify-between items-start py-4 font-medium text-left text-sm rounded-md outline-none transition-all disabled:opacity-50 disabled:pointer-events-none hover:underline focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]",
			Directives::new(),
			self.props,
		);
		Page::Element(PageElement::new("div").attr("class", "flex").child(button))
	}
}

crate::impl_into_page!(AccordionTrigger);

/// Collapsible body of an item
///
/// Props go to the inner padding `<div>`.
#[derive(Debug, Clone, Default)]
pub struct AccordionContent {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(AccordionContent, children);

impl AccordionContent {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for AccordionContent {
	fn data_slot(&self) -> &'static str {
		"accordion-content"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "accordion-content");
		let inner = compose(
			PageElement::new("div").children(self.children),
			"pt-0 pb-4",
			Directives::new(),
			self.props,
		);
		Page::Element(
			PageElement::new("div")
				.attr("class", "overflow-hidden text-sm")
				.attr("x-show", "isActive(item_id)")
				.flag("x-cloak", true)
				.flag("x-collapse", true)
				.attr("role", "region")
				.attr("data-slot", "accordion-content")
				.attr(":aria-labelledby", "item_id")
				.attr(":id", format!("`${{item_id}}-{}`", id.template_fragment()))
				.child(inner),
		)
	}
}

crate::impl_into_page!(AccordionContent);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::WithChildren;
	use altar_core::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	#[case(AccordionType::Single, "{activeAccordion: '', isActive(id) { return this.activeAccordion === id }")]
	#[case(AccordionType::Multiple, "{activeAccordions: [], isActive(id) { return this.activeAccordions.includes(id) }")]
	fn test_accordion_type_data(#[case] kind: AccordionType, #[case] prefix: &str) {
		let page = Accordion::new(kind).into_page();
		let x_data = page.as_element().and_then(|el| el.get_attr("x-data")).unwrap();
		assert!(x_data.starts_with(prefix), "{x_data}");
		assert!(x_data.contains("toggleActiveAccordionState(id) {"));
	}

	#[rstest]
	fn test_accordion_item_ids() {
		let generated = AccordionItem::new().into_page();
		assert_eq!(
			generated.as_element().and_then(|el| el.get_attr("x-data")),
			Some("{item_id: $id('accordion-item')}")
		);

		let named = AccordionItem::new().id("Item One").into_page();
		let el = named.as_element().unwrap();
		assert_eq!(el.get_attr("x-data"), Some("{item_id: 'item-one'}"));
		assert!(!el.has_attr("id"));
	}

	#[rstest]
	fn test_accordion_trigger() {
		let page = AccordionTrigger::new()
			.class("text-base")
			.child("Is it accessible?")
			.into_page();
		let wrapper = page.as_element().unwrap();
		assert_eq!(wrapper.get_attr("class"), Some("flex"));

		let button = wrapper.child_views()[0].as_element().unwrap();
		assert_eq!(button.get_attr("@click"), Some("toggleActiveAccordionState(item_id)"));
		assert_eq!(button.get_attr(":aria-controls"), Some("item_id"));
		assert_eq!(button.get_attr(":id"), Some("`${item_id}-${$id('accordion-trigger')}`"));
		assert!(button.get_attr("class").unwrap().ends_with("text-base"));
		assert!(!button.get_attr("class").unwrap().contains("text-sm"));

		let chevron = button.child_views()[1].as_element().unwrap();
		assert_eq!(chevron.get_attr(":class"), Some("{ 'rotate-180': isActive(item_id) }"));
	}

	#[rstest]
	fn test_accordion_content() {
		let html = AccordionContent::new()
			.id("answer")
			.class("pb-6")
			.child("Yes.")
			.into_page()
			.render_to_string();
		assert_eq!(
			html,
			"<div class=\"overflow-hidden text-sm\" x-show=\"isActive(item_id)\" x-cloak x-collapse role=\"region\" data-slot=\"accordion-content\" :aria-labelledby=\"item_id\" :id=\"`${item_id}-answer`\"><div class=\"pt-0 pb-6\">Yes.</div></div>"
		);
	}
}
