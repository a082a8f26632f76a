//! Tabs

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement, js_literal};
use serde_json::Value;

use crate::component::{Component, Directives, ElementId, Props, compose};

/// Tabs root holding the `selectedTab` value
#[derive(Debug, Clone)]
pub struct Tabs {
	default_value: String,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Tabs, children);

impl Tabs {
	pub fn new(default_value: impl Into<String>) -> Self {
		Self {
			default_value: default_value.into(),
			props: Props::new(),
			children: Vec::new(),
		}
	}
}

impl Component for Tabs {
	fn data_slot(&self) -> &'static str {
		"tabs"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("selectedTab", self.default_value)
			.entry(
				"isTabActive(value)",
				Statement::definition("{ if (this.selectedTab === value) { return true } else { return false } }"),
			)
			.entry(
				"setTabActive(value)",
				Statement::definition("{ this.selectedTab = value }"),
			);
		let element = PageElement::new("div")
			.attr("data-slot", "tabs")
			.children(self.children);
		Page::Element(compose(
			element,
			"flex flex-col gap-2",
			Directives::new().data(data),
			self.props,
		))
	}
}

crate::impl_into_page!(Tabs);

/// Row of [`TabsTrigger`]s with arrow-key navigation
#[derive(Debug, Clone, Default)]
pub struct TabsList {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(TabsList, children);

impl TabsList {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for TabsList {
	fn data_slot(&self) -> &'static str {
		"tabs-list"
	}

	fn render(self) -> Page {
		for child in &self.children {
			if let Some(el) = child.as_element()
				&& el.get_attr("data-slot") == Some("tabs-trigger")
				&& el.get_attr("value").is_none_or(str::is_empty)
			{
				tracing::warn!("tab trigger without a value in tabs list");
			}
		}
		let element = PageElement::new("div")
			.attr("data-slot", "tabs-list")
			.attr("role", "tablist")
			.attr("@keydown.right.prevent", "$focus.wrap().next()")
			.attr("@keydown.left.prevent", "$focus.wrap().previous()")
			.children(self.children);
		Page::Element(compose(
			element,
			"bg-muted text-muted-foreground inline-flex h-9 w-fit items-center justify-center rounded-lg p-[3px]",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(TabsList);

const TRIGGER_CLASS: &str = "focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:outline-ring text-foreground dark:text-muted-foreground inline-flex h-[calc(100%-1px)] flex-1 items-center justify-center gap-1.5 rounded-md border border-transparent px-2 py-1 text-sm font-medium whitespace-nowrap transition-[color,box-shadow] focus-visible:ring-[3px] focus-visible:outline-1 disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:shrink-0 [&_svg:not([class*='size-'])]:size-4";

/// Button selecting the tab named `value`
#[derive(Debug, Clone)]
pub struct TabsTrigger {
	value: String,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(TabsTrigger, children);

impl TabsTrigger {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			props: Props::new(),
			children: Vec::new(),
		}
	}
}

impl Component for TabsTrigger {
	fn data_slot(&self) -> &'static str {
		"tabs-trigger"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "tabs-trigger");
		let value = js_literal(&Value::String(self.value.clone()));
		let mut element = PageElement::new("button")
			.attr("data-slot", "tabs-trigger")
			.attr("value", self.value);
		id.apply(&mut element);
		let element = element
			.attr("type", "button")
			.attr("role", "tab")
			.attr("@click", format!("setTabActive({value})"))
			.attr(
				":class",
				format!("{{ 'bg-background dark:text-foreground dark:border-input dark:bg-input/30 shadow-sm': isTabActive({value})}}"),
			)
			.attr(":aria-selected", format!("isTabActive({value})"))
			.attr(":tabindex", format!("isTabActive({value}) ? '0' : '-1'"))
			.children(self.children);
		Page::Element(compose(element, TRIGGER_CLASS, Directives::new(), self.props))
	}
}

crate::impl_into_page!(TabsTrigger);

/// Panel shown while the tab named `value` is selected
#[derive(Debug, Clone)]
pub struct TabsContent {
	value: String,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(TabsContent, children);

impl TabsContent {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			props: Props::new(),
			children: Vec::new(),
		}
	}
}

impl Component for TabsContent {
	fn data_slot(&self) -> &'static str {
		"tabs-content"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "tabs-content");
		let value = js_literal(&Value::String(self.value));
		let mut element = PageElement::new("div")
			.attr("data-slot", "tabs-content")
			.attr("x-show", format!("isTabActive({value})"));
		id.apply(&mut element);
		let element = element.attr("role", "tabpanel").children(self.children);
		Page::Element(compose(element, "flex-1 outline-none", Directives::new(), self.props))
	}
}

crate::impl_into_page!(TabsContent);
