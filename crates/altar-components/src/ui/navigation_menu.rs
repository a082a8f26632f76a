//! Navigation menu
//!
//! A list of items, each either a plain [`NavigationMenuLink`] or a
//! [`NavigationMenuTrigger`] that opens a [`NavigationMenuContent`] panel.
//! The list tracks the open item in `selectedNavItem`; each item exposes its
//! id as `item_id` to the trigger and panel inside it.

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};
use serde_json::Value;

use crate::component::{Component, Directives, ElementId, Props, WithProps, compose};
use crate::icons::{Icon, IconKind};

const TRIGGER_CLASS: &str = "group inline-flex h-9 w-max items-center justify-center rounded-md bg-background px-4 py-2 text-sm font-medium hover:bg-accent hover:text-accent-foreground focus:bg-accent focus:text-accent-foreground disabled:pointer-events-none disabled:opacity-50 focus-visible:ring-ring/50 outline-none transition-[color,box-shadow] focus-visible:ring-[3px] focus-visible:outline-1";

/// Navigation root
///
/// With the mobile view enabled it also holds `mobileMenuState`, closed on
/// clicks outside the menu.
#[derive(Debug, Clone, Default)]
pub struct NavigationMenu {
	enable_mobile_view: bool,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(NavigationMenu, children);

impl NavigationMenu {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn enable_mobile_view(mut self, enable: bool) -> Self {
		self.enable_mobile_view = enable;
		self
	}
}

impl Component for NavigationMenu {
	fn data_slot(&self) -> &'static str {
		"navigation-menu"
	}

	fn render(self) -> Page {
		let mut element = PageElement::new("nav").attr("data-slot", "navigation-menu");
		let mut directives = Directives::new();
		if self.enable_mobile_view {
			directives = directives.data(
				AlpineData::new()
					.entry("mobileMenuState", false)
					.entry(
						"closeMobileMenu()",
						Statement::definition("{ this.mobileMenuState = false }"),
					)
					.entry(
						"toggleMobileMenuState()",
						Statement::definition("{ this.mobileMenuState = !this.mobileMenuState }"),
					),
			);
			element = element.attr("@click.away", "closeMobileMenu()");
		}
		Page::Element(compose(
			element.children(self.children),
			"relative flex max-w-max flex-1 items-center justify-center",
			directives,
			self.props,
		))
	}
}

crate::impl_into_page!(NavigationMenu);

/// Row of items holding `selectedNavItem`
#[derive(Debug, Clone, Default)]
pub struct NavigationMenuList {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(NavigationMenuList, children);

impl NavigationMenuList {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for NavigationMenuList {
	fn data_slot(&self) -> &'static str {
		"navigation-menu-list"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("selectedNavItem", "")
			.entry(
				"isNavItemActive(value)",
				Statement::definition("{ if (this.selectedNavItem === value) { return true } else { return false } }"),
			)
			.entry(
				"toggleNavItemActive(value)",
				Statement::definition("{ this.selectedNavItem = (this.isNavItemActive(value)) ? '' : value }"),
			);
		let element = PageElement::new("div")
			.attr("data-slot", "navigation-menu-list")
			.children(self.children);
		Page::Element(compose(
			element,
			"group flex flex-1 list-none items-center justify-center gap-1",
			Directives::new().data(data),
			self.props,
		))
	}
}

crate::impl_into_page!(NavigationMenuList);

/// One entry of a [`NavigationMenuList`]
#[derive(Debug, Clone, Default)]
pub struct NavigationMenuItem {
	disabled: bool,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(NavigationMenuItem, children);

impl NavigationMenuItem {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

impl Component for NavigationMenuItem {
	fn data_slot(&self) -> &'static str {
		"navigation-menu-item"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "navigation-menu-item");
		let data = AlpineData::new()
			.entry("item_disabled", self.disabled)
			.entry("item_id", id.to_alpine());
		let element = PageElement::new("div")
			.attr("data-slot", "navigation-menu-item")
			.attr(":class", "{ 'pointer-events-none opacity-50': item_disabled }")
			.children(self.children);
		Page::Element(compose(element, "relative", Directives::new().data(data), self.props))
	}
}

crate::impl_into_page!(NavigationMenuItem);

/// Button opening the item's [`NavigationMenuContent`]
///
/// A chevron is appended after the children.
#[derive(Debug, Clone, Default)]
pub struct NavigationMenuTrigger {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(NavigationMenuTrigger, children);

impl NavigationMenuTrigger {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for NavigationMenuTrigger {
	fn data_slot(&self) -> &'static str {
		"navigation-menu-trigger"
	}

	fn render(self) -> Page {
		let chevron = Icon::new(IconKind::ChevronDown)
			.class("relative top-[1px] ml-1 size-3 transition duration-300")
			.bind("class", "{ 'rotate-180': isNavItemActive(item_id) }");
		let element = PageElement::new("button")
			.attr("data-slot", "navigation-menu-trigger")
			.attr("type", "button")
			.attr("role", "navigation-menu")
			.attr("@click", "toggleNavItemActive(item_id)")
			.attr(
				":class",
				"{ 'hover:bg-accent text-accent-foreground focus:bg-accent bg-accent/50': isNavItemActive(item_id) }",
			)
			.attr(":disabled", "item_disabled")
			.children(self.children)
			.child(chevron);
		Page::Element(compose(element, TRIGGER_CLASS, Directives::new(), self.props))
	}
}

crate::impl_into_page!(NavigationMenuTrigger);

/// Panel shown while its item is the selected one
#[derive(Debug, Clone, Default)]
pub struct NavigationMenuContent {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(NavigationMenuContent, children);

impl NavigationMenuContent {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for NavigationMenuContent {
	fn data_slot(&self) -> &'static str {
		"navigation-menu-content"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("data-slot", "navigation-menu-content")
			.attr("x-show", "isNavItemActive(item_id)")
			.flag("x-cloak", true)
			.flag("x-collapse", true)
			.attr("x-transition:enter", "animate-in zoom-in-95 fade-in-0")
			.attr("x-transition:leave", "animate-out zoom-out-95 fade-out-0")
			.children(self.children);
		Page::Element(compose(
			element,
			"absolute top-full left-0 isolate z-50 flex justify-center bg-popover text-popover-foreground mt-1.5 overflow-hidden rounded-md border shadow duration-200 **:data-[slot=navigation-menu-link]:focus:ring-0 **:data-[slot=navigation-menu-link]:focus:outline-none",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(NavigationMenuContent);

const LINK_CLASS: &str = "focus:bg-accent focus:text-accent-foreground focus-visible:ring-ring/50 focus-visible:ring-[3px] focus-visible:outline-1 [&_svg:not([class*='text-'])]:text-muted-foreground flex flex-col gap-1 rounded-sm p-2 text-sm transition-all outline-none [&_svg:not([class*='size-'])]:size-4";

const ACTIVE_LINK_CLASS: &str = "data-[active=true]:focus:bg-accent data-[active=true]:hover:bg-accent data-[active=true]:bg-accent/50 data-[active=true]:text-accent-foreground hover:bg-accent hover:text-accent-foreground";

/// Anchor inside a navigation menu
///
/// `active` is `None` for links that never show an active state. With
/// `as_trigger` the link is styled like a [`NavigationMenuTrigger`].
#[derive(Debug, Clone, Default)]
pub struct NavigationMenuLink {
	active: Option<bool>,
	as_trigger: bool,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(NavigationMenuLink, children);

impl NavigationMenuLink {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn active(mut self, active: impl Into<Option<bool>>) -> Self {
		self.active = active.into();
		self
	}

	pub fn as_trigger(mut self, as_trigger: bool) -> Self {
		self.as_trigger = as_trigger;
		self
	}

	pub fn href(self, href: impl Into<std::borrow::Cow<'static, str>>) -> Self {
		self.attr("href", href)
	}
}

impl Component for NavigationMenuLink {
	fn data_slot(&self) -> &'static str {
		"navigation-menu-link"
	}

	fn render(self) -> Page {
		let mut base_class = LINK_CLASS.to_owned();
		if self.active.is_some() {
			base_class.push(' ');
			base_class.push_str(ACTIVE_LINK_CLASS);
		}
		if self.as_trigger {
			base_class.push(' ');
			base_class.push_str(TRIGGER_CLASS);
		}
		let active = self.active.map_or(Value::Null, Value::Bool);
		let element = PageElement::new("a")
			.attr("data-slot", "navigation-menu-link")
			.attr(":aria-current", "isActive ? 'page' : undefined")
			.attr(":data-active", "isActive")
			.attr(":disabled", "item_disabled")
			.children(self.children);
		Page::Element(compose(
			element,
			&base_class,
			Directives::new().data(AlpineData::new().entry("isActive", active)),
			self.props,
		))
	}
}

crate::impl_into_page!(NavigationMenuLink);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::WithChildren;
	use altar_core::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	#[case(false, None)]
	#[case(true, Some("closeMobileMenu()"))]
	fn test_navigation_menu_mobile_view(#[case] mobile: bool, #[case] click_away: Option<&str>) {
		let page = NavigationMenu::new().enable_mobile_view(mobile).into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.tag_name(), "nav");
		assert_eq!(el.get_attr("@click.away"), click_away);
		assert_eq!(el.has_attr("x-data"), mobile);
	}

	#[rstest]
	fn test_navigation_menu_item_scopes_id() {
		let page = NavigationMenuItem::new().disabled(true).into_page();
		assert_eq!(
			page.as_element().and_then(|el| el.get_attr("x-data")),
			Some("{item_disabled: true, item_id: $id('navigation-menu-item')}")
		);

		let page = NavigationMenuItem::new().id("Getting Started").into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("x-data"), Some("{item_disabled: false, item_id: 'getting-started'}"));
		assert!(!el.has_attr("id"));
	}

	#[rstest]
	fn test_navigation_menu_trigger_appends_chevron() {
		let page = NavigationMenuTrigger::new().child("Components").into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("@click"), Some("toggleNavItemActive(item_id)"));
		assert_eq!(el.get_attr(":disabled"), Some("item_disabled"));
		let children = el.child_views();
		assert_eq!(children.len(), 2);
		let chevron = children[1].as_element().unwrap();
		assert_eq!(chevron.get_attr(":class"), Some("{ 'rotate-180': isNavItemActive(item_id) }"));
	}

	#[rstest]
	fn test_navigation_menu_content() {
		let html = NavigationMenuContent::new().into_page().render_to_string();
		assert!(html.contains("x-show=\"isNavItemActive(item_id)\" x-cloak x-collapse"));
	}

	#[rstest]
	#[case(None, "{isActive: null}", false)]
	#[case(Some(true), "{isActive: true}", true)]
	fn test_navigation_menu_link(#[case] active: Option<bool>, #[case] data: &str, #[case] styled: bool) {
		let page = NavigationMenuLink::new().active(active).href("/docs").child("Docs").into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.tag_name(), "a");
		assert_eq!(el.get_attr("x-data"), Some(data));
		assert_eq!(el.get_attr("href"), Some("/docs"));
		assert_eq!(
			el.get_attr("class").unwrap().contains("data-[active=true]:bg-accent/50"),
			styled
		);
	}

	#[rstest]
	fn test_navigation_menu_link_as_trigger() {
		let page = NavigationMenuLink::new().as_trigger(true).into_page();
		let class = page.as_element().and_then(|el| el.get_attr("class")).unwrap();
		assert!(class.contains("w-max"));
		assert!(class.contains("rounded-md"));
	}
}
