//! Collapsible application sidebar
//!
//! [`SidebarProvider`] lays out a [`Sidebar`] next to the main content and
//! owns the open state. Above the small-screen breakpoint the sidebar sits
//! in the page flow and collapses in place; below it the sidebar becomes an
//! off-canvas sheet over a backdrop. The provider needs the Alpine.js resize
//! plugin for `x-resize`.
//!
//! Widths come from the `--sidebar-width` and `--sidebar-width-icon` CSS
//! variables, see [`Theme`](crate::theme::Theme).

use altar_core::page::{IntoPage, Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};
use altar_core::plugins::tailwind::tw_merge;
use serde_json::Value;

use crate::component::{
	Component, Directives, ElementId, Props, WithChildren, WithProps, compose, describe,
	single_element,
};
use crate::error::{ComponentError, Result};
use crate::icons::{Icon, IconKind};
use crate::responsive::Breakpoint;
use crate::ui::button::{Button, ButtonSize, ButtonVariant};
use crate::ui::passthrough::merge_into;

/// Layout wrapper owning the sidebar state
///
/// Takes exactly the [`Sidebar`] and one `<div>` or `<main>` element as the
/// inset, usually a [`SidebarInset`].
#[derive(Debug, Clone)]
pub struct SidebarProvider {
	sidebar: Sidebar,
	inset: PageElement,
	breakpoint: Breakpoint,
	props: Props,
}

crate::impl_builder!(SidebarProvider);

impl SidebarProvider {
	pub fn new(sidebar: Sidebar, inset: impl IntoPage) -> Result<Self> {
		let inset = single_element("SidebarProvider", inset)?;
		if !matches!(inset.tag_name(), "div" | "main") {
			return Err(ComponentError::InvalidChild {
				component: "SidebarProvider",
				expected: "a <div> or <main> inset",
				found: describe(&Page::Element(inset)),
			});
		}
		Ok(Self {
			sidebar,
			inset,
			breakpoint: Breakpoint::Md,
			props: Props::new(),
		})
	}

	/// Viewports narrower than `breakpoint` get the off-canvas sidebar.
	pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
		self.breakpoint = breakpoint;
		self
	}
}

impl Component for SidebarProvider {
	fn data_slot(&self) -> &'static str {
		"sidebar-wrapper"
	}

	fn render(self) -> Page {
		let below = self.breakpoint.below_expression();
		let data = AlpineData::new()
			.entry("smallScreenViewport", Statement::assignment(below.clone()))
			.entry("isSidebarOpen", true)
			.entry("isSidebarForSmallScreenViewportOpen", false)
			.entry(
				"closeSidebarForSmallScreenViewport()",
				Statement::definition("{ this.isSidebarForSmallScreenViewportOpen = false }"),
			)
			.entry(
				"getSidebarState()",
				Statement::definition("{ return this.isSidebarOpen ? 'expanded' : 'collapsed' }"),
			)
			.entry(
				"toggleSidebarState()",
				Statement::definition(
					"{ if (this.smallScreenViewport) { this.isSidebarForSmallScreenViewportOpen = !this.isSidebarForSmallScreenViewportOpen } else { this.isSidebarOpen = !this.isSidebarOpen } }",
				),
			);
		let element = PageElement::new("div")
			.attr("data-slot", "sidebar-wrapper")
			.attr("x-resize.window", format!("smallScreenViewport = {below}"))
			.child(self.sidebar)
			.child(self.inset);
		Page::Element(compose(
			element,
			"flex w-full min-h-svh group/sidebar-wrapper has-data-[variant=inset]:bg-sidebar",
			Directives::new().data(data),
			self.props,
		))
	}
}

crate::impl_into_page!(SidebarProvider);

/// Ghost icon button toggling the sidebar
#[derive(Debug, Clone, Default)]
pub struct SidebarTrigger {
	props: Props,
}

crate::impl_builder!(SidebarTrigger);

impl SidebarTrigger {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for SidebarTrigger {
	fn data_slot(&self) -> &'static str {
		"sidebar-trigger"
	}

	fn render(self) -> Page {
		Button::new()
			.variant(ButtonVariant::Ghost)
			.size(ButtonSize::Icon)
			.class("size-7")
			.attr("type", "button")
			.data("sidebar", "trigger")
			.data("slot", "sidebar-trigger")
			.on("click", "toggleSidebarState()")
			.with_props(self.props)
			.child(Icon::new(IconKind::PanelLeft))
			.child(PageElement::new("span").attr("class", "sr-only").child("Toggle Sidebar"))
			.render()
	}
}

crate::impl_into_page!(SidebarTrigger);

/// Edge of the viewport the sidebar is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarSide {
	#[default]
	Left,
	Right,
}

impl SidebarSide {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Left => "left",
			Self::Right => "right",
		}
	}
}

/// Visual style of the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarVariant {
	#[default]
	Sidebar,
	Floating,
	Inset,
}

impl SidebarVariant {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Sidebar => "sidebar",
			Self::Floating => "floating",
			Self::Inset => "inset",
		}
	}
}

/// What happens to a collapsed sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarCollapsible {
	/// Slides out of the viewport
	#[default]
	Offcanvas,
	/// Shrinks to an icon rail
	Icon,
	/// Never collapses
	None,
}

impl SidebarCollapsible {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Offcanvas => "offcanvas",
			Self::Icon => "icon",
			Self::None => "none",
		}
	}
}

/// The sidebar panel
///
/// Children are rendered twice, once in the off-canvas sheet and once in the
/// desktop container. Classes go to the inner panel of both; other props go
/// to both `<aside>` containers.
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
	side: SidebarSide,
	variant: SidebarVariant,
	collapsible: SidebarCollapsible,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Sidebar, children);

impl Sidebar {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn side(mut self, side: SidebarSide) -> Self {
		self.side = side;
		self
	}

	pub fn variant(mut self, variant: SidebarVariant) -> Self {
		self.variant = variant;
		self
	}

	pub fn collapsible(mut self, collapsible: SidebarCollapsible) -> Self {
		self.collapsible = collapsible;
		self
	}

	fn mobile_sheet(&self, container_props: Props, inner_class: &str) -> PageElement {
		let (edge, hidden) = match self.side {
			SidebarSide::Left => ("left-0 border-r", "-translate-x-full"),
			SidebarSide::Right => ("right-0 border-l", "translate-x-full"),
		};
		let backdrop = PageElement::new("div")
			.attr("class", "fixed inset-0 z-40 bg-sidebar-foreground/50 backdrop-blur-sm")
			.flag("x-cloak", true)
			.attr("x-show", "isSidebarForSmallScreenViewportOpen")
			.attr("@click", "closeSidebarForSmallScreenViewport()")
			.flag("x-transition.opacity", true);
		let inner = PageElement::new("div")
			.attr("class", tw_merge(["flex flex-col w-full h-full", inner_class]))
			.attr("data-sidebar", "sidebar")
			.attr("data-slot", "sidebar-inner")
			.children(self.children.clone());
		let container = compose(
			PageElement::new("aside")
				.attr("data-slot", "sidebar-container")
				.attr(
					":class",
					format!(
						"{{ 'translate-x-0': isSidebarForSmallScreenViewportOpen, '{hidden}': !isSidebarForSmallScreenViewportOpen }}"
					),
				)
				.child(inner),
			&format!(
				"fixed top-0 bottom-0 z-50 flex h-full w-[var(--sidebar-width)] flex-col border-outline bg-sidebar text-sidebar-foreground p-0 [&>button]:hidden transition-transform duration-300 {edge}"
			),
			Directives::new(),
			container_props,
		);
		PageElement::new("div").attr("x-show", "smallScreenViewport").child(
			PageElement::new("div")
				.attr("x-show", "isSidebarForSmallScreenViewportOpen")
				.flag("x-cloak", true)
				.child(backdrop)
				.child(container),
		)
	}

	fn desktop_panel(&self, container_props: Props, inner_class: &str) -> PageElement {
		let side_class = match self.side {
			SidebarSide::Left => {
				"left-0 group-data-[collapsible=offcanvas]:left-[calc(var(--sidebar-width)*-1)]"
			}
			SidebarSide::Right => {
				"right-0 group-data-[collapsible=offcanvas]:right-[calc(var(--sidebar-width)*-1)]"
			}
		};
		let (variant_class, gap_class) = match self.variant {
			SidebarVariant::Sidebar => (
				"group-data-[collapsible=icon]:w-[var(--sidebar-width-icon)] group-data-[side=left]:border-r group-data-[side=right]:border-l",
				"group-data-[collapsible=icon]:w-[var(--sidebar-width-icon)]",
			),
			SidebarVariant::Floating | SidebarVariant::Inset => (
				"p-2 group-data-[collapsible=icon]:w-[calc(var(--sidebar-width-icon)+(--spacing(4))+2px)]",
				"group-data-[collapsible=icon]:w-[calc(var(--sidebar-width-icon)+(--spacing(4)))]",
			),
		};
		let gap = PageElement::new("div").attr("data-slot", "sidebar-gap").attr(
			"class",
			tw_merge([
				"relative w-[var(--sidebar-width)] bg-transparent transition-[width] duration-200 ease-linear group-data-[collapsible=offcanvas]:w-0 group-data-[side=right]:rotate-180",
				gap_class,
			]),
		);
		let inner = PageElement::new("div")
			.attr("data-sidebar", "sidebar")
			.attr("data-slot", "sidebar-inner")
			.attr(
				"class",
				tw_merge([
					"flex flex-col w-full h-full bg-sidebar group-data-[variant=floating]:border-sidebar-border group-data-[variant=floating]:rounded-lg group-data-[variant=floating]:border group-data-[variant=floating]:shadow-sm",
					inner_class,
				]),
			)
			.children(self.children.clone());
		let container = compose(
			PageElement::new("aside")
				.attr("data-slot", "sidebar-container")
				.child(inner),
			&format!(
				"fixed inset-y-0 z-10 hidden h-svh w-[var(--sidebar-width)] transition-[left,right,width] duration-200 ease-linear md:flex {side_class} {variant_class}"
			),
			Directives::new(),
			container_props,
		);
		PageElement::new("div")
			.attr("x-show", "!smallScreenViewport")
			.child(PageElement::new("div").child(gap).child(container))
	}
}

impl Component for Sidebar {
	fn data_slot(&self) -> &'static str {
		"sidebar"
	}

	fn render(mut self) -> Page {
		let inner_class = self.props.take_class().unwrap_or_default();
		let container_props = std::mem::take(&mut self.props);
		let side = self.side.as_str();
		let variant = self.variant.as_str();
		let collapsible = self.collapsible.as_str();

		let mobile = self.mobile_sheet(container_props.clone(), &inner_class);
		let desktop = self.desktop_panel(container_props, &inner_class);
		Page::Element(
			PageElement::new("div")
				.attr("data-slot", "sidebar")
				.attr("data-sidebar", "sidebar")
				.attr(
					":class",
					"!smallScreenViewport ? 'group peer text-sidebar-foreground hidden md:block' : undefined",
				)
				.attr(":data-state", "!smallScreenViewport ? getSidebarState() : undefined")
				.attr(":data-side", format!("!smallScreenViewport ? '{side}' : undefined"))
				.attr(":data-variant", format!("!smallScreenViewport ? '{variant}' : undefined"))
				.attr(
					":data-collapsible",
					format!(
						"!smallScreenViewport ? (getSidebarState() === 'collapsed' ? '{collapsible}' : '') : undefined"
					),
				)
				.attr(":data-mobile", "smallScreenViewport ? true : undefined")
				.child(mobile)
				.child(desktop),
		)
	}
}

crate::impl_into_page!(Sidebar);

container! {
	/// Main content next to the sidebar
	SidebarInset: "main", slot = "sidebar-inset",
	class = "bg-background relative flex w-full flex-1 flex-col md:peer-data-[variant=inset]:m-2 md:peer-data-[variant=inset]:ml-0 md:peer-data-[variant=inset]:rounded-xl md:peer-data-[variant=inset]:shadow-sm md:peer-data-[state=collapsed]:peer-data-[variant=inset]:ml-2",
}

container! {
	/// Top section of the sidebar
	SidebarHeader: "div", slot = "sidebar-header",
	class = "flex flex-col gap-2 p-2 group-data-[collapsible=icon]:overflow-hidden",
	attrs = ["data-sidebar" => "header"],
}

/// Scrolling middle section tracking the active menu item
#[derive(Debug, Clone, Default)]
pub struct SidebarContent {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(SidebarContent, children);

impl SidebarContent {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for SidebarContent {
	fn data_slot(&self) -> &'static str {
		"sidebar-content"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("data-slot", "sidebar-content")
			.attr("data-sidebar", "content")
			.children(self.children);
		Page::Element(compose(
			element,
			"flex flex-1 flex-col overflow-auto gap-2 min-h-0 group-data-[collapsible=icon]:overflow-hidden",
			Directives::new().data(AlpineData::new().entry("currentActiveMenuItem", Value::Null)),
			self.props,
		))
	}
}

crate::impl_into_page!(SidebarContent);

container! {
	/// Bottom section of the sidebar
	SidebarFooter: "div", slot = "sidebar-footer",
	class = "flex flex-col gap-2 p-2",
	attrs = ["data-sidebar" => "footer"],
}

/// Horizontal rule between sidebar sections
#[derive(Debug, Clone, Default)]
pub struct SidebarSeparator {
	props: Props,
}

crate::impl_builder!(SidebarSeparator);

impl SidebarSeparator {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for SidebarSeparator {
	fn data_slot(&self) -> &'static str {
		"sidebar-separator"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("role", "separator")
			.attr("aria-orientation", "horizontal")
			.attr("data-slot", "sidebar-separator")
			.attr("data-sidebar", "separator");
		Page::Element(compose(element, "mx-2 w-auto h-px bg-sidebar-border", Directives::new(), self.props))
	}
}

crate::impl_into_page!(SidebarSeparator);

container! {
	SidebarGroup: "div", slot = "sidebar-group",
	class = "flex flex-col relative p-2 w-full min-w-0",
	attrs = ["data-sidebar" => "group"],
}

const GROUP_LABEL_CLASS: &str = "flex items-center px-2 h-8 font-medium text-sidebar-foreground/70 text-xs rounded-md outline-hidden ring-sidebar-ring transition-[margin,opacity] duration-200 ease-linear shrink-0 group-data-[collapsible=icon]:-mt-8 group-data-[collapsible=icon]:opacity-0 focus-visible:ring-2 [&>svg]:size-4 [&>svg]:shrink-0";

/// Heading of a [`SidebarGroup`]
#[derive(Debug, Clone, Default)]
pub struct SidebarGroupLabel {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(SidebarGroupLabel, children);

impl SidebarGroupLabel {
	pub fn new() -> Self {
		Self::default()
	}

	fn into_element(self) -> PageElement {
		let element = PageElement::new("div")
			.attr("data-slot", "sidebar-group-label")
			.attr("data-sidebar", "group-label")
			.children(self.children);
		compose(element, GROUP_LABEL_CLASS, Directives::new(), self.props)
	}

	/// Renders `child` in place of the label `<div>`, carrying its attributes.
	pub fn as_child(self, child: impl IntoPage) -> Result<Page> {
		merge_into(self.into_element(), child).map(Page::Element)
	}
}

impl Component for SidebarGroupLabel {
	fn data_slot(&self) -> &'static str {
		"sidebar-group-label"
	}

	fn render(self) -> Page {
		Page::Element(self.into_element())
	}
}

crate::impl_into_page!(SidebarGroupLabel);

container! {
	SidebarGroupContent: "div", slot = "sidebar-group-content",
	class = "w-full text-sm",
	attrs = ["data-sidebar" => "group-content"],
}

/// List of [`SidebarMenuItem`]s inside a `<nav>`
///
/// Props go to the `<ul>`.
#[derive(Debug, Clone, Default)]
pub struct SidebarMenu {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(SidebarMenu, children);

impl SidebarMenu {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for SidebarMenu {
	fn data_slot(&self) -> &'static str {
		"sidebar-menu"
	}

	fn render(self) -> Page {
		let list = PageElement::new("ul")
			.attr("data-slot", "sidebar-menu")
			.attr("data-sidebar", "menu")
			.children(self.children);
		let list = compose(list, "flex flex-col gap-1 w-full min-w-0", Directives::new(), self.props);
		Page::Element(
			PageElement::new("nav")
				.attr("data-slot", "sidebar-navigation")
				.attr("data-sidebar", "navigation")
				.child(list),
		)
	}
}

crate::impl_into_page!(SidebarMenu);

/// Entry of a [`SidebarMenu`]
///
/// Each item has an id (`sidebarMenuItem`) compared against the content's
/// `currentActiveMenuItem`; `is_active` makes it the active one on init.
#[derive(Debug, Clone, Default)]
pub struct SidebarMenuItem {
	is_active: bool,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(SidebarMenuItem, children);

impl SidebarMenuItem {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_active(mut self, active: bool) -> Self {
		self.is_active = active;
		self
	}
}

impl Component for SidebarMenuItem {
	fn data_slot(&self) -> &'static str {
		"sidebar-menu-item"
	}

	fn render(mut self) -> Page {
		let id = ElementId::resolve(&mut self.props, "sidebar-menu-item");
		let mut data = AlpineData::new()
			.entry("sidebarMenuItem", id.to_alpine())
			.entry(
				"setActive()",
				Statement::definition("{ currentActiveMenuItem = this.sidebarMenuItem }"),
			)
			.entry(
				"isItemActive()",
				Statement::definition(
					"{ if (currentActiveMenuItem === this.sidebarMenuItem) {return true} else {return null} }",
				),
			);
		if self.is_active {
			data = data.entry(
				"init()",
				Statement::definition("{ currentActiveMenuItem = this.sidebarMenuItem }"),
			);
		}
		let element = PageElement::new("li")
			.attr("data-slot", "sidebar-menu-item")
			.attr("data-sidebar", "menu-item")
			.children(self.children);
		Page::Element(compose(
			element,
			"relative group/menu-item",
			Directives::new().data(data),
			self.props,
		))
	}
}

crate::impl_into_page!(SidebarMenuItem);

/// Color variant of a [`SidebarMenuButton`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMenuButtonVariant {
	#[default]
	Default,
	Outline,
}

impl SidebarMenuButtonVariant {
	pub fn classes(&self) -> &'static str {
		match self {
			Self::Default => "hover:bg-sidebar-accent hover:text-sidebar-accent-foreground",
			Self::Outline => {
				"bg-background shadow-[0_0_0_1px_hsl(var(--sidebar-border))] hover:bg-sidebar-accent hover:text-sidebar-accent-foreground hover:shadow-[0_0_0_1px_hsl(var(--sidebar-accent))]"
			}
		}
	}
}

/// Height of a [`SidebarMenuButton`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarMenuButtonSize {
	#[default]
	Default,
	Sm,
	Lg,
}

impl SidebarMenuButtonSize {
	pub fn classes(&self) -> &'static str {
		match self {
			Self::Default => "h-8 text-sm group-data-[collapsible=icon]:p-2!",
			Self::Sm => "h-7 text-xs group-data-[collapsible=icon]:p-2!",
			Self::Lg => "h-12 text-sm group-data-[collapsible=icon]:p-0!",
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Sm => "sm",
			Self::Lg => "lg",
		}
	}
}

const MENU_BUTTON_CLASS: &str = "flex overflow-hidden gap-2 items-center p-2 w-full text-left text-sm rounded-md outline-hidden ring-sidebar-ring transition-[width,height,padding] peer/menu-button group-has-data-[sidebar=menu-action]/menu-item:pr-8 aria-disabled:pointer-events-none aria-disabled:opacity-50 data-[active]:bg-sidebar-accent data-[active]:font-medium data-[active]:text-sidebar-accent-foreground data-[state=open]:hover:bg-sidebar-accent data-[state=open]:hover:text-sidebar-accent-foreground group-data-[collapsible=icon]:size-8! [&>span:last-child]:truncate disabled:opacity-50 disabled:pointer-events-none hover:text-sidebar-accent-foreground hover:bg-sidebar-accent focus-visible:ring-2 active:text-sidebar-accent-foreground active:bg-sidebar-accent [&>svg]:size-4 [&>svg]:shrink-0";

/// Button of a [`SidebarMenuItem`]
///
/// With `has_active_state` a click marks the enclosing item active and the
/// button reflects it in `data-active`.
#[derive(Debug, Clone, Default)]
pub struct SidebarMenuButton {
	variant: SidebarMenuButtonVariant,
	size: SidebarMenuButtonSize,
	has_active_state: bool,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(SidebarMenuButton, children);

impl SidebarMenuButton {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn variant(mut self, variant: SidebarMenuButtonVariant) -> Self {
		self.variant = variant;
		self
	}

	pub fn size(mut self, size: SidebarMenuButtonSize) -> Self {
		self.size = size;
		self
	}

	pub fn has_active_state(mut self, has_active_state: bool) -> Self {
		self.has_active_state = has_active_state;
		self
	}

	fn into_element(self) -> PageElement {
		let base_class = format!(
			"{} {} {}",
			self.variant.classes(),
			self.size.classes(),
			MENU_BUTTON_CLASS
		);
		let mut element = PageElement::new("button")
			.attr("data-slot", "sidebar-menu-button")
			.attr("data-size", self.size.as_str())
			.attr("data-sidebar", "menu-button")
			.attr(":data-state", "isSidebarForSmallScreenViewportOpen");
		if self.has_active_state {
			element = element
				.attr(":data-active", "isItemActive()")
				.attr("@click", "setActive()");
		}
		compose(
			element.children(self.children),
			&base_class,
			Directives::new(),
			self.props,
		)
	}

	/// Renders `child` in place of the `<button>`, carrying its attributes.
	pub fn as_child(self, child: impl IntoPage) -> Result<Page> {
		merge_into(self.into_element(), child).map(Page::Element)
	}
}

impl Component for SidebarMenuButton {
	fn data_slot(&self) -> &'static str {
		"sidebar-menu-button"
	}

	fn render(self) -> Page {
		Page::Element(self.into_element())
	}
}

crate::impl_into_page!(SidebarMenuButton);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn layout() -> SidebarProvider {
		SidebarProvider::new(
			Sidebar::new().child(SidebarContent::new()),
			SidebarInset::new().child(SidebarTrigger::new()),
		)
		.unwrap()
	}

	#[rstest]
	fn test_provider_state() {
		let page = layout().into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("data-slot"), Some("sidebar-wrapper"));
		assert_eq!(el.get_attr("x-resize.window"), Some("smallScreenViewport = window.innerWidth < 768"));
		let data = el.get_attr("x-data").unwrap();
		assert!(data.starts_with("{smallScreenViewport: window.innerWidth < 768, isSidebarOpen: true, "));
		assert!(data.contains("'expanded' : 'collapsed'"));
		assert_eq!(el.child_views().len(), 2);
		assert_eq!(el.child_views()[1].as_element().map(PageElement::tag_name), Some("main"));
	}

	#[rstest]
	fn test_provider_breakpoint() {
		let page = layout().breakpoint(Breakpoint::Lg).into_page();
		assert_eq!(
			page.as_element().and_then(|el| el.get_attr("x-resize.window")),
			Some("smallScreenViewport = window.innerWidth < 1024")
		);
	}

	#[rstest]
	#[case(PageElement::new("div"))]
	#[case(PageElement::new("main"))]
	fn test_provider_accepts_inset(#[case] inset: PageElement) {
		assert!(SidebarProvider::new(Sidebar::new(), inset).is_ok());
	}

	#[rstest]
	fn test_provider_rejects_invalid_inset() {
		assert!(matches!(
			SidebarProvider::new(Sidebar::new(), PageElement::new("section")),
			Err(ComponentError::InvalidChild { component: "SidebarProvider", .. })
		));
		assert!(matches!(
			SidebarProvider::new(Sidebar::new(), (PageElement::new("div"), PageElement::new("main"))),
			Err(ComponentError::ChildCount { found: 2, .. })
		));
	}

	#[rstest]
	fn test_trigger() {
		let page = SidebarTrigger::new().into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("data-slot"), Some("sidebar-trigger"));
		assert_eq!(el.get_attr("data-sidebar"), Some("trigger"));
		assert_eq!(el.get_attr("@click"), Some("toggleSidebarState()"));
		assert!(el.get_attr("class").unwrap().ends_with("size-7"));
		assert!(page.render_to_string().contains("Toggle Sidebar"));
	}

	#[rstest]
	fn test_sidebar_state_bindings() {
		let page = Sidebar::new()
			.side(SidebarSide::Right)
			.variant(SidebarVariant::Floating)
			.collapsible(SidebarCollapsible::Icon)
			.into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr(":data-side"), Some("!smallScreenViewport ? 'right' : undefined"));
		assert_eq!(el.get_attr(":data-variant"), Some("!smallScreenViewport ? 'floating' : undefined"));
		assert_eq!(
			el.get_attr(":data-collapsible"),
			Some("!smallScreenViewport ? (getSidebarState() === 'collapsed' ? 'icon' : '') : undefined")
		);
	}

	#[rstest]
	fn test_sidebar_renders_children_in_both_containers() {
		let page = Sidebar::new()
			.class("border-none")
			.aria("label", "Main")
			.child(SidebarHeader::new().child("Acme"))
			.into_page();
		let html = page.render_to_string();
		assert_eq!(html.matches("data-slot=\"sidebar-header\"").count(), 2);
		assert_eq!(html.matches("aria-label=\"Main\"").count(), 2);
		assert_eq!(html.matches("data-slot=\"sidebar-container\"").count(), 2);

		let el = page.as_element().unwrap();
		assert!(!el.has_attr("aria-label"));
		let inner = page
			.find_element(&|e| e.get_attr("data-slot") == Some("sidebar-inner"))
			.unwrap();
		assert!(inner.get_attr("class").unwrap().ends_with("border-none"));
	}

	#[rstest]
	fn test_sidebar_mobile_sheet_slides_from_side() {
		let html = Sidebar::new().side(SidebarSide::Right).into_page().render_to_string();
		assert!(html.contains("'translate-x-full': !isSidebarForSmallScreenViewportOpen"));
		assert!(html.contains("right-0 border-l"));
	}

	#[rstest]
	fn test_sidebar_sections() {
		let page = SidebarContent::new().into_page();
		assert_eq!(
			page.as_element().and_then(|el| el.get_attr("x-data")),
			Some("{currentActiveMenuItem: null}")
		);

		let page = SidebarSeparator::new().into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("role"), Some("separator"));
		assert_eq!(el.get_attr("data-sidebar"), Some("separator"));

		let page = SidebarGroup::new().into_page();
		assert_eq!(page.as_element().and_then(|el| el.get_attr("data-sidebar")), Some("group"));
	}

	#[rstest]
	fn test_group_label_as_child() {
		let page = SidebarGroupLabel::new()
			.as_child(PageElement::new("h3").child("Projects"))
			.unwrap();
		let el = page.as_element().unwrap();
		assert_eq!(el.tag_name(), "h3");
		assert_eq!(el.get_attr("data-slot"), Some("sidebar-group-label"));
		assert!(el.get_attr("class").unwrap().starts_with("flex items-center"));
	}

	#[rstest]
	fn test_menu_wraps_list_in_nav() {
		let page = SidebarMenu::new().class("gap-2").child(SidebarMenuItem::new()).into_page();
		let nav = page.as_element().unwrap();
		assert_eq!(nav.tag_name(), "nav");
		let list = nav.child_views()[0].as_element().unwrap();
		assert_eq!(list.tag_name(), "ul");
		assert_eq!(list.get_attr("class"), Some("flex flex-col w-full min-w-0 gap-2"));
	}

	#[rstest]
	#[case(false, false)]
	#[case(true, true)]
	fn test_menu_item(#[case] active: bool, #[case] has_init: bool) {
		let page = SidebarMenuItem::new().is_active(active).into_page();
		let data = page.as_element().and_then(|el| el.get_attr("x-data")).unwrap().to_owned();
		assert!(data.starts_with("{sidebarMenuItem: $id('sidebar-menu-item'), setActive() {"));
		assert_eq!(data.contains("init() {"), has_init);
	}

	#[rstest]
	fn test_menu_button() {
		let page = SidebarMenuButton::new()
			.size(SidebarMenuButtonSize::Lg)
			.has_active_state(true)
			.child("Inbox")
			.into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("data-size"), Some("lg"));
		assert_eq!(el.get_attr(":data-active"), Some("isItemActive()"));
		assert_eq!(el.get_attr("@click"), Some("setActive()"));
		assert!(el.get_attr("class").unwrap().contains("h-12"));

		let page = SidebarMenuButton::new().into_page();
		assert!(!page.as_element().unwrap().has_attr("@click"));
	}

	#[rstest]
	fn test_menu_button_as_child() {
		let page = SidebarMenuButton::new()
			.has_active_state(true)
			.as_child(PageElement::new("a").attr("href", "/inbox").child("Inbox"))
			.unwrap();
		let el = page.as_element().unwrap();
		assert_eq!(el.tag_name(), "a");
		assert_eq!(el.get_attr("href"), Some("/inbox"));
		assert_eq!(el.get_attr("@click"), Some("setActive()"));
		assert_eq!(page.render_to_string().matches("Inbox").count(), 1);
	}
}
