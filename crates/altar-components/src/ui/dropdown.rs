//! Dropdown menu anchored to its trigger

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};

use crate::component::{Component, Directives, Props, compose};

/// Dropdown root holding `isOpen`
#[derive(Debug, Clone, Default)]
pub struct DropdownMenu {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(DropdownMenu, children);

impl DropdownMenu {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for DropdownMenu {
	fn data_slot(&self) -> &'static str {
		"dropdown-menu"
	}

	fn render(self) -> Page {
		let data = AlpineData::new().entry("isOpen", false).entry(
			"toggleDropdownMenu()",
			Statement::definition("{ this.isOpen = !this.isOpen }"),
		);
		let element = PageElement::new("div")
			.attr("data-slot", "dropdown-menu")
			.attr("@keydown.escape.window", "isOpen = false")
			.children(self.children);
		Page::Element(compose(element, "", Directives::new().data(data), self.props))
	}
}

crate::impl_into_page!(DropdownMenu);

trigger! {
	/// Button toggling the menu; the content anchors to it
	DropdownMenuTrigger, slot = "dropdown-menu-trigger",
	attrs = [
		"aria-haspopup" => "true",
		"x-ref" => "dropdownMenuTrigger",
		"@click" => "toggleDropdownMenu()",
		":aria-expanded" => "isOpen",
		"@keydown.space.prevent" => "toggleDropdownMenu()",
		"@keydown.enter.prevent" => "toggleDropdownMenu()",
	],
}

/// Side of the trigger the menu opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
	#[default]
	Bottom,
	Top,
	Left,
	Right,
}

impl Side {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Bottom => "bottom",
			Self::Top => "top",
			Self::Left => "left",
			Self::Right => "right",
		}
	}
}

/// Alignment of the menu along the chosen side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
	#[default]
	Start,
	End,
}

impl Align {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Start => "start",
			Self::End => "end",
		}
	}
}

const CONTENT_CLASS: &str = "overflow-x-hidden overflow-y-auto z-50 p-1 min-w-[8rem] max-h-[18rem] text-popover-foreground bg-popover rounded-md border shadow-md data-[side=bottom]:slide-in-from-top-2 data-[side=left]:slide-in-from-right-2 data-[side=right]:slide-in-from-left-2 data-[side=top]:slide-in-from-bottom-2";

/// The floating menu panel
#[derive(Debug, Clone)]
pub struct DropdownMenuContent {
	side: Side,
	align: Align,
	offset: u32,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(DropdownMenuContent, children);

impl Default for DropdownMenuContent {
	fn default() -> Self {
		Self {
			side: Side::default(),
			align: Align::default(),
			offset: 8,
			props: Props::new(),
			children: Vec::new(),
		}
	}
}

impl DropdownMenuContent {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn side(mut self, side: Side) -> Self {
		self.side = side;
		self
	}

	pub fn align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	/// Distance from the trigger in pixels
	pub fn offset(mut self, offset: u32) -> Self {
		self.offset = offset;
		self
	}
}

impl Component for DropdownMenuContent {
	fn data_slot(&self) -> &'static str {
		"dropdown-menu-content"
	}

	fn render(self) -> Page {
		let anchor = format!(
			"x-anchor.{}-{}.offset.{}",
			self.side.as_str(),
			self.align.as_str(),
			self.offset
		);
		let element = PageElement::new("div")
			.flag("x-cloak", true)
			.attr("x-show", "isOpen")
			.attr("x-trap", "isOpen")
			.attr("role", "menu")
			.attr("data-side", self.side.as_str())
			.attr("data-slot", "dropdown-menu-content")
			.attr("@click.outside", "isOpen = false")
			.attr("@keydown.down.prevent", "$focus.wrap().next()")
			.attr("@keydown.up.prevent", "$focus.wrap().previous()")
			.attr("x-transition:leave", "animate-out zoom-out-95 fade-out-0")
			.attr("x-transition:enter", "animate-in zoom-in-95 fade-in-0")
			.attr(anchor, "$refs.dropdownMenuTrigger")
			.children(self.children);
		Page::Element(compose(element, CONTENT_CLASS, Directives::new(), self.props))
	}
}

crate::impl_into_page!(DropdownMenuContent);

container! {
	DropdownMenuGroup: "div", slot = "dropdown-menu-group", class = "",
}

/// Color variant of a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownMenuItemVariant {
	#[default]
	Default,
	Destructive,
}

impl DropdownMenuItemVariant {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Default => "default",
			Self::Destructive => "destructive",
		}
	}
}

const ITEM_CLASS: &str = "flex relative gap-2 items-center px-2 py-1.5 text-sm rounded-sm outline-hidden cursor-default select-none [&_svg:not([class*='text-'])]:text-muted-foreground [&_svg:not([class*='size-'])]:size-4 hover:text-accent-foreground hover:bg-accent focus:text-accent-foreground focus:bg-accent [&_svg]:pointer-events-none [&_svg]:shrink-0 data-[disabled]:pointer-events-none data-[disabled]:opacity-50 data-[inset]:pl-8 data-[variant=destructive]:text-destructive data-[variant=destructive]:focus:bg-destructive/10 data-[variant=destructive]:focus:text-destructive data-[variant=destructive]:*:[svg]:!text-destructive dark:data-[variant=destructive]:focus:bg-destructive/20";

/// A menu entry
#[derive(Debug, Clone, Default)]
pub struct DropdownMenuItem {
	disabled: bool,
	inset: bool,
	variant: DropdownMenuItemVariant,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(DropdownMenuItem, children);

impl DropdownMenuItem {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Indents the item to line up with items that have an icon
	pub fn inset(mut self, inset: bool) -> Self {
		self.inset = inset;
		self
	}

	pub fn variant(mut self, variant: DropdownMenuItemVariant) -> Self {
		self.variant = variant;
		self
	}
}

impl Component for DropdownMenuItem {
	fn data_slot(&self) -> &'static str {
		"dropdown-menu-item"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("role", "menuitem")
			.flag("data-disabled", self.disabled)
			.flag("data-inset", self.inset)
			.attr("data-variant", self.variant.as_str())
			.attr("data-slot", "dropdown-menu-item")
			.children(self.children);
		Page::Element(compose(element, ITEM_CLASS, Directives::new(), self.props))
	}
}

crate::impl_into_page!(DropdownMenuItem);

/// Non-interactive heading inside the menu
#[derive(Debug, Clone, Default)]
pub struct DropdownMenuLabel {
	inset: bool,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(DropdownMenuLabel, children);

impl DropdownMenuLabel {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn inset(mut self, inset: bool) -> Self {
		self.inset = inset;
		self
	}
}

impl Component for DropdownMenuLabel {
	fn data_slot(&self) -> &'static str {
		"dropdown-menu-label"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.flag("data-inset", self.inset)
			.attr("data-slot", "dropdown-menu-label")
			.children(self.children);
		Page::Element(compose(
			element,
			"px-2 py-1.5 font-medium text-sm data-[inset]:pl-8",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(DropdownMenuLabel);

/// Horizontal rule between groups
#[derive(Debug, Clone, Default)]
pub struct DropdownMenuSeparator {
	props: Props,
}

crate::impl_builder!(DropdownMenuSeparator);

impl DropdownMenuSeparator {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for DropdownMenuSeparator {
	fn data_slot(&self) -> &'static str {
		"dropdown-menu-separator"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("role", "separator")
			.attr("aria-orientation", "horizontal")
			.attr("data-slot", "dropdown-menu-separator");
		Page::Element(compose(element, "my-1 h-px bg-border -mx-1", Directives::new(), self.props))
	}
}

crate::impl_into_page!(DropdownMenuSeparator);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{WithChildren, WithProps};
	use crate::ui::button::ButtonVariant;
	use altar_core::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	fn test_dropdown_menu_root() {
		let page = DropdownMenu::new().into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("@keydown.escape.window"), Some("isOpen = false"));
		assert_eq!(
			el.get_attr("x-data"),
			Some("{isOpen: false, toggleDropdownMenu() { this.isOpen = !this.isOpen }}")
		);
	}

	#[rstest]
	fn test_dropdown_menu_trigger() {
		let page = DropdownMenuTrigger::new()
			.variant(ButtonVariant::Outline)
			.child("Open")
			.into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("x-ref"), Some("dropdownMenuTrigger"));
		assert_eq!(el.get_attr("aria-haspopup"), Some("true"));
		assert_eq!(el.get_attr("@keydown.enter.prevent"), Some("toggleDropdownMenu()"));
	}

	#[rstest]
	#[case(Side::Bottom, Align::Start, 8, "x-anchor.bottom-start.offset.8")]
	#[case(Side::Right, Align::End, 4, "x-anchor.right-end.offset.4")]
	fn test_dropdown_menu_content_anchor(
		#[case] side: Side,
		#[case] align: Align,
		#[case] offset: u32,
		#[case] anchor: &str,
	) {
		let page = DropdownMenuContent::new()
			.side(side)
			.align(align)
			.offset(offset)
			.into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr(anchor), Some("$refs.dropdownMenuTrigger"));
		assert_eq!(el.get_attr("data-side"), Some(side.as_str()));
		assert!(el.has_attr("x-cloak"));
	}

	#[rstest]
	fn test_dropdown_menu_item_flags() {
		let html = DropdownMenu::new()
			.child(
				DropdownMenuContent::new()
					.child(DropdownMenuLabel::new().inset(true).child("My Account"))
					.child(DropdownMenuSeparator::new())
					.child(
						DropdownMenuGroup::new()
							.child(DropdownMenuItem::new().child("Profile"))
							.child(
								DropdownMenuItem::new()
									.disabled(true)
									.variant(DropdownMenuItemVariant::Destructive)
									.class("text-red-600")
									.child("Delete"),
							),
					),
			)
			.into_page()
			.render_to_string();

		assert!(html.contains("<div data-inset data-slot=\"dropdown-menu-label\""));
		assert!(html.contains("<div role=\"menuitem\" data-variant=\"default\" data-slot=\"dropdown-menu-item\""));
		assert!(html.contains("<div role=\"menuitem\" data-disabled data-variant=\"destructive\""));
		assert!(html.contains("text-red-600\">Delete</div>"));
		assert!(html.contains("role=\"separator\" aria-orientation=\"horizontal\""));
	}
}
