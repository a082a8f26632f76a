//! Modal dialog
//!
//! The open state lives in `modalIsOpen` on the [`Dialog`] root. Closing the
//! dialog also dispatches `reset-form-data` so forms inside can clear
//! themselves.

use altar_core::page::{AttrValue, Page, PageElement};
use altar_core::plugins::alpine::AlpineData;

use crate::component::{Component, Directives, Props, WithChildren, WithProps, compose};
use crate::icons::{Icon, IconKind};

const CLOSE_ACTION: &str = "$dispatch('reset-form-data'); modalIsOpen = false";

/// Dialog root
#[derive(Debug, Clone, Default)]
pub struct Dialog {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Dialog, children);

impl Dialog {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for Dialog {
	fn data_slot(&self) -> &'static str {
		"dialog"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("data-slot", "dialog")
			.children(self.children);
		Page::Element(compose(
			element,
			"",
			Directives::new().data(AlpineData::new().entry("modalIsOpen", false)),
			self.props,
		))
	}
}

crate::impl_into_page!(Dialog);

trigger! {
	/// Button opening the dialog
	DialogTrigger, slot = "dialog-trigger",
	attrs = ["@click" => "modalIsOpen = true"],
}

container! {
	/// Unstyled button closing the dialog
	DialogClose: "button", slot = "dialog-close", class = "",
	attrs = [
		"type" => "button",
		"@click" => CLOSE_ACTION,
		":class" => "{ 'bg-accent': modalIsOpen, 'text-muted-foreground': modalIsOpen }",
	],
}

container! {
	/// Blurred backdrop behind the dialog panel
	DialogOverlay: "div", slot = "dialog-overlay",
	class = "fixed inset-0 z-50 bg-black/50 backdrop-blur-md",
	attrs = ["x-show" => "modalIsOpen"],
	flags = ["x-cloak", "x-transition.opacity.duration.100ms"],
}

const CONTENT_CLASS: &str = "grid fixed top-[50%] left-[50%] z-50 gap-4 p-6 w-full max-w-[calc(100%-2rem)] bg-background rounded-lg border shadow-lg duration-200 translate-x-[-50%] translate-y-[-50%] sm:max-w-lg";

/// The dialog panel
///
/// Renders a focus-trapping portal holding the overlay and the panel. Props
/// and children go to the panel, which also gets a close button.
#[derive(Debug, Clone, Default)]
pub struct DialogContent {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(DialogContent, children);

impl DialogContent {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for DialogContent {
	fn data_slot(&self) -> &'static str {
		"dialog-content"
	}

	fn render(self) -> Page {
		let close = DialogClose::new()
			.class("absolute top-4 right-4 rounded-xs ring-offset-background opacity-70 transition-opacity [&_svg:not([class*='size-'])]:size-4 disabled:pointer-events-none hover:opacity-100 focus:outline-hidden focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 [&_svg]:pointer-events-none [&_svg]:shrink-0")
			.child(Icon::new(IconKind::Cross))
			.child(PageElement::new("span").attr("class", "sr-only").child("Close"));

		let panel = PageElement::new("div")
			.attr("data-slot", "dialog-content")
			.attr("x-transition:enter", "animate-in zoom-in-95 fade-in-0")
			.attr("x-transition:leave", "animate-out zoom-out-95 fade-out-0")
			.children(self.children)
			.child(close);
		let panel = compose(panel, CONTENT_CLASS, Directives::new(), self.props);

		Page::Element(
			PageElement::new("div")
				.attr("x-show", "modalIsOpen")
				.attr("data-slot", "dialog-portal")
				.attr("x-trap.noscroll", "modalIsOpen")
				.attr("@keydown.esc.window", "modalIsOpen = false")
				.attr("@click.self", "modalIsOpen = false")
				.attr(":aria-labelledby", "$id('dialog-portal')")
				.attr("aria-modal", "true")
				.child(DialogOverlay::new())
				.child(panel),
		)
	}
}

crate::impl_into_page!(DialogContent);

container! {
	DialogHeader: "div", slot = "dialog-header", class = "flex flex-col gap-2 text-center sm:text-left",
}

/// Action row at the bottom of the panel
///
/// A child element carrying `@click.close` has it replaced by the close
/// action.
#[derive(Debug, Clone, Default)]
pub struct DialogFooter {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(DialogFooter, children);

impl DialogFooter {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for DialogFooter {
	fn data_slot(&self) -> &'static str {
		"dialog-footer"
	}

	fn render(self) -> Page {
		let children = self.children.into_iter().map(|mut child| {
			if let Some(el) = child.as_element_mut()
				&& let Some(marker) = el.remove_attr("@click.close")
				&& !matches!(&marker, AttrValue::Text(value) if value == "false")
			{
				el.set_attr("@click", CLOSE_ACTION);
			}
			child
		});
		let element = PageElement::new("div")
			.attr("data-slot", "dialog-footer")
			.children(children);
		Page::Element(compose(
			element,
			"flex flex-col-reverse gap-2 sm:flex-row sm:justify-end",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(DialogFooter);

container! {
	DialogTitle: "h2", slot = "dialog-title", class = "font-semibold text-lg leading-none",
}

container! {
	DialogDescription: "p", slot = "dialog-description", class = "text-muted-foreground text-sm",
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::button::{Button, ButtonVariant};
	use altar_core::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	fn test_dialog_root_and_trigger() {
		let html = Dialog::new()
			.child(DialogTrigger::new().variant(ButtonVariant::Outline).child("Edit Profile"))
			.into_page()
			.render_to_string();
		assert!(html.starts_with("<div data-slot=\"dialog\" x-data=\"{modalIsOpen: false}\"><button data-slot=\"dialog-trigger\""));
		assert!(html.contains("@click=\"modalIsOpen = true\""));
		assert!(html.contains("bg-background"));
	}

	#[rstest]
	fn test_dialog_content_structure() {
		let page = DialogContent::new()
			.class("sm:max-w-[425px]")
			.child(DialogHeader::new().child(DialogTitle::new().child("Edit profile")))
			.into_page();
		let portal = page.as_element().unwrap();
		assert_eq!(portal.get_attr("data-slot"), Some("dialog-portal"));
		assert_eq!(portal.get_attr("x-trap.noscroll"), Some("modalIsOpen"));
		assert_eq!(portal.get_attr(":aria-labelledby"), Some("$id('dialog-portal')"));

		let overlay = portal.child_views()[0].as_element().unwrap();
		assert_eq!(overlay.get_attr("data-slot"), Some("dialog-overlay"));
		assert!(overlay.has_attr("x-cloak"));
		assert!(overlay.has_attr("x-transition.opacity.duration.100ms"));

		let panel = portal.child_views()[1].as_element().unwrap();
		assert_eq!(panel.get_attr("data-slot"), Some("dialog-content"));
		let class = panel.get_attr("class").unwrap();
		assert!(class.ends_with("sm:max-w-[425px]"));
		assert!(!class.contains("sm:max-w-lg"));

		let close = panel.child_views().last().and_then(Page::as_element).unwrap();
		assert_eq!(close.get_attr("data-slot"), Some("dialog-close"));
		assert_eq!(close.get_attr("@click"), Some(CLOSE_ACTION));
	}

	#[rstest]
	fn test_dialog_footer_close_marker() {
		let page = DialogFooter::new()
			.child(Button::new().variant(ButtonVariant::Outline).flag("@click.close", true).child("Cancel"))
			.child(Button::new().attr("type", "submit").child("Save"))
			.into_page();
		let footer = page.as_element().unwrap();
		let cancel = footer.child_views()[0].as_element().unwrap();
		assert!(!cancel.has_attr("@click.close"));
		assert_eq!(cancel.get_attr("@click"), Some(CLOSE_ACTION));
		let save = footer.child_views()[1].as_element().unwrap();
		assert!(!save.has_attr("@click"));
	}
}
