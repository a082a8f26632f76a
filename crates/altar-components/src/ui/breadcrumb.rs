//! Breadcrumb navigation

use std::borrow::Cow;

use altar_core::page::{IntoPage, Page, PageElement};

use crate::component::{Component, Directives, Props, WithProps, compose};
use crate::error::Result;
use crate::icons::{Icon, IconKind};
use crate::ui::passthrough::merge_into;

container! {
	/// Breadcrumb root
	Breadcrumb: "nav", slot = "breadcrumb", class = "",
	attrs = ["aria-label" => "breadcrumb"],
}

container! {
	BreadcrumbList: "ol", slot = "breadcrumb-list",
	class = "flex flex-wrap gap-1.5 items-center text-muted-foreground text-sm break-words sm:gap-2.5",
}

container! {
	BreadcrumbItem: "li", slot = "breadcrumb-item", class = "inline-flex gap-1.5 items-center",
}

const LINK_CLASS: &str = "transition-colors hover:text-foreground";

/// Link to an ancestor page
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbLink {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(BreadcrumbLink, children);

impl BreadcrumbLink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Renders `child` in place of the `<a>`, carrying the link's attributes.
	pub fn as_child(self, child: impl IntoPage) -> Result<Page> {
		let link = compose(
			PageElement::new("a").attr("data-slot", "breadcrumb-link"),
			LINK_CLASS,
			Directives::new(),
			self.props,
		);
		merge_into(link, child).map(Page::Element)
	}
}

impl Component for BreadcrumbLink {
	fn data_slot(&self) -> &'static str {
		"breadcrumb-link"
	}

	fn render(self) -> Page {
		let element = PageElement::new("a")
			.attr("data-slot", "breadcrumb-link")
			.children(self.children);
		Page::Element(compose(element, LINK_CLASS, Directives::new(), self.props))
	}
}

crate::impl_into_page!(BreadcrumbLink);

container! {
	/// The current page
	BreadcrumbPage: "span", slot = "breadcrumb-page", class = "font-normal text-foreground",
	attrs = ["role" => "link", "aria-disabled" => "true", "aria-current" => "page"],
}

/// What a [`BreadcrumbSeparator`] shows
#[derive(Debug, Clone)]
pub enum SeparatorContent {
	Text(Cow<'static, str>),
	Icon(Icon),
}

impl From<&'static str> for SeparatorContent {
	fn from(text: &'static str) -> Self {
		Self::Text(Cow::Borrowed(text))
	}
}

impl From<String> for SeparatorContent {
	fn from(text: String) -> Self {
		Self::Text(Cow::Owned(text))
	}
}

impl From<Icon> for SeparatorContent {
	fn from(icon: Icon) -> Self {
		Self::Icon(icon)
	}
}

/// Separator between items; a chevron unless replaced
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbSeparator {
	content: Option<SeparatorContent>,
	props: Props,
}

crate::impl_builder!(BreadcrumbSeparator);

impl BreadcrumbSeparator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the chevron with a text or an icon.
	pub fn content(mut self, content: impl Into<SeparatorContent>) -> Self {
		self.content = Some(content.into());
		self
	}
}

impl Component for BreadcrumbSeparator {
	fn data_slot(&self) -> &'static str {
		"breadcrumb-separator"
	}

	fn render(self) -> Page {
		let content = match self.content {
			Some(SeparatorContent::Text(text)) => Page::Text(text),
			Some(SeparatorContent::Icon(icon)) => icon.render(),
			None => Icon::new(IconKind::ChevronRight).render(),
		};
		let element = PageElement::new("li")
			.attr("data-slot", "breadcrumb-separator")
			.attr("role", "presentation")
			.attr("aria-hidden", "true")
			.child(content);
		Page::Element(compose(element, "[&>svg]:size-3.5", Directives::new(), self.props))
	}
}

crate::impl_into_page!(BreadcrumbSeparator);

/// Placeholder for collapsed items
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbEllipsis {
	props: Props,
}

crate::impl_builder!(BreadcrumbEllipsis);

impl BreadcrumbEllipsis {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for BreadcrumbEllipsis {
	fn data_slot(&self) -> &'static str {
		"breadcrumb-ellipsis"
	}

	fn render(self) -> Page {
		let element = PageElement::new("span")
			.attr("data-slot", "breadcrumb-ellipsis")
			.attr("role", "presentation")
			.attr("aria-hidden", "true")
			.child(Icon::new(IconKind::Ellipsis).class("size-4"))
			.child(PageElement::new("span").attr("class", "sr-only").child("More"));
		Page::Element(compose(
			element,
			"flex justify-center items-center size-9",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(BreadcrumbEllipsis);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::WithChildren;
	use crate::error::ComponentError;
	use rstest::rstest;

	#[rstest]
	fn test_breadcrumb_trail() {
		let html = Breadcrumb::new()
			.child(
				BreadcrumbList::new()
					.child(BreadcrumbItem::new().child(BreadcrumbLink::new().attr("href", "/").child("Home")))
					.child(BreadcrumbSeparator::new())
					.child(BreadcrumbItem::new().child(BreadcrumbEllipsis::new()))
					.child(BreadcrumbSeparator::new().content("/"))
					.child(BreadcrumbItem::new().child(BreadcrumbPage::new().child("Breadcrumb"))),
			)
			.into_page()
			.render_to_string();

		assert!(html.starts_with("<nav data-slot=\"breadcrumb\" aria-label=\"breadcrumb\"><ol data-slot=\"breadcrumb-list\""));
		assert!(html.contains("<a data-slot=\"breadcrumb-link\" class=\"transition-colors hover:text-foreground\" href=\"/\">Home</a>"));
		assert!(html.contains("lucide-chevron-right"));
		assert!(html.contains("<span class=\"sr-only\">More</span>"));
		assert!(html.contains("aria-hidden=\"true\" class=\"[&amp;&gt;svg]:size-3.5\">/</li>"));
		assert!(html.contains("role=\"link\" aria-disabled=\"true\" aria-current=\"page\""));
	}

	#[rstest]
	fn test_separator_icon_content() {
		let page = BreadcrumbSeparator::new()
			.content(Icon::new(IconKind::ArrowRight))
			.into_page();
		let html = page.render_to_string();
		assert!(html.contains("lucide-arrow-right"));
		assert!(!html.contains("lucide-chevron-right"));
	}

	#[rstest]
	fn test_link_as_child() {
		let page = BreadcrumbLink::new()
			.class("font-medium")
			.as_child(PageElement::new("a").attr("href", "/docs").attr("hx-boost", "true").child("Docs"))
			.unwrap();
		let el = page.as_element().unwrap();
		assert_eq!(el.tag_name(), "a");
		assert_eq!(el.get_attr("data-slot"), Some("breadcrumb-link"));
		assert_eq!(el.get_attr("class"), Some("transition-colors hover:text-foreground font-medium"));
		assert_eq!(el.get_attr("hx-boost"), Some("true"));
	}

	#[rstest]
	fn test_link_as_child_rejects_two_children() {
		let result = BreadcrumbLink::new().as_child((PageElement::new("a"), PageElement::new("a")));
		assert!(matches!(result, Err(ComponentError::ChildCount { .. })));
	}
}
