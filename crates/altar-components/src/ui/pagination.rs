//! Pagination
//!
//! [`Pagination`] holds `numberOfPages` and `currentPageIndex` (1-based).
//! Items store their own `pageIndex` and compare it with the shared index.

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, AlpineValue, Statement};

use crate::component::{Component, Directives, Props, WithChildren, WithProps, compose};
use crate::icons::{Icon, IconKind};
use crate::ui::button::{Button, ButtonSize, ButtonVariant};

/// A page count or index: a fixed number or an Alpine expression
#[derive(Debug, Clone, PartialEq)]
pub enum PageValue {
	Fixed(u32),
	Bound(Statement),
}

impl PageValue {
	fn fixed(&self) -> Option<u32> {
		match self {
			Self::Fixed(value) => Some(*value),
			Self::Bound(_) => None,
		}
	}

	fn into_alpine(self) -> AlpineValue {
		match self {
			Self::Fixed(value) => value.into(),
			Self::Bound(statement) => statement.into(),
		}
	}
}

impl From<u32> for PageValue {
	fn from(value: u32) -> Self {
		Self::Fixed(value)
	}
}

impl From<Statement> for PageValue {
	fn from(statement: Statement) -> Self {
		Self::Bound(statement)
	}
}

/// Pagination root
#[derive(Debug, Clone)]
pub struct Pagination {
	number_of_pages: PageValue,
	current_page_index: PageValue,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Pagination, children);

impl Pagination {
	pub fn new(number_of_pages: impl Into<PageValue>) -> Self {
		Self {
			number_of_pages: number_of_pages.into(),
			current_page_index: PageValue::Fixed(1),
			props: Props::new(),
			children: Vec::new(),
		}
	}

	/// Initially selected page, starting at 1
	pub fn current_page_index(mut self, index: impl Into<PageValue>) -> Self {
		self.current_page_index = index.into();
		self
	}

	/// Fixed values out of range fall back to 1.
	fn checked_values(self) -> (PageValue, PageValue, Props, Vec<Page>) {
		let mut pages = self.number_of_pages;
		if pages.fixed() == Some(0) {
			tracing::warn!("pagination needs at least one page, defaulting to 1");
			pages = PageValue::Fixed(1);
		}
		let mut current = self.current_page_index;
		if let Some(index) = current.fixed() {
			let out_of_range = index == 0 || pages.fixed().is_some_and(|count| index > count);
			if out_of_range {
				tracing::warn!(index, "current page index out of range, defaulting to 1");
				current = PageValue::Fixed(1);
			}
		}
		(pages, current, self.props, self.children)
	}
}

impl Component for Pagination {
	fn data_slot(&self) -> &'static str {
		"pagination"
	}

	fn render(self) -> Page {
		let (pages, current, props, children) = self.checked_values();
		let data = AlpineData::new()
			.entry("numberOfPages", pages.into_alpine())
			.entry("currentPageIndex", current.into_alpine())
			.entry(
				"previousPage()",
				Statement::definition("{ if (this.currentPageIndex > 1) { this.currentPageIndex -= 1 } }"),
			)
			.entry(
				"nextPage()",
				Statement::definition(
					"{ if (this.currentPageIndex < this.numberOfPages) { this.currentPageIndex += 1 } }",
				),
			);
		let element = PageElement::new("nav")
			.attr("role", "navigation")
			.attr("aria-label", "pagination")
			.attr("data-slot", "pagination")
			.children(children);
		Page::Element(compose(
			element,
			"flex justify-center mx-auto w-full",
			Directives::new().data(data),
			props,
		))
	}
}

crate::impl_into_page!(Pagination);

container! {
	PaginationContent: "ul", slot = "pagination-content", class = "flex flex-row gap-1 items-center",
}

/// One entry of the page list
///
/// With an index (0-based) the item holds `pageIndex` and the `isActive()` /
/// `setActive()` helpers its [`PaginationLink`] calls.
#[derive(Debug, Clone, Default)]
pub struct PaginationItem {
	index: Option<u32>,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(PaginationItem, children);

impl PaginationItem {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn index(mut self, index: u32) -> Self {
		self.index = Some(index);
		self
	}
}

impl Component for PaginationItem {
	fn data_slot(&self) -> &'static str {
		"pagination-item"
	}

	fn render(self) -> Page {
		let mut directives = Directives::new();
		if let Some(index) = self.index {
			directives = directives.data(
				AlpineData::new()
					.entry("pageIndex", index.saturating_add(1))
					.entry(
						"isActive()",
						Statement::definition(
							"{ if (currentPageIndex === this.pageIndex) { return true } else { return false } }",
						),
					)
					.entry(
						"setActive()",
						Statement::definition("{ currentPageIndex = this.pageIndex }"),
					),
			);
		}
		let element = PageElement::new("li")
			.attr("data-slot", "pagination-item")
			.children(self.children);
		Page::Element(compose(element, "", directives, self.props))
	}
}

crate::impl_into_page!(PaginationItem);

/// Page number button; outlined while its page is current
#[derive(Debug, Clone, Default)]
pub struct PaginationLink {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(PaginationLink, children);

impl PaginationLink {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for PaginationLink {
	fn data_slot(&self) -> &'static str {
		"pagination-link"
	}

	fn render(self) -> Page {
		Button::new()
			.variant(None)
			.size(ButtonSize::Icon)
			.data("slot", "pagination-link")
			.on("click", "setActive()")
			.bind("aria-current", "isActive() ? 'page' : undefined")
			.bind("data-active", "isActive()")
			.bind(
				"class",
				format!(
					"isActive() ? '{}' : '{}'",
					ButtonVariant::Outline.classes(),
					ButtonVariant::Ghost.classes()
				),
			)
			.with_props(self.props)
			.children(self.children)
			.render()
	}
}

crate::impl_into_page!(PaginationLink);

/// Whether the previous/next controls show their label on wide screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationControlSize {
	#[default]
	Default,
	Icon,
}

impl PaginationControlSize {
	fn label_class(&self) -> &'static str {
		match self {
			Self::Default => "hidden sm:block",
			Self::Icon => "sr-only",
		}
	}
}

enum Step {
	Previous,
	Next,
}

fn step_button(step: Step, size: PaginationControlSize, mut props: Props) -> Page {
	let (action, disabled, label, aria_label, base_class) = match step {
		Step::Previous => (
			"previousPage();",
			"currentPageIndex === 1",
			"Previous",
			"Go to previous page",
			"gap-1 px-2.5 sm:pl-2.5",
		),
		Step::Next => (
			"nextPage();",
			"currentPageIndex === numberOfPages",
			"Next",
			"Go to next page",
			"gap-1 px-2.5 sm:pr-2.5",
		),
	};
	let on_click = format!("{action}{}", props.take_text("@click").unwrap_or_default());
	let label = PageElement::new("span")
		.attr("class", size.label_class())
		.child(label);
	let children = match step {
		Step::Previous => Page::fragment([Icon::new(IconKind::ChevronLeft).render(), Page::Element(label)]),
		Step::Next => Page::fragment([Page::Element(label), Icon::new(IconKind::ChevronRight).render()]),
	};
	Button::new()
		.aria("label", aria_label)
		.attr("type", "button")
		.class(base_class)
		.on("click", on_click)
		.bind("disabled", disabled)
		.with_props(props)
		.child(children)
		.render()
}

/// Button moving to the previous page
#[derive(Debug, Clone, Default)]
pub struct PaginationPrevious {
	size: PaginationControlSize,
	props: Props,
}

crate::impl_builder!(PaginationPrevious);

impl PaginationPrevious {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn size(mut self, size: PaginationControlSize) -> Self {
		self.size = size;
		self
	}
}

impl Component for PaginationPrevious {
	fn data_slot(&self) -> &'static str {
		"button"
	}

	fn render(self) -> Page {
		step_button(Step::Previous, self.size, self.props)
	}
}

crate::impl_into_page!(PaginationPrevious);

/// Button moving to the next page
#[derive(Debug, Clone, Default)]
pub struct PaginationNext {
	size: PaginationControlSize,
	props: Props,
}

crate::impl_builder!(PaginationNext);

impl PaginationNext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn size(mut self, size: PaginationControlSize) -> Self {
		self.size = size;
		self
	}
}

impl Component for PaginationNext {
	fn data_slot(&self) -> &'static str {
		"button"
	}

	fn render(self) -> Page {
		step_button(Step::Next, self.size, self.props)
	}
}

crate::impl_into_page!(PaginationNext);

/// Placeholder for skipped pages
#[derive(Debug, Clone, Default)]
pub struct PaginationEllipsis {
	props: Props,
}

crate::impl_builder!(PaginationEllipsis);

impl PaginationEllipsis {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for PaginationEllipsis {
	fn data_slot(&self) -> &'static str {
		"pagination-ellipsis"
	}

	fn render(self) -> Page {
		let element = PageElement::new("span")
			.attr("aria-hidden", "true")
			.attr("data-slot", "pagination-ellipsis")
			.child(Icon::new(IconKind::Ellipsis))
			.child(PageElement::new("span").attr("class", "sr-only").child("More pages"));
		Page::Element(compose(
			element,
			"flex justify-center items-center size-9",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(PaginationEllipsis);
