//! Table: a responsive `<table>` with styled sections

use altar_core::page::{Page, PageElement};
use altar_core::plugins::tailwind::tw_merge;

use crate::component::{Component, Directives, Props, compose};

/// Table root
///
/// Renders a horizontally scrollable container around the `<table>`. Caller
/// classes style the table itself; other attributes go to the container.
#[derive(Debug, Clone, Default)]
pub struct Table {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Table, children);

impl Table {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for Table {
	fn data_slot(&self) -> &'static str {
		"table-container"
	}

	fn render(mut self) -> Page {
		let class = self.props.take_class();
		let table = PageElement::new("table")
			.attr(
				"class",
				tw_merge(["w-full text-sm caption-bottom", class.as_deref().unwrap_or_default()]),
			)
			.attr("data-slot", "table")
			.children(self.children);

		let container = PageElement::new("div")
			.attr("data-slot", "table-container")
			.child(table);
		Page::Element(compose(
			container,
			"overflow-x-auto relative w-full",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(Table);

container! {
	TableHeader: "thead", slot = "table-header",
	class = "[&_tr]:border-b",
}

container! {
	TableBody: "tbody", slot = "table-body",
	class = "[&_tr:last-child]:border-0",
}

container! {
	TableFooter: "tfoot", slot = "table-footer",
	class = "font-medium bg-muted/50 border-t [&>tr]:last:border-b-0",
}

container! {
	TableRow: "tr", slot = "table-row",
	class = "border-b transition-colors data-[state=selected]:bg-muted hover:bg-muted/50",
}

container! {
	/// Header cell
	TableHead: "th", slot = "table-head",
	class = "align-middle px-2 h-10 font-medium text-foreground text-left whitespace-nowrap [&:has([role=checkbox])]:pr-0 [&>[role=checkbox]]:translate-y-[2px]",
}

container! {
	/// Body cell
	TableCell: "td", slot = "table-cell",
	class = "align-middle p-2 whitespace-nowrap [&:has([role=checkbox])]:pr-0 [&>[role=checkbox]]:translate-y-[2px]",
}

container! {
	TableCaption: "caption", slot = "table-caption",
	class = "mt-4 text-muted-foreground text-sm",
}
