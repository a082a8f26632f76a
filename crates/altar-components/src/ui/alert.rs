//! Alert: a callout for important messages

use altar_core::page::{Page, PageElement};

use crate::component::{Component, Directives, Props, compose};

/// Alert color variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
	#[default]
	Default,
	Destructive,
}

impl AlertVariant {
	/// Convert variant to its Tailwind classes
	pub fn classes(&self) -> &'static str {
		match self {
			Self::Default => "bg-card text-card-foreground",
			Self::Destructive => {
				"text-destructive bg-card [&>svg]:text-current *:data-[slot=alert-description]:text-destructive/90"
			}
		}
	}
}

const BASE_CLASS: &str = "grid grid-cols-[0_1fr] relative gap-y-0.5 items-start px-4 py-3 w-full text-sm rounded-lg border has-[>svg]:grid-cols-[calc(var(--spacing)*4)_1fr] has-[>svg]:gap-x-3 [&>svg]:text-current [&>svg]:translate-y-0.5 [&>svg]:size-4";

/// Alert root; an optional leading icon shifts the title and description
/// into the second grid column
#[derive(Debug, Clone, Default)]
pub struct Alert {
	variant: AlertVariant,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Alert, children);

impl Alert {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn variant(mut self, variant: AlertVariant) -> Self {
		self.variant = variant;
		self
	}
}

impl Component for Alert {
	fn data_slot(&self) -> &'static str {
		"alert"
	}

	fn render(self) -> Page {
		let base_class = format!("{} {}", self.variant.classes(), BASE_CLASS);
		let element = PageElement::new("div")
			.attr("data-slot", "alert")
			.attr("role", "alert")
			.children(self.children);
		Page::Element(compose(element, &base_class, Directives::new(), self.props))
	}
}

crate::impl_into_page!(Alert);

container! {
	AlertTitle: "div", slot = "alert-title",
	class = "col-start-2 line-clamp-1 min-h-4 font-medium tracking-tight",
}

/// Alert body
///
/// Bare text children are wrapped in `<p>` elements.
#[derive(Debug, Clone, Default)]
pub struct AlertDescription {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(AlertDescription, children);

impl AlertDescription {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for AlertDescription {
	fn data_slot(&self) -> &'static str {
		"alert-description"
	}

	fn render(self) -> Page {
		let children = self.children.into_iter().map(|child| match child {
			Page::Text(text) => Page::Element(PageElement::new("p").child(text)),
			other => other,
		});
		let element = PageElement::new("div")
			.attr("data-slot", "alert-description")
			.children(children);
		Page::Element(compose(
			element,
			"grid gap-1 justify-items-start text-muted-foreground text-sm col-start-2 [&_ol]:ml-4 [&_ul]:ml-4 [&_p]:leading-relaxed",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(AlertDescription);
