//! Badge

use altar_core::page::{Page, PageElement};

use crate::component::{Component, Directives, Props, compose};

/// Badge color variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
	#[default]
	Default,
	Destructive,
	Outline,
	Secondary,
}

impl BadgeVariant {
	/// Convert variant to its Tailwind classes
	pub fn classes(&self) -> &'static str {
		match self {
			Self::Default => "border-transparent bg-primary text-primary-foreground [a&]:hover:bg-primary/90",
			Self::Destructive => {
				"border-transparent bg-destructive text-white [a&]:hover:bg-destructive/90 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60"
			}
			Self::Outline => "text-foreground [a&]:hover:bg-accent [a&]:hover:text-accent-foreground",
			Self::Secondary => {
				"border-transparent bg-secondary text-secondary-foreground [a&]:hover:bg-secondary/90"
			}
		}
	}
}

const BASE_CLASS: &str = "inline-flex items-center justify-center rounded-md border px-2 py-0.5 text-xs font-medium w-fit whitespace-nowrap shrink-0 [&>svg]:size-3 gap-1 [&>svg]:pointer-events-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive transition-[color,box-shadow] overflow-hidden";

/// Small status label
#[derive(Debug, Clone, Default)]
pub struct Badge {
	variant: BadgeVariant,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Badge, children);

impl Badge {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn variant(mut self, variant: BadgeVariant) -> Self {
		self.variant = variant;
		self
	}
}

impl Component for Badge {
	fn data_slot(&self) -> &'static str {
		"badge"
	}

	fn render(self) -> Page {
		let base_class = format!("{} {}", self.variant.classes(), BASE_CLASS);
		let element = PageElement::new("span")
			.attr("data-slot", "badge")
			.children(self.children);
		Page::Element(compose(element, &base_class, Directives::new(), self.props))
	}
}

crate::impl_into_page!(Badge);
