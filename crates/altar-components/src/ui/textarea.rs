//! Textarea

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};

use crate::component::{Component, Directives, Props, compose};

const BASE_CLASS: &str = "border-input placeholder:text-muted-foreground focus-visible:border-ring focus-visible:ring-ring/50 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive dark:bg-input/30 flex field-sizing-content min-h-16 w-full rounded-md border bg-transparent px-3 py-2 text-base shadow-xs transition-[color,box-shadow] outline-none focus-visible:ring-[3px] disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

/// Multi-line text input
///
/// With `autogrow` the element resizes to fit its content on every input.
#[derive(Debug, Clone, Default)]
pub struct Textarea {
	autogrow: bool,
	value: Option<String>,
	props: Props,
}

crate::impl_builder!(Textarea);

impl Textarea {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn autogrow(mut self, autogrow: bool) -> Self {
		self.autogrow = autogrow;
		self
	}

	/// Initial text content
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

impl Component for Textarea {
	fn data_slot(&self) -> &'static str {
		"textarea"
	}

	fn render(self) -> Page {
		let mut element = PageElement::new("textarea")
			.attr("data-slot", "textarea")
			.child(self.value);
		let mut directives = Directives::new();
		if self.autogrow {
			directives = directives
				.data(AlpineData::new().entry(
					"resize()",
					Statement::definition(
						"{ $el.style.height = '0px'; $el.style.height = $el.scrollHeight + 'px'; }",
					),
				))
				.effect(AlpineData::from("resize()"));
			element.set_attr("@input", "resize()");
		}
		Page::Element(compose(element, BASE_CLASS, directives, self.props))
	}
}

crate::impl_into_page!(Textarea);
