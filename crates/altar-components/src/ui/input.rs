//! Text inputs

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Directive};

use crate::component::{Component, Directives, Props, WithChildren, WithProps, compose};
use crate::icons::{Icon, IconKind};
use crate::ui::button::{Button, ButtonSize, ButtonVariant};

const BASE_CLASS: &str = "flex h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] dark:bg-input/30 border-input outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground md:text-sm file:text-foreground file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

/// Single-line input
#[derive(Debug, Clone, Default)]
pub struct Input {
	props: Props,
}

crate::impl_builder!(Input);

impl Input {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the `type` attribute.
	pub fn input_type(self, input_type: &'static str) -> Self {
		self.attr("type", input_type)
	}
}

impl Component for Input {
	fn data_slot(&self) -> &'static str {
		"input"
	}

	fn render(self) -> Page {
		let element = PageElement::new("input").attr("data-slot", "input");
		Page::Element(compose(element, BASE_CLASS, Directives::new(), self.props))
	}
}

crate::impl_into_page!(Input);

/// Password input with a button toggling the value's visibility
///
/// Classes and attributes go to the inner `<input>`; `x-data` goes to the
/// wrapper holding `showPassword`.
#[derive(Debug, Clone, Default)]
pub struct PasswordInput {
	props: Props,
}

crate::impl_builder!(PasswordInput);

impl PasswordInput {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for PasswordInput {
	fn data_slot(&self) -> &'static str {
		"input"
	}

	fn render(mut self) -> Page {
		let caller_data = self.props.take_directive(Directive::Data);

		let input = Input::new()
			.input_type("password")
			.bind("type", "showPassword? 'text' : 'password'")
			.with_props(self.props);

		let toggle = Button::new()
			.variant(ButtonVariant::Ghost)
			.size(ButtonSize::Icon)
			.attr("type", "button")
			.class("absolute top-1/2 right-1 w-6 h-6 text-muted-foreground rounded-md -translate-y-1/2")
			.on("click", "showPassword = !showPassword")
			.child(
				Icon::new(IconKind::EyeOff)
					.attr("x-show", "!showPassword")
					.class("w-4 h-4"),
			)
			.child(
				Icon::new(IconKind::Eye)
					.attr("x-show", "showPassword")
					.class("w-4 h-4"),
			);

		let mut wrapper = Props::new();
		if let Some(data) = caller_data {
			wrapper.merge_directive(Directive::Data, data);
		}
		let element = PageElement::new("div")
			.child(input)
			.child(toggle);
		Page::Element(compose(
			element,
			"flex relative items-center rounded-md",
			Directives::new().data(AlpineData::new().entry("showPassword", false)),
			wrapper,
		))
	}
}

crate::impl_into_page!(PasswordInput);
