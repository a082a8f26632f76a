//! Button

use altar_core::page::{Page, PageElement};

use crate::component::{Component, Directives, Props, compose};

/// Button color variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
	#[default]
	Default,
	Destructive,
	Outline,
	Secondary,
	Ghost,
	Link,
}

impl ButtonVariant {
	/// Convert variant to its Tailwind classes
	pub fn classes(&self) -> &'static str {
		match self {
			Self::Default => "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90",
			Self::Destructive => {
				"bg-destructive text-white shadow-xs hover:bg-destructive/90 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60"
			}
			Self::Outline => {
				"border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground dark:bg-input/30 dark:border-input dark:hover:bg-input/50"
			}
			Self::Secondary => "bg-secondary text-secondary-foreground shadow-xs hover:bg-secondary/80",
			Self::Ghost => "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50",
			Self::Link => "text-primary underline-offset-4 hover:underline",
		}
	}
}

/// Button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
	#[default]
	Default,
	Sm,
	Lg,
	Icon,
}

impl ButtonSize {
	/// Convert size to its Tailwind classes
	pub fn classes(&self) -> &'static str {
		match self {
			Self::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
			Self::Sm => "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5",
			Self::Lg => "h-10 rounded-md px-6 has-[>svg]:px-4",
			Self::Icon => "size-9",
		}
	}
}

const BASE_CLASS: &str = "inline-flex gap-2 justify-center items-center font-medium text-sm whitespace-nowrap rounded-md outline-none transition-all [&_svg:not([class*='size-'])]:size-4 shrink-0 aria-invalid:ring-destructive/20 aria-invalid:border-destructive dark:aria-invalid:ring-destructive/40 disabled:opacity-50 disabled:pointer-events-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] [&_svg]:pointer-events-none [&_svg]:shrink-0";

/// Button
///
/// `variant(None)` drops the color classes so a caller can style the button
/// from scratch.
#[derive(Debug, Clone, Default)]
pub struct Button {
	variant: Option<ButtonVariant>,
	size: ButtonSize,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Button, children);

impl Button {
	pub fn new() -> Self {
		Self {
			variant: Some(ButtonVariant::Default),
			..Self::default()
		}
	}

	pub fn variant(mut self, variant: impl Into<Option<ButtonVariant>>) -> Self {
		self.variant = variant.into();
		self
	}

	pub fn size(mut self, size: ButtonSize) -> Self {
		self.size = size;
		self
	}

	/// Class string for the configured variant and size
	pub fn base_class(&self) -> String {
		let variant = self.variant.map(|v| v.classes()).unwrap_or_default();
		format!("{} {} {}", variant, self.size.classes(), BASE_CLASS)
	}

	/// Renders the `<button>` element
	pub fn into_element(self) -> PageElement {
		let base_class = self.base_class();
		let element = PageElement::new("button")
			.attr("data-slot", "button")
			.children(self.children);
		compose(element, &base_class, Directives::new(), self.props)
	}
}

impl Component for Button {
	fn data_slot(&self) -> &'static str {
		"button"
	}

	fn render(self) -> Page {
		Page::Element(self.into_element())
	}
}

crate::impl_into_page!(Button);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::component::{WithChildren, WithProps};
	use altar_core::page::IntoPage;
	use rstest::rstest;

	fn class_of(button: Button) -> String {
		button
			.into_element()
			.get_attr("class")
			.unwrap_or_default()
			.to_owned()
	}

	#[rstest]
	fn test_default_button() {
		let html = Button::new().child("Save").into_page().render_to_string();
		assert!(html.starts_with("<button data-slot=\"button\" class=\"bg-primary text-primary-foreground"));
		assert!(html.ends_with(">Save</button>"));
	}

	#[rstest]
	#[case(ButtonVariant::Destructive, "bg-destructive")]
	#[case(ButtonVariant::Outline, "bg-background")]
	#[case(ButtonVariant::Secondary, "bg-secondary")]
	#[case(ButtonVariant::Ghost, "hover:bg-accent")]
	#[case(ButtonVariant::Link, "underline-offset-4")]
	fn test_variants(#[case] variant: ButtonVariant, #[case] expected: &str) {
		let class = class_of(Button::new().variant(variant));
		assert!(class.split(' ').any(|c| c == expected), "{class}");
	}

	#[rstest]
	fn test_no_variant() {
		let class = class_of(Button::new().variant(None));
		assert!(!class.contains("bg-primary"));
		assert!(class.starts_with("h-9 px-4 py-2"));
	}

	#[rstest]
	fn test_icon_size_replaces_height_and_padding_classes() {
		let class = class_of(Button::new().size(ButtonSize::Icon));
		assert!(class.contains("size-9"));
		assert!(!class.contains("h-9"));
	}

	#[rstest]
	fn test_caller_class_wins() {
		let class = class_of(Button::new().size(ButtonSize::Sm).class("h-12 rounded-full"));
		assert!(!class.contains("h-8"));
		assert!(!class.contains("rounded-md"));
		assert!(class.ends_with("h-12 rounded-full"));
	}

	#[rstest]
	fn test_attributes_forwarded() {
		let html = Button::new()
			.attr("type", "submit")
			.flag("disabled", true)
			.on("click", "open = true")
			.data("slot", "dialog-trigger")
			.into_page()
			.render_to_string();
		assert!(html.contains("data-slot=\"dialog-trigger\""));
		assert!(html.contains("type=\"submit\""));
		assert!(html.contains(" disabled"));
		assert!(html.contains("@click=\"open = true\""));
	}
}
