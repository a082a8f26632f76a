//! Carousel: one slide visible at a time, cycling in both directions

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};

use crate::component::{
	Component, Directives, Orientation, Props, WithChildren, WithProps, compose,
};
use crate::icons::{Icon, IconKind};
use crate::ui::button::{Button, ButtonSize, ButtonVariant};

/// Carousel root holding the slide count and the 1-based `currentSlideIndex`
#[derive(Debug, Clone)]
pub struct Carousel {
	orientation: Orientation,
	number_of_slides: u32,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Carousel, children);

impl Carousel {
	pub fn new(orientation: Orientation, number_of_slides: u32) -> Self {
		Self {
			orientation,
			number_of_slides,
			props: Props::new(),
			children: Vec::new(),
		}
	}
}

impl Component for Carousel {
	fn data_slot(&self) -> &'static str {
		"carousel"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("carouselOrientation", self.orientation.as_str())
			.entry("slideLength", self.number_of_slides)
			.entry("currentSlideIndex", 1_u32)
			.entry(
				"previousSlide()",
				Statement::definition(
					"{ if (this.currentSlideIndex > 1) { this.currentSlideIndex -= 1 } else { this.currentSlideIndex = this.slideLength } }",
				),
			)
			.entry(
				"nextSlide()",
				Statement::definition(
					"{ if (this.currentSlideIndex < this.slideLength) { this.currentSlideIndex += 1 } else { this.currentSlideIndex = 1 } }",
				),
			);
		let element = PageElement::new("div")
			.attr("role", "region")
			.attr("aria-roledescription", "carousel")
			.attr("data-slot", "carousel")
			.children(self.children);
		Page::Element(compose(element, "relative", Directives::new().data(data), self.props))
	}
}

crate::impl_into_page!(Carousel);

/// Clipping viewport around the slide track
///
/// Props go to the inner track.
#[derive(Debug, Clone, Default)]
pub struct CarouselContent {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(CarouselContent, children);

impl CarouselContent {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for CarouselContent {
	fn data_slot(&self) -> &'static str {
		"carousel-content"
	}

	fn render(self) -> Page {
		let track = PageElement::new("div")
			.attr(
				":class",
				"{ '-ml-4': carouselOrientation === 'horizontal', '-mt-4': carouselOrientation !== 'horizontal', 'flex-col': carouselOrientation !== 'horizontal' }",
			)
			.children(self.children);
		let track = compose(track, "flex", Directives::new(), self.props);
		Page::Element(
			PageElement::new("div")
				.attr("class", "overflow-hidden")
				.attr("data-slot", "carousel-content")
				.child(track),
		)
	}
}

crate::impl_into_page!(CarouselContent);

/// One slide, shown while `currentSlideIndex` equals its 0-based index plus one
#[derive(Debug, Clone)]
pub struct CarouselItem {
	index: u32,
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(CarouselItem, children);

impl CarouselItem {
	pub fn new(index: u32) -> Self {
		Self {
			index,
			props: Props::new(),
			children: Vec::new(),
		}
	}
}

impl Component for CarouselItem {
	fn data_slot(&self) -> &'static str {
		"carousel-item"
	}

	fn render(self) -> Page {
		let element = PageElement::new("div")
			.attr("x-show", format!("currentSlideIndex === {}", self.index.saturating_add(1)))
			.attr("x-transition:enter", "animate-in zoom-in-95 fade-in-0")
			.attr("x-transition:leave", "animate-out zoom-out-95 fade-out-0")
			.attr(
				":class",
				"{ 'pl-4': carouselOrientation === 'horizontal', 'pt-4': carouselOrientation !== 'horizontal' }",
			)
			.attr("role", "group")
			.attr("aria-roledescription", "slide")
			.attr("data-slot", "carousel-item")
			.children(self.children);
		Page::Element(compose(
			element,
			"min-w-0 shrink-0 grow-0 basis-full",
			Directives::new(),
			self.props,
		))
	}
}

crate::impl_into_page!(CarouselItem);

enum Direction {
	Previous,
	Next,
}

fn slide_button(
	direction: Direction,
	variant: Option<ButtonVariant>,
	size: ButtonSize,
	props: Props,
) -> Page {
	let (slot, action, disabled, position, icon, label) = match direction {
		Direction::Previous => (
			"carousel-previous",
			"previousSlide()",
			"currentSlideIndex === 1",
			"{ 'top-1/2': carouselOrientation === 'horizontal', '-left-12': carouselOrientation === 'horizontal', '-translate-y-1/2': carouselOrientation === 'horizontal', '-top-12': carouselOrientation !== 'horizontal', 'left-1/2': carouselOrientation !== 'horizontal', '-translate-x-1/2': carouselOrientation !== 'horizontal', 'rotate-90': carouselOrientation !== 'horizontal' }",
			IconKind::ArrowLeft,
			"Previous Slide",
		),
		Direction::Next => (
			"carousel-next",
			"nextSlide()",
			"currentSlideIndex === slideLength",
			"{ 'top-1/2': carouselOrientation === 'horizontal', '-right-12': carouselOrientation === 'horizontal', '-translate-y-1/2': carouselOrientation === 'horizontal', '-bottom-12': carouselOrientation !== 'horizontal', 'left-1/2': carouselOrientation !== 'horizontal', '-translate-x-1/2': carouselOrientation !== 'horizontal', 'rotate-90': carouselOrientation !== 'horizontal' }",
			IconKind::ArrowRight,
			"Next Slide",
		),
	};
	Button::new()
		.variant(variant)
		.size(size)
		.class("absolute rounded-full size-8")
		.bind("class", position)
		.on("click", action)
		.bind("disabled", disabled)
		.data("slot", slot)
		.with_props(props)
		.child(Icon::new(icon).class("w-4 h-4"))
		.child(PageElement::new("span").attr("class", "sr-only").child(label))
		.render()
}

macro_rules! slide_control {
	($(#[$meta:meta])* $name:ident, $direction:expr, $slot:literal) => {
		$(#[$meta])*
		#[derive(Debug, Clone)]
		pub struct $name {
			variant: Option<ButtonVariant>,
			size: ButtonSize,
			props: Props,
		}

		crate::impl_builder!($name);

		impl Default for $name {
			fn default() -> Self {
				Self {
					variant: Some(ButtonVariant::Outline),
					size: ButtonSize::Icon,
					props: Props::new(),
				}
			}
		}

		impl $name {
			pub fn new() -> Self {
				Self::default()
			}

			pub fn variant(mut self, variant: impl Into<Option<ButtonVariant>>) -> Self {
				self.variant = variant.into();
				self
			}

			pub fn size(mut self, size: ButtonSize) -> Self {
				self.size = size;
				self
			}
		}

		impl Component for $name {
			fn data_slot(&self) -> &'static str {
				$slot
			}

			fn render(self) -> Page {
				slide_button($direction, self.variant, self.size, self.props)
			}
		}

		crate::impl_into_page!($name);
	};
}

slide_control!(
	/// Outlined round button showing the previous slide
	CarouselPrevious,
	Direction::Previous,
	"carousel-previous"
);

slide_control!(
	/// Outlined round button showing the next slide
	CarouselNext,
	Direction::Next,
	"carousel-next"
);

#[cfg(test)]
mod tests {
	use super::*;
	use altar_core::page::IntoPage;
	use rstest::rstest;

	#[rstest]
	#[case(Orientation::Horizontal, "{carouselOrientation: 'horizontal', slideLength: 3, currentSlideIndex: 1, ")]
	#[case(Orientation::Vertical, "{carouselOrientation: 'vertical', slideLength: 3, currentSlideIndex: 1, ")]
	fn test_carousel_data(#[case] orientation: Orientation, #[case] prefix: &str) {
		let page = Carousel::new(orientation, 3).into_page();
		let el = page.as_element().unwrap();
		assert!(el.get_attr("x-data").unwrap().starts_with(prefix));
		assert_eq!(el.get_attr("aria-roledescription"), Some("carousel"));
	}

	#[rstest]
	fn test_carousel_content_and_items() {
		let page = CarouselContent::new()
			.class("h-48")
			.children((0..3).map(|i| CarouselItem::new(i).child(format!("Slide {}", i + 1))))
			.into_page();
		let viewport = page.as_element().unwrap();
		assert_eq!(viewport.get_attr("class"), Some("overflow-hidden"));

		let track = viewport.child_views()[0].as_element().unwrap();
		assert_eq!(track.get_attr("class"), Some("flex h-48"));
		assert_eq!(track.child_views().len(), 3);

		let last = track.child_views()[2].as_element().unwrap();
		assert_eq!(last.get_attr("x-show"), Some("currentSlideIndex === 3"));
		assert_eq!(last.get_attr("aria-roledescription"), Some("slide"));
	}

	#[rstest]
	fn test_carousel_controls() {
		let previous = CarouselPrevious::new().into_page();
		let el = previous.as_element().unwrap();
		assert_eq!(el.get_attr("data-slot"), Some("carousel-previous"));
		assert_eq!(el.get_attr("@click"), Some("previousSlide()"));
		assert_eq!(el.get_attr(":disabled"), Some("currentSlideIndex === 1"));
		let class = el.get_attr("class").unwrap();
		assert!(class.contains("bg-background"));
		assert!(class.ends_with("absolute rounded-full size-8"));

		let html = CarouselNext::new().into_page().render_to_string();
		assert!(html.contains("lucide-arrow-right"));
		assert!(html.contains("<span class=\"sr-only\">Next Slide</span>"));
		assert!(html.contains("currentSlideIndex === slideLength"));
	}
}
