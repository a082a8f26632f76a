//! Avatar: an image with a fallback shown until the image has loaded

use altar_core::page::{Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement};

use crate::component::{Component, Directives, Props, compose};

/// Avatar root; tracks the image load status in `status`
#[derive(Debug, Clone, Default)]
pub struct Avatar {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Avatar, children);

impl Avatar {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for Avatar {
	fn data_slot(&self) -> &'static str {
		"avatar"
	}

	fn render(self) -> Page {
		let element = PageElement::new("span")
			.attr("data-slot", "avatar")
			.children(self.children);
		Page::Element(compose(
			element,
			"relative flex size-8 shrink-0 overflow-hidden rounded-full",
			Directives::new().data(AlpineData::new().entry("status", "loading")),
			self.props,
		))
	}
}

crate::impl_into_page!(Avatar);

/// Avatar image, shown once loaded
#[derive(Debug, Clone)]
pub struct AvatarImage {
	src: String,
	props: Props,
}

crate::impl_builder!(AvatarImage);

impl AvatarImage {
	pub fn new(src: impl Into<String>) -> Self {
		Self {
			src: src.into(),
			props: Props::new(),
		}
	}
}

impl Component for AvatarImage {
	fn data_slot(&self) -> &'static str {
		"avatar-image"
	}

	fn render(self) -> Page {
		let element = PageElement::new("img")
			.attr("data-slot", "avatar-image")
			.attr("src", self.src)
			.flag("x-cloak", true)
			.attr("x-show", "status === 'loaded'")
			.attr("@load", "status = 'loaded'")
			.attr("@error", "status = 'error'");
		// Cached images can finish loading before Alpine attaches @load.
		let init = AlpineData::new().entry(
			"check_image_load_status_when_loading_from_cache",
			Statement::instance(
				"status = $el.complete ? ($el.naturalWidth ? 'loaded' : 'error') : status",
			),
		);
		Page::Element(compose(
			element,
			"aspect-square size-full",
			Directives::new().init(init),
			self.props,
		))
	}
}

crate::impl_into_page!(AvatarImage);

container! {
	/// Placeholder shown while the image is loading or after it failed
	AvatarFallback: "span", slot = "avatar-fallback",
	class = "bg-muted flex size-full items-center justify-center rounded-full",
	attrs = ["x-show" => "status !== 'loaded'"],
	flags = ["x-cloak"],
}
