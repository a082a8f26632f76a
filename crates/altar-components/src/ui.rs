//! The component catalog
//!
//! Each module holds one family of components. Components are builders:
//! configure them with the [`WithProps`](crate::component::WithProps) methods,
//! add children through [`WithChildren`](crate::component::WithChildren) when
//! they accept any, and nest them anywhere an [`IntoPage`] is expected.
//!
//! [`IntoPage`]: altar_core::page::IntoPage

/// Declares a component that renders one element wrapping its children.
macro_rules! container {
	(
		$(#[$meta:meta])*
		$name:ident: $tag:literal, slot = $slot:literal, class = $base:expr
		$(, attrs = [$($attr:literal => $value:expr),* $(,)?])?
		$(, flags = [$($flag:literal),* $(,)?])?
		$(,)?
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Default)]
		pub struct $name {
			props: $crate::component::Props,
			children: Vec<::altar_core::page::Page>,
		}

		impl $name {
			pub fn new() -> Self {
				Self::default()
			}
		}

		$crate::impl_builder!($name, children);

		impl $crate::component::Component for $name {
			fn data_slot(&self) -> &'static str {
				$slot
			}

			fn render(self) -> ::altar_core::page::Page {
				let element = ::altar_core::page::PageElement::new($tag)
					.attr("data-slot", $slot)
					$($(.attr($attr, $value))*)?
					$($(.flag($flag, true))*)?
					.children(self.children);
				::altar_core::page::Page::Element($crate::component::compose(
					element,
					$base,
					$crate::component::Directives::new(),
					self.props,
				))
			}
		}

		$crate::impl_into_page!($name);
	};
}

/// Declares a [`Button`](button::Button) preset with fixed attributes that
/// still takes a variant and a size.
macro_rules! trigger {
	(
		$(#[$meta:meta])*
		$name:ident, slot = $slot:literal,
		attrs = [$($attr:literal => $value:expr),* $(,)?]
		$(,)?
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone)]
		pub struct $name {
			variant: Option<$crate::ui::button::ButtonVariant>,
			size: $crate::ui::button::ButtonSize,
			props: $crate::component::Props,
			children: Vec<::altar_core::page::Page>,
		}

		impl Default for $name {
			fn default() -> Self {
				Self {
					variant: Some($crate::ui::button::ButtonVariant::Default),
					size: $crate::ui::button::ButtonSize::Default,
					props: $crate::component::Props::new(),
					children: Vec::new(),
				}
			}
		}

		impl $name {
			pub fn new() -> Self {
				Self::default()
			}

			pub fn variant(
				mut self,
				variant: impl Into<Option<$crate::ui::button::ButtonVariant>>,
			) -> Self {
				self.variant = variant.into();
				self
			}

			pub fn size(mut self, size: $crate::ui::button::ButtonSize) -> Self {
				self.size = size;
				self
			}
		}

		$crate::impl_builder!($name, children);

		impl $crate::component::Component for $name {
			fn data_slot(&self) -> &'static str {
				$slot
			}

			fn render(self) -> ::altar_core::page::Page {
				use $crate::component::{Component, WithChildren, WithProps};

				$crate::ui::button::Button::new()
					.variant(self.variant)
					.size(self.size)
					.attr("type", "button")
					.attr("data-slot", $slot)
					$(.attr($attr, $value))*
					.with_props(self.props)
					.children(self.children)
					.render()
			}
		}

		$crate::impl_into_page!($name);
	};
}

pub mod accordion;
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod carousel;
pub mod chart;
pub mod checkbox;
pub mod collapsible;
pub mod dialog;
pub mod dropdown;
pub mod form;
pub mod input;
pub mod label;
pub mod navigation_menu;
pub mod pagination;
pub mod passthrough;
pub mod progress;
pub mod radio;
pub mod separator;
pub mod sidebar;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod textarea;
