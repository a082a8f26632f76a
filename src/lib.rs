//! # Altar UI
//!
//! Server-rendered UI components for Rust web applications, styled with
//! Tailwind CSS utility classes and made interactive with Alpine.js
//! directives.
//!
//! Components are plain builders. Each one merges the caller's attributes
//! with its own base classes and Alpine.js data, checks its children where it
//! constrains them, and renders into a [`Page`] tree that serializes to HTML.
//! Nothing runs on the client except Alpine.js evaluating the emitted
//! directive strings.
//!
//! ## Crates
//!
//! - [`core`] (`altar-core`): the element tree, escaping, Tailwind class
//!   merging and the Alpine.js data model.
//! - [`components`] (`altar-components`): the component catalog, icons,
//!   themes and breakpoints.
//!
//! ## Quick Example
//!
//! ```
//! use altar_ui::prelude::*;
//! use altar_ui::components::ui::dialog::*;
//!
//! let page = Dialog::new()
//!     .child(DialogTrigger::new().variant(ButtonVariant::Outline).child("Edit profile"))
//!     .child(
//!         DialogContent::new()
//!             .class("sm:max-w-[425px]")
//!             .child(DialogHeader::new().child(DialogTitle::new().child("Edit profile"))),
//!     )
//!     .into_page();
//!
//! let html = page.render_to_string();
//! assert!(html.contains("x-data=\"{modalIsOpen: false}\""));
//! ```
//!
//! ## Conventions
//!
//! - Caller classes win over a component's base classes when they conflict.
//! - `x-data`, `x-init` and `x-effect` are merged with the component's own
//!   data instead of replacing it.
//! - Components whose children are constrained return a
//!   [`Result`](components::Result) from the constructor or method taking
//!   them.

pub mod components;
pub mod core;

pub use altar_components::{Component, ComponentError, Result};
pub use altar_core::{IntoPage, Page, PageElement};

/// Everything needed to build pages with the catalog
pub mod prelude {
	pub use altar_components::component::{Component, Props, WithChildren, WithProps};
	pub use altar_components::error::{ComponentError, Result};
	pub use altar_components::icons::{Icon, IconKind};
	pub use altar_components::theme::Theme;
	pub use altar_components::ui::button::{Button, ButtonSize, ButtonVariant};
	pub use altar_core::page::{AttrValue, IntoPage, Page, PageElement};
	pub use altar_core::plugins::alpine::{AlpineData, Statement};
	pub use altar_core::plugins::tailwind::tw_merge;
}
