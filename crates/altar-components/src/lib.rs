//! # Altar Components
//!
//! Server-rendered UI components styled with Tailwind CSS and wired with
//! Alpine.js directives.
//!
//! ## Usage
//!
//! ```
//! use altar_components::component::{WithChildren, WithProps};
//! use altar_components::ui::button::{Button, ButtonVariant};
//! use altar_components::ui::card::{Card, CardContent, CardHeader, CardTitle};
//! use altar_core::page::IntoPage;
//!
//! let html = Card::new()
//!     .class("w-96")
//!     .child(CardHeader::new().child(CardTitle::new().child("Deploy")))
//!     .child(CardContent::new().child(Button::new().variant(ButtonVariant::Outline).child("Cancel")))
//!     .into_page()
//!     .render_to_string();
//! assert!(html.starts_with("<div data-slot=\"card\""));
//! ```
//!
//! ## Modules
//!
//! - [`component`]: the builder traits and the attribute merge every
//!   component renders through
//! - [`ui`]: the catalog
//! - [`icons`]: inline Lucide icons
//! - [`theme`]: CSS variable themes loaded from TOML or JSON
//! - [`responsive`]: Tailwind breakpoints

pub mod component;
pub mod error;
pub mod icons;
pub mod responsive;
pub mod theme;
pub mod ui;

pub use component::{Component, Directives, ElementId, Orientation, Props, WithChildren, WithProps};
pub use error::{ComponentError, Result};
pub use icons::{Icon, IconKind};
pub use responsive::Breakpoint;
pub use theme::{Palette, Theme, ThemeError};
