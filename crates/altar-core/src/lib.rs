//! # Altar Core
//!
//! Building blocks shared by the altar-ui component catalog:
//!
//! - [`page`]: the HTML element tree components render into, with
//!   escaping and child normalization.
//! - [`plugins::tailwind`]: Tailwind CSS class merging with conflict
//!   resolution.
//! - [`plugins::alpine`]: Alpine.js directive data and its merge rules.

pub mod page;
pub mod plugins;

pub use page::{AttrValue, IntoPage, Page, PageElement};
pub use plugins::{AlpineData, AlpineValue, Directive, Statement, StatementKind, tw_merge};
