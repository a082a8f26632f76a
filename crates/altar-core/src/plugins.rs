//! Helpers for the CSS and client-side frameworks the markup targets.
//!
//! - [`tailwind`]: merges Tailwind CSS utility classes.
//! - [`alpine`]: models and renders Alpine.js directive data.

pub mod alpine;
pub mod tailwind;

pub use alpine::{AlpineData, AlpineValue, Directive, Statement, StatementKind};
pub use tailwind::tw_merge;
