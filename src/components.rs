//! The component catalog, icons, themes and breakpoints.
//!
//! # Examples
//!
//! ```
//! use altar_ui::components::theme::Theme;
//!
//! let css = Theme::default().radius("0.5rem").stylesheet();
//! assert!(css.contains("--radius: 0.5rem;"));
//! ```

pub use altar_components::*;
