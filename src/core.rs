//! Element tree, class merging and Alpine.js data.
//!
//! # Examples
//!
//! ```
//! use altar_ui::core::page::{IntoPage, PageElement};
//! use altar_ui::core::plugins::tailwind::tw_merge;
//!
//! let el = PageElement::new("div").attr("class", tw_merge(["p-2", "p-4"]));
//! assert_eq!(el.into_page().render_to_string(), "<div class=\"p-4\"></div>");
//! ```

pub use altar_core::*;
