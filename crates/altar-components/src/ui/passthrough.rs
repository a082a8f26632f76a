//! Attribute pass-through onto a caller-supplied element
//!
//! Lets a component lend its attributes to a child element instead of
//! rendering its own tag, e.g. a breadcrumb link rendered as a router link.

use altar_core::page::{IntoPage, Page, PageElement};

use crate::component::{Directives, Props, compose, single_element};
use crate::error::Result;

/// Renders nothing of its own; its attributes land on its only child.
#[derive(Debug, Clone, Default)]
pub struct Passthrough {
	props: Props,
}

crate::impl_builder!(Passthrough);

impl Passthrough {
	pub fn new() -> Self {
		Self::default()
	}

	/// Merges the configured attributes into `child`.
	///
	/// `child` must be exactly one element.
	pub fn wrap(self, child: impl IntoPage) -> Result<Page> {
		let wrapper = compose(PageElement::new("passthrough"), "", Directives::new(), self.props);
		merge_into(wrapper, child).map(Page::Element)
	}
}

/// Moves the attributes of `wrapper` onto the single element in `child`.
///
/// Attributes the child already has win. The class is the child's when it
/// has one, the wrapper's otherwise. The wrapper's tag and children are
/// discarded.
pub(crate) fn merge_into(wrapper: PageElement, child: impl IntoPage) -> Result<PageElement> {
	let child = single_element("Passthrough", child)?;
	let (_, wrapper_attrs, _, _) = wrapper.into_parts();
	let (tag, child_attrs, children, _) = child.into_parts();

	let mut merged = PageElement::new(tag);
	for (name, value) in wrapper_attrs {
		let value = child_attrs
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, v)| v.clone())
			.unwrap_or(value);
		merged.set_attr(name, value);
	}
	for (name, value) in child_attrs {
		if !merged.has_attr(&name) {
			merged.set_attr(name, value);
		}
	}
	Ok(merged.children(children))
}
