//! Page types for component rendering.
//!
//! This module provides the element tree every component renders into.
//!
//! ## Overview
//!
//! The `Page` enum is the core abstraction for all markup produced by the
//! component catalog. It can represent elements, text nodes and fragments.
//! Reactive behavior is not modelled here: it lives in attribute values
//! (Alpine.js directives) that a client-side runtime evaluates.
//!
//! ## Example
//!
//! ```
//! use altar_core::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("div")
//!     .attr("class", "container")
//!     .flag("x-cloak", true)
//!     .child("Hello, World!")
//!     .into_page();
//!
//! assert_eq!(
//!     view.render_to_string(),
//!     "<div class=\"container\" x-cloak>Hello, World!</div>"
//! );
//! ```

mod util;

pub use util::{BOOLEAN_ATTRS, VOID_ELEMENTS, is_boolean_attr_truthy, is_void_element};

use std::borrow::Cow;

/// Value of an HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// A regular `name="value"` attribute.
	Text(Cow<'static, str>),
	/// A bare attribute rendered without a value (e.g. `x-cloak`).
	Flag,
}

impl AttrValue {
	/// Returns the text value, or `None` for a bare flag.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(value) => Some(value),
			Self::Flag => None,
		}
	}
}

impl From<&'static str> for AttrValue {
	fn from(value: &'static str) -> Self {
		Self::Text(Cow::Borrowed(value))
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Text(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for AttrValue {
	fn from(value: Cow<'static, str>) -> Self {
		Self::Text(value)
	}
}

/// A unified representation of renderable content.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
	/// An HTML element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// A fragment containing multiple pages (no wrapper element).
	Fragment(Vec<Page>),
	/// An empty page (renders nothing).
	Empty,
}

/// Represents an HTML element in the page tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes in insertion order. Names are unique.
	attrs: Vec<(Cow<'static, str>, AttrValue)>,
	/// Child pages.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = is_void_element(&tag);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets an attribute, replacing any previous value with the same name.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.set_attr(name, AttrValue::Text(value.into()));
		self
	}

	/// Sets an attribute only when a value is present.
	pub fn attr_opt(
		self,
		name: impl Into<Cow<'static, str>>,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	/// Adds a bare attribute when `on` is true, removes it otherwise.
	///
	/// # Example
	///
	/// ```
	/// use altar_core::page::{IntoPage, PageElement};
	///
	/// let html = PageElement::new("div")
	///     .flag("x-collapse", true)
	///     .flag("hidden", false)
	///     .into_page()
	///     .render_to_string();
	/// assert_eq!(html, "<div x-collapse></div>");
	/// ```
	pub fn flag(mut self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
		self.set_flag(name, on);
		self
	}

	/// Adds a child page.
	///
	/// Fragments are flattened and empty pages are dropped.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.add_child(child);
		self
	}

	/// Adds multiple child pages.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		for child in children {
			self.add_child(child);
		}
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, AttrValue)] {
		&self.attrs
	}

	/// Returns the raw value of an attribute.
	pub fn get_attr_value(&self, name: &str) -> Option<&AttrValue> {
		self.attrs
			.iter()
			.find(|(n, _)| n.as_ref() == name)
			.map(|(_, v)| v)
	}

	/// Returns the text value of an attribute.
	///
	/// Bare flags have no text value and return `None`; use
	/// [`has_attr`](Self::has_attr) for them.
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		self.get_attr_value(name).and_then(AttrValue::as_text)
	}

	/// Returns whether the attribute is present.
	pub fn has_attr(&self, name: &str) -> bool {
		self.get_attr_value(name).is_some()
	}

	/// Returns the child pages.
	pub fn child_views(&self) -> &[Page] {
		&self.children
	}

	/// Returns the child pages mutably.
	pub fn child_views_mut(&mut self) -> &mut Vec<Page> {
		&mut self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Sets an attribute in place, keeping its position if it already exists.
	pub fn set_attr(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Sets or removes a bare attribute in place.
	pub fn set_flag(&mut self, name: impl Into<Cow<'static, str>>, on: bool) {
		let name = name.into();
		if on {
			self.set_attr(name, AttrValue::Flag);
		} else {
			self.remove_attr(&name);
		}
	}

	/// Removes an attribute and returns its previous value.
	pub fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
		let index = self.attrs.iter().position(|(n, _)| n.as_ref() == name)?;
		Some(self.attrs.remove(index).1)
	}

	/// Adds a child in place.
	pub fn add_child(&mut self, child: impl IntoPage) {
		self.children.extend(child.into_page().flatten());
	}

	/// Consumes the element and returns the children.
	pub fn into_children(self) -> Vec<Page> {
		self.children
	}

	/// Consumes the element and returns all parts.
	///
	/// Returns a tuple of (tag, attrs, children, is_void).
	#[allow(clippy::type_complexity)]
	pub fn into_parts(
		self,
	) -> (
		Cow<'static, str>,
		Vec<(Cow<'static, str>, AttrValue)>,
		Vec<Page>,
		bool,
	) {
		(self.tag, self.attrs, self.children, self.is_void)
	}
}

impl Page {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text page.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty page.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the element if this page is one.
	pub fn as_element(&self) -> Option<&PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the element mutably if this page is one.
	pub fn as_element_mut(&mut self) -> Option<&mut PageElement> {
		match self {
			Page::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Normalizes this page into its top-level nodes.
	///
	/// Fragments are expanded recursively and empty pages are dropped, so the
	/// result only holds elements and text nodes.
	///
	/// # Example
	///
	/// ```
	/// use altar_core::page::{IntoPage, Page};
	///
	/// let nodes = ("a", (Page::empty(), vec!["b", "c"]), None::<&'static str>)
	///     .into_page()
	///     .flatten();
	/// assert_eq!(nodes.len(), 3);
	/// ```
	pub fn flatten(self) -> Vec<Page> {
		let mut out = Vec::new();
		self.flatten_into(&mut out);
		out
	}

	fn flatten_into(self, out: &mut Vec<Page>) {
		match self {
			Page::Fragment(children) => {
				for child in children {
					child.flatten_into(out);
				}
			}
			Page::Empty => {}
			other => out.push(other),
		}
	}

	/// Finds the first element (depth-first, pre-order) matching the predicate.
	pub fn find_element(&self, predicate: &dyn Fn(&PageElement) -> bool) -> Option<&PageElement> {
		match self {
			Page::Element(el) => {
				if predicate(el) {
					return Some(el);
				}
				el.children
					.iter()
					.find_map(|child| child.find_element(predicate))
			}
			Page::Fragment(children) => children
				.iter()
				.find_map(|child| child.find_element(predicate)),
			Page::Text(_) | Page::Empty => None,
		}
	}

	/// Renders the page to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					match value {
						AttrValue::Flag => {
							output.push(' ');
							output.push_str(name);
						}
						AttrValue::Text(text) => {
							// Skip boolean attributes with falsy values (empty, "false", "0")
							let name_str: &str = name.as_ref();
							if BOOLEAN_ATTRS.contains(&name_str) && !is_boolean_attr_truthy(text) {
								continue;
							}

							output.push(' ');
							output.push_str(name);
							output.push_str("=\"");
							output.push_str(&html_escape::encode_double_quoted_attribute(text));
							output.push('"');
						}
					}
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_views() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => {
				output.push_str(&html_escape::encode_text(text));
			}
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}
}

/// Trait for types that can be converted into a Page.
///
/// Implementing this trait allows any type to be used as a child in the
/// element tree.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl IntoPage for Cow<'static, str> {
	fn into_page(self) -> Page {
		Page::Text(self)
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

// Tuple implementations for fragments

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage, D: IntoPage> IntoPage for (A, B, C, D) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
			self.3.into_page(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_element_creation() {
		let el = PageElement::new("div");
		assert_eq!(el.tag, "div");
		assert!(!el.is_void);
		assert!(el.attrs.is_empty());
		assert!(el.children.is_empty());
	}

	#[rstest]
	#[case("br", true)]
	#[case("img", true)]
	#[case("input", true)]
	#[case("div", false)]
	#[case("span", false)]
	fn test_void_element_detection(#[case] tag: &'static str, #[case] expected: bool) {
		assert_eq!(PageElement::new(tag).is_void(), expected);
	}

	#[rstest]
	fn test_attr_replaces_existing_value_in_place() {
		let el = PageElement::new("div")
			.attr("id", "main")
			.attr("class", "a")
			.attr("id", "other");
		assert_eq!(el.attrs.len(), 2);
		assert_eq!(el.attrs[0].0, "id");
		assert_eq!(el.get_attr("id"), Some("other"));
	}

	#[rstest]
	fn test_flag_and_remove() {
		let mut el = PageElement::new("div").flag("x-cloak", true);
		assert!(el.has_attr("x-cloak"));
		assert_eq!(el.get_attr("x-cloak"), None);

		el.set_flag("x-cloak", false);
		assert!(!el.has_attr("x-cloak"));
		assert_eq!(el.remove_attr("x-cloak"), None);
	}

	#[rstest]
	fn test_remove_attr_returns_previous_value() {
		let mut el = PageElement::new("button").attr("@click.close", "true");
		let removed = el.remove_attr("@click.close");
		assert_eq!(removed, Some(AttrValue::from("true")));
		assert!(el.attrs().is_empty());
	}

	#[rstest]
	fn test_attr_opt() {
		let el = PageElement::new("input")
			.attr_opt("maxlength", Some("10"))
			.attr_opt("minlength", None::<&'static str>);
		assert_eq!(el.get_attr("maxlength"), Some("10"));
		assert!(!el.has_attr("minlength"));
	}

	#[rstest]
	fn test_children_are_flattened() {
		let el = PageElement::new("div")
			.child(vec!["a", "b"])
			.child(Page::empty())
			.child(None::<String>)
			.children([("c", "d")]);
		assert_eq!(el.child_views().len(), 4);
	}

	#[rstest]
	fn test_flatten_nested_fragments() {
		let page = Page::fragment([
			Page::fragment([Page::text("a"), Page::empty()]),
			Page::text("b"),
			Page::fragment(Vec::<Page>::new()),
		]);
		assert_eq!(page.flatten(), vec![Page::text("a"), Page::text("b")]);
	}

	#[rstest]
	fn test_find_element() {
		let page = PageElement::new("div")
			.child(PageElement::new("span").attr("data-slot", "first"))
			.child(PageElement::new("p").child(PageElement::new("span").attr("data-slot", "second")))
			.into_page();

		let found = page.find_element(&|el| el.get_attr("data-slot") == Some("second"));
		assert_eq!(found.map(|el| el.tag_name()), Some("span"));
		assert!(page.find_element(&|el| el.tag_name() == "table").is_none());
	}

	#[rstest]
	fn test_render_simple_element() {
		let view = PageElement::new("div").into_page();
		assert_eq!(view.render_to_string(), "<div></div>");
	}

	#[rstest]
	fn test_render_void_element() {
		let view = PageElement::new("input").attr("type", "text").into_page();
		assert_eq!(view.render_to_string(), "<input type=\"text\" />");
	}

	#[rstest]
	fn test_render_element_with_children() {
		let view = PageElement::new("div")
			.child("Hello, ")
			.child(PageElement::new("strong").child("World"))
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		let view = Page::text("<script>alert(1)</script> & more");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"
		);
	}

	#[rstest]
	fn test_render_attribute_escaping_keeps_single_quotes() {
		let view = PageElement::new("button")
			.attr("@click", "$dispatch('reset-form-data'); modalIsOpen = false")
			.attr("data-note", "say \"hi\"")
			.into_page();
		let html = view.render_to_string();
		assert!(html.contains("@click=\"$dispatch('reset-form-data'); modalIsOpen = false\""));
		assert!(html.contains("data-note=\"say &quot;hi&quot;\""));
	}

	#[rstest]
	fn test_render_flag_attribute() {
		let view = PageElement::new("div")
			.attr("x-show", "open")
			.flag("x-transition.opacity", true)
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<div x-show=\"open\" x-transition.opacity></div>"
		);
	}

	#[rstest]
	#[case("")]
	#[case("false")]
	#[case("0")]
	fn test_boolean_attr_falsy_text_not_rendered(#[case] value: &'static str) {
		let view = PageElement::new("input").attr("required", value).into_page();
		assert_eq!(view.render_to_string(), "<input />");
	}

	#[rstest]
	fn test_boolean_attr_flag_rendered_bare() {
		let view = PageElement::new("input").flag("required", true).into_page();
		assert_eq!(view.render_to_string(), "<input required />");
	}

	#[rstest]
	fn test_non_boolean_attr_false_rendered() {
		let view = PageElement::new("div")
			.attr("data-active", "false")
			.into_page();
		assert!(view.render_to_string().contains("data-active=\"false\""));
	}

	#[rstest]
	fn test_into_page_conversions() {
		assert_eq!("Hello".into_page().render_to_string(), "Hello");
		assert_eq!(Some("Hi").into_page().render_to_string(), "Hi");
		assert_eq!(None::<String>.into_page().render_to_string(), "");
		assert_eq!(vec!["A", "B"].into_page().render_to_string(), "AB");
		assert_eq!(("Hello, ", "World!").into_page().render_to_string(), "Hello, World!");
		assert_eq!(().into_page(), Page::Empty);
	}
}
