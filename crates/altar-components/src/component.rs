//! Core component traits and the shared attribute merge
//!
//! Every component in the catalog is a builder that owns a [`Props`] value
//! (what the caller asked for) and, when it accepts children, a list of
//! normalized child pages. Rendering goes through [`compose`], which merges
//! the component's base classes and Alpine.js data with the caller's props.

use std::borrow::Cow;

use altar_core::page::{AttrValue, IntoPage, Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, AlpineValue, Directive, Statement};
use altar_core::plugins::tailwind::tw_merge;

use crate::error::{ComponentError, Result};

/// Component trait - base interface for all UI components
pub trait Component {
	/// Returns the default `data-slot` of the component's root element
	fn data_slot(&self) -> &'static str;

	/// Renders the component into an element tree
	fn render(self) -> Page;
}

/// Implements [`IntoPage`] for components so they nest like any other page.
#[macro_export]
macro_rules! impl_into_page {
	($($ty:ty),+ $(,)?) => {
		$(
			impl ::altar_core::page::IntoPage for $ty {
				fn into_page(self) -> ::altar_core::page::Page {
					$crate::component::Component::render(self)
				}
			}
		)+
	};
}

/// Caller-supplied attributes of a component.
///
/// `class`, `x-data`, `x-init` and `x-effect` are kept apart from the other
/// attributes so they can be merged with the component's own values instead
/// of replacing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
	class: Option<String>,
	attrs: Vec<(Cow<'static, str>, AttrValue)>,
	x_data: Option<AlpineData>,
	x_init: Option<AlpineData>,
	x_effect: Option<AlpineData>,
}

impl Props {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an attribute, replacing any previous value.
	pub fn set(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) {
		let name = name.into();
		let value = value.into();
		if name == "class" {
			self.class = value.as_text().map(str::to_owned);
			return;
		}
		if let Some(directive) = Directive::from_attr(&name) {
			let data = match value {
				AttrValue::Text(text) => AlpineData::from(text.into_owned()),
				AttrValue::Flag => AlpineData::new(),
			};
			*self.directive_slot(directive) = Some(data);
			return;
		}
		match self.attrs.iter_mut().find(|(n, _)| *n == name) {
			Some(slot) => slot.1 = value,
			None => self.attrs.push((name, value)),
		}
	}

	/// Returns the raw value of a regular attribute.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.attrs
			.iter()
			.find(|(n, _)| n.as_ref() == name)
			.map(|(_, v)| v)
	}

	/// Returns the text value of a regular attribute.
	pub fn get_text(&self, name: &str) -> Option<&str> {
		self.get(name).and_then(AttrValue::as_text)
	}

	/// Removes a regular attribute and returns its value.
	pub fn take(&mut self, name: &str) -> Option<AttrValue> {
		let index = self.attrs.iter().position(|(n, _)| n.as_ref() == name)?;
		Some(self.attrs.remove(index).1)
	}

	/// Removes a regular attribute and returns its text value.
	///
	/// Empty values count as absent.
	pub fn take_text(&mut self, name: &str) -> Option<String> {
		match self.take(name)? {
			AttrValue::Text(text) if !text.is_empty() => Some(text.into_owned()),
			_ => None,
		}
	}

	/// Removes a regular attribute. Returns whether it was present.
	pub fn remove(&mut self, name: &str) -> bool {
		self.take(name).is_some()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Returns the caller's class string.
	pub fn class_name(&self) -> Option<&str> {
		self.class.as_deref()
	}

	/// Removes and returns the caller's class string.
	pub fn take_class(&mut self) -> Option<String> {
		self.class.take()
	}

	/// Appends classes to the caller's class string.
	pub fn add_class(&mut self, class: &str) {
		match &mut self.class {
			Some(existing) if !existing.is_empty() => {
				existing.push(' ');
				existing.push_str(class);
			}
			_ => self.class = Some(class.to_owned()),
		}
	}

	/// Returns the caller's data for `directive`.
	pub fn directive(&self, directive: Directive) -> Option<&AlpineData> {
		match directive {
			Directive::Data => self.x_data.as_ref(),
			Directive::Init => self.x_init.as_ref(),
			Directive::Effect => self.x_effect.as_ref(),
		}
	}

	/// Removes and returns the caller's data for `directive`.
	pub fn take_directive(&mut self, directive: Directive) -> Option<AlpineData> {
		self.directive_slot(directive).take()
	}

	/// Merges `data` into the caller's data for `directive`.
	pub fn merge_directive(&mut self, directive: Directive, data: AlpineData) {
		let slot = self.directive_slot(directive);
		*slot = Some(slot.take().unwrap_or_default().merge(data));
	}

	fn directive_slot(&mut self, directive: Directive) -> &mut Option<AlpineData> {
		match directive {
			Directive::Data => &mut self.x_data,
			Directive::Init => &mut self.x_init,
			Directive::Effect => &mut self.x_effect,
		}
	}

	/// Regular attributes in insertion order.
	pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.attrs.iter().map(|(n, v)| (n.as_ref(), v))
	}

	/// Merges `other` into `self`; `other` wins.
	///
	/// Classes are concatenated, attributes are overridden and directive data
	/// is merged.
	pub fn merge(mut self, other: Props) -> Self {
		if let Some(class) = other.class {
			self.add_class(&class);
		}
		for (name, value) in other.attrs {
			self.set(name, value);
		}
		for (directive, data) in [
			(Directive::Data, other.x_data),
			(Directive::Init, other.x_init),
			(Directive::Effect, other.x_effect),
		] {
			if let Some(data) = data {
				self.merge_directive(directive, data);
			}
		}
		self
	}

	/// Returns whether no attribute, class or directive data is set.
	pub fn is_empty(&self) -> bool {
		self.class.is_none()
			&& self.attrs.is_empty()
			&& self.x_data.is_none()
			&& self.x_init.is_none()
			&& self.x_effect.is_none()
	}
}

/// Builder methods shared by every component.
pub trait WithProps: Sized {
	fn props_mut(&mut self) -> &mut Props;

	/// Sets an attribute. `class`, `x-data`, `x-init` and `x-effect` are merged.
	fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
		let name = name.into();
		let value = value.into();
		let props = self.props_mut();
		if name == "class" {
			props.add_class(&value);
		} else if let Some(directive) = Directive::from_attr(&name) {
			props.merge_directive(directive, AlpineData::from(value.into_owned()));
		} else {
			props.set(name, AttrValue::Text(value));
		}
		self
	}

	/// Adds a bare attribute when `on` is true, removes it otherwise.
	fn flag(mut self, name: impl Into<Cow<'static, str>>, on: bool) -> Self {
		let name = name.into();
		if on {
			self.props_mut().set(name, AttrValue::Flag);
		} else {
			self.props_mut().remove(&name);
		}
		self
	}

	/// Appends classes. Conflicts with the component's base classes resolve
	/// in favor of these.
	fn class(mut self, class: impl AsRef<str>) -> Self {
		self.props_mut().add_class(class.as_ref());
		self
	}

	fn id(self, id: impl Into<Cow<'static, str>>) -> Self {
		self.attr("id", id)
	}

	fn name(self, name: impl Into<Cow<'static, str>>) -> Self {
		self.attr("name", name)
	}

	/// Sets `aria-{name}`.
	fn aria(self, name: &str, value: impl Into<Cow<'static, str>>) -> Self {
		self.attr(format!("aria-{name}"), value)
	}

	/// Sets `data-{name}`.
	fn data(self, name: &str, value: impl Into<Cow<'static, str>>) -> Self {
		self.attr(format!("data-{name}"), value)
	}

	/// Sets an Alpine.js event listener (`@{event}`).
	fn on(self, event: &str, handler: impl Into<Cow<'static, str>>) -> Self {
		self.attr(format!("@{event}"), handler)
	}

	/// Sets an Alpine.js attribute binding (`:{name}`).
	fn bind(self, name: &str, expression: impl Into<Cow<'static, str>>) -> Self {
		self.attr(format!(":{name}"), expression)
	}

	fn x_data(mut self, data: impl Into<AlpineData>) -> Self {
		self.props_mut().merge_directive(Directive::Data, data.into());
		self
	}

	fn x_init(mut self, data: impl Into<AlpineData>) -> Self {
		self.props_mut().merge_directive(Directive::Init, data.into());
		self
	}

	fn x_effect(mut self, data: impl Into<AlpineData>) -> Self {
		self.props_mut().merge_directive(Directive::Effect, data.into());
		self
	}

	/// Merges a prepared [`Props`] value.
	fn with_props(mut self, props: Props) -> Self {
		let current = std::mem::take(self.props_mut());
		*self.props_mut() = current.merge(props);
		self
	}
}

/// Child management for components that accept children.
pub trait WithChildren: Sized {
	fn children_mut(&mut self) -> &mut Vec<Page>;

	/// Adds a child. Fragments are flattened and empty pages dropped.
	fn child(mut self, child: impl IntoPage) -> Self {
		self.children_mut().extend(child.into_page().flatten());
		self
	}

	fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		for child in children {
			self.children_mut().extend(child.into_page().flatten());
		}
		self
	}
}

/// Implements [`WithProps`] (and optionally [`WithChildren`]) for builders
/// with `props` and `children` fields.
#[macro_export]
macro_rules! impl_builder {
	($ty:ty) => {
		impl $crate::component::WithProps for $ty {
			fn props_mut(&mut self) -> &mut $crate::component::Props {
				&mut self.props
			}
		}
	};
	($ty:ty, children) => {
		$crate::impl_builder!($ty);

		impl $crate::component::WithChildren for $ty {
			fn children_mut(&mut self) -> &mut Vec<::altar_core::page::Page> {
				&mut self.children
			}
		}
	};
}

/// Alpine.js data a component contributes to its root element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directives {
	pub data: Option<AlpineData>,
	pub init: Option<AlpineData>,
	pub effect: Option<AlpineData>,
}

impl Directives {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn data(mut self, data: AlpineData) -> Self {
		self.data = Some(data);
		self
	}

	pub fn init(mut self, data: AlpineData) -> Self {
		self.init = Some(data);
		self
	}

	pub fn effect(mut self, data: AlpineData) -> Self {
		self.effect = Some(data);
		self
	}
}

/// Applies base styling, base directives and caller props to `element`.
///
/// - the class becomes `tw_merge([base_class, caller_class])`,
/// - each directive is the base data merged with the caller's,
/// - caller attributes override attributes already on `element`.
pub fn compose(
	mut element: PageElement,
	base_class: &str,
	base: Directives,
	props: Props,
) -> PageElement {
	let Props {
		class,
		attrs,
		x_data,
		x_init,
		x_effect,
	} = props;

	let class = tw_merge([base_class, class.as_deref().unwrap_or_default()]);
	if !class.is_empty() {
		element.set_attr("class", class);
	}

	for (directive, base, caller) in [
		(Directive::Data, base.data, x_data),
		(Directive::Init, base.init, x_init),
		(Directive::Effect, base.effect, x_effect),
	] {
		let merged = match (base, caller) {
			(None, None) => continue,
			(base, caller) => base.unwrap_or_default().merge_opt(caller),
		};
		if directive != Directive::Data && merged.is_empty() {
			continue;
		}
		element.set_attr(directive.as_str(), merged.render(directive));
	}

	for (name, value) in attrs {
		element.set_attr(name, value);
	}
	element
}

/// Layout axis of separators and carousels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
	#[default]
	Horizontal,
	Vertical,
}

impl Orientation {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Horizontal => "horizontal",
			Self::Vertical => "vertical",
		}
	}
}

/// An element id following the `id` / `:id` convention.
///
/// Ids containing an Alpine `$id(...)` call, or passed as `:id`, are bound
/// expressions; any other id is a static, slugified value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementId {
	Static(String),
	Bound(String),
}

impl ElementId {
	/// Takes the id from `props`, or scopes a fresh `$id('<scope>')`.
	///
	/// ```
	/// use altar_components::component::{ElementId, Props};
	///
	/// let mut props = Props::new();
	/// props.set("id", "Billing Address");
	/// assert_eq!(
	///     ElementId::resolve(&mut props, "accordion-item"),
	///     ElementId::Static("billing-address".into())
	/// );
	/// assert_eq!(
	///     ElementId::resolve(&mut Props::new(), "tab"),
	///     ElementId::Bound("$id('tab')".into())
	/// );
	/// ```
	pub fn resolve(props: &mut Props, scope: &str) -> Self {
		if let Some(id) = props.take_text("id") {
			return Self::classify(id);
		}
		if let Some(id) = props.take_text(":id") {
			return Self::Bound(id);
		}
		Self::Bound(format!("$id('{scope}')"))
	}

	fn classify(id: String) -> Self {
		if id.contains("$id") {
			Self::Bound(id)
		} else {
			Self::Static(id.to_lowercase().replace(' ', "-"))
		}
	}

	/// Returns the id as a JavaScript expression.
	pub fn expression(&self) -> String {
		match self {
			Self::Static(id) => format!("'{id}'"),
			Self::Bound(expression) => expression.clone(),
		}
	}

	/// Returns the id as a template literal fragment.
	pub fn template_fragment(&self) -> String {
		match self {
			Self::Static(id) => id.clone(),
			Self::Bound(expression) => format!("${{{expression}}}"),
		}
	}

	/// Returns the value stored under a scoped `x-data` key.
	pub fn to_alpine(&self) -> AlpineValue {
		match self {
			Self::Static(id) => AlpineValue::from(id.as_str()),
			Self::Bound(expression) => Statement::assignment(expression.as_str()).into(),
		}
	}

	/// Sets `id` or `:id` on `element`.
	pub fn apply(&self, element: &mut PageElement) {
		match self {
			Self::Static(id) => element.set_attr("id", id.clone()),
			Self::Bound(expression) => element.set_attr(":id", expression.clone()),
		}
	}
}

/// Describes a page for error messages.
pub(crate) fn describe(page: &Page) -> String {
	match page {
		Page::Element(el) => format!("<{}> element", el.tag_name()),
		Page::Text(_) => "text".to_owned(),
		Page::Fragment(children) => format!("fragment of {}", children.len()),
		Page::Empty => "nothing".to_owned(),
	}
}

/// Returns the single element of `children`.
pub(crate) fn single_element(
	component: &'static str,
	children: impl IntoPage,
) -> Result<PageElement> {
	let mut nodes = children.into_page().flatten();
	if nodes.len() != 1 {
		return Err(ComponentError::ChildCount {
			component,
			expected: 1,
			found: nodes.len(),
		});
	}
	match nodes.pop() {
		Some(Page::Element(el)) => Ok(el),
		Some(other) => Err(ComponentError::InvalidChild {
			component,
			expected: "an element",
			found: describe(&other),
		}),
		None => Err(ComponentError::ChildCount {
			component,
			expected: 1,
			found: 0,
		}),
	}
}
