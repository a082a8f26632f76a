//! Forms with client-side validation
//!
//! A [`Form`] collects [`FormField`]s. Each field holds one [`FormItem`]
//! (label, control, description and message) and reports its error state to
//! the form's `form_fields` list. The control sits inside a [`FormControl`],
//! which rewires it for the item: ids and ARIA attributes, plus the name,
//! validation trigger and constraints of an optional [`FormHook`].
//!
//! ```
//! use altar_components::component::{WithChildren, WithProps};
//! use altar_components::ui::form::*;
//! use altar_components::ui::input::Input;
//! use altar_core::page::IntoPage;
//!
//! let hook = FormHook::new("username")
//!     .required(true)
//!     .validator(Validator::new("@blur").pattern("/^[a-z]+$/"))
//!     .constraints(Constraints::text(Some(20), Some(2)));
//!
//! let html = Form::new()
//!     .child(FormField::new().child(
//!         FormItem::new()
//!             .child(FormLabel::new().child("Username"))
//!             .child(FormControl::new(Input::new()).hook(hook))
//!             .child(FormMessage::new()),
//!     ))
//!     .into_page()
//!     .render_to_string();
//! assert!(html.contains("name=\"username\""));
//! assert!(html.contains("maxlength=\"20\""));
//! ```

use std::borrow::Cow;

use altar_core::page::{AttrValue, Page, PageElement};
use altar_core::plugins::alpine::{AlpineData, Statement, js_literal};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::{Component, Directives, Props, WithChildren, WithProps, compose, describe};
use crate::error::{ComponentError, Result};
use crate::ui::checkbox::Checkbox;
use crate::ui::input::{Input, PasswordInput};
use crate::ui::label::Label;
use crate::ui::radio::RadioGroupItem;
use crate::ui::switch::Switch;
use crate::ui::textarea::Textarea;

/// Form root holding the `form_fields` error registry
#[derive(Debug, Clone, Default)]
pub struct Form {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(Form, children);

impl Form {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for Form {
	fn data_slot(&self) -> &'static str {
		"form"
	}

	fn render(self) -> Page {
		let data = AlpineData::new().entry("form_fields", Value::Array(Vec::new()));
		let element = PageElement::new("form")
			.attr("data-slot", "form")
			.children(self.children);
		Page::Element(compose(element, "", Directives::new().data(data), self.props))
	}
}

crate::impl_into_page!(Form);

/// One field of a [`Form`]
///
/// Registers itself in the form's `form_fields` on init and keeps its entry's
/// `has_error` in sync.
#[derive(Debug, Clone, Default)]
pub struct FormField {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(FormField, children);

impl FormField {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for FormField {
	fn data_slot(&self) -> &'static str {
		"form-field"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("field_id", Statement::assignment("$id('form-field-id')"))
			.entry("has_error", Value::Null)
			.entry(
				"updateHasErrorValueInParent(id, value)",
				Statement::definition(
					"{ const field_item = form_fields.find(field => field.id === id); if (field_item) { field_item.has_error = value; } }",
				),
			);
		let effect = AlpineData::new().entry(
			"update_has_error_value_for_form_field",
			Statement::instance("updateHasErrorValueInParent(field_id, has_error)"),
		);
		let init = AlpineData::new().entry(
			"append_to_form_fields_array",
			Statement::instance("form_fields.push({ id: field_id, has_error: has_error })"),
		);
		let element = PageElement::new("div")
			.attr("data-slot", "form-field")
			.children(self.children);
		Page::Element(compose(
			element,
			"",
			Directives::new().data(data).init(init).effect(effect),
			self.props,
		))
	}
}

crate::impl_into_page!(FormField);

const ITEM_INIT: &str = r#"Alpine.effect(() => {
	if (form_fields.length > 0) {
		if (form_fields.some(field => field["has_error"] === true)) {
			has_error = true;
			error_message = "Invalid Value";
		} else {
			has_error = false;
			error_message = null;
		}
	}
});
Alpine.effect(() => {
	updateHasErrorValueInParent(has_error);
	updateErrorMessageValueInParent(error_message);
})"#;

/// Label, control, description and message of one field
///
/// Scopes the `form-description`, `form-item-id` and `form-message` ids.
#[derive(Debug, Clone, Default)]
pub struct FormItem {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(FormItem, children);

impl FormItem {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for FormItem {
	fn data_slot(&self) -> &'static str {
		"form-item"
	}

	fn render(self) -> Page {
		let data = AlpineData::new()
			.entry("has_error", Value::Null)
			.entry("error_message", "")
			.entry("form_fields", Value::Array(Vec::new()))
			.entry(
				"updateHasErrorValueInParent(value)",
				Statement::definition("{ has_error = value; }"),
			)
			.entry(
				"updateErrorMessageValueInParent(value)",
				Statement::definition("{ error_message = value; }"),
			);
		let init = AlpineData::new().entry(
			"update_has_error_value_for_form_field",
			Statement::instance(ITEM_INIT),
		);
		let element = PageElement::new("div")
			.attr("x-id", "['form-description', 'form-item-id', 'form-message']")
			.attr("data-slot", "form-item")
			.children(self.children);
		Page::Element(compose(
			element,
			"grid gap-2",
			Directives::new().data(data).init(init),
			self.props,
		))
	}
}

crate::impl_into_page!(FormItem);

/// [`Label`] bound to the item's control, red while the item has an error
#[derive(Debug, Clone, Default)]
pub struct FormLabel {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(FormLabel, children);

impl FormLabel {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for FormLabel {
	fn data_slot(&self) -> &'static str {
		"form-label"
	}

	fn render(self) -> Page {
		Label::new()
			.class("data-[error=true]:text-destructive")
			.data("slot", "form-label")
			.bind("data-error", "has_error")
			.bind("for", "$id('form-item-id')")
			.with_props(self.props)
			.children(self.children)
			.render()
	}
}

crate::impl_into_page!(FormLabel);

/// Client-side validation of a hooked control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validator {
	/// Attribute running the validation, e.g. `@input` or `@blur`
	pub trigger: String,
	/// Expression producing the value to validate
	#[serde(default = "Validator::default_value_to_validate")]
	pub value_to_validate: String,
	/// Regular expression literal, or a function returning `true` on failure
	#[serde(default = "Validator::default_pattern")]
	pub pattern: String,
	#[serde(default = "Validator::default_fail_message")]
	pub fail_message: String,
}

impl Validator {
	pub fn new(trigger: impl Into<String>) -> Self {
		Self {
			trigger: trigger.into(),
			value_to_validate: Self::default_value_to_validate(),
			pattern: Self::default_pattern(),
			fail_message: Self::default_fail_message(),
		}
	}

	pub fn value_to_validate(mut self, expression: impl Into<String>) -> Self {
		self.value_to_validate = expression.into();
		self
	}

	pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = pattern.into();
		self
	}

	pub fn fail_message(mut self, message: impl Into<String>) -> Self {
		self.fail_message = message.into();
		self
	}

	fn default_value_to_validate() -> String {
		"$event.target.value".to_owned()
	}

	fn default_pattern() -> String {
		"''".to_owned()
	}

	fn default_fail_message() -> String {
		"Enter valid value.".to_owned()
	}
}

/// Native constraints applied to a hooked input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Constraints {
	Text {
		#[serde(default)]
		max_length: Option<u32>,
		#[serde(default)]
		min_length: Option<u32>,
	},
	Number {
		#[serde(default)]
		max: Option<f64>,
		#[serde(default)]
		min: Option<f64>,
		#[serde(default)]
		step: Option<f64>,
	},
}

impl Constraints {
	pub fn text(max_length: Option<u32>, min_length: Option<u32>) -> Self {
		Self::Text {
			max_length,
			min_length,
		}
	}

	pub fn number(max: Option<f64>, min: Option<f64>, step: Option<f64>) -> Self {
		Self::Number { max, min, step }
	}

	fn lengths(&self) -> (Option<u32>, Option<u32>) {
		match self {
			Self::Text {
				max_length,
				min_length,
			} => (*max_length, *min_length),
			Self::Number { .. } => (None, None),
		}
	}
}

/// Binds a control to a form: name, `required`, validation and constraints
///
/// Deserializable, so field definitions can live in configuration files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormHook {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub required: bool,
	#[serde(default)]
	pub validator: Option<Validator>,
	#[serde(default)]
	pub constraints: Option<Constraints>,
}

impl FormHook {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	pub fn validator(mut self, validator: Validator) -> Self {
		self.validator = Some(validator);
		self
	}

	pub fn constraints(mut self, constraints: Constraints) -> Self {
		self.constraints = Some(constraints);
		self
	}

	fn fail_message(&self) -> &str {
		self.validator
			.as_ref()
			.map_or("Enter valid value.", |v| v.fail_message.as_str())
	}
}

/// A control accepted by [`FormControl`]
#[derive(Debug, Clone)]
pub enum FormControlChild {
	Input(Input),
	PasswordInput(PasswordInput),
	Textarea(Textarea),
	Checkbox(Checkbox),
	RadioGroupItem(RadioGroupItem),
	Switch(Switch),
	/// A raw `<input>` or `<textarea>` element
	Element(PageElement),
}

macro_rules! impl_from_control {
	($($variant:ident),+) => {
		$(
			impl From<$variant> for FormControlChild {
				fn from(control: $variant) -> Self {
					Self::$variant(control)
				}
			}
		)+
	};
}

impl_from_control!(Input, PasswordInput, Textarea, Checkbox, RadioGroupItem, Switch);

impl TryFrom<PageElement> for FormControlChild {
	type Error = ComponentError;

	fn try_from(element: PageElement) -> Result<Self> {
		match element.tag_name() {
			"input" | "textarea" => Ok(Self::Element(element)),
			_ => Err(ComponentError::InvalidChild {
				component: "FormControl",
				expected: "an input, textarea, checkbox, password input, radio group item or switch",
				found: describe(&Page::Element(element)),
			}),
		}
	}
}

impl TryFrom<Page> for FormControlChild {
	type Error = ComponentError;

	fn try_from(page: Page) -> Result<Self> {
		Self::try_from(crate::component::single_element("FormControl", page)?)
	}
}

impl FormControlChild {
	fn accepts_type_constraints(&self) -> bool {
		match self {
			Self::Input(_) => true,
			Self::Element(el) => el.tag_name() == "input",
			_ => false,
		}
	}

	fn is_textarea(&self) -> bool {
		match self {
			Self::Textarea(_) => true,
			Self::Element(el) => el.tag_name() == "textarea",
			_ => false,
		}
	}

	fn inject(self, props: Props) -> Page {
		match self {
			Self::Input(c) => c.with_props(props).render(),
			Self::PasswordInput(c) => c.with_props(props).render(),
			Self::Textarea(c) => c.with_props(props).render(),
			Self::Checkbox(c) => c.with_props(props).render(),
			Self::RadioGroupItem(c) => c.with_props(props).render(),
			Self::Switch(c) => c.with_props(props).render(),
			Self::Element(mut el) => {
				for (name, value) in props.attrs() {
					el.set_attr(name.to_owned(), value.clone());
				}
				Page::Element(el)
			}
		}
	}
}

const RUN_VALIDATION: &str = "{ if (conditional instanceof RegExp) { if (conditional.test(value) === false) { has_error = true; if (min_length && value.length > 0 && value.length < min_length) { error_message = `Must be at least ${min_length} characters.`; } else if (max_length && value.length > max_length) { error_message = `Must be at most ${max_length} characters.`; } else { error_message = __FAIL_MESSAGE__; } } else { has_error = false; error_message = null; } } else if (conditional instanceof Function) { if (conditional(value)) { has_error = true; error_message = __FAIL_MESSAGE__; } else { has_error = false; error_message = null; } } else { has_error = false; error_message = null; } }";

/// Wrapper that wires exactly one control into its [`FormItem`]
#[derive(Debug, Clone)]
pub struct FormControl {
	child: FormControlChild,
	hook: Option<FormHook>,
	props: Props,
}

crate::impl_builder!(FormControl);

impl FormControl {
	pub fn new(child: impl Into<FormControlChild>) -> Self {
		Self {
			child: child.into(),
			hook: None,
			props: Props::new(),
		}
	}

	/// Wraps a raw element; only `<input>` and `<textarea>` are accepted.
	pub fn from_element(element: impl altar_core::page::IntoPage) -> Result<Self> {
		let child = FormControlChild::try_from(element.into_page())?;
		Ok(Self::new(child))
	}

	pub fn hook(mut self, hook: FormHook) -> Self {
		self.hook = Some(hook);
		self
	}

	/// Attributes written onto the control.
	fn injected_props(&self) -> Props {
		let mut props = Props::new();
		props.set(":id", "$id('form-item-id')");
		props.set(
			":aria-describedby",
			"getHasError() ? `${$id('form-description')} ${$id('form-message')}` : $id('form-description')",
		);
		props.set(":aria-invalid", "getHasError()");

		let Some(hook) = &self.hook else {
			return props;
		};
		if let Some(name) = &hook.name {
			props.set("name", name.clone());
		}
		if hook.required {
			props.set("required", AttrValue::Flag);
		}
		let (max_length, min_length) = hook
			.constraints
			.as_ref()
			.map_or((None, None), Constraints::lengths);
		if let Some(validator) = &hook.validator {
			let bound = |n: Option<u32>| n.map_or_else(|| "undefined".to_owned(), |n| n.to_string());
			props.set(
				Cow::Owned(validator.trigger.clone()),
				format!(
					"runValidation({}, {}, {}, {})",
					validator.value_to_validate,
					validator.pattern,
					bound(max_length),
					bound(min_length)
				),
			);
		}

		match &hook.constraints {
			Some(Constraints::Text {
				max_length,
				min_length,
			}) if self.child.accepts_type_constraints() || self.child.is_textarea() => {
				if self.child.accepts_type_constraints() {
					props.set("type", "text");
				}
				set_number(&mut props, "maxlength", max_length.map(f64::from));
				set_number(&mut props, "minlength", min_length.map(f64::from));
			}
			Some(Constraints::Number { max, min, step }) if self.child.accepts_type_constraints() => {
				props.set("type", "number");
				set_number(&mut props, "max", *max);
				set_number(&mut props, "min", *min);
				set_number(&mut props, "step", *step);
			}
			_ => {}
		}
		props
	}
}

fn set_number(props: &mut Props, name: &'static str, value: Option<f64>) {
	if let Some(value) = value {
		props.set(name, value.to_string());
	}
}

impl Component for FormControl {
	fn data_slot(&self) -> &'static str {
		"form-control"
	}

	fn render(self) -> Page {
		let fail_message = js_literal(&Value::String(
			self.hook
				.as_ref()
				.map_or("Enter valid value.", FormHook::fail_message)
				.to_owned(),
		));
		let data = AlpineData::new()
			.entry(
				"runValidation(value, conditional, max_length, min_length)",
				Statement::definition(RUN_VALIDATION.replace("__FAIL_MESSAGE__", &fail_message)),
			)
			.entry(
				"getHasError()",
				Statement::definition("{ if (has_error === null) { return false } else { return has_error } }"),
			);
		let injected = self.injected_props();
		let control = self.child.inject(injected);
		let element = PageElement::new("div")
			.attr("data-slot", "form-control")
			.child(control);
		Page::Element(compose(element, "", Directives::new().data(data), self.props))
	}
}

crate::impl_into_page!(FormControl);

/// Help text referenced by the control's `aria-describedby`
#[derive(Debug, Clone, Default)]
pub struct FormDescription {
	props: Props,
	children: Vec<Page>,
}

crate::impl_builder!(FormDescription, children);

impl FormDescription {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for FormDescription {
	fn data_slot(&self) -> &'static str {
		"form-description"
	}

	fn render(self) -> Page {
		let element = PageElement::new("p")
			.attr("data-slot", "form-description")
			.attr(":id", "$id('form-description')")
			.children(self.children);
		Page::Element(compose(element, "text-muted-foreground text-sm", Directives::new(), self.props))
	}
}

crate::impl_into_page!(FormDescription);

/// Error message of the item, shown while it has an error
#[derive(Debug, Clone, Default)]
pub struct FormMessage {
	props: Props,
}

crate::impl_builder!(FormMessage);

impl FormMessage {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Component for FormMessage {
	fn data_slot(&self) -> &'static str {
		"form-message"
	}

	fn render(self) -> Page {
		let element = PageElement::new("p")
			.attr("data-slot", "form-message")
			.attr("x-show", "has_error")
			.attr("x-text", "error_message")
			.attr(":id", "$id('form-message')");
		Page::Element(compose(element, "text-destructive text-sm", Directives::new(), self.props))
	}
}

crate::impl_into_page!(FormMessage);

#[cfg(test)]
mod tests {
	use super::*;
	use altar_core::page::IntoPage;
	use rstest::rstest;

	fn control_of(page: &Page) -> &PageElement {
		page.as_element().unwrap().child_views()[0].as_element().unwrap()
	}

	#[rstest]
	fn test_form_and_field_data() {
		let page = Form::new().into_page();
		assert_eq!(page.as_element().and_then(|el| el.get_attr("x-data")), Some("{form_fields: []}"));

		let page = FormField::new().into_page();
		let el = page.as_element().unwrap();
		assert!(el.get_attr("x-data").unwrap().starts_with("{field_id: $id('form-field-id'), has_error: null, "));
		assert_eq!(el.get_attr("x-init"), Some("form_fields.push({ id: field_id, has_error: has_error })"));
		assert_eq!(el.get_attr("x-effect"), Some("updateHasErrorValueInParent(field_id, has_error)"));
	}

	#[rstest]
	fn test_form_item_scopes_ids() {
		let page = FormItem::new().into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("class"), Some("grid gap-2"));
		assert_eq!(el.get_attr("x-id"), Some("['form-description', 'form-item-id', 'form-message']"));
		assert!(el.get_attr("x-init").unwrap().starts_with("Alpine.effect(() => {"));
	}

	#[rstest]
	fn test_form_label() {
		let page = FormLabel::new().child("Email").into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.tag_name(), "label");
		assert_eq!(el.get_attr("data-slot"), Some("form-label"));
		assert_eq!(el.get_attr(":for"), Some("$id('form-item-id')"));
		assert_eq!(el.get_attr(":data-error"), Some("has_error"));
		assert!(el.get_attr("class").unwrap().ends_with("data-[error=true]:text-destructive"));
	}

	#[rstest]
	fn test_form_control_without_hook() {
		let page = FormControl::new(Input::new().name("email")).into_page();
		let wrapper = page.as_element().unwrap();
		assert_eq!(wrapper.get_attr("data-slot"), Some("form-control"));
		assert!(!wrapper.has_attr("class"));
		assert!(wrapper.get_attr("x-data").unwrap().contains("error_message = 'Enter valid value.';"));

		let input = control_of(&page);
		assert_eq!(input.get_attr(":id"), Some("$id('form-item-id')"));
		assert_eq!(input.get_attr(":aria-invalid"), Some("getHasError()"));
		assert_eq!(
			input.get_attr(":aria-describedby"),
			Some("getHasError() ? `${$id('form-description')} ${$id('form-message')}` : $id('form-description')")
		);
		assert_eq!(input.get_attr("name"), Some("email"));
	}

	#[rstest]
	fn test_form_control_text_hook() {
		let hook = FormHook::new("username")
			.required(true)
			.validator(Validator::new("@input").pattern("/^[a-z]+$/").fail_message("Lowercase only."))
			.constraints(Constraints::text(Some(20), Some(2)));
		let page = FormControl::new(Input::new()).hook(hook).into_page();

		let input = control_of(&page);
		assert_eq!(input.get_attr("name"), Some("username"));
		assert_eq!(input.get_attr_value("required"), Some(&AttrValue::Flag));
		assert_eq!(input.get_attr("@input"), Some("runValidation($event.target.value, /^[a-z]+$/, 20, 2)"));
		assert_eq!(input.get_attr("type"), Some("text"));
		assert_eq!(input.get_attr("maxlength"), Some("20"));
		assert_eq!(input.get_attr("minlength"), Some("2"));
		assert!(page.as_element().unwrap().get_attr("x-data").unwrap().contains("'Lowercase only.'"));
	}

	#[rstest]
	fn test_form_control_number_hook() {
		let hook = FormHook::new("age")
			.validator(Validator::new("@blur"))
			.constraints(Constraints::number(Some(120.0), Some(0.0), Some(1.0)));
		let page = FormControl::new(Input::new()).hook(hook).into_page();

		let input = control_of(&page);
		assert_eq!(input.get_attr("type"), Some("number"));
		assert_eq!(input.get_attr("max"), Some("120"));
		assert_eq!(input.get_attr("min"), Some("0"));
		assert_eq!(input.get_attr("step"), Some("1"));
		assert_eq!(input.get_attr("@blur"), Some("runValidation($event.target.value, '', undefined, undefined)"));
	}

	#[rstest]
	fn test_form_control_textarea_gets_lengths_only() {
		let hook = FormHook::new("bio").constraints(Constraints::text(Some(160), None));
		let page = FormControl::new(Textarea::new()).hook(hook).into_page();
		let textarea = control_of(&page);
		assert_eq!(textarea.tag_name(), "textarea");
		assert_eq!(textarea.get_attr("maxlength"), Some("160"));
		assert!(!textarea.has_attr("minlength"));
		assert!(!textarea.has_attr("type"));
	}

	#[rstest]
	fn test_form_control_routes_to_wrapped_input() {
		let page = FormControl::new(Checkbox::new()).hook(FormHook::new("terms")).into_page();
		let wrapper = control_of(&page);
		assert_eq!(wrapper.tag_name(), "div");
		let input = wrapper.child_views()[0].as_element().unwrap();
		assert_eq!(input.get_attr("type"), Some("checkbox"));
		assert_eq!(input.get_attr("name"), Some("terms"));
		assert_eq!(input.get_attr(":id"), Some("$id('form-item-id')"));
	}

	#[rstest]
	fn test_form_control_raw_elements() {
		let page = FormControl::from_element(PageElement::new("input").attr("name", "raw"))
			.unwrap()
			.hook(FormHook::new("renamed"))
			.into_page();
		let input = control_of(&page);
		assert_eq!(input.get_attr("name"), Some("renamed"));
		assert_eq!(input.get_attr(":aria-invalid"), Some("getHasError()"));

		assert!(matches!(
			FormControl::from_element(PageElement::new("select")),
			Err(ComponentError::InvalidChild { component: "FormControl", .. })
		));
		assert!(matches!(
			FormControl::from_element((PageElement::new("input"), PageElement::new("input"))),
			Err(ComponentError::ChildCount { found: 2, .. })
		));
	}

	#[rstest]
	fn test_form_hook_from_toml() {
		let hook: FormHook = toml::from_str(
			r#"
			name = "quantity"
			required = true

			[validator]
			trigger = "@change"

			[constraints]
			type = "number"
			min = 1
			"#,
		)
		.unwrap();
		assert_eq!(hook.name.as_deref(), Some("quantity"));
		assert!(hook.required);
		assert_eq!(hook.validator.as_ref().map(|v| v.pattern.as_str()), Some("''"));
		assert_eq!(hook.constraints, Some(Constraints::number(None, Some(1.0), None)));
	}

	#[rstest]
	fn test_form_description_and_message() {
		let html = FormDescription::new().child("Public name.").into_page().render_to_string();
		assert_eq!(
			html,
			"<p data-slot=\"form-description\" :id=\"$id('form-description')\" class=\"text-muted-foreground text-sm\">Public name.</p>"
		);

		let page = FormMessage::new().into_page();
		let el = page.as_element().unwrap();
		assert_eq!(el.get_attr("x-show"), Some("has_error"));
		assert_eq!(el.get_attr("x-text"), Some("error_message"));
	}
}
