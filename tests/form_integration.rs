//! Form integration tests
//!
//! Field definitions are loaded from JSON and TOML documents, turned into a
//! complete form, and the rendered controls are checked for the wiring the
//! hooks describe.

use altar_ui::components::ui::form::*;
use altar_ui::components::ui::input::{Input, PasswordInput};
use altar_ui::components::ui::label::Label;
use altar_ui::prelude::*;
use rstest::*;
use serde::Deserialize;

const SIGNUP_FIELDS: &str = r#"[
	{
		"name": "email",
		"required": true,
		"validator": {
			"trigger": "@blur",
			"pattern": "/^\\S+@\\S+$/",
			"fail_message": "Enter a valid email."
		}
	},
	{
		"name": "age",
		"constraints": { "type": "number", "min": 18, "max": 130 }
	}
]"#;

#[derive(Debug, Deserialize)]
struct FieldSet {
	#[serde(rename = "field")]
	fields: Vec<FormHook>,
}

// ============================================================================
// Fixtures
// ============================================================================

fn field(label: &'static str, control: FormControl) -> FormField {
	FormField::new().child(
		FormItem::new()
			.child(FormLabel::new().child(label))
			.child(control)
			.child(FormMessage::new()),
	)
}

/// Provides a sign-up form built from JSON field definitions
#[fixture]
fn signup_form() -> Page {
	let hooks: Vec<FormHook> = serde_json::from_str(SIGNUP_FIELDS).expect("valid field definitions");
	Form::new()
		.children(hooks.into_iter().map(|hook| {
			let label = if hook.name.as_deref() == Some("email") { "Email" } else { "Age" };
			field(label, FormControl::new(Input::new()).hook(hook))
		}))
		.into_page()
}

fn control_named<'a>(page: &'a Page, name: &str) -> &'a PageElement {
	page.find_element(&|el| el.get_attr("name") == Some(name))
		.unwrap_or_else(|| panic!("no control named {name}"))
}

// ============================================================================
// Happy Path Tests
// ============================================================================

/// Tests that every definition produces one registered field
#[rstest]
fn test_form_renders_one_field_per_definition(signup_form: Page) {
	let html = signup_form.render_to_string();
	assert!(html.starts_with("<form data-slot=\"form\" x-data=\"{form_fields: []}\""));
	assert_eq!(html.matches("data-slot=\"form-field\"").count(), 2);
	assert_eq!(html.matches("data-slot=\"form-message\"").count(), 2);
}

/// Tests the validator wiring of the email field
#[rstest]
fn test_email_field_validation(signup_form: Page) {
	let email = control_named(&signup_form, "email");
	assert_eq!(email.tag_name(), "input");
	assert_eq!(email.get_attr_value("required"), Some(&AttrValue::Flag));
	assert_eq!(
		email.get_attr("@blur"),
		Some("runValidation($event.target.value, /^\\S+@\\S+$/, undefined, undefined)")
	);
	assert!(!email.has_attr("type"));

	let control = signup_form
		.find_element(&|el| {
			el.get_attr("data-slot") == Some("form-control")
				&& el.child_views()[0].as_element().and_then(|c| c.get_attr("name")) == Some("email")
		})
		.expect("email control wrapper");
	assert!(control.get_attr("x-data").unwrap().contains("error_message = 'Enter a valid email.';"));
}

/// Tests the number constraints of the age field
#[rstest]
fn test_age_field_constraints(signup_form: Page) {
	let age = control_named(&signup_form, "age");
	assert_eq!(age.get_attr("type"), Some("number"));
	assert_eq!(age.get_attr("min"), Some("18"));
	assert_eq!(age.get_attr("max"), Some("130"));
	assert!(!age.has_attr("step"));
	assert!(!age.has_attr("required"));
}

/// Tests that labels and controls share the item-scoped id
#[rstest]
fn test_labels_point_at_controls(signup_form: Page) {
	let label = signup_form
		.find_element(&|el| el.tag_name() == "label")
		.expect("label");
	let control = control_named(&signup_form, "email");
	assert_eq!(label.get_attr(":for"), control.get_attr(":id"));
}

/// Tests definitions written as TOML tables
#[rstest]
fn test_hooks_from_toml() {
	let set: FieldSet = toml::from_str(
		r#"
		[[field]]
		name = "bio"
		constraints = { type = "text", max_length = 160 }

		[[field]]
		name = "password"
		required = true
		"#,
	)
	.expect("valid TOML");
	assert_eq!(set.fields.len(), 2);
	assert_eq!(set.fields[0].constraints, Some(Constraints::text(Some(160), None)));
	assert!(set.fields[1].required);
	assert_eq!(set.fields[1].validator, None);

	let bio = FormControl::from_element(PageElement::new("textarea"))
		.expect("textarea is accepted")
		.hook(set.fields[0].clone())
		.into_page();
	let textarea = control_named(&bio, "bio");
	assert_eq!(textarea.get_attr("maxlength"), Some("160"));
	assert!(!textarea.has_attr("type"));

	let password = FormControl::new(PasswordInput::new())
		.hook(set.fields[1].clone())
		.into_page();
	let input = control_named(&password, "password");
	assert_eq!(input.get_attr("type"), Some("password"));
	assert_eq!(input.get_attr_value("required"), Some(&AttrValue::Flag));
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Tests that number constraints do not apply to raw textareas
#[rstest]
fn test_number_constraints_skip_textarea() {
	let hook = FormHook::new("notes").constraints(Constraints::number(Some(5.0), None, None));
	let page = FormControl::from_element(PageElement::new("textarea"))
		.unwrap()
		.hook(hook)
		.into_page();
	let textarea = control_named(&page, "notes");
	assert!(!textarea.has_attr("max"));
	assert!(!textarea.has_attr("type"));
}

/// Tests that a fail message with quotes stays a valid string literal
#[rstest]
fn test_fail_message_is_quoted() {
	let hook = FormHook::new("nick").validator(Validator::new("@input").fail_message("Can't be empty"));
	let page = FormControl::new(Input::new()).hook(hook).into_page();
	let data = page.as_element().and_then(|el| el.get_attr("x-data")).unwrap();
	assert!(data.contains("error_message = 'Can\\'t be empty';"));
}

// ============================================================================
// Error Path Tests
// ============================================================================

/// Tests that unknown constraint kinds fail to deserialize
#[rstest]
#[case(r#"{"constraints": {"type": "date"}}"#)]
#[case(r#"{"validator": {"pattern": "/x/"}}"#)]
fn test_invalid_hook_definitions(#[case] json: &str) {
	assert!(serde_json::from_str::<FormHook>(json).is_err());
}

/// Tests that a non-control element is rejected
#[rstest]
fn test_form_control_rejects_label() {
	let err = FormControl::from_element(Label::new().child("Name")).unwrap_err();
	assert!(matches!(err, ComponentError::InvalidChild { component: "FormControl", .. }));
	assert!(err.to_string().contains("<label>"));
}
