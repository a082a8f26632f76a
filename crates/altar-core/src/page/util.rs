//! Element classification tables shared by the page tree.

/// Elements that never have children and render without a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
	"track", "wbr",
];

/// HTML boolean attributes.
///
/// A text value for one of these only reaches the output when it is truthy:
/// `<input required="false">` would still be required in a browser, so the
/// renderer drops the attribute instead.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
];

/// Returns whether `tag` is a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Returns whether a boolean attribute value should be rendered.
///
/// Empty strings, `"false"` and `"0"` are falsy.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("true", true)]
	#[case("required", true)]
	#[case("1", true)]
	#[case("", false)]
	#[case("false", false)]
	#[case("0", false)]
	fn test_is_boolean_attr_truthy(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_boolean_attr_truthy(value), expected);
	}

	#[rstest]
	fn test_void_elements() {
		assert!(is_void_element("input"));
		assert!(is_void_element("hr"));
		assert!(!is_void_element("textarea"));
		assert!(!is_void_element("svg"));
	}
}
