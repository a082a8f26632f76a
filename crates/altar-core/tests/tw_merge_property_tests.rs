//! Property-based tests for Tailwind class merging
//!
//! Uses proptest to verify:
//! 1. Merging is idempotent
//! 2. Output classes are a subset of the input classes
//! 3. Surviving classes keep their relative order
//! 4. A trailing class always survives

use altar_core::plugins::tailwind::tw_merge;
use proptest::prelude::*;

const UTILITIES: &[&str] = &[
	"p-2",
	"px-4",
	"py-1",
	"pt-0",
	"m-1",
	"-mt-2",
	"size-4",
	"w-full",
	"h-9",
	"flex",
	"hidden",
	"grid",
	"text-sm",
	"text-lg",
	"text-primary",
	"text-muted-foreground",
	"leading-none",
	"bg-primary",
	"bg-destructive/90",
	"border",
	"border-2",
	"border-t",
	"border-input",
	"rounded-md",
	"rounded-t-lg",
	"shadow-xs",
	"ring-2",
	"ring-ring/50",
	"outline-none",
	"font-medium",
	"gap-2",
	"gap-x-4",
	"overflow-hidden",
	"overflow-x-auto",
	"inset-0",
	"top-2",
	"peer",
	"custom-card",
];

const VARIANTS: &[&str] = &["", "hover:", "dark:", "data-[state=open]:", "[&_svg]:", "!"];

fn class_strategy() -> impl Strategy<Value = String> {
	(
		prop::sample::select(VARIANTS),
		prop::sample::select(UTILITIES),
	)
		.prop_map(|(variant, utility)| {
			if variant == "!" {
				format!("!{utility}")
			} else {
				format!("{variant}{utility}")
			}
		})
}

fn class_list_strategy() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(class_strategy(), 0..16)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(200))]

	/// Property: merging an already merged string changes nothing
	#[test]
	fn test_tw_merge_is_idempotent(classes in class_list_strategy()) {
		let once = tw_merge(&classes);
		let twice = tw_merge([once.as_str()]);
		prop_assert_eq!(once, twice);
	}

	/// Property: every output class was present in the input
	#[test]
	fn test_tw_merge_output_is_subset_of_input(classes in class_list_strategy()) {
		let merged = tw_merge(&classes);
		for class in merged.split_whitespace() {
			prop_assert!(classes.iter().any(|c| c == class), "unexpected class {}", class);
		}
	}

	/// Property: survivors appear in the order of their last occurrence
	#[test]
	fn test_tw_merge_preserves_relative_order(classes in class_list_strategy()) {
		let merged = tw_merge(&classes);
		let positions: Vec<usize> = merged
			.split_whitespace()
			.map(|class| classes.iter().rposition(|c| c == class).unwrap_or(usize::MAX))
			.collect();
		prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
	}

	/// Property: the last class is never dropped
	#[test]
	fn test_tw_merge_keeps_last_class(classes in prop::collection::vec(class_strategy(), 1..16)) {
		let merged = tw_merge(&classes);
		let last = classes.last().map(String::as_str).unwrap_or_default();
		prop_assert_eq!(merged.split_whitespace().last(), Some(last));
	}
}
