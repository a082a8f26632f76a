//! Responsive design utilities

/// Tailwind CSS breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
	/// Small (≥ 640px)
	Sm,
	/// Medium (≥ 768px)
	Md,
	/// Large (≥ 1024px)
	Lg,
	/// Extra large (≥ 1280px)
	Xl,
	/// Extra extra large (≥ 1536px)
	Xxl,
}

impl Breakpoint {
	/// Get minimum width in pixels for this breakpoint
	pub fn min_width(&self) -> u32 {
		match self {
			Self::Sm => 640,
			Self::Md => 768,
			Self::Lg => 1024,
			Self::Xl => 1280,
			Self::Xxl => 1536,
		}
	}

	/// Convert breakpoint to its Tailwind variant prefix
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Sm => "sm",
			Self::Md => "md",
			Self::Lg => "lg",
			Self::Xl => "xl",
			Self::Xxl => "2xl",
		}
	}

	/// JavaScript expression that is true while the viewport is narrower
	/// than this breakpoint
	pub fn below_expression(&self) -> String {
		format!("window.innerWidth < {}", self.min_width())
	}

	/// Prefixes every class in `classes` with this breakpoint's variant
	pub fn apply(&self, classes: &str) -> String {
		classes
			.split_whitespace()
			.map(|class| format!("{}:{}", self.as_str(), class))
			.collect::<Vec<_>>()
			.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Breakpoint::Sm, 640, "sm")]
	#[case(Breakpoint::Md, 768, "md")]
	#[case(Breakpoint::Lg, 1024, "lg")]
	#[case(Breakpoint::Xl, 1280, "xl")]
	#[case(Breakpoint::Xxl, 1536, "2xl")]
	fn test_breakpoint_values(#[case] bp: Breakpoint, #[case] width: u32, #[case] prefix: &str) {
		assert_eq!(bp.min_width(), width);
		assert_eq!(bp.as_str(), prefix);
	}

	#[rstest]
	fn test_below_expression() {
		assert_eq!(Breakpoint::Md.below_expression(), "window.innerWidth < 768");
	}

	#[rstest]
	fn test_apply() {
		assert_eq!(Breakpoint::Md.apply("flex  gap-2"), "md:flex md:gap-2");
		assert_eq!(Breakpoint::Sm.apply(""), "");
	}
}
