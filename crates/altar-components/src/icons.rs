//! Inline SVG icons
//!
//! The Lucide icons used across the catalog, rendered as inline `<svg>`
//! elements so they inherit `currentColor` and can be sized with classes.

use altar_core::page::{Page, PageElement};

use crate::component::{Component, Directives, Props, compose};

/// Icon shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
	ArrowLeft,
	ArrowRight,
	Check,
	ChevronDown,
	ChevronLeft,
	ChevronRight,
	Circle,
	Cross,
	Ellipsis,
	Eye,
	EyeOff,
	PanelLeft,
}

enum Shape {
	Path(&'static str),
	Circle(&'static str, &'static str, &'static str),
	Rect {
		width: &'static str,
		height: &'static str,
		x: &'static str,
		y: &'static str,
		rx: &'static str,
	},
}

impl IconKind {
	/// Lucide icon name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::ArrowLeft => "arrow-left",
			Self::ArrowRight => "arrow-right",
			Self::Check => "check",
			Self::ChevronDown => "chevron-down",
			Self::ChevronLeft => "chevron-left",
			Self::ChevronRight => "chevron-right",
			Self::Circle => "circle",
			Self::Cross => "x",
			Self::Ellipsis => "ellipsis",
			Self::Eye => "eye",
			Self::EyeOff => "eye-off",
			Self::PanelLeft => "panel-left",
		}
	}

	fn shapes(&self) -> &'static [Shape] {
		match self {
			Self::ArrowLeft => &[Shape::Path("m12 19-7-7 7-7"), Shape::Path("M19 12H5")],
			Self::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
			Self::Check => &[Shape::Path("M20 6 9 17l-5-5")],
			Self::ChevronDown => &[Shape::Path("m6 9 6 6 6-6")],
			Self::ChevronLeft => &[Shape::Path("m15 18-6-6 6-6")],
			Self::ChevronRight => &[Shape::Path("m9 18 6-6-6-6")],
			Self::Circle => &[Shape::Circle("12", "12", "10")],
			Self::Cross => &[Shape::Path("M18 6 6 18"), Shape::Path("m6 6 12 12")],
			Self::Ellipsis => &[
				Shape::Circle("12", "12", "1"),
				Shape::Circle("19", "12", "1"),
				Shape::Circle("5", "12", "1"),
			],
			Self::Eye => &[
				Shape::Path(
					"M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0",
				),
				Shape::Circle("12", "12", "3"),
			],
			Self::EyeOff => &[
				Shape::Path(
					"M10.733 5.076a10.744 10.744 0 0 1 11.205 6.575 1 1 0 0 1 0 .696 10.747 10.747 0 0 1-1.444 2.49",
				),
				Shape::Path("M14.084 14.158a3 3 0 0 1-4.242-4.242"),
				Shape::Path(
					"M17.479 17.499a10.75 10.75 0 0 1-15.417-5.151 1 1 0 0 1 0-.696 10.75 10.75 0 0 1 4.446-5.143",
				),
				Shape::Path("m2 2 20 20"),
			],
			Self::PanelLeft => &[
				Shape::Rect {
					width: "18",
					height: "18",
					x: "3",
					y: "3",
					rx: "2",
				},
				Shape::Path("M9 3v18"),
			],
		}
	}
}

/// An inline SVG icon
#[derive(Debug, Clone)]
pub struct Icon {
	kind: IconKind,
	props: Props,
}

crate::impl_builder!(Icon);

impl Icon {
	pub fn new(kind: IconKind) -> Self {
		Self {
			kind,
			props: Props::new(),
		}
	}

	pub fn kind(&self) -> IconKind {
		self.kind
	}
}

impl Component for Icon {
	fn data_slot(&self) -> &'static str {
		"icon"
	}

	fn render(self) -> Page {
		let svg = PageElement::new("svg")
			.attr("xmlns", "http://www.w3.org/2000/svg")
			.attr("width", "24")
			.attr("height", "24")
			.attr("viewBox", "0 0 24 24")
			.attr("fill", "none")
			.attr("stroke", "currentColor")
			.attr("stroke-width", "2")
			.attr("stroke-linecap", "round")
			.attr("stroke-linejoin", "round")
			.attr("aria-hidden", "true")
			.children(self.kind.shapes().iter().map(|shape| match *shape {
				Shape::Path(d) => PageElement::new("path").attr("d", d),
				Shape::Circle(cx, cy, r) => PageElement::new("circle")
					.attr("cx", cx)
					.attr("cy", cy)
					.attr("r", r),
				Shape::Rect {
					width,
					height,
					x,
					y,
					rx,
				} => PageElement::new("rect")
					.attr("width", width)
					.attr("height", height)
					.attr("x", x)
					.attr("y", y)
					.attr("rx", rx),
			}));

		let base_class = format!("lucide lucide-{}", self.kind.as_str());
		Page::Element(compose(svg, &base_class, Directives::new(), self.props))
	}
}

crate::impl_into_page!(Icon);
