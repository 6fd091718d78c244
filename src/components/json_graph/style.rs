//! Fixed palette for nodes and edges, derived on demand from kind, depth and
//! highlight.

use super::types::{GraphNode, Highlight, NodeKind};

/// Display class of a node. The root is styled apart from its JSON type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleClass {
	/// The depth 0 node, blue.
	Root,
	/// Teal.
	Object,
	/// Green.
	Array,
	/// Amber.
	Primitive,
}

impl StyleClass {
	/// Class for a node of `kind` at `depth`.
	pub fn of(kind: NodeKind, depth: usize) -> Self {
		match (depth, kind) {
			(0, _) => Self::Root,
			(_, NodeKind::Object) => Self::Object,
			(_, NodeKind::Array) => Self::Array,
			(_, NodeKind::Primitive) => Self::Primitive,
		}
	}
}

/// Shadow drawn around a matched node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	/// CSS colour.
	pub color: &'static str,
	/// Blur radius in pixels.
	pub blur: f64,
}

/// Resolved box style of one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	/// Fill colour.
	pub background: &'static str,
	/// Border colour.
	pub border_color: &'static str,
	/// Border width in pixels.
	pub border_width: f64,
	/// Label colour.
	pub text_color: &'static str,
	/// Inner padding around the label.
	pub padding: f64,
	/// Corner radius.
	pub radius: f64,
	/// 1 normally, lower when dimmed.
	pub opacity: f64,
	/// Present only when matched.
	pub glow: Option<Glow>,
}

/// Style shared by every edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	/// Line and arrow colour.
	pub stroke: &'static str,
	/// Line width.
	pub width: f64,
	/// Length of the closed arrow head.
	pub arrow_size: f64,
}

/// Neutral gray straight arrow.
pub const EDGE_STYLE: EdgeStyle = EdgeStyle {
	stroke: "#94a3b8",
	width: 2.0,
	arrow_size: 10.0,
};

const MATCH_BORDER: &str = "#16a34a";
const MATCH_GLOW: Glow = Glow {
	color: "rgba(34, 197, 94, 0.9)",
	blur: 20.0,
};
const DIMMED_OPACITY: f64 = 0.6;

fn base(class: StyleClass) -> NodeStyle {
	let (background, border_color, text_color) = match class {
		StyleClass::Root => ("#3b82f6", "#2563eb", "#ffffff"),
		StyleClass::Object => ("#99f6e4", "#14b8a6", "#0f172a"),
		StyleClass::Array => ("#bbf7d0", "#22c55e", "#0f172a"),
		StyleClass::Primitive => ("#fde68a", "#f59e0b", "#0f172a"),
	};
	NodeStyle {
		background,
		border_color,
		border_width: 2.0,
		text_color,
		padding: 10.0,
		radius: 10.0,
		opacity: 1.0,
		glow: None,
	}
}

/// Base palette for `class` with the highlight overlay applied on top.
pub fn style_for(class: StyleClass, highlight: Highlight) -> NodeStyle {
	let style = base(class);
	match highlight {
		Highlight::Normal => style,
		Highlight::Matched => NodeStyle {
			border_color: MATCH_BORDER,
			border_width: 3.0,
			glow: Some(MATCH_GLOW),
			..style
		},
		Highlight::Dimmed => NodeStyle {
			opacity: DIMMED_OPACITY,
			..style
		},
	}
}

/// Style for a built node.
pub fn node_style(node: &GraphNode) -> NodeStyle {
	style_for(StyleClass::of(node.kind, node.depth), node.highlight)
}
