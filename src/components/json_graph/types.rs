use std::sync::Arc;

use serde_json::Value;

/// JSON type of the value a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	/// A JSON object.
	Object,
	/// A JSON array.
	Array,
	/// String, number, boolean or null.
	Primitive,
}

impl NodeKind {
	/// Classify a JSON value.
	pub fn of(value: &Value) -> Self {
		match value {
			Value::Array(_) => Self::Array,
			Value::Object(_) => Self::Object,
			_ => Self::Primitive,
		}
	}

	/// Display name used for container roots.
	pub fn name(self) -> &'static str {
		match self {
			Self::Object => "Object",
			Self::Array => "Array",
			Self::Primitive => "Primitive",
		}
	}
}

/// Transient search emphasis. Not part of a node's identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
	/// No search active.
	#[default]
	Normal,
	/// The node found by the last search.
	Matched,
	/// Any other node while a search is active.
	Dimmed,
}

/// Top-left corner of a node box in graph coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	/// Column offset.
	pub x: f64,
	/// Row offset, a multiple of the depth.
	pub y: f64,
}

static NULL: Value = Value::Null;

/// Value at a node, read out of the document shared by the whole graph.
#[derive(Clone, Debug)]
pub struct NodeValue {
	root: Arc<Value>,
	pointer: String,
}

impl NodeValue {
	pub(crate) fn new(root: Arc<Value>, pointer: String) -> Self {
		Self { root, pointer }
	}

	/// JSON Pointer (RFC 6901) of the value inside the document.
	pub fn pointer(&self) -> &str {
		&self.pointer
	}

	/// The value itself.
	pub fn get(&self) -> &Value {
		self.root.pointer(&self.pointer).unwrap_or(&NULL)
	}
}

impl PartialEq for NodeValue {
	fn eq(&self, other: &Self) -> bool {
		self.pointer == other.pointer
			&& (Arc::ptr_eq(&self.root, &other.root) || self.get() == other.get())
	}
}

/// One JSON value placed on the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Percent-encoded `path`.
	pub id: String,
	/// Canonical address such as `$.user.items[0]`.
	pub path: String,
	/// Distance from the root.
	pub depth: usize,
	/// JSON type of `value`.
	pub kind: NodeKind,
	/// Key, `[i]` marker, or for the root a summary of the value.
	pub label: String,
	/// Value at `path`.
	pub value: NodeValue,
	/// Grid position.
	pub position: Position,
	/// Search emphasis.
	pub highlight: Highlight,
}

impl GraphNode {
	/// Whether this is the depth 0 node at `$`.
	pub fn is_root(&self) -> bool {
		self.depth == 0
	}
}

/// Directed parent to child link, referring to nodes by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	/// `e:{source}>{target}`; `>` never occurs in an encoded id.
	pub id: String,
	/// Parent node id.
	pub source: String,
	/// Child node id.
	pub target: String,
}

/// Nodes in pre-order plus one edge per non-root node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Nodes in build order, root first.
	pub nodes: Vec<GraphNode>,
	/// Edges in build order.
	pub edges: Vec<GraphEdge>,
	/// Set by the host on every build, so a renderer can tell a rebuild of an
	/// identical document from a highlight change.
	pub revision: u64,
}

impl GraphData {
	/// True when nothing has been built.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// First node with `id`. Keys containing `.`, `[` or `]` can make two
	/// paths, and therefore two ids, collide; the later node is then never
	/// returned here and its edges are drawn from the earlier one.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Node emphasised by the last successful search, if any.
	pub fn matched(&self) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.highlight == Highlight::Matched)
	}
}

/// Grid spacing and node box size shared by the builder and the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Distance between columns.
	pub horizontal_spacing: f64,
	/// Distance between depth rows.
	pub vertical_spacing: f64,
	/// Node box width.
	pub node_width: f64,
	/// Node box height.
	pub node_height: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			horizontal_spacing: 200.0,
			vertical_spacing: 140.0,
			node_width: 140.0,
			node_height: 44.0,
		}
	}
}

/// Request for the canvas to center on a position. `request` changes with
/// every search so repeating the same search centers again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Focus {
	pub position: Position,
	pub zoom: f64,
	pub request: u64,
}
