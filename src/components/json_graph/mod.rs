mod builder;
mod component;
mod path;
mod render;
mod state;
mod style;
mod types;

pub use builder::{ROOT_PATH, build, build_with};
pub use component::JsonGraphCanvas;
pub use path::{apply_match, find, find_index, normalize, reset_highlight, search};
pub use state::FOCUS_ZOOM;
pub use style::{EDGE_STYLE, EdgeStyle, Glow, NodeStyle, StyleClass, node_style, style_for};
pub use types::{
	Focus, GraphData, GraphEdge, GraphNode, Highlight, LayoutConfig, NodeKind, NodeValue, Position,
};
