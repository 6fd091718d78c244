use super::types::{GraphData, LayoutConfig, Position};

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 4.0;
pub const FOCUS_ZOOM: f64 = 1.2;
pub const FIT_PADDING: f64 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Everything the canvas needs between frames.
pub struct CanvasState {
	pub graph: GraphData,
	pub layout: LayoutConfig,
	pub transform: ViewTransform,
	pub pan: PanState,
	/// Index into `graph.nodes` under the pointer.
	pub hover: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub dark: bool,
	/// Revision of the graph the view was last fitted to.
	fitted: Option<u64>,
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			graph: GraphData::default(),
			layout: LayoutConfig::default(),
			transform: ViewTransform::default(),
			pan: PanState::default(),
			hover: None,
			width,
			height,
			dark: false,
			fitted: None,
		}
	}

	/// Swap in new graph data. A new `revision` is a new build and gets
	/// fitted to the view, even for an identical document; a highlight-only
	/// change keeps the current pan and zoom.
	pub fn set_graph(&mut self, graph: GraphData) {
		let rebuilt = self.fitted != Some(graph.revision);
		self.graph = graph;
		if rebuilt {
			self.fitted = Some(self.graph.revision);
			self.hover = None;
			self.fit_view(FIT_PADDING);
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Node whose box contains the screen point. Positions are box top-left
	/// corners.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let (w, h) = (self.layout.node_width, self.layout.node_height);
		self.graph.nodes.iter().position(|n| {
			gx >= n.position.x && gx <= n.position.x + w && gy >= n.position.y && gy <= n.position.y + h
		})
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		self.hover = node;
	}

	/// Scale and translate so every node fits, leaving `padding` (a fraction
	/// of the viewport) around the bounding box.
	pub fn fit_view(&mut self, padding: f64) {
		let Some(first) = self.graph.nodes.first() else {
			self.transform = ViewTransform::default();
			return;
		};
		let (mut min_x, mut min_y) = (first.position.x, first.position.y);
		let (mut max_x, mut max_y) = (min_x, min_y);
		for n in &self.graph.nodes {
			min_x = min_x.min(n.position.x);
			min_y = min_y.min(n.position.y);
			max_x = max_x.max(n.position.x);
			max_y = max_y.max(n.position.y);
		}
		let (bw, bh) = (
			max_x - min_x + self.layout.node_width,
			max_y - min_y + self.layout.node_height,
		);
		let usable = 1.0 / (1.0 + padding);
		let k = (self.width * usable / bw)
			.min(self.height * usable / bh)
			.clamp(MIN_ZOOM, MAX_ZOOM);
		self.transform = ViewTransform {
			x: self.width / 2.0 - (min_x + bw / 2.0) * k,
			y: self.height / 2.0 - (min_y + bh / 2.0) * k,
			k,
		};
	}

	/// Put the center of the node box at `position` in the middle of the view.
	pub fn center_on(&mut self, position: Position, zoom: f64) {
		let k = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
		let (cx, cy) = (
			position.x + self.layout.node_width / 2.0,
			position.y + self.layout.node_height / 2.0,
		);
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	/// Zoom by `factor` keeping the screen point under the cursor fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
