use std::f64::consts::PI;

use serde_json::Value;
use web_sys::CanvasRenderingContext2d;

use super::state::CanvasState;
use super::style::{EDGE_STYLE, node_style};

const LABEL_CHARS: usize = 18;
const PREVIEW_CHARS: usize = 60;

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(if state.dark { "#111827" } else { "#f8fafc" });
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_hover_info(state, ctx);
}

/// Straight arrow from the bottom middle of the parent box to the top middle
/// of the child box.
fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.layout.node_width, state.layout.node_height);
	let arrow = EDGE_STYLE.arrow_size;
	ctx.set_stroke_style_str(EDGE_STYLE.stroke);
	ctx.set_fill_style_str(EDGE_STYLE.stroke);
	ctx.set_line_width(EDGE_STYLE.width);

	for edge in &state.graph.edges {
		let (Some(src), Some(tgt)) = (state.graph.node(&edge.source), state.graph.node(&edge.target))
		else {
			continue;
		};
		let (x1, y1) = (src.position.x + w / 2.0, src.position.y + h);
		let (x2, y2) = (tgt.position.x + w / 2.0, tgt.position.y);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);

		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2 - ux * arrow, y2 - uy * arrow);
		ctx.stroke();

		let (back_x, back_y) = (x2 - ux * arrow, y2 - uy * arrow);
		let (px, py) = (-uy * arrow * 0.5, ux * arrow * 0.5);
		ctx.begin_path();
		ctx.move_to(x2, y2);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.layout.node_width, state.layout.node_height);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_font("500 14px sans-serif");

	for node in &state.graph.nodes {
		let style = node_style(node);
		let (x, y) = (node.position.x, node.position.y);
		ctx.set_global_alpha(style.opacity);

		if let Some(glow) = style.glow {
			ctx.set_shadow_color(glow.color);
			ctx.set_shadow_blur(glow.blur);
		}
		rounded_rect(ctx, x, y, w, h, style.radius);
		ctx.set_fill_style_str(style.background);
		ctx.fill();
		ctx.set_shadow_blur(0.0);
		ctx.set_shadow_color("transparent");

		ctx.set_stroke_style_str(style.border_color);
		ctx.set_line_width(style.border_width);
		ctx.stroke();

		ctx.set_fill_style_str(style.text_color);
		let _ = ctx.fill_text_with_max_width(
			&truncate(&node.label, LABEL_CHARS),
			x + w / 2.0,
			y + h / 2.0,
			w - 2.0 * style.padding,
		);
	}
	ctx.set_global_alpha(1.0);
}

/// Path and value of the hovered node, pinned to the top left of the canvas.
fn draw_hover_info(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let Some(node) = state.hover.and_then(|i| state.graph.nodes.get(i)) else {
		return;
	};
	let text = format!("{} = {}", node.path, value_preview(node.value.get(), PREVIEW_CHARS));
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	ctx.set_font("12px monospace");
	ctx.set_fill_style_str(if state.dark { "#e5e7eb" } else { "#1f2937" });
	let _ = ctx.fill_text(&text, 8.0, 8.0);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	ctx.line_to(x + w - r, y);
	let _ = ctx.arc(x + w - r, y + r, r, -PI / 2.0, 0.0);
	ctx.line_to(x + w, y + h - r);
	let _ = ctx.arc(x + w - r, y + h - r, r, 0.0, PI / 2.0);
	ctx.line_to(x + r, y + h);
	let _ = ctx.arc(x + r, y + h - r, r, PI / 2.0, PI);
	ctx.line_to(x, y + r);
	let _ = ctx.arc(x + r, y + r, r, PI, 1.5 * PI);
	ctx.close_path();
}

/// Cut `text` to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
	if text.chars().count() <= max {
		return text.to_string();
	}
	let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
	out.push('…');
	out
}

/// Compact single-line JSON for the hover readout.
pub fn value_preview(value: &Value, max: usize) -> String {
	truncate(&value.to_string(), max)
}
