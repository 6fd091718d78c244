//! Turns a JSON value into a grid-positioned tree of nodes and edges.

use std::sync::Arc;

use log::debug;
use serde_json::{Number, Value};

use super::types::{
	GraphData, GraphEdge, GraphNode, Highlight, LayoutConfig, NodeKind, NodeValue, Position,
};

/// Path of the root node.
pub const ROOT_PATH: &str = "$";

struct Pending<'a> {
	value: &'a Value,
	parent: Option<String>,
	path: String,
	pointer: String,
	depth: usize,
	/// Incoming key or `[i]` marker; `None` for the root.
	key: Option<String>,
}

/// Build a graph with the default grid spacing.
pub fn build(value: impl Into<Arc<Value>>) -> GraphData {
	build_with(value, &LayoutConfig::default())
}

/// Depth-first pre-order walk over `value`.
///
/// An explicit worklist replaces recursion so very deep documents cannot
/// exhaust the call stack. Each depth keeps its own placement counter, shared
/// by every branch, which fixes a node's column. Every node refers back into
/// the one shared document instead of copying its subtree.
pub fn build_with(value: impl Into<Arc<Value>>, layout: &LayoutConfig) -> GraphData {
	let root: Arc<Value> = value.into();
	let mut graph = GraphData::default();
	let mut counters: Vec<usize> = Vec::new();
	let mut stack = vec![Pending {
		value: &root,
		parent: None,
		path: ROOT_PATH.to_string(),
		pointer: String::new(),
		depth: 0,
		key: None,
	}];

	while let Some(Pending {
		value,
		parent,
		path,
		pointer,
		depth,
		key,
	}) = stack.pop()
	{
		if counters.len() <= depth {
			counters.resize(depth + 1, 0);
		}
		let position = Position {
			x: counters[depth] as f64 * layout.horizontal_spacing,
			y: depth as f64 * layout.vertical_spacing,
		};
		counters[depth] += 1;

		let id = encode_uri_component(&path);
		let kind = NodeKind::of(value);
		let label = key.unwrap_or_else(|| root_label(value));

		if let Some(parent) = parent {
			graph.edges.push(GraphEdge {
				id: format!("e:{}>{}", parent, id),
				source: parent,
				target: id.clone(),
			});
		}

		// Reversed so the first child is popped first.
		match value {
			Value::Object(map) => {
				for (k, v) in map.iter().rev() {
					stack.push(Pending {
						value: v,
						parent: Some(id.clone()),
						path: format!("{}.{}", path, k),
						pointer: format!("{}/{}", pointer, k.replace('~', "~0").replace('/', "~1")),
						depth: depth + 1,
						key: Some(k.clone()),
					});
				}
			}
			Value::Array(items) => {
				for (i, v) in items.iter().enumerate().rev() {
					stack.push(Pending {
						value: v,
						parent: Some(id.clone()),
						path: format!("{}[{}]", path, i),
						pointer: format!("{}/{}", pointer, i),
						depth: depth + 1,
						key: Some(format!("[{}]", i)),
					});
				}
			}
			_ => {}
		}

		graph.nodes.push(GraphNode {
			id,
			path,
			depth,
			kind,
			label,
			value: NodeValue::new(Arc::clone(&root), pointer),
			position,
			highlight: Highlight::Normal,
		});
	}

	debug!(
		"built graph: {} nodes, {} edges, {} levels",
		graph.nodes.len(),
		graph.edges.len(),
		counters.len()
	);
	graph
}

fn root_label(value: &Value) -> String {
	match value {
		Value::Array(_) => NodeKind::Array.name().to_string(),
		Value::Object(_) => NodeKind::Object.name().to_string(),
		Value::String(s) => s.clone(),
		Value::Number(n) => number_text(n),
		other => other.to_string(),
	}
}

/// Shortest text for a number the way a browser prints it: integral floats
/// lose their `.0`, very large or very small magnitudes use `e+N` / `e-N`.
fn number_text(n: &Number) -> String {
	let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
		return n.to_string();
	};
	let abs = f.abs();
	if !f.is_finite() || abs == 0.0 {
		return "0".to_string();
	}
	if abs >= 1e21 || abs < 1e-6 {
		let text = format!("{:e}", f);
		return match text.split_once('e') {
			Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
			_ => text,
		};
	}
	if f.fract() == 0.0 {
		format!("{:.0}", f)
	} else {
		f.to_string()
	}
}

/// Percent-encode everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(input: &str) -> String {
	const HEX: &[u8; 16] = b"0123456789ABCDEF";
	let mut out = String::with_capacity(input.len());
	for &b in input.as_bytes() {
		match b {
			b'A'..=b'Z'
			| b'a'..=b'z'
			| b'0'..=b'9'
			| b'-'
			| b'_'
			| b'.'
			| b'!'
			| b'~'
			| b'*'
			| b'\''
			| b'('
			| b')' => out.push(b as char),
			_ => {
				out.push('%');
				out.push(HEX[(b >> 4) as usize] as char);
				out.push(HEX[(b & 0x0f) as usize] as char);
			}
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn paths(graph: &GraphData) -> Vec<&str> {
		graph.nodes.iter().map(|n| n.path.as_str()).collect()
	}

	#[test]
	fn nested_object_paths_in_preorder() {
		let graph = build(json!({"a": {"b": 1}}));
		assert_eq!(paths(&graph), vec!["$", "$.a", "$.a.b"]);
		assert_eq!(graph.nodes[2].value.get(), &json!(1));
		assert_eq!(graph.nodes[2].value.pointer(), "/a/b");
		assert_eq!(graph.nodes[2].depth, 2);
	}

	#[test]
	fn array_children_use_bracket_segments() {
		let graph = build(json!({"items": [0, 1]}));
		assert_eq!(paths(&graph), vec!["$", "$.items", "$.items[0]", "$.items[1]"]);
		assert_eq!(graph.nodes[2].label, "[0]");
		assert_eq!(graph.nodes[1].kind, NodeKind::Array);
	}

	#[test]
	fn object_keys_keep_document_order() {
		let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
		let graph = build(value.clone());
		let labels: Vec<&str> = graph.nodes[1..].iter().map(|n| n.label.as_str()).collect();
		assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
	}

	#[test]
	fn single_root_and_tree_shaped_edges() {
		let graph = build(json!({"user": {"id": 1, "tags": ["x", {"y": null}]}, "ok": true}));
		let roots: Vec<_> = graph.nodes.iter().filter(|n| n.depth == 0).collect();
		assert_eq!(roots.len(), 1);
		assert_eq!(roots[0].path, ROOT_PATH);
		assert_eq!(graph.edges.len(), graph.nodes.len() - 1);
		for node in graph.nodes.iter().filter(|n| !n.is_root()) {
			let incoming = graph.edges.iter().filter(|e| e.target == node.id).count();
			assert_eq!(incoming, 1, "{}", node.path);
		}
	}

	#[test]
	fn primitive_root_has_no_edges() {
		let graph = build(json!("hello"));
		assert_eq!(graph.nodes.len(), 1);
		assert!(graph.edges.is_empty());
		assert_eq!(graph.nodes[0].label, "hello");
		assert_eq!(graph.nodes[0].kind, NodeKind::Primitive);
	}

	#[test]
	fn root_labels() {
		assert_eq!(build(json!({})).nodes[0].label, "Object");
		assert_eq!(build(json!([])).nodes[0].label, "Array");
		assert_eq!(build(json!(null)).nodes[0].label, "null");
		assert_eq!(build(json!(false)).nodes[0].label, "false");
		assert_eq!(build(json!(42)).nodes[0].label, "42");
	}

	#[test]
	fn root_number_labels_print_like_a_browser() {
		let label = |text: &str| build(serde_json::from_str::<Value>(text).unwrap()).nodes[0].label.clone();
		assert_eq!(label("1.0"), "1");
		assert_eq!(label("1e2"), "100");
		assert_eq!(label("-2.50"), "-2.5");
		assert_eq!(label("1e21"), "1e+21");
		assert_eq!(label("1.5e-7"), "1.5e-7");
		assert_eq!(label("-0.0"), "0");
		assert_eq!(label("18446744073709551615"), "18446744073709551615");
	}

	#[test]
	fn node_values_share_one_document() {
		let graph = build(json!({"a/b": {"~k": [true]}}));
		let leaf = graph.nodes.last().unwrap();
		assert_eq!(leaf.value.pointer(), "/a~1b/~0k/0");
		assert_eq!(leaf.value.get(), &json!(true));
		assert_eq!(graph.nodes[1].value.get(), &json!({"~k": [true]}));
	}

	#[test]
	fn edge_ids_stay_distinct_when_keys_contain_dashes() {
		let graph = build(json!({
			"a": {"W-$.a-$.a.W.V": 1},
			"a-$": {"a": {"W": {"V": 2}}},
		}));
		let mut ids: Vec<&str> = graph.edges.iter().map(|e| e.id.as_str()).collect();
		let total = ids.len();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), total);
	}

	#[test]
	fn root_kind_reflects_json_type() {
		assert_eq!(build(json!([1])).nodes[0].kind, NodeKind::Array);
		assert_eq!(build(json!({"a": 1})).nodes[0].kind, NodeKind::Object);
	}

	#[test]
	fn columns_are_counted_per_depth_across_branches() {
		let graph = build(json!({"a": {"x": 1}, "b": {"y": 2}}));
		let pos = |path: &str| graph.nodes.iter().find(|n| n.path == path).unwrap().position;
		assert_eq!(pos("$"), Position { x: 0.0, y: 0.0 });
		assert_eq!(pos("$.a"), Position { x: 0.0, y: 140.0 });
		assert_eq!(pos("$.b"), Position { x: 200.0, y: 140.0 });
		assert_eq!(pos("$.a.x"), Position { x: 0.0, y: 280.0 });
		assert_eq!(pos("$.b.y"), Position { x: 200.0, y: 280.0 });
	}

	#[test]
	fn custom_spacing_is_applied() {
		let layout = LayoutConfig {
			horizontal_spacing: 10.0,
			vertical_spacing: 5.0,
			..LayoutConfig::default()
		};
		let graph = build_with(json!([1, 2]), &layout);
		assert_eq!(graph.nodes[2].position, Position { x: 10.0, y: 5.0 });
	}

	#[test]
	fn ids_are_encoded_paths_and_edges_join_them() {
		let graph = build(json!({"items": [0]}));
		assert_eq!(graph.nodes[0].id, "%24");
		assert_eq!(graph.nodes[2].id, "%24.items%5B0%5D");
		let edge = &graph.edges[1];
		assert_eq!(edge.source, "%24.items");
		assert_eq!(edge.target, "%24.items%5B0%5D");
		assert_eq!(edge.id, "e:%24.items>%24.items%5B0%5D");
	}

	#[test]
	fn build_is_deterministic() {
		let value = json!({"a": [1, {"b": [true, null]}], "c": "d"});
		assert_eq!(build(value.clone()), build(value.clone()));
	}

	#[test]
	fn deep_nesting() {
		let mut value = json!(0);
		for _ in 0..1_000 {
			value = json!([value]);
		}
		let graph = build(value.clone());
		assert_eq!(graph.nodes.len(), 1_001);
		assert_eq!(graph.nodes.last().map(|n| n.path.len()), Some(1 + 3 * 1_000));
		assert_eq!(graph.nodes.last().map(|n| n.depth), Some(1_000));
	}

	#[test]
	fn encodes_non_ascii_and_reserved() {
		assert_eq!(encode_uri_component("$.a b"), "%24.a%20b");
		assert_eq!(encode_uri_component("é"), "%C3%A9");
		assert_eq!(encode_uri_component("a-_.!~*'()"), "a-_.!~*'()");
	}
}
