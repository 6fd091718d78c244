//! Path normalization, lookup and search highlighting.
//!
//! Canonical paths are `$` followed by `.key` or `[index]` segments. Keys are
//! not escaped, so a key containing `.`, `[` or `]` cannot be told apart from
//! nested segments; lookups then return the first such node in build order
//! and only that node is highlighted.

use log::{debug, info};

use super::builder::ROOT_PATH;
use super::types::{GraphNode, Highlight, Position};
use crate::error::{GraphError, Result};

/// Rewrite loose user input (`user.city`, `.user`, `$user`, `[0]`) into a
/// canonical path. Empty input stays empty.
pub fn normalize(raw: &str) -> String {
	let p = raw.trim();
	if p.is_empty() {
		return String::new();
	}
	if p == ROOT_PATH || p.starts_with("$.") {
		return p.to_string();
	}
	if let Some(rest) = p.strip_prefix('$') {
		return join_root(rest);
	}
	if p.starts_with('.') {
		return format!("{}{}", ROOT_PATH, p);
	}
	join_root(p)
}

fn join_root(rest: &str) -> String {
	if rest.starts_with('[') {
		format!("{}{}", ROOT_PATH, rest)
	} else {
		format!("{}.{}", ROOT_PATH, rest)
	}
}

/// Exact match against node paths.
pub fn find<'a>(nodes: &'a [GraphNode], path: &str) -> Option<&'a GraphNode> {
	nodes.get(find_index(nodes, path)?)
}

/// Index of the first node whose path is `path`.
pub fn find_index(nodes: &[GraphNode], path: &str) -> Option<usize> {
	nodes.iter().position(|n| n.path == path)
}

/// Emphasise the node at `matched` and dim everything else.
pub fn apply_match(nodes: &mut [GraphNode], matched: usize) {
	for (i, node) in nodes.iter_mut().enumerate() {
		node.highlight = if i == matched {
			Highlight::Matched
		} else {
			Highlight::Dimmed
		};
	}
}

/// Return every node to `Normal`.
pub fn reset_highlight(nodes: &mut [GraphNode]) {
	for node in nodes {
		node.highlight = Highlight::Normal;
	}
}

/// Normalize `raw`, look it up and highlight the match.
///
/// Returns the matched node's position for the view to center on. On
/// failure the nodes are left exactly as they were.
pub fn search(nodes: &mut [GraphNode], raw: &str) -> Result<Position> {
	let path = normalize(raw);
	if path.is_empty() {
		return Err(GraphError::EmptySearch);
	}
	let Some(matched) = find_index(nodes, &path) else {
		debug!("no node at {}", path);
		return Err(GraphError::NotFound { path });
	};
	let position = nodes[matched].position;
	apply_match(nodes, matched);
	info!("matched {} at ({}, {})", path, position.x, position.y);
	Ok(position)
}
