//! Turns JSON documents into positioned node/edge trees, finds nodes by path
//! and highlights them, with a Leptos client-side app drawing the result.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod error;
mod pages;
mod visualizer;

pub use components::json_graph::{
	EDGE_STYLE, EdgeStyle, Glow, GraphData, GraphEdge, GraphNode, Highlight, LayoutConfig,
	NodeKind, NodeStyle, NodeValue, Position, ROOT_PATH, StyleClass, apply_match, build,
	build_with, find, find_index, node_style, normalize, reset_highlight, search, style_for,
};
pub use error::{GraphError, Result};

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the visualizer and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		// sets the document title
		<Title text="JSON Tree Visualizer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
