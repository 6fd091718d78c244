//! Application state behind the page: the current graph, the last message,
//! the view focus and the theme. The graph functions stay pure; this is the
//! only place that holds state between user actions.

use log::{info, warn};
use serde_json::Value;

use crate::components::json_graph::{FOCUS_ZOOM, Focus, GraphData, build, reset_highlight, search};
use crate::error::{GraphError, Result};

pub const SAMPLE_INPUT: &str = r#"{
  "user": {
    "id": 1,
    "name": {
      "city": "New York",
      "country": "USA"
    },
    "items": [0, 1]
  }
}"#;

pub const MATCH_MESSAGE: &str = "Match found and highlighted.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
	Success(String),
	Error(String),
}

impl Message {
	pub fn text(&self) -> &str {
		match self {
			Self::Success(t) | Self::Error(t) => t,
		}
	}

	pub fn is_error(&self) -> bool {
		matches!(self, Self::Error(_))
	}
}

impl From<&GraphError> for Message {
	fn from(err: &GraphError) -> Self {
		Self::Error(err.to_string())
	}
}

/// Graph, message, focus and theme. The input and search text belong to the
/// page's own signals and are passed in, so typing never touches this state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Visualizer {
	pub graph: GraphData,
	pub message: Option<Message>,
	pub focus: Option<Focus>,
	pub theme: Theme,
	builds: u64,
	searches: u64,
}

impl Visualizer {
	/// Parse `input` and rebuild the graph.
	///
	/// Empty input clears the graph. A parse error leaves the previous graph
	/// in place.
	pub fn generate(&mut self, input: &str) -> Result<()> {
		self.message = None;
		let result = self.try_generate(input);
		self.report(result)
	}

	fn try_generate(&mut self, input: &str) -> Result<()> {
		if input.trim().is_empty() {
			self.replace_graph(GraphData::default());
			return Err(GraphError::EmptyInput);
		}
		let value: Value = serde_json::from_str(input)?;
		self.replace_graph(build(value));
		info!("visualized {} nodes", self.graph.nodes.len());
		Ok(())
	}

	fn replace_graph(&mut self, mut graph: GraphData) {
		self.builds += 1;
		graph.revision = self.builds;
		self.graph = graph;
		self.focus = None;
	}

	/// Empty the input field and the graph.
	pub fn clear(&mut self, input: &mut String) {
		input.clear();
		self.replace_graph(GraphData::default());
	}

	/// Look up `query` and highlight the match. Failures keep the current
	/// highlight.
	pub fn search(&mut self, query: &str) -> Result<()> {
		let result = search(&mut self.graph.nodes, query).map(|position| {
			self.searches += 1;
			self.focus = Some(Focus {
				position,
				zoom: FOCUS_ZOOM,
				request: self.searches,
			});
			self.message = Some(Message::Success(MATCH_MESSAGE.to_string()));
		});
		self.report(result)
	}

	/// Clear the search field and message and return every node to normal.
	pub fn reset_search(&mut self, query: &mut String) {
		query.clear();
		self.message = None;
		reset_highlight(&mut self.graph.nodes);
	}

	pub fn toggle_theme(&mut self) {
		self.theme = self.theme.toggled();
	}

	fn report(&mut self, result: Result<()>) -> Result<()> {
		if let Err(ref err) = result {
			warn!("{}", err);
			self.message = Some(Message::from(err));
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::json_graph::Highlight;

	const INPUT: &str = r#"{"user":{"id":1,"items":[0,1]}}"#;

	fn generated(input: &str) -> Visualizer {
		let mut v = Visualizer::default();
		v.generate(input).unwrap();
		v
	}

	fn highlights(v: &Visualizer) -> Vec<Highlight> {
		v.graph.nodes.iter().map(|n| n.highlight).collect()
	}

	#[test]
	fn sample_input_builds() {
		let v = generated(SAMPLE_INPUT);
		assert_eq!(v.graph.nodes.len(), 9);
		assert!(v.message.is_none());
	}

	#[test]
	fn search_match_highlights_and_focuses() {
		let mut v = generated(INPUT);
		v.search("$.user.items[1]").unwrap();

		let matched = v.graph.matched().unwrap();
		assert_eq!(matched.path, "$.user.items[1]");
		assert_eq!(
			v.graph.nodes.iter().filter(|n| n.highlight == Highlight::Dimmed).count(),
			v.graph.nodes.len() - 1
		);
		assert_eq!(v.focus.map(|f| f.position), Some(matched.position));
		assert_eq!(v.message, Some(Message::Success(MATCH_MESSAGE.to_string())));
	}

	#[test]
	fn repeated_search_issues_a_new_focus_request() {
		let mut v = generated(INPUT);
		v.search("user").unwrap();
		let first = v.focus;
		v.search("user").unwrap();
		assert_ne!(first, v.focus);
	}

	#[test]
	fn missing_path_reports_and_keeps_highlight() {
		let mut v = generated(INPUT);
		v.search("user.id").unwrap();
		let before = highlights(&v);

		let err = v.search("$.missing").unwrap_err();
		assert!(matches!(err, GraphError::NotFound { .. }));
		assert_eq!(highlights(&v), before);
		assert_eq!(
			v.message,
			Some(Message::Error("No match found for $.missing.".to_string()))
		);
	}

	#[test]
	fn empty_search_changes_nothing_but_the_message() {
		let mut v = generated(INPUT);
		let graph = v.graph.clone();
		assert!(matches!(v.search(" "), Err(GraphError::EmptySearch)));
		assert_eq!(v.graph, graph);
		assert!(v.message.as_ref().is_some_and(Message::is_error));
	}

	#[test]
	fn reset_restores_normal_and_clears_query() {
		let mut v = generated(INPUT);
		let mut query = "$.user".to_string();
		v.search(&query).unwrap();
		v.reset_search(&mut query);
		assert!(query.is_empty());
		assert!(v.message.is_none());
		assert!(highlights(&v).iter().all(|h| *h == Highlight::Normal));
	}

	#[test]
	fn empty_input_clears_graph() {
		let mut v = generated(INPUT);
		assert!(matches!(v.generate("  \n"), Err(GraphError::EmptyInput)));
		assert!(v.graph.is_empty());
		assert_eq!(v.message.as_ref().map(Message::text), Some("JSON input is empty."));
	}

	#[test]
	fn parse_error_keeps_previous_graph() {
		let mut v = generated(INPUT);
		let graph = v.graph.clone();
		assert!(matches!(v.generate("{\"a\":"), Err(GraphError::Parse(_))));
		assert_eq!(v.graph, graph);
		let text = v.message.as_ref().map(Message::text).unwrap_or_default();
		assert!(text.starts_with("Invalid JSON: "), "{}", text);
	}

	#[test]
	fn every_build_gets_a_new_revision() {
		let mut v = generated(INPUT);
		let first = v.graph.revision;
		v.search("user").unwrap();
		assert_eq!(v.graph.revision, first);
		v.generate(INPUT).unwrap();
		assert!(v.graph.revision > first);
		assert!(v.graph.matched().is_none());
		assert!(v.focus.is_none());
	}

	#[test]
	fn clear_empties_input_and_graph() {
		let mut v = generated(INPUT);
		let mut input = INPUT.to_string();
		v.clear(&mut input);
		assert!(input.is_empty());
		assert!(v.graph.is_empty());
	}

	#[test]
	fn theme_toggles() {
		let mut v = Visualizer::default();
		v.toggle_theme();
		assert_eq!(v.theme, Theme::Dark);
		v.toggle_theme();
		assert_eq!(v.theme.as_str(), "light");
	}
}
