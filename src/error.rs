/// Result of the generate and search actions.
pub type Result<T> = std::result::Result<T, GraphError>;

/// User-facing failures of the generate and search actions. None are fatal.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
	/// The input is not valid JSON; carries the parser's message.
	#[error("Invalid JSON: {0}")]
	Parse(#[from] serde_json::Error),

	/// The input is empty or only whitespace.
	#[error("JSON input is empty.")]
	EmptyInput,

	/// The search field is empty.
	#[error("Enter a path to search.")]
	EmptySearch,

	/// No node has the normalized path.
	#[error("No match found for {path}.")]
	NotFound {
		/// The normalized path that was looked up.
		path: String,
	},
}
