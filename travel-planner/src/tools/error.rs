//! Tool dispatch errors.

/// Errors that prevent a tool from running at all.
///
/// Conditions a tool can report to the caller (an unknown destination, an
/// itinerary with nothing to visit) are not errors here; they come back as
/// a [`ToolResult`](super::ToolResult) with `is_error` set.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// No tool has this name
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's input schema
    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    /// An HTML template failed to render
    #[error("failed to render {tool}: {source}")]
    Render {
        tool: String,
        #[source]
        source: askama::Error,
    },
}
