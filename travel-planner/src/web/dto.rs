//! Data transfer objects for bridge requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tools::{ToolDefinition, ToolResult, UiResource};

/// Body of `POST /call-tool`.
#[derive(Debug, Deserialize)]
pub struct CallToolRequest {
    /// Tool name, e.g. `search_destinations_ui`
    pub tool: String,

    /// Tool arguments; missing or null means none
    #[serde(default)]
    pub args: Value,
}

/// Reply of `POST /call-tool`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResponse {
    /// Last text item of the result, empty if there is none
    pub text: String,

    /// Last UI resource of the result
    pub ui_resource: Option<UiResource>,

    /// Set when the tool reported a failure
    #[serde(default)]
    pub is_error: bool,
}

impl From<ToolResult> for CallToolResponse {
    fn from(result: ToolResult) -> Self {
        Self {
            text: result.last_text().unwrap_or_default().to_string(),
            ui_resource: result.last_resource().cloned(),
            is_error: result.is_error,
        }
    }
}

/// Reply of `GET /tools`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolsResponse {
    pub tools: Vec<ToolDefinition>,
}

/// Reply of `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub mcp_connected: bool,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
