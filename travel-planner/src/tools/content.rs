//! Tool results and their content items.

use serde::{Deserialize, Serialize};

/// MIME type of a UI resource carrying inline HTML.
pub const MIME_HTML: &str = "text/html";

/// MIME type of a UI resource pointing at a URL to load in a frame.
pub const MIME_URI_LIST: &str = "text/uri-list";

/// One item of a tool result.
///
/// Serialized with a `type` tag, so text and embedded resources can never
/// be confused with one another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
    Resource { resource: UiResource },
}

impl ToolContent {
    pub fn text(text: impl Into<String>) -> Self {
        ToolContent::Text { text: text.into() }
    }

    pub fn resource(resource: UiResource) -> Self {
        ToolContent::Resource { resource }
    }
}

/// An interactive UI resource for clients that can render one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiResource {
    /// `ui://travel-planner/...`
    pub uri: String,

    pub mime_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Base64 payload, used instead of `text` for binary content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blob: Option<String>,
}

impl UiResource {
    /// Resource whose content is an HTML document.
    pub fn html(uri: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: MIME_HTML.to_string(),
            text: Some(html.into()),
            blob: None,
        }
    }

    /// Resource whose content is a URL for the client to frame.
    pub fn external_url(uri: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            mime_type: MIME_URI_LIST.to_string(),
            text: Some(url.into()),
            blob: None,
        }
    }
}

/// Build a `ui://travel-planner/<kind>/<key>` URI.
///
/// Characters other than ASCII alphanumerics, `-` and `_` in the key are
/// replaced with `-`.
pub fn ui_uri(kind: &str, key: &str) -> String {
    let key: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("ui://travel-planner/{kind}/{key}")
}

/// Result of a tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,

    /// Set when the tool ran but could not do what was asked.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    /// A successful plain-text result.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: false,
        }
    }

    /// A text result flagged as a tool-level error.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::text(text)],
            is_error: true,
        }
    }

    /// A UI resource, optionally preceded by a text summary.
    pub fn ui(summary: Option<String>, resource: UiResource) -> Self {
        let content = summary
            .map(ToolContent::text)
            .into_iter()
            .chain(std::iter::once(ToolContent::resource(resource)))
            .collect();
        Self {
            content,
            is_error: false,
        }
    }

    /// The last text item, if any.
    pub fn last_text(&self) -> Option<&str> {
        self.content.iter().rev().find_map(|c| match c {
            ToolContent::Text { text } => Some(text.as_str()),
            ToolContent::Resource { .. } => None,
        })
    }

    /// The last UI resource, if any.
    pub fn last_resource(&self) -> Option<&UiResource> {
        self.content.iter().rev().find_map(|c| match c {
            ToolContent::Resource { resource } => Some(resource),
            ToolContent::Text { .. } => None,
        })
    }
}
