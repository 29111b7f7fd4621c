//! Application state for the bridge.

use std::sync::Arc;

use crate::mcp::{ClientError, ToolClient};

/// Whether the bridge holds a live tool client.
#[derive(Debug)]
pub enum ToolConnection {
    NotConnected,
    Connected(ToolClient),
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Tool server connection, fixed for the life of the bridge
    pub tools: Arc<ToolConnection>,
}

impl AppState {
    pub fn connected(client: ToolClient) -> Self {
        Self {
            tools: Arc::new(ToolConnection::Connected(client)),
        }
    }

    pub fn not_connected() -> Self {
        Self {
            tools: Arc::new(ToolConnection::NotConnected),
        }
    }

    /// True while a client is held and its connection has not failed.
    pub fn is_connected(&self) -> bool {
        match &*self.tools {
            ToolConnection::Connected(client) => client.is_alive(),
            ToolConnection::NotConnected => false,
        }
    }

    /// The client, or [`ClientError::NotConnected`].
    pub fn client(&self) -> Result<&ToolClient, ClientError> {
        match &*self.tools {
            ToolConnection::Connected(client) => Ok(client),
            ToolConnection::NotConnected => Err(ClientError::NotConnected),
        }
    }
}
