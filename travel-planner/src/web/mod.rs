//! HTTP bridge exposing the tool server to browser clients.
//!
//! Each request is forwarded to the tool server over the stdio client
//! held in [`AppState`].

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, ToolConnection};
