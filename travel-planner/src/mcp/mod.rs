//! Stdio JSON-RPC transport for the tools: a server loop and a client that
//! drives a server process.

mod client;
mod message;
mod server;

pub use client::{ClientError, ToolClient, ToolCommand};
pub use message::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION, Request, Response, RpcError,
};
pub use server::{SERVER_NAME, handle_line, handle_request, serve};
