//! Line-delimited JSON-RPC server exposing the travel tools.

use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::tools::{ToolError, TravelTools};

use super::message::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION, Request, Response, RpcError,
};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "travel-planner";

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Answer one line of input.
///
/// Returns `None` for notifications, which get no reply.
pub fn handle_line(tools: &TravelTools, line: &str) -> Option<Response> {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Unparsable message");
            return Some(Response::failure(
                Value::Null,
                RpcError::new(PARSE_ERROR, format!("parse error: {e}")),
            ));
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let request: Request = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            return Some(Response::failure(
                id,
                RpcError::new(INVALID_REQUEST, format!("invalid request: {e}")),
            ));
        }
    };

    let Some(id) = request.id.clone() else {
        debug!(method = %request.method, "Notification");
        return None;
    };

    Some(match handle_request(tools, &request) {
        Ok(result) => Response::success(id, result),
        Err(error) => Response::failure(id, error),
    })
}

/// Dispatch a request by method.
pub fn handle_request(tools: &TravelTools, request: &Request) -> Result<Value, RpcError> {
    match request.method.as_str() {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") },
            "capabilities": { "tools": {} }
        })),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": tools.definitions() })),
        "tools/call" => {
            let params: CallParams =
                serde_json::from_value(request.params.clone().unwrap_or(Value::Null))
                    .map_err(|e| RpcError::new(INVALID_PARAMS, format!("invalid params: {e}")))?;

            let result = tools.call(&params.name, params.arguments).map_err(|e| {
                warn!(tool = %params.name, error = %e, "Tool call failed");
                let code = match e {
                    ToolError::UnknownTool(_) | ToolError::InvalidArguments { .. } => {
                        INVALID_PARAMS
                    }
                    ToolError::Render { .. } => INTERNAL_ERROR,
                };
                RpcError::new(code, e.to_string())
            })?;

            serde_json::to_value(result).map_err(|e| RpcError::new(INTERNAL_ERROR, e.to_string()))
        }
        other => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("Unknown method: {other}"),
        )),
    }
}

/// Serve requests from `reader` until EOF, writing one response per line.
///
/// A line that is not valid UTF-8 is answered with a parse error like any
/// other unparsable line.
pub async fn serve<R, W>(tools: &TravelTools, mut reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Tool server ready, waiting for requests");

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Client disconnected (EOF)");
            return Ok(());
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(tools, line.trim()),
            Err(e) => {
                warn!(error = %e, "Message is not valid UTF-8");
                Some(Response::failure(
                    Value::Null,
                    RpcError::new(PARSE_ERROR, format!("parse error: {e}")),
                ))
            }
        };

        if let Some(response) = response {
            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
        }
    }
}
