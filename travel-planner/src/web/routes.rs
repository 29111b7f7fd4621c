//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use crate::mcp::ClientError;

use super::dto::*;
use super::state::AppState;

/// Create the bridge router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/call-tool", post(call_tool))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check; reports whether a tool client is connected.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        mcp_connected: state.is_connected(),
    })
}

async fn list_tools(State(state): State<AppState>) -> Result<Json<ToolsResponse>, AppError> {
    let tools = state.client()?.list_tools().await?;
    Ok(Json(ToolsResponse { tools }))
}

/// Forward a tool call and flatten its result to text plus UI resource.
async fn call_tool(
    State(state): State<AppState>,
    payload: Result<Json<CallToolRequest>, JsonRejection>,
) -> Result<Json<CallToolResponse>, AppError> {
    let Json(req) = payload?;
    if req.tool.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "tool name is required".to_string(),
        });
    }

    let client = state.client()?;
    debug!(tool = %req.tool, "Forwarding tool call");
    let result = client.call_tool(&req.tool, req.args).await?;
    Ok(Json(CallToolResponse::from(result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    /// No tool client is connected
    NotConnected,
    /// The tool server answered with an error
    Upstream { message: String },
    Internal { message: String },
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::NotConnected => AppError::NotConnected,
            ClientError::Rpc { .. } => AppError::Upstream {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotConnected => (
                StatusCode::SERVICE_UNAVAILABLE,
                ClientError::NotConnected.to_string(),
            ),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
