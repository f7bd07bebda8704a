use crate::config::CorsConfig;
use crate::dispatch::{dispatch, ServerInfo};
use crate::registry::ToolRegistry;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use toolgate_protocol::{JsonRpcRequest, JsonRpcResponse, RpcError};
use tower_http::cors::{Any, CorsLayer};

/// State shared by the MCP routes of one server.
pub struct McpServerState {
    pub info: ServerInfo,
    pub registry: Arc<ToolRegistry>,
}

impl McpServerState {
    pub fn new(info: ServerInfo, registry: Arc<ToolRegistry>) -> Self {
        Self { info, registry }
    }
}

// Parses the body by hand so malformed JSON gets a -32700 response
// instead of axum's plain-text rejection.
async fn mcp_handler(
    State(state): State<Arc<McpServerState>>,
    body: String,
) -> Json<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            return Json(JsonRpcResponse::error(
                None,
                RpcError::parse_error(format!("Parse error: {err}")),
            ))
        }
    };

    Json(dispatch(&state.info, &state.registry, request).await)
}

async fn health(State(state): State<Arc<McpServerState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": state.info.name,
    }))
}

/// Routes for one MCP server: `POST /mcp` (with and without trailing slash,
/// since clients POST to `<base>/mcp/`) plus `GET /health`.
pub fn mcp_router(state: Arc<McpServerState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mcp", post(mcp_handler))
        .route("/mcp/", post(mcp_handler))
        .with_state(state)
}

/// CORS layer from config, permissive when disabled.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.enabled {
        let mut cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers(Any);

        if config.origins.iter().any(|o| o == "*") {
            cors = cors.allow_origin(Any);
        } else {
            for origin in &config.origins {
                if let Ok(parsed_origin) = origin.parse::<axum::http::HeaderValue>() {
                    cors = cors.allow_origin(parsed_origin);
                }
            }
        }

        cors
    } else {
        CorsLayer::permissive()
    }
}
