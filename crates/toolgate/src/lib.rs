//! # Toolgate
//!
//! MCP (Model Context Protocol) tool servers and client used by the AI
//! gateway workshop.
//!
//! ## Overview
//!
//! Toolgate covers the single request/response MCP exchange over HTTP:
//!
//! - **Call tools** on remote MCP servers with [`McpClient`]
//! - **Fan out** across several servers with [`ToolRouter`]
//! - **Serve tools** with the [`toolgate_server`] scaffold (registry,
//!   JSON-RPC dispatch, axum routes, config, telemetry)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use toolgate::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = McpClient::new("excel", "http://localhost:8000/excel")?;
//!
//!     for tool in client.list_tools().await? {
//!         println!("{}", tool.name);
//!     }
//!
//!     let text = client
//!         .call_tool_text("get_top_customers", serde_json::json!({"limit": 3}))
//!         .await?;
//!     println!("{text}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Toolgate is organized into focused crates:
//!
//! - **`toolgate-protocol`**: JSON-RPC 2.0 / MCP wire types
//! - **`toolgate-client`**: HTTP client and multi-server tool router
//! - **`toolgate-server`**: shared axum server scaffold
//! - **`toolgate-excel`**: excel-style analytics wrapper server
//! - **`toolgate-weather`**: OpenWeather proxy wrapper server
//!
//! ## License
//!
//! MIT

pub mod prelude;

pub use toolgate_protocol::{
    error_codes, CallToolParams, CallToolResult, JsonRpcRequest, JsonRpcResponse, RpcError,
    ToolContent, ToolDescriptor, JSONRPC_VERSION, PROTOCOL_VERSION,
};

pub use toolgate_client::{unwrap_text, McpClient, McpError, ToolRouter};

pub use toolgate_server::{
    dispatch, mcp_router, telemetry, Config, CorsConfig, LoggingConfig, McpServerState,
    ServerConfig, ServerInfo, ToolHandler, ToolRegistry, ToolResult,
};
