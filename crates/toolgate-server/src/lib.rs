//! Shared scaffold for the MCP wrapper servers.
//!
//! Each wrapper server registers its tools in a [`ToolRegistry`], and the
//! scaffold provides the JSON-RPC dispatch ([`dispatch`]), the axum routes
//! ([`mcp_router`]), configuration loading ([`Config`]), and tracing setup
//! ([`telemetry`]).

pub mod config;
pub mod dispatch;
pub mod registry;
pub mod routes;
pub mod telemetry;

pub use config::{Config, CorsConfig, LoggingConfig, ServerConfig};
pub use dispatch::{dispatch, ServerInfo};
pub use registry::{ToolHandler, ToolRegistry, ToolResult};
pub use routes::{build_cors_layer, mcp_router, McpServerState};
