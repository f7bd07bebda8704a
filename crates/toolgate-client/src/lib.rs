//! HTTP client for the MCP wrapper servers.
//!
//! [`McpClient`] builds JSON-RPC 2.0 envelopes with an auto-incrementing id,
//! POSTs them to `<base_url>/mcp/`, and unwraps the response. [`ToolRouter`]
//! fans tool calls out across several registered servers.

pub mod client;
pub mod error;
pub mod router;

pub use client::{unwrap_text, McpClient};
pub use error::{McpError, Result};
pub use router::ToolRouter;
