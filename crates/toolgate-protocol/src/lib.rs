//! Wire types for the MCP (Model Context Protocol) subset spoken by the
//! toolgate wrapper servers: JSON-RPC 2.0 envelopes plus the tool
//! descriptor and tool-call payload shapes.
//!
//! Only the single request/response exchange is modeled here. There is no
//! session state, streaming, or notification machinery.

pub mod message;
pub mod tool;

pub use message::{error_codes, JsonRpcRequest, JsonRpcResponse, RpcError};
pub use tool::{CallToolParams, CallToolResult, ToolContent, ToolDescriptor};

/// MCP protocol revision reported by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC version literal carried by every envelope.
pub const JSONRPC_VERSION: &str = "2.0";
