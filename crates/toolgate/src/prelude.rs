//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use toolgate::prelude::*;
//! ```

pub use crate::{
    dispatch, mcp_router, unwrap_text, JsonRpcRequest, JsonRpcResponse, McpClient, McpError,
    McpServerState, RpcError, ServerInfo, ToolDescriptor, ToolRegistry, ToolRouter,
    PROTOCOL_VERSION,
};
