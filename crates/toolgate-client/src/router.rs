use crate::client::McpClient;
use crate::error::{McpError, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use toolgate_protocol::ToolDescriptor;

/// Routes tool calls across several MCP servers.
///
/// Servers are registered by name; a call is dispatched to the first server
/// that advertises the requested tool.
pub struct ToolRouter {
    clients: Arc<RwLock<HashMap<String, Arc<McpClient>>>>,
}

impl ToolRouter {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register an MCP server.
    pub async fn add_server(&self, client: McpClient) {
        let name = client.name().to_string();
        let mut clients = self.clients.write().await;
        clients.insert(name, Arc::new(client));
    }

    /// Number of registered servers.
    pub async fn server_count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// List tools grouped by server name.
    pub async fn list_all_tools(&self) -> Result<Vec<(String, Vec<ToolDescriptor>)>> {
        let clients = self.clients.read().await;
        let mut all_tools = Vec::new();

        for (server_name, client) in clients.iter() {
            let tools = client.list_tools().await?;
            all_tools.push((server_name.clone(), tools));
        }

        Ok(all_tools)
    }

    /// Call a tool on whichever server advertises it.
    pub async fn call(&self, tool_name: &str, arguments: Value) -> Result<Value> {
        let clients = self.clients.read().await;

        for client in clients.values() {
            let tools = client.list_tools().await?;
            if tools.iter().any(|t| t.name == tool_name) {
                return client.call_tool(tool_name, arguments).await;
            }
        }

        Err(McpError::ToolNotFound(tool_name.to_string()))
    }
}

impl Default for ToolRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn empty_router_has_no_servers() {
        let router = ToolRouter::new();
        assert_eq!(router.server_count().await, 0);
        assert!(router.list_all_tools().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn call_on_empty_router_reports_tool_not_found() {
        let router = ToolRouter::new();
        let err = router.call("get_top_customers", json!({})).await.unwrap_err();

        assert!(matches!(err, McpError::ToolNotFound(name) if name == "get_top_customers"));
    }
}
