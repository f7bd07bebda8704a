use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use toolgate_protocol::ToolDescriptor;

/// Outcome of a tool handler. The error string is reported in-band to the
/// caller as `isError: true` content, never as a JSON-RPC error.
pub type ToolResult = std::result::Result<Value, String>;

/// Boxed async tool handler, shareable across worker tasks.
pub type ToolHandler = Arc<dyn Fn(Value) -> BoxFuture<'static, ToolResult> + Send + Sync>;

/// Registry of the tools a server exposes.
///
/// Keeps the descriptor list (for `tools/list`) and a map from tool name to
/// handler (for `tools/call`). Tools are addressed by registered name only.
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    handlers: HashMap<String, ToolHandler>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Register a tool descriptor together with its async handler.
    pub fn register<F, Fut>(&mut self, tool: ToolDescriptor, handler: F)
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult> + Send + 'static,
    {
        let name = tool.name.clone();
        self.tools.push(tool);
        self.handlers
            .insert(name, Arc::new(move |args| Box::pin(handler(args))));
    }

    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn handler(&self, name: &str) -> Option<ToolHandler> {
        self.handlers.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolgate_protocol::ToolDescriptor;

    #[tokio::test]
    async fn registered_handler_is_callable_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolDescriptor::new("double", "Double a number", json!({"type": "object"})),
            |args| async move {
                let n = args["n"].as_i64().ok_or("missing 'n' argument")?;
                Ok(json!({"doubled": n * 2}))
            },
        );

        assert_eq!(registry.len(), 1);

        let handler = registry.handler("double").unwrap();
        let result = handler(json!({"n": 21})).await.unwrap();
        assert_eq!(result["doubled"], 42);

        assert!(registry.handler("halve").is_none());
    }
}
