use crate::error::{McpError, Result};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use toolgate_protocol::{JsonRpcRequest, JsonRpcResponse, ToolDescriptor, PROTOCOL_VERSION};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// MCP client speaking JSON-RPC 2.0 over HTTP.
///
/// Every request is an independent POST to `<base_url>/mcp/` with a fixed
/// per-request timeout. There are no retries and no session state beyond the
/// monotonically increasing request id.
pub struct McpClient {
    server_name: String,
    endpoint: String,
    http: reqwest::Client,
    next_id: AtomicU64,
}

impl McpClient {
    /// Create a client for the server at `base_url` (e.g.
    /// `http://localhost:8000/excel`) with the default 30 second timeout.
    pub fn new(server_name: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(server_name, base_url, DEFAULT_TIMEOUT)
    }

    /// Same as [`McpClient::new`] but with an explicit per-request timeout.
    pub fn with_timeout(
        server_name: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let endpoint = format!("{}/mcp/", base_url.trim_end_matches('/'));

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            server_name: server_name.into(),
            endpoint,
            http,
            next_id: AtomicU64::new(1),
        })
    }

    /// Server name used when this client is registered with a router.
    pub fn name(&self) -> &str {
        &self.server_name
    }

    /// URL that JSON-RPC requests are POSTed to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send the `initialize` handshake and return the server's `serverInfo`.
    pub async fn initialize(&self) -> Result<Value> {
        let request = self.build_request(
            "initialize",
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {},
                "clientInfo": {
                    "name": "toolgate-client",
                    "version": env!("CARGO_PKG_VERSION"),
                },
            }),
        );

        let result = self.send(&request).await?;
        result
            .get("serverInfo")
            .cloned()
            .ok_or(McpError::MissingField("serverInfo"))
    }

    /// List the tools the server advertises via `tools/list`.
    pub async fn list_tools(&self) -> Result<Vec<ToolDescriptor>> {
        let request = self.build_request("tools/list", json!({}));
        let result = self.send(&request).await?;

        let tools = result
            .get("tools")
            .and_then(Value::as_array)
            .ok_or(McpError::MissingField("tools"))?;

        tools
            .iter()
            .map(|tool| {
                serde_json::from_value(tool.clone()).map_err(|e| McpError::Decode(e.to_string()))
            })
            .collect()
    }

    /// Call a tool and return the raw `result` value.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value> {
        let request = self.build_request(
            "tools/call",
            json!({
                "name": name,
                "arguments": arguments,
            }),
        );

        tracing::debug!(server = %self.server_name, tool = %name, "calling MCP tool");
        self.send(&request).await
    }

    /// Call a tool and unwrap the textual payload from `result.content`.
    pub async fn call_tool_text(&self, name: &str, arguments: Value) -> Result<String> {
        let result = self.call_tool(name, arguments).await?;
        Ok(unwrap_text(&result))
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn build_request(&self, method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest::new(self.next_id(), method, params)
    }

    async fn send(&self, request: &JsonRpcRequest) -> Result<Value> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let body: JsonRpcResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(McpError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        body.result.ok_or(McpError::MissingField("result"))
    }
}

/// Unwrap the textual payload of a `tools/call` result.
///
/// Takes exactly the first element of `result.content`: its `text` field if
/// the element is an object, the element itself rendered as a string if not.
/// Results without a `content` array are rendered whole.
pub fn unwrap_text(result: &Value) -> String {
    match result.get("content").and_then(Value::as_array).and_then(|c| c.first()) {
        Some(Value::Object(obj)) => match obj.get("text") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => Value::Object(obj.clone()).to_string(),
        },
        Some(other) => render(other),
        None => render(result),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
