use crate::registry::ToolRegistry;
use serde_json::{json, Value};
use toolgate_protocol::{
    CallToolParams, CallToolResult, JsonRpcRequest, JsonRpcResponse, RpcError, PROTOCOL_VERSION,
};

/// Identity reported by `initialize` responses.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// Route a JSON-RPC request to the matching MCP method handler.
pub async fn dispatch(
    info: &ServerInfo,
    registry: &ToolRegistry,
    request: JsonRpcRequest,
) -> JsonRpcResponse {
    match request.method.as_str() {
        "initialize" => handle_initialize(info, request.id),
        "tools/list" => handle_tools_list(registry, request.id),
        "tools/call" => handle_tools_call(registry, request.id, request.params).await,
        other => JsonRpcResponse::error(
            request.id,
            RpcError::method_not_found(format!("Method not found: {}", other)),
        ),
    }
}

fn handle_initialize(info: &ServerInfo, id: Option<Value>) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {}
            },
            "serverInfo": {
                "name": info.name,
                "version": info.version,
            },
        }),
    )
}

fn handle_tools_list(registry: &ToolRegistry, id: Option<Value>) -> JsonRpcResponse {
    JsonRpcResponse::success(
        id,
        json!({
            "tools": registry.descriptors(),
        }),
    )
}

async fn handle_tools_call(
    registry: &ToolRegistry,
    id: Option<Value>,
    params: Option<Value>,
) -> JsonRpcResponse {
    let params = match params {
        Some(p) => p,
        None => {
            return JsonRpcResponse::error(id, RpcError::invalid_params("Invalid params"));
        }
    };

    let call: CallToolParams = match serde_json::from_value(params) {
        Ok(call) => call,
        Err(e) => {
            return JsonRpcResponse::error(
                id,
                RpcError::invalid_params(format!("Invalid params: {}", e)),
            );
        }
    };

    let handler = match registry.handler(&call.name) {
        Some(handler) => handler,
        None => {
            return JsonRpcResponse::error(
                id,
                RpcError::method_not_found(format!("Unknown tool: {}", call.name)),
            );
        }
    };

    let result = match handler(call.arguments).await {
        Ok(value) => {
            tracing::debug!(tool = %call.name, "tool call succeeded");
            CallToolResult::ok(render(&value))
        }
        Err(message) => {
            tracing::warn!(tool = %call.name, error = %message, "tool call failed");
            CallToolResult::error(message)
        }
    };

    match serde_json::to_value(&result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, RpcError::internal(e.to_string())),
    }
}

/// Render a tool's JSON result as the `text` payload. Strings are carried
/// raw so callers are not handed doubly-quoted JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolgate_protocol::ToolDescriptor;

    fn test_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolDescriptor::new("greet", "Greet someone", json!({"type": "object"})),
            |args| async move {
                match args["who"].as_str() {
                    Some(who) => Ok(json!({"greeting": format!("hello {who}")})),
                    None => Err("missing 'who' argument".to_string()),
                }
            },
        );
        registry
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest::new(1, method, params)
    }

    #[tokio::test]
    async fn initialize_reports_protocol_and_server_info() {
        let info = ServerInfo::new("test-mcp", "0.1.0");
        let resp = dispatch(&info, &test_registry(), request("initialize", json!({}))).await;

        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "test-mcp");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn tools_list_serializes_descriptors_in_camel_case() {
        let info = ServerInfo::new("test-mcp", "0.1.0");
        let resp = dispatch(&info, &test_registry(), request("tools/list", json!({}))).await;

        let tools = resp.result.unwrap()["tools"].clone();
        assert_eq!(tools[0]["name"], "greet");
        assert!(tools[0].get("inputSchema").is_some());
    }

    #[tokio::test]
    async fn tools_call_wraps_success_in_text_content() {
        let info = ServerInfo::new("test-mcp", "0.1.0");
        let resp = dispatch(
            &info,
            &test_registry(),
            request("tools/call", json!({"name": "greet", "arguments": {"who": "world"}})),
        )
        .await;

        let result = resp.result.unwrap();
        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert_eq!(text, r#"{"greeting":"hello world"}"#);
    }

    #[tokio::test]
    async fn tool_failure_is_in_band_not_rpc_error() {
        let info = ServerInfo::new("test-mcp", "0.1.0");
        let resp = dispatch(
            &info,
            &test_registry(),
            request("tools/call", json!({"name": "greet", "arguments": {}})),
        )
        .await;

        assert!(resp.is_success());
        let result = resp.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], "Error: missing 'who' argument");
    }

    #[tokio::test]
    async fn unknown_tool_is_method_not_found() {
        let info = ServerInfo::new("test-mcp", "0.1.0");
        let resp = dispatch(
            &info,
            &test_registry(),
            request("tools/call", json!({"name": "nope", "arguments": {}})),
        )
        .await;

        let error = resp.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Unknown tool: nope");
    }

    #[tokio::test]
    async fn missing_params_is_invalid_params() {
        let info = ServerInfo::new("test-mcp", "0.1.0");
        let mut req = request("tools/call", json!({}));
        req.params = None;

        let resp = dispatch(&info, &test_registry(), req).await;
        assert_eq!(resp.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn unknown_method_is_method_not_found() {
        let info = ServerInfo::new("test-mcp", "0.1.0");
        let resp = dispatch(&info, &test_registry(), request("resources/list", json!({}))).await;

        let error = resp.error.unwrap();
        assert_eq!(error.code, -32601);
        assert_eq!(error.message, "Method not found: resources/list");
    }
}
