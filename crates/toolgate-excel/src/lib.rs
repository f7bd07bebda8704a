//! excel-mcp: MCP wrapper server exposing excel-style analytics tools over
//! in-memory sample workbooks. Mounted under `/excel`, so clients POST
//! JSON-RPC to `/excel/mcp/`.

pub mod data;
pub mod tools;

use axum::{routing::get, Json, Router};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use toolgate_protocol::ToolDescriptor;
use toolgate_server::{build_cors_layer, mcp_router, Config, McpServerState, ServerInfo, ToolRegistry};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub const SERVICE_NAME: &str = "excel-mcp";

/// Register the analytics tools.
pub fn build_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(
        ToolDescriptor::new(
            "list_workbooks",
            "List the available sample workbooks with their columns and row counts",
            json!({"type": "object", "properties": {}}),
        ),
        |args| async move { tools::list_workbooks(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "get_workbook_summary",
            "Summarize one workbook: columns, row count, and a sample row",
            json!({
                "type": "object",
                "properties": {
                    "workbook": {"type": "string", "description": "Workbook name"},
                },
                "required": ["workbook"],
            }),
        ),
        |args| async move { tools::get_workbook_summary(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "analyze_sales_by_region",
            "Total sales grouped by region",
            json!({"type": "object", "properties": {}}),
        ),
        |args| async move { tools::analyze_sales_by_region(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "analyze_sales_by_product",
            "Total sales grouped by product",
            json!({"type": "object", "properties": {}}),
        ),
        |args| async move { tools::analyze_sales_by_product(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "get_top_customers",
            "Customers ranked by lifetime value, descending",
            json!({
                "type": "object",
                "properties": {
                    "limit": {"type": "integer", "description": "Number of customers to return", "default": 5},
                },
            }),
        ),
        |args| async move { tools::get_top_customers(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "get_top_performers",
            "Sales reps ranked by total revenue, descending",
            json!({
                "type": "object",
                "properties": {
                    "limit": {"type": "integer", "description": "Number of reps to return", "default": 5},
                },
            }),
        ),
        |args| async move { tools::get_top_performers(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "get_inventory_alerts",
            "SKUs at or below their reorder level, with severity",
            json!({"type": "object", "properties": {}}),
        ),
        |args| async move { tools::get_inventory_alerts(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "analyze_azure_costs",
            "Monthly Azure cost totals grouped by service",
            json!({"type": "object", "properties": {}}),
        ),
        |args| async move { tools::analyze_azure_costs(args) },
    );

    registry.register(
        ToolDescriptor::new(
            "query_data",
            "Rows of a workbook where a column equals a value (case-insensitive for strings)",
            json!({
                "type": "object",
                "properties": {
                    "workbook": {"type": "string"},
                    "column": {"type": "string"},
                    "value": {"description": "Value to match"},
                },
                "required": ["workbook", "column", "value"],
            }),
        ),
        |args| async move { tools::query_data(args) },
    );

    registry
}

async fn root_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
    }))
}

/// Full application router: the MCP surface nested under `/excel` plus a
/// root health check and the usual middleware stack.
pub fn app(config: &Config) -> Router {
    let state = Arc::new(McpServerState::new(
        ServerInfo::new(SERVICE_NAME, env!("CARGO_PKG_VERSION")),
        Arc::new(build_registry()),
    ));

    Router::new()
        .route("/health", get(root_health))
        .nest("/excel", mcp_router(state))
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}
