//! weather-mcp: wrapper server proxying the OpenWeather REST API.
//!
//! Serves `GET /weather` and `GET /forecast` as plain REST plus a minimal
//! JSON-RPC surface on `POST /messages` exposing the same data as MCP tools.

pub mod owm;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use owm::OwmClient;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use toolgate_protocol::ToolDescriptor;
use toolgate_server::{build_cors_layer, Config, ServerInfo, ToolRegistry};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub const SERVICE_NAME: &str = "weather-mcp";

/// State shared by the REST and JSON-RPC handlers.
pub struct AppState {
    pub info: ServerInfo,
    pub registry: Arc<ToolRegistry>,
    pub owm: Arc<OwmClient>,
}

fn city_arg(args: &Value) -> Result<String, String> {
    args.get("city")
        .and_then(Value::as_str)
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| "missing 'city' argument".to_string())
}

fn units_arg(args: &Value) -> String {
    args.get("units")
        .and_then(Value::as_str)
        .unwrap_or("metric")
        .to_string()
}

/// Register the weather tools, each delegating to the shared OWM client.
pub fn build_registry(owm: Arc<OwmClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    let weather_schema = json!({
        "type": "object",
        "properties": {
            "city": {"type": "string", "description": "City name, e.g. 'Lisbon'"},
            "units": {"type": "string", "enum": ["standard", "metric", "imperial"], "default": "metric"},
        },
        "required": ["city"],
    });

    let client = owm.clone();
    registry.register(
        ToolDescriptor::new(
            "get_current_weather",
            "Current conditions for a city via OpenWeather",
            weather_schema.clone(),
        ),
        move |args| {
            let owm = client.clone();
            async move {
                let city = city_arg(&args)?;
                let units = units_arg(&args);
                let conditions = owm.current(&city, &units).await.map_err(|e| e.to_string())?;
                serde_json::to_value(conditions).map_err(|e| e.to_string())
            }
        },
    );

    let client = owm;
    registry.register(
        ToolDescriptor::new(
            "get_forecast",
            "3-hourly forecast for a city via OpenWeather",
            weather_schema,
        ),
        move |args| {
            let owm = client.clone();
            async move {
                let city = city_arg(&args)?;
                let units = units_arg(&args);
                let summary = owm.forecast(&city, &units).await.map_err(|e| e.to_string())?;
                serde_json::to_value(summary).map_err(|e| e.to_string())
            }
        },
    );

    registry
}

/// Full application router.
pub fn app(config: &Config, owm: OwmClient) -> Router {
    let owm = Arc::new(owm);
    let state = Arc::new(AppState {
        info: ServerInfo::new(SERVICE_NAME, env!("CARGO_PKG_VERSION")),
        registry: Arc::new(build_registry(owm.clone())),
        owm,
    });

    Router::new()
        .route("/health", get(routes::health))
        .route("/weather", get(routes::current_weather))
        .route("/forecast", get(routes::forecast))
        .route("/messages", post(routes::messages))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}
