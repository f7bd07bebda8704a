use crate::owm::{CurrentConditions, ForecastSummary};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use toolgate_protocol::{JsonRpcRequest, JsonRpcResponse, RpcError};
use toolgate_server::dispatch;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("upstream weather service error: {0}")]
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(json!({"error": self.to_string()}));
        (status, body).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: String,
    #[serde(default = "default_units")]
    pub units: String,
}

fn default_units() -> String {
    "metric".to_string()
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": state.info.name,
    }))
}

/// `GET /weather?city=&units=`
pub async fn current_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> ApiResult<Json<CurrentConditions>> {
    if query.city.trim().is_empty() {
        return Err(ApiError::BadRequest("city must not be empty".to_string()));
    }

    let conditions = state
        .owm
        .current(&query.city, &query.units)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(conditions))
}

/// `GET /forecast?city=&units=`
pub async fn forecast(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> ApiResult<Json<ForecastSummary>> {
    if query.city.trim().is_empty() {
        return Err(ApiError::BadRequest("city must not be empty".to_string()));
    }

    let summary = state
        .owm
        .forecast(&query.city, &query.units)
        .await
        .map_err(|e| ApiError::Upstream(e.to_string()))?;

    Ok(Json(summary))
}

/// `POST /messages` — the JSON-RPC surface (`initialize`, `tools/list`,
/// `tools/call`) backed by the shared dispatch.
pub async fn messages(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Json<JsonRpcResponse> {
    let request: JsonRpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            return Json(JsonRpcResponse::error(
                None,
                RpcError::parse_error(format!("Parse error: {err}")),
            ))
        }
    };

    Json(dispatch(&state.info, &state.registry, request).await)
}
