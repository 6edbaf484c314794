use crate::api::state::GatewayState;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

pub async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
    }))
}

pub async fn handle_ready(State(state): State<Arc<GatewayState>>) -> impl IntoResponse {
    let ledger_connected = state.orchestrator.probe().await.is_ok();
    let status = if ledger_connected { "ready" } else { "degraded" };
    let snapshot = state.metrics.snapshot();
    Json(serde_json::json!({
        "status": status,
        "ledger_connected": ledger_connected,
        "uptime_secs": snapshot.uptime.as_secs(),
        "requests_ok": snapshot.requests_ok,
        "requests_error": snapshot.requests_error,
    }))
}

pub async fn handle_metrics(State(state): State<Arc<GatewayState>>) -> Response {
    match state.metrics.encode() {
        Ok(body) => {
            let mut response = body.into_response();
            response
                .headers_mut()
                .insert(axum::http::header::CONTENT_TYPE, HeaderValue::from_static("text/plain; version=0.0.4"));
            response
        }
        Err(err) => {
            let mut response = format!("metrics_error: {}", err).into_response();
            *response.status_mut() = axum::http::StatusCode::INTERNAL_SERVER_ERROR;
            response
        }
    }
}
