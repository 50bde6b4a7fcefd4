use crate::ServerState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const SERVICE_NAME: &str = "clawchan-stream-processor";

/// GET /health - Service identity plus hub connection counters
pub async fn health(State(state): State<ServerState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "hub": state.app.stats.snapshot(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe. Not ready once the hub has stopped.
pub async fn readiness(State(state): State<ServerState>) -> Response {
    if state.app.hub.is_running() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Hub stopped").into_response()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<ServerState>) -> String {
    state.prometheus.render()
}
