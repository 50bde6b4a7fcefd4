use sp_hub::AppState;

use axum::extract::FromRef;
use metrics_exporter_prometheus::PrometheusHandle;

/// Router state: the hub-facing WebSocket state plus the metrics handle
#[derive(Clone)]
pub struct ServerState {
    pub app: AppState,
    pub prometheus: PrometheusHandle,
}

impl ServerState {
    pub fn new(app: AppState, prometheus: PrometheusHandle) -> Self {
        Self { app, prometheus }
    }
}

impl FromRef<ServerState> for AppState {
    fn from_ref(state: &ServerState) -> Self {
        state.app.clone()
    }
}
