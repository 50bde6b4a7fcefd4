
use crate::{ServerState, build_router};

use sp_hub::{AppState, ConnectionConfig, Hub, HubStats};

use std::sync::Arc;

use axum_test::TestServer;
use metrics_exporter_prometheus::PrometheusBuilder;

pub(crate) struct TestApp {
    pub server: TestServer,
    pub state: ServerState,
}

/// Router over a fresh hub, with a metrics recorder that is never installed globally
pub(crate) fn create_test_app() -> TestApp {
    let stats = Arc::new(HubStats::new());
    let hub = Hub::spawn(stats.clone());
    let app = AppState::new(hub, stats, ConnectionConfig::default(), Vec::new());
    let prometheus = PrometheusBuilder::new().build_recorder().handle();

    let state = ServerState::new(app, prometheus);
    let server = TestServer::builder()
        .build(build_router(state.clone()))
        .expect("Failed to create test server");

    TestApp { server, state }
}
