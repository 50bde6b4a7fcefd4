#![allow(dead_code)]

//! Test infrastructure for sp-server end-to-end tests

use sp_config::SourceConfig;
use sp_hub::{AppState, ConnectionConfig, Hub, HubStats};
use sp_server::{ServerState, build_router, source};

use std::sync::Arc;

use axum_test::TestServer;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::task::JoinHandle;

pub struct TestStack {
    pub server: TestServer,
    pub state: ServerState,
    pub source: JoinHandle<()>,
}

impl TestStack {
    pub fn hub(&self) -> &Hub {
        &self.state.app.hub
    }
}

/// Full router over a fresh hub, with the aircraft source ticking every `tick_interval_ms`
pub fn create_test_stack(tick_interval_ms: u64) -> TestStack {
    let stats = Arc::new(HubStats::new());
    let hub = Hub::spawn(stats.clone());
    let app = AppState::new(hub.clone(), stats, ConnectionConfig::default(), Vec::new());
    let state = ServerState::new(app, PrometheusBuilder::new().build_recorder().handle());

    let source = source::spawn(
        hub,
        &SourceConfig {
            tick_interval_ms,
            aircraft_per_tick: 3,
            ..SourceConfig::default()
        },
    );

    let server = TestServer::builder()
        .http_transport()
        .build(build_router(state.clone()))
        .expect("Failed to create test server");

    TestStack {
        server,
        state,
        source,
    }
}
