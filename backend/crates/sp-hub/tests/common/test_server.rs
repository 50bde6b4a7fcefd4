#![allow(dead_code)]

use sp_hub::{AppState, ConnectionConfig, Hub, HubStats};

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, routing::get};
use axum_test::TestServer;
use tokio::time::{Instant, sleep};

/// Configuration for test server instances
#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    pub allowed_origins: Vec<String>,
    pub connection: ConnectionConfig,
}

impl TestServerConfig {
    /// Only accept browser upgrades from `origin`
    pub fn with_allowed_origin(origin: impl Into<String>) -> Self {
        Self {
            allowed_origins: vec![origin.into()],
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

impl TestServerWithState {
    pub fn hub(&self) -> &Hub {
        &self.app_state.hub
    }

    /// Poll until the hub reports `expected` members, or give up after two seconds
    pub async fn wait_for_members(&self, expected: usize) -> usize {
        let give_up = Instant::now() + Duration::from_secs(2);
        loop {
            let count = self.hub().member_count().await;
            if count == expected || Instant::now() >= give_up {
                return count;
            }
            sleep(Duration::from_millis(10)).await;
        }
    }
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Build the Axum Router with AppState
fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let stats = Arc::new(HubStats::new());
    let hub = Hub::spawn(stats.clone());

    let app_state = AppState::new(hub, stats, config.connection, config.allowed_origins);

    let router = Router::new()
        .route("/ws", get(sp_hub::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
