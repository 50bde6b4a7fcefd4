use crate::{ServerState, api, health, http_metrics};

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        // WebSocket endpoint
        .route("/ws", get(sp_hub::handler))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/metrics", get(health::metrics))
        // Feed snapshots
        .route("/api/v1/aircraft/stream", get(api::aircraft_stream))
        .route("/api/v1/satellites/stream", get(api::satellites_stream))
        .with_state(state)
        // Unlike route_layer, also runs for unmatched paths
        .layer(middleware::from_fn(http_metrics::track_http))
        // Browser origins for /ws are checked by the upgrade handler
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
