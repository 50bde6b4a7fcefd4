use crate::{ConnectionActor, ConnectionConfig, Hub, HubStats};

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header::ORIGIN},
    response::Response,
};
use log::{debug, warn};

/// Shared state for the WebSocket endpoint
#[derive(Clone)]
pub struct AppState {
    pub hub: Hub,
    pub stats: Arc<HubStats>,
    pub config: ConnectionConfig,
    /// Empty allows every origin
    pub allowed_origins: Arc<[String]>,
}

impl AppState {
    pub fn new(
        hub: Hub,
        stats: Arc<HubStats>,
        config: ConnectionConfig,
        allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            hub,
            stats,
            config,
            allowed_origins: allowed_origins.into(),
        }
    }
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    check_origin(&headers, &state.allowed_origins)?;

    let max_frame_size = state.config.max_frame_size;

    Ok(ws
        .max_message_size(max_frame_size)
        .max_frame_size(max_frame_size)
        .on_failed_upgrade(|e| warn!("WebSocket upgrade error: {e}"))
        .on_upgrade(move |socket| handle_socket(socket, state)))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let actor = ConnectionActor::new(state.hub, state.config);
    debug!("WebSocket upgraded for connection {}", actor.connection_id());

    actor.serve(socket).await;
}

/// Reject browser upgrades from unlisted origins. Requests without an
/// `Origin` header are not from a browser and pass.
pub fn check_origin(headers: &HeaderMap, allowed_origins: &[String]) -> Result<(), StatusCode> {
    if allowed_origins.is_empty() {
        return Ok(());
    }

    let Some(origin) = headers.get(ORIGIN) else {
        return Ok(());
    };

    match origin.to_str() {
        Ok(origin) if allowed_origins.iter().any(|allowed| allowed == origin) => Ok(()),
        _ => {
            warn!("Rejected WebSocket upgrade from origin {origin:?}");
            Err(StatusCode::FORBIDDEN)
        }
    }
}
