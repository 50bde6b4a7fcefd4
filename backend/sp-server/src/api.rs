//! REST snapshots of the synthetic feeds.

use sp_core::{Aircraft, Satellite, generate_aircraft, generate_satellites};

use axum::Json;
use serde::Serialize;

/// A full feed snapshot
#[derive(Debug, Serialize)]
pub struct SnapshotResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
    /// Unix seconds
    pub time: i64,
}

impl<T> SnapshotResponse<T> {
    fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
            time: chrono::Utc::now().timestamp(),
        }
    }
}

/// GET /api/v1/aircraft/stream
pub async fn aircraft_stream() -> Json<SnapshotResponse<Aircraft>> {
    Json(SnapshotResponse::new(generate_aircraft()))
}

/// GET /api/v1/satellites/stream
pub async fn satellites_stream() -> Json<SnapshotResponse<Satellite>> {
    Json(SnapshotResponse::new(generate_satellites()))
}
