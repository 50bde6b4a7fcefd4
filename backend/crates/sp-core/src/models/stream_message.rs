//! Envelope for every frame pushed to stream clients.

use crate::Result;

use bytes::Bytes;
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const AIRCRAFT_UPDATE: &str = "aircraft_update";
pub const SATELLITE_UPDATE: &str = "satellite_update";

/// A typed envelope around an opaque payload.
///
/// `kind` goes on the wire as `"type"`; `"kind"` is accepted when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamMessage {
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    pub payload: serde_json::Value,
    /// Unix seconds, assigned by the producer
    pub timestamp: i64,
}

impl StreamMessage {
    /// Wrap `payload` stamped with the current time.
    pub fn new<P: Serialize>(kind: impl Into<String>, payload: &P) -> Result<Self> {
        Ok(Self {
            kind: kind.into(),
            payload: serde_json::to_value(payload)?,
            timestamp: Utc::now().timestamp(),
        })
    }

    /// Serialize to the JSON text sent on the wire.
    pub fn encode(&self) -> Result<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(self)?))
    }
}

#[derive(Deserialize)]
struct KindOnly {
    #[serde(rename = "type", alias = "kind")]
    kind: String,
}

/// Classify a raw JSON frame by its kind tag without decoding the payload.
/// Returns `None` for anything that is not a JSON object carrying a string tag.
pub fn peek_kind(frame: &[u8]) -> Option<String> {
    serde_json::from_slice::<KindOnly>(frame)
        .ok()
        .map(|envelope| envelope.kind)
}
