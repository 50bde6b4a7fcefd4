use sp_core::StreamMessage;

use bytes::Bytes;

/// A pre-encoded frame handed to the hub for fan-out.
///
/// The hub forwards `payload` untouched; `kind` only labels the broadcast
/// for observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub payload: Bytes,
    pub kind: String,
}

impl Frame {
    pub fn new(payload: impl Into<Bytes>, kind: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            kind: kind.into(),
        }
    }

    /// Encode a stream message. Nothing is produced if encoding fails, so a
    /// failed tick never reaches the hub.
    pub fn encode(message: &StreamMessage) -> sp_core::Result<Self> {
        Ok(Self::new(message.encode()?, message.kind.clone()))
    }

    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}
