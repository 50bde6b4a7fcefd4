use sp_config::WebSocketConfig;

use std::time::Duration;

/// Runtime settings for one connection actor.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Bounded outbound mailbox size; a full mailbox gets the client evicted
    pub mailbox_capacity: usize,
    /// Keepalive ping period. Must be shorter than `read_deadline`.
    pub ping_interval: Duration,
    /// Silent-peer tolerance, renewed on every pong
    pub read_deadline: Duration,
    /// Bound on each outbound write
    pub write_deadline: Duration,
    /// Largest inbound frame accepted
    pub max_frame_size: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::from(&WebSocketConfig::default())
    }
}

impl From<&WebSocketConfig> for ConnectionConfig {
    fn from(config: &WebSocketConfig) -> Self {
        Self {
            mailbox_capacity: config.mailbox_capacity,
            ping_interval: Duration::from_secs(config.ping_interval_secs),
            read_deadline: Duration::from_secs(config.read_deadline_secs),
            write_deadline: Duration::from_secs(config.write_deadline_secs),
            max_frame_size: config.max_frame_size,
        }
    }
}
