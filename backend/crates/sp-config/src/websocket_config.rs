use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Mailbox capacity constraints
pub const MIN_MAILBOX_CAPACITY: usize = 1;
pub const MAX_MAILBOX_CAPACITY: usize = 65_536;
pub const DEFAULT_MAILBOX_CAPACITY: usize = 256;

// Ping interval constraints (seconds)
pub const MIN_PING_INTERVAL_SECS: u64 = 1;
pub const MAX_PING_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_PING_INTERVAL_SECS: u64 = 54;

// Read deadline constraints (seconds)
pub const MIN_READ_DEADLINE_SECS: u64 = 2;
pub const MAX_READ_DEADLINE_SECS: u64 = 600;
pub const DEFAULT_READ_DEADLINE_SECS: u64 = 60;

// Write deadline constraints (seconds)
pub const MIN_WRITE_DEADLINE_SECS: u64 = 1;
pub const MAX_WRITE_DEADLINE_SECS: u64 = 120;
pub const DEFAULT_WRITE_DEADLINE_SECS: u64 = 10;

// Max inbound frame size constraints (bytes)
pub const MIN_MAX_FRAME_SIZE: usize = 1024;
pub const MAX_MAX_FRAME_SIZE: usize = 64 * 1024 * 1024;
pub const DEFAULT_MAX_FRAME_SIZE: usize = 512 * 1024;

/// Per-connection keepalive and buffering settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebSocketConfig {
    /// Outbound frames buffered per client before it is evicted
    pub mailbox_capacity: usize,
    /// Interval between server pings
    pub ping_interval_secs: u64,
    /// Silent-peer tolerance, renewed by every pong
    pub read_deadline_secs: u64,
    /// Upper bound on a single flush
    pub write_deadline_secs: u64,
    /// Largest inbound frame accepted from a client
    pub max_frame_size: usize,
    /// Origins allowed to upgrade. Empty allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for WebSocketConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            ping_interval_secs: DEFAULT_PING_INTERVAL_SECS,
            read_deadline_secs: DEFAULT_READ_DEADLINE_SECS,
            write_deadline_secs: DEFAULT_WRITE_DEADLINE_SECS,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            allowed_origins: Vec::new(),
        }
    }
}

impl WebSocketConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        check_range(
            "mailbox_capacity",
            self.mailbox_capacity,
            MIN_MAILBOX_CAPACITY,
            MAX_MAILBOX_CAPACITY,
        )?;
        check_range(
            "ping_interval_secs",
            self.ping_interval_secs,
            MIN_PING_INTERVAL_SECS,
            MAX_PING_INTERVAL_SECS,
        )?;
        check_range(
            "read_deadline_secs",
            self.read_deadline_secs,
            MIN_READ_DEADLINE_SECS,
            MAX_READ_DEADLINE_SECS,
        )?;
        check_range(
            "write_deadline_secs",
            self.write_deadline_secs,
            MIN_WRITE_DEADLINE_SECS,
            MAX_WRITE_DEADLINE_SECS,
        )?;
        check_range(
            "max_frame_size",
            self.max_frame_size,
            MIN_MAX_FRAME_SIZE,
            MAX_MAX_FRAME_SIZE,
        )?;

        // A ping must reach the peer before its reader gives up on us
        if self.read_deadline_secs <= self.ping_interval_secs {
            return Err(ConfigError::websocket(format!(
                "websocket.read_deadline_secs ({}) must be greater than ping_interval_secs ({})",
                self.read_deadline_secs, self.ping_interval_secs
            )));
        }

        if self.write_deadline_secs >= self.read_deadline_secs {
            return Err(ConfigError::websocket(format!(
                "websocket.write_deadline_secs ({}) must be less than read_deadline_secs ({})",
                self.write_deadline_secs, self.read_deadline_secs
            )));
        }

        Ok(())
    }
}

fn check_range<T>(field: &str, value: T, min: T, max: T) -> ConfigErrorResult<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ConfigError::websocket(format!(
            "websocket.{} must be {}-{}, got {}",
            field, min, max, value
        )));
    }
    Ok(())
}
