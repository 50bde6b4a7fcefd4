use std::fmt::Display;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures local to one connection. None of these are fatal to the hub.
#[derive(Error, Debug)]
pub enum HubError {
    #[error("No pong within {timeout_ms}ms read deadline {location}")]
    ReadTimeout {
        timeout_ms: u128,
        location: ErrorLocation,
    },

    #[error("Write not flushed within {timeout_ms}ms write deadline {location}")]
    WriteTimeout {
        timeout_ms: u128,
        location: ErrorLocation,
    },

    #[error("Transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },

    #[error("Frame of {size} bytes exceeds limit of {max} bytes {location}")]
    FrameTooLarge {
        size: usize,
        max: usize,
        location: ErrorLocation,
    },
}

impl HubError {
    #[track_caller]
    pub fn transport(error: impl Display) -> Self {
        Self::Transport {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn read_timeout(deadline: Duration) -> Self {
        Self::ReadTimeout {
            timeout_ms: deadline.as_millis(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write_timeout(deadline: Duration) -> Self {
        Self::WriteTimeout {
            timeout_ms: deadline.as_millis(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short label for logs and metrics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::ReadTimeout { .. } => "read_timeout",
            Self::WriteTimeout { .. } => "write_timeout",
            Self::Transport { .. } => "transport",
            Self::FrameTooLarge { .. } => "frame_too_large",
        }
    }
}

pub type Result<T> = std::result::Result<T, HubError>;
