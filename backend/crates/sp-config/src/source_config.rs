use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

pub const MIN_AIRCRAFT_PER_TICK: usize = 1;
pub const MAX_AIRCRAFT_PER_TICK: usize = 100;
pub const DEFAULT_AIRCRAFT_PER_TICK: usize = 20;

/// Synthetic broadcast source settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub enabled: bool,
    pub tick_interval_ms: u64,
    /// Aircraft records included in each `aircraft_update` frame
    pub aircraft_per_tick: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            aircraft_per_tick: DEFAULT_AIRCRAFT_PER_TICK,
        }
    }
}

impl SourceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::source(format!(
                "source.tick_interval_ms must be {}-{}, got {}",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, self.tick_interval_ms
            )));
        }

        if !(MIN_AIRCRAFT_PER_TICK..=MAX_AIRCRAFT_PER_TICK).contains(&self.aircraft_per_tick) {
            return Err(ConfigError::source(format!(
                "source.aircraft_per_tick must be {}-{}, got {}",
                MIN_AIRCRAFT_PER_TICK, MAX_AIRCRAFT_PER_TICK, self.aircraft_per_tick
            )));
        }

        Ok(())
    }
}
