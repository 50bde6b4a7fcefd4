//! Periodic broadcast of the synthetic aircraft feed.

use sp_config::SourceConfig;
use sp_core::{AIRCRAFT_UPDATE, StreamMessage, generate_aircraft};
use sp_hub::{Frame, Hub};

use std::time::Duration;

use log::{info, warn};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Encode one tick: the first `aircraft_per_tick` records of the fleet
pub fn aircraft_frame(aircraft_per_tick: usize) -> sp_core::Result<Frame> {
    let mut aircraft = generate_aircraft();
    aircraft.truncate(aircraft_per_tick);

    let message = StreamMessage::new(AIRCRAFT_UPDATE, &aircraft)?;
    Frame::encode(&message)
}

/// Broadcast an aircraft frame every tick until the hub stops.
pub fn spawn(hub: Hub, config: &SourceConfig) -> JoinHandle<()> {
    let period = Duration::from_millis(config.tick_interval_ms);
    let aircraft_per_tick = config.aircraft_per_tick;

    tokio::spawn(async move {
        info!(
            "Aircraft source started: every {}ms, {} aircraft per tick",
            period.as_millis(),
            aircraft_per_tick
        );

        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = hub.stopped() => break,
                _ = ticker.tick() => match aircraft_frame(aircraft_per_tick) {
                    Ok(frame) => hub.broadcast(frame),
                    Err(e) => warn!("Skipping aircraft tick: {e}"),
                },
            }
        }

        info!("Aircraft source stopped");
    })
}
