//! Deterministic mock feeds used by the REST snapshots and the broadcast source.

use crate::{Aircraft, Satellite};

use chrono::Utc;

pub const AIRCRAFT_FLEET_SIZE: usize = 100;

const AIRLINES: [&str; 9] = ["UAL", "AAL", "DAL", "BAW", "DLH", "AFR", "KLM", "JAL", "ANA"];

const SATELLITE_NAMES: [&str; 8] = [
    "ISS (ZARYA)",
    "HST",
    "STARLINK-1007",
    "STARLINK-1008",
    "STARLINK-1009",
    "STARLINK-1010",
    "SES-7",
    "GPS-IIR-M",
];

const FIRST_NORAD_ID: u32 = 25544;

pub fn generate_aircraft() -> Vec<Aircraft> {
    let now = Utc::now().timestamp();

    (0..AIRCRAFT_FLEET_SIZE)
        .map(|i| Aircraft {
            icao24: format!("{:06x}", (i as u32).wrapping_mul(1_234_567) & 0x00FF_FFFF),
            callsign: format!("{}{}", AIRLINES[i % AIRLINES.len()], 100 + i),
            latitude: ((i % 18) as f64 - 9.0) * 10.0,
            longitude: ((i % 36) as f64 - 18.0) * 10.0,
            altitude: 1000.0 + i as f64 * 100.0,
            velocity: 200.0 + (i % 50) as f64 * 10.0,
            heading: (i * 4) as f64,
            last_update: now,
        })
        .collect()
}

pub fn generate_satellites() -> Vec<Satellite> {
    SATELLITE_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Satellite {
            norad_id: FIRST_NORAD_ID + i as u32,
            name: (*name).to_string(),
            latitude: ((i % 9) as f64 - 4.5) * 20.0,
            longitude: ((i % 18) as f64 - 9.0) * 20.0,
            altitude: 400.0 + i as f64 * 1000.0,
            velocity: 7.66,
        })
        .collect()
}
