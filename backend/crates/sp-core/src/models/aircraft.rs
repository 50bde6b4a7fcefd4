//! Aircraft position record carried in `aircraft_update` frames.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// 24-bit ICAO transponder address, lowercase hex
    pub icao24: String,
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Ground speed in m/s
    pub velocity: f64,
    /// Track in degrees, clockwise from north
    pub heading: f64,
    /// Unix seconds of the last position fix
    pub last_update: i64,
}
