use serde::{Deserialize, Serialize};

/// Satellite sub-point and orbital state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    pub norad_id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude in km
    pub altitude: f64,
    /// Orbital velocity in km/s
    pub velocity: f64,
}
