pub mod error;
pub mod models;
pub mod synthetic;

pub use error::{CoreError, Result};
pub use models::aircraft::Aircraft;
pub use models::satellite::Satellite;
pub use models::stream_message::{AIRCRAFT_UPDATE, SATELLITE_UPDATE, StreamMessage, peek_kind};
pub use synthetic::{generate_aircraft, generate_satellites};
