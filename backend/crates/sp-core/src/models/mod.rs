pub mod aircraft;
pub mod satellite;
pub mod stream_message;
