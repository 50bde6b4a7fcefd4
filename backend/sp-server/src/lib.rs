pub mod api;
pub mod error;
pub mod health;
pub mod http_metrics;
pub mod logger;
pub mod routes;
pub mod source;
pub mod state;

#[cfg(test)]
mod tests;

pub use crate::error::{Result as ServerResult, ServerError};
pub use crate::routes::build_router;
pub use crate::state::ServerState;
