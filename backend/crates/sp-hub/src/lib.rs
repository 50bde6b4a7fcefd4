pub mod app_state;
pub mod connection_actor;
pub mod connection_config;
pub mod connection_id;
pub mod connection_state;
pub mod error;
pub mod frame;
pub mod hub;
pub mod hub_stats;
pub mod mailbox;
pub mod member;
pub mod metrics_observer;
pub mod observer;

mod inbound_pump;
mod outbound_pump;

pub use app_state::{AppState, check_origin, handler};
pub use connection_actor::ConnectionActor;
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_state::ConnectionState;
pub use error::{HubError, Result};
pub use frame::Frame;
pub use hub::Hub;
pub use hub_stats::{HubStats, HubStatsSnapshot};
pub use mailbox::{Delivery, Mailbox, MailboxReceiver, mailbox};
pub use member::Member;
pub use metrics_observer::MetricsObserver;
pub use observer::{HubObserver, LeaveReason, NoopObserver, ObserverSet};
pub use outbound_pump::FRAME_DELIMITER;

#[cfg(test)]
mod tests;

use tracing::info_span;

/// Tracing span covering both pumps of one connection.
pub fn create_connection_span(connection_id: &ConnectionId) -> tracing::Span {
    info_span!("ws_connection", connection_id = %connection_id)
}
