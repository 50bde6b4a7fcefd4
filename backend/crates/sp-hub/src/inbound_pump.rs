//! Transport-to-observer half of a connection actor.

use crate::{ConnectionConfig, ConnectionId, HubError, HubObserver, Result};

use sp_core::peek_kind;

use std::fmt::Display;
use std::panic::Location;
use std::sync::Arc;

use axum::extract::ws::Message;
use error_location::ErrorLocation;
use futures::{Stream, StreamExt};
use log::{debug, trace};
use tokio::time::{self, Instant};

/// Read frames from `stream` until the peer goes away or goes silent.
///
/// The read deadline is renewed only by pongs. Client frames are classified
/// for observers and otherwise ignored.
pub(crate) async fn inbound_pump<R, E>(
    connection_id: ConnectionId,
    mut stream: R,
    config: ConnectionConfig,
    observer: Arc<dyn HubObserver>,
) -> Result<()>
where
    R: Stream<Item = std::result::Result<Message, E>> + Unpin,
    E: Display,
{
    let mut deadline = Instant::now() + config.read_deadline;

    loop {
        let next = match time::timeout_at(deadline, stream.next()).await {
            Ok(next) => next,
            Err(_) => return Err(HubError::read_timeout(config.read_deadline)),
        };

        let message = match next {
            Some(Ok(message)) => message,
            Some(Err(e)) => return Err(HubError::transport(e)),
            None => {
                debug!("Connection {connection_id} stream ended");
                return Ok(());
            }
        };

        match message {
            Message::Text(text) => {
                classify(text.as_str().as_bytes(), &config, observer.as_ref())?
            }
            Message::Binary(data) => classify(&data, &config, observer.as_ref())?,
            Message::Pong(_) => {
                deadline = Instant::now() + config.read_deadline;
                trace!("Pong from connection {connection_id}");
            }
            // The transport answers pings itself
            Message::Ping(_) => trace!("Ping from connection {connection_id}"),
            Message::Close(frame) => {
                debug!(
                    "Connection {connection_id} sent close{}",
                    frame
                        .map(|f| format!(" ({} {})", f.code, f.reason.as_str()))
                        .unwrap_or_default()
                );
                return Ok(());
            }
        }
    }
}

fn classify(frame: &[u8], config: &ConnectionConfig, observer: &dyn HubObserver) -> Result<()> {
    if frame.len() > config.max_frame_size {
        return Err(HubError::FrameTooLarge {
            size: frame.len(),
            max: config.max_frame_size,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Malformed frames are not an error
    if let Some(kind) = peek_kind(frame) {
        observer.on_inbound(&kind);
    }

    Ok(())
}
