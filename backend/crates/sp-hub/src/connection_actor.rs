use crate::inbound_pump::inbound_pump;
use crate::outbound_pump::outbound_pump;
use crate::{
    ConnectionConfig, ConnectionId, ConnectionState, Hub, Member, Result as HubResult,
    create_connection_span, mailbox,
};

use std::fmt::Display;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures::{Sink, Stream, StreamExt};
use log::{debug, info, warn};
use tokio::task::{JoinError, JoinHandle};
use tracing::Instrument;

/// Bridges one duplex stream to the hub.
///
/// Runs an inbound pump (peer to observers, liveness) and an outbound pump
/// (mailbox to peer, keepalive) as separate tasks. Whichever stops first
/// unregisters the actor; the hub closing the mailbox then winds down the
/// outbound side, while the inbound side is aborted.
pub struct ConnectionActor {
    connection_id: ConnectionId,
    hub: Hub,
    config: ConnectionConfig,
    state: ConnectionState,
}

impl ConnectionActor {
    pub fn new(hub: Hub, config: ConnectionConfig) -> Self {
        Self {
            connection_id: ConnectionId::new(),
            hub,
            config,
            state: ConnectionState::Registering,
        }
    }

    pub fn connection_id(&self) -> ConnectionId {
        self.connection_id
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Serve an upgraded WebSocket until it closes.
    pub async fn serve(self, socket: WebSocket) -> ConnectionState {
        let (sink, stream) = socket.split();
        self.run(sink, stream).await
    }

    /// Register with the hub, pump both directions, and tear down.
    /// Returns the terminal state.
    pub async fn run<S, R, E>(mut self, sink: S, stream: R) -> ConnectionState
    where
        S: Sink<Message> + Unpin + Send + 'static,
        S::Error: Display + Send,
        R: Stream<Item = Result<Message, E>> + Unpin + Send + 'static,
        E: Display + Send + 'static,
    {
        let connection_id = self.connection_id;
        let span = create_connection_span(&connection_id);

        let (mailbox, receiver) = mailbox(self.config.mailbox_capacity);
        self.hub.register(Member::new(connection_id, mailbox));
        self.transition(ConnectionState::Active);

        let mut inbound: JoinHandle<HubResult<()>> = tokio::spawn(
            inbound_pump(
                connection_id,
                stream,
                self.config.clone(),
                Arc::clone(self.hub.observer()),
            )
            .instrument(span.clone()),
        );
        let mut outbound: JoinHandle<HubResult<()>> = tokio::spawn(
            outbound_pump(connection_id, sink, receiver, self.config.clone()).instrument(span),
        );

        tokio::select! {
            result = &mut inbound => {
                self.begin_closing("inbound", result);
                // Unregistering closes the mailbox, which ends the outbound pump
                log_pump_exit(connection_id, "outbound", (&mut outbound).await);
            }
            result = &mut outbound => {
                self.begin_closing("outbound", result);
                inbound.abort();
                if let Err(e) = inbound.await
                    && !e.is_cancelled()
                {
                    warn!("Inbound pump for connection {connection_id} panicked: {e}");
                }
            }
        }

        self.transition(ConnectionState::Closed);
        info!("Connection {connection_id} closed");
        self.state
    }

    fn begin_closing(
        &mut self,
        pump: &'static str,
        result: Result<HubResult<()>, JoinError>,
    ) {
        log_pump_exit(self.connection_id, pump, result);
        self.transition(ConnectionState::Closing);
        self.hub.unregister(self.connection_id);
    }

    fn transition(&mut self, next: ConnectionState) {
        if !self.state.can_transition_to(next) {
            warn!(
                "Connection {} ignoring transition {} -> {}",
                self.connection_id, self.state, next
            );
            return;
        }

        debug!(
            "Connection {} {} -> {}",
            self.connection_id, self.state, next
        );
        self.state = next;
    }
}

fn log_pump_exit(
    connection_id: ConnectionId,
    pump: &'static str,
    result: Result<HubResult<()>, JoinError>,
) {
    match result {
        Ok(Ok(())) => debug!("{pump} pump for connection {connection_id} finished"),
        Ok(Err(e)) => info!(
            "{pump} pump for connection {connection_id} stopped ({}): {e}",
            e.reason()
        ),
        Err(e) if e.is_cancelled() => {
            debug!("{pump} pump for connection {connection_id} cancelled")
        }
        Err(e) => warn!("{pump} pump for connection {connection_id} panicked: {e}"),
    }
}
