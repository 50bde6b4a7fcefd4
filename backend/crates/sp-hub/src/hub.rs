//! The hub: single owner of the member set and the only broadcaster.
//!
//! Every membership change and every fan-out is a request queued to one
//! control loop, so the member set needs no lock. Callers never wait: each
//! request goes through an unbounded queue, and fan-out uses non-blocking
//! enqueues that evict a member rather than stall on it.

use crate::{ConnectionId, Delivery, Frame, HubObserver, LeaveReason, Member};

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::{mpsc, oneshot};

enum HubCommand {
    Register(Member),
    Unregister(ConnectionId),
    Broadcast(Frame),
    MemberCount(oneshot::Sender<usize>),
    Shutdown,
}

impl HubCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::Register(_) => "register",
            Self::Unregister(_) => "unregister",
            Self::Broadcast(_) => "broadcast",
            Self::MemberCount(_) => "member_count",
            Self::Shutdown => "shutdown",
        }
    }
}

/// Cloneable handle for submitting requests to the hub loop.
#[derive(Clone)]
pub struct Hub {
    commands: mpsc::UnboundedSender<HubCommand>,
    observer: Arc<dyn HubObserver>,
}

impl Hub {
    /// Start the hub loop on the current tokio runtime.
    ///
    /// The loop runs until [`Hub::shutdown`] is called or every handle is
    /// dropped.
    pub fn spawn(observer: Arc<dyn HubObserver>) -> Self {
        let (commands, inbox) = mpsc::unbounded_channel();

        let control = HubLoop {
            inbox,
            members: HashMap::new(),
            observer: Arc::clone(&observer),
        };
        tokio::spawn(control.run());

        Self { commands, observer }
    }

    /// Add a member. Emits `on_joined`.
    pub fn register(&self, member: Member) {
        self.submit(HubCommand::Register(member));
    }

    /// Remove a member and close its mailbox. No-op if it is already gone.
    pub fn unregister(&self, connection_id: ConnectionId) {
        self.submit(HubCommand::Unregister(connection_id));
    }

    /// Offer `frame` to every member. Members whose mailbox is full are
    /// evicted.
    pub fn broadcast(&self, frame: Frame) {
        self.submit(HubCommand::Broadcast(frame));
    }

    /// Member count after every request submitted before this call.
    /// Returns 0 once the hub has stopped.
    pub async fn member_count(&self) -> usize {
        let (reply, count) = oneshot::channel();
        self.submit(HubCommand::MemberCount(reply));
        count.await.unwrap_or(0)
    }

    /// Stop the loop. Remaining members leave with [`LeaveReason::Shutdown`].
    pub fn shutdown(&self) {
        self.submit(HubCommand::Shutdown);
    }

    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }

    /// Resolves once the hub loop has stopped.
    pub async fn stopped(&self) {
        self.commands.closed().await;
    }

    pub fn observer(&self) -> &Arc<dyn HubObserver> {
        &self.observer
    }

    fn submit(&self, command: HubCommand) {
        if let Err(mpsc::error::SendError(command)) = self.commands.send(command) {
            debug!("Hub stopped, dropping {} request", command.name());
        }
    }
}

struct HubLoop {
    inbox: mpsc::UnboundedReceiver<HubCommand>,
    members: HashMap<ConnectionId, Member>,
    observer: Arc<dyn HubObserver>,
}

impl HubLoop {
    async fn run(mut self) {
        info!("Hub started");

        while let Some(command) = self.inbox.recv().await {
            match command {
                HubCommand::Register(member) => self.register(member),
                HubCommand::Unregister(connection_id) => {
                    self.remove(connection_id, LeaveReason::Disconnected)
                }
                HubCommand::Broadcast(frame) => self.broadcast(frame),
                HubCommand::MemberCount(reply) => {
                    let _ = reply.send(self.members.len());
                }
                HubCommand::Shutdown => break,
            }
        }

        let remaining: Vec<ConnectionId> = self.members.keys().copied().collect();
        for connection_id in remaining {
            self.remove(connection_id, LeaveReason::Shutdown);
        }

        // Requests still queued are dropped with the inbox
        self.inbox.close();
        info!("Hub stopped");
    }

    fn register(&mut self, member: Member) {
        let connection_id = member.connection_id;

        if let Some(mut previous) = self.members.insert(connection_id, member) {
            warn!("Connection {connection_id} registered twice, closing the older mailbox");
            previous.close_mailbox();
            self.observer
                .on_left(self.members.len() - 1, LeaveReason::Disconnected);
        }

        let active = self.members.len();
        info!("Client {connection_id} registered. Total: {active}");
        self.observer.on_joined(active);
    }

    fn remove(&mut self, connection_id: ConnectionId, reason: LeaveReason) {
        let Some(mut member) = self.members.remove(&connection_id) else {
            debug!("Connection {connection_id} already unregistered");
            return;
        };

        if !member.close_mailbox() {
            warn!("Mailbox for connection {connection_id} was already closed");
        }

        let active = self.members.len();
        let connected_secs = (chrono::Utc::now() - member.connected_at).num_seconds();
        info!(
            "Client {connection_id} unregistered ({reason}) after {connected_secs}s. Total: {active}"
        );
        self.observer.on_left(active, reason);
    }

    fn broadcast(&mut self, frame: Frame) {
        let mut delivered = 0;
        let mut departed = Vec::new();

        for (connection_id, member) in &self.members {
            match member.offer(frame.payload.clone()) {
                Delivery::Delivered => delivered += 1,
                Delivery::Full => {
                    warn!("Connection {connection_id} mailbox full, evicting slow client");
                    departed.push((*connection_id, LeaveReason::Evicted));
                }
                Delivery::Closed => departed.push((*connection_id, LeaveReason::Disconnected)),
            }
        }

        for (connection_id, reason) in departed {
            self.remove(connection_id, reason);
        }

        debug!(
            "Broadcast {} frame ({} bytes) to {} clients",
            frame.kind,
            frame.len(),
            delivered
        );
        self.observer.on_broadcast(&frame.kind, delivered);
    }
}
