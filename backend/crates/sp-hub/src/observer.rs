use std::fmt;
use std::sync::Arc;

/// Why a member left the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveReason {
    /// The actor unregistered itself, or its mailbox receiver was gone
    Disconnected,
    /// Mailbox full during a broadcast
    Evicted,
    /// Hub stopped with the member still registered
    Shutdown,
}

impl LeaveReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Evicted => "evicted",
            Self::Shutdown => "shutdown",
        }
    }
}

impl fmt::Display for LeaveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle events emitted by the hub and its connection actors.
///
/// Membership and broadcast events are invoked from inside the hub loop and
/// must not block.
pub trait HubObserver: Send + Sync {
    /// A member joined; `active` is the member count afterwards.
    fn on_joined(&self, _active: usize) {}

    /// A member left; `active` is the member count afterwards.
    fn on_left(&self, _active: usize, _reason: LeaveReason) {}

    /// A frame was fanned out to `delivered` mailboxes.
    fn on_broadcast(&self, _kind: &str, _delivered: usize) {}

    /// A client sent a frame classified as `kind`.
    fn on_inbound(&self, _kind: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl HubObserver for NoopObserver {}

/// Fans every event out to a list of observers, in insertion order.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn HubObserver>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: Arc<dyn HubObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl HubObserver for ObserverSet {
    fn on_joined(&self, active: usize) {
        self.observers.iter().for_each(|o| o.on_joined(active));
    }

    fn on_left(&self, active: usize, reason: LeaveReason) {
        self.observers.iter().for_each(|o| o.on_left(active, reason));
    }

    fn on_broadcast(&self, kind: &str, delivered: usize) {
        self.observers
            .iter()
            .for_each(|o| o.on_broadcast(kind, delivered));
    }

    fn on_inbound(&self, kind: &str) {
        self.observers.iter().for_each(|o| o.on_inbound(kind));
    }
}
