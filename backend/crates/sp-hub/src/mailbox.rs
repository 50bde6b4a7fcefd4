use bytes::Bytes;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Receiving half of a mailbox, drained by the connection's outbound pump.
pub type MailboxReceiver = mpsc::Receiver<Bytes>;

/// Outcome of a non-blocking enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// Mailbox at capacity; the frame was not queued
    Full,
    /// Mailbox closed, or its receiver is gone
    Closed,
}

/// Sending half of a connection's bounded outbound queue. Owned by the hub.
#[derive(Debug)]
pub struct Mailbox {
    sender: Option<mpsc::Sender<Bytes>>,
}

/// Create a mailbox holding at most `capacity` frames.
pub fn mailbox(capacity: usize) -> (Mailbox, MailboxReceiver) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (
        Mailbox {
            sender: Some(sender),
        },
        receiver,
    )
}

impl Mailbox {
    /// Enqueue without waiting.
    pub fn offer(&self, frame: Bytes) -> Delivery {
        let Some(sender) = &self.sender else {
            return Delivery::Closed;
        };

        match sender.try_send(frame) {
            Ok(()) => Delivery::Delivered,
            Err(TrySendError::Full(_)) => Delivery::Full,
            Err(TrySendError::Closed(_)) => Delivery::Closed,
        }
    }

    /// Close the mailbox. The receiver still drains queued frames, then sees
    /// the end of the stream.
    ///
    /// Returns `false` if the mailbox was already closed.
    pub fn close(&mut self) -> bool {
        self.sender.take().is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_none()
    }
}
