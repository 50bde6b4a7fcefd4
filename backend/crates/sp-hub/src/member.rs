use crate::{ConnectionId, Delivery, Mailbox};

use bytes::Bytes;
use chrono::{DateTime, Utc};

/// A hub member: a connection identity and the sending half of its mailbox.
#[derive(Debug)]
pub struct Member {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
    mailbox: Mailbox,
}

impl Member {
    pub fn new(connection_id: ConnectionId, mailbox: Mailbox) -> Self {
        Self {
            connection_id,
            connected_at: Utc::now(),
            mailbox,
        }
    }

    pub(crate) fn offer(&self, frame: Bytes) -> Delivery {
        self.mailbox.offer(frame)
    }

    pub(crate) fn close_mailbox(&mut self) -> bool {
        self.mailbox.close()
    }
}
