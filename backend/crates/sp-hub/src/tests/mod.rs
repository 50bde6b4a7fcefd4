mod hub_stats;

use crate::mailbox::mailbox as open_mailbox;
use crate::{ConnectionConfig, ConnectionId, Hub, HubStats, MailboxReceiver, Member};

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::{Instant, sleep};

/// Keepalive timings scaled down so tests finish in milliseconds
pub(crate) fn test_config() -> ConnectionConfig {
    ConnectionConfig {
        mailbox_capacity: 8,
        ping_interval: Duration::from_secs(30),
        read_deadline: Duration::from_secs(60),
        write_deadline: Duration::from_millis(200),
        max_frame_size: 1024,
    }
}

pub(crate) fn spawn_hub() -> (Hub, Arc<HubStats>) {
    let stats = Arc::new(HubStats::new());
    let hub = Hub::spawn(stats.clone());
    (hub, stats)
}

/// Register a bare member and hand back its mailbox receiver
pub(crate) fn join(hub: &Hub, capacity: usize) -> (ConnectionId, MailboxReceiver) {
    let connection_id = ConnectionId::new();
    let (mailbox, receiver) = open_mailbox(capacity);
    hub.register(Member::new(connection_id, mailbox));
    (connection_id, receiver)
}

pub(crate) fn frame_bytes(text: &'static str) -> Bytes {
    Bytes::from_static(text.as_bytes())
}

/// Poll the hub until it reports `expected` members, or give up after a second
pub(crate) async fn wait_for_members(hub: &Hub, expected: usize) -> usize {
    let give_up = Instant::now() + Duration::from_secs(1);
    loop {
        let count = hub.member_count().await;
        if count == expected || Instant::now() >= give_up {
            return count;
        }
        sleep(Duration::from_millis(5)).await;
    }
}
