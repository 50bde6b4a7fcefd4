//! Mailbox-to-transport half of a connection actor.

use crate::{ConnectionConfig, ConnectionId, HubError, MailboxReceiver, Result};

use std::fmt::Display;
use std::time::Duration;

use axum::extract::ws::{Message, Utf8Bytes};
use bytes::{BufMut, Bytes, BytesMut};
use futures::{Sink, SinkExt};
use log::{debug, trace};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Separator between frames coalesced into one write
pub const FRAME_DELIMITER: u8 = b'\n';

/// Forward mailbox frames to `sink` and ping on a fixed interval.
///
/// Returns `Ok` once the mailbox is closed and a close frame has been
/// attempted, or the first write error.
pub(crate) async fn outbound_pump<S>(
    connection_id: ConnectionId,
    mut sink: S,
    mut mailbox: MailboxReceiver,
    config: ConnectionConfig,
) -> Result<()>
where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    // First ping one full interval from now
    let mut keepalive = time::interval_at(
        Instant::now() + config.ping_interval,
        config.ping_interval,
    );
    keepalive.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Ticks at most once per interval, so it cannot starve the mailbox
            biased;

            _ = keepalive.tick() => {
                write(&mut sink, Message::Ping(Bytes::new()), config.write_deadline).await?;
                trace!("Ping sent to connection {connection_id}");
            }

            next = mailbox.recv() => {
                let Some(first) = next else {
                    debug!("Mailbox closed for connection {connection_id}, sending close frame");
                    // The peer may already be gone
                    let _ = write(&mut sink, Message::Close(None), config.write_deadline).await;
                    return Ok(());
                };

                let (batch, count) = drain_batch(first, &mut mailbox);
                write(&mut sink, batch_message(batch), config.write_deadline).await?;
                trace!("Wrote {count} frame(s) to connection {connection_id}");
            }
        }
    }
}

/// Append every frame already queued behind `first`, without waiting.
fn drain_batch(first: Bytes, mailbox: &mut MailboxReceiver) -> (Bytes, usize) {
    let pending = mailbox.len();
    if pending == 0 {
        return (first, 1);
    }

    let mut batch = BytesMut::with_capacity(first.len() * (pending + 1) + pending);
    batch.extend_from_slice(&first);

    let mut count = 1;
    for _ in 0..pending {
        let Ok(frame) = mailbox.try_recv() else {
            break;
        };
        batch.put_u8(FRAME_DELIMITER);
        batch.extend_from_slice(&frame);
        count += 1;
    }

    (batch.freeze(), count)
}

fn batch_message(batch: Bytes) -> Message {
    match Utf8Bytes::try_from(batch.clone()) {
        Ok(text) => Message::Text(text),
        Err(_) => Message::Binary(batch),
    }
}

async fn write<S>(sink: &mut S, message: Message, deadline: Duration) -> Result<()>
where
    S: Sink<Message> + Unpin,
    S::Error: Display,
{
    match time::timeout(deadline, sink.send(message)).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(HubError::transport(e)),
        Err(_) => Err(HubError::write_timeout(deadline)),
    }
}
