use crate::{HubObserver, LeaveReason};

use metrics::{counter, gauge};

/// Publishes hub events through the `metrics` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObserver;

impl MetricsObserver {
    pub fn new() -> Self {
        Self
    }
}

impl HubObserver for MetricsObserver {
    fn on_joined(&self, active: usize) {
        counter!("websocket_connections_total").increment(1);
        gauge!("active_websocket_connections").set(active as f64);
    }

    fn on_left(&self, active: usize, reason: LeaveReason) {
        counter!("websocket_disconnections_total", "reason" => reason.as_str()).increment(1);
        gauge!("active_websocket_connections").set(active as f64);
    }

    fn on_broadcast(&self, kind: &str, delivered: usize) {
        counter!("messages_broadcast_total", "type" => kind.to_string()).increment(1);
        counter!("frames_delivered_total").increment(delivered as u64);
    }

    fn on_inbound(&self, kind: &str) {
        counter!("messages_processed_total", "type" => kind.to_string()).increment(1);
    }
}
