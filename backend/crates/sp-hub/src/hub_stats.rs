//! In-process counters over hub events, readable at any time.

use crate::{HubObserver, LeaveReason};

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct HubStats {
    active: AtomicUsize,
    joined_total: AtomicU64,
    left_total: AtomicU64,
    evicted_total: AtomicU64,
    frames_broadcast: AtomicU64,
    frames_delivered: AtomicU64,
    broadcast_by_kind: Mutex<BTreeMap<String, u64>>,
    inbound_by_kind: Mutex<BTreeMap<String, u64>>,
}

/// Point-in-time copy of [`HubStats`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HubStatsSnapshot {
    pub active_connections: usize,
    pub joined_total: u64,
    pub left_total: u64,
    pub evicted_total: u64,
    pub frames_broadcast: u64,
    pub frames_delivered: u64,
    pub broadcast_by_kind: BTreeMap<String, u64>,
    pub inbound_by_kind: BTreeMap<String, u64>,
}

impl HubStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> HubStatsSnapshot {
        HubStatsSnapshot {
            active_connections: self.active(),
            joined_total: self.joined_total.load(Ordering::Relaxed),
            left_total: self.left_total.load(Ordering::Relaxed),
            evicted_total: self.evicted_total.load(Ordering::Relaxed),
            frames_broadcast: self.frames_broadcast.load(Ordering::Relaxed),
            frames_delivered: self.frames_delivered.load(Ordering::Relaxed),
            broadcast_by_kind: read(&self.broadcast_by_kind),
            inbound_by_kind: read(&self.inbound_by_kind),
        }
    }
}

impl HubObserver for HubStats {
    fn on_joined(&self, active: usize) {
        self.active.store(active, Ordering::Relaxed);
        self.joined_total.fetch_add(1, Ordering::Relaxed);
    }

    fn on_left(&self, active: usize, reason: LeaveReason) {
        self.active.store(active, Ordering::Relaxed);
        self.left_total.fetch_add(1, Ordering::Relaxed);
        if reason == LeaveReason::Evicted {
            self.evicted_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn on_broadcast(&self, kind: &str, delivered: usize) {
        self.frames_broadcast.fetch_add(1, Ordering::Relaxed);
        self.frames_delivered
            .fetch_add(delivered as u64, Ordering::Relaxed);
        tally(&self.broadcast_by_kind, kind);
    }

    fn on_inbound(&self, kind: &str) {
        tally(&self.inbound_by_kind, kind);
    }
}

// A poisoned tally is still a valid tally
fn tally(counts: &Mutex<BTreeMap<String, u64>>, kind: &str) {
    let mut counts = counts.lock().unwrap_or_else(PoisonError::into_inner);
    *counts.entry(kind.to_string()).or_default() += 1;
}

fn read(counts: &Mutex<BTreeMap<String, u64>>) -> BTreeMap<String, u64> {
    counts
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
