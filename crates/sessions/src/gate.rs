//! Per-sender turn serialization.
//!
//! A turn reads a session, steps the flow, and writes the session back with
//! no storage-level isolation, so two in-flight turns for the same sender
//! would race on that read-modify-write. The gate hands out one lock per
//! sender; a turn holds it for the whole read-step-write span.

use std::sync::Arc;

use {
    dashmap::DashMap,
    tokio::sync::{Mutex, OwnedMutexGuard},
};

/// One mutex per sender, created on first use.
///
/// Entries are never evicted: dropping an entry while a waiter is queued on
/// it would hand the next message a fresh, unlocked mutex and admit a second
/// concurrent turn for that sender.
#[derive(Default)]
pub struct TurnGate {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl TurnGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the sender's turn lock, waiting behind any in-flight turn.
    pub async fn acquire(&self, sender_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(sender_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    #[must_use]
    pub fn tracked_senders(&self) -> usize {
        self.locks.len()
    }
}
