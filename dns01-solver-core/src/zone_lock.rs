//! Per-zone mutual exclusion for reconciliation sequences.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-zone locks.
///
/// A reconciliation sequence (read the record set, compute the new value
/// set, write it back) must be the only one in flight for its zone; entries
/// under unrelated zones never wait on each other. Locks are created lazily
/// on first acquisition and live for the registry's lifetime. A zone's lock
/// object is created exactly once even when many tasks race on first use:
/// the get-or-insert happens under the table mutex, which is released
/// before the wait for the zone lock itself.
///
/// Held locks have no timeout or expiry; the critical section is bounded by
/// the record client's own per-request timeouts.
#[derive(Default)]
pub struct ZoneLocks {
    table: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl ZoneLocks {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until the calling task holds the exclusive lock for `zone`.
    ///
    /// The returned guard releases the lock on drop, on success and error
    /// paths alike, so a reconciliation sequence cannot leak its lock.
    pub async fn acquire(&self, zone: &str) -> OwnedMutexGuard<()> {
        self.lock_for(zone).lock_owned().await
    }

    fn lock_for(&self, zone: &str) -> Arc<Mutex<()>> {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        table.entry(zone.to_string()).or_default().clone()
    }
}
