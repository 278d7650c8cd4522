//! The record store abstraction reconciliation logic depends on.

use async_trait::async_trait;

use crate::error::Result;

/// Reads and mutates the TXT record set at a `(zone, entry)` pair.
///
/// One store exists per resolved credential. Implementations carry no
/// concurrency logic and no cache; callers that read-modify-write a shared
/// record set must hold their own per-zone lock across the sequence.
#[async_trait]
pub trait TxtRecordStore: Send + Sync {
    /// Current values at the entry, unquoted.
    ///
    /// A missing record reads as an empty set, not an error.
    async fn get_values(&self, zone: &str, entry: &str) -> Result<Vec<String>>;

    /// Creates the record with the given values.
    async fn create(&self, zone: &str, entry: &str, values: &[String]) -> Result<()>;

    /// Replaces the record's value set.
    async fn update(&self, zone: &str, entry: &str, values: &[String]) -> Result<()>;

    /// Removes the record entirely.
    async fn delete(&self, zone: &str, entry: &str) -> Result<()>;
}
