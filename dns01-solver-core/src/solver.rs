//! Challenge reconciliation against the LiveDNS record store.

use std::sync::Arc;

use async_trait::async_trait;

use dns01_solver_provider::{create_record_store, TxtRecordStore};

use crate::error::{SolverError, SolverResult};
use crate::traits::{ChallengeSolver, CredentialResolver};
use crate::types::Challenge;
use crate::zone_lock::ZoneLocks;

/// Builds a record store from a resolved API token.
pub type RecordStoreFactory = Box<dyn Fn(&str) -> Arc<dyn TxtRecordStore> + Send + Sync>;

/// Solves ACME DNS-01 challenges by reconciling TXT record sets on the
/// LiveDNS API.
///
/// The record set at a zone entry is shared by every in-flight challenge
/// for that entry (multi-SAN issuance, concurrent renewals), so both
/// transitions run as read-modify-write sequences under the zone's lock:
/// the proof value is merged into the current set on present and
/// subtracted from it on clean-up, leaving sibling values intact either
/// way.
pub struct LiveDnsSolver {
    credentials: Arc<dyn CredentialResolver>,
    zone_locks: ZoneLocks,
    store_factory: RecordStoreFactory,
}

impl LiveDnsSolver {
    /// Solver backed by the production LiveDNS API.
    #[must_use]
    pub fn new(credentials: Arc<dyn CredentialResolver>) -> Self {
        Self::with_store_factory(
            credentials,
            Box::new(|token| create_record_store(token.to_string())),
        )
    }

    /// Solver with custom record store construction. Tests use this to
    /// point reconciliation at an in-memory store.
    #[must_use]
    pub fn with_store_factory(
        credentials: Arc<dyn CredentialResolver>,
        store_factory: RecordStoreFactory,
    ) -> Self {
        Self {
            credentials,
            zone_locks: ZoneLocks::new(),
            store_factory,
        }
    }

    /// Resolves the challenge's credential and builds the record store for
    /// it. Fails before any API call when resolution does.
    async fn record_store(&self, challenge: &Challenge) -> SolverResult<Arc<dyn TxtRecordStore>> {
        let token = self.credentials.resolve(&challenge.credential_ref).await?;
        Ok((self.store_factory)(&token))
    }

    async fn present_inner(&self, challenge: &Challenge) -> SolverResult<()> {
        let store = self.record_store(challenge).await?;
        let (zone, entry) = challenge.zone_and_entry();
        let _guard = self.zone_locks.acquire(&zone).await;

        let mut values = store
            .get_values(&zone, &entry)
            .await
            .map_err(SolverError::ReadRecord)?;
        if values.is_empty() {
            store
                .create(&zone, &entry, &[challenge.key.clone()])
                .await
                .map_err(SolverError::CreateRecord)?;
            log::debug!("created TXT record at {entry}.{zone}");
            return Ok(());
        }
        // No dedup check before the append; a re-presented key shows up
        // twice in the value list. The provider accepts that and
        // verification tolerates it.
        values.push(challenge.key.clone());
        store
            .update(&zone, &entry, &values)
            .await
            .map_err(SolverError::UpdateRecord)?;
        log::debug!("merged proof value into TXT record at {entry}.{zone}");
        Ok(())
    }

    async fn clean_up_inner(&self, challenge: &Challenge) -> SolverResult<()> {
        let store = self.record_store(challenge).await?;
        let (zone, entry) = challenge.zone_and_entry();
        let _guard = self.zone_locks.acquire(&zone).await;

        let values = store
            .get_values(&zone, &entry)
            .await
            .map_err(SolverError::ReadRecord)?;
        if values.is_empty() {
            // Already absent; a retried clean-up lands here and stays a
            // no-op.
            return Ok(());
        }
        let remaining: Vec<String> = values
            .into_iter()
            .filter(|value| *value != challenge.key)
            .collect();
        if remaining.is_empty() {
            // Nothing left once this challenge's value is subtracted:
            // remove the whole resource rather than writing an empty value
            // set the provider may reject.
            store
                .delete(&zone, &entry)
                .await
                .map_err(SolverError::DeleteRecord)?;
            log::debug!("deleted TXT record at {entry}.{zone}");
            return Ok(());
        }
        store
            .update(&zone, &entry, &remaining)
            .await
            .map_err(SolverError::UpdateRecord)?;
        log::debug!("removed proof value from TXT record at {entry}.{zone}");
        Ok(())
    }
}

#[async_trait]
impl ChallengeSolver for LiveDnsSolver {
    fn name(&self) -> &'static str {
        "livedns"
    }

    async fn present(&self, challenge: &Challenge) -> SolverResult<()> {
        self.present_inner(challenge).await.inspect_err(|e| {
            log::error!("present failed for {}: {e}", challenge.resolved_fqdn);
        })
    }

    async fn clean_up(&self, challenge: &Challenge) -> SolverResult<()> {
        self.clean_up_inner(challenge).await.inspect_err(|e| {
            log::error!("clean-up failed for {}: {e}", challenge.resolved_fqdn);
        })
    }
}
