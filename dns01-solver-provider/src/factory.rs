//! Record store factory.

use std::sync::Arc;

use crate::livedns::LiveDnsClient;
use crate::traits::TxtRecordStore;

/// Creates a [`TxtRecordStore`] backed by the production LiveDNS API,
/// authenticated with the given bearer token.
///
/// The store is wrapped in `Arc<dyn TxtRecordStore>` so reconciliation code
/// can share it across async tasks.
#[must_use]
pub fn create_record_store(api_token: String) -> Arc<dyn TxtRecordStore> {
    Arc::new(LiveDnsClient::new(api_token))
}
