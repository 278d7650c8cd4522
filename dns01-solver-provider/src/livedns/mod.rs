//! Gandi LiveDNS API client.

mod http;
mod store;

use std::time::Duration;

use reqwest::Client;

/// Production API endpoint.
pub(crate) const LIVEDNS_API_BASE: &str = "https://dns.api.gandi.net/api/v5";

/// Fixed record TTL in seconds, the minimum LiveDNS accepts.
pub(crate) const RECORD_TTL: u32 = 300;

/// Connect timeout (seconds).
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Per-request timeout (seconds), bounding every call against a stalled
/// provider.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Stateless-per-call client for the LiveDNS REST API.
pub struct LiveDnsClient {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    base_url: String,
}

impl LiveDnsClient {
    /// Client against the production endpoint.
    #[must_use]
    pub fn new(api_token: String) -> Self {
        Self::with_base_url(api_token, LIVEDNS_API_BASE)
    }

    /// Client against an alternative endpoint. Tests point this at a local
    /// mock server.
    #[must_use]
    pub fn with_base_url(api_token: String, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            api_token,
            base_url: base_url.into(),
        }
    }

    /// `{base}/domains/{zone}/records`
    pub(crate) fn records_url(&self, zone: &str) -> String {
        format!(
            "{}/domains/{}/records",
            self.base_url,
            urlencoding::encode(zone)
        )
    }

    /// `{base}/domains/{zone}/records/{entry}/TXT`
    pub(crate) fn txt_record_url(&self, zone: &str, entry: &str) -> String {
        format!("{}/{}/TXT", self.records_url(zone), urlencoding::encode(entry))
    }
}
