//! Challenge request model.

use serde::{Deserialize, Serialize};

/// One request to prove, or retract proof of, control over a DNS name.
///
/// Constructed by the host per `present`/`clean_up` call; immutable and
/// never persisted by this library.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Fully-qualified name the proof is published at, with trailing dot
    /// (e.g. `_acme-challenge.example.com.`).
    pub resolved_fqdn: String,
    /// The managed zone containing the FQDN, a suffix of it, with trailing
    /// dot.
    pub resolved_zone: String,
    /// Opaque proof value the issuing authority expects to find.
    pub key: String,
    /// Opaque reference the host's
    /// [`CredentialResolver`](crate::traits::CredentialResolver) maps to an
    /// API token.
    pub credential_ref: String,
}

impl Challenge {
    /// Splits the FQDN into the `(zone, entry)` pair that addresses the
    /// record resource and shards the zone locks.
    ///
    /// The entry is the FQDN with the trailing zone stripped; both halves
    /// lose their single trailing dot, so `entry + "." + zone` reassembles
    /// the FQDN minus its final dot.
    #[must_use]
    pub fn zone_and_entry(&self) -> (String, String) {
        let entry = self
            .resolved_fqdn
            .strip_suffix(&self.resolved_zone)
            .unwrap_or(&self.resolved_fqdn);
        let entry = entry.strip_suffix('.').unwrap_or(entry);
        let zone = self
            .resolved_zone
            .strip_suffix('.')
            .unwrap_or(&self.resolved_zone);
        (zone.to_string(), entry.to_string())
    }
}
