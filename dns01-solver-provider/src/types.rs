//! LiveDNS wire types.

use serde::{Deserialize, Serialize};

/// A full resource record set as the LiveDNS API represents it.
///
/// Serves as the POST body when creating a record and as the response shape
/// when reading one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecordSet {
    /// Record type, always `"TXT"` here.
    #[serde(rename = "rrset_type")]
    pub record_type: String,
    /// Record TTL in seconds.
    #[serde(rename = "rrset_ttl")]
    pub ttl: u32,
    /// Entry name relative to the zone (e.g. `_acme-challenge`).
    #[serde(rename = "rrset_name")]
    pub name: String,
    /// The record's values, possibly provider-quoted on the wire.
    #[serde(rename = "rrset_values")]
    pub values: Vec<String>,
}

/// Replacement value set for an existing record (PUT body).
///
/// Name and type are addressed by the request URL, so only TTL and values
/// travel in the body.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSetReplacement {
    /// Record TTL in seconds.
    #[serde(rename = "rrset_ttl")]
    pub ttl: u32,
    /// The values the record is replaced with.
    #[serde(rename = "rrset_values")]
    pub values: Vec<String>,
}

/// Strips provider-side quoting from a TXT value.
///
/// LiveDNS wraps TXT values in double quotes on read; quoting on write is
/// provider-managed, so values are stored and compared unquoted.
pub(crate) fn unquote_txt_value(value: &str) -> String {
    value.trim_matches('"').to_string()
}
