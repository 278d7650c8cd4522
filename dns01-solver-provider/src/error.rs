//! Error type for LiveDNS API operations.

use thiserror::Error;

/// Failure modes of a single LiveDNS API call.
///
/// [`is_transient`](Self::is_transient) separates transport-level failures
/// worth re-invoking from defects and hard API rejections. Nothing is
/// retried inside this crate; the classification exists for the caller's
/// requeue and log-level decisions.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The outbound request could not be built. A programming or
    /// configuration defect, never transient.
    #[error("error building LiveDNS API request: {detail}")]
    RequestConstruction {
        /// Error details.
        detail: String,
    },

    /// A network-level failure reaching the API (DNS resolution failure,
    /// connection refused, broken transport).
    #[error("error executing LiveDNS API request: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The request exceeded the client's fixed timeout.
    #[error("LiveDNS API request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API answered with a status outside the operation's contract.
    #[error("unexpected HTTP status in LiveDNS API response: {status}")]
    UnexpectedStatus {
        /// The HTTP status code the API returned.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("error decoding LiveDNS API response: {detail}")]
    Parse {
        /// Details about the decode failure.
        detail: String,
    },

    /// The request body could not be encoded.
    #[error("error encoding record set to JSON: {detail}")]
    Serialization {
        /// Details about the encode failure.
        detail: String,
    },
}

impl ProviderError {
    /// Whether the failure is transient and the whole operation is worth
    /// re-invoking.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }
}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
