//! Unified error type for challenge reconciliation.

use thiserror::Error;

// Re-export the record client error type
pub use dns01_solver_provider::ProviderError;

/// Errors surfaced to the host from `present`/`clean_up`.
///
/// Each API-facing variant names the reconciliation step that failed and
/// chains the underlying [`ProviderError`]. Nothing is retried here; the
/// host re-invokes on its own schedule.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The challenge's credential reference could not be resolved to an API
    /// token. Raised before any API call is attempted.
    #[error("error resolving LiveDNS API credential: {0}")]
    Credential(String),

    /// Reading the current record values failed.
    #[error("error checking for existing TXT record: {0}")]
    ReadRecord(#[source] ProviderError),

    /// Creating the record failed.
    #[error("error creating TXT record: {0}")]
    CreateRecord(#[source] ProviderError),

    /// Replacing the record's value set failed.
    #[error("error updating TXT record: {0}")]
    UpdateRecord(#[source] ProviderError),

    /// Removing the record failed.
    #[error("error deleting TXT record: {0}")]
    DeleteRecord(#[source] ProviderError),
}

impl SolverError {
    /// Whether the failure is transient and the call is worth re-invoking.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Credential(_) => false,
            Self::ReadRecord(e)
            | Self::CreateRecord(e)
            | Self::UpdateRecord(e)
            | Self::DeleteRecord(e) => e.is_transient(),
        }
    }
}

/// Convenience type alias for `Result<T, SolverError>`.
pub type SolverResult<T> = std::result::Result<T, SolverError>;
