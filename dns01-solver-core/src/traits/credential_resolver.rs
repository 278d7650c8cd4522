//! Credential resolution abstraction.

use async_trait::async_trait;

use crate::error::SolverResult;

/// Maps a challenge's opaque credential reference to a LiveDNS API token.
///
/// Owned by the host: a typical implementation looks the token up in a
/// secret store keyed by the reference. The core never interprets the
/// reference or the resolved token.
#[async_trait]
pub trait CredentialResolver: Send + Sync {
    /// Resolves `credential_ref` to a bearer token.
    ///
    /// Implementations should return
    /// [`SolverError::Credential`](crate::error::SolverError::Credential)
    /// when the reference is unknown or resolves to an empty token, so the
    /// failure surfaces before any API call is attempted.
    async fn resolve(&self, credential_ref: &str) -> SolverResult<String>;
}
