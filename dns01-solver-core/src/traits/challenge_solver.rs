//! Challenge solver capability trait.

use async_trait::async_trait;

use crate::error::SolverResult;
use crate::types::Challenge;

/// The capability a certificate-issuance host invokes to publish and
/// retract DNS-01 proof values.
///
/// The host decides when to call and whether a failed call is re-invoked;
/// implementations must therefore keep both operations safe to repeat.
#[async_trait]
pub trait ChallengeSolver: Send + Sync {
    /// Identifier the host uses to route challenges to this solver.
    fn name(&self) -> &'static str;

    /// Publishes the challenge's proof value, merging it with any sibling
    /// values already present at the entry.
    async fn present(&self, challenge: &Challenge) -> SolverResult<()>;

    /// Retracts the challenge's proof value, leaving sibling values in
    /// place.
    async fn clean_up(&self, challenge: &Challenge) -> SolverResult<()>;
}
