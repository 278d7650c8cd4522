//! # dns01-solver-core
//!
//! Reconciliation core for solving ACME DNS-01 challenges on the Gandi
//! LiveDNS API.
//!
//! A certificate-issuance host hands this library a [`Challenge`] whenever a
//! domain-ownership proof must be published ([`ChallengeSolver::present`])
//! or retracted ([`ChallengeSolver::clean_up`]). The record set at a zone
//! entry may be shared by several in-flight challenges (multi-SAN issuance,
//! concurrent renewals), so both transitions run as a read-modify-write
//! sequence under a per-zone lock: merge the proof value into the set on
//! present, subtract it on clean-up, and never lose a sibling's value.
//!
//! The host stays responsible for everything around this core: receiving
//! RPCs, resolving credentials (behind [`CredentialResolver`]), logging
//! setup, and retry scheduling. Errors are surfaced once, wrapped with the
//! step that failed, and never retried internally.

pub mod error;
pub mod solver;
pub mod traits;
pub mod types;
pub mod zone_lock;

#[cfg(test)]
mod test_utils;

pub use error::{SolverError, SolverResult};
pub use solver::{LiveDnsSolver, RecordStoreFactory};
pub use traits::{ChallengeSolver, CredentialResolver};
pub use types::Challenge;
pub use zone_lock::ZoneLocks;
