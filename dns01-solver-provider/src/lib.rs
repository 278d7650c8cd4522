//! # dns01-solver-provider
//!
//! A minimal client for the Gandi LiveDNS REST API, scoped to what ACME
//! DNS-01 challenge solving needs: reading and mutating the TXT record set
//! at a single `(zone, entry)` pair.
//!
//! ## Operations
//!
//! | Operation | Method | Path | Success |
//! |-----------|--------|------|---------|
//! | `get_values` | GET | `/domains/{zone}/records/{entry}/TXT` | 200, 404 (empty set) |
//! | `create` | POST | `/domains/{zone}/records` | 200, 201 |
//! | `update` | PUT | `/domains/{zone}/records/{entry}/TXT` | 200, 201 |
//! | `delete` | DELETE | `/domains/{zone}/records/{entry}/TXT` | 200, 204 |
//!
//! Every request carries `Authorization: Bearer {token}`; any status outside
//! an operation's contract surfaces as
//! [`ProviderError::UnexpectedStatus`] with the numeric code. Records are
//! written with the fixed minimum TTL LiveDNS accepts (300 seconds).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns01_solver_provider::{create_record_store, TxtRecordStore};
//!
//! # async fn example() -> dns01_solver_provider::Result<()> {
//! let store = create_record_store("your-api-token".to_string());
//! let values = store.get_values("example.com", "_acme-challenge").await?;
//! if values.is_empty() {
//!     store
//!         .create("example.com", "_acme-challenge", &["proof".to_string()])
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The client is stateless per call: no caching, no retries, no concurrency
//! coordination. Callers that read-modify-write a shared record set must
//! serialize access themselves.

mod error;
mod factory;
mod livedns;
mod traits;
mod types;
mod utils;

pub use error::{ProviderError, Result};
pub use factory::create_record_store;
pub use livedns::LiveDnsClient;
pub use traits::TxtRecordStore;
pub use types::{RecordSetReplacement, ResourceRecordSet};
