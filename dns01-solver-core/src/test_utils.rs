//! Mock implementations and factory helpers for solver tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dns01_solver_provider::{ProviderError, TxtRecordStore};

use crate::error::{SolverError, SolverResult};
use crate::solver::LiveDnsSolver;
use crate::traits::CredentialResolver;
use crate::types::Challenge;

/// One operation observed by [`MockRecordStore`], in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOp {
    Read {
        zone: String,
        entry: String,
    },
    Create {
        zone: String,
        entry: String,
        values: Vec<String>,
    },
    Update {
        zone: String,
        entry: String,
        values: Vec<String>,
    },
    Delete {
        zone: String,
        entry: String,
    },
}

impl RecordOp {
    /// Whether this operation mutates provider state.
    pub fn is_write(&self) -> bool {
        !matches!(self, Self::Read { .. })
    }
}

/// In-memory record store that journals every operation.
pub struct MockRecordStore {
    records: RwLock<HashMap<(String, String), Vec<String>>>,
    ops: RwLock<Vec<RecordOp>>,
    /// If set to an operation kind (`"read"`, `"create"`, `"update"`,
    /// `"delete"`), that operation fails with an injected status error.
    fail_on: RwLock<Option<&'static str>>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ops: RwLock::new(Vec::new()),
            fail_on: RwLock::new(None),
        }
    }

    pub async fn seed(&self, zone: &str, entry: &str, values: &[&str]) {
        self.records.write().await.insert(
            (zone.to_string(), entry.to_string()),
            values.iter().map(ToString::to_string).collect(),
        );
    }

    pub async fn values(&self, zone: &str, entry: &str) -> Option<Vec<String>> {
        self.records
            .read()
            .await
            .get(&(zone.to_string(), entry.to_string()))
            .cloned()
    }

    pub async fn ops(&self) -> Vec<RecordOp> {
        self.ops.read().await.clone()
    }

    pub async fn clear_ops(&self) {
        self.ops.write().await.clear();
    }

    pub async fn set_fail_on(&self, op: Option<&'static str>) {
        *self.fail_on.write().await = op;
    }

    async fn check_fail(&self, op: &'static str) -> Result<(), ProviderError> {
        if *self.fail_on.read().await == Some(op) {
            return Err(ProviderError::UnexpectedStatus { status: 500 });
        }
        Ok(())
    }
}

#[async_trait]
impl TxtRecordStore for MockRecordStore {
    async fn get_values(
        &self,
        zone: &str,
        entry: &str,
    ) -> Result<Vec<String>, ProviderError> {
        self.ops.write().await.push(RecordOp::Read {
            zone: zone.to_string(),
            entry: entry.to_string(),
        });
        self.check_fail("read").await?;
        // Suspension point between a sequence's read and write, so broken
        // zone locking shows up as interleaved journals and lost updates.
        tokio::task::yield_now().await;
        Ok(self
            .records
            .read()
            .await
            .get(&(zone.to_string(), entry.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn create(
        &self,
        zone: &str,
        entry: &str,
        values: &[String],
    ) -> Result<(), ProviderError> {
        self.ops.write().await.push(RecordOp::Create {
            zone: zone.to_string(),
            entry: entry.to_string(),
            values: values.to_vec(),
        });
        self.check_fail("create").await?;
        self.records
            .write()
            .await
            .insert((zone.to_string(), entry.to_string()), values.to_vec());
        Ok(())
    }

    async fn update(
        &self,
        zone: &str,
        entry: &str,
        values: &[String],
    ) -> Result<(), ProviderError> {
        self.ops.write().await.push(RecordOp::Update {
            zone: zone.to_string(),
            entry: entry.to_string(),
            values: values.to_vec(),
        });
        self.check_fail("update").await?;
        self.records
            .write()
            .await
            .insert((zone.to_string(), entry.to_string()), values.to_vec());
        Ok(())
    }

    async fn delete(&self, zone: &str, entry: &str) -> Result<(), ProviderError> {
        self.ops.write().await.push(RecordOp::Delete {
            zone: zone.to_string(),
            entry: entry.to_string(),
        });
        self.check_fail("delete").await?;
        self.records
            .write()
            .await
            .remove(&(zone.to_string(), entry.to_string()));
        Ok(())
    }
}

/// Credential resolver over a fixed in-memory map.
pub struct MockCredentialResolver {
    tokens: RwLock<HashMap<String, String>>,
}

impl MockCredentialResolver {
    pub fn new() -> Self {
        Self {
            tokens: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, credential_ref: &str, token: &str) {
        self.tokens
            .write()
            .await
            .insert(credential_ref.to_string(), token.to_string());
    }
}

#[async_trait]
impl CredentialResolver for MockCredentialResolver {
    async fn resolve(&self, credential_ref: &str) -> SolverResult<String> {
        self.tokens
            .read()
            .await
            .get(credential_ref)
            .cloned()
            .ok_or_else(|| {
                SolverError::Credential(format!("no token for reference {credential_ref:?}"))
            })
    }
}

/// The credential reference [`test_challenge`] carries and
/// [`create_test_solver`] pre-seeds.
pub const TEST_CREDENTIAL_REF: &str = "test-cred";

/// A solver wired to an in-memory store and resolver.
pub async fn create_test_solver() -> (
    Arc<LiveDnsSolver>,
    Arc<MockRecordStore>,
    Arc<MockCredentialResolver>,
) {
    let store = Arc::new(MockRecordStore::new());
    let resolver = Arc::new(MockCredentialResolver::new());
    resolver.insert(TEST_CREDENTIAL_REF, "test-token").await;

    let factory_store = store.clone();
    let solver = Arc::new(LiveDnsSolver::with_store_factory(
        resolver.clone(),
        Box::new(move |_token| -> Arc<dyn TxtRecordStore> { factory_store.clone() }),
    ));
    (solver, store, resolver)
}

/// A challenge for `_acme-challenge.example.com.` carrying `key`.
pub fn test_challenge(key: &str) -> Challenge {
    Challenge {
        resolved_fqdn: "_acme-challenge.example.com.".to_string(),
        resolved_zone: "example.com.".to_string(),
        key: key.to_string(),
        credential_ref: TEST_CREDENTIAL_REF.to_string(),
    }
}
