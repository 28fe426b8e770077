//! Ledger client abstraction.
//!
//! The chain holding the bridge account is an external collaborator; this
//! core only needs "verify a submitted transition" and "read the persistent
//! account state" from it. `MockLedger` provides those semantics in-process
//! for the light network and tests, serializing updates the way the real
//! ledger's global transaction ordering would.

use std::collections::HashMap;
use std::sync::Arc;

use alloy_primitives::{Address, keccak256};
use async_trait::async_trait;
use bridge_state::{BridgeState, DeployArgs, VerifiedTransition};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::backend::{ProofBackend, TransitionArtifact};
use crate::error::LedgerError;

/// Identifiers of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub tx_id: String,
    pub tx_hash: String,
}

/// Finality status of a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Pending,
    Included,
    Unknown,
}

/// LedgerClient exposes the ledger semantics the orchestrator depends on.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Reads the bridge account's current persistent state.
    async fn fetch_state(&self) -> Result<BridgeState, LedgerError>;

    /// Creates the bridge account.
    async fn deploy(&self, admin: Address, args: DeployArgs) -> Result<SubmitReceipt, LedgerError>;

    /// Verifies a transition artifact and applies it to the bridge account.
    async fn submit_update(&self, artifact: &TransitionArtifact)
    -> Result<SubmitReceipt, LedgerError>;

    /// Reports the finality status of a previously submitted transaction.
    async fn transaction_status(&self, tx_id: &str) -> Result<TxStatus, LedgerError>;
}

struct TxRecord {
    status_queries: u32,
}

struct MockLedgerInner {
    state: Option<BridgeState>,
    txs: HashMap<String, TxRecord>,
    next_tx: u64,
}

/// An in-process ledger. Updates are proof-gated through the configured
/// backend and serialized behind one lock, so a rejected transition never
/// leaves partial state behind.
pub struct MockLedger {
    backend: Arc<dyn ProofBackend>,
    inner: Mutex<MockLedgerInner>,
}

impl MockLedger {
    pub fn new(backend: Arc<dyn ProofBackend>) -> Self {
        Self {
            backend,
            inner: Mutex::new(MockLedgerInner {
                state: None,
                txs: HashMap::new(),
                next_tx: 0,
            }),
        }
    }
}

fn record_tx(inner: &mut MockLedgerInner) -> SubmitReceipt {
    inner.next_tx += 1;
    let tx_id = format!("tx-{}", inner.next_tx);
    let tx_hash = hex::encode(keccak256(tx_id.as_bytes()));
    inner.txs.insert(tx_id.clone(), TxRecord { status_queries: 0 });
    SubmitReceipt { tx_id, tx_hash }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn fetch_state(&self) -> Result<BridgeState, LedgerError> {
        let inner = self.inner.lock().await;
        inner.state.clone().ok_or(LedgerError::AccountNotFound)
    }

    async fn deploy(&self, admin: Address, args: DeployArgs) -> Result<SubmitReceipt, LedgerError> {
        let mut inner = self.inner.lock().await;

        let mut state = BridgeState::init(admin);
        state.deploy(&args);
        info!(admin = %admin, "bridge account created");
        inner.state = Some(state);

        Ok(record_tx(&mut inner))
    }

    async fn submit_update(
        &self,
        artifact: &TransitionArtifact,
    ) -> Result<SubmitReceipt, LedgerError> {
        let mut inner = self.inner.lock().await;
        let state = inner.state.as_mut().ok_or(LedgerError::AccountNotFound)?;

        self.backend
            .verify(artifact)
            .map_err(|err| LedgerError::ProofRejected(err.to_string()))?;

        let transition = VerifiedTransition::new(artifact.input.clone(), artifact.output);
        state.apply_update(&transition)?;
        debug!(
            latest_head = state.latest_head,
            "bridge account state advanced"
        );

        Ok(record_tx(&mut inner))
    }

    async fn transaction_status(&self, tx_id: &str) -> Result<TxStatus, LedgerError> {
        let mut inner = self.inner.lock().await;
        match inner.txs.get_mut(tx_id) {
            None => Ok(TxStatus::Unknown),
            Some(record) => {
                // The first poll sees the transaction still pending; it
                // finalizes on the next one.
                record.status_queries += 1;
                if record.status_queries > 1 {
                    Ok(TxStatus::Included)
                } else {
                    Ok(TxStatus::Pending)
                }
            }
        }
    }
}
