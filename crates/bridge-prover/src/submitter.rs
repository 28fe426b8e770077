//! The submission pipeline: decode a raw bundle, prove the transition, and
//! submit the artifact to the bridge account.

use std::sync::Arc;

use alloy_primitives::{Address, keccak256};
use anyhow::Result;
use tracing::{debug, info};

use crate::backend::{MockBackend, ProofBackend, TransitionArtifact};
use crate::bundle::RawProofBundle;
use crate::config::{Network, SubmitterConfig};
use crate::ledger::{LedgerClient, MockLedger, SubmitReceipt};

pub struct ProofSubmitter {
    config: SubmitterConfig,
    backend: Arc<dyn ProofBackend>,
    ledger: Arc<dyn LedgerClient>,
}

impl ProofSubmitter {
    pub fn new(
        config: SubmitterConfig,
        backend: Arc<dyn ProofBackend>,
        ledger: Arc<dyn LedgerClient>,
    ) -> Self {
        Self {
            config,
            backend,
            ledger,
        }
    }

    /// Builds a submitter for the configured network. The light network runs
    /// fully in process; the public networks need an external ledger client
    /// wired in through [`ProofSubmitter::new`].
    pub fn for_network(config: SubmitterConfig) -> Result<Self> {
        match config.network {
            Network::Light => {
                let backend = Arc::new(MockBackend);
                let ledger = Arc::new(MockLedger::new(backend.clone()));
                Ok(Self::new(config, backend, ledger))
            }
            other => anyhow::bail!(
                "network '{other}' requires an external ledger client; only the in-process light ledger ships with this crate"
            ),
        }
    }

    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<dyn LedgerClient> {
        &self.ledger
    }

    /// Address administering the bridge account, derived from the configured
    /// sender key.
    pub fn admin_address(&self) -> Address {
        Address::from_slice(&keccak256(self.config.sender_key.as_bytes())[12..])
    }

    /// Establishes the connection context for the configured network.
    pub async fn network_setup(&self) -> Result<()> {
        info!(network = %self.config.network, rpc_url = %self.config.rpc_url, "setting up network");
        // The in-process ledger needs no dial; an external client would
        // connect to rpc_url here.
        info!("finished network setup");
        Ok(())
    }

    /// Recomputes the circuit verification key hashes and compares them to
    /// the values baked into this repository. Fails closed on any
    /// disagreement.
    #[cfg(feature = "sp1")]
    pub fn compile_programs(&self) -> Result<()> {
        use sp1_sdk::{HashableKey, Prover, ProverClient};

        info!("computing verification key hashes");
        let prover = ProverClient::builder().cpu().build();
        let (_, transition_vk) = prover.setup(crate::elf::BRIDGE_TRANSITION_ELF);
        let (_, attestor_vk) = prover.setup(crate::elf::LEAF_ATTESTOR_ELF);

        crate::vks::check_vk_hashes(&transition_vk.bytes32(), &attestor_vk.bytes32())?;
        info!("verification key hashes agree with the baked values");
        Ok(())
    }

    #[cfg(not(feature = "sp1"))]
    pub fn compile_programs(&self) -> Result<()> {
        tracing::warn!("sp1 feature disabled; skipping the verification key integrity check");
        Ok(())
    }

    /// Creates the bridge account on the ledger.
    pub async fn deploy_contract(&self) -> Result<SubmitReceipt> {
        info!("creating deploy transaction");
        let receipt = self
            .ledger
            .deploy(self.admin_address(), Default::default())
            .await?;
        info!(tx_hash = %receipt.tx_hash, "bridge account deployed successfully");
        Ok(receipt)
    }

    /// Decodes a raw proof bundle and proves the transition program over it.
    pub async fn create_proof(&self, bundle: RawProofBundle) -> Result<TransitionArtifact> {
        info!("creating proof");
        debug!(sp1_version = %bundle.sp1_version, "decoding converted proof");

        let input = bundle.into_transition_input()?;
        debug!(new_head = input.outputs.new_head, "decoded proof outputs");

        info!("computing proof");
        self.backend.prove(input).await
    }

    /// Submits a proven transition to the bridge account.
    pub async fn submit(&self, artifact: &TransitionArtifact) -> Result<SubmitReceipt> {
        info!("submitting a proof");

        let state = self.ledger.fetch_state().await?;
        debug!(current_head = state.latest_head, "fetched bridge account state");

        let receipt = self.ledger.submit_update(artifact).await?;
        info!(tx_id = %receipt.tx_id, tx_hash = %receipt.tx_hash, "transaction sent");
        Ok(receipt)
    }
}
