//! Proving backend abstraction.
//!
//! The orchestrator talks to the transition circuit through this trait so
//! the pipeline runs identically against the real zkVM prover and the mock
//! backend used on the light network.

use anyhow::Result;
use async_trait::async_trait;
use bridge_program_types::{TransitionError, TransitionInput, TransitionOutput};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A proven state transition, ready for submission. Only
/// [`ProofBackend::prove`] produces these, which is what keeps `submit`
/// unreachable before proving succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionArtifact {
    pub input: TransitionInput,
    pub output: TransitionOutput,
    pub proof_bytes: Vec<u8>,
}

/// ProofBackend is implemented once per proving system.
#[async_trait]
pub trait ProofBackend: Send + Sync {
    /// Runs the transition program over the input and returns the proven
    /// artifact.
    async fn prove(&self, input: TransitionInput) -> Result<TransitionArtifact>;

    /// Verifies an artifact against the transition program's verification
    /// key.
    fn verify(&self, artifact: &TransitionArtifact) -> Result<(), TransitionError>;
}

/// MockBackend executes the transition checks without generating proofs.
///
/// It provides no cryptographic guarantees and exists for the light network
/// and tests only; `verify` re-runs the commitment checks and confirms the
/// artifact's proof bytes are the digest the mock prover stamped.
pub struct MockBackend;

#[async_trait]
impl ProofBackend for MockBackend {
    async fn prove(&self, input: TransitionInput) -> Result<TransitionArtifact> {
        warn!("mock proving backend enabled - transition proofs will NOT be generated");

        let output = input.verify_commitments()?;
        let proof_bytes = input.proof.committed_digest.to_vec();
        Ok(TransitionArtifact {
            input,
            output,
            proof_bytes,
        })
    }

    fn verify(&self, artifact: &TransitionArtifact) -> Result<(), TransitionError> {
        let output = artifact.input.verify_commitments()?;
        if output != artifact.output
            || artifact.proof_bytes != artifact.input.proof.committed_digest.as_slice()
        {
            return Err(TransitionError::InvalidProof);
        }
        Ok(())
    }
}

/// Sp1Backend proves and verifies through the SP1 prover client.
#[cfg(feature = "sp1")]
pub struct Sp1Backend {
    client: sp1_sdk::EnvProver,
    pk: sp1_sdk::SP1ProvingKey,
    vk: sp1_sdk::SP1VerifyingKey,
}

#[cfg(feature = "sp1")]
impl Sp1Backend {
    /// Creates a backend from the environment.
    ///
    /// Set `SP1_PROVER=mock` to run the program in the executor without
    /// producing proofs; useful for development, no security guarantees.
    pub fn from_env() -> Result<Self> {
        let client = sp1_sdk::ProverClient::from_env();

        if let Ok(prover_mode) = std::env::var("SP1_PROVER") {
            if prover_mode == "mock" {
                warn!("SP1_PROVER=mock is enabled - proofs will NOT be generated!");
            }
        }

        let (pk, vk) = client.setup(crate::elf::BRIDGE_TRANSITION_ELF);
        Ok(Self { client, pk, vk })
    }
}

#[cfg(feature = "sp1")]
#[async_trait]
impl ProofBackend for Sp1Backend {
    async fn prove(&self, input: TransitionInput) -> Result<TransitionArtifact> {
        use sp1_sdk::SP1Stdin;

        // Run the commitment checks up front so a doomed input fails before
        // any proving cycles are spent.
        let output = input.verify_commitments()?;

        let mut stdin = SP1Stdin::new();
        stdin.write(&input);

        let proof = self.client.prove(&self.pk, &stdin).groth16().run()?;
        let proof_bytes = bincode::serialize(&proof)?;

        Ok(TransitionArtifact {
            input,
            output,
            proof_bytes,
        })
    }

    fn verify(&self, artifact: &TransitionArtifact) -> Result<(), TransitionError> {
        let proof: sp1_sdk::SP1ProofWithPublicValues =
            bincode::deserialize(&artifact.proof_bytes).map_err(|_| TransitionError::InvalidProof)?;
        self.client
            .verify(&proof, &self.vk)
            .map_err(|_| TransitionError::InvalidProof)
    }
}
