//! Raw proof bundles emitted by the external proving pipeline.

use alloy_primitives::B256;
use bridge_program_types::{ConversionProof, TransitionInput};
use bridge_types::{DecodeError, ProofOutputs};
use serde::{Deserialize, Serialize};

mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        hex::decode(s.trim_start_matches("0x")).map_err(serde::de::Error::custom)
    }
}

/// The JSON artifact handed over by the external pipeline: the ABI-encoded
/// public values of the transition, the converted proof's commitments, and
/// the opaque proof itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProofBundle {
    #[serde(with = "hex_bytes")]
    pub public_values: Vec<u8>,
    pub committed_digest: B256,
    pub circuit_digest: B256,
    #[serde(with = "hex_bytes")]
    pub proof: Vec<u8>,
    pub sp1_version: String,
}

impl RawProofBundle {
    /// Decodes the bundle into a transition input, validating the canonical
    /// byte layout of the public values.
    pub fn into_transition_input(self) -> Result<TransitionInput, DecodeError> {
        let outputs = ProofOutputs::abi_decode(&self.public_values)?;
        Ok(TransitionInput {
            outputs,
            proof: ConversionProof {
                committed_digest: self.committed_digest,
                circuit_digest: self.circuit_digest,
                proof_bytes: self.proof,
            },
        })
    }
}
