//! The state-transition verification step.
//!
//! A transition proof wraps an inner consensus-and-storage attestation: the
//! claimed proof outputs are re-encoded into their canonical byte layout and
//! bound to the inner proof's committed digest before anything else is
//! trusted. The cryptographic check of the inner proof itself belongs to the
//! caller: the zkVM program uses its recursive-verification intrinsic and
//! the host delegates to its proof backend. The commitment algebra here
//! stays a pure function.

use alloy_primitives::B256;
use bridge_merkle::storage_slots_root;
use bridge_types::{PackedHash, ProofOutputs};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::identity::{INNER_CIRCUIT_IDENTITY, OUTER_VERIFIER_IDENTITY};

/// Errors raised while verifying a state transition. Fatal to the proof
/// computation; no partial output is ever returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("re-encoded public input digest does not match the proof's committed output digest")]
    DigestMismatch,

    #[error("proof was produced by an unexpected circuit")]
    WrongCircuit,

    #[error("cryptographic proof verification failed")]
    InvalidProof,

    #[error("next sync committee hash is all zero")]
    ZeroCommittee,
}

/// Public commitments of the converted inner proof, alongside its opaque
/// proof bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionProof {
    /// Digest the inner proof committed to over its public output.
    pub committed_digest: B256,
    /// Verification-key digest of the circuit that produced the inner proof.
    pub circuit_digest: B256,
    /// Serialized proof, verified by the proving backend.
    pub proof_bytes: Vec<u8>,
}

/// Public input of the transition program: the claimed proof outputs plus the
/// inner proof vouching for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionInput {
    pub outputs: ProofOutputs,
    pub proof: ConversionProof,
}

/// Public output of the transition program. The packed store hash is the only
/// state this step commits to; head and root values are surfaced through the
/// echoed public input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutput {
    pub store_hash: PackedHash,
    pub deposits_root: PackedHash,
}

/// Computes the digest the inner proof must have committed to for the given
/// outputs: the outer verifier identity hashed together with the digest of
/// the canonical encoding.
pub fn expected_commitment(outputs: &ProofOutputs) -> B256 {
    let encoded_digest = Sha256::digest(outputs.abi_encode());

    let mut hasher = Sha256::new();
    hasher.update(OUTER_VERIFIER_IDENTITY);
    hasher.update(encoded_digest);
    B256::from_slice(&hasher.finalize())
}

impl TransitionInput {
    /// Checks every commitment the transition step enforces, in order:
    /// digest binding, circuit identity, and the non-degeneracy guard on the
    /// next sync committee. On success returns the packed public output.
    ///
    /// An all-zero committee hash would pass the structural checks but brick
    /// every future verification, so it is rejected outright.
    pub fn verify_commitments(&self) -> Result<TransitionOutput, TransitionError> {
        if expected_commitment(&self.outputs) != self.proof.committed_digest {
            return Err(TransitionError::DigestMismatch);
        }

        if self.proof.circuit_digest != INNER_CIRCUIT_IDENTITY {
            return Err(TransitionError::WrongCircuit);
        }

        let committee_sum: u32 = self
            .outputs
            .next_sync_committee_hash
            .iter()
            .map(|byte| u32::from(*byte))
            .sum();
        if committee_sum == 0 {
            return Err(TransitionError::ZeroCommittee);
        }

        Ok(TransitionOutput {
            store_hash: PackedHash::from_bytes32(&self.outputs.store_hash),
            deposits_root: PackedHash::from_bytes32(&storage_slots_root(
                &self.outputs.verified_contract_storage_slots,
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_types::VerifiedContractStorageSlot;
    use alloy_primitives::Address;

    fn sample_outputs() -> ProofOutputs {
        ProofOutputs {
            execution_state_root: B256::repeat_byte(0x11),
            new_header: B256::repeat_byte(0x22),
            next_sync_committee_hash: B256::repeat_byte(0x33),
            new_head: 11615712,
            prev_header: B256::repeat_byte(0x44),
            prev_head: 11615680,
            sync_committee_hash: B256::repeat_byte(0x55),
            start_sync_committee_hash: B256::repeat_byte(0x66),
            prev_store_hash: B256::ZERO,
            store_hash: B256::repeat_byte(0x88),
            verified_contract_storage_slots: vec![VerifiedContractStorageSlot {
                key: B256::repeat_byte(0x01),
                slot_key_address: Address::repeat_byte(0x02),
                value: B256::repeat_byte(0x03),
                contract_address: Address::repeat_byte(0x04),
            }],
        }
    }

    fn valid_input() -> TransitionInput {
        let outputs = sample_outputs();
        let committed_digest = expected_commitment(&outputs);
        TransitionInput {
            outputs,
            proof: ConversionProof {
                committed_digest,
                circuit_digest: INNER_CIRCUIT_IDENTITY,
                proof_bytes: vec![0xaa; 64],
            },
        }
    }

    #[test]
    fn test_verify_commitments_happy_path() {
        let input = valid_input();
        let output = input.verify_commitments().unwrap();
        assert_eq!(
            output.store_hash,
            PackedHash::from_bytes32(&input.outputs.store_hash)
        );
        assert_eq!(
            output.deposits_root,
            PackedHash::from_bytes32(&storage_slots_root(
                &input.outputs.verified_contract_storage_slots
            ))
        );
    }

    #[test]
    fn test_digest_mismatch_is_rejected() {
        let mut input = valid_input();
        input.outputs.new_head += 1;
        assert_eq!(input.verify_commitments(), Err(TransitionError::DigestMismatch));
    }

    #[test]
    fn test_wrong_circuit_is_rejected() {
        let mut input = valid_input();
        input.proof.circuit_digest = B256::repeat_byte(0xde);
        assert_eq!(input.verify_commitments(), Err(TransitionError::WrongCircuit));
    }

    #[test]
    fn test_zero_committee_is_rejected() {
        let mut input = valid_input();
        input.outputs.next_sync_committee_hash = B256::ZERO;
        input.proof.committed_digest = expected_commitment(&input.outputs);
        assert_eq!(input.verify_commitments(), Err(TransitionError::ZeroCommittee));
    }

    #[test]
    fn test_commitment_is_sensitive_to_every_field() {
        let base = expected_commitment(&sample_outputs());

        let mut outputs = sample_outputs();
        outputs.store_hash = B256::repeat_byte(0x89);
        assert_ne!(expected_commitment(&outputs), base);

        let mut outputs = sample_outputs();
        outputs.verified_contract_storage_slots.clear();
        assert_ne!(expected_commitment(&outputs), base);
    }
}
