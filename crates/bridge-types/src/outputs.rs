//! Proof-output records and their canonical byte encodings.

use std::fmt::{Display, Formatter, Result as FmtResult};

use alloy_primitives::{Address, B256};
use hex::encode;
use serde::{Deserialize, Serialize};

use crate::codec::{pad_u64_to_32_bytes, u64_from_be_word};
use crate::error::DecodeError;
use crate::layout::{abi_tuple, consensus_mpt};

/// Upper bound on the verified storage slots a single proof may attest to.
pub const MAX_STORAGE_SLOTS: usize = 50;

/// One attested Ethereum contract storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedContractStorageSlot {
    pub key: B256,
    pub slot_key_address: Address,
    pub value: B256,
    pub contract_address: Address,
}

impl VerifiedContractStorageSlot {
    /// Decodes one 128-byte ABI tuple element.
    pub fn from_abi_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != abi_tuple::ELEMENT_SIZE {
            return Err(DecodeError::InvalidLength {
                expected: abi_tuple::ELEMENT_SIZE,
                got: bytes.len(),
            });
        }

        Ok(Self {
            key: B256::from_slice(&bytes[abi_tuple::ELEMENT_KEY..32]),
            slot_key_address: Address::from_slice(&bytes[abi_tuple::ELEMENT_SLOT_KEY_ADDRESS..64]),
            value: B256::from_slice(&bytes[abi_tuple::ELEMENT_VALUE..96]),
            contract_address: Address::from_slice(&bytes[abi_tuple::ELEMENT_CONTRACT_ADDRESS..128]),
        })
    }

    /// Encodes the slot as its 128-byte ABI tuple element.
    pub fn to_abi_bytes(&self) -> [u8; 128] {
        let mut out = [0u8; 128];
        out[..32].copy_from_slice(self.key.as_slice());
        out[abi_tuple::ELEMENT_SLOT_KEY_ADDRESS..64].copy_from_slice(self.slot_key_address.as_slice());
        out[abi_tuple::ELEMENT_VALUE..96].copy_from_slice(self.value.as_slice());
        out[abi_tuple::ELEMENT_CONTRACT_ADDRESS..128].copy_from_slice(self.contract_address.as_slice());
        out
    }
}

/// The structured public record a state-transition proof attests to.
///
/// Decoded from the external pipeline's ABI-tuple encoding and re-encoded
/// byte-exactly inside the transition circuit. Immutable once decoded; head
/// ordering is enforced by the consumer, not by this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOutputs {
    pub execution_state_root: B256,
    pub new_header: B256,
    pub next_sync_committee_hash: B256,
    pub new_head: u64,
    pub prev_header: B256,
    pub prev_head: u64,
    pub sync_committee_hash: B256,
    pub start_sync_committee_hash: B256,
    pub prev_store_hash: B256,
    pub store_hash: B256,
    pub verified_contract_storage_slots: Vec<VerifiedContractStorageSlot>,
}

fn ensure_len(bytes: &[u8], needed: usize) -> Result<(), DecodeError> {
    if bytes.len() < needed {
        return Err(DecodeError::TruncatedInput {
            needed,
            got: bytes.len(),
        });
    }
    Ok(())
}

fn word(bytes: &[u8], offset: usize) -> B256 {
    B256::from_slice(&bytes[offset..offset + 32])
}

impl ProofOutputs {
    /// Decodes the ABI-tuple encoding with the trailing dynamic storage-slot
    /// array, validating both self-referential offset words.
    pub fn abi_decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        ensure_len(bytes, abi_tuple::EXECUTION_STATE_ROOT)?;
        if bytes[..32] != pad_u64_to_32_bytes(abi_tuple::HEAD_OFFSET as u64) {
            return Err(DecodeError::MalformedEncoding("tuple head"));
        }

        ensure_len(bytes, abi_tuple::ARRAY_OFFSET + 32)?;
        let new_head = u64_from_be_word(
            &bytes[abi_tuple::NEW_HEAD..abi_tuple::NEW_HEAD + 32],
            "new_head",
        )?;
        let prev_head = u64_from_be_word(
            &bytes[abi_tuple::PREV_HEAD..abi_tuple::PREV_HEAD + 32],
            "prev_head",
        )?;

        if bytes[abi_tuple::ARRAY_OFFSET..abi_tuple::ARRAY_OFFSET + 32]
            != pad_u64_to_32_bytes(abi_tuple::ARRAY_OFFSET as u64)
        {
            return Err(DecodeError::MalformedEncoding("storage slot array"));
        }

        ensure_len(bytes, abi_tuple::ARRAY_ELEMENTS)?;
        let count = u64_from_be_word(
            &bytes[abi_tuple::ARRAY_LENGTH..abi_tuple::ARRAY_LENGTH + 32],
            "storage slot count",
        )? as usize;
        if count > MAX_STORAGE_SLOTS {
            return Err(DecodeError::TooManySlots(count));
        }

        ensure_len(bytes, abi_tuple::ARRAY_ELEMENTS + count * abi_tuple::ELEMENT_SIZE)?;
        let mut verified_contract_storage_slots = Vec::with_capacity(count);
        for i in 0..count {
            let start = abi_tuple::ARRAY_ELEMENTS + i * abi_tuple::ELEMENT_SIZE;
            verified_contract_storage_slots.push(VerifiedContractStorageSlot::from_abi_bytes(
                &bytes[start..start + abi_tuple::ELEMENT_SIZE],
            )?);
        }

        Ok(Self {
            execution_state_root: word(bytes, abi_tuple::EXECUTION_STATE_ROOT),
            new_header: word(bytes, abi_tuple::NEW_HEADER),
            next_sync_committee_hash: word(bytes, abi_tuple::NEXT_SYNC_COMMITTEE_HASH),
            new_head,
            prev_header: word(bytes, abi_tuple::PREV_HEADER),
            prev_head,
            sync_committee_hash: word(bytes, abi_tuple::SYNC_COMMITTEE_HASH),
            start_sync_committee_hash: word(bytes, abi_tuple::START_SYNC_COMMITTEE_HASH),
            prev_store_hash: word(bytes, abi_tuple::PREV_STORE_HASH),
            store_hash: word(bytes, abi_tuple::STORE_HASH),
            verified_contract_storage_slots,
        })
    }

    /// Produces the canonical ABI-tuple encoding, byte-exact including the
    /// two offset words. The transition circuit re-derives this encoding to
    /// bind the claimed record to the inner proof's commitment.
    pub fn abi_encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            abi_tuple::ARRAY_ELEMENTS
                + self.verified_contract_storage_slots.len() * abi_tuple::ELEMENT_SIZE,
        );
        out.extend_from_slice(&pad_u64_to_32_bytes(abi_tuple::HEAD_OFFSET as u64));
        out.extend_from_slice(self.execution_state_root.as_slice());
        out.extend_from_slice(self.new_header.as_slice());
        out.extend_from_slice(self.next_sync_committee_hash.as_slice());
        out.extend_from_slice(&pad_u64_to_32_bytes(self.new_head));
        out.extend_from_slice(self.prev_header.as_slice());
        out.extend_from_slice(&pad_u64_to_32_bytes(self.prev_head));
        out.extend_from_slice(self.sync_committee_hash.as_slice());
        out.extend_from_slice(self.start_sync_committee_hash.as_slice());
        out.extend_from_slice(self.prev_store_hash.as_slice());
        out.extend_from_slice(self.store_hash.as_slice());
        out.extend_from_slice(&pad_u64_to_32_bytes(abi_tuple::ARRAY_OFFSET as u64));
        out.extend_from_slice(&pad_u64_to_32_bytes(
            self.verified_contract_storage_slots.len() as u64,
        ));
        for slot in &self.verified_contract_storage_slots {
            out.extend_from_slice(&slot.to_abi_bytes());
        }
        out
    }
}

/// Display trait implementation to format hashes as hex encoded output.
impl Display for ProofOutputs {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "ProofOutputs {{")?;
        writeln!(f, "  execution_state_root: {}", encode(self.execution_state_root))?;
        writeln!(f, "  new_header: {}", encode(self.new_header))?;
        writeln!(
            f,
            "  next_sync_committee_hash: {}",
            encode(self.next_sync_committee_hash)
        )?;
        writeln!(f, "  new_head: {}", self.new_head)?;
        writeln!(f, "  prev_header: {}", encode(self.prev_header))?;
        writeln!(f, "  prev_head: {}", self.prev_head)?;
        writeln!(f, "  sync_committee_hash: {}", encode(self.sync_committee_hash))?;
        writeln!(
            f,
            "  start_sync_committee_hash: {}",
            encode(self.start_sync_committee_hash)
        )?;
        writeln!(f, "  prev_store_hash: {}", encode(self.prev_store_hash))?;
        writeln!(f, "  store_hash: {}", encode(self.store_hash))?;
        writeln!(
            f,
            "  verified_contract_storage_slots: {}",
            self.verified_contract_storage_slots.len()
        )?;
        writeln!(f, "}}")
    }
}

/// The fixed-length proof-output record of the consensus-MPT pipeline, which
/// carries pre-derived roots instead of the raw storage-slot array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusMptOutputs {
    pub input_slot: u64,
    pub input_store_hash: B256,
    pub output_slot: u64,
    pub output_store_hash: B256,
    pub execution_state_root: B256,
    pub verified_contract_storage_slots_root: B256,
    pub next_sync_committee_hash: B256,
}

impl ConsensusMptOutputs {
    /// Decodes the packed 176-byte blob at its fixed offsets.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != consensus_mpt::TOTAL_LENGTH {
            return Err(DecodeError::InvalidLength {
                expected: consensus_mpt::TOTAL_LENGTH,
                got: bytes.len(),
            });
        }

        let input_slot = u64_from_be_word(
            &bytes[consensus_mpt::INPUT_SLOT..consensus_mpt::INPUT_STORE_HASH],
            "input_slot",
        )?;
        let output_slot = u64_from_be_word(
            &bytes[consensus_mpt::OUTPUT_SLOT..consensus_mpt::OUTPUT_STORE_HASH],
            "output_slot",
        )?;

        Ok(Self {
            input_slot,
            input_store_hash: word(bytes, consensus_mpt::INPUT_STORE_HASH),
            output_slot,
            output_store_hash: word(bytes, consensus_mpt::OUTPUT_STORE_HASH),
            execution_state_root: word(bytes, consensus_mpt::EXECUTION_STATE_ROOT),
            verified_contract_storage_slots_root: word(
                bytes,
                consensus_mpt::VERIFIED_CONTRACT_STORAGE_SLOTS_ROOT,
            ),
            next_sync_committee_hash: word(bytes, consensus_mpt::NEXT_SYNC_COMMITTEE_HASH),
        })
    }

    /// Encodes the record back into its packed 176-byte layout.
    pub fn encode(&self) -> [u8; 176] {
        let mut out = [0u8; 176];
        out[..8].copy_from_slice(&self.input_slot.to_be_bytes());
        out[consensus_mpt::INPUT_STORE_HASH..consensus_mpt::OUTPUT_SLOT]
            .copy_from_slice(self.input_store_hash.as_slice());
        out[consensus_mpt::OUTPUT_SLOT..consensus_mpt::OUTPUT_STORE_HASH]
            .copy_from_slice(&self.output_slot.to_be_bytes());
        out[consensus_mpt::OUTPUT_STORE_HASH..consensus_mpt::EXECUTION_STATE_ROOT]
            .copy_from_slice(self.output_store_hash.as_slice());
        out[consensus_mpt::EXECUTION_STATE_ROOT..consensus_mpt::VERIFIED_CONTRACT_STORAGE_SLOTS_ROOT]
            .copy_from_slice(self.execution_state_root.as_slice());
        out[consensus_mpt::VERIFIED_CONTRACT_STORAGE_SLOTS_ROOT..consensus_mpt::NEXT_SYNC_COMMITTEE_HASH]
            .copy_from_slice(self.verified_contract_storage_slots_root.as_slice());
        out[consensus_mpt::NEXT_SYNC_COMMITTEE_HASH..]
            .copy_from_slice(self.next_sync_committee_hash.as_slice());
        out
    }
}
