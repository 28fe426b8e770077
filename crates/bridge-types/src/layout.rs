//! Wire-layout descriptors for the proof-output encodings.
//!
//! The external proving pipeline has shipped more than one public-value
//! layout over time. Each deployment pins exactly one variant; the decoder
//! dispatches on the descriptor instead of guessing from the blob length.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::outputs::{ConsensusMptOutputs, ProofOutputs};

/// Byte offsets of the ABI-tuple encoding with a trailing dynamic
/// storage-slot array.
pub mod abi_tuple {
    /// Value of the leading tuple offset word.
    pub const HEAD_OFFSET: usize = 32;
    pub const EXECUTION_STATE_ROOT: usize = 32;
    pub const NEW_HEADER: usize = 64;
    pub const NEXT_SYNC_COMMITTEE_HASH: usize = 96;
    pub const NEW_HEAD: usize = 128;
    pub const PREV_HEADER: usize = 160;
    pub const PREV_HEAD: usize = 192;
    pub const SYNC_COMMITTEE_HASH: usize = 224;
    pub const START_SYNC_COMMITTEE_HASH: usize = 256;
    pub const PREV_STORE_HASH: usize = 288;
    pub const STORE_HASH: usize = 320;
    /// Offset of the array offset word, which must also be its value per the
    /// ABI dynamic-tail convention.
    pub const ARRAY_OFFSET: usize = 352;
    pub const ARRAY_LENGTH: usize = 384;
    pub const ARRAY_ELEMENTS: usize = 416;
    pub const ELEMENT_SIZE: usize = 128;

    /// Layout of one storage-slot tuple. Addresses occupy the last 20 bytes
    /// of a left-zero-padded 32-byte word.
    pub const ELEMENT_KEY: usize = 0;
    pub const ELEMENT_SLOT_KEY_ADDRESS: usize = 44;
    pub const ELEMENT_VALUE: usize = 64;
    pub const ELEMENT_CONTRACT_ADDRESS: usize = 108;
}

/// Byte offsets of the fixed-length consensus-MPT encoding.
pub mod consensus_mpt {
    pub const INPUT_SLOT: usize = 0;
    pub const INPUT_STORE_HASH: usize = 8;
    pub const OUTPUT_SLOT: usize = 40;
    pub const OUTPUT_STORE_HASH: usize = 48;
    pub const EXECUTION_STATE_ROOT: usize = 80;
    pub const VERIFIED_CONTRACT_STORAGE_SLOTS_ROOT: usize = 112;
    pub const NEXT_SYNC_COMMITTEE_HASH: usize = 144;
    pub const TOTAL_LENGTH: usize = 176;
}

/// Identifies which proof-output encoding a deployment consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofOutputsLayout {
    /// ABI tuple with ten fixed head words and a trailing dynamic array of
    /// verified contract storage slots.
    AbiTupleV2,
    /// Fixed 176-byte blob carrying the slot pair, store-hash pair, and the
    /// three derived roots.
    ConsensusMptV1,
}

/// A proof-output record decoded under a specific layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedProofOutputs {
    AbiTupleV2(ProofOutputs),
    ConsensusMptV1(ConsensusMptOutputs),
}

impl ProofOutputsLayout {
    /// Decodes a raw public-value blob under this layout.
    pub fn decode(&self, bytes: &[u8]) -> Result<DecodedProofOutputs, DecodeError> {
        match self {
            Self::AbiTupleV2 => ProofOutputs::abi_decode(bytes).map(DecodedProofOutputs::AbiTupleV2),
            Self::ConsensusMptV1 => {
                ConsensusMptOutputs::decode(bytes).map(DecodedProofOutputs::ConsensusMptV1)
            }
        }
    }
}
