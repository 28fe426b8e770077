//! Shared record types and byte codecs for the bridge head.
//!
//! Everything in this crate is pure data plumbing: the proof-output records
//! attested by the transition circuit, the canonical byte layouts they are
//! exchanged in, and the packed-scalar representation of 32-byte hashes.

pub mod codec;
pub mod error;
pub mod layout;
pub mod outputs;

pub use codec::{PackedHash, pad_u64_to_32_bytes, u64_from_be_word};
pub use error::DecodeError;
pub use layout::{DecodedProofOutputs, ProofOutputsLayout};
pub use outputs::{
    ConsensusMptOutputs, MAX_STORAGE_SLOTS, ProofOutputs, VerifiedContractStorageSlot,
};
