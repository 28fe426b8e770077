//! Leaf hashing for contract deposit attestations.

use alloy_primitives::{Address, B256};
use bridge_types::VerifiedContractStorageSlot;
use sha3::{Digest, Keccak256};

use crate::tree::{depth_and_size, fold_root, merkle_zeros};

/// Hashes a raw 32-byte value into a leaf digest.
pub fn hash_leaf(value: &B256) -> B256 {
    B256::from_slice(&Keccak256::digest(value))
}

/// Hashes an attested storage slot into a leaf digest.
///
/// The slot is laid out across two 32-byte lanes before hashing: the first
/// carries the 20 address bytes plus the value's leading byte, the second the
/// value's remaining 31 bytes. Splitting the value this way keeps each lane
/// inside the proving field's capacity.
pub fn hash_slot_leaf(address: &Address, value: &B256) -> B256 {
    let mut first_lane = [0u8; 32];
    first_lane[..20].copy_from_slice(address.as_slice());
    first_lane[20] = value[0];

    let mut second_lane = [0u8; 32];
    second_lane[..31].copy_from_slice(&value[1..]);

    let mut hasher = Keccak256::new();
    hasher.update(first_lane);
    hasher.update(second_lane);
    B256::from_slice(&hasher.finalize())
}

/// Folds the verified storage slots of a proof into their deposits root.
pub fn storage_slots_root(slots: &[VerifiedContractStorageSlot]) -> B256 {
    let leaves: Vec<B256> = slots
        .iter()
        .map(|slot| hash_slot_leaf(&slot.slot_key_address, &slot.value))
        .collect();
    let (depth, padded_size) = depth_and_size(leaves.len());
    fold_root(&leaves, padded_size, depth, &merkle_zeros(depth))
}
