//! Binary merkle trees over 32-byte keccak digests.
//!
//! Trees are built over a padded power-of-two leaf layer and rebuilt from
//! scratch on any leaf-set change; nothing incremental crosses this crate's
//! boundary except the final root digest.

pub mod bounded;
pub mod leaf;
pub mod tree;

use alloy_primitives::B256;
use sha3::{Digest, Keccak256};

pub use bounded::{BoundedPath, MAX_PATH_LEN};
pub use leaf::{hash_leaf, hash_slot_leaf, storage_slots_root};
pub use tree::{
    build_tree, depth_and_size, fold_root, merkle_path, merkle_zeros, path_from_tree, verify_path,
};

/// Hashes two nodes into their parent with Keccak256.
pub fn hash_pair(left: &B256, right: &B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(left);
    hasher.update(right);
    B256::from_slice(&hasher.finalize())
}
