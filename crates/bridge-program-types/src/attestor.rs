//! Input type for the merkle leaf-attestor program.

use alloy_primitives::B256;
use bridge_merkle::{BoundedPath, hash_leaf};
use serde::{Deserialize, Serialize};

/// Public input of the leaf-attestor program: prove that `value` sits at
/// `index` inside the tree committed to by `root_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestorInput {
    pub root_hash: B256,
    pub path: BoundedPath,
    pub index: u64,
    pub value: B256,
}

impl AttestorInput {
    /// Hashes the value into its leaf digest and replays the bounded path.
    /// Identical to the host-side path check; dummy slots beyond the tree's
    /// real depth are pass-through.
    pub fn verify(&self) -> bool {
        self.path.verify(hash_leaf(&self.value), self.index, self.root_hash)
    }
}
