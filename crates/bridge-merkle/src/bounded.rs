//! Fixed-capacity sibling paths for the in-circuit inclusion check.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use crate::hash_pair;

/// Capacity of a circuit path. Trees produced here are far shallower, so the
/// tail slots carry dummy entries the fold passes through unchanged.
pub const MAX_PATH_LEN: usize = 16;

/// A sibling path padded to [`MAX_PATH_LEN`] slots, each slot flagged dummy
/// once the real tree depth is exhausted.
///
/// Consumed exactly once by a verification; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedPath {
    siblings: [B256; MAX_PATH_LEN],
    len: usize,
}

impl BoundedPath {
    /// Pads a real sibling path out to the fixed capacity.
    pub fn from_siblings(siblings: &[B256]) -> Self {
        assert!(
            siblings.len() <= MAX_PATH_LEN,
            "path of {} siblings exceeds the {MAX_PATH_LEN}-slot capacity",
            siblings.len()
        );
        let mut padded = [B256::ZERO; MAX_PATH_LEN];
        padded[..siblings.len()].copy_from_slice(siblings);
        Self {
            siblings: padded,
            len: siblings.len(),
        }
    }

    /// Number of real (non-dummy) siblings.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn is_dummy(&self, slot: usize) -> bool {
        slot >= self.len
    }

    /// Replays the path from `leaf` to the root, skipping dummy slots.
    ///
    /// The fold mirrors the circuit shape: every slot computes its candidate
    /// parent and a select keeps the current digest whenever the slot is a
    /// dummy, so the work done is independent of the real depth.
    pub fn verify(&self, leaf: B256, index: u64, root: B256) -> bool {
        let mut current = leaf;
        for (slot, sibling) in self.siblings.iter().enumerate() {
            let next = if (index >> slot) & 1 == 1 {
                hash_pair(sibling, &current)
            } else {
                hash_pair(&current, sibling)
            };
            current = if self.is_dummy(slot) { current } else { next };
        }
        current == root
    }
}
