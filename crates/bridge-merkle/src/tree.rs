//! Tree construction, root folding, and sibling-path extraction.

use alloy_primitives::B256;

use crate::hash_pair;

/// Computes the tree depth and padded leaf count for `n` leaves.
///
/// A tree of zero or one leaves has depth 0; an empty set still occupies a
/// single zero-filled dummy leaf so every tree has a root.
pub fn depth_and_size(n: usize) -> (usize, usize) {
    if n <= 1 {
        return (0, 1);
    }
    let depth = ((n - 1).ilog2() + 1) as usize;
    (depth, 1 << depth)
}

/// Precomputes the `depth + 1` padding sentinels.
///
/// The leaf layer pads with the raw zero digest; every level above uses the
/// hash of two sentinels from the level below.
pub fn merkle_zeros(depth: usize) -> Vec<B256> {
    let mut zeros = Vec::with_capacity(depth + 1);
    zeros.push(B256::ZERO);
    for d in 1..=depth {
        let below = zeros[d - 1];
        zeros.push(hash_pair(&below, &below));
    }
    zeros
}

fn padded_leaves(leaves: &[B256], padded_size: usize, zeros: &[B256]) -> Vec<B256> {
    let mut level = leaves.to_vec();
    level.resize(padded_size, zeros[0]);
    level
}

/// Builds every level of the tree. The root sits at `tree[0][0]` and the
/// padded leaf layer at `tree[depth]`.
pub fn build_tree(leaves: &[B256], padded_size: usize, depth: usize, zeros: &[B256]) -> Vec<Vec<B256>> {
    let mut levels = vec![padded_leaves(leaves, padded_size, zeros)];
    for _ in 0..depth {
        let below = levels.last().expect("tree always has a leaf layer");
        let level = below.chunks(2).map(|pair| hash_pair(&pair[0], &pair[1])).collect();
        levels.push(level);
    }
    levels.reverse();
    levels
}

/// Computes the root without materializing the tree: `depth` passes over a
/// shrinking working array. Produces the same root as [`build_tree`] for
/// every leaf count.
pub fn fold_root(leaves: &[B256], padded_size: usize, depth: usize, zeros: &[B256]) -> B256 {
    let mut level = padded_leaves(leaves, padded_size, zeros);
    for _ in 0..depth {
        for i in 0..level.len() / 2 {
            level[i] = hash_pair(&level[2 * i], &level[2 * i + 1]);
        }
        level.truncate(level.len() / 2);
    }
    level[0]
}

/// Extracts the sibling path for `index`, leaf-to-root, exactly `depth`
/// entries. Siblings above the leaf layer come from the already-hashed
/// levels.
///
/// `index` must be within the leaf set; callers validate before calling.
pub fn merkle_path(
    leaves: &[B256],
    padded_size: usize,
    depth: usize,
    index: usize,
    zeros: &[B256],
) -> Vec<B256> {
    let mut level = padded_leaves(leaves, padded_size, zeros);
    let mut path = Vec::with_capacity(depth);
    let mut position = index;

    for _ in 0..depth {
        path.push(level[position ^ 1]);
        for i in 0..level.len() / 2 {
            level[i] = hash_pair(&level[2 * i], &level[2 * i + 1]);
        }
        level.truncate(level.len() / 2);
        position /= 2;
    }
    path
}

/// Reads the same sibling path out of a materialized [`build_tree`] result.
pub fn path_from_tree(tree: &[Vec<B256>], index: usize) -> Vec<B256> {
    let depth = tree.len() - 1;
    let mut path = Vec::with_capacity(depth);
    let mut position = index;

    for level in (1..=depth).rev() {
        path.push(tree[level][position ^ 1]);
        position /= 2;
    }
    path
}

/// Replays a sibling path from a leaf digest up to the root.
///
/// The bit decomposition of `index` picks the ordering at each step: a zero
/// bit keeps the current node on the left. This is the same fold the
/// in-circuit path check performs.
pub fn verify_path(leaf: B256, index: usize, path: &[B256], root: B256) -> bool {
    let mut current = leaf;
    for (i, sibling) in path.iter().enumerate() {
        current = if (index >> i) & 1 == 1 {
            hash_pair(sibling, &current)
        } else {
            hash_pair(&current, sibling)
        };
    }
    current == root
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;

    fn dummy_leaves(n: usize) -> Vec<B256> {
        (0..n).map(|i| B256::repeat_byte(i as u8)).collect()
    }

    #[test]
    fn test_depth_and_size() {
        assert_eq!(depth_and_size(0), (0, 1));
        assert_eq!(depth_and_size(1), (0, 1));
        assert_eq!(depth_and_size(2), (1, 2));
        assert_eq!(depth_and_size(3), (2, 4));
        assert_eq!(depth_and_size(4), (2, 4));
        assert_eq!(depth_and_size(50), (6, 64));
    }

    #[test]
    fn test_merkle_zeros_known_values() {
        let zeros = merkle_zeros(2);
        assert_eq!(zeros[0], B256::ZERO);
        // keccak256(0^32 ++ 0^32), the standard zero-subtree digest.
        assert_eq!(
            zeros[1],
            b256!("ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5")
        );
        assert_eq!(
            zeros[2],
            b256!("b4c11951957c6f8f642c4af61cd6b24640fec6dc7fc607ee8206a99e92410d30")
        );
    }

    #[test]
    fn test_build_and_fold_agree_for_all_leaf_counts() {
        let max_depth = depth_and_size(50).0;
        let zeros = merkle_zeros(max_depth);

        for n in 0..=50usize {
            let leaves = dummy_leaves(n);
            let (depth, padded_size) = depth_and_size(n);

            let tree = build_tree(&leaves, padded_size, depth, &zeros);
            let folded = fold_root(&leaves, padded_size, depth, &zeros);
            assert_eq!(tree[0][0], folded, "root mismatch for {n} leaves");

            // Leaf layer must be the input padded with raw zeros.
            let mut expected = leaves.clone();
            expected.resize(padded_size, B256::ZERO);
            assert_eq!(tree[depth], expected);
        }
    }

    #[test]
    fn test_path_round_trip_for_all_indices() {
        let max_depth = depth_and_size(50).0;
        let zeros = merkle_zeros(max_depth);

        for n in 0..=50usize {
            let leaves = dummy_leaves(n);
            let (depth, padded_size) = depth_and_size(n);
            let root = fold_root(&leaves, padded_size, depth, &zeros);
            let tree = build_tree(&leaves, padded_size, depth, &zeros);

            for index in 0..n {
                let path = merkle_path(&leaves, padded_size, depth, index, &zeros);
                assert_eq!(path.len(), depth);
                assert_eq!(path, path_from_tree(&tree, index));
                assert!(verify_path(leaves[index], index, &path, root));
            }
        }
    }

    #[test]
    fn test_verify_path_rejects_wrong_leaf() {
        let leaves = dummy_leaves(8);
        let (depth, padded_size) = depth_and_size(8);
        let zeros = merkle_zeros(depth);
        let root = fold_root(&leaves, padded_size, depth, &zeros);
        let path = merkle_path(&leaves, padded_size, depth, 3, &zeros);

        assert!(!verify_path(leaves[4], 3, &path, root));
        assert!(!verify_path(leaves[3], 2, &path, root));
    }

    #[test]
    fn test_empty_tree_root_is_zero_sentinel() {
        let (depth, padded_size) = depth_and_size(0);
        let zeros = merkle_zeros(depth);
        assert_eq!(fold_root(&[], padded_size, depth, &zeros), B256::ZERO);
    }
}
