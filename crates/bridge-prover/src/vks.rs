//! Baked verification-key hashes.
//!
//! These are versioned immutable assets: the vkey utilities in the script
//! crates compute them offline and the values are committed alongside the
//! code. At startup the orchestrator recomputes them from the ELFs and
//! compares; any disagreement means the binaries no longer match the circuits
//! this deployment trusts, and the process refuses to start.

use crate::error::IntegrityError;

/// Baked vkey hash of the bridge transition program.
pub const TRANSITION_VKEY_HASH: &str =
    "0x00296d62a2e90d4561031a2d8da2cdcbbbca4df4c915f6e4f3689eb7e0b3b36f";

/// Baked vkey hash of the leaf attestor program.
pub const LEAF_ATTESTOR_VKEY_HASH: &str =
    "0x0033a2bbf105d7eb0f85d9e4bbbdbb8ffbcbcf3de526f1e022e245ca4d1e325c";

/// Compares freshly computed vkey hashes against the baked values,
/// collecting every disagreement before failing.
pub fn check_vk_hashes(
    computed_transition: &str,
    computed_leaf_attestor: &str,
) -> Result<(), IntegrityError> {
    let mut disagree: Vec<String> = Vec::new();

    if computed_transition != TRANSITION_VKEY_HASH {
        disagree.push(format!(
            "computed transition program vkey hash '{computed_transition}' disagrees with the one cached within this repository '{TRANSITION_VKEY_HASH}'"
        ));
    }

    if computed_leaf_attestor != LEAF_ATTESTOR_VKEY_HASH {
        disagree.push(format!(
            "computed leaf attestor vkey hash '{computed_leaf_attestor}' disagrees with the one cached within this repository '{LEAF_ATTESTOR_VKEY_HASH}'"
        ));
    }

    if !disagree.is_empty() {
        return Err(IntegrityError::Disagreement(disagree));
    }
    Ok(())
}
