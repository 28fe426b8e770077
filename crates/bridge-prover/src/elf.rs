//! zkVM program binaries for the bridge circuits.

#[cfg(feature = "sp1")]
use sp1_sdk::include_elf;

/// ELF of the bridge transition program.
#[cfg(feature = "sp1")]
pub const BRIDGE_TRANSITION_ELF: &[u8] = include_elf!("bridge-transition-program");

// Without the sp1 feature the programs are not built; proving and the vkey
// integrity check are unavailable and callers run against the mock backend.
#[cfg(not(feature = "sp1"))]
pub const BRIDGE_TRANSITION_ELF: &[u8] = &[];

/// ELF of the leaf attestor program.
#[cfg(feature = "sp1")]
pub const LEAF_ATTESTOR_ELF: &[u8] = include_elf!("leaf-attestor-program");

#[cfg(not(feature = "sp1"))]
pub const LEAF_ATTESTOR_ELF: &[u8] = &[];
