//! Baked circuit-identity digests.
//!
//! These values pin which circuits this deployment trusts. They are produced
//! offline by the vkey utilities and committed alongside the code; any change
//! to a circuit requires re-baking them, and the orchestrator refuses to
//! operate when its freshly computed hashes disagree (see the prover crate's
//! integrity check).

use alloy_primitives::{B256, b256};

/// Public-input digest identifying the outer proof-conversion circuit. Mixed
/// into the commitment over the re-encoded proof outputs, so a proof bound to
/// a different converter can never match.
pub const OUTER_VERIFIER_IDENTITY: B256 =
    b256!("00c47e2902df1e623ea9d68bb11b32a1b8b07c4dba8a52afccd4b1bb4b2c97a4");

/// Verification-key digest of the inner consensus-and-storage circuit whose
/// proof the transition program re-verifies.
pub const INNER_CIRCUIT_IDENTITY: B256 =
    b256!("1b64afc170ad2ca053d93f428e5ab1ce2274f3c961b0de854f08a9773d9c51e6");

/// [`INNER_CIRCUIT_IDENTITY`] as the eight big-endian words the zkVM's
/// recursive verification intrinsic expects.
pub const INNER_CIRCUIT_VKEY_WORDS: [u32; 8] = [
    0x1b64afc1, 0x70ad2ca0, 0x53d93f42, 0x8e5ab1ce, 0x2274f3c9, 0x61b0de85, 0x4f08a977, 0x3d9c51e6,
];
