//! A simple utility to extract and persist the verifier key for the bridge
//! transition zkVM circuit.
//!
//! This program initializes an SP1 prover client and performs a one-time
//! setup to compute the proving and verification keys for the ELF binary. It
//! writes the verification key hash (as a 32-byte hex string) alongside the
//! serialized key, which the prover crate's integrity check compares against
//! its baked-in value at startup.
//!
//! You can run this script using the following command from the root of this
//! repository:
//! ```shell
//! cargo run -p bridge-transition-script --bin vkey-bridge-transition --release
//! ```
use std::fs;

use sp1_sdk::{include_elf, HashableKey, Prover, ProverClient};

/// ELF (executable and linkable format) file for the Succinct RISC-V zkVM.
pub const BRIDGE_TRANSITION_ELF: &[u8] = include_elf!("bridge-transition-program");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prover = ProverClient::builder().cpu().build();
    let (_, vk) = prover.setup(BRIDGE_TRANSITION_ELF);

    let path = "testdata/vkeys/bridge-transition-vkey-hash";
    fs::write(path, vk.bytes32())?;
    println!("bridge-transition-program vkey: {}", vk.bytes32());

    let encoded = bincode::serialize(&vk)?;
    let path = "testdata/vkeys/bridge-transition-vkey.bin";
    fs::write(path, encoded)?;
    println!("successfully wrote vkey to: {path}");

    Ok(())
}
