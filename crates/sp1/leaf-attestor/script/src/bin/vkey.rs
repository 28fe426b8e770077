//! A simple utility to extract and persist the verifier key for the leaf
//! attestor zkVM circuit.
//!
//! You can run this script using the following command from the root of this
//! repository:
//! ```shell
//! cargo run -p leaf-attestor-script --bin vkey-leaf-attestor --release
//! ```
use std::fs;

use sp1_sdk::{include_elf, HashableKey, Prover, ProverClient};

/// ELF (executable and linkable format) file for the Succinct RISC-V zkVM.
pub const LEAF_ATTESTOR_ELF: &[u8] = include_elf!("leaf-attestor-program");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prover = ProverClient::builder().cpu().build();
    let (_, vk) = prover.setup(LEAF_ATTESTOR_ELF);

    let path = "testdata/vkeys/leaf-attestor-vkey-hash";
    fs::write(path, vk.bytes32())?;
    println!("leaf-attestor-program vkey: {}", vk.bytes32());

    let encoded = bincode::serialize(&vk)?;
    let path = "testdata/vkeys/leaf-attestor-vkey.bin";
    fs::write(path, encoded)?;
    println!("successfully wrote vkey to: {path}");

    Ok(())
}
