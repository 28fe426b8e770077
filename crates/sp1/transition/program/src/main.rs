//! An SP1 program that advances the bridge head by one verified transition.
//!
//! It accepts:
//! - The claimed proof-output record
//! - The converted inner proof's public commitments
//!
//! It performs:
//! 1. Canonical re-encoding of the record and digest binding against the
//!    inner proof's committed output
//! 2. Inner circuit identity and zero-committee checks
//! 3. Recursive verification of the inner proof against the baked
//!    verification key
//!
//! It commits:
//! - The packed store hash and deposits root

#![no_main]
sp1_zkvm::entrypoint!(main);

use bridge_program_types::identity::INNER_CIRCUIT_VKEY_WORDS;
use bridge_program_types::transition::TransitionInput;

pub fn main() {
    let input: TransitionInput = sp1_zkvm::io::read::<TransitionInput>();

    println!("cycle-tracker-start: verify transition commitments");
    let output = input
        .verify_commitments()
        .expect("transition commitment verification failed");
    println!("cycle-tracker-end: verify transition commitments");

    sp1_zkvm::lib::verify::verify_sp1_proof(
        &INNER_CIRCUIT_VKEY_WORDS,
        &input.proof.committed_digest.0,
    );

    sp1_zkvm::io::commit(&output);
}
