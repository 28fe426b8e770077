//! Input and output types for the bridge zkVM programs, together with the
//! verification logic the programs execute. Keeping the logic here lets the
//! host and the circuits share one implementation, with the programs reduced
//! to thin entrypoints.

pub mod attestor;
pub mod identity;
pub mod transition;

pub use attestor::AttestorInput;
pub use transition::{
    ConversionProof, TransitionError, TransitionInput, TransitionOutput, expected_commitment,
};
