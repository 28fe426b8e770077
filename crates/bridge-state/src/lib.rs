//! The bridge head's persistent account record and its single proof-gated
//! state transition.
//!
//! The record itself is plain key-value bookkeeping; everything interesting
//! is the invariants `update` enforces: store-hash continuity against the
//! previous update's output, and strictly monotonic head progress. A failed
//! check aborts the whole transition with nothing committed; there is no
//! rollback because nothing partial ever lands.

use alloy_primitives::{Address, B256, U256, keccak256};
use bridge_program_types::{TransitionOutput, TransitionInput};
use bridge_types::{PackedHash, ProofOutputs};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Sentinel value of `verified_state_root` before the first update lands.
pub const STATE_ROOT_UNINITIALIZED: B256 = B256::with_last_byte(1);

/// Errors raised while applying a state transition. The continuity checks run
/// before the ordering check so a broken chain is distinguishable from a
/// merely stale proof.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error(
        "the transition proof's previous store hash high byte must match the bridge's recorded store hash high byte"
    )]
    StoreHashMismatchHigh,

    #[error(
        "the transition proof's previous store hash lower bytes must match the bridge's recorded store hash lower bytes"
    )]
    StoreHashMismatchLow,

    #[error("proof head must be greater than the current head")]
    NonMonotonicHead,
}

/// A transition that already passed commitment and proof verification,
/// carrying the echoed public input and the packed public output. Only the
/// verification pipeline constructs these; the record below never consumes a
/// raw proof directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedTransition {
    pub outputs: ProofOutputs,
    pub output: TransitionOutput,
}

impl VerifiedTransition {
    pub fn new(input: TransitionInput, output: TransitionOutput) -> Self {
        Self {
            outputs: input.outputs,
            output,
        }
    }
}

/// Arguments for a (re)deployment of the bridge account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployArgs {
    /// When redeploying an account that must carry forward bridge
    /// continuity, the store hash to seed the record with.
    pub store_hash: Option<B256>,
}

/// The bridge's persistent on-chain record. Created once at deployment and
/// mutated exclusively by [`BridgeState::apply_update`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeState {
    pub admin: Address,
    pub latest_head: u64,
    pub verified_state_root: B256,
    pub latest_store_hash: PackedHash,
    pub latest_deposits_root: PackedHash,
}

/// Selects between two scalars without branching, the shape the check takes
/// inside a proof-gated method.
pub fn select_word(flag: bool, when_true: U256, when_false: U256) -> U256 {
    let mask = U256::from(flag as u8);
    when_true * mask + when_false * (U256::ONE - mask)
}

impl BridgeState {
    /// Initializes a fresh account: head zero and the uninitialized
    /// state-root sentinel. Permission wiring (proof-or-signature gating of
    /// further edits) is the host ledger's concern.
    pub fn init(admin: Address) -> Self {
        Self {
            admin,
            latest_head: 0,
            verified_state_root: STATE_ROOT_UNINITIALIZED,
            latest_store_hash: PackedHash::default(),
            latest_deposits_root: PackedHash::default(),
        }
    }

    /// Applies deployment arguments: keeps the recorded store hash unless the
    /// caller supplied a replacement, selected branchlessly.
    pub fn deploy(&mut self, args: &DeployArgs) {
        let replace = args.store_hash.is_some();
        let supplied = args
            .store_hash
            .map(|hash| PackedHash::from_bytes32(&hash))
            .unwrap_or_default();

        self.latest_store_hash = PackedHash {
            high_byte: select_word(replace, supplied.high_byte, self.latest_store_hash.high_byte),
            lower_bytes: select_word(
                replace,
                supplied.lower_bytes,
                self.latest_store_hash.lower_bytes,
            ),
        };
    }

    /// The single state transition. The proof must witness the record's
    /// current store hash as its previous value, so updates form an unbroken
    /// chain, and advance the head strictly. On success the new head, the
    /// hashed execution state root, and the packed output hashes are
    /// committed atomically.
    pub fn apply_update(&mut self, transition: &VerifiedTransition) -> Result<(), UpdateError> {
        let witnessed_prev = PackedHash::from_bytes32(&transition.outputs.prev_store_hash);

        debug!(
            witnessed_high = %witnessed_prev.high_byte,
            recorded_high = %self.latest_store_hash.high_byte,
            "checking store hash continuity"
        );
        if witnessed_prev.high_byte != self.latest_store_hash.high_byte {
            return Err(UpdateError::StoreHashMismatchHigh);
        }
        if witnessed_prev.lower_bytes != self.latest_store_hash.lower_bytes {
            return Err(UpdateError::StoreHashMismatchLow);
        }

        debug!(
            proof_head = transition.outputs.new_head,
            current_head = self.latest_head,
            "checking head progress"
        );
        if transition.outputs.new_head <= self.latest_head {
            return Err(UpdateError::NonMonotonicHead);
        }

        self.latest_head = transition.outputs.new_head;
        self.verified_state_root = keccak256(transition.outputs.execution_state_root);
        self.latest_store_hash = transition.output.store_hash;
        self.latest_deposits_root = transition.output.deposits_root;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimal stand-in for the verification pipeline: packs the outputs the
    // way the transition program would, without a proof.
    fn verified(outputs: ProofOutputs) -> VerifiedTransition {
        let output = TransitionOutput {
            store_hash: PackedHash::from_bytes32(&outputs.store_hash),
            deposits_root: PackedHash::default(),
        };
        VerifiedTransition { outputs, output }
    }

    fn outputs(prev_head: u64, new_head: u64, prev_store: B256, store: B256) -> ProofOutputs {
        ProofOutputs {
            execution_state_root: B256::repeat_byte(new_head as u8),
            new_header: B256::repeat_byte(0x22),
            next_sync_committee_hash: B256::repeat_byte(0x33),
            new_head,
            prev_header: B256::repeat_byte(0x44),
            prev_head,
            sync_committee_hash: B256::repeat_byte(0x55),
            start_sync_committee_hash: B256::repeat_byte(0x66),
            prev_store_hash: prev_store,
            store_hash: store,
            verified_contract_storage_slots: Vec::new(),
        }
    }

    /// Four chained proofs with distinct store hashes, starting from the
    /// freshly initialized record's zero store hash.
    fn example_series() -> Vec<VerifiedTransition> {
        let store: Vec<B256> = (1..=4u8).map(|i| keccak256([i])).collect();
        let heads = [11615680u64, 11615712, 11615744, 11615776];

        let mut series = Vec::new();
        let mut prev_store = B256::ZERO;
        let mut prev_head = 0;
        for (head, store) in heads.into_iter().zip(store) {
            series.push(verified(outputs(prev_head, head, prev_store, store)));
            prev_store = store;
            prev_head = head;
        }
        series
    }

    #[test]
    fn test_init_sentinels() {
        let state = BridgeState::init(Address::repeat_byte(0xad));
        assert_eq!(state.latest_head, 0);
        assert_eq!(state.verified_state_root, STATE_ROOT_UNINITIALIZED);
        assert_eq!(state.latest_store_hash, PackedHash::default());
    }

    #[test]
    fn test_sequential_series_happy_path() {
        let mut state = BridgeState::init(Address::repeat_byte(0xad));
        let series = example_series();

        let mut last_head = 0;
        for transition in &series {
            state.apply_update(transition).unwrap();
            assert!(state.latest_head > last_head);
            last_head = state.latest_head;
        }

        let last = series.last().unwrap();
        assert_eq!(state.latest_head, 11615776);
        assert_eq!(state.latest_store_hash, last.output.store_hash);
        assert_eq!(
            state.verified_state_root,
            keccak256(last.outputs.execution_state_root)
        );
    }

    #[test]
    fn test_skipped_proof_breaks_the_chain() {
        let mut state = BridgeState::init(Address::repeat_byte(0xad));
        let series = example_series();

        state.apply_update(&series[0]).unwrap();
        let before = state.clone();

        // Proof 3 witnesses proof 2's output, which this record never saw.
        let err = state.apply_update(&series[2]).unwrap_err();
        assert!(matches!(
            err,
            UpdateError::StoreHashMismatchHigh | UpdateError::StoreHashMismatchLow
        ));
        assert_eq!(state, before, "a rejected update must not change the record");
    }

    #[test]
    fn test_stale_head_is_rejected_after_continuity_passes() {
        let mut state = BridgeState::init(Address::repeat_byte(0xad));
        let series = example_series();
        state.apply_update(&series[0]).unwrap();

        // Same continuity as a valid successor, but no head progress.
        let stale = verified(outputs(
            11615680,
            11615680,
            series[0].outputs.store_hash,
            keccak256([9u8]),
        ));
        assert_eq!(state.apply_update(&stale), Err(UpdateError::NonMonotonicHead));
    }

    #[test]
    fn test_deploy_keeps_or_replaces_store_hash() {
        let mut state = BridgeState::init(Address::repeat_byte(0xad));
        let recorded = PackedHash::from_bytes32(&keccak256([7u8]));
        state.latest_store_hash = recorded;

        state.deploy(&DeployArgs { store_hash: None });
        assert_eq!(state.latest_store_hash, recorded);

        let replacement = keccak256([8u8]);
        state.deploy(&DeployArgs {
            store_hash: Some(replacement),
        });
        assert_eq!(state.latest_store_hash, PackedHash::from_bytes32(&replacement));
    }

    #[test]
    fn test_select_word() {
        let a = U256::from(7u64);
        let b = U256::from(9u64);
        assert_eq!(select_word(true, a, b), a);
        assert_eq!(select_word(false, a, b), b);
    }
}
