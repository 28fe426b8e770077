//! End-to-end pipeline tests over the in-process light ledger: decode raw
//! bundles, prove with the mock backend, submit, and await finality.

use std::time::Duration;

use alloy_primitives::{Address, B256, keccak256};
use bridge_program_types::identity::INNER_CIRCUIT_IDENTITY;
use bridge_program_types::{TransitionError, expected_commitment};
use bridge_prover::bundle::RawProofBundle;
use bridge_prover::config::SubmitterConfig;
use bridge_prover::error::{LedgerError, WaitError};
use bridge_prover::ledger::LedgerClient;
use bridge_prover::submitter::ProofSubmitter;
use bridge_prover::tx;
use bridge_state::UpdateError;
use bridge_types::{PackedHash, ProofOutputs, VerifiedContractStorageSlot};

fn light_config() -> SubmitterConfig {
    SubmitterConfig::from_lookup(|key| match key {
        "SENDER_PRIVATE_KEY" => Some("sk-integration".to_string()),
        "NETWORK" => Some("light".to_string()),
        _ => None,
    })
    .expect("light config must be valid")
}

fn slot(seed: u8) -> VerifiedContractStorageSlot {
    VerifiedContractStorageSlot {
        key: B256::repeat_byte(seed),
        slot_key_address: Address::repeat_byte(seed.wrapping_add(1)),
        value: B256::repeat_byte(seed.wrapping_add(2)),
        contract_address: Address::repeat_byte(0xcc),
    }
}

/// Four sequentially valid proof-output records: each witnesses the previous
/// record's store hash and advances the head by one sync period.
fn example_series() -> Vec<ProofOutputs> {
    let heads = [11615680u64, 11615712, 11615744, 11615776];

    let mut series = Vec::new();
    let mut prev_store_hash = B256::ZERO;
    let mut prev_head = 0u64;
    for (i, head) in heads.into_iter().enumerate() {
        let store_hash = keccak256([i as u8 + 1]);
        series.push(ProofOutputs {
            execution_state_root: B256::repeat_byte(0x10 + i as u8),
            new_header: B256::repeat_byte(0x20 + i as u8),
            next_sync_committee_hash: B256::repeat_byte(0x30 + i as u8),
            new_head: head,
            prev_header: B256::repeat_byte(0x40 + i as u8),
            prev_head,
            sync_committee_hash: B256::repeat_byte(0x50 + i as u8),
            start_sync_committee_hash: B256::repeat_byte(0x60),
            prev_store_hash,
            store_hash,
            verified_contract_storage_slots: (0..i).map(|s| slot(s as u8)).collect(),
        });
        prev_store_hash = store_hash;
        prev_head = head;
    }
    series
}

fn bundle_for(outputs: &ProofOutputs) -> RawProofBundle {
    RawProofBundle {
        public_values: outputs.abi_encode(),
        committed_digest: expected_commitment(outputs),
        circuit_digest: INNER_CIRCUIT_IDENTITY,
        proof: vec![0xab; 128],
        sp1_version: "5.2.2".to_string(),
    }
}

#[tokio::test]
async fn test_proof_series_happy_path() {
    let submitter = ProofSubmitter::for_network(light_config()).unwrap();
    submitter.network_setup().await.unwrap();
    submitter.deploy_contract().await.unwrap();

    let series = example_series();
    let mut last_head = 0;
    for outputs in &series {
        let artifact = submitter.create_proof(bundle_for(outputs)).await.unwrap();
        let receipt = submitter.submit(&artifact).await.unwrap();
        tx::wait(
            submitter.ledger().as_ref(),
            &receipt.tx_id,
            5,
            Duration::from_millis(1),
        )
        .await
        .unwrap();

        let state = submitter.ledger().fetch_state().await.unwrap();
        assert!(state.latest_head > last_head);
        last_head = state.latest_head;
    }

    let last = series.last().unwrap();
    let state = submitter.ledger().fetch_state().await.unwrap();
    assert_eq!(state.latest_head, last.new_head);
    assert_eq!(
        state.latest_store_hash,
        PackedHash::from_bytes32(&last.store_hash)
    );
    assert_eq!(
        state.verified_state_root,
        keccak256(last.execution_state_root)
    );
}

#[tokio::test]
async fn test_skipping_a_proof_breaks_the_chain() {
    let submitter = ProofSubmitter::for_network(light_config()).unwrap();
    submitter.deploy_contract().await.unwrap();

    let series = example_series();

    let artifact = submitter.create_proof(bundle_for(&series[0])).await.unwrap();
    submitter.submit(&artifact).await.unwrap();

    // Proof three witnesses proof two's output, which the account never saw.
    // The proof itself is valid, so the rejection must come from the chain
    // continuity check, not from proof verification.
    let artifact = submitter.create_proof(bundle_for(&series[2])).await.unwrap();
    let err = submitter.submit(&artifact).await.unwrap_err();

    match err.downcast_ref::<LedgerError>() {
        Some(LedgerError::UpdateRejected(
            UpdateError::StoreHashMismatchHigh | UpdateError::StoreHashMismatchLow,
        )) => {}
        other => panic!("expected a store hash mismatch, got {other:?}"),
    }

    // The account state is unchanged by the rejected submission.
    let state = submitter.ledger().fetch_state().await.unwrap();
    assert_eq!(state.latest_head, series[0].new_head);
}

#[tokio::test]
async fn test_stale_proof_is_rejected() {
    let submitter = ProofSubmitter::for_network(light_config()).unwrap();
    submitter.deploy_contract().await.unwrap();

    let series = example_series();
    let artifact = submitter.create_proof(bundle_for(&series[0])).await.unwrap();
    submitter.submit(&artifact).await.unwrap();

    // Correct continuity, but the head does not advance.
    let mut stale = series[1].clone();
    stale.new_head = series[0].new_head;
    let artifact = submitter.create_proof(bundle_for(&stale)).await.unwrap();
    let err = submitter.submit(&artifact).await.unwrap_err();

    match err.downcast_ref::<LedgerError>() {
        Some(LedgerError::UpdateRejected(UpdateError::NonMonotonicHead)) => {}
        other => panic!("expected a non-monotonic head rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_corrupt_bundle_fails_at_proof_creation() {
    let submitter = ProofSubmitter::for_network(light_config()).unwrap();
    submitter.deploy_contract().await.unwrap();

    let mut bundle = bundle_for(&example_series()[0]);
    bundle.committed_digest = B256::repeat_byte(0xdd);

    let err = submitter.create_proof(bundle).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<TransitionError>(),
        Some(&TransitionError::DigestMismatch)
    );
}

#[tokio::test]
async fn test_submit_before_deploy_is_rejected() {
    let submitter = ProofSubmitter::for_network(light_config()).unwrap();

    let artifact = submitter
        .create_proof(bundle_for(&example_series()[0]))
        .await
        .unwrap();
    let err = submitter.submit(&artifact).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<LedgerError>(),
        Some(&LedgerError::AccountNotFound)
    );
}

#[tokio::test]
async fn test_wait_on_unknown_transaction_is_fatal() {
    let submitter = ProofSubmitter::for_network(light_config()).unwrap();
    submitter.deploy_contract().await.unwrap();

    let err = tx::wait(
        submitter.ledger().as_ref(),
        "tx-missing",
        5,
        Duration::from_millis(1),
    )
    .await
    .unwrap_err();
    assert_eq!(err, WaitError::Unknown);
}

#[tokio::test]
async fn test_bundle_survives_the_file_round_trip() {
    let submitter = ProofSubmitter::for_network(light_config()).unwrap();
    submitter.deploy_contract().await.unwrap();

    let bundle = bundle_for(&example_series()[0]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.json");
    std::fs::write(&path, serde_json::to_string_pretty(&bundle).unwrap()).unwrap();

    let parsed: RawProofBundle =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let artifact = submitter.create_proof(parsed).await.unwrap();
    submitter.submit(&artifact).await.unwrap();
}
