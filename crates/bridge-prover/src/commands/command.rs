use std::fs;

use anyhow::Result;
use tracing::info;

use crate::bundle::RawProofBundle;
use crate::commands::cli::VERSION;
use crate::config::{Network, SubmitterConfig};
use crate::submitter::ProofSubmitter;
use crate::tx;

pub async fn deploy() -> Result<()> {
    let config = SubmitterConfig::from_env()?;
    let submitter = ProofSubmitter::for_network(config)?;

    submitter.network_setup().await?;
    submitter.compile_programs()?;
    submitter.deploy_contract().await?;
    Ok(())
}

pub async fn submit(proof_path: &str) -> Result<()> {
    let config = SubmitterConfig::from_env()?;
    let light = config.network == Network::Light;
    let submitter = ProofSubmitter::for_network(config)?;

    submitter.network_setup().await?;
    submitter.compile_programs()?;

    // The light network starts from a fresh throwaway account each run.
    if light {
        submitter.deploy_contract().await?;
    }

    info!(path = proof_path, "reading raw proof bundle");
    let bundle: RawProofBundle = serde_json::from_str(&fs::read_to_string(proof_path)?)?;

    let artifact = submitter.create_proof(bundle).await?;
    let receipt = submitter.submit(&artifact).await?;

    tx::wait(
        submitter.ledger().as_ref(),
        &receipt.tx_id,
        tx::DEFAULT_MAX_ATTEMPTS,
        tx::DEFAULT_INTERVAL,
    )
    .await?;
    info!("awaited finalization successfully");
    Ok(())
}

pub fn version() {
    println!("version: {VERSION}");
}
