//! Transaction finality polling.

use std::time::Duration;

use tracing::debug;

use crate::error::WaitError;
use crate::ledger::{LedgerClient, TxStatus};

/// Default poll attempts before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;
/// Default interval between polls.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(20);

/// Polls a transaction until it is included.
///
/// `PENDING` is retried up to `max_attempts` times; `UNKNOWN` (or a ledger
/// error while querying) is fatal immediately.
pub async fn wait(
    client: &dyn LedgerClient,
    tx_id: &str,
    max_attempts: u32,
    interval: Duration,
) -> Result<(), WaitError> {
    for attempt in 1..=max_attempts {
        match client.transaction_status(tx_id).await {
            Ok(TxStatus::Included) => {
                debug!(tx_id, attempt, "transaction included");
                return Ok(());
            }
            Ok(TxStatus::Pending) => {
                debug!(tx_id, attempt, "transaction still pending");
            }
            Ok(TxStatus::Unknown) | Err(_) => return Err(WaitError::Unknown),
        }
        tokio::time::sleep(interval).await;
    }
    Err(WaitError::MaxAttempts)
}
