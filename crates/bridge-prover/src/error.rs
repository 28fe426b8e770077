use bridge_state::UpdateError;
use thiserror::Error;

/// Raised when the environment configuration is unusable. All problems are
/// collected before failing so the operator fixes them in one pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration errors:\n- {}", .0.join("\n- "))]
    Invalid(Vec<String>),
}

/// Raised when freshly computed verification key hashes disagree with the
/// values baked into this repository. Startup is refused rather than
/// operating against a stale or incompatible circuit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error(
        "{}\nRefusing to start. Do you need to re-run the vkey utilities and commit the change?",
        .0.join("\n")
    )]
    Disagreement(Vec<String>),
}

/// Errors surfaced by a ledger client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("bridge account has not been deployed")]
    AccountNotFound,

    #[error("transition proof rejected: {0}")]
    ProofRejected(String),

    #[error("state update rejected: {0}")]
    UpdateRejected(#[from] UpdateError),
}

/// Errors raised while awaiting transaction finality.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WaitError {
    #[error("transaction entered UNKNOWN status")]
    Unknown,

    #[error("max attempts breached while awaiting transaction finality")]
    MaxAttempts,
}
