//! Submitter configuration, validated eagerly at construction.

use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::ConfigError;

/// Fallback ledger endpoint when RPC_URL is unset.
pub const DEFAULT_RPC_URL: &str = "http://localhost:3000/graphql";

/// Target network for submissions. `Light` is the in-process test network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Dev,
    Main,
    Light,
}

impl Network {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dev" => Some(Self::Dev),
            "main" => Some(Self::Main),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Main => write!(f, "main"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Everything the submitter needs, resolved once up front. Validation
/// aggregates every missing or invalid field instead of failing one at a
/// time.
#[derive(Debug, Clone)]
pub struct SubmitterConfig {
    /// Key used to sign and fund submissions.
    pub sender_key: String,
    pub network: Network,
    /// Key of the bridge account itself. Optional on the light network,
    /// where a throwaway account is created per run.
    pub zkapp_key: Option<String>,
    pub rpc_url: String,
    /// Transaction fee in nano units.
    pub tx_fee: u64,
}

impl SubmitterConfig {
    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        let sender_key = lookup("SENDER_PRIVATE_KEY");
        if sender_key.is_none() {
            errors.push("SENDER_PRIVATE_KEY is required".to_string());
        }

        let network = match lookup("NETWORK") {
            None => {
                errors.push("NETWORK is required".to_string());
                None
            }
            Some(raw) => match Network::parse(&raw) {
                Some(network) => Some(network),
                None => {
                    errors.push(format!(
                        "NETWORK must be one of: dev, main, light (got \"{raw}\")"
                    ));
                    None
                }
            },
        };

        let zkapp_key = lookup("ZKAPP_PRIVATE_KEY");
        if matches!(network, Some(network) if network != Network::Light) && zkapp_key.is_none() {
            errors.push("ZKAPP_PRIVATE_KEY is required when not in light mode".to_string());
        }

        let rpc_url = lookup("RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let tx_fee_raw = lookup("TX_FEE").unwrap_or_else(|| "0.1".to_string());
        let tx_fee = match tx_fee_raw.parse::<f64>() {
            Ok(fee) if fee >= 0.0 => Some((fee * 1e9) as u64),
            _ => {
                errors.push(format!(
                    "TX_FEE must be a non-negative number (got \"{tx_fee_raw}\")"
                ));
                None
            }
        };

        match (sender_key, network, tx_fee) {
            (Some(sender_key), Some(network), Some(tx_fee)) if errors.is_empty() => Ok(Self {
                sender_key,
                network,
                zkapp_key,
                rpc_url,
                tx_fee,
            }),
            _ => Err(ConfigError::Invalid(errors)),
        }
    }
}
