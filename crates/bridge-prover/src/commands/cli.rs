use clap::{Parser, Subcommand};

pub const VERSION: &str = "v0.1.0";

#[derive(Parser)]
#[command(name = "bridge-prover", version = VERSION, about = "Bridge head submission CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy the bridge account on the configured network
    Deploy {},

    /// Create a transition proof from a raw proof bundle and submit it
    Submit {
        /// Path to the raw proof bundle JSON
        #[arg(long)]
        proof: String,
    },

    /// Show the service version
    Version {},
}
