use clap::Parser;
use tracing_subscriber::EnvFilter;

use bridge_prover::commands::{
    self,
    cli::{Cli, Commands},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Filter out sp1 logs by default, show info level for the prover.
    let mut filter = EnvFilter::new("sp1_core=warn,sp1_runtime=warn,sp1_sdk=warn,sp1_vm=warn,info");
    if let Ok(env_filter) = std::env::var("RUST_LOG") {
        if let Ok(parsed) = env_filter.parse() {
            filter = filter.add_directive(parsed);
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    match cli.command {
        Commands::Deploy {} => commands::command::deploy().await?,
        Commands::Submit { proof } => commands::command::submit(&proof).await?,
        Commands::Version {} => commands::command::version(),
    }

    Ok(())
}
