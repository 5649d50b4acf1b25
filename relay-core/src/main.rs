use anyhow::Result;
use clap::Parser;
use relay_core::observability::setup_logging;
use relay_core::{server, RelayConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "relayd",
    about = "Relay queries to automation webhooks and normalize their answers"
)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "relay.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();
    let config = RelayConfig::load(&args.config)?;

    server::run(config).await?;
    Ok(())
}
