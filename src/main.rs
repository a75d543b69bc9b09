#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use elasticsearch_snapshotter::{cli, config::Config, setup_logging};
use tracing::info;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;
    info!("es-snapshotter is up and running");

    // Initialize configuration; fails before any network code runs
    let config = Config::from_args(&args)?;

    // Execute the requested action
    cli::execute_command(&config, &args.action)
}
