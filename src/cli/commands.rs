//! Command implementations for the CLI

use crate::{
    config::Config,
    core::{EsClient, create_repository, take_snapshot},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate action based on CLI arguments.
///
/// Unrecognized action names are a logged no-op, not an error: the caller
/// exits 0 so an external scheduler never retries a misspelled action.
#[instrument(skip(config))]
pub fn execute_command(config: &Config, action: &str) -> anyhow::Result<()> {
    match action {
        "create-repository" => execute_create_repository(config),
        "snapshot" => execute_snapshot(config),
        other => {
            info!("Action passed [{}] not recognized, nothing to do", other);
            Ok(())
        }
    }
}

/// Execute the create-repository action
#[instrument(skip(config))]
fn execute_create_repository(config: &Config) -> anyhow::Result<()> {
    let client = EsClient::new().context("Failed to build HTTP client")?;
    create_repository(config, &client).context("Failed to create snapshot repository")
}

/// Execute the snapshot action
#[instrument(skip(config))]
fn execute_snapshot(config: &Config) -> anyhow::Result<()> {
    let client = EsClient::new().context("Failed to build HTTP client")?;
    take_snapshot(config, &client).context("Failed to create snapshot")
}
