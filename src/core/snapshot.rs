//! Point-in-time snapshots of all indices
//!
//! Takes one snapshot into an already-registered repository, waiting
//! synchronously for the cluster to finish.

use crate::{config::Config, core::client::Transport, error::Result};
use chrono::{DateTime, Local};
use tracing::{info, instrument};

/// Build the snapshot name from the given wall-clock time.
///
/// Second precision; two invocations within the same second collide, and
/// sequencing is left to the external scheduler.
pub fn snapshot_name(now: DateTime<Local>) -> String {
    format!("snapshot_{}", now.format("%Y-%m-%d-%H-%M-%S"))
}

/// Take a snapshot of all indices into the configured repository.
///
/// `wait_for_completion=true` keeps the response open until the snapshot
/// finishes, so this call blocks for however long the cluster takes.
#[instrument(skip(config, transport))]
pub fn take_snapshot(config: &Config, transport: &dyn Transport) -> Result<()> {
    info!("Creating snapshot...");

    let name = snapshot_name(Local::now());
    let url = format!(
        "{}/_snapshot/{}/{}?wait_for_completion=true",
        config.endpoint(),
        config.bucket_name,
        name
    );

    transport
        .put(&url, None, config.auth.as_ref())?
        .ensure_success(&url)?;

    info!("Created snapshot {}", name);
    Ok(())
}
