//! # Elasticsearch Snapshotter
//!
//! A scheduled CLI for Elasticsearch's snapshot API. Each invocation
//! performs exactly one HTTP request and exits: either registering a
//! snapshot repository (S3, GCS, or Azure blob storage) or taking a
//! point-in-time snapshot of all indices into a registered repository.
//!
//! ## Features
//!
//! - Repository registration with backend-specific settings bodies
//! - Timestamped snapshots awaited synchronously via `wait_for_completion`
//! - Basic auth and key-based backend credentials, applied only when complete
//! - No persistent state, no retries; sequencing belongs to the scheduler
//!
//! ## Example
//!
//! ```no_run
//! use elasticsearch_snapshotter::{config::Config, core::{EsClient, take_snapshot}};
//!
//! # fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
//! let client = EsClient::new()?;
//! take_snapshot(config, &client)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
