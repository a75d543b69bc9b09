//! Snapshot repository registration
//!
//! Builds the backend-specific repository body and registers it under
//! `_snapshot/{name}` via one PUT request.

use crate::{
    config::{Config, RepoKind},
    core::client::Transport,
    error::Result,
};
use serde::Serialize;
use tracing::{info, instrument};

/// Request body of the repository-create call
#[derive(Debug, Serialize)]
pub struct RepositoryBody {
    #[serde(rename = "type")]
    pub kind: RepoKind,
    pub settings: RepositorySettings,
}

/// Backend-specific repository settings
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RepositorySettings {
    /// Azure blob storage container
    Container {
        container: String,
        compress: &'static str,
    },
    /// S3/GCS bucket with key-based backend auth
    KeyedBucket {
        bucket: String,
        region: String,
        access_key: String,
        secret_key: String,
        server_side_encryption: &'static str,
    },
    /// S3/GCS bucket relying on ambient backend auth
    Bucket {
        bucket: String,
        server_side_encryption: &'static str,
    },
}

/// Build the repository body for the configured backend.
///
/// Key-based credentials are included only when both halves of the key
/// pair were supplied.
pub fn repository_body(config: &Config) -> RepositoryBody {
    let settings = match (config.repository.kind, &config.repository.keys) {
        (RepoKind::Azure, _) => RepositorySettings::Container {
            container: config.bucket_name.clone(),
            compress: "true",
        },
        (_, Some(keys)) => RepositorySettings::KeyedBucket {
            bucket: config.bucket_name.clone(),
            region: config.repository.region.clone(),
            access_key: keys.access_key.clone(),
            secret_key: keys.secret_key.clone(),
            server_side_encryption: "true",
        },
        (_, None) => RepositorySettings::Bucket {
            bucket: config.bucket_name.clone(),
            server_side_encryption: "true",
        },
    };

    RepositoryBody {
        kind: config.repository.kind,
        settings,
    }
}

/// Register the snapshot repository
#[instrument(skip(config, transport))]
pub fn create_repository(config: &Config, transport: &dyn Transport) -> Result<()> {
    info!("Creating snapshot repository...");

    let url = format!("{}/_snapshot/{}", config.endpoint(), config.bucket_name);
    let body = serde_json::to_string(&repository_body(config))?;

    transport
        .put(&url, Some(&body), config.auth.as_ref())?
        .ensure_success(&url)?;

    info!("Created snapshot repository");
    Ok(())
}
