//! Configuration management for the snapshotter
//!
//! Builds one immutable run configuration from the command line and
//! validates it before any network code runs.

use crate::{cli::Args, error::SnapshotterError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default port of the Elasticsearch REST API
const DEFAULT_ES_PORT: u16 = 9200;

/// Storage backend kind for a snapshot repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum RepoKind {
    /// Amazon S3 bucket
    S3,
    /// Google Cloud Storage bucket
    Gcs,
    /// Azure blob storage container
    Azure,
}

/// Basic-auth credentials toward Elasticsearch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicAuth {
    /// Authentication username
    pub username: String,
    /// Authentication password
    pub password: String,
}

/// Key-based credentials for the storage backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoKeys {
    /// Backend access key
    pub access_key: String,
    /// Backend secret key
    pub secret_key: String,
}

/// Snapshot repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Storage backend kind
    pub kind: RepoKind,
    /// Backend region
    pub region: String,
    /// Backend key pair, present only when both keys were supplied
    pub keys: Option<RepoKeys>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Elasticsearch host (scheme and port are derived, see [`Config::endpoint`])
    pub elastic_url: String,
    /// Bucket/container name, doubling as the repository name
    pub bucket_name: String,
    /// Basic auth, present only when both username and password were supplied
    pub auth: Option<BasicAuth>,
    /// Snapshot repository settings
    pub repository: RepositoryConfig,
    /// Talk to Elasticsearch over HTTPS
    pub use_ssl: bool,
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, SnapshotterError> {
        let auth = match (&args.auth_username, &args.auth_password) {
            (Some(username), Some(password))
                if !username.is_empty() && !password.is_empty() =>
            {
                Some(BasicAuth {
                    username: username.clone(),
                    password: password.clone(),
                })
            }
            _ => None,
        };

        let keys = match (&args.repo_auth_access_key, &args.repo_auth_secret_key) {
            (Some(access_key), Some(secret_key))
                if !access_key.is_empty() && !secret_key.is_empty() =>
            {
                Some(RepoKeys {
                    access_key: access_key.clone(),
                    secret_key: secret_key.clone(),
                })
            }
            _ => None,
        };

        let config = Self {
            debug: args.debug,
            elastic_url: args.elastic_url.clone(),
            bucket_name: args.bucket_name.clone(),
            auth,
            repository: RepositoryConfig {
                kind: args.repo_type,
                region: args.repo_region.clone(),
                keys,
            },
            use_ssl: args.use_ssl,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SnapshotterError> {
        if self.bucket_name.is_empty() {
            return Err(SnapshotterError::validation(
                "Missing bucket name parameter (--bucket-name)",
            ));
        }

        if self.elastic_url.is_empty() {
            return Err(SnapshotterError::validation(
                "Missing Elasticsearch URL parameter (--elastic-url)",
            ));
        }

        Ok(())
    }

    /// Base endpoint toward the Elasticsearch REST API.
    ///
    /// Scheme follows the SSL toggle; port 9200 is appended unless the
    /// host already carries an explicit port.
    pub fn endpoint(&self) -> String {
        let scheme = if self.use_ssl { "https" } else { "http" };
        if has_explicit_port(&self.elastic_url) {
            format!("{}://{}", scheme, self.elastic_url)
        } else {
            format!("{}://{}:{}", scheme, self.elastic_url, DEFAULT_ES_PORT)
        }
    }
}

fn has_explicit_port(host: &str) -> bool {
    host.rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
}
