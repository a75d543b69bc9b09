//! Error types for the snapshotter
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the snapshotter
#[derive(Error, Debug)]
pub enum SnapshotterError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Transport-level errors (DNS, connection refused, TLS handshake)
    #[error("Transport error: request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx responses from the snapshot API
    #[error("Unexpected response [httpstatus: {status}][url: {url}][body: {body}]")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// Request body serialization errors
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SnapshotterError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new transport error
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Create a new unexpected-status error
    pub fn unexpected_status(
        status: u16,
        url: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            status,
            url: url.into(),
            body: body.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SnapshotterError>;
