//! Core functionality for the snapshotter
//!
//! Contains the HTTP transport and the two snapshot API actions.

pub mod client;
pub mod repository;
pub mod snapshot;

pub use client::{EsClient, Response, Transport};
pub use repository::{RepositoryBody, RepositorySettings, create_repository, repository_body};
pub use snapshot::{snapshot_name, take_snapshot};
