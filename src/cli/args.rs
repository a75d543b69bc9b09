//! Command-line argument parsing and validation

use crate::config::RepoKind;
use clap::{ArgAction, Parser};

/// Elasticsearch Snapshotter - registers snapshot repositories and takes snapshots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "es-snapshotter")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Action to perform (create-repository or snapshot)
    #[arg(long, default_value = "", value_name = "ACTION")]
    pub action: String,

    /// Name of the bucket/container, also used as the repository name
    #[arg(
        long = "bucket-name",
        alias = "s3-bucket-name",
        default_value = "",
        value_name = "NAME"
    )]
    pub bucket_name: String,

    /// Elasticsearch host (scheme and port are derived)
    #[arg(long = "elastic-url", default_value = "", value_name = "HOST")]
    pub elastic_url: String,

    /// Authentication username
    #[arg(long = "auth-username", value_name = "USER")]
    pub auth_username: Option<String>,

    /// Authentication password
    #[arg(long = "auth-password", value_name = "PASSWORD")]
    pub auth_password: Option<String>,

    /// Storage backend of the snapshot repository
    #[arg(long = "repo-type", default_value = "s3", value_enum)]
    pub repo_type: RepoKind,

    /// Access key for the storage backend
    #[arg(long = "repo-auth-access-key", value_name = "KEY")]
    pub repo_auth_access_key: Option<String>,

    /// Secret key for the storage backend
    #[arg(long = "repo-auth-secret-key", value_name = "KEY")]
    pub repo_auth_secret_key: Option<String>,

    /// Region of the storage backend
    #[arg(long = "repo-region", default_value = "eu-west-1", value_name = "REGION")]
    pub repo_region: String,

    /// Talk to Elasticsearch over HTTPS
    #[arg(
        long = "use-ssl",
        default_value_t = true,
        action = ArgAction::Set,
        value_name = "BOOL"
    )]
    pub use_ssl: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_args() {
        let args = Args::try_parse_from(["es-snapshotter", "--action", "snapshot"]).unwrap();
        assert!(!args.debug);
        assert_eq!(args.action, "snapshot");
        assert!(args.bucket_name.is_empty());
        assert!(args.elastic_url.is_empty());
    }

    #[test]
    fn test_parse_debug_flag() {
        let args =
            Args::try_parse_from(["es-snapshotter", "--debug", "--action", "snapshot"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["es-snapshotter"]).unwrap();
        assert_eq!(args.repo_type, RepoKind::S3);
        assert_eq!(args.repo_region, "eu-west-1");
        assert!(args.use_ssl);
        assert!(args.action.is_empty());
    }

    #[test]
    fn test_bucket_name_alias() {
        let args =
            Args::try_parse_from(["es-snapshotter", "--s3-bucket-name", "backups"]).unwrap();
        assert_eq!(args.bucket_name, "backups");
    }

    #[test]
    fn test_parse_repo_type() {
        let args = Args::try_parse_from(["es-snapshotter", "--repo-type", "azure"]).unwrap();
        assert_eq!(args.repo_type, RepoKind::Azure);

        let result = Args::try_parse_from(["es-snapshotter", "--repo-type", "tape"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_use_ssl() {
        let args = Args::try_parse_from(["es-snapshotter", "--use-ssl", "false"]).unwrap();
        assert!(!args.use_ssl);
    }
}
