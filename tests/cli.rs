//! Process-level tests for the CLI surface
//!
//! Only exercises paths that never reach the network: argument errors,
//! startup validation, and the permissive unknown-action no-op.

use assert_cmd::Command;
use predicates::prelude::*;

fn snapshotter() -> Command {
    Command::cargo_bin("es-snapshotter").unwrap()
}

#[test]
fn missing_bucket_name_exits_nonzero() {
    snapshotter()
        .args(["--action", "snapshot", "--elastic-url", "es.example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bucket name"));
}

#[test]
fn missing_elastic_url_exits_nonzero() {
    snapshotter()
        .args(["--action", "snapshot", "--bucket-name", "backups"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Elasticsearch URL"));
}

#[test]
fn unrecognized_action_is_a_noop() {
    snapshotter()
        .args([
            "--action",
            "restore-everything",
            "--bucket-name",
            "backups",
            "--elastic-url",
            "es.example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("not recognized"));
}

#[test]
fn empty_action_is_a_noop() {
    snapshotter()
        .args(["--bucket-name", "backups", "--elastic-url", "es.example.com"])
        .assert()
        .success();
}

#[test]
fn invalid_repo_type_is_a_usage_error() {
    snapshotter()
        .args([
            "--action",
            "create-repository",
            "--bucket-name",
            "backups",
            "--elastic-url",
            "es.example.com",
            "--repo-type",
            "tape",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repo-type"));
}

#[test]
fn help_lists_the_flags() {
    snapshotter()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--action")
                .and(predicate::str::contains("--bucket-name"))
                .and(predicate::str::contains("--elastic-url"))
                .and(predicate::str::contains("--repo-type"))
                .and(predicate::str::contains("--use-ssl")),
        );
}
