//! Process-level CLI tests for configuration failure handling.

use assert_cmd::Command;
use predicates::prelude::*;

fn s3vec() -> Command {
    let mut cmd = Command::cargo_bin("s3vec").unwrap();
    cmd.env_remove("S3_VECTOR_BUCKET")
        .env_remove("S3_VECTOR_INDEX");
    cmd
}

#[test]
fn test_missing_config_exits_with_usage() {
    s3vec()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage: s3vec --bucket"));
}

#[test]
fn test_bucket_alone_is_not_enough() {
    s3vec()
        .args(["--bucket", "b1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("index name is required"));
}

#[test]
fn test_empty_env_values_count_as_unset() {
    s3vec()
        .env("S3_VECTOR_BUCKET", "")
        .env("S3_VECTOR_INDEX", "i1")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("bucket name is required"));
}

#[test]
fn test_help_lists_flags() {
    s3vec()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--bucket")
                .and(predicate::str::contains("--index"))
                .and(predicate::str::contains("--top-k")),
        );
}
