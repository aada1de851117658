// Integration tests for the repohealth CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output. None of them touch the network.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the repohealth binary.
fn repohealth() -> Command {
    Command::cargo_bin("repohealth").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    repohealth()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("repohealth"));
}

#[test]
fn cli_help_flag() {
    repohealth()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("beginner friendliness"));
}

#[test]
fn analyze_requires_repository() {
    repohealth()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn verbose_and_quiet_conflict() {
    repohealth()
        .args(["-v", "-q", "validate", "octo/demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn validate_prints_canonical_url() {
    repohealth()
        .args(["validate", "https://www.github.com/rust-lang/rust.git"])
        .assert()
        .success()
        .stdout(predicate::str::diff("https://github.com/rust-lang/rust\n"));
}

#[test]
fn validate_rejects_single_segment() {
    repohealth()
        .args(["validate", "octo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "error: Invalid URL format. Expected github.com/owner/repo",
        ));
}

#[test]
fn validate_rejects_bad_owner() {
    repohealth()
        .args(["validate", "bad--owner/demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid repository owner"));
}

#[test]
fn validate_rejects_bad_name() {
    repohealth()
        .args(["validate", "octo/.."])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid repository name"));
}

#[test]
fn analyze_rejects_invalid_identifier_before_any_request() {
    repohealth()
        .args(["analyze", "not a repo", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid"));
}
