//! Integration tests for the apptscan CLI

use assert_cmd::cargo;
use predicates::prelude::*;

fn apptscan() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("apptscan"))
}

#[test]
fn test_version() {
    apptscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("apptscan"));
}

#[test]
fn test_help() {
    apptscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("appointment lookup function"));
}

#[test]
fn test_missing_sources_abort_the_scan() {
    // The probed backend checkout is not present on this machine: the first
    // read fails, the run stops there, and nothing reaches stdout.
    apptscan()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("routers.ts"));
}

#[test]
fn test_missing_sources_abort_the_scan_in_json_mode() {
    apptscan()
        .arg("--json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
