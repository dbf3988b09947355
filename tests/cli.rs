use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("advoc")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui").and(predicate::str::contains("list")));
}

#[test]
fn version_flag_prints_package_version() {
    Command::cargo_bin("advoc")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn list_against_unreachable_endpoint_fails_with_message() {
    Command::cargo_bin("advoc")
        .unwrap()
        .env_remove("ADVOCATE_API_URL")
        .args(["--url", "http://127.0.0.1:1/api/advocates", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load advocates"));
}

#[test]
fn list_rejects_unknown_format() {
    Command::cargo_bin("advoc")
        .unwrap()
        .args(["list", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
