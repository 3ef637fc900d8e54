//! Integration tests for the Bookfinder CLI

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("bookfinder-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("languages"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("bookfinder-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookfinder"));
}

#[test]
fn test_search_help() {
    let mut cmd = Command::cargo_bin("bookfinder-cli").unwrap();
    cmd.args(["search", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Search the catalog"))
        .stdout(predicate::str::contains("--sort"))
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--page"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_search_rejects_bad_sort_key() {
    let mut cmd = Command::cargo_bin("bookfinder-cli").unwrap();
    cmd.args(["search", "dune", "--sort", "rating"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid sort key"));
}

#[test]
fn test_search_rejects_page_zero() {
    let mut cmd = Command::cargo_bin("bookfinder-cli").unwrap();
    cmd.args(["search", "dune", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page must be at least 1"));
}

#[test]
fn test_languages_lists_known_codes() {
    // Offline command: no catalog call involved
    let mut cmd = Command::cargo_bin("bookfinder-cli").unwrap();
    cmd.arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("eng  English"))
        .stdout(predicate::str::contains("mar  Marathi"));
}

#[test]
fn test_languages_json_output() {
    let mut cmd = Command::cargo_bin("bookfinder-cli").unwrap();
    cmd.args(["languages", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"code\": \"eng\""))
        .stdout(predicate::str::contains("\"label\": \"English\""));
}
