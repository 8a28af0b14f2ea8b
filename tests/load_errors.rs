use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_info_missing_file_fails_cleanly() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("lyrsync")
        .env("LYRSYNC_HOME", dir.path())
        .args(["info", "/nonexistent/lyrics.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read lyrics"));
}

#[test]
fn test_info_malformed_json_fails_cleanly() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bad.json");
    fs::write(&file, "{definitely not json").unwrap();

    cargo_bin_cmd!("lyrsync")
        .env("LYRSYNC_HOME", dir.path())
        .args(["info", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse lyrics"));
}

#[test]
fn test_play_without_terminal_refuses() {
    // stdout is piped here, so play must refuse before touching the screen.
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("lyrsync")
        .env("LYRSYNC_HOME", dir.path())
        .args(["play", "/nonexistent/lyrics.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
