// ABOUTME: Integration tests for the slipway CLI commands.
// ABOUTME: Validates --help output and init/release behavior without a network.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn slipway_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("slipway"))
}

#[test]
fn help_shows_commands() {
    slipway_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("release"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("slipway.yml");

    slipway_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "slipway.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("forge:"), "Config should have forge block");
    assert!(
        content.contains("scheduler:"),
        "Config should have scheduler block"
    );
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("slipway.yml");

    fs::write(&config_path, "existing: config").unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn release_without_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    slipway_cmd()
        .current_dir(temp_dir.path())
        .arg("release")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}
