//! Integration tests for CLI commands.
//!
//! Every test runs in a scratch directory with the user config disabled so
//! stray stepwise.toml files cannot leak in.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stepwise(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stepwise").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn lines(values: impl IntoIterator<Item = i64>) -> String {
    values.into_iter().map(|v| format!("{v}\n")).collect()
}

// ============================================================================
// Range Command
// ============================================================================

#[test]
fn range_defaults_to_zero_through_ninety_nine() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config"])
        .assert()
        .success()
        .stdout(lines(0..100));
}

#[test]
fn range_with_all_flags() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args([
            "range",
            "--no-user-config",
            "--first",
            "10",
            "--last",
            "20",
            "--step",
            "3",
        ])
        .assert()
        .success()
        .stdout("10\n13\n16\n19\n");
}

#[test]
fn range_with_defaulted_first() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config", "--last", "20", "--step", "4"])
        .assert()
        .success()
        .stdout("0\n4\n8\n12\n16\n");
}

#[test]
fn range_accepts_negative_step() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args([
            "range",
            "--no-user-config",
            "--first",
            "3",
            "--last",
            "-3",
            "--step",
            "-2",
        ])
        .assert()
        .success()
        .stdout("3\n1\n-1\n");
}

#[test]
fn range_json_format() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args([
            "range",
            "--no-user-config",
            "--first",
            "10",
            "--last",
            "20",
            "--step",
            "3",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout("[10,13,16,19]\n");
}

#[test]
fn range_empty_when_first_past_last() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config", "--first", "50", "--last", "10"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn range_zero_step_fails() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("step of zero"));
}

#[test]
fn range_rejects_non_integer_flag() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config", "--step", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ============================================================================
// Layered Settings
// ============================================================================

#[test]
fn range_reads_project_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("stepwise.toml"),
        "[range]\nfirst = 5\nlast = 8\n",
    )
    .unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config"])
        .assert()
        .success()
        .stdout("5\n6\n7\n");
}

#[test]
fn flags_override_project_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("stepwise.toml"),
        "[range]\nfirst = 5\nlast = 8\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config", "--last", "7", "--format", "lines"])
        .assert()
        .success()
        .stdout("5\n6\n");
}

#[test]
fn config_dir_flag_points_at_other_directory() {
    let dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("stepwise.toml"), "[range]\nlast = 3\n").unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config", "--config-dir"])
        .arg(project.path())
        .assert()
        .success()
        .stdout("0\n1\n2\n");
}

#[test]
fn environment_overrides_project_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stepwise.toml"), "[range]\nlast = 50\n").unwrap();

    stepwise(&dir)
        .env("STEPWISE_RANGE_LAST", "2")
        .args(["range", "--no-user-config"])
        .assert()
        .success()
        .stdout("0\n1\n");
}

#[test]
fn invalid_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stepwise.toml"), "[range]\nstep = \"fast\"\n").unwrap();

    stepwise(&dir)
        .args(["range", "--no-user-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings"));
}

#[test]
fn config_command_shows_merged_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("stepwise.toml"), "[range]\nstep = 4\n").unwrap();

    stepwise(&dir)
        .args(["config", "--no-user-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"step\": 4"))
        .stdout(predicate::str::contains("\"last\": 100"))
        .stdout(predicate::str::contains("\"format\": \"lines\""));
}

// ============================================================================
// Count Command
// ============================================================================

#[test]
fn count_takes_requested_values() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args(["count", "--take", "5"])
        .assert()
        .success()
        .stdout("0\n1\n2\n3\n4\n");
}

#[test]
fn count_from_start_as_json() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .args(["count", "--take", "3", "--start", "-1", "--format", "json"])
        .assert()
        .success()
        .stdout("[-1,0,1]\n");
}

#[test]
fn count_requires_take() {
    let dir = TempDir::new().unwrap();

    stepwise(&dir)
        .arg("count")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
