//! Command-line tests for the `negative-countdown` binary.
//!
//! Only the non-GUI paths are exercised here: `--print-config`, `--help`
//! and argument errors.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("negative-countdown").unwrap()
}

fn print_config_json(args: &[&str]) -> serde_json::Value {
    let output = bin().arg("--print-config").args(args).output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// --print-config
// ============================================================================

#[test]
fn print_config_reads_the_given_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timer.txt");
    std::fs::write(&path, "# talk\n1 # minutes\n30\n\n0\n45\nzero.wav\nlimit.wav\n").unwrap();

    let value = print_config_json(&["--config", path.to_str().unwrap()]);

    assert_eq!(value["start_seconds"], 90);
    assert_eq!(value["limit_seconds"], 45);
    assert_eq!(value["sound_zero_path"], "zero.wav");
    assert_eq!(value["sound_limit_path"], "limit.wav");
}

#[test]
fn print_config_without_file_shows_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let value = print_config_json(&["-c", path.to_str().unwrap()]);

    assert_eq!(value["start_seconds"], 10);
    assert_eq!(value["limit_seconds"], 10);
    assert!(value.get("sound_zero_path").is_none());
    assert!(value.get("sound_limit_path").is_none());
}

#[test]
fn print_config_uses_config_txt_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.txt"), "2\n0\n").unwrap();

    let output = bin()
        .current_dir(dir.path())
        .arg("--print-config")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["start_seconds"], 120);
    // Present file: missing fields are 0, not the absent-file defaults.
    assert_eq!(value["limit_seconds"], 0);
}

// ============================================================================
// Help and argument errors
// ============================================================================

#[test]
fn help_mentions_fullscreen_shortcut() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alt+Enter"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn unknown_flag_fails() {
    bin()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-such-flag"));
}
