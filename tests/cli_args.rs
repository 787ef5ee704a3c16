//! Tests for the binary's command-line surface.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn counter_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_counter-context"))
}

/// Run with a config path that does not exist so the user's file never leaks in.
fn run_isolated(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config: PathBuf = temp_dir.path().join("missing.toml");
    counter_cmd()
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("COUNTER_CONTEXT_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_flags() {
    let output = counter_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--headless"));
    assert!(stdout.contains("--mount-id"));
    assert!(stdout.contains("--unprovided"));
}

#[test]
fn test_headless_prints_label_per_press() {
    let output = run_isolated(&["--headless", "++-"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "count: 0\ncount: 1\ncount: 2\ncount: 1\n"
    );
}

#[test]
fn test_headless_accepts_leading_minus() {
    let output = run_isolated(&["--headless", "-"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "count: 0\ncount: -1\n");
}

#[test]
fn test_headless_unprovided_stays_unset() {
    let output = run_isolated(&["--unprovided", "--headless", "+-"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "count: \ncount: \ncount: \n"
    );
}

#[test]
fn test_invalid_sequence_exits_with_code_2() {
    let output = run_isolated(&["--headless", "+x"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid trigger 'x' at position 1"));
}

#[test]
fn test_invalid_override_exits_with_code_1() {
    let output = run_isolated(&["--tick-rate-ms", "1", "--headless", "+"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Tick rate"));
}

#[test]
fn test_flag_overrides_invalid_file_value() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, "[ui]\ntick_rate_ms = 1\n").expect("write config");

    let output = counter_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--tick-rate-ms", "100", "--headless", "+"])
        .env_remove("COUNTER_CONTEXT_LOG")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "count: 0\ncount: 1\n");
}

#[test]
fn test_invalid_file_value_without_override_exits_with_code_1() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, "[ui]\nmount_id = \"my root\"\n").expect("write config");

    let output = counter_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--headless", "+"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Mount id"));
}

#[test]
fn test_broken_config_file_exits_with_code_1() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, "[ui\n").expect("write config");

    let output = counter_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--headless", "+"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = run_isolated(&["--bogus"]);
    assert_eq!(output.status.code(), Some(2));
}
