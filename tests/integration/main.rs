//! Integration tests for the scratch CLI
//!
//! These tests run the built binary and check what it writes to stdout.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a scratch command
fn scratch() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("scratch"))
}

// =============================================================================
// DEFAULT PROGRAM
// =============================================================================

/// With no arguments the program prints "hello" one character per line
#[test]
fn test_default_prints_hello_lines() {
    scratch().env_remove("RUST_LOG").assert().success().stdout("h\ne\nl\nl\no\n");
}

/// The discarded sum never reaches stdout or stderr
#[test]
fn test_default_is_quiet_otherwise() {
    scratch()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("12").not())
        .stderr(predicate::str::is_empty());
}

/// --json does not change the default program's output
#[test]
fn test_default_ignores_json_flag() {
    scratch().arg("--json").assert().success().stdout("h\ne\nl\nl\no\n");
}

/// Verbose logging goes to stderr and leaves stdout intact
#[test]
fn test_verbose_logs_to_stderr() {
    scratch()
        .arg("--verbose")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("h\ne\nl\nl\no\n")
        .stderr(predicate::str::contains("10 + 2 = 12"));
}

/// The config cannot change the five-line output
#[test]
fn test_default_output_is_fixed_under_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scratch.toml");
    fs::write(&path, "greeting = \"hey\"\n").unwrap();

    scratch().arg("--config").arg(&path).assert().success().stdout("h\ne\nl\nl\no\n");
}

/// Configured operands feed the discarded sum only
#[test]
fn test_default_uses_config_operands() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scratch.toml");
    fs::write(&path, "[operands]\na = 40\n").unwrap();

    scratch()
        .args(["--verbose", "--config"])
        .arg(&path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("h\ne\nl\nl\no\n")
        .stderr(predicate::str::contains("40 + 2 = 42"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    let output = scratch()
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"));

    // The OS error is reported once, as the cause
    let stderr = String::from_utf8(output.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.matches("(os error").count(), 1, "stderr: {stderr}");
}

/// Subcommands that don't use the config never read it
#[test]
fn test_subcommands_skip_config() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    scratch().arg("--config").arg(&missing).arg("version").assert().success();
    scratch()
        .arg("--config")
        .arg(&missing)
        .args(["add", "1", "2"])
        .assert()
        .success()
        .stdout("1 + 2 = 3\n");
    scratch()
        .arg("--config")
        .arg(&missing)
        .arg("spell")
        .assert()
        .success()
        .stdout("h\ne\nl\nl\no\n");
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("scratch.toml");
    fs::write(&path, "[operands\n").unwrap();

    scratch()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

// =============================================================================
// SUBCOMMANDS
// =============================================================================

#[test]
fn test_add_human() {
    scratch().args(["add", "10", "2"]).assert().success().stdout("10 + 2 = 12\n");
}

#[test]
fn test_add_negative_operands() {
    scratch().args(["add", "-3", "-4"]).assert().success().stdout("-3 + -4 = -7\n");
}

#[test]
fn test_add_json() {
    let output = scratch().args(["--json", "add", "1", "2"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "a": 1, "b": 2, "sum": 3 }));
}

#[test]
fn test_add_overflow_fails() {
    scratch()
        .args(["add", "2147483647", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overflows"));
}

#[test]
fn test_add_rejects_non_integer() {
    scratch().args(["add", "ten", "2"]).assert().failure();
}

#[test]
fn test_spell_text() {
    scratch().args(["spell", "abc"]).assert().success().stdout("a\nb\nc\n");
}

#[test]
fn test_spell_defaults_to_greeting() {
    scratch().arg("spell").assert().success().stdout("h\ne\nl\nl\no\n");
}

#[test]
fn test_spell_json() {
    scratch()
        .args(["spell", "ok", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"chars\""));
}

#[test]
fn test_version() {
    scratch()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("scratch v"));
}

#[test]
fn test_help() {
    scratch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("one character per line"));
}
