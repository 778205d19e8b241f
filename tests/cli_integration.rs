//! CLI integration tests.
//!
//! These tests verify argument parsing, configuration loading and command
//! execution without spawning the binary.

use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

use jwt_session::cli::{parse_args_from, run, Args, Command};
use jwt_session::config::Config;
use jwt_session::JwtSessionError;

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("jwt-session")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

fn config_with_secret(secret: &str) -> Config {
    let args = Args {
        secret: Some(secret.to_string()),
        ..Args::default()
    };
    let mut config = Config::default();
    config.apply_args(&args);
    config
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(result.command.is_none());
    assert!(result.config.is_none());
    assert!(result.secret.is_none());
    assert!(result.token.is_none());
    assert!(!result.help);
    assert!(!result.version);
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "-s", "my-secret", "-a", "HS384", "-l", "debug", "write", "-t", "x.y.z", "-k", "cart",
        "-v", "[1,2]",
    ]))
    .unwrap();

    assert_eq!(result.command, Some(Command::Write));
    assert_eq!(result.secret.as_deref(), Some("my-secret"));
    assert_eq!(result.algorithm.as_deref(), Some("HS384"));
    assert_eq!(result.log_level.as_deref(), Some("debug"));
    assert_eq!(result.token.as_deref(), Some("x.y.z"));
    assert_eq!(result.key.as_deref(), Some("cart"));
    assert_eq!(result.value.as_deref(), Some("[1,2]"));
}

#[test]
fn test_cli_negative_number_value() {
    let result = parse_args_from(args(&["write", "-k", "n", "-v", "-1"])).unwrap();
    assert_eq!(result.value.as_deref(), Some("-1"));
}

#[test]
fn test_cli_unknown_command() {
    assert!(parse_args_from(args(&["purge"])).is_err());
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_file_then_args() {
    let json = r#"{
        "strategy": { "secret": "file-secret", "algorithm": "HS512" },
        "logging": { "level": "warn" }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let mut config = Config::from_file(file.path()).unwrap();
    let args = Args {
        secret: Some("cli-secret".into()),
        ..Args::default()
    };
    config.apply_args(&args);

    assert_eq!(config.strategy.secret.as_deref(), Some("cli-secret"));
    assert_eq!(config.strategy.algorithm.as_deref(), Some("HS512"));
    assert_eq!(config.log_filter(), "warn");
}

// ============================================================================
// Command Execution Tests
// ============================================================================

#[test]
fn test_session_across_invocations() {
    let config = config_with_secret("cli-secret");

    let first = parse_args_from(args(&["write", "-k", "user", "-v", "alice"])).unwrap();
    let token = run(&first, &config).unwrap().unwrap();

    let second =
        parse_args_from(args(&["write", "-t", &token, "-k", "cart", "-v", "[1, 2]"])).unwrap();
    let token = run(&second, &config).unwrap().unwrap();

    let read = parse_args_from(args(&["read", "-t", &token])).unwrap();
    let output = run(&read, &config).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value, serde_json::json!({"user": "alice", "cart": [1, 2]}));
}

#[test]
fn test_clearing_last_key_prints_nothing() {
    let config = config_with_secret("cli-secret");

    let write = parse_args_from(args(&["write", "-k", "user", "-v", "alice"])).unwrap();
    let token = run(&write, &config).unwrap().unwrap();

    let clear =
        parse_args_from(args(&["write", "-t", &token, "-k", "user", "-v", "null"])).unwrap();
    assert_eq!(run(&clear, &config).unwrap(), None);
}

#[test]
fn test_read_with_wrong_secret() {
    let write = parse_args_from(args(&["write", "-k", "user", "-v", "alice"])).unwrap();
    let token = run(&write, &config_with_secret("first")).unwrap().unwrap();

    let read = parse_args_from(args(&["read", "-t", &token, "-k", "user"])).unwrap();
    let output = run(&read, &config_with_secret("second")).unwrap();
    assert_eq!(output.as_deref(), Some("null"));
}

#[test]
fn test_write_without_key() {
    let write = parse_args_from(args(&["write", "-v", "1"])).unwrap();
    let result = run(&write, &config_with_secret("s"));
    assert!(matches!(result, Err(JwtSessionError::MissingKey)));
}
