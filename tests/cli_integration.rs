//! Integration tests for the `yp` CLI.
//!
//! Each test points `yp` at a config file inside a temp directory, runs it
//! as a subprocess, and verifies stdout, stderr and file contents.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Get the path to the built `yp` binary.
fn yp_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_yp"))
}

/// Run `yp --config <config> <args...>`
fn yp(config: &Path, args: &[&str]) -> Output {
    Command::new(yp_bin())
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("YEARPICK_CONFIG")
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run yp")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

fn write_config(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("yearpick.toml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn query_with_year_and_filters() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("missing.toml");
    let out = yp(
        &config,
        &["query", "--year", "1999", "-q", "bail", "--month", "march"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "q=bail&year=1999&month=Mar\n");
}

#[test]
fn query_ignores_malformed_year() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, "[picker]\nstart = 2010\n");
    let out = yp(&config, &["query", "--year", "20x5"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "year=2010\n");
}

#[test]
fn query_respects_start_override_and_bounds() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, "[picker]\nstart = 2010\nmin = 1800\n");
    let out = yp(&config, &["--start", "1990", "query", "--year", "1700"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "year=1990\n");
}

#[test]
fn query_uses_configured_field_name() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, "[ui]\nfield = \"decision_year\"\n");
    let out = yp(&config, &["query", "--year", "2001", "--party", "A  v.  B"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "decision_year=2001&party=A+v.+B\n");
}

#[test]
fn query_json_output() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("missing.toml");
    let out = yp(&config, &["--json", "query", "--year", "2024", "--domain", "Civil"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["year"], 2024);
    assert_eq!(value["query"], "year=2024&domain=Civil");
    assert_eq!(value["filters"]["domain"], "Civil");
}

#[test]
fn config_prints_effective_values() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, "[picker]\nstart = 1980\nchunk_size = 25\n");
    let out = yp(&config, &["config"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("start = 1980"), "{text}");
    assert!(text.contains("chunk_size = 25"), "{text}");
    assert!(text.contains("high_sentinel = 9999"), "{text}");
}

#[test]
fn config_init_writes_once() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("nested").join("yearpick.toml");

    let out = yp(&config, &["--start", "2000", "config", "--init"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).starts_with("Wrote "));
    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("start = 2000"), "{written}");

    let again = yp(&config, &["config", "--init"]);
    assert!(!again.status.success());
    assert!(stderr(&again).contains("already exists"), "{}", stderr(&again));
}

#[test]
fn invalid_config_fails_with_message() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, "[picker]\nchunk_size = 0\n");
    let out = yp(&config, &["query"]);
    assert!(!out.status.success());
    assert!(
        stderr(&out).contains("error: invalid value for chunk_size"),
        "{}",
        stderr(&out)
    );
}

#[test]
fn malformed_config_fails_with_message() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(&tmp, "[picker\n");
    let out = yp(&config, &["query"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("error: invalid config file"), "{}", stderr(&out));
}
