//! Configuration integration tests.
//!
//! Run the compiled binary from temporary directories and read the
//! effective configuration back through `info --json`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("READEASE_METRICS")
        .env_remove("READEASE_LOG_LEVEL")
        .env_remove("READEASE_SIMPLIFIER__COMMAND");
    cmd
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["metrics"], false);
    assert_eq!(json["config"]["simplifier"], "passthrough");
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readease.toml"), "metrics = true\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["metrics"], true);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".readease.toml"), "{reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("chapters").join("one");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("readease.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
    assert!(json["config"]["config_file"].as_str().is_some());
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readease.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("readease.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".readease.toml"), "max_input_bytes = 10\n").unwrap();
    fs::write(sub_dir.join(".readease.toml"), "max_input_bytes = 20\n").unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["max_input_bytes"], 20);
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".readease.toml"), r#"log_level = "error""#).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);

    assert_eq!(json["config"]["log_level"], "info");
    assert!(json["config"]["config_file"].is_null());
}

// =============================================================================
// Formats
// =============================================================================

#[test]
fn parses_yaml_simplifier_section() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readease.yaml"),
        "simplifier:\n  command: simplify-cli\n  args: [\"--model\", \"small\"]\n  per_sentence: false\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["simplifier"], "simplify-cli --model small");
    assert_eq!(json["config"]["per_sentence"], false);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readease.json"),
        r#"{"disable_input_limit": true, "simplifier": {"command": "cat"}}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert!(json["config"]["max_input_bytes"].is_null());
    assert_eq!(json["config"]["per_sentence"], true);
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readease.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join(".readease.yml"), "log_level: warn\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Explicit files and environment
// =============================================================================

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readease.toml"), "metrics = false\n").unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "metrics = true\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["metrics"], true);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "{reported}");
}

#[test]
fn environment_overrides_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readease.toml"),
        "[simplifier]\ncommand = \"from-file\"\n",
    )
    .unwrap();

    let output = cmd()
        .env("READEASE_SIMPLIFIER__COMMAND", "from-env")
        .env("READEASE_METRICS", "true")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["simplifier"], "from-env");
    assert_eq!(json["config"]["metrics"], true);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readease.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn invalid_json_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".readease.json"), "{not valid json}").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".readease.toml"),
        "metrics = true\nfavourite_colour = \"teal\"\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["metrics"], true);
}
