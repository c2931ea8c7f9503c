//! Integration tests for the rigup binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary with mode/override variables scrubbed, so results only depend
/// on flags and the temp project.
fn rigup() -> Command {
    let mut cmd = Command::cargo_bin("rigup").unwrap();
    for var in [
        "RIGUP_MODE",
        "NODE_ENV",
        "RIGUP_PORT",
        "RIGUP_OPEN",
        "RIGUP_OUTPUT_DIR",
        "RIGUP_TEMPLATE",
        "RIGUP_ANALYZER",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn project() -> TempDir {
    TempDir::new().unwrap()
}

#[test]
fn emit_production_uses_content_hashes() {
    let dir = project();
    rigup()
        .args(["emit", "--mode", "production", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("js/[name].[contenthash].js"))
        .stdout(predicate::str::contains("css-extract"))
        .stdout(predicate::str::contains("bundle-analyzer"));
}

#[test]
fn emit_defaults_to_development() {
    let dir = project();
    rigup()
        .args(["emit", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\":\"development\""))
        .stdout(predicate::str::contains("js/[name].[hash].js"))
        .stdout(predicate::str::contains("hot-reload"))
        .stdout(predicate::str::contains("css-extract").not());
}

#[test]
fn mode_environment_variable_is_honored() {
    let dir = project();
    rigup()
        .env("NODE_ENV", "production")
        .args(["emit", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\":\"production\""));
}

#[test]
fn unknown_mode_is_rejected() {
    let dir = project();
    rigup()
        .env("RIGUP_MODE", "staging")
        .args(["emit", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn emit_writes_file_when_requested() {
    let dir = project();
    let out = dir.path().join("descriptor.json");
    rigup()
        .args(["emit", "--mode", "dev", "--pretty", "--root"])
        .arg(dir.path())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["mode"], serde_json::json!("development"));
    assert_eq!(value["dev_server"]["port"], serde_json::json!(8888));
}

#[test]
fn settings_file_overrides_port() {
    let dir = project();
    fs::write(dir.path().join("rigup.toml"), "port = 3000\n").unwrap();
    rigup()
        .args(["emit", "--mode", "dev", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"port\":3000"));
}

#[test]
fn check_passes_on_fresh_project() {
    let dir = project();
    rigup()
        .args(["check", "--mode", "production", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("internally consistent"));
}

#[test]
fn check_fs_requires_the_template() {
    let dir = project();
    rigup()
        .args(["check", "--mode", "dev", "--fs", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("template"));

    fs::create_dir_all(dir.path().join("public")).unwrap();
    fs::write(dir.path().join("public/index.html"), "<html></html>").unwrap();
    rigup()
        .args(["check", "--mode", "dev", "--fs", "--root"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn missing_root_fails_cleanly() {
    rigup()
        .args(["emit", "--root", "/definitely/not/here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found").or(predicate::str::contains("File not found")));
}
