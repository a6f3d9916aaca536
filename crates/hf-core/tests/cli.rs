//! End-to-end CLI tests.
//!
//! Only attributes that resolve without spawning external lookup tools are
//! exercised, so the suite stays hermetic on any Linux builder.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn hostfetch() -> Command {
    let mut cmd = Command::cargo_bin("hostfetch").expect("binary builds");
    // Keep the environment from steering config resolution.
    cmd.env_remove("HOSTFETCH_CONFIG");
    cmd.env_remove("HOSTFETCH_CONFIG_DIR");
    cmd
}

#[test]
fn help_mentions_subcommands() {
    hostfetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostfetch"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn list_prints_attribute_ids() {
    hostfetch()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostname"))
        .stdout(predicate::str::contains("gtk_theme"))
        .stdout(predicate::str::contains("public_ip"));
}

#[test]
fn version_subcommand() {
    hostfetch()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hostfetch 0.1.0"));
}

#[test]
fn check_without_config_uses_builtin_defaults() {
    hostfetch()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"));
}

#[test]
fn check_reports_explicit_config_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[report]\nseparator = \"==\"").unwrap();

    hostfetch()
        .arg("--config")
        .arg(file.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("config ok"))
        .stdout(predicate::str::contains("CLI argument"));
}

#[test]
fn check_rejects_invalid_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[labels]\nwarp_drive = \"Warp\"").unwrap();

    hostfetch()
        .arg("--config")
        .arg(file.path())
        .arg("check")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("warp_drive"));
}

#[test]
fn report_renders_selected_attributes() {
    hostfetch()
        .args(["--attrs", "hostname,kernel,uptime", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hostname"))
        .stdout(predicate::str::contains("Kernel"))
        .stdout(predicate::str::contains("Uptime"));
}

#[test]
fn report_rejects_unknown_attribute() {
    hostfetch()
        .args(["--attrs", "warp_drive"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("warp_drive"));
}

#[test]
fn json_snapshot_parses() {
    let output = hostfetch()
        .args(["--format", "json", "--attrs", "kernel,uptime"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snapshot: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let attributes = snapshot["attributes"].as_array().unwrap();
    assert_eq!(attributes.len(), 2);
    assert_eq!(attributes[0]["id"], "kernel");
    assert_eq!(attributes[0]["outcome"], "resolved");
    assert!(snapshot["collected_at"].is_string());
}

#[test]
fn label_override_from_config_applies() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[labels]\nkernel = \"Kernel Release\"").unwrap();

    hostfetch()
        .arg("--config")
        .arg(file.path())
        .args(["--attrs", "kernel", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kernel Release"));
}
