// Copyright 2026, Battle Realms
// For licensing, see https://github.com/battle-realms/realms-deploy-rs/blob/main/licenses/COPYRIGHT.md

//! Command-line behavior that must hold before any network traffic happens.

use assert_cmd::Command;

const KEY: &str = "0x0101010101010101010101010101010101010101010101010101010101010101";

fn realms_deploy() -> Command {
    let mut cmd = Command::cargo_bin("realms-deploy").unwrap();
    cmd.env_clear();
    cmd
}

#[test]
fn help_succeeds() {
    realms_deploy().arg("--help").assert().success();
}

#[test]
fn rejects_unknown_networks() {
    let output = realms_deploy()
        .args(["deploy", "--network", "polygon"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown network"), "stderr: {stderr}");
}

#[test]
fn missing_private_key_fails_before_any_rpc() {
    // Cleared environment and an empty working directory: no PRIVATE_KEY, no
    // .env file. The run must die resolving the signer, never reaching the
    // artifact or the endpoint.
    let dir = tempfile::tempdir().unwrap();
    let output = realms_deploy()
        .current_dir(dir.path())
        .args(["deploy", "--network", "baseSepolia"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PRIVATE_KEY"), "stderr: {stderr}");
}

#[test]
fn missing_artifact_fails_after_signer_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let output = realms_deploy()
        .current_dir(dir.path())
        .args(["deploy", "--network", "baseSepolia", "--private-key", KEY])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("artifact"), "stderr: {stderr}");
}
