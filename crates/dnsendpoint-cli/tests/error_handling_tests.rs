//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dnsendpoint() -> Command {
    let mut cmd = Command::cargo_bin("dnsendpoint").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn missing_path_is_not_found() {
    let temp = TempDir::new().unwrap();

    dnsendpoint()
        .arg("validate")
        .arg(temp.path().join("absent.yaml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cannot read manifests"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn directory_without_manifests_is_not_found() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("notes.txt"), "hello").unwrap();

    dnsendpoint()
        .arg("validate")
        .arg(temp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No DNSEndpoint resources found"));
}

#[test]
fn malformed_manifest_is_user_error() {
    dnsendpoint()
        .args(["validate", "-"])
        .write_stdin("kind: DNSEndpoint\nspec:\n  endpoints:\n    - recordTTL: soon\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed manifest <stdin>#0"));
}

#[test]
fn stdin_cannot_be_mixed_with_paths() {
    dnsendpoint()
        .args(["validate", "-", "other.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    dnsendpoint()
        .arg("--config")
        .arg(temp.path().join("absent.toml"))
        .arg("types")
        .assert()
        .code(4);
}

#[test]
fn unknown_config_key_suggests_init() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "").unwrap();

    dnsendpoint()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"))
        .stderr(predicate::str::contains("init"));
}

#[test]
fn bad_dns_name_suggestion_mentions_rfc_1123() {
    dnsendpoint()
        .args([
            "check", "--name", "Bad_Name", "--type", "A", "--ttl", "60",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("DNSName: Invalid value: \"Bad_Name\""))
        .stderr(predicate::str::contains("RFC 1123"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    dnsendpoint().arg("frobnicate").assert().code(2);
}
