//! Integration tests for the dnsendpoint binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID: &str = r#"apiVersion: externaldns.nginx.org/v1
kind: DNSEndpoint
metadata:
  name: web
  namespace: prod
spec:
  endpoints:
    - dnsName: example.com
      targets: ["10.1.2.3"]
      recordType: A
      recordTTL: 3600
"#;

const BAD_TARGET: &str = r#"apiVersion: externaldns.nginx.org/v1
kind: DNSEndpoint
metadata:
  name: broken
spec:
  endpoints:
    - dnsName: example.com
      targets: ["1111.1.2.3"]
      recordType: CNAME
      recordTTL: 1800
"#;

fn dnsendpoint() -> Command {
    let mut cmd = Command::cargo_bin("dnsendpoint").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn write(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

#[test]
fn help_lists_commands() {
    dnsendpoint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn version_flag() {
    dnsendpoint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn valid_file_passes() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "web.yaml", VALID);

    dnsendpoint()
        .args(["--output-format", "plain", "validate"])
        .arg(temp.path().join("web.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("prod/web"))
        .stdout(predicate::str::contains("1 resource(s) checked, 0 invalid"));
}

#[test]
fn invalid_target_fails_with_field_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "broken.yaml", BAD_TARGET);

    dnsendpoint()
        .args(["--output-format", "plain", "validate"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "Targets: Invalid value: \"1111.1.2.3\": must be a valid IP address",
        ))
        .stderr(predicate::str::contains(
            "1 of 1 DNSEndpoint resource(s) failed validation",
        ));
}

#[test]
fn directory_reports_every_resource() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.yaml", VALID);
    write(temp.path(), "b.yaml", BAD_TARGET);
    write(temp.path(), "README.md", "not yaml: [");

    dnsendpoint()
        .args(["--output-format", "plain", "validate"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("2 resource(s) checked, 1 invalid"));
}

#[test]
fn fail_fast_stops_early() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.yaml", BAD_TARGET);
    write(temp.path(), "b.yaml", VALID);

    dnsendpoint()
        .args(["--output-format", "plain", "validate", "--fail-fast"])
        .arg(temp.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("1 resource(s) checked, 1 invalid"));
}

#[test]
fn fail_fast_from_environment() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "a.yaml", BAD_TARGET);
    write(temp.path(), "b.yaml", VALID);
    let config = temp.path().join("config.toml");
    write(temp.path(), "config.toml", "");

    dnsendpoint()
        .env("DNSENDPOINT_VALIDATE__FAIL_FAST", "true")
        .arg("--config")
        .arg(&config)
        .args(["--output-format", "plain", "validate"])
        .arg(temp.path().join("a.yaml"))
        .arg(temp.path().join("b.yaml"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("1 resource(s) checked, 1 invalid"));
}

#[test]
fn stdin_is_read_with_dash() {
    dnsendpoint()
        .args(["--output-format", "plain", "validate", "-"])
        .write_stdin(VALID)
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>#0"));
}

#[test]
fn json_report_is_machine_readable() {
    let output = dnsendpoint()
        .args(["--output-format", "json", "validate", "-"])
        .write_stdin(format!("{VALID}---\n{BAD_TARGET}"))
        .assert()
        .code(2)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["total"], 2);
    assert_eq!(report["invalid"], 1);
    assert_eq!(report["results"][1]["resource"], "broken");
    assert_eq!(report["results"][1]["error"]["field"], "Targets");
    assert_eq!(report["results"][1]["error"]["type"], "FieldValueInvalid");
}

#[test]
fn configured_json_format_applies_to_report_and_logs() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    write(temp.path(), "config.toml", "[output]\nformat = \"json\"\n");

    let assert = dnsendpoint()
        .arg("--config")
        .arg(&config)
        .args(["-vv", "validate", "-"])
        .write_stdin(VALID)
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["valid"], true);
}

#[test]
fn check_valid_endpoint() {
    dnsendpoint()
        .args([
            "--output-format",
            "plain",
            "check",
            "--name",
            "example.com",
            "--target",
            "10.1.2.3",
            "--type",
            "A",
            "--ttl",
            "3600",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn check_help_examples_pass() {
    let examples: [&[&str]; 3] = [
        &["--name", "example.com", "--target", "10.1.2.3", "--type", "A", "--ttl", "3600"],
        &[
            "--name", "api.example.com", "--target", "10.0.0.1", "--target", "10.0.0.2", "--type",
            "A", "--ttl", "300",
        ],
        &["--name", "txt.example.com", "--type", "TXT", "--ttl", "60"],
    ];

    for args in examples {
        dnsendpoint().arg("check").args(args).assert().success();
    }
}

#[test]
fn check_accepts_zero_padded_ipv4_target() {
    dnsendpoint()
        .args([
            "check", "--name", "example.com", "--target", "10.01.2.3", "--type", "A", "--ttl",
            "60",
        ])
        .assert()
        .success();
}

#[test]
fn check_reports_unsupported_record_type() {
    dnsendpoint()
        .args([
            "check", "--name", "example.com", "--type", "MX", "--ttl", "60",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "RecordType: Unsupported value: \"MX\": supported values: A, CNAME, TXT, SRV, NS, PTR",
        ));
}

#[test]
fn check_reports_non_positive_ttl() {
    dnsendpoint()
        .args([
            "check", "--name", "example.com", "--type", "A", "--ttl", "0",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "TTL: Invalid value: 0: ttl value should be > 0",
        ));
}

#[test]
fn types_lists_all_record_types() {
    dnsendpoint()
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("CNAME"))
        .stdout(predicate::str::contains("PTR"));
}

#[test]
fn init_writes_config_to_explicit_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("dns.toml");

    dnsendpoint()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[validate]"));
    assert!(written.contains("fail_fast = false"));

    dnsendpoint()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "validate.extensions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yaml,yml,json"));
}

#[test]
fn completions_for_bash() {
    dnsendpoint()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dnsendpoint"));
}
