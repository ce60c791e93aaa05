//! Integration tests for the delivery-tariff binary

use std::io::Write;
use std::process::{Command, ExitStatus};

fn run_cli(args: &[&str]) -> (ExitStatus, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_delivery-tariff"))
        .args(args)
        .env_remove("DELIVERY_TARIFF_FILE")
        .env_remove("DELIVERY_TARIFF_LOG")
        .output()
        .expect("Failed to execute delivery-tariff");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (output.status, stdout, stderr)
}

fn tariff_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_cmd_quote_report() {
    let (status, stdout, _) = run_cli(&["quote", "25", "small", "true", "high"]);
    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("Total: 840.00"), "stdout: {}", stdout);
}

#[test]
fn test_cmd_quote_fragile_too_far() {
    let (status, stdout, stderr) = run_cli(&["quote", "31", "small", "true", "normal"]);
    assert_eq!(status.code(), Some(1));
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("Error: Fragile cargo cannot be transported farther than 30 km"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_cmd_quote_negative_distance() {
    let (status, _, stderr) = run_cli(&["quote", "-1", "small", "false", "normal"]);
    assert_eq!(status.code(), Some(1));
    assert!(stderr.contains("Error: Distance must be a positive number."));
}

#[test]
fn test_cmd_quote_json() {
    let (status, stdout, _) = run_cli(&["quote", "5", "large", "false", "very_high", "--json"]);
    assert_eq!(status.code(), Some(0));

    let json: serde_json::Value = serde_json::from_str(&stdout).expect("quote output is JSON");
    assert_eq!(json["total"], 480.0);
    assert_eq!(json["dimensions"], "large");
    assert_eq!(json["workload"], "very_high");
    assert_eq!(json["floor_applied"], false);
}

#[test]
fn test_cmd_quote_rejects_loose_fragile_flag() {
    let (status, _, stderr) = run_cli(&["quote", "5", "small", "yes", "normal"]);
    assert_eq!(status.code(), Some(1));
    assert!(stderr.contains("Fragile must be true or false"));
}

#[test]
fn test_cmd_quote_with_tariff_file() {
    let file = tariff_file("id: cheap\nminimum_charge: 0.0\n");
    let path = file.path().to_str().unwrap();

    let (status, stdout, _) = run_cli(&["quote", "1", "small", "false", "normal", "-t", path]);
    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("Total: 150.00"), "stdout: {}", stdout);
}

#[test]
fn test_cmd_tariff_prints_standard() {
    let (status, stdout, _) = run_cli(&["tariff"]);
    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("# TARIFF HASH: sha256:"));
    assert!(stdout.contains("# SOURCE: standard"));
    assert!(stdout.contains("minimum_charge: 400"));
}

#[test]
fn test_cmd_validate_success() {
    let file = tariff_file("id: ok\nfragile_surcharge: 250.0\n");
    let (status, stdout, _) = run_cli(&["validate", file.path().to_str().unwrap()]);
    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("✓ Tariff 'ok' is valid"));
}

#[test]
fn test_cmd_validate_failure() {
    let file = tariff_file("id: bad\nminimum_charge: -10.0\n");
    let (status, stdout, stderr) = run_cli(&["validate", file.path().to_str().unwrap()]);
    assert_eq!(status.code(), Some(1));
    assert!(stdout.contains("Minimum charge"));
    assert!(stderr.contains("Error: Tariff validation failed"));
}

#[test]
fn test_cmd_schema_list() {
    let (status, stdout, _) = run_cli(&["schema", "list"]);
    assert_eq!(status.code(), Some(0));
    assert!(stdout.contains("tariff, quote, request"));
}

#[test]
fn test_cmd_schema_tariff_is_json() {
    let (status, stdout, _) = run_cli(&["schema", "tariff"]);
    assert_eq!(status.code(), Some(0));
    let schema: serde_json::Value = serde_json::from_str(&stdout).expect("schema is JSON");
    assert_eq!(schema["title"], "Delivery Tariff");
}

#[test]
fn test_unknown_command() {
    let (status, _, stderr) = run_cli(&["ship"]);
    assert_eq!(status.code(), Some(1));
    assert!(stderr.contains("Unknown command: ship"));
}
