//! End-to-end CLI tests using `assert_cmd`
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        clippy::tests_outside_test_module,
        reason = "Test allows"
    )
)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Helper to get the built binary with colors and `RUST_LOG` disabled
fn cargo_bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_fathom"));
    command.arg("--no-color").env_remove("RUST_LOG");
    command
}

/// Helper to create temp dir or fail test
fn temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|err| panic!("Failed to create temp dir: {err}"))
}

#[test]
fn test_cli_help() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("evaluate"));
}

#[test]
fn test_cli_invalid_command() {
    cargo_bin().arg("invalid-command-xyz").assert().failure();
}

#[test]
fn test_route_requires_prompt() {
    cargo_bin().arg("route").assert().failure();
}

#[test]
fn test_route_simple_prompt() {
    cargo_bin()
        .args(["route", "What's 15 + 27?"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WEAK (score "));
}

#[test]
fn test_route_complex_prompt() {
    cargo_bin()
        .args([
            "route",
            "Analyze the environmental and socioeconomic impacts of transitioning to \
             renewable energy sources in developing nations",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("STRONG"));
}

#[test]
fn test_route_joins_words() {
    cargo_bin()
        .args(["route", "--json", "What", "time", "is", "it?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"prompt\": \"What time is it?\""));
}

#[test]
fn test_route_json() {
    let output = cargo_bin()
        .args(["route", "--json", "What's 15 + 27?"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["classification"], "weak");
    assert_eq!(json["features"]["character_count"], 15);
    assert!(json["score"].as_f64().unwrap() < 0.5);
    assert!(json.get("breakdown").is_none());
}

#[test]
fn test_route_json_explain() {
    let output = cargo_bin()
        .args([
            "route",
            "--json",
            "--explain",
            "Design and implement a distributed consensus algorithm that optimizes for both \
             consistency and partition tolerance in a globally distributed system",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["classification"], "strong");
    assert_eq!(
        json["matched_verbs"],
        serde_json::json!(["design", "optimize", "implement"])
    );
    assert_eq!(json["breakdown"]["cognitive_complexity"]["normalized"], 1.0);
}

#[test]
fn test_route_explain_text() {
    cargo_bin()
        .args(["route", "--explain", "Why did the Roman Empire fall?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score Breakdown:"))
        .stdout(predicate::str::contains("Nested Clauses"))
        .stdout(predicate::str::contains("Decision: WEAK"));
}

#[test]
fn test_route_blank_prompt() {
    let output = cargo_bin().args(["route", "--json", "   "]).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["classification"], "weak");
    assert_eq!(json["score"], 0.0);
}

#[test]
fn test_evaluate_builtin_corpus() {
    cargo_bin()
        .arg("evaluate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Router Test Results"))
        .stdout(predicate::str::contains("Summary: 60/61 correct (98.4% accuracy)"))
        .stdout(predicate::str::contains("Over-classified: 1"))
        .stdout(predicate::str::contains("Under-classified: 0"))
        .stdout(predicate::str::contains("Failure Analysis"));
}

#[test]
fn test_evaluate_failures_only() {
    cargo_bin()
        .args(["evaluate", "--failures-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Implement a basic todo list in React"))
        .stdout(predicate::str::contains("Set a timer").not());
}

#[test]
fn test_evaluate_filter() {
    cargo_bin()
        .args(["evaluate", "--filter", "tokyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 1/1 correct"));
}

#[test]
fn test_evaluate_filter_without_matches() {
    cargo_bin()
        .args(["evaluate", "--filter", "zzzz-no-match"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No corpus cases match"));
}

#[test]
fn test_evaluate_custom_corpus() {
    let temp = temp_dir();
    let corpus = temp.path().join("corpus.toml");
    fs::write(
        &corpus,
        r#"
[[cases]]
prompt = "Set a timer for 10 minutes"
expected_result = "WEAK"
reason = "Basic command"

[[cases]]
prompt = "Set an alarm"
expected_result = "STRONG"
reason = "Deliberately mislabelled"
"#,
    )
    .unwrap_or_else(|err| panic!("Failed to write corpus: {err}"));

    cargo_bin()
        .arg("evaluate")
        .arg("--corpus")
        .arg(&corpus)
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 1/2 correct (50.0% accuracy)"))
        .stdout(predicate::str::contains("Under-classified: 1"));
}

#[test]
fn test_evaluate_missing_corpus() {
    cargo_bin()
        .args(["evaluate", "--corpus", "/nonexistent/fathom/corpus.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read corpus file"));
}

#[test]
fn test_config_threshold_override() {
    let temp = temp_dir();
    let config = temp.path().join("router.toml");
    fs::write(&config, "threshold = 5.0\n")
        .unwrap_or_else(|err| panic!("Failed to write config: {err}"));

    cargo_bin()
        .arg("--config")
        .arg(&config)
        .args([
            "route",
            "Analyze the environmental and socioeconomic impacts of transitioning to \
             renewable energy sources in developing nations",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WEAK"))
        .stdout(predicate::str::contains("threshold 5"));
}

#[test]
fn test_config_invalid() {
    let temp = temp_dir();
    let config = temp.path().join("router.toml");
    fs::write(&config, "[ceilings]\nentropy = 0.0\n")
        .unwrap_or_else(|err| panic!("Failed to write config: {err}"));

    cargo_bin()
        .arg("--config")
        .arg(&config)
        .args(["route", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load router config"));
}
