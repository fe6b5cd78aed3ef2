//! End-to-end tests for the vignette binary.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn vignette() -> Command {
    Command::cargo_bin("vignette").expect("binary builds")
}

#[test]
fn test_list_names_every_demo() {
    vignette()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ema"))
        .stdout(predicate::str::contains("potts"))
        .stdout(predicate::str::contains("business-forecast"));
}

#[test]
fn test_run_prints_a_report() {
    vignette()
        .args(["run", "ema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exponential moving average"));
}

#[test]
fn test_run_unknown_demo_fails() {
    vignette()
        .args(["run", "no-such-demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown demo"));
}

#[test]
fn test_json_output_parses() {
    let output = vignette()
        .args(["--format", "json", "run", "max-subarray"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be JSON");
    assert_eq!(value["title"], "Maximum subarray sum");
}

#[test]
fn test_run_is_deterministic_for_a_seed() {
    let first = vignette()
        .args(["run", "potts", "--seed", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = vignette()
        .args(["run", "potts", "--seed", "9"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(first, second);
}

#[test]
fn test_describe() {
    vignette()
        .args(["describe", "dtw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("time warping"));
}

#[test]
fn test_run_all_json_is_an_array() {
    let output = vignette()
        .args(["--format", "json", "run-all", "--seed", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be JSON");
    assert_eq!(value.as_array().map(Vec::len), Some(16));
}
