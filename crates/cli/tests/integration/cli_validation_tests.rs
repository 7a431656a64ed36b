//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without reading any snapshot files.

use predicates::prelude::*;

use super::helpers::lending_cmd;

#[test]
fn test_help_output() {
    lending_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lending"))
        .stdout(predicate::str::contains("reserve-incentives"))
        .stdout(predicate::str::contains("user-incentives"));
}

#[test]
fn test_reserve_incentives_help_output() {
    lending_cmd()
        .args(["reserve-incentives", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--reserves"))
        .stdout(predicate::str::contains("--price-alias"))
        .stdout(predicate::str::contains("--no-default-aliases"));
}

#[test]
fn test_user_incentives_help_output() {
    lending_cmd()
        .args(["user-incentives", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--timestamp"))
        .stdout(predicate::str::contains("LENDING_TIMESTAMP"));
}

#[test]
fn test_invalid_command() {
    lending_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_reserve_incentives_missing_args() {
    lending_cmd()
        .arg("reserve-incentives")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_user_incentives_missing_args() {
    lending_cmd()
        .args(["user-incentives", "--reserve-incentives", "r.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_price_alias() {
    lending_cmd()
        .args([
            "reserve-incentives",
            "--reserves",
            "r.json",
            "--incentives",
            "i.json",
            "--price-alias",
            "not-an-alias",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FROM=TO"));
}

#[test]
fn test_invalid_format() {
    lending_cmd()
        .args(["--format", "xml", "reserve-incentives"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
