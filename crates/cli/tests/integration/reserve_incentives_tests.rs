//! Reserve incentives command tests.

use predicates::prelude::*;

use super::helpers::{fixture_path, lending_cmd, stdout_json};

const WMATIC: &str = "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270";
const USDC: &str = "0x2791bca1f2de4661ed88a30c99a7a9449aa84174";
const WETH: &str = "0x7ceb23fd6bc0add59e62ac25578270cff1b9f619";

fn reserve_incentives_args() -> Vec<String> {
    vec![
        "reserve-incentives".to_string(),
        "--reserves".to_string(),
        fixture_path("reserves"),
        "--incentives".to_string(),
        fixture_path("reserve_incentives"),
    ]
}

#[test]
fn test_reserve_incentives_table() {
    lending_cmd()
        .args(reserve_incentives_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deposit APR"))
        .stdout(predicate::str::contains("Variable Debt APR"))
        .stdout(predicate::str::contains("3.46%"))
        .stdout(predicate::str::contains("2.31%"))
        .stdout(predicate::str::contains("0.84%"))
        .stdout(predicate::str::contains("1.02%"));
}

#[test]
fn test_reserve_incentives_json() {
    let output = lending_cmd()
        .args(["--format", "json"])
        .args(reserve_incentives_args())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 2);
    // WETH has emissions but no reserve snapshot
    assert!(!map.contains_key(WETH));

    let wmatic = &json[WMATIC];
    assert_eq!(wmatic["lIncentivesData"]["incentiveAPR"], "0.03459120784662872218");
    assert_eq!(wmatic["vdIncentivesData"]["incentiveAPR"], "0.02311312226442694815");
    assert_eq!(wmatic["sdIncentivesData"]["incentiveAPR"], "0");

    let usdc = &json[USDC];
    assert_eq!(usdc["lIncentivesData"]["incentiveAPR"], "0.00843060621664143574");
    assert_eq!(usdc["vdIncentivesData"]["incentiveAPR"], "0.01015955492045879679");
}

#[test]
fn test_reserve_incentives_price_alias_overrides_reward_price() {
    // Price the WMATIC reward through USDC's reserve instead of its own
    let output = lending_cmd()
        .args(["--format", "json"])
        .args(reserve_incentives_args())
        .args(["--price-alias", &format!("{}={}", WMATIC, USDC)])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_ne!(
        json[WMATIC]["lIncentivesData"]["incentiveAPR"],
        "0.03459120784662872218"
    );
}

#[test]
fn test_reserve_incentives_missing_file() {
    lending_cmd()
        .args([
            "reserve-incentives",
            "--reserves",
            "/nonexistent/reserves.json",
            "--incentives",
            &fixture_path("reserve_incentives"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_reserve_incentives_wrong_snapshot_shape() {
    // A user reserve file is not a reserve snapshot
    lending_cmd()
        .args([
            "reserve-incentives",
            "--reserves",
            &fixture_path("user_incentives"),
            "--incentives",
            &fixture_path("reserve_incentives"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
