//! User incentives command tests.

use predicates::prelude::*;

use super::helpers::{fixture_path, lending_cmd, stdout_json, FIXTURE_TIMESTAMP};

const CONTROLLER: &str = "0x357d51124f59836ded84c8a1730d72b749d8bc23";
const A_WETH: &str = "0x28424507fefb6f7f8e9d3860f56504e4e5f5f390";

fn user_incentives_args() -> Vec<String> {
    vec![
        "user-incentives".to_string(),
        "--reserve-incentives".to_string(),
        fixture_path("reserve_incentives"),
        "--user-incentives".to_string(),
        fixture_path("user_incentives"),
        "--user-reserves".to_string(),
        fixture_path("user_reserves"),
    ]
}

#[test]
fn test_user_incentives_json() {
    let output = lending_cmd()
        .args(["--format", "json"])
        .args(user_incentives_args())
        .args(["--timestamp", FIXTURE_TIMESTAMP])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json.as_object().unwrap().len(), 1);

    let entry = &json[CONTROLLER];
    assert_eq!(entry["claimableRewards"], "2457377182565319.5");
    assert_eq!(entry["claimableRewardsNormalized"], "0.0024573771825653195");
    assert_eq!(entry["rewardTokenDecimals"], 18);

    let assets = entry["assets"].as_array().unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].as_str().unwrap().to_lowercase(), A_WETH);
}

#[test]
fn test_user_incentives_timestamp_from_env() {
    let output = lending_cmd()
        .env("LENDING_TIMESTAMP", FIXTURE_TIMESTAMP)
        .args(["--format", "json"])
        .args(user_incentives_args())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json[CONTROLLER]["claimableRewards"], "2457377182565319.5");
}

#[test]
fn test_user_incentives_no_time_elapsed() {
    // At the last index update only the stored index delta accrues
    let output = lending_cmd()
        .args(["--format", "json"])
        .args(user_incentives_args())
        .args(["--timestamp", "1631587511"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output.stdout);
    assert_eq!(json[CONTROLLER]["claimableRewards"], "1572721396841804.48");
}

#[test]
fn test_user_incentives_table() {
    lending_cmd()
        .args(user_incentives_args())
        .args(["--timestamp", FIXTURE_TIMESTAMP])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 controller(s), 1 accruing asset(s)"))
        .stdout(predicate::str::contains("0x357d...bc23"))
        .stdout(predicate::str::contains("0.0024573771825653195"));
}

#[test]
fn test_user_incentives_invalid_timestamp() {
    lending_cmd()
        .args(user_incentives_args())
        .args(["--timestamp", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
