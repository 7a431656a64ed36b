//! User incentives command implementation.

use anyhow::{Context, Result};
use lending_rs_math::{
    calculate_all_user_incentives, AllUserIncentivesRequest, ReserveIncentiveData,
    UserReserveCalculationData, UserReserveIncentiveData,
};
use tracing::info;

use crate::cli::{OutputFormat, UserIncentivesArgs};
use crate::commands::input::{load_json, resolve_timestamp};
use crate::output::{format_user_incentives_table, user_incentives_json};

pub fn run_user_incentives(args: &UserIncentivesArgs, format: OutputFormat) -> Result<()> {
    let reserve_incentives: Vec<ReserveIncentiveData> = load_json(&args.reserve_incentives)?;
    let user_reserve_incentives: Vec<UserReserveIncentiveData> =
        load_json(&args.user_incentives)?;
    let user_reserves: Vec<UserReserveCalculationData> = load_json(&args.user_reserves)?;
    let current_timestamp = resolve_timestamp(args.timestamp)?;

    let dict = calculate_all_user_incentives(&AllUserIncentivesRequest {
        reserve_incentives: &reserve_incentives,
        user_reserve_incentives: &user_reserve_incentives,
        user_reserves: &user_reserves,
        current_timestamp,
    })
    .context("Failed to compute user incentives")?;
    info!(
        current_timestamp,
        controllers = dict.len(),
        "computed claimable rewards"
    );

    match format {
        OutputFormat::Table => {
            println!("{}", format_user_incentives_table(&dict));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&user_incentives_json(&dict))?;
            println!("{}", json);
        }
    }

    Ok(())
}
