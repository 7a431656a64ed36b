//! Table formatting for incentive results.

use alloy_primitives::Address;
use colored::Colorize;
use lending_rs_math::{BalanceType, ReserveIncentiveDict, UserIncentiveDict};
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct ReserveIncentiveRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Deposit APR")]
    deposit_apr: String,
    #[tabled(rename = "Variable Debt APR")]
    variable_debt_apr: String,
    #[tabled(rename = "Stable Debt APR")]
    stable_debt_apr: String,
    #[tabled(rename = "Reward Token")]
    reward_token: String,
}

#[derive(Tabled)]
struct UserIncentiveRow {
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "Reward Token")]
    reward_token: String,
    #[tabled(rename = "Claimable")]
    claimable: String,
    #[tabled(rename = "Claimable (raw)")]
    claimable_raw: String,
    #[tabled(rename = "Assets")]
    assets: usize,
}

fn truncate_address(addr: &Address) -> String {
    let addr = format!("{:#x}", addr);
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}

fn format_apr(apr: Decimal) -> String {
    match apr.checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => format!("{}%", percent.round_dp(2).normalize()),
        // Percentage does not fit a Decimal
        None => format!("{}x", apr.round_dp(2).normalize()),
    }
}

pub fn format_reserve_incentives_table(dict: &ReserveIncentiveDict) -> String {
    if dict.is_empty() {
        return "No incentivized reserves found.".to_string();
    }

    let mut entries: Vec<_> = dict.values().collect();
    entries.sort_by_key(|e| e.underlying_asset);

    let rows: Vec<ReserveIncentiveRow> = entries
        .into_iter()
        .map(|e| {
            // Streams without a reward token are left blank
            let reward_token = BalanceType::ALL
                .iter()
                .map(|b| e.for_balance(*b).reward_token_address)
                .find(|a| !a.is_zero())
                .map_or_else(|| "-".to_string(), |a| truncate_address(&a));

            ReserveIncentiveRow {
                asset: truncate_address(&e.underlying_asset),
                deposit_apr: format_apr(e.l_incentives_data.incentive_apr),
                variable_debt_apr: format_apr(e.vd_incentives_data.incentive_apr),
                stable_debt_apr: format_apr(e.sd_incentives_data.incentive_apr),
                reward_token,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    table.to_string()
}

pub fn format_user_incentives_table(dict: &UserIncentiveDict) -> String {
    if dict.is_empty() {
        return "No claimable rewards found.".to_string();
    }

    let mut entries: Vec<_> = dict.iter().collect();
    entries.sort_by_key(|(controller, _)| **controller);

    let total_assets: usize = entries.iter().map(|(_, d)| d.assets.len()).sum();

    let rows: Vec<UserIncentiveRow> = entries
        .into_iter()
        .map(|(controller, data)| UserIncentiveRow {
            controller: truncate_address(controller),
            reward_token: truncate_address(&data.reward_token_address),
            claimable: data.claimable_rewards_normalized().normalize().to_string(),
            claimable_raw: data.claimable_rewards.normalize().to_string(),
            assets: data.assets.len(),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()));

    let mut output = String::new();
    output.push_str(&format!(
        "{} {} controller(s), {} accruing asset(s)\n",
        "Claimable rewards:".cyan().bold(),
        dict.len(),
        total_assets
    ));
    output.push_str(&table.to_string());
    output
}
