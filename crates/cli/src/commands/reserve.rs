//! Reserve incentives command implementation.

use anyhow::{Context, Result};
use lending_rs_math::{calculate_all_reserve_incentives, ReserveCalculationData, ReserveIncentiveData};
use tracing::{debug, info};

use crate::cli::{OutputFormat, ReserveIncentivesArgs};
use crate::commands::input::load_json;
use crate::output::{format_reserve_incentives_table, reserve_incentives_json};

pub fn run_reserve_incentives(args: &ReserveIncentivesArgs, format: OutputFormat) -> Result<()> {
    let reserves: Vec<ReserveCalculationData> = load_json(&args.reserves)?;
    let incentives: Vec<ReserveIncentiveData> = load_json(&args.incentives)?;
    let aliases = args.aliases();
    if aliases.is_empty() {
        debug!("reward prices resolved without aliases");
    } else {
        debug!(aliases = aliases.len(), "reward price aliases in effect");
    }

    let dict = calculate_all_reserve_incentives(&incentives, &reserves, &aliases)
        .context("Failed to compute reserve incentives")?;
    info!(
        reserves = reserves.len(),
        incentivized = dict.len(),
        "computed reserve incentive APRs"
    );

    match format {
        OutputFormat::Table => {
            println!("{}", format_reserve_incentives_table(&dict));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reserve_incentives_json(&dict))?;
            println!("{}", json);
        }
    }

    Ok(())
}
