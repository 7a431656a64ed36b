//! Accrued and claimable rewards for a user's positions.

use alloy_primitives::U256;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{MathError, Result};
use crate::incentive::accrued::{calculate_accrued_incentives, AccruedIncentivesRequest};
use crate::math::{ray_div, u256_to_decimal};
use crate::types::{
    BalanceType, ReserveIncentiveData, UserIncentiveData, UserIncentiveDict, UserIncentiveRecord,
    UserReserveCalculationData, UserReserveIncentiveData, UserReserveIncentives,
};

/// Inputs for [`calculate_user_reserve_incentives`].
#[derive(Debug, Clone, Copy)]
pub struct UserReserveIncentiveRequest<'a> {
    pub reserve_incentives: &'a ReserveIncentiveData,
    pub user_reserve_incentives: &'a UserReserveIncentiveData,
    /// `None` when the user holds no position in the reserve
    pub user_reserve_data: Option<&'a UserReserveCalculationData>,
    pub current_timestamp: u64,
}

/// Newly accrued rewards on the deposit, variable debt and stable debt
/// balances of one user reserve.
///
/// Deposits are normalized against `totalLiquidity / liquidityIndex`; debts
/// use the stored scaled totals. Fails if the liquidity index is zero.
pub fn calculate_user_reserve_incentives(
    request: &UserReserveIncentiveRequest<'_>,
) -> Result<UserReserveIncentives> {
    let Some(user_reserve) = request.user_reserve_data else {
        return Ok(UserReserveIncentives::default());
    };

    let total_deposits = ray_div(user_reserve.total_liquidity, user_reserve.liquidity_index)?;

    let accrued_for = |balance: BalanceType, total_supply: U256| -> Result<Decimal> {
        let stream = request.reserve_incentives.stream(balance);
        let checkpoint = request.user_reserve_incentives.checkpoint(balance);
        calculate_accrued_incentives(&AccruedIncentivesRequest {
            principal_user_balance: user_reserve.user_balance(balance),
            reserve_index: stream.token_incentives_index,
            user_index: checkpoint.token_incentives_user_index,
            precision: stream.precision,
            reward_token_decimals: stream.reward_token_decimals,
            reserve_index_timestamp: stream.incentives_last_update_timestamp,
            emission_per_second: stream.emission_per_second,
            total_supply,
            current_timestamp: request.current_timestamp,
            emission_end_timestamp: stream.emission_end_timestamp,
        })
    };

    Ok(UserReserveIncentives {
        l_incentives: accrued_for(BalanceType::Deposit, total_deposits)?,
        vd_incentives: accrued_for(
            BalanceType::VariableDebt,
            user_reserve.total_scaled_variable_debt,
        )?,
        sd_incentives: accrued_for(
            BalanceType::StableDebt,
            user_reserve.total_principal_stable_debt,
        )?,
    })
}

/// Inputs for [`calculate_all_user_incentives`].
#[derive(Debug, Clone, Copy)]
pub struct AllUserIncentivesRequest<'a> {
    pub reserve_incentives: &'a [ReserveIncentiveData],
    pub user_reserve_incentives: &'a [UserReserveIncentiveData],
    pub user_reserves: &'a [UserReserveCalculationData],
    pub current_timestamp: u64,
}

/// One record per balance type for every user reserve with reserve-level
/// incentive data, in input order.
pub fn calculate_user_incentive_records(
    request: &AllUserIncentivesRequest<'_>,
) -> Result<Vec<UserIncentiveRecord>> {
    let mut records = Vec::with_capacity(request.user_reserve_incentives.len() * 3);

    for user_incentives in request.user_reserve_incentives {
        let asset = user_incentives.underlying_asset;
        let Some(reserve_incentives) = request
            .reserve_incentives
            .iter()
            .find(|r| r.underlying_asset == asset)
        else {
            debug!(%asset, "no reserve incentives for user reserve, skipping");
            continue;
        };
        let user_reserve_data = request
            .user_reserves
            .iter()
            .find(|r| r.underlying_asset == asset);

        let accrued = calculate_user_reserve_incentives(&UserReserveIncentiveRequest {
            reserve_incentives,
            user_reserve_incentives: user_incentives,
            user_reserve_data,
            current_timestamp: request.current_timestamp,
        })?;

        for balance in BalanceType::ALL {
            let checkpoint = user_incentives.checkpoint(balance);
            records.push(UserIncentiveRecord {
                token_address: checkpoint.token_address,
                incentive_controller: checkpoint.incentive_controller_address,
                reward_token_address: checkpoint.reward_token_address,
                reward_token_decimals: checkpoint.reward_token_decimals,
                accrued_rewards: accrued.for_balance(balance),
                unclaimed_rewards: u256_to_decimal(checkpoint.user_unclaimed_rewards)?,
            });
        }
    }

    Ok(records)
}

/// Claimable rewards per incentive controller.
///
/// The first record seen for a controller seeds its claimable amount with the
/// checkpoint's unclaimed rewards. Every record with new accrual adds it and
/// lists its token as a contributing asset.
pub fn calculate_all_user_incentives(
    request: &AllUserIncentivesRequest<'_>,
) -> Result<UserIncentiveDict> {
    let records = calculate_user_incentive_records(request)?;
    let mut dict = UserIncentiveDict::new();

    for record in records {
        let entry = dict
            .entry(record.incentive_controller)
            .or_insert_with(|| UserIncentiveData {
                reward_token_address: record.reward_token_address,
                reward_token_decimals: record.reward_token_decimals,
                claimable_rewards: record.unclaimed_rewards,
                assets: Vec::new(),
            });

        if record.accrued_rewards > Decimal::ZERO {
            entry.claimable_rewards = entry
                .claimable_rewards
                .checked_add(record.accrued_rewards)
                .ok_or(MathError::Overflow {
                    operation: "claimable rewards",
                })?;
            entry.assets.push(record.token_address);
        }
    }

    Ok(dict)
}
