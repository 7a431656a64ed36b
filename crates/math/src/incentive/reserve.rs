//! Incentive APRs per reserve and across a market.

use alloy_primitives::U256;
use tracing::debug;

use crate::error::Result;
use crate::incentive::apr::{calculate_incentive_apr, IncentiveAprRequest};
use crate::incentive::price::{resolve_reward_price, RewardPriceAliases};
use crate::types::{
    BalanceType, CalculatedReserveIncentives, ReserveCalculationData, ReserveIncentiveApr,
    ReserveIncentiveData, ReserveIncentiveDict,
};

/// Reward token prices for the three streams of a reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardTokenPrices {
    pub deposit: U256,
    pub variable_debt: U256,
    pub stable_debt: U256,
}

impl RewardTokenPrices {
    /// Price for the stream paying out on `balance`.
    pub fn for_balance(&self, balance: BalanceType) -> U256 {
        match balance {
            BalanceType::Deposit => self.deposit,
            BalanceType::VariableDebt => self.variable_debt,
            BalanceType::StableDebt => self.stable_debt,
        }
    }

    /// Resolve all three prices against the market's reserves.
    pub fn resolve(
        incentives: &ReserveIncentiveData,
        reserves: &[ReserveCalculationData],
        aliases: &RewardPriceAliases,
    ) -> Self {
        let price =
            |balance| resolve_reward_price(incentives.stream(balance), reserves, aliases);
        Self {
            deposit: price(BalanceType::Deposit),
            variable_debt: price(BalanceType::VariableDebt),
            stable_debt: price(BalanceType::StableDebt),
        }
    }
}

/// Inputs for [`calculate_reserve_incentives`].
#[derive(Debug, Clone, Copy)]
pub struct ReserveIncentiveRequest<'a> {
    pub reserve_incentive_data: &'a ReserveIncentiveData,
    pub reserve: &'a ReserveCalculationData,
    pub reward_token_prices: RewardTokenPrices,
}

/// APRs for the deposit, variable debt and stable debt streams of a reserve.
///
/// Each stream uses its own emission and reward token price, priced against
/// the matching reserve total and the reserve's own price and decimals.
pub fn calculate_reserve_incentives(
    request: &ReserveIncentiveRequest<'_>,
) -> Result<CalculatedReserveIncentives> {
    let apr_for = |balance: BalanceType| -> Result<ReserveIncentiveApr> {
        let stream = request.reserve_incentive_data.stream(balance);
        let incentive_apr = calculate_incentive_apr(&IncentiveAprRequest {
            emission_per_second: stream.emission_per_second,
            reward_token_price_in_market_reference_currency: request
                .reward_token_prices
                .for_balance(balance),
            price_in_market_reference_currency: request.reserve.price_in_market_reference_currency,
            total_token_supply: request.reserve.total_for(balance),
            decimals: request.reserve.decimals,
            reward_token_decimals: stream.reward_token_decimals,
        })?;
        Ok(ReserveIncentiveApr {
            incentive_apr,
            reward_token_address: stream.reward_token_address,
        })
    };

    Ok(CalculatedReserveIncentives {
        underlying_asset: request.reserve_incentive_data.underlying_asset,
        l_incentives_data: apr_for(BalanceType::Deposit)?,
        vd_incentives_data: apr_for(BalanceType::VariableDebt)?,
        sd_incentives_data: apr_for(BalanceType::StableDebt)?,
    })
}

/// APRs for every reserve with incentive data, keyed by underlying asset.
///
/// Incentive entries without a matching reserve are left out of the result.
pub fn calculate_all_reserve_incentives(
    reserve_incentives: &[ReserveIncentiveData],
    reserves: &[ReserveCalculationData],
    aliases: &RewardPriceAliases,
) -> Result<ReserveIncentiveDict> {
    let mut dict = ReserveIncentiveDict::with_capacity(reserve_incentives.len());

    for incentives in reserve_incentives {
        let Some(reserve) = reserves
            .iter()
            .find(|r| r.underlying_asset == incentives.underlying_asset)
        else {
            debug!(asset = %incentives.underlying_asset, "no reserve data for incentives, skipping");
            continue;
        };

        let calculated = calculate_reserve_incentives(&ReserveIncentiveRequest {
            reserve_incentive_data: incentives,
            reserve,
            reward_token_prices: RewardTokenPrices::resolve(incentives, reserves, aliases),
        })?;
        dict.insert(incentives.underlying_asset, calculated);
    }

    Ok(dict)
}
