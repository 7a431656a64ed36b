//! Annualized yield of a reward emission stream.

use alloy_primitives::U256;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::math::{checked_product, pow10, ratio_to_decimal, widen, DECIMAL_PLACES, SECONDS_PER_YEAR};

/// Inputs for [`calculate_incentive_apr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncentiveAprRequest {
    /// Reward token base units emitted per second
    pub emission_per_second: U256,
    /// Zero means the reward token has no known price
    pub reward_token_price_in_market_reference_currency: U256,
    /// Price of the rewarded asset
    pub price_in_market_reference_currency: U256,
    /// Total of the rewarded balance, in asset base units
    pub total_token_supply: U256,
    /// Decimals of the rewarded asset
    pub decimals: u8,
    pub reward_token_decimals: u8,
}

/// Yearly reward value divided by the value of the rewarded balance.
///
/// The result is a ratio (0.05 = 5%), rounded half up at 20 fractional
/// digits. Any zero among supply, emission or prices yields zero.
pub fn calculate_incentive_apr(request: &IncentiveAprRequest) -> Result<Decimal> {
    if request.total_token_supply.is_zero()
        || request.emission_per_second.is_zero()
        || request.reward_token_price_in_market_reference_currency.is_zero()
        || request.price_in_market_reference_currency.is_zero()
    {
        return Ok(Decimal::ZERO);
    }

    // emission / 10^rewardDecimals * rewardPrice * year
    //   / (supply / 10^decimals * price)
    let numerator = checked_product(
        &[
            widen(request.emission_per_second),
            widen(request.reward_token_price_in_market_reference_currency),
            widen(U256::from(SECONDS_PER_YEAR)),
            pow10(u32::from(request.decimals))?,
        ],
        "incentive apr",
    )?;
    let denominator = checked_product(
        &[
            widen(request.total_token_supply),
            widen(request.price_in_market_reference_currency),
            pow10(u32::from(request.reward_token_decimals))?,
        ],
        "incentive apr",
    )?;

    ratio_to_decimal(numerator, denominator, DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::uint;
    use rust_decimal_macros::dec;

    const WMATIC_PRICE: U256 = uint!(498_035_657_442_060_U256);

    fn wmatic_deposit_request() -> IncentiveAprRequest {
        IncentiveAprRequest {
            emission_per_second: uint!(198_333_333_333_333_000_U256),
            reward_token_price_in_market_reference_currency: WMATIC_PRICE,
            price_in_market_reference_currency: WMATIC_PRICE,
            total_token_supply: uint!(180_815_889_047_065_180_300_000_000_U256),
            decimals: 18,
            reward_token_decimals: 18,
        }
    }

    #[test]
    fn test_wmatic_deposit_apr() {
        let apr = calculate_incentive_apr(&wmatic_deposit_request()).unwrap();
        assert_eq!(apr.to_string(), "0.03459120784662872218");
    }

    #[test]
    fn test_wmatic_variable_debt_apr_with_feed_price() {
        let request = IncentiveAprRequest {
            emission_per_second: uint!(22_037_037_037_037_000_U256),
            reward_token_price_in_market_reference_currency: uint!(500_000_000_000_000_U256),
            total_token_supply: uint!(30_186_360_792_775_159_250_000_000_U256),
            ..wmatic_deposit_request()
        };
        let apr = calculate_incentive_apr(&request).unwrap();
        assert_eq!(apr.to_string(), "0.02311312226442694815");
    }

    #[test]
    fn test_usdc_six_decimal_asset() {
        let request = IncentiveAprRequest {
            emission_per_second: uint!(2_331_136_965_363_621_U256),
            reward_token_price_in_market_reference_currency: WMATIC_PRICE,
            price_in_market_reference_currency: uint!(282_293_286_250_000_U256),
            total_token_supply: uint!(15_384_220_000_477_U256),
            decimals: 6,
            reward_token_decimals: 18,
        };
        let apr = calculate_incentive_apr(&request).unwrap();
        assert_eq!(apr.to_string(), "0.00843060621664143574");
    }

    #[test]
    fn test_zero_emission_is_zero() {
        let request = IncentiveAprRequest {
            emission_per_second: U256::ZERO,
            ..wmatic_deposit_request()
        };
        assert_eq!(calculate_incentive_apr(&request).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_supply_is_zero() {
        let request = IncentiveAprRequest {
            total_token_supply: U256::ZERO,
            ..wmatic_deposit_request()
        };
        assert_eq!(calculate_incentive_apr(&request).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_reward_price_is_zero() {
        let request = IncentiveAprRequest {
            reward_token_price_in_market_reference_currency: U256::ZERO,
            ..wmatic_deposit_request()
        };
        let apr = calculate_incentive_apr(&request).unwrap();
        assert_eq!(apr, Decimal::ZERO);
        assert_eq!(apr.to_string(), "0");
    }

    #[test]
    fn test_zero_asset_price_is_zero() {
        let request = IncentiveAprRequest {
            price_in_market_reference_currency: U256::ZERO,
            ..wmatic_deposit_request()
        };
        assert_eq!(calculate_incentive_apr(&request).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_simple_ratio() {
        // 1 token/s at equal prices over 31_536_000 tokens of supply = 100%
        let request = IncentiveAprRequest {
            emission_per_second: U256::from(1_000_000u64),
            reward_token_price_in_market_reference_currency: U256::from(1u8),
            price_in_market_reference_currency: U256::from(1u8),
            total_token_supply: U256::from(SECONDS_PER_YEAR) * U256::from(1_000_000u64),
            decimals: 6,
            reward_token_decimals: 6,
        };
        assert_eq!(calculate_incentive_apr(&request).unwrap(), dec!(1));
    }

    #[test]
    fn test_apr_never_uses_scientific_notation() {
        let request = IncentiveAprRequest {
            emission_per_second: U256::from(1u8),
            total_token_supply: uint!(1_000_000_000_000_000_000_000_000_000_U256),
            ..wmatic_deposit_request()
        };
        let apr = calculate_incentive_apr(&request).unwrap();
        let text = apr.to_string();
        assert!(!text.contains('e'));
        assert_eq!(text, "0.00000000000000000003");
    }
}
