//! Reward accrual for a single user position since its last checkpoint.

use alloy_primitives::{U256, U512};
use rust_decimal::Decimal;

use crate::error::{MathError, Result};
use crate::math::{checked_product, div_half_up, pow10, ratio_to_decimal, widen, DECIMAL_PLACES};

/// Inputs for [`calculate_accrued_incentives`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccruedIncentivesRequest {
    /// User's scaled balance in the rewarded token
    pub principal_user_balance: U256,
    /// Reserve index at `reserve_index_timestamp`
    pub reserve_index: U256,
    /// Index the user last accrued at
    pub user_index: U256,
    /// Decimals of the index domain
    pub precision: u8,
    pub reward_token_decimals: u8,
    pub reserve_index_timestamp: u64,
    pub emission_per_second: U256,
    /// Reserve-wide total of the rewarded balance, used to project the index
    pub total_supply: U256,
    pub current_timestamp: u64,
    /// Zero means emission never ends
    pub emission_end_timestamp: u64,
}

/// Rewards accrued by a position since its checkpoint, in reward token base
/// units.
///
/// The reserve index is projected forward linearly from its last on-chain
/// update, never past the emission end. A user index ahead of the projected
/// index accrues nothing.
pub fn calculate_accrued_incentives(request: &AccruedIncentivesRequest) -> Result<Decimal> {
    let index_scale = pow10(DECIMAL_PLACES)?;
    let projected = checked_product(
        &[widen(request.reserve_index), index_scale],
        "project reserve index",
    )?
    .checked_add(index_growth(request)?)
    .ok_or(MathError::Overflow {
        operation: "project reserve index",
    })?;
    let user_index = checked_product(&[widen(request.user_index), index_scale], "user index")?;

    let index_delta = projected.saturating_sub(user_index);
    if index_delta.is_zero() || request.principal_user_balance.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let precision = u32::from(request.precision);
    let numerator = checked_product(
        &[
            widen(request.principal_user_balance),
            index_delta,
            pow10(u32::from(request.reward_token_decimals))?,
        ],
        "accrued rewards",
    )?;
    let denominator = checked_product(
        &[index_scale, pow10(precision)?, pow10(precision)?],
        "accrued rewards",
    )?;

    ratio_to_decimal(numerator, denominator, DECIMAL_PLACES)
}

/// Index growth since the last update, scaled by `10^DECIMAL_PLACES` and
/// rounded half up.
fn index_growth(request: &AccruedIncentivesRequest) -> Result<U512> {
    let effective_timestamp = if request.emission_end_timestamp > 0 {
        request
            .current_timestamp
            .min(request.emission_end_timestamp)
    } else {
        request.current_timestamp
    };

    if request.total_supply.is_zero()
        || request.emission_per_second.is_zero()
        || effective_timestamp <= request.reserve_index_timestamp
    {
        return Ok(U512::ZERO);
    }

    let elapsed = effective_timestamp - request.reserve_index_timestamp;
    let emitted = checked_product(
        &[
            widen(request.emission_per_second),
            U512::from(elapsed),
            pow10(u32::from(request.precision))?,
            pow10(DECIMAL_PLACES)?,
        ],
        "index growth",
    )?;

    Ok(div_half_up(emitted, widen(request.total_supply)))
}
