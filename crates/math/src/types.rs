//! Snapshot and result types for incentive calculations.
//!
//! Snapshot types mirror the JSON the chain client produces (camelCase,
//! integers as decimal strings) so they deserialize without a mapping layer.
//! Addresses are typed, which makes every lookup and dictionary key
//! case-insensitive.

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::math::normalize;

/// Reserve balance a reward stream pays out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceType {
    /// Supplied liquidity (lToken holders)
    Deposit,
    /// Variable-rate debt
    VariableDebt,
    /// Stable-rate debt
    StableDebt,
}

impl BalanceType {
    /// All balance types, in output order.
    pub const ALL: [BalanceType; 3] = [
        BalanceType::Deposit,
        BalanceType::VariableDebt,
        BalanceType::StableDebt,
    ];
}

/// Reserve-level reward emission stream for one balance type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentiveData {
    /// Reward token base units emitted per second
    #[serde(with = "serde_u256")]
    pub emission_per_second: U256,
    /// Unix time the on-chain index was last updated
    pub incentives_last_update_timestamp: u64,
    /// Cumulative reward index at `incentives_last_update_timestamp`
    #[serde(with = "serde_u256")]
    pub token_incentives_index: U256,
    /// Unix time emission stops; zero means no end configured
    pub emission_end_timestamp: u64,
    /// Rewarded token (lToken or debt token)
    pub token_address: Address,
    /// Token paid out as reward
    pub reward_token_address: Address,
    /// Controller distributing this stream
    pub incentive_controller_address: Address,
    /// Decimals of the reward token
    pub reward_token_decimals: u8,
    /// Decimals of the index domain
    pub precision: u8,
    /// Fallback reward token price from the price feed adapter
    #[serde(default, with = "serde_u256")]
    pub price_feed: U256,
}

/// Reward streams for all three balance types of a reserve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveIncentiveData {
    pub underlying_asset: Address,
    pub l_incentive_data: IncentiveData,
    pub vd_incentive_data: IncentiveData,
    pub sd_incentive_data: IncentiveData,
}

impl ReserveIncentiveData {
    /// Stream paying out on `balance`.
    pub fn stream(&self, balance: BalanceType) -> &IncentiveData {
        match balance {
            BalanceType::Deposit => &self.l_incentive_data,
            BalanceType::VariableDebt => &self.vd_incentive_data,
            BalanceType::StableDebt => &self.sd_incentive_data,
        }
    }
}

/// A user's reward checkpoint for one balance type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIncentiveCheckpoint {
    /// Reserve index the user last accrued at
    #[serde(with = "serde_u256")]
    pub token_incentives_user_index: U256,
    /// Rewards accrued but not claimed, in reward token base units
    #[serde(with = "serde_u256")]
    pub user_unclaimed_rewards: U256,
    pub token_address: Address,
    pub reward_token_address: Address,
    pub incentive_controller_address: Address,
    pub reward_token_decimals: u8,
}

/// A user's reward checkpoints for all three balance types of a reserve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReserveIncentiveData {
    pub underlying_asset: Address,
    pub l_token_incentives_user_data: UserIncentiveCheckpoint,
    pub vd_token_incentives_user_data: UserIncentiveCheckpoint,
    pub sd_token_incentives_user_data: UserIncentiveCheckpoint,
}

impl UserReserveIncentiveData {
    /// Checkpoint for `balance`.
    pub fn checkpoint(&self, balance: BalanceType) -> &UserIncentiveCheckpoint {
        match balance {
            BalanceType::Deposit => &self.l_token_incentives_user_data,
            BalanceType::VariableDebt => &self.vd_token_incentives_user_data,
            BalanceType::StableDebt => &self.sd_token_incentives_user_data,
        }
    }
}

/// Reserve totals and price needed for APR calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveCalculationData {
    pub underlying_asset: Address,
    #[serde(with = "serde_u256")]
    pub total_liquidity: U256,
    #[serde(with = "serde_u256")]
    pub total_variable_debt: U256,
    #[serde(with = "serde_u256")]
    pub total_stable_debt: U256,
    #[serde(with = "serde_u256")]
    pub price_in_market_reference_currency: U256,
    pub decimals: u8,
}

impl ReserveCalculationData {
    /// Reserve total for `balance`, in asset base units.
    pub fn total_for(&self, balance: BalanceType) -> U256 {
        match balance {
            BalanceType::Deposit => self.total_liquidity,
            BalanceType::VariableDebt => self.total_variable_debt,
            BalanceType::StableDebt => self.total_stable_debt,
        }
    }
}

/// A user's balances in a reserve plus the reserve totals that normalize them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReserveCalculationData {
    pub underlying_asset: Address,
    #[serde(with = "serde_u256")]
    pub scaled_l_token_balance: U256,
    #[serde(with = "serde_u256")]
    pub scaled_variable_debt: U256,
    #[serde(with = "serde_u256")]
    pub principal_stable_debt: U256,
    #[serde(with = "serde_u256")]
    pub total_liquidity: U256,
    /// Ray-scaled liquidity index
    #[serde(with = "serde_u256")]
    pub liquidity_index: U256,
    #[serde(with = "serde_u256")]
    pub total_scaled_variable_debt: U256,
    #[serde(with = "serde_u256")]
    pub total_principal_stable_debt: U256,
}

impl UserReserveCalculationData {
    /// The user's raw balance for `balance`.
    pub fn user_balance(&self, balance: BalanceType) -> U256 {
        match balance {
            BalanceType::Deposit => self.scaled_l_token_balance,
            BalanceType::VariableDebt => self.scaled_variable_debt,
            BalanceType::StableDebt => self.principal_stable_debt,
        }
    }
}

/// APR of one reward stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveIncentiveApr {
    /// Yield ratio, not a percentage
    #[serde(rename = "incentiveAPR")]
    pub incentive_apr: Decimal,
    pub reward_token_address: Address,
}

/// APRs for all three balance types of a reserve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedReserveIncentives {
    pub underlying_asset: Address,
    pub l_incentives_data: ReserveIncentiveApr,
    pub vd_incentives_data: ReserveIncentiveApr,
    pub sd_incentives_data: ReserveIncentiveApr,
}

impl CalculatedReserveIncentives {
    /// APR entry for `balance`.
    pub fn for_balance(&self, balance: BalanceType) -> &ReserveIncentiveApr {
        match balance {
            BalanceType::Deposit => &self.l_incentives_data,
            BalanceType::VariableDebt => &self.vd_incentives_data,
            BalanceType::StableDebt => &self.sd_incentives_data,
        }
    }
}

/// Newly accrued rewards for one user reserve, in reward token base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReserveIncentives {
    pub l_incentives: Decimal,
    pub vd_incentives: Decimal,
    pub sd_incentives: Decimal,
}

impl UserReserveIncentives {
    /// Accrual for `balance`.
    pub fn for_balance(&self, balance: BalanceType) -> Decimal {
        match balance {
            BalanceType::Deposit => self.l_incentives,
            BalanceType::VariableDebt => self.vd_incentives,
            BalanceType::StableDebt => self.sd_incentives,
        }
    }
}

/// One accrual row, before grouping by incentive controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIncentiveRecord {
    pub token_address: Address,
    pub incentive_controller: Address,
    pub reward_token_address: Address,
    pub reward_token_decimals: u8,
    pub accrued_rewards: Decimal,
    pub unclaimed_rewards: Decimal,
}

/// Claimable rewards from one incentive controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIncentiveData {
    pub reward_token_address: Address,
    pub reward_token_decimals: u8,
    /// Unclaimed plus newly accrued, in reward token base units
    pub claimable_rewards: Decimal,
    /// Tokens that accrued new rewards
    pub assets: Vec<Address>,
}

impl UserIncentiveData {
    /// Claimable rewards in human units of the reward token.
    pub fn claimable_rewards_normalized(&self) -> Decimal {
        normalize(self.claimable_rewards, self.reward_token_decimals)
    }
}

/// Reserve APRs keyed by underlying asset.
pub type ReserveIncentiveDict = HashMap<Address, CalculatedReserveIncentives>;

/// Claimable rewards keyed by incentive controller.
pub type UserIncentiveDict = HashMap<Address, UserIncentiveData>;

/// Serde adapter for `U256` as a decimal string.
///
/// Accepts decimal strings, `0x` hex strings and plain JSON integers.
pub mod serde_u256 {
    use std::str::FromStr;

    use alloy_primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => U256::from_str(text.trim()).map_err(de::Error::custom),
            Raw::Number(number) => Ok(U256::from(number)),
        }
    }
}
