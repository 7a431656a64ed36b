//! JSON views keyed by lower-case hex address.

use std::collections::BTreeMap;

use alloy_primitives::Address;
use lending_rs_math::{
    CalculatedReserveIncentives, ReserveIncentiveDict, UserIncentiveData, UserIncentiveDict,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Claimable rewards of one controller, with the human-unit amount alongside.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIncentiveView<'a> {
    pub reward_token_address: Address,
    pub reward_token_decimals: u8,
    pub claimable_rewards: Decimal,
    pub claimable_rewards_normalized: Decimal,
    pub assets: &'a [Address],
}

impl<'a> From<&'a UserIncentiveData> for UserIncentiveView<'a> {
    fn from(data: &'a UserIncentiveData) -> Self {
        Self {
            reward_token_address: data.reward_token_address,
            reward_token_decimals: data.reward_token_decimals,
            claimable_rewards: data.claimable_rewards.normalize(),
            claimable_rewards_normalized: data.claimable_rewards_normalized().normalize(),
            assets: &data.assets,
        }
    }
}

fn key(address: &Address) -> String {
    format!("{:#x}", address)
}

pub fn reserve_incentives_json(
    dict: &ReserveIncentiveDict,
) -> BTreeMap<String, &CalculatedReserveIncentives> {
    dict.iter().map(|(asset, e)| (key(asset), e)).collect()
}

pub fn user_incentives_json(dict: &UserIncentiveDict) -> BTreeMap<String, UserIncentiveView<'_>> {
    dict.iter()
        .map(|(controller, data)| (key(controller), UserIncentiveView::from(data)))
        .collect()
}
