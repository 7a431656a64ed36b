//! Reward token price resolution.

use std::collections::HashMap;

use alloy_primitives::{address, Address, U256};
use tracing::trace;

use crate::types::{IncentiveData, ReserveCalculationData};

/// stkAAVE, which has no reserve of its own
pub const STK_AAVE: Address = address!("4da27a545c0c5b758a6ba100e3a049001de870f5");
/// AAVE, the asset stkAAVE is priced as
pub const AAVE: Address = address!("7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9");

/// Reward tokens priced through another asset's reserve.
///
/// A wrapped or staked reward token usually has no reserve of its own; an
/// alias points it at the reserve whose price it tracks. The default table
/// carries the protocol's stkAAVE -> AAVE alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardPriceAliases {
    aliases: HashMap<Address, Address>,
}

impl Default for RewardPriceAliases {
    fn default() -> Self {
        Self::empty().with_alias(STK_AAVE, AAVE)
    }
}

impl RewardPriceAliases {
    /// Table with no aliases
    pub fn empty() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    /// Price `reward_token` through the reserve of `priced_as`
    pub fn with_alias(mut self, reward_token: Address, priced_as: Address) -> Self {
        self.aliases.insert(reward_token, priced_as);
        self
    }

    /// Address whose reserve prices `reward_token`
    pub fn resolve(&self, reward_token: Address) -> Address {
        self.aliases
            .get(&reward_token)
            .copied()
            .unwrap_or(reward_token)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl From<HashMap<Address, Address>> for RewardPriceAliases {
    fn from(aliases: HashMap<Address, Address>) -> Self {
        Self { aliases }
    }
}

impl Extend<(Address, Address)> for RewardPriceAliases {
    fn extend<T: IntoIterator<Item = (Address, Address)>>(&mut self, iter: T) {
        self.aliases.extend(iter);
    }
}

/// Price of a stream's reward token in market reference currency.
///
/// Looks up the reserve of the (possibly aliased) reward token and falls back
/// to the stream's own price feed. A zero result means the price is unknown.
pub fn resolve_reward_price(
    stream: &IncentiveData,
    reserves: &[ReserveCalculationData],
    aliases: &RewardPriceAliases,
) -> U256 {
    let lookup = aliases.resolve(stream.reward_token_address);

    match reserves.iter().find(|r| r.underlying_asset == lookup) {
        Some(reserve) => {
            trace!(reward_token = %stream.reward_token_address, reserve = %lookup, "reward price from reserve");
            reserve.price_in_market_reference_currency
        }
        None => {
            trace!(reward_token = %stream.reward_token_address, "reward price from price feed");
            stream.price_feed
        }
    }
}
