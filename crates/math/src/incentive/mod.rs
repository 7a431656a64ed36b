//! Incentive APR and reward accrual calculations.
//!
//! Leaf calculators ([`accrued`], [`apr`]) work on a single stream. The
//! aggregators ([`reserve`], [`user`]) fan them out over the three balance
//! types of a reserve and over a whole market or user.

pub mod accrued;
pub mod apr;
pub mod price;
pub mod reserve;
pub mod user;

pub use accrued::{calculate_accrued_incentives, AccruedIncentivesRequest};
pub use apr::{calculate_incentive_apr, IncentiveAprRequest};
pub use price::{resolve_reward_price, RewardPriceAliases, AAVE, STK_AAVE};
pub use reserve::{
    calculate_all_reserve_incentives, calculate_reserve_incentives, ReserveIncentiveRequest,
    RewardTokenPrices,
};
pub use user::{
    calculate_all_user_incentives, calculate_user_incentive_records,
    calculate_user_reserve_incentives, AllUserIncentivesRequest, UserReserveIncentiveRequest,
};
