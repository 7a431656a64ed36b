//! Lending Pool Incentive Math
//!
//! This crate turns raw on-chain snapshots of a lending pool's reward
//! emissions into human-readable metrics: incentive APRs per reserve and
//! balance type, and the rewards a user has accrued and can claim.
//!
//! # Overview
//!
//! - Ray/wad fixed-point math matching the on-chain `WadRayMath` library
//! - Incentive APR for deposit, variable debt and stable debt streams
//! - Accrued rewards projected forward from the last on-chain index update
//! - Market-wide and user-wide aggregation into lookup dictionaries
//!
//! All arithmetic is exact big-integer math; the only rounding happens at
//! division boundaries, half up. Nothing here performs I/O or reads the
//! clock: callers pass the current timestamp.
//!
//! # Example
//!
//! ```rust,ignore
//! use lending_rs_math::{calculate_all_reserve_incentives, RewardPriceAliases};
//!
//! let dict = calculate_all_reserve_incentives(
//!     &reserve_incentives,
//!     &reserves,
//!     &RewardPriceAliases::default(),
//! )?;
//!
//! for (asset, incentives) in &dict {
//!     println!("{asset}: {}", incentives.l_incentives_data.incentive_apr);
//! }
//! ```

pub mod error;
pub mod incentive;
pub mod math;
pub mod types;

// Re-export commonly used types
pub use error::{MathError, Result};

// Math exports
pub use math::{
    calc_delegate_amount, normalize, ray_div, ray_mul, ray_pow, ray_to_decimal, ray_to_wad,
    wad_div, wad_mul, wad_to_ray, DECIMAL_PLACES, HALF_RAY, HALF_WAD, RAY, SECONDS_PER_YEAR,
    WAD, WAD_RAY_RATIO,
};

// Incentive exports
pub use incentive::{
    calculate_accrued_incentives, calculate_all_reserve_incentives,
    calculate_all_user_incentives, calculate_incentive_apr, calculate_reserve_incentives,
    calculate_user_incentive_records, calculate_user_reserve_incentives, resolve_reward_price,
    AccruedIncentivesRequest, AllUserIncentivesRequest, IncentiveAprRequest,
    ReserveIncentiveRequest, RewardPriceAliases, RewardTokenPrices, UserReserveIncentiveRequest,
};

// Type exports
pub use types::{
    BalanceType, CalculatedReserveIncentives, IncentiveData, ReserveCalculationData,
    ReserveIncentiveApr, ReserveIncentiveData, ReserveIncentiveDict, UserIncentiveCheckpoint,
    UserIncentiveData, UserIncentiveDict, UserIncentiveRecord, UserReserveCalculationData,
    UserReserveIncentiveData, UserReserveIncentives,
};
