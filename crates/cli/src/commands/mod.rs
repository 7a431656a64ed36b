//! Command implementations.

pub mod input;
pub mod reserve;
pub mod user;

pub use reserve::run_reserve_incentives;
pub use user::run_user_incentives;
