//! Output formatting for CLI results.

pub mod json;
pub mod table;

pub use json::{reserve_incentives_json, user_incentives_json};
pub use table::{format_reserve_incentives_table, format_user_incentives_table};
