//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::Address;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lending_rs_math::RewardPriceAliases;

/// Lending CLI - Compute incentive APRs and claimable rewards
#[derive(Parser, Debug)]
#[command(name = "lending")]
#[command(about = "CLI tool for computing lending pool incentive APRs and rewards", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Incentive APRs for every reserve with reward emissions
    #[command(name = "reserve-incentives")]
    ReserveIncentives(ReserveIncentivesArgs),
    /// Claimable rewards for a user, grouped by incentive controller
    #[command(name = "user-incentives")]
    UserIncentives(UserIncentivesArgs),
}

#[derive(Parser, Debug)]
pub struct ReserveIncentivesArgs {
    /// JSON file with reserve totals and prices
    #[arg(long)]
    pub reserves: PathBuf,

    /// JSON file with reserve reward emission data
    #[arg(long)]
    pub incentives: PathBuf,

    /// Price a reward token through another asset's reserve (repeatable)
    #[arg(long = "price-alias", value_name = "FROM=TO")]
    pub price_aliases: Vec<PriceAliasArg>,

    /// Drop the built-in reward price aliases
    #[arg(long)]
    pub no_default_aliases: bool,
}

impl ReserveIncentivesArgs {
    /// Alias table from the built-in defaults plus command-line additions.
    pub fn aliases(&self) -> RewardPriceAliases {
        let mut aliases = if self.no_default_aliases {
            RewardPriceAliases::empty()
        } else {
            RewardPriceAliases::default()
        };
        aliases.extend(self.price_aliases.iter().map(|a| (a.from, a.to)));
        aliases
    }
}

#[derive(Parser, Debug)]
pub struct UserIncentivesArgs {
    /// JSON file with reserve reward emission data
    #[arg(long)]
    pub reserve_incentives: PathBuf,

    /// JSON file with the user's reward checkpoints
    #[arg(long)]
    pub user_incentives: PathBuf,

    /// JSON file with the user's reserve balances
    #[arg(long)]
    pub user_reserves: PathBuf,

    /// Unix timestamp to accrue rewards up to (default: now)
    #[arg(long, env = "LENDING_TIMESTAMP")]
    pub timestamp: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// A `FROM=TO` reward token price alias
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceAliasArg {
    pub from: Address,
    pub to: Address,
}

impl FromStr for PriceAliasArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected FROM=TO, got: {}", s))?;
        let parse = |value: &str| {
            Address::from_str(value.trim()).map_err(|e| format!("Invalid address {}: {}", value, e))
        };
        Ok(PriceAliasArg {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lending_rs_math::incentive::{AAVE, STK_AAVE};

    #[test]
    fn test_price_alias_parses() {
        let alias: PriceAliasArg = "0x1111111111111111111111111111111111111111=0x2222222222222222222222222222222222222222"
            .parse()
            .unwrap();
        assert_eq!(alias.from, Address::repeat_byte(0x11));
        assert_eq!(alias.to, Address::repeat_byte(0x22));
    }

    #[test]
    fn test_price_alias_rejects_missing_separator() {
        let err = "0x1111111111111111111111111111111111111111"
            .parse::<PriceAliasArg>()
            .unwrap_err();
        assert!(err.contains("FROM=TO"));
    }

    #[test]
    fn test_price_alias_rejects_bad_address() {
        assert!("0x11=0x22".parse::<PriceAliasArg>().is_err());
    }

    #[test]
    fn test_aliases_keep_defaults_unless_disabled() {
        let cli = Cli::parse_from([
            "lending",
            "reserve-incentives",
            "--reserves",
            "r.json",
            "--incentives",
            "i.json",
        ]);
        let Commands::ReserveIncentives(args) = cli.command else {
            unreachable!("parsed reserve-incentives");
        };
        assert_eq!(args.aliases().resolve(STK_AAVE), AAVE);
        assert!(!args.aliases().is_empty());

        let cli = Cli::parse_from([
            "lending",
            "reserve-incentives",
            "--reserves",
            "r.json",
            "--incentives",
            "i.json",
            "--no-default-aliases",
            "--price-alias",
            "0x1111111111111111111111111111111111111111=0x2222222222222222222222222222222222222222",
        ]);
        let Commands::ReserveIncentives(args) = cli.command else {
            unreachable!("parsed reserve-incentives");
        };
        let aliases = args.aliases();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.resolve(STK_AAVE), STK_AAVE);
        assert_eq!(
            aliases.resolve(Address::repeat_byte(0x11)),
            Address::repeat_byte(0x22)
        );
    }
}
