//! Lending CLI - Compute incentive APRs and claimable rewards.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{run_reserve_incentives, run_user_incentives};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::ReserveIncentives(args) => {
            run_reserve_incentives(&args, cli.format)?;
        }
        Commands::UserIncentives(args) => {
            run_user_incentives(&args, cli.format)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so table and JSON output stay clean on stdout.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
