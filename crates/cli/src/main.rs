//! Armory command-line entry point.
//!
//! Builds ranked suits of armor from an armory file, lists pieces and imports
//! Destiny Item Manager exports.

mod commands;
mod config;
mod dirs;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Build, Import, List};
use config::CliConfig;

/// Armor loadout builder
#[derive(Parser)]
#[command(name = "armory")]
#[command(about = "Builds suits of armor from the available pieces", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the pieces in an armory file and the dominated ones
    List(List),

    /// Build and rank suits of armor
    Build(Build),

    /// Convert a DIM armor CSV export into an armory file
    Import(Import),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();
    logging::setup_logging(cli.verbose, config.log_filter.as_deref());

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Build(cmd) => cmd.execute(&config),
        Command::Import(cmd) => cmd.execute(),
    }
}
