//! Stitch CLI - declarative deployment builder
//!
//! Usage: stitch <COMMAND>
//!
//! Commands:
//!   export  Build a manifest and print the exchange JSON
//!   check   Build a manifest and report every validation problem

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Export {
            target,
            pretty,
            compact,
        } => {
            let pretty = match (pretty, compact) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::export::cmd_export(&target, pretty)
        }
        Commands::Check { target } => commands::check::cmd_check(&target, cli.json),
    }
}

/// Logs go to stderr so stdout stays a clean JSON stream.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();
}
