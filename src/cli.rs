use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Stitch - declarative deployment builder
#[derive(Parser, Debug)]
#[command(name = "stitch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable output (NDJSON events for `check`)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a manifest and print the exchange JSON
    Export {
        #[command(flatten)]
        target: ManifestArgs,

        /// Pretty-print (default when stdout is a terminal)
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Build a manifest and report every validation problem
    Check {
        #[command(flatten)]
        target: ManifestArgs,
    },
}

/// Manifest path plus the deployment option overrides shared by all commands
#[derive(Args, Debug, Clone)]
pub struct ManifestArgs {
    /// Path to the manifest (.toml, .yaml, .yml or .json)
    pub manifest: PathBuf,

    /// Override the deployment namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Override the maximum machine price
    #[arg(long)]
    pub max_price: Option<f64>,
}
