use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Rockdry wet/dry estimator for outdoor climbing rock.
#[derive(Parser)]
#[command(
    name = "rockdry",
    version,
    about = "Estimate whether climbing rock is dry enough to climb"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the drying verdict for a location.
    Location(LocationArgs),
    /// Refine a location verdict for each of its boulders.
    Boulders(BouldersArgs),
}

/// Arguments for the `location` subcommand.
#[derive(clap::Args)]
pub struct LocationArgs {
    /// Path to the location request JSON.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for the status JSON. Written to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `boulders` subcommand.
#[derive(clap::Args)]
pub struct BouldersArgs {
    /// Path to the boulder request JSON.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for the boulder statuses JSON. Written to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip forecast replay even when the request carries a forecast.
    #[arg(long)]
    pub no_forecast: bool,
}
