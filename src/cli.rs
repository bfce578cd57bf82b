use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Timestamp;
use jiff::civil::Date;

/// U.S. Drought Monitor release timeline and boundary viewer.
#[derive(Parser)]
#[command(
    name = "usdm",
    version,
    about = "U.S. Drought Monitor release timeline and boundary viewer"
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
    /// Print the latest available release date.
    Latest(LatestArgs),
    /// Print the full release-date sequence.
    Dates(DatesArgs),
    /// Fetch the boundary dataset for a release date.
    Fetch(FetchArgs),
    /// Browse the timeline interactively.
    Browse(BrowseArgs),
}

/// Arguments for the `latest` subcommand.
#[derive(clap::Args)]
pub struct LatestArgs {
    /// Resolve against this instant instead of the system clock (RFC 3339).
    #[arg(long)]
    pub now: Option<Timestamp>,
}

/// Arguments for the `dates` subcommand.
#[derive(clap::Args)]
pub struct DatesArgs {
    /// Override the sequence anchor date (default: the 2000-01-04 epoch).
    #[arg(long)]
    pub start: Option<Date>,

    /// Resolve against this instant instead of the system clock (RFC 3339).
    #[arg(long)]
    pub now: Option<Timestamp>,
}

/// Arguments for the `fetch` subcommand.
#[derive(clap::Args)]
pub struct FetchArgs {
    /// Release date to fetch (default: the latest available).
    #[arg(short, long)]
    pub date: Option<Date>,

    /// Write the raw GeoJSON payload to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Resolve against this instant instead of the system clock (RFC 3339).
    #[arg(long)]
    pub now: Option<Timestamp>,
}

/// Arguments for the `browse` subcommand.
#[derive(clap::Args)]
pub struct BrowseArgs {
    /// Resolve against this instant instead of the system clock (RFC 3339).
    #[arg(long)]
    pub now: Option<Timestamp>,

    /// Skip all network fetches; only exercise the controls.
    #[arg(long)]
    pub offline: bool,
}
