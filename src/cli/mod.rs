//! CLI argument parsing for flightpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

mod args;
mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{PlanArgs, RouteArgs};
pub use flightpath_core::format::OutputFormat;
use parse::parse_format;

/// Flightpath - every simple route between two cities, ranked by cost or time
#[derive(Parser, Debug)]
#[command(name = "flightpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, flightpath_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Planner config file (defaults to ~/.config/flightpath/config.toml)
    #[arg(long, global = true, env = "FLIGHTPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer every request in a request file and write the flight report
    Plan(PlanArgs),

    /// Find the best routes between two cities
    Route(RouteArgs),
}
