use std::path::PathBuf;

use clap::Args;
use flightpath_core::graph::RankBy;

use super::parse::parse_rank_by;

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Connection file: a count line, then `source|destination|cost|time` records
    pub flight_data: PathBuf,

    /// Request file: a count line, then `source|destination|T|C` records
    pub requested_flights: PathBuf,

    /// Report destination (stdout when omitted)
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Departure city
    pub from: String,

    /// Arrival city
    pub to: String,

    /// Connection file to load
    #[arg(long, short)]
    pub data: PathBuf,

    /// Rank by cost or time (defaults to the configured ranking)
    #[arg(long, short, value_parser = parse_rank_by)]
    pub by: Option<RankBy>,

    /// Number of routes to show (defaults to the configured max_paths)
    #[arg(long, short)]
    pub limit: Option<usize>,
}
