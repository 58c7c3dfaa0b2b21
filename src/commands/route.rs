//! Single route query command
use std::io;

use flightpath_core::bail_usage;
use flightpath_core::config::PlannerConfig;
use flightpath_core::error::Result;
use flightpath_core::loading::load_graph;
use flightpath_core::planner::{Planner, Query};

use crate::cli::{Cli, RouteArgs};
use crate::commands::write_outcomes;

/// Execute the route command
pub fn execute(cli: &Cli, config: &PlannerConfig, args: &RouteArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(config.max_paths);
    if limit == 0 {
        bail_usage!("--limit must be at least 1");
    }
    let rank_by = args.by.unwrap_or(config.default_rank);

    let graph = load_graph(&args.data)?;
    if graph.lookup_index(&args.from).is_none() {
        tracing::warn!(city = %args.from, "departure city does not appear in the flight data");
    }

    let query = Query::new(args.from.as_str(), args.to.as_str(), rank_by);
    let outcome = Planner::new(&graph).plan(&query, limit);

    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_outcomes(&mut lock, cli.format, "route", std::slice::from_ref(&outcome))
}
