//! Batch planning command
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use flightpath_core::config::PlannerConfig;
use flightpath_core::error::{FlightError, Result};
use flightpath_core::loading::{load_graph, load_queries};
use flightpath_core::planner::Planner;

use crate::cli::{Cli, PlanArgs};
use crate::commands::write_outcomes;

/// Execute the plan command
pub fn execute(cli: &Cli, config: &PlannerConfig, args: &PlanArgs) -> Result<()> {
    let start = Instant::now();

    let graph = load_graph(&args.flight_data)?;
    let queries = load_queries(&args.requested_flights)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_inputs");

    let outcomes = Planner::new(&graph).plan_all(&queries, config.max_paths);
    tracing::debug!(elapsed = ?start.elapsed(), queries = outcomes.len(), "plan_queries");

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| FlightError::io_operation("create", path.display(), e))?;
            let mut writer = BufWriter::new(file);
            write_outcomes(&mut writer, cli.format, "plan", &outcomes)?;
            writer.flush()?;

            if !cli.quiet {
                eprintln!(
                    "Wrote {} flight(s) to {}",
                    outcomes.len(),
                    path.display()
                );
            }
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_outcomes(&mut lock, cli.format, "plan", &outcomes)?;
        }
    }

    Ok(())
}
