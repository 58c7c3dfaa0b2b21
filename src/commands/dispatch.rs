//! Command dispatch logic for flightpath
use std::time::Instant;

use flightpath_core::config::PlannerConfig;
use flightpath_core::error::Result;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = PlannerConfig::discover(cli.config.as_deref())?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        max_paths = config.max_paths,
        default_rank = %config.default_rank,
        "load_config"
    );

    match &cli.command {
        Commands::Plan(args) => commands::plan::execute(cli, &config, args),
        Commands::Route(args) => commands::route::execute(cli, &config, args),
    }
}
