//! Flightpath - flight route planner CLI
//!
//! Loads a network of two-way connections, enumerates every simple route
//! between requested cities and reports the best ones by cost or time.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use flightpath_core::error::{ExitCode as FlightExitCode, FlightError};
use flightpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(FlightExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Exit for an argument error raised before `Cli.format` is known
///
/// Help and version output go through clap unchanged. Every other parse
/// failure is a usage error, printed as a JSON envelope when argv asks for
/// `--format json`.
fn report_parse_error(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !argv_requests_json()
    {
        err.exit();
    }

    let usage = FlightError::UsageError(err.to_string());
    eprintln!("{}", usage.to_json());
    ExitCode::from(usage.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}
