//! CLI commands for flightpath

pub mod dispatch;
pub mod plan;
pub mod route;

use std::io::Write;

use flightpath_core::error::Result;
use flightpath_core::format::OutputFormat;
use flightpath_core::planner::QueryOutcome;
use flightpath_core::{records, report};

/// Write outcomes in the requested format
///
/// `mode` names the command in the records header.
pub fn write_outcomes<W: Write>(
    out: &mut W,
    format: OutputFormat,
    mode: &str,
    outcomes: &[QueryOutcome],
) -> Result<()> {
    match format {
        OutputFormat::Human => out.write_all(report::render_report(outcomes).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report::report_json(outcomes)?)?;
            writeln!(out)?;
        }
        OutputFormat::Records => {
            for line in records::format_outcomes(mode, outcomes) {
                writeln!(out, "{}", line)?;
            }
        }
    }
    Ok(())
}
