//! Flight report rendering
//!
//! The human report keeps the layout of the classic planner output:
//!
//! ```text
//! Flight 1: Dallas, Houston (Time)
//! Path 1: Dallas -> Houston. Time: 51 Cost: 101.00
//! Path 2: Dallas -> Austin -> Houston. Time: 86 Cost: 193.00
//!
//! ```

use serde::Serialize;

use crate::graph::Route;
use crate::planner::QueryOutcome;

/// Line written for a query without any route
pub const NO_PATH_MESSAGE: &str = "No valid path found.";

/// Header line for the `flight`-th query
pub fn format_flight_header(flight: usize, outcome: &QueryOutcome) -> String {
    format!(
        "Flight {}: {}, {} ({})",
        flight,
        outcome.query.source,
        outcome.query.destination,
        outcome.query.rank_by.label()
    )
}

/// Body line for the `rank`-th route; cost is printed with two decimals
pub fn format_path_line(rank: usize, route: &Route) -> String {
    format!(
        "Path {}: {}. Time: {} Cost: {}.00",
        rank,
        route.path_string(),
        route.total_time(),
        route.total_cost()
    )
}

/// One query block, terminated by a blank line
pub fn format_outcome(flight: usize, outcome: &QueryOutcome) -> String {
    let mut block = format_flight_header(flight, outcome);
    block.push('\n');
    if outcome.is_empty() {
        block.push_str(NO_PATH_MESSAGE);
        block.push('\n');
    }
    for (i, route) in outcome.routes.iter().enumerate() {
        block.push_str(&format_path_line(i + 1, route));
        block.push('\n');
    }
    block.push('\n');
    block
}

/// Render the full human report, numbering queries from 1
pub fn render_report(outcomes: &[QueryOutcome]) -> String {
    outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| format_outcome(i + 1, outcome))
        .collect()
}

#[derive(Serialize)]
struct NumberedOutcome<'a> {
    flight: usize,
    #[serde(flatten)]
    outcome: &'a QueryOutcome,
}

/// JSON array of outcomes with their 1-based flight numbers
pub fn report_json(outcomes: &[QueryOutcome]) -> serde_json::Result<serde_json::Value> {
    let numbered: Vec<NumberedOutcome<'_>> = outcomes
        .iter()
        .enumerate()
        .map(|(i, outcome)| NumberedOutcome {
            flight: i + 1,
            outcome,
        })
        .collect();
    serde_json::to_value(numbered)
}
