//! Utilities for records output format
//!
//! ```text
//! H flightpath=1 records=1 mode=plan queries=1
//! Q 1 from="Dallas" to="Houston" rank=time found=2 shown=2
//! R 1.1 time=86 cost=193 legs=2 path="Dallas -> Austin -> Houston"
//! ```

use crate::graph::Route;
use crate::planner::QueryOutcome;

/// Records format version emitted in every header
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Format the header line for a records document
pub fn format_header(mode: &str, queries: usize) -> String {
    format!(
        "H flightpath={} records=1 mode={} queries={}",
        RECORDS_VERSION, mode, queries
    )
}

/// Format a Q-line describing one query and its result size
pub fn format_query_record(flight: usize, outcome: &QueryOutcome) -> String {
    format!(
        "Q {} from=\"{}\" to=\"{}\" rank={} found={} shown={}",
        flight,
        escape_quotes(&outcome.query.source),
        escape_quotes(&outcome.query.destination),
        outcome.query.rank_by,
        outcome.found,
        outcome.routes.len()
    )
}

/// Format an R-line for the `rank`-th route of query `flight`
pub fn format_route_record(flight: usize, rank: usize, route: &Route) -> String {
    format!(
        "R {}.{} time={} cost={} legs={} path=\"{}\"",
        flight,
        rank,
        route.total_time(),
        route.total_cost(),
        route.legs(),
        escape_quotes(&route.path_string())
    )
}

/// All lines for a batch of outcomes, numbered from 1
pub fn format_outcomes(mode: &str, outcomes: &[QueryOutcome]) -> Vec<String> {
    let mut lines = vec![format_header(mode, outcomes.len())];
    for (i, outcome) in outcomes.iter().enumerate() {
        let flight = i + 1;
        lines.push(format_query_record(flight, outcome));
        for (j, route) in outcome.routes.iter().enumerate() {
            lines.push(format_route_record(flight, j + 1, route));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RankBy;
    use crate::planner::Query;

    fn outcome() -> QueryOutcome {
        QueryOutcome {
            query: Query::new("Dallas", "Houston", RankBy::Time),
            found: 2,
            routes: vec![Route::new(
                vec!["Dallas".into(), "Austin".into(), "Houston".into()],
                193,
                86,
            )],
        }
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_quotes(r#"Say "hi""#), r#"Say \"hi\""#);
    }

    #[test]
    fn test_format_outcomes() {
        let lines = format_outcomes("plan", &[outcome()]);
        assert_eq!(
            lines,
            vec![
                "H flightpath=1 records=1 mode=plan queries=1",
                "Q 1 from=\"Dallas\" to=\"Houston\" rank=time found=2 shown=1",
                "R 1.1 time=86 cost=193 legs=2 path=\"Dallas -> Austin -> Houston\"",
            ]
        );
    }

    #[test]
    fn test_format_outcomes_empty_query() {
        let empty = QueryOutcome {
            query: Query::new("A", "B", RankBy::Cost),
            found: 0,
            routes: Vec::new(),
        };
        let lines = format_outcomes("route", &[empty]);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("found=0 shown=0"));
    }
}
