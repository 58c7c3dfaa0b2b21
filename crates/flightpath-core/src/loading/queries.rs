use std::path::Path;

use crate::error::{FlightError, Result};
use crate::graph::RankBy;
use crate::loading::{read_input, split_records};
use crate::planner::Query;

/// Map the request file's rank flag: `T` for time, `C` for cost
fn parse_rank_flag(origin: &Path, line: usize, flag: &str) -> Result<RankBy> {
    let by_time = match flag {
        "T" | "t" => true,
        "C" | "c" => false,
        other => {
            return Err(FlightError::invalid_record(
                origin,
                line,
                format!("rank flag must be T or C, got '{}'", other),
            ))
        }
    };
    Ok(RankBy::from_by_time(by_time))
}

/// Parse `source|destination|T|C` request records from in-memory text
pub fn parse_queries(content: &str, origin: &Path) -> Result<Vec<Query>> {
    split_records(content, origin, 3)?
        .into_iter()
        .map(|record| {
            let rank_by = parse_rank_flag(origin, record.line, record.fields[2])?;
            Ok(Query::new(record.fields[0], record.fields[1], rank_by))
        })
        .collect()
}

/// Read a request file
pub fn load_queries(path: &Path) -> Result<Vec<Query>> {
    let content = read_input(path)?;
    let queries = parse_queries(&content, path)?;
    tracing::debug!(path = %path.display(), queries = queries.len(), "requests loaded");
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queries() {
        let queries =
            parse_queries("2\nDallas|Houston|T\nChicago|Dallas|C\n", Path::new("r")).unwrap();
        assert_eq!(queries[0], Query::new("Dallas", "Houston", RankBy::Time));
        assert_eq!(queries[1], Query::new("Chicago", "Dallas", RankBy::Cost));
    }

    #[test]
    fn test_parse_queries_lowercase_flags() {
        let queries = parse_queries("2\nA|B|t\nB|A|c\n", Path::new("r")).unwrap();
        assert_eq!(queries[0].rank_by, RankBy::Time);
        assert_eq!(queries[1].rank_by, RankBy::Cost);
    }

    #[test]
    fn test_parse_queries_bad_flag() {
        let err = parse_queries("1\nA|B|X\n", Path::new("r")).unwrap_err();
        assert!(err.to_string().contains("rank flag must be T or C"));
    }

    #[test]
    fn test_load_queries_missing_file() {
        let err = load_queries(Path::new("/nonexistent/requests.txt")).unwrap_err();
        assert!(matches!(err, FlightError::InputNotFound { .. }));
    }
}
