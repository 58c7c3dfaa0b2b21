use std::path::Path;
use std::time::Instant;

use crate::error::{FlightError, Result};
use crate::graph::Graph;
use crate::loading::{read_input, split_records};
use crate::trace_time;

/// One `source|destination|cost|time` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub source: String,
    pub destination: String,
    pub cost: u32,
    pub time: u32,
}

fn parse_weight(origin: &Path, line: usize, field: &str, value: &str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| {
        FlightError::invalid_record(
            origin,
            line,
            format!("{} must be a non-negative integer, got '{}'", field, value),
        )
    })
}

/// Parse connection records from in-memory text
///
/// `origin` only labels error messages.
pub fn parse_connections(content: &str, origin: &Path) -> Result<Vec<Connection>> {
    split_records(content, origin, 4)?
        .into_iter()
        .map(|record| {
            Ok(Connection {
                source: record.fields[0].to_string(),
                destination: record.fields[1].to_string(),
                cost: parse_weight(origin, record.line, "cost", record.fields[2])?,
                time: parse_weight(origin, record.line, "time", record.fields[3])?,
            })
        })
        .collect()
}

/// Read a connection file and build the graph from it
pub fn load_graph(path: &Path) -> Result<Graph> {
    let start = Instant::now();
    let content = read_input(path)?;
    let connections = parse_connections(&content, path)?;

    let mut graph = Graph::new();
    for conn in &connections {
        graph.add_connection(&conn.source, &conn.destination, conn.cost, conn.time);
    }

    if graph.is_empty() {
        tracing::warn!(path = %path.display(), "no connections in flight data");
    }

    trace_time!(start, "load_graph");
    tracing::debug!(
        path = %path.display(),
        cities = graph.node_count(),
        connections = graph.connection_count(),
        "graph loaded"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_connections() {
        let conns =
            parse_connections("2\nDallas|Austin|98|47\nAustin|Houston|95|39\n", Path::new("f"))
                .unwrap();
        assert_eq!(conns.len(), 2);
        assert_eq!(
            conns[0],
            Connection {
                source: "Dallas".into(),
                destination: "Austin".into(),
                cost: 98,
                time: 47,
            }
        );
    }

    #[test]
    fn test_parse_connections_rejects_negative_weight() {
        let err = parse_connections("1\nA|B|-5|3\n", Path::new("f")).unwrap_err();
        assert!(matches!(err, FlightError::InvalidRecord { line: 2, .. }));
        assert!(err.to_string().contains("cost must be a non-negative integer"));
    }

    #[test]
    fn test_parse_connections_rejects_non_numeric_time() {
        let err = parse_connections("1\nA|B|5|soon\n", Path::new("f")).unwrap_err();
        assert!(err.to_string().contains("time must be a non-negative integer"));
    }

    #[test]
    fn test_load_graph_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flights.txt");
        fs::write(&path, "3\nA|B|100|2\nB|C|50|3\nA|B|80|9\n").unwrap();

        let graph = load_graph(&path).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.connection_count(), 3);
        let edge = graph.find_edge("B", "A").unwrap();
        assert_eq!((edge.cost, edge.time), (100, 2));
    }

    #[test]
    fn test_load_graph_with_zero_records_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flights.txt");
        fs::write(&path, "0\n").unwrap();

        let graph = load_graph(&path).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.connection_count(), 0);
    }
}
