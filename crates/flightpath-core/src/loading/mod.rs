//! Input files for the planner
//!
//! Both the connection file and the request file share one layout: a line
//! holding the record count N, then N `|`-separated records. Blank lines are
//! skipped; anything after the N-th record is ignored.

mod connections;
mod queries;

pub use connections::{load_graph, parse_connections, Connection};
pub use queries::{load_queries, parse_queries};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FlightError, Result};

/// Field separator inside a record
pub const FIELD_SEPARATOR: char = '|';

/// A record line with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawRecord<'a> {
    pub line: usize,
    pub fields: Vec<&'a str>,
}

/// Read a whole input file, mapping a missing file to [`FlightError::InputNotFound`]
pub(crate) fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FlightError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => FlightError::io_operation("read", path.display(), e),
    })
}

/// Split counted input into its announced records
pub(crate) fn split_records<'a>(
    content: &'a str,
    origin: &Path,
    arity: usize,
) -> Result<Vec<RawRecord<'a>>> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let Some((count_line, count_text)) = lines.next() else {
        return Err(FlightError::invalid_record(origin, 1, "missing record count"));
    };
    let expected: usize = count_text.parse().map_err(|_| {
        FlightError::invalid_record(
            origin,
            count_line,
            format!("record count is not a number: '{}'", count_text),
        )
    })?;

    let mut records = Vec::new();
    for (line, text) in lines.by_ref().take(expected) {
        let fields: Vec<&str> = text.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() != arity {
            return Err(FlightError::invalid_record(
                origin,
                line,
                format!("expected {} fields, found {}", arity, fields.len()),
            ));
        }
        if let Some(pos) = fields.iter().position(|f| f.is_empty()) {
            return Err(FlightError::invalid_record(
                origin,
                line,
                format!("field {} is empty", pos + 1),
            ));
        }
        records.push(RawRecord { line, fields });
    }

    if records.len() < expected {
        return Err(FlightError::MissingRecords {
            path: origin.to_path_buf(),
            expected,
            found: records.len(),
        });
    }

    let trailing = lines.count();
    if trailing > 0 {
        tracing::warn!(
            path = %origin.display(),
            expected,
            trailing,
            "ignoring lines after the announced records"
        );
    }

    Ok(records)
}
