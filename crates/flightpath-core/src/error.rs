//! Error types and exit codes for flightpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing input file, malformed record)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed input (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur outside the core search
///
/// Graph construction, enumeration and ranking are infallible; an unknown
/// source or an unreachable destination is an empty result, not an error.
#[derive(Error, Debug)]
pub enum FlightError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("input file not found: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error("{path:?} line {line}: {reason}")]
    InvalidRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{path:?}: expected {expected} records, found {found}")]
    MissingRecords {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    // Generic failures (exit code 1)
    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl FlightError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        FlightError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FlightError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed record in an input file
    pub fn invalid_record(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl std::fmt::Display,
    ) -> Self {
        FlightError::InvalidRecord {
            path: path.into(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FlightError::UnknownFormat(_)
            | FlightError::UsageError(_)
            | FlightError::InvalidValue { .. } => ExitCode::Usage,

            FlightError::InputNotFound { .. }
            | FlightError::InvalidRecord { .. }
            | FlightError::MissingRecords { .. } => ExitCode::Data,

            FlightError::FailedOperationWithTarget { .. }
            | FlightError::Io(_)
            | FlightError::Json(_)
            | FlightError::Toml(_)
            | FlightError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FlightError::UnknownFormat(_) => "unknown_format",
            FlightError::UsageError(_) => "usage_error",
            FlightError::InvalidValue { .. } => "invalid_value",
            FlightError::InputNotFound { .. } => "input_not_found",
            FlightError::InvalidRecord { .. } => "invalid_record",
            FlightError::MissingRecords { .. } => "missing_records",
            FlightError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            FlightError::Io(_) => "io_error",
            FlightError::Json(_) => "json_error",
            FlightError::Toml(_) => "toml_error",
            FlightError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for flightpath operations
pub type Result<T> = std::result::Result<T, FlightError>;
