//! Flightpath Core Library
//!
//! Graph storage, exhaustive simple-path enumeration and route ranking for
//! the flightpath planner, plus the ingestion and reporting plumbing the CLI
//! is built on.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loading;
pub mod logging;
pub mod planner;
pub mod records;
pub mod report;
