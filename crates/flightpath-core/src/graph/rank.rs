//! Deterministic ordering of enumerated routes

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlightError;
use crate::graph::route::Route;

/// Primary ranking key; the other weight breaks ties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankBy {
    /// Total cost ascending, then total time ascending
    #[default]
    Cost,
    /// Total time ascending, then total cost ascending
    Time,
}

impl RankBy {
    /// `true` selects time, matching the request file's `T` flag
    pub fn from_by_time(by_time: bool) -> Self {
        if by_time {
            RankBy::Time
        } else {
            RankBy::Cost
        }
    }

    /// Label used in report headers
    pub fn label(self) -> &'static str {
        match self {
            RankBy::Cost => "Cost",
            RankBy::Time => "Time",
        }
    }

    /// Compare two routes under this key
    pub fn compare(self, a: &Route, b: &Route) -> Ordering {
        match self {
            RankBy::Cost => a
                .total_cost()
                .cmp(&b.total_cost())
                .then_with(|| a.total_time().cmp(&b.total_time())),
            RankBy::Time => a
                .total_time()
                .cmp(&b.total_time())
                .then_with(|| a.total_cost().cmp(&b.total_cost())),
        }
    }
}

impl FromStr for RankBy {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cost" | "c" => Ok(RankBy::Cost),
            "time" | "t" => Ok(RankBy::Time),
            other => Err(FlightError::invalid_value(
                "rank key (expected: cost or time)",
                other,
            )),
        }
    }
}

impl fmt::Display for RankBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBy::Cost => write!(f, "cost"),
            RankBy::Time => write!(f, "time"),
        }
    }
}

/// Sort routes in place by `rank_by`, then the other weight
pub fn rank_routes(routes: &mut [Route], rank_by: RankBy) {
    routes.sort_by(|a, b| rank_by.compare(a, b));
}

/// Owned variant of [`rank_routes`]
pub fn ranked(mut routes: Vec<Route>, rank_by: RankBy) -> Vec<Route> {
    rank_routes(&mut routes, rank_by);
    routes
}
