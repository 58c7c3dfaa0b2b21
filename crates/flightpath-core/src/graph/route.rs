use std::fmt;

use serde::Serialize;

/// Separator placed between cities when a route is rendered
pub const ROUTE_SEPARATOR: &str = " -> ";

/// A materialized simple path with its accumulated weights
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    cities: Vec<String>,
    #[serde(rename = "cost")]
    total_cost: u64,
    #[serde(rename = "time")]
    total_time: u64,
}

impl Route {
    pub fn new(cities: Vec<String>, total_cost: u64, total_time: u64) -> Self {
        Route {
            cities,
            total_cost,
            total_time,
        }
    }

    /// Cities from source to destination
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    /// Number of legs flown
    pub fn legs(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// City sequence joined by [`ROUTE_SEPARATOR`]
    pub fn path_string(&self) -> String {
        self.cities.join(ROUTE_SEPARATOR)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Time: {} Cost: {}",
            self.path_string(),
            self.total_time,
            self.total_cost
        )
    }
}
