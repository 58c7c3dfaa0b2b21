//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::RankBy;

/// Routes shown per query unless configured otherwise
pub const DEFAULT_MAX_PATHS: usize = 3;

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Best routes kept per query
    #[serde(default = "default_max_paths")]
    pub max_paths: usize,

    /// Ranking key for ad-hoc queries that do not name one
    #[serde(default)]
    pub default_rank: RankBy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_paths: default_max_paths(),
            default_rank: RankBy::default(),
        }
    }
}

fn default_max_paths() -> usize {
    DEFAULT_MAX_PATHS
}
