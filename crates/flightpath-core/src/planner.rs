//! Query pipeline: enumerate, rank, truncate

use std::time::Instant;

use serde::Serialize;

use crate::graph::{find_all_routes, ranked, Graph, RankBy, Route};
use crate::trace_time;

/// A single route request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    #[serde(rename = "from")]
    pub source: String,
    #[serde(rename = "to")]
    pub destination: String,
    pub rank_by: RankBy,
}

impl Query {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, rank_by: RankBy) -> Self {
        Query {
            source: source.into(),
            destination: destination.into(),
            rank_by,
        }
    }
}

/// Ranked answer to a [`Query`]
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutcome {
    #[serde(flatten)]
    pub query: Query,
    /// Routes discovered before truncation
    pub found: usize,
    /// Best routes, at most the requested limit
    pub routes: Vec<Route>,
}

impl QueryOutcome {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Answers queries against a finished, read-only graph
#[derive(Debug, Clone, Copy)]
pub struct Planner<'g> {
    graph: &'g Graph,
}

impl<'g> Planner<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Planner { graph }
    }

    /// Enumerate every simple route for `query` and keep the best `max_paths`
    pub fn plan(&self, query: &Query, max_paths: usize) -> QueryOutcome {
        let start = Instant::now();

        let routes = find_all_routes(self.graph, &query.source, &query.destination);
        let found = routes.len();
        let mut routes = ranked(routes, query.rank_by);
        routes.truncate(max_paths);

        trace_time!(start, "plan_query", found = found);
        tracing::debug!(
            from = %query.source,
            to = %query.destination,
            rank_by = %query.rank_by,
            found,
            shown = routes.len(),
            "query planned"
        );

        QueryOutcome {
            query: query.clone(),
            found,
            routes,
        }
    }

    /// Plan each query in order
    pub fn plan_all(&self, queries: &[Query], max_paths: usize) -> Vec<QueryOutcome> {
        queries
            .iter()
            .map(|query| self.plan(query, max_paths))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub_graph() -> Graph {
        // Four parallel two-leg routes from A to Z through different hubs
        let mut graph = Graph::new();
        for (hub, cost, time) in [("H1", 40, 1), ("H2", 10, 4), ("H3", 30, 2), ("H4", 20, 3)] {
            graph.add_connection("A", hub, cost, time);
            graph.add_connection(hub, "Z", cost, time);
        }
        graph
    }

    #[test]
    fn test_plan_truncates_to_limit() {
        let graph = hub_graph();
        let outcome = Planner::new(&graph).plan(&Query::new("A", "Z", RankBy::Cost), 3);

        assert_eq!(outcome.found, 4);
        let costs: Vec<u64> = outcome.routes.iter().map(Route::total_cost).collect();
        assert_eq!(costs, vec![20, 40, 60]);
    }

    #[test]
    fn test_plan_by_time() {
        let graph = hub_graph();
        let outcome = Planner::new(&graph).plan(&Query::new("A", "Z", RankBy::Time), 2);
        let times: Vec<u64> = outcome.routes.iter().map(Route::total_time).collect();
        assert_eq!(times, vec![2, 4]);
    }

    #[test]
    fn test_plan_fewer_than_limit() {
        let graph = hub_graph();
        let outcome = Planner::new(&graph).plan(&Query::new("A", "Z", RankBy::Cost), 10);
        assert_eq!(outcome.routes.len(), 4);
    }

    #[test]
    fn test_plan_no_route() {
        let graph = hub_graph();
        let outcome = Planner::new(&graph).plan(&Query::new("A", "Nowhere", RankBy::Cost), 3);
        assert!(outcome.is_empty());
        assert_eq!(outcome.found, 0);
    }

    #[test]
    fn test_plan_all_preserves_order() {
        let graph = hub_graph();
        let queries = vec![
            Query::new("A", "Z", RankBy::Cost),
            Query::new("Z", "A", RankBy::Time),
        ];
        let outcomes = Planner::new(&graph).plan_all(&queries, 1);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].query.source, "A");
        assert_eq!(outcomes[1].query.source, "Z");
        assert_eq!(outcomes[1].routes[0].cities(), ["Z", "H1", "A"]);
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let graph = hub_graph();
        let outcome = Planner::new(&graph).plan(&Query::new("A", "Z", RankBy::Time), 1);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["from"], "A");
        assert_eq!(json["to"], "Z");
        assert_eq!(json["rank_by"], "time");
        assert_eq!(json["found"], 4);
        assert_eq!(json["routes"][0]["time"], 2);
    }
}
