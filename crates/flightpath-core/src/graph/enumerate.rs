//! Exhaustive simple-path enumeration
//!
//! Depth-first search over an explicit stack of [`Frame`]s. Each frame pairs
//! a node on the current path with a cursor into its adjacency list, so
//! descending is a push, backtracking is a pop, and the set of nodes on the
//! stack is always exactly the visited set.

use crate::graph::route::Route;
use crate::graph::store::{Graph, NodeIndex};

/// One entry of the traversal stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub node: NodeIndex,
    /// Position of the next edge to try in `node`'s adjacency list
    pub cursor: usize,
}

impl Frame {
    fn new(node: NodeIndex) -> Self {
        Frame { node, cursor: 0 }
    }
}

/// Lazily yields every simple path from a source to a destination
///
/// Routes come out in discovery order; rank them with
/// [`crate::graph::rank_routes`]. The search ends when the stack is empty.
#[derive(Debug)]
pub struct PathEnumerator<'g> {
    graph: &'g Graph,
    destination: Option<NodeIndex>,
    stack: Vec<Frame>,
    visited: Vec<bool>,
}

impl<'g> PathEnumerator<'g> {
    /// Start a search from `source` to `destination`
    ///
    /// An unknown source or destination yields an enumerator with nothing
    /// to produce. A source equal to the destination also produces nothing,
    /// since the destination is only recognised when reached over an edge
    /// and the source is on the path from the start.
    pub fn new(graph: &'g Graph, source: &str, destination: &str) -> Self {
        let mut visited = vec![false; graph.node_count()];
        let mut stack = Vec::new();

        match graph.lookup_index(source) {
            Some(src) => {
                visited[src.index()] = true;
                stack.push(Frame::new(src));
            }
            None => tracing::debug!(source, "unknown source city"),
        }

        let target = graph.lookup_index(destination);
        if target.is_none() {
            tracing::debug!(destination, "unknown destination city");
        }

        PathEnumerator {
            graph,
            destination: target,
            stack,
            visited,
        }
    }

    /// Current traversal stack, bottom (source) first
    pub fn frames(&self) -> &[Frame] {
        &self.stack
    }

    /// Whether `node` is on the current path
    pub fn is_visited(&self, node: NodeIndex) -> bool {
        self.visited.get(node.index()).copied().unwrap_or(false)
    }

    /// Advance the search by one edge or one backtrack
    ///
    /// Returns a route when the step completed a path to the destination.
    fn step(&mut self, destination: NodeIndex) -> Option<Route> {
        let graph = self.graph;
        let top = self.stack.last_mut()?;

        let Some(&edge) = graph.edges(top.node).get(top.cursor) else {
            let node = top.node;
            self.stack.pop();
            self.visited[node.index()] = false;
            tracing::trace!(city = graph.name(node), "backtrack");
            return None;
        };
        top.cursor += 1;

        let neighbor = edge.neighbor;
        if self.visited[neighbor.index()] {
            return None;
        }

        if neighbor == destination {
            return Some(self.materialize(destination));
        }

        self.visited[neighbor.index()] = true;
        self.stack.push(Frame::new(neighbor));
        None
    }

    /// Build the route for the current stack extended by `destination`
    ///
    /// Totals are summed from the first-inserted edge between each
    /// consecutive pair of cities.
    fn materialize(&self, destination: NodeIndex) -> Route {
        let nodes: Vec<NodeIndex> = self
            .stack
            .iter()
            .map(|frame| frame.node)
            .chain(std::iter::once(destination))
            .collect();

        let (cost, time) = nodes
            .windows(2)
            .filter_map(|pair| self.graph.find_edge_between(pair[0], pair[1]))
            .fold((0u64, 0u64), |(cost, time), edge| {
                (cost + u64::from(edge.cost), time + u64::from(edge.time))
            });

        let cities = nodes
            .iter()
            .map(|&node| self.graph.name(node).to_string())
            .collect();

        Route::new(cities, cost, time)
    }
}

impl Iterator for PathEnumerator<'_> {
    type Item = Route;

    fn next(&mut self) -> Option<Route> {
        let Some(destination) = self.destination else {
            self.stack.clear();
            self.visited.fill(false);
            return None;
        };

        while !self.stack.is_empty() {
            if let Some(route) = self.step(destination) {
                return Some(route);
            }
        }
        None
    }
}

/// Collect every simple path from `source` to `destination`, unordered
pub fn find_all_routes(graph: &Graph, source: &str, destination: &str) -> Vec<Route> {
    let routes: Vec<Route> = PathEnumerator::new(graph, source, destination).collect();
    tracing::debug!(source, destination, found = routes.len(), "enumerated routes");
    routes
}
