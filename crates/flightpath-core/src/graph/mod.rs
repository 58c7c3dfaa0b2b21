//! Connection graph and route search
//!
//! - Graph store: symmetric weighted adjacency keyed by city name
//! - Path enumeration: explicit-stack DFS over every simple path
//! - Ranking: cost or time order with the other weight as tie-break

pub mod enumerate;
pub mod rank;
pub mod route;
pub mod store;

pub use enumerate::{find_all_routes, Frame, PathEnumerator};
pub use rank::{rank_routes, ranked, RankBy};
pub use route::{Route, ROUTE_SEPARATOR};
pub use store::{Edge, Graph, NodeIndex};
