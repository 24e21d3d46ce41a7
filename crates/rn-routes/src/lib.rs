//! rn-routes: query engine over a built rail network.
//!
//! Three queries, all read-only against a shared [`rn_graph::GraphStore`]:
//! - exact route distance ([`RouteEngine::route_distance`])
//! - bounded route counting ([`RouteEngine::count_routes`])
//! - shortest path / shortest cycle length ([`RouteEngine::shortest_path_length`])
//!
//! # Example
//!
//! ```
//! use rn_graph::GraphStore;
//! use rn_routes::{BoundType, PathLength, RouteDistance, RouteEngine};
//!
//! let store = GraphStore::build([("A", "B", 5), ("B", "C", 4), ("C", "A", 2)]);
//! let engine = RouteEngine::new(&store);
//!
//! assert_eq!(engine.route_distance(&["A", "B", "C"]), RouteDistance::Distance(9));
//! assert_eq!(engine.count_routes("A", "A", 3, BoundType::StopCount, true), 1);
//! assert_eq!(engine.shortest_path_length("A", "A"), PathLength::Reachable(11));
//! ```

mod count;
mod distance;
mod engine;
mod shortest;

pub use count::BoundType;
pub use distance::{RouteDistance, split_route};
pub use engine::RouteEngine;
pub use shortest::PathLength;
