//! rn-graph: graph/store layer for railnet.
//!
//! Provides:
//! - The immutable [`GraphStore`] (adjacency list + vertex set)
//! - Incremental graph builder
//! - Stable label <-> id indexing for query engines
//!
//! # Example
//!
//! ```
//! use rn_graph::GraphStore;
//!
//! let store = GraphStore::build([("A", "B", 3), ("A", "D", 4), ("C", "D", 2)]);
//!
//! assert_eq!(store.vertex_count(), 4);
//! assert_eq!(store.neighbours("A").map(|n| n.len()), Some(2));
//! assert!(store.neighbours("B").is_none());
//! ```

pub mod builder;
pub mod graph;
pub mod indexing;
pub mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use graph::{GraphStore, Neighbour};
pub use indexing::VertexIndex;
