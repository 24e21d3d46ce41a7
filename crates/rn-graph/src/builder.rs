//! Incremental graph builder.

use rn_core::Distance;

use crate::graph::{GraphStore, Neighbour};
use crate::indexing::VertexIndex;
use crate::validate;

/// Builder for constructing a store edge by edge.
///
/// Call `add_edge` for each connection, then `build()` to freeze the result
/// into an immutable [`GraphStore`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    index: VertexIndex,
    adjacency: Vec<Option<Vec<Neighbour>>>,
    edge_count: usize,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `source -> destination` to the source's row.
    ///
    /// The row is created on first use; both endpoints join the vertex set.
    pub fn add_edge(&mut self, source: &str, destination: &str, distance: Distance) -> &mut Self {
        let src = self.index.intern(source);
        let dst = self.index.intern(destination);
        if self.adjacency.len() < self.index.len() {
            self.adjacency.resize_with(self.index.len(), || None);
        }

        self.adjacency[src.slot()]
            .get_or_insert_with(Vec::new)
            .push(Neighbour {
                destination: dst,
                distance,
            });
        self.edge_count += 1;
        self
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Freeze into an immutable store.
    pub fn build(self) -> GraphStore {
        let store = GraphStore {
            index: self.index,
            adjacency: self.adjacency,
            edge_count: self.edge_count,
        };
        debug_assert!(validate::check_invariants(&store).is_ok());
        tracing::debug!(
            vertices = store.vertex_count(),
            edges = store.edge_count(),
            "built rail network"
        );
        store
    }
}
