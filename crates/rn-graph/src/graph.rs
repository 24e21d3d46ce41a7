//! Core graph data structures.

use rn_core::{Distance, Edge, RnError, RnResult, VertexId};

use crate::builder::GraphBuilder;
use crate::indexing::VertexIndex;

/// One outgoing edge in a station's adjacency row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbour {
    pub destination: VertexId,
    pub distance: Distance,
}

/// The rail network: an immutable adjacency list plus its vertex set.
///
/// Rows are stored per vertex id. A vertex with no outgoing edges has *no*
/// row at all (`None`), never an empty one, so lookups can tell a dead end
/// apart from a station that merely has nothing left to offer.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    pub(crate) index: VertexIndex,

    /// `adjacency[id.slot()]` is the row for that vertex, in insertion order.
    pub(crate) adjacency: Vec<Option<Vec<Neighbour>>>,

    pub(crate) edge_count: usize,
}

impl GraphStore {
    /// Bulk-build a store from edge records.
    ///
    /// No validation is performed: parallel edges and self-loops accumulate
    /// as given.
    pub fn build<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut builder = GraphBuilder::new();
        for edge in edges {
            let edge = edge.into();
            builder.add_edge(&edge.source, &edge.destination, edge.distance);
        }
        builder.build()
    }

    /// Outgoing edges of `label`, or `None` if it has no adjacency entry.
    pub fn neighbours(&self, label: &str) -> Option<&[Neighbour]> {
        self.neighbours_of(self.index.get(label)?)
    }

    /// Outgoing edges of a vertex id, or `None` if it has no adjacency entry.
    pub fn neighbours_of(&self, id: VertexId) -> Option<&[Neighbour]> {
        self.adjacency.get(id.slot())?.as_deref()
    }

    /// The vertex set, in insertion order.
    pub fn vertices(&self) -> &VertexIndex {
        &self.index
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains(label)
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label)
    }

    /// Like [`vertex_id`](Self::vertex_id), but an unknown label is an error.
    pub fn require_vertex(&self, label: &str) -> RnResult<VertexId> {
        self.index.get(label).ok_or_else(|| RnError::UnknownVertex {
            label: label.to_string(),
        })
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.index.label(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate every edge as (source, neighbour), grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Neighbour)> + '_ {
        self.index.ids().flat_map(move |id| {
            self.neighbours_of(id)
                .unwrap_or_default()
                .iter()
                .map(move |n| (id, n))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_absent_for_sink() {
        let store = GraphStore::build([("A", "B", 1)]);
        assert!(store.neighbours("B").is_none());
        assert!(store.neighbours("Z").is_none());
        assert_eq!(store.neighbours("A").map(<[Neighbour]>::len), Some(1));
    }

    #[test]
    fn require_vertex_reports_label() {
        let store = GraphStore::build([("A", "B", 1)]);
        assert!(store.require_vertex("A").is_ok());
        assert_eq!(
            store.require_vertex("Q"),
            Err(RnError::UnknownVertex { label: "Q".into() })
        );
    }

    #[test]
    fn edges_iterates_every_row() {
        let store = GraphStore::build([("A", "B", 1), ("B", "A", 2), ("A", "C", 3)]);
        let weights: Vec<Distance> = store.edges().map(|(_, n)| n.distance).collect();
        assert_eq!(weights, [1, 3, 2]);
        assert_eq!(store.edge_count(), 3);
    }
}
