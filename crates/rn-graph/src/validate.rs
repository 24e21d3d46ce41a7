//! Structural checks on a built store.

use std::collections::HashSet;

use rn_core::{RnError, RnResult, VertexId};

use crate::graph::GraphStore;

/// Verify the adjacency/vertex-set invariants:
/// - one adjacency slot per vertex
/// - no empty rows (a vertex without outgoing edges has no row)
/// - every destination is a known vertex
/// - every vertex is an endpoint of some edge
pub fn check_invariants(store: &GraphStore) -> RnResult<()> {
    let vertex_count = store.index.len();

    if store.adjacency.len() != vertex_count {
        return Err(RnError::Invariant {
            what: format!(
                "{} adjacency slots for {} vertices",
                store.adjacency.len(),
                vertex_count
            ),
        });
    }

    let mut endpoints: HashSet<VertexId> = HashSet::with_capacity(vertex_count);
    let mut edges = 0usize;

    for (slot, row) in store.adjacency.iter().enumerate() {
        let Some(row) = row else { continue };
        let source = VertexId::from_index(slot as u32);

        if row.is_empty() {
            return Err(RnError::Invariant {
                what: format!("vertex {} has an empty adjacency row", source),
            });
        }
        endpoints.insert(source);

        for neighbour in row {
            if neighbour.destination.slot() >= vertex_count {
                return Err(RnError::Invariant {
                    what: format!(
                        "vertex {} points at unknown vertex {}",
                        source, neighbour.destination
                    ),
                });
            }
            endpoints.insert(neighbour.destination);
            edges += 1;
        }
    }

    if endpoints.len() != vertex_count {
        return Err(RnError::Invariant {
            what: format!(
                "{} of {} vertices are not on any edge",
                vertex_count - endpoints.len(),
                vertex_count
            ),
        });
    }

    if edges != store.edge_count {
        return Err(RnError::Invariant {
            what: format!("edge count {} but {} edges stored", store.edge_count, edges),
        });
    }

    Ok(())
}
