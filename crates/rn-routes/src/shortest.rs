//! Shortest path and shortest cycle lengths.

use core::fmt;

use rn_core::{Metric, VertexId};
use serde::{Deserialize, Serialize};

use crate::engine::RouteEngine;

/// Length of a shortest path, or the fact that none exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathLength {
    Reachable(Metric),
    Unreachable,
}

impl PathLength {
    pub fn is_reachable(self) -> bool {
        matches!(self, PathLength::Reachable(_))
    }

    pub fn value(self) -> Option<Metric> {
        match self {
            PathLength::Reachable(d) => Some(d),
            PathLength::Unreachable => None,
        }
    }
}

impl From<Option<Metric>> for PathLength {
    fn from(value: Option<Metric>) -> Self {
        value.map_or(PathLength::Unreachable, PathLength::Reachable)
    }
}

impl fmt::Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathLength::Reachable(d) => write!(f, "{}", d),
            PathLength::Unreachable => f.write_str("UNREACHABLE"),
        }
    }
}

impl RouteEngine<'_> {
    /// Shortest distance from `start` to `end`.
    ///
    /// When `start == end` this is the shortest cycle through `start` (a
    /// path of length zero does not count).
    pub fn shortest_path_length(&self, start: &str, end: &str) -> PathLength {
        let (Some(start_id), Some(end_id)) =
            (self.store.vertex_id(start), self.store.vertex_id(end))
        else {
            return PathLength::Unreachable;
        };

        let dist = self.distances_from(start_id);
        let length = if start_id != end_id {
            PathLength::from(dist[end_id.slot()])
        } else {
            self.shortest_cycle(start_id, &dist)
        };

        tracing::debug!(start, end, %length, "shortest path");
        length
    }

    /// Dense Dijkstra: |V|-1 rounds, each picking the nearest unvisited
    /// vertex by linear scan (ties go to the earliest-inserted vertex).
    ///
    /// Entry `i` is the distance to the vertex with slot `i`; `None` is
    /// unreachable. Requires non-negative weights, which `Distance` enforces.
    fn distances_from(&self, start: VertexId) -> Vec<Option<Metric>> {
        let n = self.store.vertex_count();
        let mut dist: Vec<Option<Metric>> = vec![None; n];
        let mut visited = vec![false; n];
        dist[start.slot()] = Some(0);

        for _ in 0..n.saturating_sub(1) {
            let Some((current, base)) = nearest_unvisited(&dist, &visited) else {
                break;
            };
            visited[current] = true;

            let Some(row) = self.store.neighbours_of(VertexId::from_index(current as u32)) else {
                continue;
            };
            for neighbour in row {
                let candidate = base + Metric::from(neighbour.distance);
                let slot = neighbour.destination.slot();
                if dist[slot].is_none_or(|known| candidate < known) {
                    dist[slot] = Some(candidate);
                }
            }
        }

        dist
    }

    /// Cheapest `dist[v] + w(v -> start)` over every other vertex `v`.
    fn shortest_cycle(&self, start: VertexId, dist: &[Option<Metric>]) -> PathLength {
        self.store
            .edges()
            .filter(|(source, n)| *source != start && n.destination == start)
            .filter_map(|(source, n)| dist[source.slot()].map(|d| d + Metric::from(n.distance)))
            .min()
            .into()
    }
}

fn nearest_unvisited(dist: &[Option<Metric>], visited: &[bool]) -> Option<(usize, Metric)> {
    dist.iter()
        .zip(visited)
        .enumerate()
        .filter(|(_, (_, seen))| !**seen)
        .filter_map(|(slot, (d, _))| d.map(|d| (slot, d)))
        .min_by_key(|&(_, d)| d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reference_network;
    use rn_graph::GraphStore;

    #[test]
    fn reference_shortest_paths() {
        let store = reference_network();
        let engine = RouteEngine::new(&store);

        assert_eq!(engine.shortest_path_length("A", "C"), PathLength::Reachable(9));
        assert_eq!(engine.shortest_path_length("B", "B"), PathLength::Reachable(9));
        assert_eq!(engine.shortest_path_length("C", "C"), PathLength::Reachable(9));
        assert_eq!(engine.shortest_path_length("A", "E"), PathLength::Reachable(7));
    }

    #[test]
    fn unreachable_targets() {
        let store = reference_network();
        let engine = RouteEngine::new(&store);

        // Nothing leads back into A.
        assert_eq!(engine.shortest_path_length("B", "A"), PathLength::Unreachable);
        assert_eq!(engine.shortest_path_length("A", "A"), PathLength::Unreachable);
        assert_eq!(engine.shortest_path_length("A", "Z"), PathLength::Unreachable);
        assert_eq!(engine.shortest_path_length("Z", "Z"), PathLength::Unreachable);
    }

    #[test]
    fn self_loop_is_not_a_cycle_candidate() {
        let store = GraphStore::build([("A", "A", 1), ("A", "B", 2), ("B", "A", 3)]);
        let engine = RouteEngine::new(&store);
        assert_eq!(engine.shortest_path_length("A", "A"), PathLength::Reachable(5));
    }

    #[test]
    fn dead_end_source() {
        let store = GraphStore::build([("A", "B", 2)]);
        let engine = RouteEngine::new(&store);
        assert_eq!(engine.shortest_path_length("A", "B"), PathLength::Reachable(2));
        assert_eq!(engine.shortest_path_length("B", "A"), PathLength::Unreachable);
    }

    #[test]
    fn prefers_cheaper_detour() {
        let store = GraphStore::build([("A", "C", 10), ("A", "B", 2), ("B", "C", 3)]);
        let engine = RouteEngine::new(&store);
        assert_eq!(engine.shortest_path_length("A", "C"), PathLength::Reachable(5));
    }

    #[test]
    fn display_and_accessors() {
        assert_eq!(PathLength::Reachable(9).to_string(), "9");
        assert_eq!(PathLength::Unreachable.to_string(), "UNREACHABLE");
        assert!(!PathLength::Unreachable.is_reachable());
        assert_eq!(PathLength::from(Some(4)).value(), Some(4));
    }
}
