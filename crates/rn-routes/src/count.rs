//! Bounded route counting.

use rn_core::{Distance, Metric, VertexId};
use serde::{Deserialize, Serialize};

use crate::engine::RouteEngine;

/// What a route-count bound measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundType {
    /// Number of edges travelled.
    #[serde(alias = "stops")]
    StopCount,
    /// Sum of edge distances travelled.
    #[serde(alias = "distance")]
    TotalDistance,
}

impl BoundType {
    /// Running metric after travelling one more edge of `distance`.
    pub fn advance(self, curr: i64, distance: Distance) -> i64 {
        match self {
            BoundType::StopCount => curr.saturating_add(1),
            BoundType::TotalDistance => curr.saturating_add(i64::from(distance)),
        }
    }

    /// The limit the search compares against.
    ///
    /// A distance bound is strict ("less than"), so it is lowered by one.
    fn search_limit(self, bound: Metric) -> i64 {
        let bound = i64::try_from(bound).unwrap_or(i64::MAX);
        match self {
            BoundType::StopCount => bound,
            BoundType::TotalDistance => bound - 1,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    curr: i64,
    departed: bool,
}

impl RouteEngine<'_> {
    /// Count walks from `start` to `end` within `bound`.
    ///
    /// Walks may revisit stations. With `exact`, only walks whose metric hits
    /// the limit exactly are counted and such a walk is not extended further;
    /// otherwise every arrival at `end` within the limit counts and the walk
    /// carries on.
    ///
    /// The walk is driven by an explicit stack; termination relies on every
    /// edge advancing the metric. A zero-distance cycle under
    /// [`BoundType::TotalDistance`] never exhausts the bound and does not
    /// terminate.
    pub fn count_routes(
        &self,
        start: &str,
        end: &str,
        bound: Metric,
        bound_type: BoundType,
        exact: bool,
    ) -> u64 {
        let (Some(start_id), Some(end_id)) =
            (self.store.vertex_id(start), self.store.vertex_id(end))
        else {
            return 0;
        };
        let limit = bound_type.search_limit(bound);

        let mut count: u64 = 0;
        let mut stack = vec![Frame {
            vertex: start_id,
            curr: 0,
            departed: false,
        }];

        while let Some(frame) = stack.pop() {
            if frame.curr > limit {
                continue;
            }

            if frame.vertex == end_id && frame.departed {
                if !exact {
                    count += 1;
                } else if frame.curr == limit {
                    count += 1;
                    continue;
                }
            }

            // Reverse push so the first neighbour is explored first.
            if let Some(row) = self.store.neighbours_of(frame.vertex) {
                stack.extend(row.iter().rev().map(|n| Frame {
                    vertex: n.destination,
                    curr: bound_type.advance(frame.curr, n.distance),
                    departed: true,
                }));
            }
        }

        tracing::debug!(start, end, bound, ?bound_type, exact, count, "counted routes");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::reference_network;
    use rn_graph::GraphStore;

    #[test]
    fn advance_by_bound_type() {
        assert_eq!(BoundType::StopCount.advance(1, 10), 2);
        assert_eq!(BoundType::TotalDistance.advance(1, 10), 11);
    }

    #[test]
    fn reference_counts() {
        let store = reference_network();
        let engine = RouteEngine::new(&store);

        assert_eq!(engine.count_routes("C", "C", 3, BoundType::StopCount, false), 2);
        assert_eq!(engine.count_routes("A", "C", 4, BoundType::StopCount, true), 3);
        assert_eq!(engine.count_routes("C", "C", 30, BoundType::TotalDistance, false), 7);
    }

    #[test]
    fn bound_below_first_hop_is_zero() {
        let store = reference_network();
        let engine = RouteEngine::new(&store);

        assert_eq!(engine.count_routes("C", "C", 0, BoundType::StopCount, false), 0);
        assert_eq!(engine.count_routes("A", "B", 5, BoundType::TotalDistance, false), 0);
        assert_eq!(engine.count_routes("A", "B", 0, BoundType::TotalDistance, true), 0);
    }

    #[test]
    fn distance_bound_is_strict() {
        let store = reference_network();
        let engine = RouteEngine::new(&store);

        // A->B is exactly 5: "less than 5" misses it, "less than 6" finds it.
        assert_eq!(engine.count_routes("A", "B", 6, BoundType::TotalDistance, false), 1);
        // Exact distance compares against the lowered limit too.
        assert_eq!(engine.count_routes("A", "B", 6, BoundType::TotalDistance, true), 1);
    }

    #[test]
    fn start_alone_is_not_a_route() {
        let store = GraphStore::build([("A", "B", 1)]);
        let engine = RouteEngine::new(&store);
        assert_eq!(engine.count_routes("A", "A", 5, BoundType::StopCount, false), 0);
    }

    #[test]
    fn exact_miss_at_end_keeps_walking() {
        // A->C->A->C: the first arrival at C is one stop short of three.
        let store = GraphStore::build([("A", "C", 1), ("C", "A", 1)]);
        let engine = RouteEngine::new(&store);
        assert_eq!(engine.count_routes("A", "C", 3, BoundType::StopCount, true), 1);
        assert_eq!(engine.count_routes("A", "C", 3, BoundType::StopCount, false), 2);
    }

    #[test]
    fn dead_ends_and_unknown_stations() {
        let store = GraphStore::build([("A", "B", 1)]);
        let engine = RouteEngine::new(&store);
        assert_eq!(engine.count_routes("B", "A", 10, BoundType::StopCount, false), 0);
        assert_eq!(engine.count_routes("Z", "A", 10, BoundType::StopCount, false), 0);
        assert_eq!(engine.count_routes("A", "Z", 10, BoundType::StopCount, false), 0);
    }

    #[test]
    fn parallel_edges_are_distinct_routes() {
        let store = GraphStore::build([("A", "B", 1), ("A", "B", 1)]);
        let engine = RouteEngine::new(&store);
        assert_eq!(engine.count_routes("A", "B", 1, BoundType::StopCount, true), 2);
    }

    #[test]
    fn bound_type_serde_names() {
        let parsed: BoundType = serde_json::from_str("\"stops\"").unwrap();
        assert_eq!(parsed, BoundType::StopCount);
        let parsed: BoundType = serde_json::from_str("\"total_distance\"").unwrap();
        assert_eq!(parsed, BoundType::TotalDistance);
    }
}
