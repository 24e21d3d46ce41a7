//! Query plan schema definitions.

use rn_core::Metric;
use rn_routes::BoundType;
use serde::{Deserialize, Serialize};

/// An ordered list of queries to run against one network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueryPlan {
    #[serde(default)]
    pub queries: Vec<PlannedQuery>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub query: Query,
}

impl PlannedQuery {
    pub fn new(query: Query) -> Self {
        Self { label: None, query }
    }

    pub fn labelled(label: impl Into<String>, query: Query) -> Self {
        Self {
            label: Some(label.into()),
            query,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Query {
    /// Cost a fixed route, written `ABC` or `A-B-C`.
    RouteDistance { route: String },
    CountRoutes {
        start: String,
        end: String,
        bound: Metric,
        bound_type: BoundType,
        #[serde(default)]
        exact: bool,
    },
    ShortestPath { start: String, end: String },
}

impl Query {
    pub fn route(route: impl Into<String>) -> Self {
        Query::RouteDistance {
            route: route.into(),
        }
    }

    pub fn count(
        start: impl Into<String>,
        end: impl Into<String>,
        bound: Metric,
        bound_type: BoundType,
        exact: bool,
    ) -> Self {
        Query::CountRoutes {
            start: start.into(),
            end: end.into(),
            bound,
            bound_type,
            exact,
        }
    }

    pub fn shortest(start: impl Into<String>, end: impl Into<String>) -> Self {
        Query::ShortestPath {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl QueryPlan {
    /// The ten standard report queries.
    pub fn standard() -> Self {
        let queries = vec![
            PlannedQuery::labelled("distance A-B-C", Query::route("ABC")),
            PlannedQuery::labelled("distance A-D", Query::route("AD")),
            PlannedQuery::labelled("distance A-D-C", Query::route("ADC")),
            PlannedQuery::labelled("distance A-E-B-C-D", Query::route("AEBCD")),
            PlannedQuery::labelled("distance A-E-D", Query::route("AED")),
            PlannedQuery::labelled(
                "trips C to C, at most 3 stops",
                Query::count("C", "C", 3, BoundType::StopCount, false),
            ),
            PlannedQuery::labelled(
                "trips A to C, exactly 4 stops",
                Query::count("A", "C", 4, BoundType::StopCount, true),
            ),
            PlannedQuery::labelled("shortest A to C", Query::shortest("A", "C")),
            PlannedQuery::labelled("shortest B to B", Query::shortest("B", "B")),
            PlannedQuery::labelled(
                "trips C to C, distance under 30",
                Query::count("C", "C", 30, BoundType::TotalDistance, false),
            ),
        ];
        Self { queries }
    }
}
