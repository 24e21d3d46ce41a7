//! Running query plans and shaping the results.

use core::fmt;

use rn_graph::GraphStore;
use rn_network::{Query, QueryPlan};
use rn_routes::{PathLength, RouteDistance, RouteEngine, split_route};
use serde::Serialize;

use crate::error::AppResult;

/// Result of a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOutcome {
    Distance(RouteDistance),
    Count(u64),
    Length(PathLength),
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Distance(d) => write!(f, "{}", d),
            QueryOutcome::Count(n) => write!(f, "{}", n),
            QueryOutcome::Length(l) => write!(f, "{}", l),
        }
    }
}

/// One numbered line of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// 1-based position in the plan.
    pub number: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub outcome: QueryOutcome,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output #{}: {}", self.number, self.outcome)
    }
}

pub fn run_query(store: &GraphStore, query: &Query) -> QueryOutcome {
    let engine = RouteEngine::new(store);
    match query {
        Query::RouteDistance { route } => QueryOutcome::Distance(engine.route_distance_str(route)),
        Query::CountRoutes {
            start,
            end,
            bound,
            bound_type,
            exact,
        } => QueryOutcome::Count(engine.count_routes(start, end, *bound, *bound_type, *exact)),
        Query::ShortestPath { start, end } => {
            QueryOutcome::Length(engine.shortest_path_length(start, end))
        }
    }
}

/// Cost a textual route, rejecting stations the network does not know.
///
/// Known stations always get the engine's answer, so a single-station
/// route reports [`RouteDistance::NoSuchRoute`].
pub fn route_distance_checked(store: &GraphStore, route: &str) -> AppResult<RouteDistance> {
    let stations = split_route(route);
    for station in &stations {
        store.require_vertex(station)?;
    }
    Ok(RouteEngine::new(store).route_distance(&stations))
}

/// Pretty JSON for a report.
pub fn render_json(lines: &[ReportLine]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(lines)?)
}

/// Run every query in order against one store.
pub fn run_plan(store: &GraphStore, plan: &QueryPlan) -> Vec<ReportLine> {
    let lines: Vec<ReportLine> = plan
        .queries
        .iter()
        .enumerate()
        .map(|(i, planned)| ReportLine {
            number: i + 1,
            label: planned.label.clone(),
            outcome: run_query(store, &planned.query),
        })
        .collect();
    tracing::debug!(queries = lines.len(), "ran query plan");
    lines
}
