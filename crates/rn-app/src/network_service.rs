//! Network and plan loading.

use std::path::Path;

use rn_graph::GraphStore;
use rn_network::QueryPlan;

use crate::error::{AppError, AppResult};

/// Read, validate and build a network file.
pub fn load_network(path: &Path) -> AppResult<GraphStore> {
    let edges = rn_network::read_network(path).map_err(|e| AppError::NetworkLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let store = GraphStore::build(edges);
    tracing::info!(
        path = %path.display(),
        stations = store.vertex_count(),
        edges = store.edge_count(),
        "loaded network"
    );
    Ok(store)
}

/// Load a plan file, or fall back to the standard ten queries.
pub fn load_plan_or_standard(path: Option<&Path>) -> AppResult<QueryPlan> {
    let Some(path) = path else {
        return Ok(QueryPlan::standard());
    };
    rn_network::load_plan(path).map_err(|e| AppError::PlanLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSummary {
    pub stations: Vec<String>,
    pub edge_count: usize,
    pub dead_ends: Vec<String>,
}

/// Stations (insertion order), edge count and stations with no departures.
pub fn network_summary(store: &GraphStore) -> NetworkSummary {
    let stations = store
        .vertices()
        .iter()
        .map(|(_, label)| label.to_string())
        .collect();
    let dead_ends = store
        .vertices()
        .iter()
        .filter(|&(id, _)| store.neighbours_of(id).is_none())
        .map(|(_, label)| label.to_string())
        .collect();
    NetworkSummary {
        stations,
        edge_count: store.edge_count(),
        dead_ends,
    }
}
