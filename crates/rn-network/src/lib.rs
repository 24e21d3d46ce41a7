//! rn-network: network file reading and query plan files.

pub mod schema;
pub mod tokens;
pub mod validate;

pub use schema::*;
pub use tokens::{parse_tokens, tokens_to_edges};
pub use validate::{ValidationError, validate_plan, validate_tokens};

use rn_core::Edge;

pub type NetworkResult<T> = Result<T, NetworkError>;

#[derive(thiserror::Error, Debug)]
pub enum NetworkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported plan format: {path}")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse and validate network text (`AB5, BC4, ...`) into edges.
pub fn parse_network(text: &str) -> NetworkResult<Vec<Edge>> {
    let tokens = parse_tokens(text);
    validate_tokens(&tokens)?;
    Ok(tokens_to_edges(&tokens))
}

/// Read a network file of comma-separated edge tokens.
pub fn read_network(path: &std::path::Path) -> NetworkResult<Vec<Edge>> {
    let content = std::fs::read_to_string(path)?;
    let edges = parse_network(&content)?;
    tracing::debug!(path = %path.display(), edges = edges.len(), "read network file");
    Ok(edges)
}

pub fn load_plan_yaml(path: &std::path::Path) -> NetworkResult<QueryPlan> {
    let content = std::fs::read_to_string(path)?;
    let plan: QueryPlan = serde_yaml::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

pub fn save_plan_yaml(path: &std::path::Path, plan: &QueryPlan) -> NetworkResult<()> {
    validate_plan(plan)?;
    let content = serde_yaml::to_string(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_plan_json(path: &std::path::Path) -> NetworkResult<QueryPlan> {
    let content = std::fs::read_to_string(path)?;
    let plan: QueryPlan = serde_json::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

/// Load a plan, choosing the format from the file extension.
pub fn load_plan(path: &std::path::Path) -> NetworkResult<QueryPlan> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => load_plan_yaml(path),
        Some("json") => load_plan_json(path),
        _ => Err(NetworkError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}
