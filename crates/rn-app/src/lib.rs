//! Shared application service layer for railnet.
//!
//! Loads networks, runs query plans and shapes results for the CLI.

pub mod error;
pub mod network_service;
pub mod report;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use network_service::{NetworkSummary, load_network, load_plan_or_standard, network_summary};
pub use report::{
    QueryOutcome, ReportLine, render_json, route_distance_checked, run_plan, run_query,
};
