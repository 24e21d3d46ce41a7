//! rn-core: stable foundation for railnet.
//!
//! Contains:
//! - ids (compact vertex IDs handed out by the graph store)
//! - metric (edge distances, accumulated totals, edge records)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod metric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RnError, RnResult};
pub use ids::*;
pub use metric::*;
