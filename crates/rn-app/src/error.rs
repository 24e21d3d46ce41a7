//! Error types for the rn-app service layer.

use std::path::PathBuf;

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to load network {path}: {message}")]
    NetworkLoad { path: PathBuf, message: String },

    #[error("Failed to load query plan {path}: {message}")]
    PlanLoad { path: PathBuf, message: String },

    #[error(transparent)]
    Core(#[from] rn_core::RnError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for rn-app operations.
pub type AppResult<T> = Result<T, AppError>;
