//! Error types for the hs-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Study error: {0}")]
    Study(String),

    #[error("Failed to read study file: {path}")]
    StudyFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Study validation failed: {0}")]
    Validation(String),

    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for hs-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<hs_project::ProjectError> for AppError {
    fn from(err: hs_project::ProjectError) -> Self {
        match err {
            hs_project::ProjectError::Validation(v) => AppError::Validation(v.to_string()),
            other => AppError::Study(other.to_string()),
        }
    }
}

impl From<hs_project::ValidationError> for AppError {
    fn from(err: hs_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<hs_model::ModelError> for AppError {
    fn from(err: hs_model::ModelError) -> Self {
        AppError::Model(err.to_string())
    }
}
