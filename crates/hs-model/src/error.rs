//! Model errors.

use hs_core::HsError;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Input rejected by strict validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Negative injection pressure: {value} MPa")]
    NegativePressure { value: f64 },

    #[error("Negative temperature swing: {value} °C")]
    NegativeTemperatureSwing { value: f64 },

    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// Errors that can occur while evaluating the model or building sweeps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Scenario rejected before evaluation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Sweep bounds or point count unusable.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: String },

    /// Unrecognised formation name.
    #[error("Unknown formation type: '{name}'")]
    UnknownFormation { name: String },

    #[error(transparent)]
    Core(#[from] HsError),
}
