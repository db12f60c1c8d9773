//! Shared application service layer for h2store.
//!
//! Centralizes study management, evaluation and report rendering so that
//! every front end drives the model the same way.

pub mod error;
pub mod evaluate_service;
pub mod report;
pub mod study_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use evaluate_service::{EvaluateRequest, Evaluation, evaluate, evaluate_all, evaluate_case};
pub use report::{crossing_summary, curve_to_csv, format_report, write_curve_csv};
pub use study_service::{
    CaseSummary, get_case, list_cases, load_study, save_study, validate_study,
};
