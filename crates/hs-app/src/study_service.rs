//! Study loading, saving, validation, and introspection.

use hs_project::schema::{CaseDef, Study};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub id: String,
    pub name: String,
    pub formation: String,
    pub pressure_mpa: f64,
    pub thermal_cycling: bool,
}

/// Load a study from a YAML or JSON file (chosen by extension).
pub fn load_study(path: &Path) -> AppResult<Study> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::StudyFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let study: Study = if is_json(path) {
        serde_json::from_str(&content)
            .map_err(|e| AppError::Study(format!("Failed to parse study JSON: {}", e)))?
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Study(format!("Failed to parse study YAML: {}", e)))?
    };
    let study = hs_project::migrate_to_latest(study)?;

    tracing::info!(
        path = %path.display(),
        name = %study.name,
        cases = study.cases.len(),
        "loaded study"
    );
    Ok(study)
}

/// Save a study, validating it first.
pub fn save_study(path: &Path, study: &Study) -> AppResult<()> {
    validate_study(study)?;

    let content = if is_json(path) {
        serde_json::to_string_pretty(study)
            .map_err(|e| AppError::Study(format!("Failed to serialize study: {}", e)))?
    } else {
        serde_yaml::to_string(study)
            .map_err(|e| AppError::Study(format!("Failed to serialize study: {}", e)))?
    };

    std::fs::write(path, content).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Validate study structure and case inputs.
pub fn validate_study(study: &Study) -> AppResult<()> {
    if study.cases.is_empty() {
        return Err(AppError::Validation(
            "Study must have at least one case".to_string(),
        ));
    }
    hs_project::validate_study(study)?;
    Ok(())
}

/// List all cases in the study with summaries.
pub fn list_cases(study: &Study) -> Vec<CaseSummary> {
    study
        .cases
        .iter()
        .map(|case| CaseSummary {
            id: case.id.clone(),
            name: case.name.clone(),
            formation: case
                .formation_type()
                .map(|f| f.label().to_string())
                .unwrap_or_else(|_| case.formation.clone()),
            pressure_mpa: case.pressure_mpa,
            thermal_cycling: case.thermal.is_some(),
        })
        .collect()
}

/// Get a specific case by ID.
pub fn get_case<'a>(study: &'a Study, case_id: &str) -> AppResult<&'a CaseDef> {
    study
        .cases
        .iter()
        .find(|c| c.id == case_id)
        .ok_or_else(|| AppError::CaseNotFound(case_id.to_string()))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
