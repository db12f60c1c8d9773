//! Study validation logic.

use crate::schema::{CaseDef, Study, SweepDef, ValidationModeDef};
use hs_core::ensure_finite;
use hs_model::{ModelError, ValidationPolicy, predict_checked};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing value: {field} in {context}")]
    MissingValue { field: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    if let Some(sweep) = &study.sweep {
        validate_sweep(sweep)?;
    }

    let mut case_ids = HashSet::new();
    for case in &study.cases {
        if case.id.trim().is_empty() {
            return Err(ValidationError::MissingValue {
                field: "id".to_string(),
                context: format!("case '{}'", case.name),
            });
        }
        if !case_ids.insert(&case.id) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }
        validate_case(case, study.validation)?;
    }

    Ok(())
}

fn validate_sweep(sweep: &SweepDef) -> Result<(), ValidationError> {
    hs_model::SweepDefinition::new(sweep.low_mpa, sweep.high_mpa, sweep.samples)
        .map(|_| ())
        .map_err(|e| ValidationError::InvalidValue {
            field: "sweep".to_string(),
            value: format!("{}..{} x{}", sweep.low_mpa, sweep.high_mpa, sweep.samples),
            reason: e.to_string(),
        })
}

fn validate_case(case: &CaseDef, mode: ValidationModeDef) -> Result<(), ValidationError> {
    let field = |name: &str| format!("case '{}' {}", case.id, name);

    let not_finite = |name: &str, value: f64| ValidationError::InvalidValue {
        field: field(name),
        value: value.to_string(),
        reason: "must be finite".to_string(),
    };

    ensure_finite(case.pressure_mpa, "pressure")
        .map_err(|_| not_finite("pressure_mpa", case.pressure_mpa))?;
    if let Some(thermal) = &case.thermal {
        ensure_finite(thermal.delta_t_c, "temperature swing")
            .map_err(|_| not_finite("thermal.delta_t_c", thermal.delta_t_c))?;
    }

    let scenario = case.to_scenario().map_err(|e| ValidationError::InvalidValue {
        field: field("formation"),
        value: case.formation.clone(),
        reason: e.to_string(),
    })?;

    if mode == ValidationModeDef::Strict {
        predict_checked(&scenario, ValidationPolicy::Strict).map_err(|e| {
            let value = match &e {
                ModelError::Validation(v) => v.to_string(),
                other => other.to_string(),
            };
            ValidationError::InvalidValue {
                field: field("inputs"),
                value,
                reason: "rejected by strict validation".to_string(),
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ThermalDef;

    fn case(id: &str, pressure_mpa: f64) -> CaseDef {
        CaseDef {
            id: id.to_string(),
            name: format!("Case {id}"),
            formation: "depleted_gas_field".to_string(),
            pressure_mpa,
            thermal: None,
        }
    }

    fn study(cases: Vec<CaseDef>) -> Study {
        Study {
            version: 1,
            name: "test".to_string(),
            description: None,
            sweep: None,
            validation: ValidationModeDef::Permissive,
            cases,
        }
    }

    #[test]
    fn valid_study_passes() {
        validate_study(&study(vec![case("a", 5.0), case("b", 3.0)])).unwrap();
    }

    #[test]
    fn duplicate_case_ids() {
        let err = validate_study(&study(vec![case("a", 5.0), case("a", 3.0)])).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn blank_case_id() {
        let err = validate_study(&study(vec![case("  ", 5.0)])).unwrap_err();
        assert!(matches!(err, ValidationError::MissingValue { .. }));
    }

    #[test]
    fn unknown_formation() {
        let mut c = case("a", 5.0);
        c.formation = "aquifer".to_string();
        let err = validate_study(&study(vec![c])).unwrap_err();
        assert!(err.to_string().contains("aquifer"));
    }

    #[test]
    fn future_version_rejected() {
        let mut s = study(vec![]);
        s.version = 99;
        assert!(matches!(
            validate_study(&s),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        ));
    }

    #[test]
    fn bad_sweep_rejected() {
        let mut s = study(vec![]);
        s.sweep = Some(SweepDef {
            low_mpa: 1.0,
            high_mpa: 10.0,
            samples: 1,
        });
        assert!(matches!(
            validate_study(&s),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn reversed_sweep_rejected() {
        let mut s = study(vec![case("a", 5.0)]);
        s.sweep = Some(SweepDef {
            low_mpa: 10.0,
            high_mpa: 1.0,
            samples: 100,
        });
        let err = validate_study(&s).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field == "sweep"));
    }

    #[test]
    fn negative_pressure_depends_on_mode() {
        let mut s = study(vec![case("neg", -1.0)]);
        validate_study(&s).unwrap();

        s.validation = ValidationModeDef::Strict;
        let err = validate_study(&s).unwrap_err();
        assert!(err.to_string().contains("strict"));
    }

    #[test]
    fn non_finite_swing_rejected() {
        let mut c = case("a", 5.0);
        c.thermal = Some(ThermalDef {
            delta_t_c: f64::INFINITY,
            cycles: 2,
        });
        assert!(validate_study(&study(vec![c])).is_err());
    }
}
