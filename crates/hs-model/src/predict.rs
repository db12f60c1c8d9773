//! The prediction model: stress, displacement and risk for one scenario.

use crate::error::{ModelResult, ValidationError};
use crate::risk::{RiskTier, classify};
use crate::scenario::InjectionScenario;
use crate::thermal::apply_strain;
use hs_core::{HsError, ensure_non_negative};
use hs_core::units::{Length, Pressure, constants::MM_PER_M, m, mpa};

/// Model output for one [`InjectionScenario`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub stress_mpa: f64,
    pub displacement_m: f64,
    pub risk: RiskTier,
}

impl PredictionResult {
    pub fn stress(&self) -> Pressure {
        mpa(self.stress_mpa)
    }

    pub fn displacement(&self) -> Length {
        m(self.displacement_m)
    }

    pub fn displacement_mm(&self) -> f64 {
        self.displacement_m * MM_PER_M
    }
}

/// How strictly inputs are checked before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Any numeric input is evaluated; out-of-range values extrapolate.
    #[default]
    Permissive,
    /// Negative pressure, negative temperature swing and non-finite inputs are rejected.
    Strict,
}

/// Evaluate the model.
///
/// Base stress and displacement come from the formation's quadratic
/// coefficients, both are then scaled by the same thermal strain, and the
/// scaled pair is classified. Never fails; see [`predict_checked`].
pub fn predict(scenario: &InjectionScenario) -> PredictionResult {
    let p = scenario.pressure_mpa;
    let formation = scenario.formation;

    let stress = formation.base_stress(p);
    let displacement = formation.base_displacement(p);

    let strain = scenario.thermal.strain();
    let stress = apply_strain(stress, strain);
    let displacement = apply_strain(displacement, strain);

    PredictionResult {
        stress_mpa: stress,
        displacement_m: displacement,
        risk: classify(stress, displacement),
    }
}

/// Evaluate the model after checking inputs against `policy`.
pub fn predict_checked(
    scenario: &InjectionScenario,
    policy: ValidationPolicy,
) -> ModelResult<PredictionResult> {
    if policy == ValidationPolicy::Strict {
        validate_scenario(scenario)?;
    }
    Ok(predict(scenario))
}

fn validate_scenario(scenario: &InjectionScenario) -> Result<(), ValidationError> {
    non_negative(scenario.pressure_mpa, "pressure", |value| {
        ValidationError::NegativePressure { value }
    })?;
    non_negative(scenario.thermal.delta_t_c, "temperature swing", |value| {
        ValidationError::NegativeTemperatureSwing { value }
    })
}

fn non_negative(
    v: f64,
    what: &'static str,
    negative: impl FnOnce(f64) -> ValidationError,
) -> Result<(), ValidationError> {
    match ensure_non_negative(v, what) {
        Ok(_) => Ok(()),
        Err(HsError::Negative { value, .. }) => Err(negative(value)),
        Err(_) => Err(ValidationError::NonFinite { what, value: v }),
    }
}
