//! Evaluation: one prediction for the current selection plus the response
//! curve for the chart.

use hs_model::{
    InjectionScenario, ParameterRanges, PredictionResult, RangeWarning, ResponseCurve,
    SweepDefinition, SweepPoint, ValidationPolicy, execute_sweep, predict_checked,
};
use hs_project::schema::Study;

use crate::error::{AppError, AppResult};
use crate::study_service;

/// Everything needed for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluateRequest {
    pub scenario: InjectionScenario,
    pub sweep: SweepDefinition,
    pub policy: ValidationPolicy,
    pub ranges: ParameterRanges,
}

impl EvaluateRequest {
    pub fn new(scenario: InjectionScenario) -> Self {
        Self {
            scenario,
            sweep: SweepDefinition::default(),
            policy: ValidationPolicy::default(),
            ranges: ParameterRanges::default(),
        }
    }

    pub fn with_sweep(mut self, sweep: SweepDefinition) -> Self {
        self.sweep = sweep;
        self
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Result of an evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub scenario: InjectionScenario,
    pub result: PredictionResult,
    pub curve: ResponseCurve,
    /// Curve values at the selected pressure
    pub marker: SweepPoint,
    pub warnings: Vec<RangeWarning>,
}

/// Run the prediction for the selected scenario and the sweep around it.
pub fn evaluate(request: &EvaluateRequest) -> AppResult<Evaluation> {
    let scenario = request.scenario;
    let _span = tracing::debug_span!(
        "evaluate",
        formation = %scenario.formation,
        pressure_mpa = scenario.pressure_mpa
    )
    .entered();

    let sweep = SweepDefinition::new(
        request.sweep.low_mpa,
        request.sweep.high_mpa,
        request.sweep.samples,
    )
    .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let result = predict_checked(&scenario, request.policy)?;

    let warnings = request.ranges.check(&scenario);
    for w in &warnings {
        tracing::warn!(parameter = w.parameter, value = w.value, "{}", w);
    }

    let curve = execute_sweep(&sweep, scenario.formation, scenario.thermal);
    let marker = curve.marker_at(scenario.pressure_mpa);

    tracing::debug!(
        stress_mpa = result.stress_mpa,
        displacement_m = result.displacement_m,
        risk = %result.risk,
        points = curve.len(),
        "evaluation complete"
    );

    Ok(Evaluation {
        scenario,
        result,
        curve,
        marker,
        warnings,
    })
}

/// Resolve a study case and evaluate it with the study's sweep and policy.
pub fn evaluate_case(study: &Study, case_id: &str) -> AppResult<Evaluation> {
    let case = study_service::get_case(study, case_id)?;
    let scenario = case.to_scenario()?;

    let request = EvaluateRequest::new(scenario)
        .with_sweep(study.sweep_definition())
        .with_policy(study.validation_policy());

    evaluate(&request)
}

/// Evaluate every case in study order, stopping at the first failure.
pub fn evaluate_all(study: &Study) -> AppResult<Vec<(String, Evaluation)>> {
    study
        .cases
        .iter()
        .map(|case| evaluate_case(study, &case.id).map(|e| (case.id.clone(), e)))
        .collect()
}
