//! Text and CSV rendering of evaluations.

use hs_core::units::{to_mm, to_mpa};
use hs_model::{ResponseCurve, RiskTier};
use std::fmt::Write as _;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::evaluate_service::Evaluation;

pub const CSV_HEADER: &str = "pressure_mpa,stress_mpa,displacement_mm";

/// Plain-text summary of one evaluation.
pub fn format_report(eval: &Evaluation) -> String {
    let s = &eval.scenario;
    let r = &eval.result;
    let mut out = String::new();

    let _ = writeln!(out, "Formation:              {}", s.formation);
    let _ = writeln!(out, "Injection pressure:     {:.2} MPa", s.pressure_mpa);
    if s.thermal.strain() != 0.0 {
        let _ = writeln!(
            out,
            "Thermal cycling:        {:.1} °C x {} cycle(s)",
            s.thermal.delta_t_c, s.thermal.cycles
        );
    } else {
        let _ = writeln!(out, "Thermal cycling:        off");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Predicted stress:       {:.2} MPa", to_mpa(r.stress()));
    let _ = writeln!(out, "Predicted displacement: {:.2} mm", to_mm(r.displacement()));
    let _ = writeln!(out, "Risk level:             {}", r.risk);
    let _ = writeln!(out, "  {}", r.risk.advisory());

    if let Some(summary) = crossing_summary(&eval.curve) {
        let _ = writeln!(out);
        let _ = write!(out, "{summary}");
    }

    for w in &eval.warnings {
        let _ = writeln!(out, "note: {w}");
    }

    out
}

/// Pressures at which the swept curve first enters each elevated tier.
pub fn crossing_summary(curve: &ResponseCurve) -> Option<String> {
    if curve.is_empty() {
        return None;
    }

    let mut out = String::new();
    for tier in [RiskTier::Moderate, RiskTier::High] {
        match curve.first_crossing(tier) {
            Some(p) => {
                let _ = writeln!(out, "{} from:  {:.2} MPa", tier, p.pressure_mpa);
            }
            None => {
                let _ = writeln!(out, "{} from:  not reached in sweep", tier);
            }
        }
    }
    Some(out)
}

/// CSV of a response curve, header included.
pub fn curve_to_csv(curve: &ResponseCurve) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for p in curve {
        let _ = writeln!(
            csv,
            "{},{},{}",
            p.pressure_mpa, p.stress_mpa, p.displacement_mm
        );
    }
    csv
}

pub fn write_curve_csv(path: &Path, curve: &ResponseCurve) -> AppResult<()> {
    std::fs::write(path, curve_to_csv(curve)).map_err(|e| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
