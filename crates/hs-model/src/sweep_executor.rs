//! Sweep execution: evaluate the prediction model across a pressure range.
//!
//! Connects [`SweepDefinition`] with [`predict`] to produce response curves
//! (stress vs pressure, displacement vs pressure) suitable for plotting.

use crate::formation::FormationType;
use crate::predict::{PredictionResult, predict};
use crate::risk::RiskTier;
use crate::scenario::{InjectionScenario, ThermalCycling};
use crate::sweeps::SweepDefinition;

/// One evaluated point on a response curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub pressure_mpa: f64,
    pub stress_mpa: f64,
    /// Displacement in millimetres (plot units)
    pub displacement_mm: f64,
    pub risk: RiskTier,
}

impl SweepPoint {
    fn from_prediction(pressure_mpa: f64, r: &PredictionResult) -> Self {
        Self {
            pressure_mpa,
            stress_mpa: r.stress_mpa,
            displacement_mm: r.displacement_mm(),
            risk: r.risk,
        }
    }
}

/// Result of a pressure sweep, in ascending pressure order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseCurve {
    pub formation: FormationType,
    pub thermal: ThermalCycling,
    pub points: Vec<SweepPoint>,
}

impl ResponseCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SweepPoint> {
        self.points.iter()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pressure_mpa).collect()
    }

    pub fn stresses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.stress_mpa).collect()
    }

    pub fn displacements_mm(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.displacement_mm).collect()
    }

    /// Curve values at the caller's selected pressure (the plot marker).
    ///
    /// Evaluated directly rather than interpolated, so it matches the
    /// single-point prediction exactly even between samples.
    pub fn marker_at(&self, pressure_mpa: f64) -> SweepPoint {
        let scenario =
            InjectionScenario::new(pressure_mpa, self.formation).with_thermal(self.thermal);
        SweepPoint::from_prediction(pressure_mpa, &predict(&scenario))
    }

    /// Lowest swept point whose tier is at least `tier`.
    pub fn first_crossing(&self, tier: RiskTier) -> Option<&SweepPoint> {
        self.points.iter().find(|p| p.risk >= tier)
    }
}

impl<'a> IntoIterator for &'a ResponseCurve {
    type Item = &'a SweepPoint;
    type IntoIter = std::slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Execute a sweep described by `sweep_def`, holding formation and thermal
/// settings fixed.
pub fn execute_sweep(
    sweep_def: &SweepDefinition,
    formation: FormationType,
    thermal: ThermalCycling,
) -> ResponseCurve {
    let base = InjectionScenario::new(sweep_def.low_mpa, formation).with_thermal(thermal);

    let points = sweep_def
        .generate_points()
        .into_iter()
        .map(|p| SweepPoint::from_prediction(p, &predict(&base.at_pressure(p))))
        .collect();

    ResponseCurve {
        formation,
        thermal,
        points,
    }
}

/// Sweep `samples` evenly spaced pressures over `[low_mpa, high_mpa]`.
///
/// Bounds are not checked; use [`SweepDefinition::new`] for that.
pub fn sweep(
    formation: FormationType,
    thermal: ThermalCycling,
    low_mpa: f64,
    high_mpa: f64,
    samples: usize,
) -> ResponseCurve {
    let def = SweepDefinition {
        low_mpa,
        high_mpa,
        samples,
    };
    execute_sweep(&def, formation, thermal)
}
