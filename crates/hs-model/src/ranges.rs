//! Nominal input ranges.
//!
//! These are the ranges the model's coefficients were chosen for. Inputs
//! outside them are still evaluated; callers get a [`RangeWarning`] to show
//! or log.

use crate::scenario::{InjectionScenario, ThermalCycling};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl NominalRange {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRanges {
    pub pressure_mpa: NominalRange,
    pub delta_t_c: NominalRange,
    pub cycles: NominalRange,
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self {
            pressure_mpa: NominalRange {
                min: 1.0,
                max: 10.0,
                default: 5.0,
                step: 0.1,
            },
            delta_t_c: NominalRange {
                min: 1.0,
                max: 100.0,
                default: 25.0,
                step: 1.0,
            },
            cycles: NominalRange {
                min: 1.0,
                max: 30.0,
                default: 1.0,
                step: 1.0,
            },
        }
    }
}

/// An input outside its nominal range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeWarning {
    pub parameter: &'static str,
    pub value: f64,
    pub range: NominalRange,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} is outside the nominal range [{}, {}]; result is extrapolated",
            self.parameter, self.value, self.range.min, self.range.max
        )
    }
}

impl ParameterRanges {
    /// Default thermal settings used when the cycling toggle is switched on.
    pub fn default_thermal(&self) -> ThermalCycling {
        ThermalCycling::new(self.delta_t_c.default, self.cycles.default as u32)
    }

    /// Collect warnings for every out-of-range input.
    ///
    /// Thermal inputs are only checked when cycling is active, since
    /// [`ThermalCycling::NONE`] deliberately sits outside the swing range.
    pub fn check(&self, scenario: &InjectionScenario) -> Vec<RangeWarning> {
        let mut warnings = Vec::new();

        let mut push = |parameter, value: f64, range: NominalRange| {
            if !range.contains(value) {
                warnings.push(RangeWarning {
                    parameter,
                    value,
                    range,
                });
            }
        };

        push("pressure_mpa", scenario.pressure_mpa, self.pressure_mpa);
        if scenario.thermal != ThermalCycling::NONE {
            push("delta_t_c", scenario.thermal.delta_t_c, self.delta_t_c);
            push("cycles", f64::from(scenario.thermal.cycles), self.cycles);
        }

        warnings
    }
}
