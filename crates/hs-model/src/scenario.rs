//! Injection scenario inputs.

use crate::formation::FormationType;
use hs_core::units::{Pressure, TempInterval, to_delta_c, to_mpa};

/// Temperature swing applied over a number of injection/withdrawal cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalCycling {
    /// Swing in °C
    pub delta_t_c: f64,
    pub cycles: u32,
}

impl ThermalCycling {
    /// Thermal cycling switched off (ΔT = 0, one cycle).
    pub const NONE: ThermalCycling = ThermalCycling {
        delta_t_c: 0.0,
        cycles: 1,
    };

    pub fn new(delta_t_c: f64, cycles: u32) -> Self {
        Self { delta_t_c, cycles }
    }

    /// Collapse an optional toggle into concrete values.
    pub fn from_toggle(toggle: Option<ThermalCycling>) -> Self {
        toggle.unwrap_or(Self::NONE)
    }

    pub fn strain(&self) -> f64 {
        crate::thermal::thermal_strain(self.delta_t_c, self.cycles)
    }
}

impl Default for ThermalCycling {
    fn default() -> Self {
        Self::NONE
    }
}

/// One set of inputs to the prediction model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InjectionScenario {
    /// Injection pressure in MPa
    pub pressure_mpa: f64,
    pub formation: FormationType,
    pub thermal: ThermalCycling,
}

impl InjectionScenario {
    pub fn new(pressure_mpa: f64, formation: FormationType) -> Self {
        Self {
            pressure_mpa,
            formation,
            thermal: ThermalCycling::NONE,
        }
    }

    pub fn with_thermal(mut self, thermal: ThermalCycling) -> Self {
        self.thermal = thermal;
        self
    }

    pub fn from_quantities(
        pressure: Pressure,
        formation: FormationType,
        delta_t: TempInterval,
        cycles: u32,
    ) -> Self {
        Self {
            pressure_mpa: to_mpa(pressure),
            formation,
            thermal: ThermalCycling::new(to_delta_c(delta_t), cycles),
        }
    }

    /// Same formation and thermal settings at another pressure.
    pub fn at_pressure(&self, pressure_mpa: f64) -> Self {
        Self {
            pressure_mpa,
            ..*self
        }
    }

    pub fn delta_t_c(&self) -> f64 {
        self.thermal.delta_t_c
    }

    pub fn cycles(&self) -> u32 {
        self.thermal.cycles
    }
}
