//! Study file schema definitions.

use hs_model::{
    FormationType, InjectionScenario, ModelResult, SweepDefinition, ThermalCycling,
    ValidationPolicy,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweep: Option<SweepDef>,
    #[serde(default)]
    pub validation: ValidationModeDef,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

impl Study {
    pub fn sweep_definition(&self) -> SweepDefinition {
        self.sweep.map(SweepDef::to_definition).unwrap_or_default()
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        self.validation.into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    pub name: String,
    /// Formation key, e.g. `depleted_gas_field` or `salt_cavern`
    pub formation: String,
    pub pressure_mpa: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal: Option<ThermalDef>,
}

impl CaseDef {
    pub fn formation_type(&self) -> ModelResult<FormationType> {
        self.formation.parse()
    }

    pub fn to_scenario(&self) -> ModelResult<InjectionScenario> {
        let formation = self.formation_type()?;
        let thermal = ThermalCycling::from_toggle(self.thermal.map(ThermalDef::to_cycling));
        Ok(InjectionScenario::new(self.pressure_mpa, formation).with_thermal(thermal))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ThermalDef {
    pub delta_t_c: f64,
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

fn default_cycles() -> u32 {
    1
}

impl ThermalDef {
    pub fn to_cycling(self) -> ThermalCycling {
        ThermalCycling::new(self.delta_t_c, self.cycles)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub low_mpa: f64,
    pub high_mpa: f64,
    pub samples: usize,
}

impl Default for SweepDef {
    fn default() -> Self {
        let def = SweepDefinition::default();
        Self {
            low_mpa: def.low_mpa,
            high_mpa: def.high_mpa,
            samples: def.samples,
        }
    }
}

impl SweepDef {
    pub fn to_definition(self) -> SweepDefinition {
        SweepDefinition {
            low_mpa: self.low_mpa,
            high_mpa: self.high_mpa,
            samples: self.samples,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationModeDef {
    #[default]
    Permissive,
    Strict,
}

impl From<ValidationModeDef> for ValidationPolicy {
    fn from(mode: ValidationModeDef) -> Self {
        match mode {
            ValidationModeDef::Permissive => ValidationPolicy::Permissive,
            ValidationModeDef::Strict => ValidationPolicy::Strict,
        }
    }
}
