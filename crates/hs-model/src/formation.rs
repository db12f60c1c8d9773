//! Storage formation types and their empirical response coefficients.
//!
//! Each formation maps injection pressure `P` (MPa) to a base stress and a base
//! displacement through a quadratic `a·P + b·P²`. The coefficients are fixed
//! screening values, not calibrated against field data.

use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Subsurface structure used for hydrogen storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormationType {
    DepletedGasField,
    SaltCavern,
}

/// Quadratic response `linear·P + quadratic·P²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationCoefficients {
    pub linear: f64,
    pub quadratic: f64,
}

impl FormationCoefficients {
    #[inline]
    pub fn eval(&self, p_mpa: f64) -> f64 {
        self.linear * p_mpa + self.quadratic * p_mpa.powi(2)
    }
}

impl FormationType {
    pub const ALL: [FormationType; 2] = [FormationType::DepletedGasField, FormationType::SaltCavern];

    /// Stress coefficients (MPa per MPa, MPa per MPa²).
    pub fn stress_coefficients(self) -> FormationCoefficients {
        match self {
            Self::DepletedGasField => FormationCoefficients {
                linear: 0.21,
                quadratic: 0.3,
            },
            Self::SaltCavern => FormationCoefficients {
                linear: 0.18,
                quadratic: 0.2,
            },
        }
    }

    /// Displacement coefficients (m per MPa, m per MPa²).
    pub fn displacement_coefficients(self) -> FormationCoefficients {
        match self {
            Self::DepletedGasField => FormationCoefficients {
                linear: 0.0015,
                quadratic: 0.0001,
            },
            Self::SaltCavern => FormationCoefficients {
                linear: 0.001,
                quadratic: 0.00005,
            },
        }
    }

    /// Stress before any thermal adjustment, in MPa.
    pub fn base_stress(self, p_mpa: f64) -> f64 {
        self.stress_coefficients().eval(p_mpa)
    }

    /// Displacement before any thermal adjustment, in metres.
    pub fn base_displacement(self, p_mpa: f64) -> f64 {
        self.displacement_coefficients().eval(p_mpa)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::DepletedGasField => "Depleted Gas Field",
            Self::SaltCavern => "Salt Cavern",
        }
    }

    /// Stable identifier used in study files.
    pub fn key(self) -> &'static str {
        match self {
            Self::DepletedGasField => "depleted_gas_field",
            Self::SaltCavern => "salt_cavern",
        }
    }
}

impl fmt::Display for FormationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FormationType {
    type Err = ModelError;

    /// Accepts the label, the study-file key, or the enum name; case and
    /// separators (space, `_`, `-`) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match norm.as_str() {
            "depletedgasfield" | "dgf" => Ok(Self::DepletedGasField),
            "saltcavern" | "sc" => Ok(Self::SaltCavern),
            _ => Err(ModelError::UnknownFormation {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_values_at_five_mpa() {
        let dgf = FormationType::DepletedGasField;
        assert!((dgf.base_stress(5.0) - 8.55).abs() < 1e-12);
        assert!((dgf.base_displacement(5.0) - 0.01).abs() < 1e-12);

        let sc = FormationType::SaltCavern;
        assert!((sc.base_stress(5.0) - 5.9).abs() < 1e-12);
        assert!((sc.base_displacement(5.0) - 0.00625).abs() < 1e-12);
    }

    #[test]
    fn zero_pressure_gives_zero_response() {
        for f in FormationType::ALL {
            assert_eq!(f.base_stress(0.0), 0.0);
            assert_eq!(f.base_displacement(0.0), 0.0);
        }
    }

    #[test]
    fn parse_labels_and_keys() {
        for f in FormationType::ALL {
            assert_eq!(f.label().parse::<FormationType>().unwrap(), f);
            assert_eq!(f.key().parse::<FormationType>().unwrap(), f);
            assert_eq!(format!("{f:?}").parse::<FormationType>().unwrap(), f);
        }
        assert_eq!(
            "salt-cavern".parse::<FormationType>().unwrap(),
            FormationType::SaltCavern
        );
    }

    #[test]
    fn parse_unknown_formation() {
        let err = "aquifer".parse::<FormationType>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownFormation { .. }));
    }
}
