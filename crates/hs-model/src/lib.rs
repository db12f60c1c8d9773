//! hs-model: geomechanical response of hydrogen storage formations.
//!
//! Provides:
//! - Formation types and their empirical stress/displacement coefficients
//! - Injection scenarios with optional thermal cycling
//! - The prediction model (stress, displacement, risk tier)
//! - Pressure sweeps producing response curves for plotting
//!
//! # Architecture
//!
//! Everything here is a pure function of its inputs. There is no global state:
//! the current selection of a front end is an [`InjectionScenario`] value, and
//! the curve settings are a [`SweepDefinition`] value. Evaluation is permissive
//! by default (out-of-range inputs extrapolate); [`predict_checked`] with
//! [`ValidationPolicy::Strict`] rejects non-physical inputs up front.
//!
//! # Example
//!
//! ```
//! use hs_model::{predict, sweep, FormationType, InjectionScenario, RiskTier, ThermalCycling};
//!
//! let scenario = InjectionScenario::new(3.0, FormationType::DepletedGasField);
//! let result = predict(&scenario);
//! assert_eq!(result.risk, RiskTier::Low);
//!
//! let curve = sweep(FormationType::SaltCavern, ThermalCycling::NONE, 1.0, 10.0, 100);
//! assert_eq!(curve.len(), 100);
//! ```

pub mod error;
pub mod formation;
pub mod predict;
pub mod ranges;
pub mod risk;
pub mod scenario;
pub mod sweep_executor;
pub mod sweeps;
pub mod thermal;

// Re-exports for ergonomics
pub use error::{ModelError, ModelResult, ValidationError};
pub use formation::{FormationCoefficients, FormationType};
pub use predict::{PredictionResult, ValidationPolicy, predict, predict_checked};
pub use ranges::{NominalRange, ParameterRanges, RangeWarning};
pub use risk::{RiskThresholds, RiskTier, classify};
pub use scenario::{InjectionScenario, ThermalCycling};
pub use sweep_executor::{ResponseCurve, SweepPoint, execute_sweep, sweep};
pub use sweeps::SweepDefinition;
pub use thermal::{THERMAL_EXPANSION_COEFF, thermal_strain};
