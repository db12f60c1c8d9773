//! Pressure sweep generation.
//!
//! Produces the evenly spaced pressures a response curve is evaluated at.

use crate::error::{ModelError, ModelResult};
use std::fmt;

/// Definition of a pressure sweep over the closed interval `[low_mpa, high_mpa]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepDefinition {
    /// Start pressure in MPa
    pub low_mpa: f64,
    /// End pressure in MPa
    pub high_mpa: f64,
    /// Number of points to generate
    pub samples: usize,
}

impl Default for SweepDefinition {
    fn default() -> Self {
        Self {
            low_mpa: 1.0,
            high_mpa: 10.0,
            samples: 100,
        }
    }
}

impl SweepDefinition {
    /// Create a checked sweep.
    pub fn new(low_mpa: f64, high_mpa: f64, samples: usize) -> ModelResult<Self> {
        let low_mpa = hs_core::ensure_finite(low_mpa, "sweep low pressure")?;
        let high_mpa = hs_core::ensure_finite(high_mpa, "sweep high pressure")?;

        if samples < 2 {
            return Err(ModelError::InvalidSweep {
                what: "sweep must have at least 2 points".to_string(),
            });
        }

        if low_mpa >= high_mpa {
            return Err(ModelError::InvalidSweep {
                what: format!(
                    "start pressure ({low_mpa} MPa) must be below end pressure ({high_mpa} MPa)"
                ),
            });
        }

        Ok(Self {
            low_mpa,
            high_mpa,
            samples,
        })
    }

    /// Generate all pressures in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.samples {
            0 => Vec::new(),
            1 => vec![self.low_mpa],
            n => {
                let delta = (self.high_mpa - self.low_mpa) / (n - 1) as f64;
                let mut points: Vec<f64> =
                    (0..n).map(|i| self.low_mpa + i as f64 * delta).collect();

                // Ensure exact endpoint
                points[n - 1] = self.high_mpa;
                points
            }
        }
    }

    /// Spacing between consecutive points, if there are at least two.
    pub fn step(&self) -> Option<f64> {
        (self.samples >= 2).then(|| (self.high_mpa - self.low_mpa) / (self.samples - 1) as f64)
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pressure sweep from {} MPa to {} MPa ({} points)",
            self.low_mpa, self.high_mpa, self.samples
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::new(1.0, 5.0, 5).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 1.0).abs() < 1e-12);
        assert!((points[2] - 3.0).abs() < 1e-12);
        assert_eq!(points[4], 5.0);
    }

    #[test]
    fn default_sweep_matches_slider_range() {
        let sweep = SweepDefinition::default();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 100);
        assert_eq!(points[0], 1.0);
        assert_eq!(points[99], 10.0);
        assert!((sweep.step().unwrap() - 9.0 / 99.0).abs() < 1e-15);
    }

    #[test]
    fn degenerate_point_counts() {
        let one = SweepDefinition {
            low_mpa: 2.0,
            high_mpa: 8.0,
            samples: 1,
        };
        assert_eq!(one.generate_points(), vec![2.0]);
        assert_eq!(one.step(), None);

        let none = SweepDefinition { samples: 0, ..one };
        assert!(none.generate_points().is_empty());
    }

    #[test]
    fn reject_invalid_point_count() {
        assert!(matches!(
            SweepDefinition::new(1.0, 10.0, 1),
            Err(ModelError::InvalidSweep { .. })
        ));
    }

    #[test]
    fn reject_identical_bounds() {
        assert!(SweepDefinition::new(4.0, 4.0, 10).is_err());
    }

    #[test]
    fn reject_reversed_bounds() {
        let err = SweepDefinition::new(10.0, 1.0, 100).unwrap_err();
        assert!(matches!(err, ModelError::InvalidSweep { .. }));
        assert!(err.to_string().contains("below"));
    }

    #[test]
    fn reject_non_finite_bounds() {
        assert!(matches!(
            SweepDefinition::new(f64::NAN, 10.0, 10),
            Err(ModelError::Core(_))
        ));
    }
}
