//! Risk tier classification.

use std::fmt;

/// Qualitative mechanical risk, ordered `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Operator guidance shown next to the tier.
    pub fn advisory(self) -> &'static str {
        match self {
            Self::High => "Warning: High risk of caprock damage.",
            Self::Moderate => "Moderate risk – monitor closely.",
            Self::Low => "Low mechanical risk.",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stress (MPa) and displacement (m) limits for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierLimit {
    pub stress_mpa: f64,
    pub displacement_m: f64,
}

impl TierLimit {
    /// Exceeded when either quantity is strictly above its limit.
    #[inline]
    pub fn exceeded_by(&self, stress_mpa: f64, displacement_m: f64) -> bool {
        stress_mpa > self.stress_mpa || displacement_m > self.displacement_m
    }
}

/// Fixed threshold table. Not configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub high: TierLimit,
    pub moderate: TierLimit,
}

impl RiskThresholds {
    pub const STANDARD: RiskThresholds = RiskThresholds {
        high: TierLimit {
            stress_mpa: 6.5,
            displacement_m: 0.015,
        },
        moderate: TierLimit {
            stress_mpa: 5.5,
            displacement_m: 0.012,
        },
    };

    /// High is checked first; the first exceeded limit wins.
    pub fn classify(&self, stress_mpa: f64, displacement_m: f64) -> RiskTier {
        if self.high.exceeded_by(stress_mpa, displacement_m) {
            RiskTier::High
        } else if self.moderate.exceeded_by(stress_mpa, displacement_m) {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }
}

/// Classify a stress/displacement pair against [`RiskThresholds::STANDARD`].
pub fn classify(stress_mpa: f64, displacement_m: f64) -> RiskTier {
    RiskThresholds::STANDARD.classify(stress_mpa, displacement_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_alone_reaches_high() {
        assert_eq!(classify(7.0, 0.005), RiskTier::High);
    }

    #[test]
    fn displacement_alone_reaches_high() {
        assert_eq!(classify(1.0, 0.016), RiskTier::High);
    }

    #[test]
    fn moderate_band() {
        assert_eq!(classify(6.0, 0.001), RiskTier::Moderate);
        assert_eq!(classify(1.0, 0.013), RiskTier::Moderate);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(classify(6.5, 0.0), RiskTier::Moderate);
        assert_eq!(classify(5.5, 0.012), RiskTier::Low);
        assert_eq!(classify(0.0, 0.015), RiskTier::Moderate);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
        assert_eq!(RiskTier::High.to_string(), "High");
        assert!(RiskTier::High.advisory().contains("caprock"));
    }

    #[test]
    fn advisory_text() {
        assert_eq!(
            RiskTier::High.advisory(),
            "Warning: High risk of caprock damage."
        );
        assert_eq!(
            RiskTier::Moderate.advisory(),
            "Moderate risk \u{2013} monitor closely."
        );
        assert_eq!(RiskTier::Low.advisory(), "Low mechanical risk.");
    }
}
