//! Thermal cycling strain.

/// Linear thermal expansion coefficient applied to every formation (1/°C).
pub const THERMAL_EXPANSION_COEFF: f64 = 3.5e-5;

/// Strain factor `α·ΔT·cycles`.
///
/// Zero whenever `delta_t_c` or `cycles` is zero; the model then reports the
/// base response unchanged.
#[inline]
pub fn thermal_strain(delta_t_c: f64, cycles: u32) -> f64 {
    THERMAL_EXPANSION_COEFF * delta_t_c * f64::from(cycles)
}

/// Apply the strain to a base quantity as `q + q·strain`.
#[inline]
pub(crate) fn apply_strain(base: f64, strain: f64) -> f64 {
    base + base * strain
}
