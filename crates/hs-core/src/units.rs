// hs-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure, TemperatureInterval as UomTemperatureInterval,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type TempInterval = UomTemperatureInterval;

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

/// Temperature swing in degrees Celsius (an interval, not an absolute temperature).
#[inline]
pub fn delta_c(v: f64) -> TempInterval {
    use uom::si::temperature_interval::degree_celsius;
    TempInterval::new::<degree_celsius>(v)
}

#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[inline]
pub fn to_mm(l: Length) -> f64 {
    use uom::si::length::millimeter;
    l.get::<millimeter>()
}

#[inline]
pub fn to_delta_c(dt: TempInterval) -> f64 {
    use uom::si::temperature_interval::degree_celsius;
    dt.get::<degree_celsius>()
}

pub mod constants {
    /// Millimetres per metre, used when curves are reported in mm.
    pub const MM_PER_M: f64 = 1000.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = mpa(5.0);
        let _l = m(0.004);
        let _dt = delta_c(25.0);
    }

    #[test]
    fn megapascal_is_a_million_pascal() {
        use uom::si::pressure::pascal;
        assert!((mpa(2.5).get::<pascal>() - 2.5e6).abs() < 1e-6);
        assert!((to_mpa(mpa(7.25)) - 7.25).abs() < 1e-12);
    }

    #[test]
    fn millimetre_conversion() {
        assert!((to_mm(m(0.0042)) - 4.2).abs() < 1e-9);
        assert!((to_delta_c(delta_c(25.0)) - 25.0).abs() < 1e-12);
    }
}
