//! Behavioural properties of the prediction model and response sweep.

use hs_core::{Tolerances, nearly_equal};
use hs_model::{
    FormationType, InjectionScenario, RiskTier, SweepDefinition, ThermalCycling, execute_sweep,
    predict, sweep,
};
use proptest::prelude::*;

fn formation_strategy() -> impl Strategy<Value = FormationType> {
    prop_oneof![
        Just(FormationType::DepletedGasField),
        Just(FormationType::SaltCavern)
    ]
}

#[test]
fn reference_points() {
    let r = predict(&InjectionScenario::new(5.0, FormationType::DepletedGasField));
    assert!(nearly_equal(r.stress_mpa, 8.55, Tolerances::default()));
    assert_eq!(r.risk, RiskTier::High);

    let r = predict(&InjectionScenario::new(3.0, FormationType::DepletedGasField));
    assert!(nearly_equal(r.stress_mpa, 3.33, Tolerances::default()));
    assert!(nearly_equal(r.displacement_m, 0.0054, Tolerances::default()));
    assert_eq!(r.risk, RiskTier::Low);
}

#[test]
fn sweep_endpoints_and_count() {
    for samples in [2_usize, 3, 10, 100, 257] {
        let curve = sweep(
            FormationType::SaltCavern,
            ThermalCycling::new(40.0, 2),
            1.0,
            10.0,
            samples,
        );
        assert_eq!(curve.len(), samples);
        assert_eq!(curve.points.first().unwrap().pressure_mpa, 1.0);
        assert_eq!(curve.points.last().unwrap().pressure_mpa, 10.0);
        assert!(
            curve
                .pressures()
                .windows(2)
                .all(|w| w[0] < w[1]),
            "pressures must be strictly ascending"
        );
    }
}

#[test]
fn sweep_is_restartable() {
    let def = SweepDefinition::default();
    let a = execute_sweep(&def, FormationType::DepletedGasField, ThermalCycling::new(10.0, 5));
    let b = execute_sweep(&def, FormationType::DepletedGasField, ThermalCycling::new(10.0, 5));
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn no_thermal_adjustment_without_swing(
        formation in formation_strategy(),
        p in 0.0_f64..20.0,
        cycles in 0_u32..50,
    ) {
        let r = predict(
            &InjectionScenario::new(p, formation).with_thermal(ThermalCycling::new(0.0, cycles)),
        );
        prop_assert_eq!(r.stress_mpa, formation.base_stress(p));
        prop_assert_eq!(r.displacement_m, formation.base_displacement(p));
    }

    #[test]
    fn no_thermal_adjustment_without_cycles(
        formation in formation_strategy(),
        p in 0.0_f64..20.0,
        dt in 0.0_f64..100.0,
    ) {
        let r = predict(
            &InjectionScenario::new(p, formation).with_thermal(ThermalCycling::new(dt, 0)),
        );
        prop_assert_eq!(r.stress_mpa, formation.base_stress(p));
        prop_assert_eq!(r.displacement_m, formation.base_displacement(p));
    }

    #[test]
    fn thermal_scaling_is_multiplicative(
        formation in formation_strategy(),
        p in 1.0_f64..10.0,
        dt in 0.0_f64..100.0,
        cycles in 0_u32..30,
    ) {
        let plain = predict(&InjectionScenario::new(p, formation));
        let cycled = predict(
            &InjectionScenario::new(p, formation).with_thermal(ThermalCycling::new(dt, cycles)),
        );
        let factor = 1.0 + 3.5e-5 * dt * f64::from(cycles);
        let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
        prop_assert!(nearly_equal(cycled.stress_mpa, plain.stress_mpa * factor, tol));
        prop_assert!(nearly_equal(cycled.displacement_m, plain.displacement_m * factor, tol));
    }

    #[test]
    fn monotonic_in_pressure(
        formation in formation_strategy(),
        dt in 0.0_f64..100.0,
        cycles in 0_u32..30,
    ) {
        let curve = sweep(formation, ThermalCycling::new(dt, cycles), 1.0, 10.0, 100);
        for w in curve.points.windows(2) {
            prop_assert!(w[0].stress_mpa < w[1].stress_mpa);
            prop_assert!(w[0].displacement_mm < w[1].displacement_mm);
            prop_assert!(w[0].risk <= w[1].risk);
        }
    }

    #[test]
    fn predict_is_bit_identical_on_repeat(
        formation in formation_strategy(),
        p in -5.0_f64..50.0,
        dt in -50.0_f64..150.0,
        cycles in 0_u32..100,
    ) {
        let s = InjectionScenario::new(p, formation).with_thermal(ThermalCycling::new(dt, cycles));
        let a = predict(&s);
        let b = predict(&s);
        prop_assert_eq!(a.stress_mpa.to_bits(), b.stress_mpa.to_bits());
        prop_assert_eq!(a.displacement_m.to_bits(), b.displacement_m.to_bits());
        prop_assert_eq!(a.risk, b.risk);
    }
}
