//! Methane/oxygen combustion through the public API.

use cf_combust::{CombustConfig, CombustError, Combustor, CombustorType, ErrorKind, create_combustor};
use cf_core::units::{k, kpa, to_kelvin};
use cf_thermo::{CompoundType, Element, Species, compound};

const PROPELLANTS: [Species; 2] = [Species::O2, Species::CH4];

fn ch4() -> Combustor {
    create_combustor(CombustorType::Ch4, CombustConfig::default())
        .expect("valid config")
        .expect("CH4 builds a combustor")
}

fn energy_error(c: &Combustor) -> f64 {
    ((c.reactants_enthalpy() - c.enthalpy()) / c.reactants_enthalpy()).abs()
}

#[test]
fn lox_methane_reference_case() {
    let mut c = ch4();
    let products = c
        .update_combustion_mixture(k(2000.0), kpa(1207.0), k(106.0), &[0.6, 0.4], &PROPELLANTS)
        .unwrap();

    assert!(c.combustion_occurs());
    assert!(!c.is_unstable());
    assert!(products.gamma > 1.0);
    let mw_ch4 = compound(CompoundType::CH4).molar_mass;
    let mw_co2 = compound(CompoundType::CO2).molar_mass;
    assert!(products.molecular_weight > mw_ch4 && products.molecular_weight < mw_co2);
    assert!(products.temperature > 3000.0 && products.temperature < 3600.0);
    assert!(energy_error(&c) < 0.15);

    // accessors agree with the returned summary
    assert_eq!(to_kelvin(c.temperature()), products.temperature);
    assert!((c.pressure_kpa() - 1207.0).abs() < 1e-9);
    assert_eq!(c.gamma(), products.gamma);
    assert_eq!(c.molecular_weight(), products.molecular_weight);
    assert_eq!(to_kelvin(c.inlet_temperature()), 106.0);

    let sum: f64 = c.mole_fractions().iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert_eq!(c.diagnostics().temperature_floor_hits, 0);
}

#[test]
fn energy_balance_across_flammable_range() {
    let fuel_fractions = [
        0.05, 0.06, 0.08, 0.1, 0.15, 0.2, 0.25, 0.3, 0.4, 0.45, 0.5, 0.55, 0.6,
    ];
    let conditions = [
        (106.0, 1207.0, 2000.0),
        (300.0, 500.0, 2500.0),
        (150.0, 3000.0, 3000.0),
        (106.0, 101.325, 2000.0),
    ];

    for (t_in, p_kpa, guess) in conditions {
        for fuel in fuel_fractions {
            let mut c = ch4();
            c.update_combustion_mixture(
                k(guess),
                kpa(p_kpa),
                k(t_in),
                &[1.0 - fuel, fuel],
                &PROPELLANTS,
            )
            .unwrap_or_else(|e| panic!("fuel {fuel} at {t_in} K / {p_kpa} kPa: {e}"));

            assert!(c.combustion_occurs());
            let t = to_kelvin(c.temperature());
            assert!(t.is_finite() && t > 10.0, "fuel {fuel}: T = {t}");
            assert!(
                energy_error(&c) < 0.15,
                "fuel {fuel} at {t_in} K / {p_kpa} kPa: error {}",
                energy_error(&c)
            );
        }
    }
}

#[test]
fn lean_flammability_limit() {
    let mut c = ch4();
    c.update_combustion_mixture(k(2000.0), kpa(1207.0), k(106.0), &[0.95, 0.05], &PROPELLANTS)
        .unwrap();
    assert!(c.combustion_occurs());
    assert!(to_kelvin(c.temperature()) > 1000.0);

    let mut c = ch4();
    let products = c
        .update_combustion_mixture(
            k(2000.0),
            kpa(1207.0),
            k(106.0),
            &[0.95001, 0.04999],
            &PROPELLANTS,
        )
        .unwrap();
    assert!(!c.combustion_occurs());
    assert_eq!(products.temperature, 106.0);
    assert_eq!(c.moles()[0], 0.04999);
    assert_eq!(c.moles()[1], 0.95001);
    assert!(c.moles()[2..].iter().all(|&m| m == 0.0));
    assert_eq!(c.enthalpy(), c.reactants_enthalpy());
}

#[test]
fn too_rich_does_not_burn() {
    let mut c = ch4();
    c.update_combustion_mixture(k(2000.0), kpa(1207.0), k(106.0), &[0.3, 0.7], &PROPELLANTS)
        .unwrap();
    assert!(!c.combustion_occurs());
    assert_eq!(to_kelvin(c.temperature()), 106.0);
}

#[test]
fn helium_is_carried_inert() {
    let mut c = ch4();
    c.update_combustion_mixture(
        k(2000.0),
        kpa(1207.0),
        k(106.0),
        &[0.5, 0.3, 0.2],
        &[Species::O2, Species::CH4, Species::He],
    )
    .unwrap();
    assert!(c.combustion_occurs());
    let he = c.compounds().iter().position(|&kind| kind == CompoundType::He).unwrap();
    assert!((c.moles()[he] - 0.2).abs() < 1e-12);
    assert!(to_kelvin(c.temperature()) > 2500.0);
}

#[test]
fn nitrogen_is_carried_inert() {
    let mut c = ch4();
    c.update_combustion_mixture(
        k(2000.0),
        kpa(1207.0),
        k(106.0),
        &[0.55, 0.25, 0.2],
        &[Species::O2, Species::CH4, Species::N2],
    )
    .unwrap();
    assert!(c.combustion_occurs());
    assert!(!c.is_unstable());
    let n2 = c.compounds().iter().position(|&kind| kind == CompoundType::N2).unwrap();
    assert!((c.moles()[n2] - 0.2).abs() < 1e-12);
    assert!(to_kelvin(c.temperature()) > 2500.0);
    assert!(energy_error(&c) < 0.15);
}

#[test]
fn guess_below_floor_leaves_reactants() {
    let mut c = ch4();
    let products = c
        .update_combustion_mixture(k(5.0), kpa(1207.0), k(106.0), &[0.6, 0.4], &PROPELLANTS)
        .unwrap();

    assert_eq!(c.diagnostics().temperature_floor_hits, 1);
    assert_eq!(c.diagnostics().equilibrium_not_converged, 0);
    assert_eq!(products.temperature, 106.0);
    assert_eq!(c.moles()[0], 0.4);
    assert_eq!(c.moles()[1], 0.6);
    assert!(energy_error(&c) < 0.15);
}

#[test]
fn high_guess_conserves_elements() {
    let mut c = ch4();
    let products = c
        .update_combustion_mixture(k(9000.0), kpa(1207.0), k(106.0), &[0.6, 0.4], &PROPELLANTS)
        .unwrap();

    assert!(products.temperature > 3000.0 && products.temperature < 3600.0);
    assert!(energy_error(&c) < 0.15);
    assert!(c.diagnostics().element_imbalance > 0);

    let atoms = |element: Element| -> f64 {
        c.compounds()
            .iter()
            .zip(c.moles())
            .map(|(&kind, &n)| f64::from(compound(kind).atom_count(element)) * n)
            .sum()
    };
    assert!((atoms(Element::C) - 0.4).abs() < 1e-9);
    assert!((atoms(Element::H) - 1.6).abs() < 1e-9);
    assert!((atoms(Element::O) - 1.2).abs() < 1e-9);
}

#[test]
fn unstable_band_interpolates_between_brackets() {
    let mut c = ch4();
    let ratio: f64 = 1.8;
    let fuel = 1.0 / (1.0 + ratio);
    let products = c
        .update_combustion_mixture(
            k(2000.0),
            kpa(1207.0),
            k(106.0),
            &[1.0 - fuel, fuel],
            &PROPELLANTS,
        )
        .unwrap();

    assert!(c.is_unstable());
    let interp = c.last_interpolation().expect("unstable inlet interpolates");
    let [t0, t1] = interp.bracket_temperatures;
    let (lo, hi) = (t0.min(t1), t0.max(t1));
    assert!(products.temperature >= lo && products.temperature <= hi);
    assert!(interp.weight > 0.0 && interp.weight < 1.0);
    assert!((interp.fuel_fraction - fuel).abs() < 1e-12);
    assert_eq!(interp.bracket_fuel_fractions, [0.333, 0.376]);

    let sum: f64 = c.mole_fractions().iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!(energy_error(&c) < 0.15);
}

#[test]
fn stable_inlet_clears_interpolation() {
    let mut c = ch4();
    let fuel = 1.0 / 2.8;
    c.update_combustion_mixture(k(2000.0), kpa(1207.0), k(106.0), &[1.0 - fuel, fuel], &PROPELLANTS)
        .unwrap();
    assert!(c.last_interpolation().is_some());

    c.update_combustion_mixture(k(2000.0), kpa(1207.0), k(106.0), &[0.6, 0.4], &PROPELLANTS)
        .unwrap();
    assert!(!c.is_unstable());
    assert!(c.last_interpolation().is_none());
}

#[test]
fn rejects_non_physical_inputs() {
    let cases: [(f64, f64, f64, [f64; 2]); 6] = [
        (2000.0, -1.0, 106.0, [0.6, 0.4]),
        (2000.0, 1207.0, -100.0, [0.6, 0.4]),
        (-100.0, 1207.0, 106.0, [0.6, 0.4]),
        (2000.0, 1207.0, 106.0, [1.5, 0.4]),
        (2000.0, 1207.0, 106.0, [0.6, -0.5]),
        (2000.0, 1207.0, 106.0, [0.0, 0.0]),
    ];
    for (guess, p, t_in, fractions) in cases {
        let mut c = ch4();
        let err = c
            .update_combustion_mixture(k(guess), kpa(p), k(t_in), &fractions, &PROPELLANTS)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Initialization, "{err}");
        assert!(c.moles().iter().all(|&m| m == 0.0));
    }
}

#[test]
fn missing_fuel_tag_is_fatal() {
    let mut c = ch4();
    let err = c
        .update_combustion_mixture(k(2000.0), kpa(1207.0), k(106.0), &[1.0], &[Species::O2])
        .unwrap_err();
    assert_eq!(
        err,
        CombustError::MissingSpecies {
            species: Species::CH4
        }
    );
}

#[test]
fn mismatched_inlet_slices() {
    let mut c = ch4();
    let err = c
        .update_combustion_mixture(k(2000.0), kpa(1207.0), k(106.0), &[0.6, 0.4], &[Species::O2])
        .unwrap_err();
    assert!(matches!(err, CombustError::LengthMismatch { .. }));
}
