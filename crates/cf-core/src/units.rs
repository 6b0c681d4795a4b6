// cf-core/src/units.rs

use uom::si::f64::{
    MolarMass as UomMolarMass, Pressure as UomPressure, Ratio as UomRatio,
    TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Molar mass from a value in g/mol (numerically kg/kmol).
#[inline]
pub fn g_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::gram_per_mole;
    MolarMass::new::<gram_per_mole>(v)
}

/// Pressure in kPa.
#[inline]
pub fn to_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

/// Temperature in K.
#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub mod constants {
    use super::*;

    /// Universal gas constant [kJ/(mol·K)].
    pub const R_KJ_PER_MOL_K: f64 = 8.314_472e-3;

    /// Standard atmosphere [Pa].
    pub const ATM_PA: f64 = 101_325.0;

    #[inline]
    pub fn atm() -> Pressure {
        pa(ATM_PA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _r = unitless(0.5);
        let _mw = g_per_mol(16.04);
        let _atm = constants::atm();
    }

    #[test]
    fn kpa_round_trip() {
        let p = kpa(1207.0);
        assert!((p.value - 1_207_000.0).abs() < 1e-6);
        assert!((to_kpa(p) - 1207.0).abs() < 1e-9);
        assert!((to_kelvin(k(106.0)) - 106.0).abs() < 1e-12);
    }
}
