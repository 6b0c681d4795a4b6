//! Working state shared by the equilibrium solver and temperature search.

use crate::error::CombustResult;
use cf_core::numeric::lerp;
use cf_thermo::{CompoundType, Element, ElementTotals, Mixture};

/// Relative element drift, against the summed seeded totals, still counted as balanced.
const ELEMENT_TOLERANCE: f64 = 1e-9;

/// A mixture at a temperature and pressure, plus what the solver needs to
/// keep between passes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Reactor {
    pub mixture: Mixture,
    /// [K]
    pub temperature: f64,
    /// [Pa]
    pub pressure: f64,
    /// Element totals fixed when the inlet was seeded
    pub elements: ElementTotals,
    /// Next equilibrium solve starts from the strategy's first guess
    pub first_pass: bool,
    /// Moles as seeded, the fallback start when a solve loses element balance
    pub reactants: Vec<f64>,
    /// Last solve could not keep the element totals; start the next one over
    pub restart_pending: bool,
}

impl Reactor {
    pub fn new(compounds: &[CompoundType]) -> Self {
        Self {
            mixture: Mixture::new(compounds),
            temperature: 0.0,
            pressure: 0.0,
            elements: ElementTotals::default(),
            first_pass: true,
            reactants: vec![0.0; compounds.len()],
            restart_pending: false,
        }
    }

    /// Load fresh reactant moles at inlet conditions.
    pub fn seed(&mut self, moles: &[f64], temperature: f64, pressure: f64) -> CombustResult<()> {
        self.mixture.set_moles(moles)?;
        self.temperature = temperature;
        self.pressure = pressure;
        self.elements = self.mixture.element_totals();
        self.first_pass = true;
        self.reactants.clear();
        self.reactants.extend_from_slice(moles);
        self.restart_pending = false;
        Ok(())
    }

    /// Largest per-element gap between the current moles and the seeded totals.
    pub fn element_drift(&self) -> f64 {
        let now = self.mixture.element_totals();
        Element::ALL
            .iter()
            .map(|&e| (now[e] - self.elements[e]).abs())
            .fold(0.0, f64::max)
    }

    pub fn conserves_elements(&self) -> bool {
        let scale: f64 = Element::ALL.iter().map(|&e| self.elements[e]).sum();
        self.element_drift() <= ELEMENT_TOLERANCE * scale
    }

    /// Put the seeded reactants back so the next solve begins from the first guess.
    pub fn restart(&mut self) -> CombustResult<()> {
        self.mixture.set_moles(&self.reactants)?;
        self.first_pass = true;
        self.restart_pending = false;
        Ok(())
    }

    pub fn properties(&self) -> CombustResult<MixtureSummary> {
        let t = self.temperature;
        let mix = &self.mixture;
        Ok(MixtureSummary {
            temperature: t,
            pressure: self.pressure / 1000.0,
            molecular_weight: mix.molecular_weight(),
            gamma: mix.gamma(t)?,
            enthalpy: mix.enthalpy(t),
            entropy: mix.entropy(t, self.pressure),
            specific_heat: mix.specific_heat(t),
        })
    }
}

/// Scalar properties of a solved mixture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixtureSummary {
    /// Temperature [K]
    pub temperature: f64,
    /// Pressure [kPa]
    pub pressure: f64,
    /// Molecular weight [g/mol]
    pub molecular_weight: f64,
    /// Ratio of specific heats
    pub gamma: f64,
    /// Specific enthalpy [kJ/kg]
    pub enthalpy: f64,
    /// Specific entropy [kJ/(kg·K)]
    pub entropy: f64,
    /// Specific heat at constant pressure [kJ/(kg·K)]
    pub specific_heat: f64,
}

impl MixtureSummary {
    /// Field-wise linear blend, `self` at weight 0 and `other` at weight 1.
    pub fn lerp(&self, other: &Self, weight: f64) -> Self {
        Self {
            temperature: lerp(self.temperature, other.temperature, weight),
            pressure: lerp(self.pressure, other.pressure, weight),
            molecular_weight: lerp(self.molecular_weight, other.molecular_weight, weight),
            gamma: lerp(self.gamma, other.gamma, weight),
            enthalpy: lerp(self.enthalpy, other.enthalpy, weight),
            entropy: lerp(self.entropy, other.entropy, weight),
            specific_heat: lerp(self.specific_heat, other.specific_heat, weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_fixes_elements_and_resets_first_pass() {
        let mut reactor = Reactor::new(&[CompoundType::CH4, CompoundType::O2, CompoundType::H2O]);
        reactor.first_pass = false;
        reactor.seed(&[0.4, 0.6, 0.0], 106.0, 1.207e6).unwrap();
        assert!(reactor.first_pass);
        assert!((reactor.elements[cf_thermo::Element::H] - 1.6).abs() < 1e-12);

        let props = reactor.properties().unwrap();
        assert!((props.pressure - 1207.0).abs() < 1e-9);
        assert!(props.gamma > 1.0);
    }

    #[test]
    fn restart_restores_reactants() {
        let mut reactor = Reactor::new(&[CompoundType::CH4, CompoundType::O2, CompoundType::H2O]);
        reactor.seed(&[0.4, 0.6, 0.0], 106.0, 1.207e6).unwrap();
        assert!(reactor.conserves_elements());
        assert_eq!(reactor.element_drift(), 0.0);

        // Carbon lost, oxygen gained
        reactor.mixture.set_moles(&[0.0, 0.6, 0.8]).unwrap();
        reactor.first_pass = false;
        reactor.restart_pending = true;
        assert!(!reactor.conserves_elements());
        assert!((reactor.element_drift() - 0.8).abs() < 1e-12);

        reactor.restart().unwrap();
        assert_eq!(reactor.mixture.moles(), &[0.4, 0.6, 0.0]);
        assert!(reactor.first_pass);
        assert!(!reactor.restart_pending);
        assert!(reactor.conserves_elements());
    }

    #[test]
    fn seed_rejects_empty() {
        let mut reactor = Reactor::new(&[CompoundType::CH4, CompoundType::O2]);
        assert!(reactor.seed(&[0.0, 0.0], 300.0, 1e5).is_err());
    }

    #[test]
    fn summary_lerp_midpoint() {
        let a = MixtureSummary {
            temperature: 3000.0,
            gamma: 1.2,
            ..Default::default()
        };
        let b = MixtureSummary {
            temperature: 3100.0,
            gamma: 1.3,
            ..Default::default()
        };
        let mid = a.lerp(&b, 0.5);
        assert!((mid.temperature - 3050.0).abs() < 1e-9);
        assert!((mid.gamma - 1.25).abs() < 1e-12);
    }
}
