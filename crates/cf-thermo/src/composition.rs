//! Inlet composition handed to a combustor.

use crate::error::{ThermoError, ThermoResult};
use crate::species::Species;
use cf_core::numeric::{Tolerances, nearly_equal};

/// Inlet composition as normalized mole fractions.
///
/// Species and fractions are stored as parallel arrays so they can be passed
/// straight to `update_combustion_mixture` as slices.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    species: Vec<Species>,
    fractions: Vec<f64>,
}

impl Composition {
    /// Single-species composition.
    pub fn pure(species: Species) -> Self {
        Self {
            species: vec![species],
            fractions: vec![1.0],
        }
    }

    /// Build from `(species, amount)` pairs, normalizing the amounts.
    ///
    /// Amounts must be finite, non-negative and have a positive sum. Repeated
    /// species are merged; negligible entries are dropped.
    pub fn new_mole_fractions(items: Vec<(Species, f64)>) -> ThermoResult<Self> {
        if items.is_empty() {
            return Err(ThermoError::NonPhysical {
                what: "empty composition",
            });
        }

        let mut species: Vec<Species> = Vec::with_capacity(items.len());
        let mut amounts: Vec<f64> = Vec::with_capacity(items.len());
        for (s, amount) in items {
            if !amount.is_finite() {
                return Err(ThermoError::OutOfRange {
                    what: "non-finite mole fraction",
                    value: amount,
                });
            }
            if amount < 0.0 {
                return Err(ThermoError::OutOfRange {
                    what: "negative mole fraction",
                    value: amount,
                });
            }
            match species.iter().position(|&x| x == s) {
                Some(i) => amounts[i] += amount,
                None => {
                    species.push(s);
                    amounts.push(amount);
                }
            }
        }

        let sum: f64 = amounts.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(ThermoError::EmptyMixture { total: sum });
        }

        let (species, fractions): (Vec<_>, Vec<_>) = species
            .into_iter()
            .zip(amounts)
            .map(|(s, a)| (s, a / sum))
            .filter(|(_, f)| *f > 1e-15)
            .unzip();

        Ok(Self { species, fractions })
    }

    /// Mole fraction of `species` (0.0 if absent).
    pub fn mole_fraction(&self, species: Species) -> f64 {
        self.species
            .iter()
            .position(|&s| s == species)
            .map(|i| self.fractions[i])
            .unwrap_or(0.0)
    }

    /// `Some(species)` if the composition is a single species at fraction 1.
    pub fn is_pure(&self) -> Option<Species> {
        if self.species.len() == 1 {
            let tol = Tolerances {
                abs: 1e-10,
                rel: 1e-10,
            };
            if nearly_equal(self.fractions[0], 1.0, tol) {
                return Some(self.species[0]);
            }
        }
        None
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn iter(&self) -> impl Iterator<Item = (Species, f64)> + '_ {
        self.species.iter().copied().zip(self.fractions.iter().copied())
    }

    /// Mixture molar mass [g/mol].
    pub fn molar_mass(&self) -> f64 {
        self.iter().map(|(s, x)| s.molar_mass() * x).sum()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalized_sum_is_one(fracs in prop::collection::vec(0.0_f64..1.0_f64, 1..5)) {
            let species = [Species::O2, Species::CH4, Species::He, Species::H2O, Species::CO2];
            let input: Vec<(Species, f64)> = fracs
                .iter()
                .enumerate()
                .map(|(i, &f)| (species[i % species.len()], f))
                .collect();

            if let Ok(comp) = Composition::new_mole_fractions(input) {
                let sum: f64 = comp.fractions().iter().sum();
                let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
                prop_assert!(nearly_equal(sum, 1.0, tol));
                prop_assert_eq!(comp.species().len(), comp.fractions().len());
            }
        }
    }
}
