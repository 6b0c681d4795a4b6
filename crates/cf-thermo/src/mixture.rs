//! Mole bookkeeping for a fixed compound set.

use crate::catalog::compound;
use crate::compound::{ChemicalCompound, CompoundType, ElementTotals};
use crate::error::{ThermoError, ThermoResult};
use crate::properties;
use cf_core::units::constants::R_KJ_PER_MOL_K;

/// Mole fractions below this are stored as exactly zero.
pub const RATIO_EPSILON: f64 = f64::EPSILON;

/// Per-compound mole counts and the mole fractions derived from them.
///
/// The compound order is fixed at construction and never changes, so indices
/// handed out by [`Mixture::index_of`] stay valid for the lifetime of the
/// mixture.
///
/// Mass-specific properties are in kJ/kg and kJ/(kg·K), molecular weight in
/// g/mol. They read the current mole fractions, so call
/// [`Mixture::recalculate_ratios`] after editing moles.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixture {
    compounds: Vec<&'static ChemicalCompound>,
    moles: Vec<f64>,
    ratios: Vec<f64>,
}

impl Mixture {
    /// Create an empty mixture over `kinds` (all moles zero).
    pub fn new(kinds: &[CompoundType]) -> Self {
        Self {
            compounds: kinds.iter().map(|&k| compound(k)).collect(),
            moles: vec![0.0; kinds.len()],
            ratios: vec![0.0; kinds.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    pub fn compounds(&self) -> &[&'static ChemicalCompound] {
        &self.compounds
    }

    /// Position of `kind` in this mixture's compound order.
    pub fn index_of(&self, kind: CompoundType) -> Option<usize> {
        self.compounds.iter().position(|c| c.kind == kind)
    }

    /// Mole counts [mol].
    pub fn moles(&self) -> &[f64] {
        &self.moles
    }

    /// Mutable mole counts. Ratios are stale until the next
    /// [`Mixture::recalculate_ratios`].
    pub fn moles_mut(&mut self) -> &mut [f64] {
        &mut self.moles
    }

    /// Mole fractions.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Replace all moles and refresh the ratios.
    pub fn set_moles(&mut self, moles: &[f64]) -> ThermoResult<()> {
        if moles.len() != self.moles.len() {
            return Err(ThermoError::OutOfRange {
                what: "mole array length",
                value: moles.len() as f64,
            });
        }
        if let Some(&bad) = moles.iter().find(|m| !m.is_finite() || **m < 0.0) {
            return Err(ThermoError::OutOfRange {
                what: "moles must be finite and non-negative",
                value: bad,
            });
        }
        self.moles.copy_from_slice(moles);
        self.recalculate_ratios()
    }

    /// Zero every mole count and ratio.
    pub fn clear(&mut self) {
        self.moles.fill(0.0);
        self.ratios.fill(0.0);
    }

    pub fn total_moles(&self) -> f64 {
        self.moles.iter().sum()
    }

    /// Recompute mole fractions from moles.
    ///
    /// Fails when the mole total is not strictly positive.
    pub fn recalculate_ratios(&mut self) -> ThermoResult<()> {
        let total = self.total_moles();
        if !total.is_finite() {
            return Err(ThermoError::NonPhysical {
                what: "mole total must be finite",
            });
        }
        if total <= 0.0 {
            return Err(ThermoError::EmptyMixture { total });
        }
        for (ratio, moles) in self.ratios.iter_mut().zip(&self.moles) {
            let r = moles / total;
            *ratio = if r < RATIO_EPSILON { 0.0 } else { r };
        }
        Ok(())
    }

    /// Atoms per element summed over the current moles.
    pub fn element_totals(&self) -> ElementTotals {
        let mut totals = ElementTotals::default();
        for (c, &n) in self.compounds.iter().zip(&self.moles) {
            totals.add_compound(c, n);
        }
        totals
    }

    /// Mole-fraction weighted molar mass [g/mol].
    pub fn molecular_weight(&self) -> f64 {
        self.weighted_sum(|c| c.molar_mass)
    }

    /// Molar enthalpy [kJ/mol] at `t` [K].
    pub fn molar_enthalpy(&self, t: f64) -> f64 {
        self.weighted_sum(|c| properties::enthalpy(c, t))
    }

    /// Molar entropy [kJ/(mol·K)] at `t` [K] and total pressure `p` [Pa],
    /// each compound evaluated at its partial pressure.
    pub fn molar_entropy(&self, t: f64, p: f64) -> f64 {
        self.compounds
            .iter()
            .zip(&self.ratios)
            .filter(|(_, x)| **x > 0.0)
            .map(|(c, &x)| x * properties::entropy(c, t, x * p))
            .sum()
    }

    /// Molar specific heat [kJ/(mol·K)] at `t` [K].
    pub fn molar_specific_heat(&self, t: f64) -> f64 {
        self.weighted_sum(|c| properties::specific_heat(c, t))
    }

    /// Specific enthalpy [kJ/kg].
    pub fn enthalpy(&self, t: f64) -> f64 {
        self.per_mass(self.molar_enthalpy(t))
    }

    /// Specific entropy [kJ/(kg·K)].
    pub fn entropy(&self, t: f64, p: f64) -> f64 {
        self.per_mass(self.molar_entropy(t, p))
    }

    /// Specific heat at constant pressure [kJ/(kg·K)].
    pub fn specific_heat(&self, t: f64) -> f64 {
        self.per_mass(self.molar_specific_heat(t))
    }

    /// Ratio of specific heats `Cp / (Cp − R)`.
    ///
    /// Fails when `Cp − R` is not positive.
    pub fn gamma(&self, t: f64) -> ThermoResult<f64> {
        let cp = self.molar_specific_heat(t);
        let cv = cp - R_KJ_PER_MOL_K;
        if !cv.is_finite() || cv <= 0.0 {
            return Err(ThermoError::NonPhysical {
                what: "heat capacity at constant volume must be positive",
            });
        }
        Ok(cp / cv)
    }

    fn weighted_sum(&self, f: impl Fn(&ChemicalCompound) -> f64) -> f64 {
        self.compounds
            .iter()
            .zip(&self.ratios)
            .filter(|(_, x)| **x > 0.0)
            .map(|(c, &x)| x * f(c))
            .sum()
    }

    /// kJ/mol (or kJ/(mol·K)) to kJ/kg (or kJ/(kg·K)).
    fn per_mass(&self, molar: f64) -> f64 {
        molar * 1000.0 / self.molecular_weight()
    }
}
