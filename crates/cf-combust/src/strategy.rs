//! Reaction-specific strategy interface.
//!
//! The equilibrium solver and temperature search only talk to a reaction
//! through [`ReactionStrategy`]. A strategy owns the compound set, maps inlet
//! species onto it, supplies the elemental-potential update, and describes
//! any composition band that needs the bracketed interpolation fallback.

use crate::error::{CombustError, CombustResult};
use cf_thermo::{CompoundType, ElementTotals, Species};
use std::fmt;

/// Slack allowed outside [0, 1] on inlet mole fractions.
pub const FRACTION_TOLERANCE: f64 = 1.0e-9;

/// Inlet composition as parallel fraction and species-tag slices.
#[derive(Debug, Clone, Copy)]
pub struct Inlet<'a> {
    fractions: &'a [f64],
    species: &'a [Species],
}

impl<'a> Inlet<'a> {
    pub fn new(fractions: &'a [f64], species: &'a [Species]) -> CombustResult<Self> {
        if fractions.len() != species.len() {
            return Err(CombustError::LengthMismatch {
                fractions: fractions.len(),
                species: species.len(),
            });
        }
        Ok(Self { fractions, species })
    }

    pub fn fractions(&self) -> &'a [f64] {
        self.fractions
    }

    pub fn species(&self) -> &'a [Species] {
        self.species
    }

    /// Check every fraction lies in [0, 1] and at least one is non-zero.
    pub fn validate(&self) -> CombustResult<()> {
        for (&value, &species) in self.fractions.iter().zip(self.species) {
            if !value.is_finite()
                || value < -FRACTION_TOLERANCE
                || value > 1.0 + FRACTION_TOLERANCE
            {
                return Err(CombustError::MoleFractionOutOfRange { species, value });
            }
        }
        if self.fractions.iter().all(|&x| x <= 0.0) {
            return Err(CombustError::EmptyInlet);
        }
        Ok(())
    }

    /// Fraction of `species`, if its tag is present. Slight negatives
    /// within tolerance read as zero.
    pub fn fraction_of(&self, species: Species) -> Option<f64> {
        self.species
            .iter()
            .position(|&s| s == species)
            .map(|i| self.fractions[i].max(0.0))
    }

    /// Like [`Inlet::fraction_of`] but a missing tag is an error.
    pub fn require(&self, species: Species) -> CombustResult<f64> {
        self.fraction_of(species)
            .ok_or(CombustError::MissingSpecies { species })
    }
}

/// What a strategy concluded about an inlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletAssessment {
    /// Fuel and oxidizer present and inside the flammability envelope
    pub combustion_occurs: bool,
    /// Composition falls in the band handled by interpolation
    pub unstable: bool,
    /// Fuel share of fuel + oxidizer moles
    pub fuel_fraction: f64,
}

/// Inputs shared by every compound during one elemental-potential pass.
#[derive(Debug, Clone, Copy)]
pub struct PotentialPass<'a> {
    /// Trial temperature [K]
    pub temperature: f64,
    /// Total pressure [Pa]
    pub pressure: f64,
    /// Non-dimensional Gibbs energy per compound, in strategy order
    pub gibbs: &'a [f64],
    /// Element totals fixed for the solve
    pub elements: &'a ElementTotals,
    /// Blend factor for the minor-species update
    pub damping: f64,
}

/// Two stable reactant compositions either side of an unstable band.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketSeeds {
    /// Fuel share of fuel + oxidizer for each bracket
    pub fuel_fractions: [f64; 2],
    /// Seed moles for each bracket, in strategy order
    pub moles: [Vec<f64>; 2],
}

/// Chemistry-specific behaviour plugged into a [`crate::Combustor`].
pub trait ReactionStrategy: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Compounds tracked by this reaction, in the order used by every
    /// mole and ratio slice passed to the other methods.
    fn compounds(&self) -> &[CompoundType];

    /// Seed `moles` from the inlet and classify it.
    ///
    /// `moles` has one entry per compound and arrives zeroed.
    fn update_compound(
        &self,
        inlet: &Inlet<'_>,
        moles: &mut [f64],
    ) -> CombustResult<InletAssessment>;

    /// Spread the reacting moles evenly over the reacting compounds.
    /// Called only before the first pass after a fresh inlet.
    fn make_first_guess(&self, moles: &mut [f64]);

    /// One damped elemental-potential pass.
    ///
    /// `ratios` holds the current mole fractions and is updated in place for
    /// the species solved from the potentials; `moles` receives the new mole
    /// counts for every compound.
    fn solve_elem_pot_eqns(&self, pass: &PotentialPass<'_>, ratios: &mut [f64], moles: &mut [f64]);

    /// Bracketing compositions for an unstable inlet, or `None` if this
    /// reaction has no unstable band.
    fn unstable_brackets(&self, _reactants: &[f64]) -> Option<BracketSeeds> {
        None
    }
}
