//! Methane/oxygen reaction with dissociation.
//!
//! Eleven compounds: the propellants, the major products (H2O, CO2, CO, H2),
//! the radicals OH, O and H, and helium and nitrogen as inert diluents.
//! Inerts sit after the reacting compounds and never change moles.

use crate::error::{CombustError, CombustResult};
use crate::strategy::{BracketSeeds, Inlet, InletAssessment, PotentialPass, ReactionStrategy};
use cf_thermo::{CompoundType, Element, Species, compound};

const CH4: usize = 0;
const O2: usize = 1;
const H2O: usize = 2;
const CO2: usize = 3;
const CO: usize = 4;
const H2: usize = 5;
const OH: usize = 6;
const O: usize = 7;
const H: usize = 8;
const HE: usize = 9;
const N2: usize = 10;

const COMPOUNDS: [CompoundType; 11] = [
    CompoundType::CH4,
    CompoundType::O2,
    CompoundType::H2O,
    CompoundType::CO2,
    CompoundType::CO,
    CompoundType::H2,
    CompoundType::OH,
    CompoundType::O,
    CompoundType::H,
    CompoundType::He,
    CompoundType::N2,
];

/// Lowest fuel mole fraction that burns.
pub const LEAN_LIMIT: f64 = 0.05;
/// Rich limit: fuel must not exceed `RICH_SLOPE · oxidizer − RICH_OFFSET`.
pub const RICH_SLOPE: f64 = 2.5;
pub const RICH_OFFSET: f64 = 0.3928;
/// Oxidizer/fuel molar ratios where the direct search misbehaves.
pub const UNSTABLE_RATIO: (f64, f64) = (1.66, 2.0);
/// Fuel shares of the stable compositions either side of the band.
pub const BRACKET_FUEL_FRACTIONS: [f64; 2] = [0.333, 0.376];

/// Arguments below this give a zero mole fraction.
const MIN_EXPONENT: f64 = -8.0;
/// Floor for mole fractions inside a logarithm.
const MIN_LOG_RATIO: f64 = 1.0e-30;
/// Added (times total moles) to a back-solved major that came out negative.
const NEGATIVE_BIAS: f64 = 1.0e-6;

/// Elemental potentials for C, H and O.
#[derive(Debug, Clone, Copy)]
struct Potentials {
    c: f64,
    h: f64,
    o: f64,
}

/// Methane/oxygen combustion strategy.
#[derive(Debug, Clone, Default)]
pub struct CombustCh4;

impl CombustCh4 {
    pub fn new() -> Self {
        Self
    }

    /// Fuel mole fraction inside the flammability envelope.
    pub fn is_flammable(fuel: f64, oxidizer: f64) -> bool {
        fuel > 0.0
            && oxidizer > 0.0
            && fuel >= LEAN_LIMIT
            && fuel <= RICH_SLOPE * oxidizer - RICH_OFFSET
    }

    /// Oxidizer/fuel ratio inside the unstable band.
    pub fn is_unstable(fuel: f64, oxidizer: f64) -> bool {
        if fuel <= 0.0 {
            return false;
        }
        let ratio = oxidizer / fuel;
        (UNSTABLE_RATIO.0..=UNSTABLE_RATIO.1).contains(&ratio)
    }

    /// `exp(Σ aₑ·πₑ − g)` for compound `i`, zero below the underflow guard
    /// and capped at one.
    fn potential_fraction(i: usize, pi: &Potentials, gibbs: &[f64]) -> f64 {
        let c = compound(COMPOUNDS[i]);
        let arg = f64::from(c.atom_count(Element::C)) * pi.c
            + f64::from(c.atom_count(Element::H)) * pi.h
            + f64::from(c.atom_count(Element::O)) * pi.o
            - gibbs[i];
        if arg < MIN_EXPONENT {
            0.0
        } else {
            arg.min(0.0).exp()
        }
    }
}

fn ln_ratio(ratios: &[f64], i: usize) -> f64 {
    ratios[i].max(MIN_LOG_RATIO).ln()
}

impl ReactionStrategy for CombustCh4 {
    fn name(&self) -> &'static str {
        "CH4"
    }

    fn compounds(&self) -> &[CompoundType] {
        &COMPOUNDS
    }

    fn update_compound(
        &self,
        inlet: &Inlet<'_>,
        moles: &mut [f64],
    ) -> CombustResult<InletAssessment> {
        inlet.validate()?;
        let fuel = inlet.require(Species::CH4)?;
        let oxidizer = inlet.require(Species::O2)?;

        moles.fill(0.0);
        moles[CH4] = fuel;
        moles[O2] = oxidizer;
        moles[HE] = inlet.fraction_of(Species::He).unwrap_or(0.0);
        moles[N2] = inlet.fraction_of(Species::N2).unwrap_or(0.0);
        if moles.iter().sum::<f64>() <= 0.0 {
            return Err(CombustError::EmptyInlet);
        }

        let combustion_occurs = Self::is_flammable(fuel, oxidizer);
        let reactants = fuel + oxidizer;
        Ok(InletAssessment {
            combustion_occurs,
            unstable: combustion_occurs && Self::is_unstable(fuel, oxidizer),
            fuel_fraction: if reactants > 0.0 { fuel / reactants } else { 0.0 },
        })
    }

    fn make_first_guess(&self, moles: &mut [f64]) {
        let reacting: f64 = moles[..HE].iter().sum();
        let share = reacting / HE as f64;
        moles[..HE].fill(share);
    }

    fn solve_elem_pot_eqns(&self, pass: &PotentialPass<'_>, ratios: &mut [f64], moles: &mut [f64]) {
        let g = pass.gibbs;
        let total: f64 = moles.iter().sum();
        let carbon = pass.elements[Element::C];
        let hydrogen = pass.elements[Element::H];
        let oxygen = pass.elements[Element::O];
        let lean = oxygen >= 2.0 * carbon + hydrogen / 2.0;

        // Potentials come from the majors, which are well resolved in each regime.
        let (pi, minors, majors) = if lean {
            let o = (g[O2] + ln_ratio(ratios, O2)) / 2.0;
            let h = (g[H2O] + ln_ratio(ratios, H2O) - o) / 2.0;
            let c = g[CO2] + ln_ratio(ratios, CO2) - 2.0 * o;
            (Potentials { c, h, o }, [CO, H2, OH, O, H, CH4], [CO2, H2O, O2])
        } else {
            let h = (g[H2] + ln_ratio(ratios, H2)) / 2.0;
            let o = g[H2O] + ln_ratio(ratios, H2O) - 2.0 * h;
            let c = g[CO] + ln_ratio(ratios, CO) - o;
            (Potentials { c, h, o }, [CO2, O2, OH, O, H, CH4], [CO, H2O, H2])
        };

        for i in minors {
            let target = Self::potential_fraction(i, &pi, g);
            ratios[i] += pass.damping * (target - ratios[i]);
            moles[i] = ratios[i] * total;
        }

        if lean {
            moles[CO2] = carbon - moles[CO] - moles[CH4];
            moles[H2O] =
                (hydrogen - 2.0 * moles[H2] - moles[OH] - moles[H] - 4.0 * moles[CH4]) / 2.0;
            moles[O2] = (oxygen
                - 2.0 * moles[CO2]
                - moles[H2O]
                - moles[CO]
                - moles[OH]
                - moles[O])
                / 2.0;
        } else {
            moles[CO] = carbon - moles[CO2] - moles[CH4];
            moles[H2O] = oxygen
                - 2.0 * moles[O2]
                - 2.0 * moles[CO2]
                - moles[CO]
                - moles[OH]
                - moles[O];
            moles[H2] =
                (hydrogen - 2.0 * moles[H2O] - moles[OH] - moles[H] - 4.0 * moles[CH4]) / 2.0;
        }

        for i in majors {
            if moles[i] < 0.0 {
                moles[i] = Self::potential_fraction(i, &pi, g) * total + NEGATIVE_BIAS * total;
            }
        }
    }

    fn unstable_brackets(&self, reactants: &[f64]) -> Option<BracketSeeds> {
        let total = reactants[CH4] + reactants[O2];
        if total <= 0.0 {
            return None;
        }
        let split = |fuel_fraction: f64| {
            let mut moles = reactants.to_vec();
            moles[CH4] = fuel_fraction * total;
            moles[O2] = (1.0 - fuel_fraction) * total;
            moles
        };
        Some(BracketSeeds {
            fuel_fractions: BRACKET_FUEL_FRACTIONS,
            moles: [
                split(BRACKET_FUEL_FRACTIONS[0]),
                split(BRACKET_FUEL_FRACTIONS[1]),
            ],
        })
    }
}
