//! Per-compound thermodynamic properties from NASA polynomials.
//!
//! All functions are pure in (compound, temperature[, pressure]). Callers must
//! pass a positive temperature; no validation is done on this hot path.
//!
//! Units: enthalpy kJ/mol, entropy and specific heat kJ/(mol·K), Gibbs energy
//! non-dimensional (divided by RT).

use crate::compound::ChemicalCompound;
use cf_core::units::constants::{ATM_PA, R_KJ_PER_MOL_K};

/// Partial pressures below this [Pa] are floored before taking the log.
pub const MIN_PARTIAL_PRESSURE: f64 = 1.0e-10;

/// Molar enthalpy [kJ/mol], including enthalpy of formation.
pub fn enthalpy(compound: &ChemicalCompound, t: f64) -> f64 {
    let c = compound.coefficients(t);
    let h_rt = c[0]
        + c[1] * t / 2.0
        + c[2] * t * t / 3.0
        + c[3] * t.powi(3) / 4.0
        + c[4] * t.powi(4) / 5.0
        + c[5] / t;
    h_rt * t * R_KJ_PER_MOL_K
}

/// Molar entropy [kJ/(mol·K)] at partial pressure `partial_pressure` [Pa].
pub fn entropy(compound: &ChemicalCompound, t: f64, partial_pressure: f64) -> f64 {
    let c = compound.coefficients(t);
    let s0_r = c[0] * t.ln()
        + c[1] * t
        + c[2] * t * t / 2.0
        + c[3] * t.powi(3) / 3.0
        + c[4] * t.powi(4) / 4.0
        + c[6];
    let p = partial_pressure.max(MIN_PARTIAL_PRESSURE);
    (s0_r - (p / ATM_PA).ln()) * R_KJ_PER_MOL_K
}

/// Molar specific heat at constant pressure [kJ/(mol·K)].
pub fn specific_heat(compound: &ChemicalCompound, t: f64) -> f64 {
    let c = compound.coefficients(t);
    let cp_r = c[0] + c[1] * t + c[2] * t * t + c[3] * t.powi(3) + c[4] * t.powi(4);
    cp_r * R_KJ_PER_MOL_K
}

/// Gibbs energy over RT at pressure `pressure` [Pa].
///
/// `g = h/(RT) − s(T, P)/R`, the driving term of the elemental-potential
/// equations.
pub fn gibbs(compound: &ChemicalCompound, t: f64, pressure: f64) -> f64 {
    enthalpy(compound, t) / (t * R_KJ_PER_MOL_K) - entropy(compound, t, pressure) / R_KJ_PER_MOL_K
}
