//! Error types for combustion solving.

use cf_thermo::{CompoundType, Species, ThermoError};
use thiserror::Error;

/// Fatal errors raised by a combustor.
///
/// Soft non-convergence is never reported here; it is counted in
/// [`crate::Diagnostics`] instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombustError {
    #[error("Non-physical {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Inlet mole fraction of {species} out of range: {value}")]
    MoleFractionOutOfRange { species: Species, value: f64 },

    #[error("Inlet mole fractions are all zero")]
    EmptyInlet,

    #[error("Required species {species} missing from inlet")]
    MissingSpecies { species: Species },

    #[error("Inlet has {fractions} fractions but {species} species tags")]
    LengthMismatch { fractions: usize, species: usize },

    #[error("Invalid reaction type: {what}")]
    InvalidReaction { what: String },

    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Thermo error: {0}")]
    Thermo(#[from] ThermoError),

    #[error("Equilibrium diverged on pass {iteration}: {compound} = {value}")]
    Diverged {
        compound: CompoundType,
        value: f64,
        iteration: usize,
    },
}

pub type CombustResult<T> = Result<T, CombustError>;

/// The two classes of fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad inputs or configuration; nothing was solved.
    Initialization,
    /// The elemental-potential iteration produced a non-physical composition.
    Divergence,
}

impl CombustError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CombustError::Diverged { .. } => ErrorKind::Divergence,
            _ => ErrorKind::Initialization,
        }
    }
}
