//! Chemical-equilibrium combustion for combustflow.
//!
//! A [`Combustor`] takes an inlet mixture's temperature, pressure and
//! composition and finds the products' composition and temperature,
//! including high-temperature dissociation. Combustion conserves enthalpy;
//! recombination re-equilibrates the products at a new pressure at constant
//! entropy.
//!
//! The temperature search drives a damped elemental-potential iteration at
//! each trial temperature. Reaction chemistry is supplied through
//! [`ReactionStrategy`]; [`CombustCh4`] implements methane/oxygen.

pub mod ch4;
pub mod combustor;
pub mod config;
pub mod diagnostics;
mod equilibrium;
pub mod error;
pub mod factory;
mod reactor;
mod search;
pub mod strategy;

pub use ch4::CombustCh4;
pub use combustor::{Combustor, Interpolation};
pub use config::CombustConfig;
pub use diagnostics::Diagnostics;
pub use error::{CombustError, CombustResult, ErrorKind};
pub use factory::{CombustorType, create_combustor};
pub use reactor::MixtureSummary;
pub use strategy::{BracketSeeds, Inlet, InletAssessment, PotentialPass, ReactionStrategy};
