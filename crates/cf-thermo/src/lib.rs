//! cf-thermo: ideal-gas thermodynamics for combustflow.
//!
//! Provides:
//! - Inlet species tags and compositions
//! - The compound catalog (molar masses, NASA 7-term polynomials)
//! - Per-compound enthalpy, entropy, specific heat and Gibbs energy
//! - [`Mixture`], the mole/ratio bookkeeper with mass-specific properties
//!
//! # Example
//!
//! ```
//! use cf_thermo::{CompoundType, Mixture};
//!
//! let mut mix = Mixture::new(&[CompoundType::CH4, CompoundType::O2]);
//! mix.set_moles(&[0.4, 0.6]).unwrap();
//! let h = mix.enthalpy(298.15); // kJ/kg
//! assert!(h < 0.0);
//! ```

pub mod catalog;
pub mod composition;
pub mod compound;
pub mod error;
pub mod mixture;
pub mod properties;
pub mod species;

pub use catalog::{compound, compound_catalog};
pub use composition::Composition;
pub use compound::{ChemicalCompound, CompoundType, Element, ElementTotals};
pub use error::{ThermoError, ThermoResult};
pub use mixture::Mixture;
pub use species::Species;
