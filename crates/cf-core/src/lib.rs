//! cf-core: stable foundation for combustflow.
//!
//! Contains:
//! - units (uom SI types + constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
