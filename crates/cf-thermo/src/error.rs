//! Thermodynamic property errors.

use thiserror::Error;

/// Result type for thermodynamic operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur while evaluating compound or mixture properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Non-physical values (negative moles, cv <= 0, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value out of valid range.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Mole total is zero or negative, so fractions cannot be formed.
    #[error("Mixture has no moles (total = {total})")]
    EmptyMixture { total: f64 },

    /// Unrecognised fluid-type tag.
    #[error("Unknown species: {name}")]
    UnknownSpecies { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ThermoError::NonPhysical { what: "cv" };
        assert!(err.to_string().contains("cv"));

        let err = ThermoError::EmptyMixture { total: 0.0 };
        assert!(err.to_string().contains("no moles"));
    }
}
