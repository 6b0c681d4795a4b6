//! Solver tuning knobs.

use crate::error::{CombustError, CombustResult};

/// Combustor configuration.
///
/// Passed to the constructor and adjustable afterwards through the
/// combustor's setters. Defaults reproduce the reference tuning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CombustConfig {
    /// Maximum elemental-potential passes per equilibrium solve
    pub max_iterations_equil: usize,
    /// Maximum temperature steps per search
    pub max_iterations_combust: usize,
    /// Number of shrink-and-reverse refinement loops
    pub combust_loops: usize,
    /// Sum of absolute mole-fraction changes that counts as converged
    pub equil_tolerance: f64,
    /// Initial temperature step [K]
    pub temp_step: f64,
    /// Blend factor for the minor-species update
    pub damping: f64,
    /// Search temperature floor [K]
    pub min_temperature: f64,
}

impl Default for CombustConfig {
    fn default() -> Self {
        Self {
            max_iterations_equil: 10,
            max_iterations_combust: 400,
            combust_loops: 3,
            equil_tolerance: 0.05,
            temp_step: 100.0,
            damping: 0.25,
            min_temperature: 10.0,
        }
    }
}

impl CombustConfig {
    pub fn validate(&self) -> CombustResult<()> {
        if self.max_iterations_equil == 0 {
            return Err(CombustError::InvalidConfig {
                what: "max_iterations_equil must be at least 1",
            });
        }
        if self.max_iterations_combust == 0 {
            return Err(CombustError::InvalidConfig {
                what: "max_iterations_combust must be at least 1",
            });
        }
        if self.combust_loops == 0 {
            return Err(CombustError::InvalidConfig {
                what: "combust_loops must be at least 1",
            });
        }
        if !(self.equil_tolerance.is_finite() && self.equil_tolerance > 0.0) {
            return Err(CombustError::InvalidConfig {
                what: "equil_tolerance must be positive",
            });
        }
        if !(self.temp_step.is_finite() && self.temp_step > 0.0) {
            return Err(CombustError::InvalidConfig {
                what: "temp_step must be positive",
            });
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(CombustError::InvalidConfig {
                what: "damping must be in (0, 1]",
            });
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(CombustError::InvalidConfig {
                what: "min_temperature must be positive",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CombustConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations_equil, 10);
        assert_eq!(config.max_iterations_combust, 400);
        assert_eq!(config.combust_loops, 3);
        assert_eq!(config.temp_step, 100.0);
    }

    #[test]
    fn rejects_bad_knobs() {
        let bad = [
            CombustConfig {
                combust_loops: 0,
                ..Default::default()
            },
            CombustConfig {
                temp_step: -5.0,
                ..Default::default()
            },
            CombustConfig {
                damping: 1.5,
                ..Default::default()
            },
            CombustConfig {
                equil_tolerance: f64::NAN,
                ..Default::default()
            },
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }
}
