//! Case file schema.

use cf_combust::{CombustConfig, CombustorType};
use serde::{Deserialize, Serialize};

/// One combustion problem: an inlet burned at chamber pressure, then
/// optionally re-expanded through a list of recombination stages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub reaction: CombustorType,
    pub inlet: InletDef,
    /// Starting temperature for the combustion search [K]
    #[serde(default = "default_temp_guess_k")]
    pub temp_guess_k: f64,
    #[serde(default)]
    pub stages: Vec<StageDef>,
    #[serde(default)]
    pub config: CombustConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InletDef {
    pub temperature_k: f64,
    pub pressure_kpa: f64,
    pub composition: Vec<FractionDef>,
}

/// A species tag and its inlet mole fraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FractionDef {
    pub species: String,
    pub fraction: f64,
}

/// Constant-entropy re-equilibration at a new pressure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StageDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub pressure_kpa: f64,
    /// Defaults to the previous stage's temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_guess_k: Option<f64>,
}

fn default_temp_guess_k() -> f64 {
    2000.0
}
