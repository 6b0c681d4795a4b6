//! Execute a case and collect a serializable report.

use crate::schema::Case;
use crate::validate::{ValidationError, validate_case};
use crate::CaseResult;
use cf_combust::{CombustError, Combustor, Diagnostics, Interpolation, MixtureSummary, create_combustor};
use cf_core::units::{k, kpa, to_kelvin};
use cf_thermo::{Composition, Species};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    /// Constant-enthalpy burn of the inlet
    Combustion,
    /// Constant-entropy re-equilibration at a new pressure
    Recombination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundFraction {
    pub compound: String,
    pub mole_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageReport {
    pub name: String,
    pub kind: StageKind,
    pub summary: MixtureSummary,
    pub combustion_occurs: bool,
    pub unstable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<Interpolation>,
    pub composition: Vec<CompoundFraction>,
    /// Cumulative counters after this stage
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: String,
    pub reaction: String,
    /// Reactants' enthalpy [kJ/kg]
    pub reactants_enthalpy: f64,
    /// Reactants' entropy [kJ/(kg·K)]
    pub reactants_entropy: f64,
    pub stages: Vec<StageReport>,
}

impl CaseReport {
    pub fn final_stage(&self) -> Option<&StageReport> {
        self.stages.last()
    }
}

/// Burn the case inlet, then run each recombination stage in order.
pub fn run_case(case: &Case) -> CaseResult<CaseReport> {
    validate_case(case)?;

    let mut combustor = create_combustor(case.reaction, case.config.clone())?.ok_or_else(|| {
        ValidationError::Unsupported {
            feature: format!("reaction '{}'", case.reaction),
            reason: "no combustor for this reaction".to_string(),
        }
    })?;

    let composition = inlet_composition(case)?;
    let inlet = &case.inlet;
    combustor.update_combustion_mixture(
        k(case.temp_guess_k),
        kpa(inlet.pressure_kpa),
        k(inlet.temperature_k),
        composition.fractions(),
        composition.species(),
    )?;
    info!(
        case = %case.name,
        t_k = to_kelvin(combustor.temperature()),
        burning = combustor.combustion_occurs(),
        "combustion solved"
    );

    let mut stages = vec![stage_report(
        "chamber".to_string(),
        StageKind::Combustion,
        &combustor,
    )];

    for (i, stage) in case.stages.iter().enumerate() {
        let guess = match stage.temp_guess_k {
            Some(t) => k(t),
            None => combustor.temperature(),
        };
        combustor.update_recombination_mixture(guess, kpa(stage.pressure_kpa))?;
        let name = stage
            .name
            .clone()
            .unwrap_or_else(|| format!("stage {}", i + 1));
        info!(
            stage = %name,
            p_kpa = stage.pressure_kpa,
            t_k = to_kelvin(combustor.temperature()),
            "recombination solved"
        );
        stages.push(stage_report(name, StageKind::Recombination, &combustor));
    }

    Ok(CaseReport {
        case: case.name.clone(),
        reaction: case.reaction.to_string(),
        reactants_enthalpy: combustor.reactants_enthalpy(),
        reactants_entropy: combustor.reactants_entropy(),
        stages,
    })
}

fn inlet_composition(case: &Case) -> CaseResult<Composition> {
    let mut items = Vec::with_capacity(case.inlet.composition.len());
    for entry in &case.inlet.composition {
        let species: Species =
            entry
                .species
                .parse()
                .map_err(|_| ValidationError::UnknownSpecies {
                    name: entry.species.clone(),
                })?;
        items.push((species, entry.fraction));
    }
    Ok(Composition::new_mole_fractions(items).map_err(CombustError::from)?)
}

fn stage_report(name: String, kind: StageKind, combustor: &Combustor) -> StageReport {
    let composition = combustor
        .compounds()
        .iter()
        .zip(combustor.mole_fractions())
        .map(|(compound, &x)| CompoundFraction {
            compound: compound.to_string(),
            mole_fraction: x,
        })
        .collect();

    StageReport {
        name,
        kind,
        summary: combustor.summary(),
        combustion_occurs: combustor.combustion_occurs(),
        unstable: combustor.is_unstable(),
        interpolation: combustor.last_interpolation(),
        composition,
        diagnostics: *combustor.diagnostics(),
    }
}
