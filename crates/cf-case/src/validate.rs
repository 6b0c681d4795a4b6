//! Case validation logic.

use crate::schema::{Case, StageDef};
use cf_combust::CombustorType;
use cf_thermo::Species;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate entry: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Unknown species: {name}")]
    UnknownSpecies { name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: case.name.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    if case.reaction == CombustorType::NoDissociation {
        return Err(ValidationError::Unsupported {
            feature: format!("reaction '{}'", case.reaction),
            reason: "no products are modelled without dissociation".to_string(),
        });
    }

    positive("inlet temperature_k", case.inlet.temperature_k)?;
    positive("inlet pressure_kpa", case.inlet.pressure_kpa)?;
    positive("temp_guess_k", case.temp_guess_k)?;

    validate_composition(case)?;

    for (i, stage) in case.stages.iter().enumerate() {
        validate_stage(i, stage)?;
    }

    case.config
        .validate()
        .map_err(|e| ValidationError::InvalidValue {
            field: "config".to_string(),
            value: format!("{:?}", case.config),
            reason: e.to_string(),
        })
}

fn validate_composition(case: &Case) -> Result<(), ValidationError> {
    if case.inlet.composition.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "inlet composition".to_string(),
            value: "[]".to_string(),
            reason: "at least one species is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    let mut total = 0.0;
    for entry in &case.inlet.composition {
        let species: Species =
            entry
                .species
                .parse()
                .map_err(|_| ValidationError::UnknownSpecies {
                    name: entry.species.clone(),
                })?;
        if !seen.insert(species) {
            return Err(ValidationError::DuplicateId {
                id: entry.species.clone(),
                context: "inlet composition".to_string(),
            });
        }
        if !entry.fraction.is_finite() || !(0.0..=1.0).contains(&entry.fraction) {
            return Err(ValidationError::InvalidValue {
                field: format!("inlet fraction of {}", entry.species),
                value: entry.fraction.to_string(),
                reason: "must lie in [0, 1]".to_string(),
            });
        }
        total += entry.fraction;
    }

    if total <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "inlet composition".to_string(),
            value: total.to_string(),
            reason: "fractions must not all be zero".to_string(),
        });
    }
    Ok(())
}

fn validate_stage(index: usize, stage: &StageDef) -> Result<(), ValidationError> {
    let label = match &stage.name {
        Some(name) => format!("stage '{name}'"),
        None => format!("stage {index}"),
    };
    positive(&format!("{label} pressure_kpa"), stage.pressure_kpa)?;
    if let Some(t) = stage.temp_guess_k {
        positive(&format!("{label} temp_guess_k"), t)?;
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}
