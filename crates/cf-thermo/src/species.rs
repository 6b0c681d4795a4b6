//! Fluid-type tags used by the host network to label inlet constituents.

use crate::compound::CompoundType;
use crate::error::ThermoError;

/// Fluid constituents a network can hand to a combustor.
///
/// These are the external identifiers; the reaction-local compound order is
/// defined by each reaction strategy, and [`Species::compound`] maps a tag to
/// its catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Oxygen (O₂)
    O2,
    /// Methane (CH₄)
    CH4,
    /// Hydrogen (H₂)
    H2,
    /// Helium (He)
    He,
    /// Nitrogen (N₂)
    N2,
    /// Argon (Ar), carried but not modelled by any reaction
    Ar,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Carbon monoxide (CO)
    CO,
    /// Water vapour (H₂O)
    H2O,
    /// Hydroxyl radical (OH)
    OH,
    /// Atomic oxygen (O)
    O,
    /// Atomic hydrogen (H)
    H,
}

impl Species {
    pub const ALL: [Species; 12] = [
        Species::O2,
        Species::CH4,
        Species::H2,
        Species::He,
        Species::N2,
        Species::Ar,
        Species::CO2,
        Species::CO,
        Species::H2O,
        Species::OH,
        Species::O,
        Species::H,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::O2 => "O2",
            Species::CH4 => "CH4",
            Species::H2 => "H2",
            Species::He => "He",
            Species::N2 => "N2",
            Species::Ar => "Ar",
            Species::CO2 => "CO2",
            Species::CO => "CO",
            Species::H2O => "H2O",
            Species::OH => "OH",
            Species::O => "O",
            Species::H => "H",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::O2 => "Oxygen",
            Species::CH4 => "Methane",
            Species::H2 => "Hydrogen",
            Species::He => "Helium",
            Species::N2 => "Nitrogen",
            Species::Ar => "Argon",
            Species::CO2 => "Carbon Dioxide",
            Species::CO => "Carbon Monoxide",
            Species::H2O => "Water",
            Species::OH => "Hydroxyl",
            Species::O => "Atomic Oxygen",
            Species::H => "Atomic Hydrogen",
        }
    }

    /// Catalog compound with this identity, if the catalog carries one.
    pub fn compound(&self) -> Option<CompoundType> {
        match self {
            Species::O2 => Some(CompoundType::O2),
            Species::CH4 => Some(CompoundType::CH4),
            Species::H2 => Some(CompoundType::H2),
            Species::He => Some(CompoundType::He),
            Species::N2 => Some(CompoundType::N2),
            Species::Ar => None,
            Species::CO2 => Some(CompoundType::CO2),
            Species::CO => Some(CompoundType::CO),
            Species::H2O => Some(CompoundType::H2O),
            Species::OH => Some(CompoundType::OH),
            Species::O => Some(CompoundType::O),
            Species::H => Some(CompoundType::H),
        }
    }

    /// Get molar mass [g/mol] for this species.
    pub fn molar_mass(&self) -> f64 {
        match self.compound() {
            Some(kind) => crate::catalog::compound(kind).molar_mass,
            None => 39.948,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "O2" | "OXYGEN" => Ok(Species::O2),
            "CH4" | "METHANE" => Ok(Species::CH4),
            "H2" | "HYDROGEN" => Ok(Species::H2),
            "HE" | "HELIUM" => Ok(Species::He),
            "N2" | "NITROGEN" => Ok(Species::N2),
            "AR" | "ARGON" => Ok(Species::Ar),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Species::CO2),
            "CO" | "CARBONMONOXIDE" | "CARBON MONOXIDE" => Ok(Species::CO),
            "H2O" | "WATER" | "STEAM" => Ok(Species::H2O),
            "OH" | "HYDROXYL" => Ok(Species::OH),
            "O" => Ok(Species::O),
            "H" => Ok(Species::H),
            _ => Err(ThermoError::UnknownSpecies {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!("methane".parse::<Species>().unwrap(), Species::CH4);
        assert_eq!(" Oxygen ".parse::<Species>().unwrap(), Species::O2);
        assert_eq!("he".parse::<Species>().unwrap(), Species::He);
        assert!("RP-1".parse::<Species>().is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(Species::CO2.display_name(), "Carbon Dioxide");
        assert_eq!(Species::OH.to_string(), "OH");
    }

    #[test]
    fn canonical_keys_roundtrip() {
        for species in Species::ALL {
            let parsed = species
                .key()
                .parse::<Species>()
                .expect("canonical key should parse");
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn compound_mapping_agrees_on_molar_mass() {
        assert!((Species::CH4.molar_mass() - 16.04246).abs() < 1e-3);
        assert!((Species::Ar.molar_mass() - 39.948).abs() < 1e-3);
        assert_eq!(Species::Ar.compound(), None);
    }
}
