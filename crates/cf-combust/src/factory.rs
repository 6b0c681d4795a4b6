//! Construct combustors by reaction type.

use crate::ch4::CombustCh4;
use crate::combustor::Combustor;
use crate::config::CombustConfig;
use crate::error::{CombustError, CombustResult};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Supported reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CombustorType {
    /// Products are not modelled; no combustor is built
    #[default]
    NoDissociation,
    /// Methane/oxygen with dissociation
    Ch4,
}

impl CombustorType {
    pub fn key(&self) -> &'static str {
        match self {
            CombustorType::NoDissociation => "none",
            CombustorType::Ch4 => "ch4",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            CombustorType::NoDissociation => 0,
            CombustorType::Ch4 => 1,
        }
    }
}

impl fmt::Display for CombustorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CombustorType {
    type Err = CombustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "no_dissociation" | "nodissociation" => Ok(CombustorType::NoDissociation),
            "ch4" | "methane" => Ok(CombustorType::Ch4),
            _ => Err(CombustError::InvalidReaction {
                what: s.to_string(),
            }),
        }
    }
}

impl TryFrom<i32> for CombustorType {
    type Error = CombustError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CombustorType::NoDissociation),
            1 => Ok(CombustorType::Ch4),
            _ => Err(CombustError::InvalidReaction {
                what: format!("code {code}"),
            }),
        }
    }
}

/// Build a combustor for `kind`, or `None` for [`CombustorType::NoDissociation`].
pub fn create_combustor(
    kind: CombustorType,
    config: CombustConfig,
) -> CombustResult<Option<Combustor>> {
    debug!(%kind, "creating combustor");
    match kind {
        CombustorType::NoDissociation => Ok(None),
        CombustorType::Ch4 => Combustor::new(Box::new(CombustCh4::new()), config).map(Some),
    }
}
