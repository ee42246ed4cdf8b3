//! Board-variant enumeration for the Wedge/Galaxy chassis family.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical board variant reported by the platform layer.
///
/// The Galaxy chassis deploys the same board in two roles: as a line card
/// (user-facing transceivers plus backplane lanes) or as a fabric card
/// (backplane lanes only). The other variants are the fixed top-of-rack
/// boards of the same family; they are not valid for the Galaxy platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformMode {
    /// Wedge 40G top-of-rack board.
    Wedge40,
    /// Wedge 100G top-of-rack board.
    Wedge100,
    /// Galaxy board in line-card role.
    GalaxyLc,
    /// Galaxy board in fabric-card role.
    GalaxyFc,
}

impl PlatformMode {
    /// Returns true for either Galaxy role.
    pub const fn is_galaxy(&self) -> bool {
        matches!(self, PlatformMode::GalaxyLc | PlatformMode::GalaxyFc)
    }

    /// Returns true if the board is a Galaxy line card.
    pub const fn is_line_card(&self) -> bool {
        matches!(self, PlatformMode::GalaxyLc)
    }

    /// Returns true if the board is a Galaxy fabric card.
    pub const fn is_fabric_card(&self) -> bool {
        matches!(self, PlatformMode::GalaxyFc)
    }
}

impl fmt::Display for PlatformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlatformMode::Wedge40 => "wedge40",
            PlatformMode::Wedge100 => "wedge100",
            PlatformMode::GalaxyLc => "galaxy-lc",
            PlatformMode::GalaxyFc => "galaxy-fc",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlatformMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wedge40" | "wedge" => Ok(PlatformMode::Wedge40),
            "wedge100" => Ok(PlatformMode::Wedge100),
            "galaxy-lc" | "galaxy_lc" | "lc" => Ok(PlatformMode::GalaxyLc),
            "galaxy-fc" | "galaxy_fc" | "fc" => Ok(PlatformMode::GalaxyFc),
            _ => Err(ParseError::InvalidPlatformMode(s.to_string())),
        }
    }
}
