//! Core types for the geographic reference service.

use crate::constants::{GREAT_LAKES_STATES, SOUTH_STATES};
use crate::error::GeorefError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timber price regions covered by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "south")]
    South,
    #[serde(rename = "gl")]
    GreatLakes,
}

impl Region {
    /// Member state abbreviations, in canonical order
    pub fn states(&self) -> &'static [&'static str] {
        match self {
            Region::South => &SOUTH_STATES,
            Region::GreatLakes => &GREAT_LAKES_STATES,
        }
    }

    /// Short name used by callers selecting a region filter
    pub fn label(&self) -> &'static str {
        match self {
            Region::South => "south",
            Region::GreatLakes => "gl",
        }
    }
}

impl FromStr for Region {
    type Err = GeorefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "south" => Ok(Region::South),
            "gl" => Ok(Region::GreatLakes),
            other => Err(GeorefError::UnknownRegion {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
