use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

///
/// How a segment has to cover a gene for the gene to count as hit.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Any shared position, optionally filtered by an overlap fraction of the gene.
    #[default]
    Partial,
    /// Gene start and end both inside the segment.
    Full,
}

impl FromStr for OverlapPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "partial" => Ok(OverlapPolicy::Partial),
            "full" => Ok(OverlapPolicy::Full),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

impl Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapPolicy::Partial => write!(f, "partial"),
            OverlapPolicy::Full => write!(f, "full"),
        }
    }
}

///
/// The data structure used to look up candidate genes per chromosome.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OverlapperType {
    /// Augmented Interval List.
    #[serde(rename = "ailist")]
    #[default]
    AIList,
    /// Plain scan over the sorted gene table.
    #[serde(rename = "linear")]
    Linear,
}

impl FromStr for OverlapperType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ailist" => Ok(OverlapperType::AIList),
            "linear" => Ok(OverlapperType::Linear),
            _ => Err(ConfigError::InvalidOverlapper(s.to_string())),
        }
    }
}

impl Display for OverlapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapperType::AIList => write!(f, "ailist"),
            OverlapperType::Linear => write!(f, "linear"),
        }
    }
}
