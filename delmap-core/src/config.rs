use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ConfigResult};
use crate::models::{OverlapPolicy, OverlapperType};

pub const DEFAULT_BINS: [&str; 3] = ["0", "1+", "3+"];
pub const DEFAULT_ESSENTIAL_COLUMN: &str = "depmap_ess";
pub const DEFAULT_GROUP_KEY: &str = "sample";

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct MappingConfig {
    pub policy: OverlapPolicy,
    pub percent: f64,
    pub overlapper: OverlapperType,
    pub parallel: bool,
}

impl Default for MappingConfig {
    fn default() -> Self {
        MappingConfig {
            policy: OverlapPolicy::Partial,
            percent: 0.0,
            overlapper: OverlapperType::AIList,
            parallel: false,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    pub bins: Vec<String>,
    pub essential_column: String,
    pub group_key: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            bins: DEFAULT_BINS.iter().map(|b| b.to_string()).collect(),
            essential_column: DEFAULT_ESSENTIAL_COLUMN.to_string(),
            group_key: DEFAULT_GROUP_KEY.to_string(),
        }
    }
}

///
/// Run configuration, read from a TOML file. Every field is optional and
/// falls back to its default.
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(default)]
pub struct DelmapConfig {
    pub mapping: MappingConfig,
    pub analysis: AnalysisConfig,
}

impl DelmapConfig {
    fn validate(self) -> ConfigResult<Self> {
        let percent = self.mapping.percent;
        if !percent.is_finite() || !(0.0..=1.0).contains(&percent) {
            return Err(ConfigError::InvalidPercent(percent));
        }
        Ok(self)
    }
}

impl TryFrom<&str> for DelmapConfig {
    type Error = ConfigError;

    ///
    /// Parse a config from a TOML string
    ///
    fn try_from(value: &str) -> ConfigResult<Self> {
        let config: DelmapConfig = toml::from_str(value)?;
        config.validate()
    }
}

impl TryFrom<&Path> for DelmapConfig {
    type Error = ConfigError;

    ///
    /// Read a config from a `.toml` file on disk
    ///
    fn try_from(path: &Path) -> ConfigResult<Self> {
        if path.extension().and_then(OsStr::to_str) != Some("toml") {
            return Err(ConfigError::InvalidFileType);
        }
        let toml_str = read_to_string(path)?;
        DelmapConfig::try_from(toml_str.as_str())
    }
}
