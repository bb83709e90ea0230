use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChromosomeError {
    #[error("Unsupported chromosome: '{0}'. Expected 1-22, X or Y")]
    Unsupported(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid overlap policy: '{0}'. Valid options are 'partial' or 'full'")]
    InvalidPolicy(String),

    #[error("Invalid overlapper type: '{0}'. Valid options are 'ailist' or 'linear'")]
    InvalidOverlapper(String),

    #[error("Overlap fraction must be within [0, 1], got {0}")]
    InvalidPercent(f64),

    #[error("Missing or invalid file extension for config file. It must be `toml`")]
    InvalidFileType,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
