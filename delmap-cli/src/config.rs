use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use delmap_core::config::DelmapConfig;

///
/// Load the config passed with `--config`, or the defaults when none was given.
///
pub fn load_config(matches: &ArgMatches) -> Result<DelmapConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => DelmapConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path)),
        None => Ok(DelmapConfig::default()),
    }
}
