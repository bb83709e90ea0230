use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use delmap_core::models::{OverlapPolicy, OverlapperType};
use delmap_io::{read_reference, read_segments, write_mapping};
use delmap_overlaprs::{MapperOptions, map_segments_with_options};

use crate::config::load_config;

pub fn run_map(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let reference = matches
        .get_one::<String>("reference")
        .context("A path to the CCDS reference is required.")?;
    let segments = matches
        .get_one::<String>("segments")
        .context("A path to a segment table is required.")?;
    let output = matches
        .get_one::<String>("output")
        .context("An output path is required.")?;

    // command line flags win over the config file
    let mut mapping = config.mapping;
    if let Some(policy) = matches.get_one::<String>("policy") {
        mapping.policy = policy.parse::<OverlapPolicy>()?;
    }
    if let Some(percent) = matches.get_one::<f64>("percent") {
        mapping.percent = *percent;
    }
    if let Some(overlapper) = matches.get_one::<String>("overlapper") {
        mapping.overlapper = overlapper.parse::<OverlapperType>()?;
    }
    if matches.get_flag("parallel") {
        mapping.parallel = true;
    }

    let genes = read_reference(Path::new(reference))?;
    let segments = read_segments(Path::new(segments))?;

    info!(
        "Mapping with policy={}, percent={}, overlapper={}, parallel={}",
        mapping.policy, mapping.percent, mapping.overlapper, mapping.parallel
    );
    let table = map_segments_with_options(
        &segments,
        &genes,
        mapping.policy,
        mapping.percent,
        MapperOptions::from(&mapping),
    )?;

    write_mapping(&table, Path::new(output))?;

    Ok(())
}
