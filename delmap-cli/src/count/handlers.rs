use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use delmap_core::models::GeneId;
use delmap_io::{
    read_mapping, read_reference, write_gene_counts, write_sample_counts_file, write_tsv,
};
use delmap_stats::{count_dels_per_gene, count_dels_per_sample};

use crate::config::load_config;

pub fn run_count(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let reference = matches
        .get_one::<String>("reference")
        .context("A path to the CCDS reference is required.")?;
    let mapping = matches
        .get_one::<String>("mapping")
        .context("A path to a segment-to-gene table is required.")?;
    let group_key = matches
        .get_one::<String>("group-key")
        .cloned()
        .unwrap_or(config.analysis.group_key);

    let background: Vec<GeneId> = read_reference(Path::new(reference))?
        .iter()
        .map(|gene| gene.gene_id)
        .collect();
    let mapping = read_mapping(Path::new(mapping))?;

    let gene_counts = count_dels_per_gene(&mapping, &background);
    match matches.get_one::<String>("genes") {
        Some(path) => write_gene_counts(&gene_counts, Path::new(path))?,
        None => {
            let stdout = io::stdout();
            write_tsv(&gene_counts, BufWriter::new(stdout.lock()))?;
        }
    }

    if let Some(path) = matches.get_one::<String>("samples") {
        let sample_counts = count_dels_per_sample(&mapping, &group_key)?;
        write_sample_counts_file(&sample_counts, &group_key, Path::new(path))?;
    }

    Ok(())
}
