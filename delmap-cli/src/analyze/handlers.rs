use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use delmap_io::{read_annotations, read_gene_counts, write_tsv_file};
use delmap_stats::{
    annotate_counts, background_rates, compute_del_fets, compute_del_proportions, parse_bins,
};

use crate::config::load_config;

fn with_suffix(prefix: &str, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}.{suffix}"))
}

pub fn run_analyze(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;

    let gene_counts = matches
        .get_one::<String>("gene-counts")
        .context("A path to per-gene counts is required.")?;
    let annotations = matches
        .get_one::<String>("annotations")
        .context("A path to gene annotations is required.")?;
    let prefix = matches
        .get_one::<String>("output")
        .context("An output prefix is required.")?;

    let bins: Vec<String> = match matches.get_one::<String>("bins") {
        Some(bins) => bins.split(',').map(|b| b.trim().to_string()).collect(),
        None => config.analysis.bins,
    };
    let bins = parse_bins(&bins)?;
    let essential_column = matches
        .get_one::<String>("essential-column")
        .cloned()
        .unwrap_or(config.analysis.essential_column);

    let counts = read_gene_counts(Path::new(gene_counts))?;
    let annotations = read_annotations(Path::new(annotations), &essential_column)?;

    let genes = annotate_counts(&counts, &annotations);
    let proportions = compute_del_proportions(&genes, &bins);
    let tests = compute_del_fets(&proportions)?;
    let background = background_rates(&annotations);

    for test in &tests {
        info!(
            "{} vs {}: paralog OR={:.3} p={:.3e}, essential paralog OR={:.3} p={:.3e}",
            test.bin,
            test.reference_bin,
            test.odds_ratio_paralog,
            test.pvalue_paralog,
            test.odds_ratio_essential,
            test.pvalue_essential
        );
    }

    write_tsv_file(&proportions, &with_suffix(prefix, "proportions.tsv"))?;
    write_tsv_file(&tests, &with_suffix(prefix, "fisher.tsv"))?;
    write_tsv_file(&[background], &with_suffix(prefix, "background.tsv"))?;

    Ok(())
}
