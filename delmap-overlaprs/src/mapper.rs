use std::collections::BTreeMap;

use log::{debug, info, warn};
use rayon::prelude::*;
use thiserror::Error;

use delmap_core::config::MappingConfig;
use delmap_core::models::{
    Chromosome, GeneId, GeneInterval, MappedSegment, MappingTable, OverlapPolicy, OverlapperType,
    SegmentTable,
};

use crate::classify::map_segment;
use crate::gene_index::GeneIndex;

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("Overlap fraction must be a finite number within [0, 1], got {0}")]
    InvalidPercent(f64),

    #[error("Segment {row} ends before it starts ({start} > {end})")]
    InvertedSegment { row: usize, start: u32, end: u32 },
}

///
/// Knobs that change how the mapping is computed but never its result.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapperOptions {
    pub overlapper: OverlapperType,
    pub parallel: bool,
}

impl From<&MappingConfig> for MapperOptions {
    fn from(config: &MappingConfig) -> Self {
        MapperOptions {
            overlapper: config.overlapper,
            parallel: config.parallel,
        }
    }
}

///
/// Map every segment to the genes it hits under `policy`.
///
/// The result has one row per segment, in input order, carrying the segment's
/// columns plus the list of gene ids. Segments on chromosomes outside 1-22/X/Y,
/// or on chromosomes without reference genes, map to an empty list. A segment
/// with `start > end` is rejected; rows are numbered from 1.
///
/// # Arguments
///
/// - segments: the segment table
/// - genes: the gene-interval reference table
/// - policy: the overlap policy
/// - percent: minimal covered fraction of a gene for the partial policy, in `[0, 1]`
///
pub fn map_segments(
    segments: &SegmentTable,
    genes: &[GeneInterval],
    policy: OverlapPolicy,
    percent: f64,
) -> Result<MappingTable, MappingError> {
    map_segments_with_options(segments, genes, policy, percent, MapperOptions::default())
}

///
/// Same as [`map_segments`], with an explicit choice of overlap structure and
/// optional rayon parallelism over chromosomes.
///
pub fn map_segments_with_options(
    segments: &SegmentTable,
    genes: &[GeneInterval],
    policy: OverlapPolicy,
    percent: f64,
    options: MapperOptions,
) -> Result<MappingTable, MappingError> {
    if !percent.is_finite() || !(0.0..=1.0).contains(&percent) {
        return Err(MappingError::InvalidPercent(percent));
    }

    if let Some((idx, segment)) = segments
        .iter()
        .enumerate()
        .find(|(_, s)| s.start > s.end)
    {
        return Err(MappingError::InvertedSegment {
            row: idx + 1,
            start: segment.start,
            end: segment.end,
        });
    }

    let index = GeneIndex::new(genes, options.overlapper);
    if index.is_empty() {
        warn!("The reference holds no genes, every segment maps to an empty list");
    }
    debug!(
        "Built {} index over {} genes on {} chromosomes",
        index.overlapper_type(),
        index.len(),
        index.chromosomes().len()
    );

    // segment rows grouped per chromosome, each group in input order
    let mut groups: BTreeMap<Chromosome, Vec<usize>> = BTreeMap::new();
    let mut n_unsupported = 0;
    for (row, segment) in segments.iter().enumerate() {
        match segment.chromosome() {
            Some(chromosome) => groups.entry(chromosome).or_default().push(row),
            None => n_unsupported += 1,
        }
    }

    let map_group = |(chromosome, rows): (&Chromosome, &Vec<usize>)| {
        debug!(
            "chromosome {}: {} segments against {} genes",
            chromosome,
            rows.len(),
            index.genes_on(*chromosome).len()
        );
        rows.iter()
            .map(|&row| {
                let segment = &segments.segments[row];
                let candidates = index.candidates(*chromosome, segment.start, segment.end);
                (row, map_segment(policy, segment, candidates, percent))
            })
            .collect::<Vec<(usize, Vec<GeneId>)>>()
    };

    let hits: Vec<Vec<(usize, Vec<GeneId>)>> = if options.parallel {
        groups.par_iter().map(map_group).collect()
    } else {
        groups.iter().map(map_group).collect()
    };

    let mut genes_per_row: Vec<Vec<GeneId>> = vec![Vec::new(); segments.len()];
    for (row, row_genes) in hits.into_iter().flatten() {
        genes_per_row[row] = row_genes;
    }

    let rows: Vec<MappedSegment> = segments
        .iter()
        .cloned()
        .zip(genes_per_row)
        .map(|(segment, genes)| MappedSegment { segment, genes })
        .collect();

    let table = MappingTable {
        columns: segments.columns.clone(),
        rows,
    };

    info!(
        "Mapped {} segments ({} on unsupported chromosomes) to {} gene hits using {} overlap",
        table.len(),
        n_unsupported,
        table.n_gene_hits(),
        policy
    );

    Ok(table)
}
