use std::collections::BTreeMap;

use fxhash::FxHashMap;
use log::{debug, info, warn};

use delmap_core::models::{GeneDeletionCount, GeneId, MappingTable, SampleDeletionCount};

use crate::errors::{StatsError, StatsResult};

///
/// Count, for every background gene, how many mapped segments hit it.
///
/// Each segment contributes at most once per gene, so with one deletion call per
/// sample and locus the count is the number of samples with the gene deleted. The
/// output has exactly one row per background gene, in background order; genes that
/// were never hit get zero. Hits on genes outside the background are not reported.
///
/// # Arguments
///
/// - mapping: the segment-to-gene table
/// - background: every gene that should get a count
///
pub fn count_dels_per_gene(
    mapping: &MappingTable,
    background: &[GeneId],
) -> Vec<GeneDeletionCount> {
    let mut hits: FxHashMap<GeneId, u64> = FxHashMap::default();
    for gene_id in mapping.iter_genes() {
        *hits.entry(*gene_id).or_default() += 1;
    }

    let counts: Vec<GeneDeletionCount> = background
        .iter()
        .map(|gene_id| GeneDeletionCount {
            gene_id: *gene_id,
            n_del: hits.get(gene_id).copied().unwrap_or(0),
        })
        .collect();

    let n_hit = counts.iter().filter(|c| c.n_del > 0).count();
    debug!(
        "{} distinct genes hit, {} of them in the background",
        hits.len(),
        n_hit
    );
    info!(
        "Counted deletions for {} background genes ({} deleted at least once)",
        counts.len(),
        n_hit
    );

    counts
}

///
/// Total number of gene hits (with repetition) per value of `group_key`, sorted
/// by key. Groups whose segments hit no gene are reported with zero. Rows with an
/// empty key belong to no group and are skipped.
///
pub fn count_dels_per_sample(
    mapping: &MappingTable,
    group_key: &str,
) -> StatsResult<Vec<SampleDeletionCount>> {
    let key_idx = mapping
        .column_index(group_key)
        .ok_or_else(|| StatsError::MissingColumn(group_key.to_string()))?;

    let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
    let mut n_skipped = 0;
    for row in &mapping.rows {
        let key = row
            .segment
            .fields
            .get(key_idx)
            .map(|k| k.trim())
            .unwrap_or_default();
        if key.is_empty() {
            n_skipped += 1;
            continue;
        }
        *groups.entry(key).or_default() += row.genes.len() as u64;
    }

    if n_skipped > 0 {
        warn!("{} segments have no '{}' value and are not counted", n_skipped, group_key);
    }
    info!("Counted deleted genes for {} groups of '{}'", groups.len(), group_key);

    Ok(groups
        .into_iter()
        .map(|(sample, n_genes)| SampleDeletionCount {
            sample: sample.to_string(),
            n_genes,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use delmap_core::models::{MappedSegment, Segment};

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn mapped(sample: &str, genes: Vec<GeneId>) -> MappedSegment {
        MappedSegment {
            segment: Segment {
                chr: "1".to_string(),
                start: 1,
                end: 2,
                fields: vec![sample.to_string(), "1".to_string(), "1".to_string(), "2".to_string()],
            },
            genes,
        }
    }

    #[fixture]
    fn mapping() -> MappingTable {
        MappingTable {
            columns: vec![
                "sample".to_string(),
                "chr".to_string(),
                "startpos".to_string(),
                "endpos".to_string(),
            ],
            rows: vec![
                mapped("s2", vec![1, 2]),
                mapped("s1", vec![2]),
                mapped("s1", vec![]),
                mapped("s3", vec![]),
                mapped("s1", vec![2, 99]),
            ],
        }
    }

    #[rstest]
    fn test_count_dels_per_gene(mapping: MappingTable) {
        let counts = count_dels_per_gene(&mapping, &[3, 2, 1]);
        assert_eq!(
            counts,
            vec![
                GeneDeletionCount { gene_id: 3, n_del: 0 },
                GeneDeletionCount { gene_id: 2, n_del: 3 },
                GeneDeletionCount { gene_id: 1, n_del: 1 },
            ]
        );
    }

    #[rstest]
    fn test_count_dels_per_gene_covers_background(mapping: MappingTable) {
        let background: Vec<GeneId> = (1..=50).collect();
        let counts = count_dels_per_gene(&mapping, &background);

        assert_eq!(counts.len(), background.len());
        let total: u64 = counts.iter().map(|c| c.n_del).sum();
        // gene 99 is outside the background
        assert_eq!(total, mapping.n_gene_hits() as u64 - 1);
    }

    #[rstest]
    fn test_count_dels_per_gene_empty_mapping() {
        let mapping = MappingTable {
            columns: vec![],
            rows: vec![],
        };
        let counts = count_dels_per_gene(&mapping, &[5, 6]);
        assert!(counts.iter().all(|c| c.n_del == 0));
        assert_eq!(counts.len(), 2);
    }

    #[rstest]
    fn test_count_dels_per_sample(mapping: MappingTable) {
        let counts = count_dels_per_sample(&mapping, "sample").unwrap();
        assert_eq!(
            counts,
            vec![
                SampleDeletionCount { sample: "s1".to_string(), n_genes: 3 },
                SampleDeletionCount { sample: "s2".to_string(), n_genes: 2 },
                SampleDeletionCount { sample: "s3".to_string(), n_genes: 0 },
            ]
        );
    }

    #[rstest]
    fn test_count_dels_per_sample_skips_empty_keys(mut mapping: MappingTable) {
        mapping.rows.push(mapped("", vec![7, 8]));
        mapping.rows.push(mapped("  ", vec![9]));

        let counts = count_dels_per_sample(&mapping, "sample").unwrap();
        let samples: Vec<&str> = counts.iter().map(|c| c.sample.as_str()).collect();
        assert_eq!(samples, vec!["s1", "s2", "s3"]);
        assert_eq!(counts.iter().map(|c| c.n_genes).sum::<u64>(), 5);
    }

    #[rstest]
    fn test_count_dels_per_sample_unknown_column(mapping: MappingTable) {
        let result = count_dels_per_sample(&mapping, "patient");
        assert!(matches!(result, Err(StatsError::MissingColumn(c)) if c == "patient"));
    }
}
