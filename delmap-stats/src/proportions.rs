use fxhash::{FxHashMap, FxHashSet};
use log::warn;

use delmap_core::models::{GeneAnnotation, GeneDeletionCount, GeneId};

use crate::bins::GeneBin;
use crate::models::{AnnotatedGene, BackgroundRates, BinProportions};

fn percent(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64 * 100.0)
    }
}

///
/// Attach deletion counts to the annotated genes, keeping the order of
/// `annotations`. The annotation table is the background: annotated genes without
/// a count were never deleted and get `n_del = 0`; counted genes without an
/// annotation are dropped.
///
pub fn annotate_counts(
    counts: &[GeneDeletionCount],
    annotations: &[GeneAnnotation],
) -> Vec<AnnotatedGene> {
    let by_id: FxHashMap<GeneId, u64> = counts.iter().map(|c| (c.gene_id, c.n_del)).collect();

    let annotated: Vec<AnnotatedGene> = annotations
        .iter()
        .map(|annotation| AnnotatedGene {
            gene_id: annotation.gene_id,
            n_del: by_id.get(&annotation.gene_id).copied().unwrap_or(0),
            paralog: annotation.paralog,
            essential: annotation.essential,
        })
        .collect();

    let annotated_ids: FxHashSet<GeneId> = annotations.iter().map(|a| a.gene_id).collect();
    let n_unannotated = counts
        .iter()
        .filter(|c| !annotated_ids.contains(&c.gene_id))
        .count();
    if n_unannotated > 0 {
        warn!("{} genes with deletion counts have no annotation and are skipped", n_unannotated);
    }

    annotated
}

///
/// Paralog composition of every bin.
///
/// For each bin: the number of genes whose deletion count falls in it, how many of
/// them are paralogs, how many of those paralogs are essential, and the matching
/// percentages. `pct_of_all_genes` is relative to all of `genes`.
///
/// # Arguments
///
/// - genes: annotated genes with their deletion counts
/// - bins: bins in report order; the first one is the reference for [crate::fisher]
///
pub fn compute_del_proportions(genes: &[AnnotatedGene], bins: &[GeneBin]) -> Vec<BinProportions> {
    let total = genes.len() as u64;

    bins.iter()
        .map(|bin| {
            let in_bin = genes.iter().filter(|g| bin.contains(g.n_del));

            let (mut n_genes, mut n_paralogs, mut n_ess_paralogs) = (0u64, 0u64, 0u64);
            for gene in in_bin {
                n_genes += 1;
                n_paralogs += gene.paralog as u64;
                n_ess_paralogs += gene.is_essential_paralog() as u64;
            }

            BinProportions {
                bin: *bin,
                pct_paralog: percent(n_paralogs, n_genes),
                pct_ess_paralog: percent(n_ess_paralogs, n_paralogs),
                n_genes,
                pct_of_all_genes: percent(n_genes, total),
                n_paralogs,
                n_ess_paralogs,
            }
        })
        .collect()
}

///
/// Share of paralogs among all annotated genes, and of essential genes among
/// those paralogs.
///
pub fn background_rates(annotations: &[GeneAnnotation]) -> BackgroundRates {
    let n_genes = annotations.len() as u64;
    let n_paralogs = annotations.iter().filter(|a| a.paralog).count() as u64;
    let n_ess_paralogs = annotations
        .iter()
        .filter(|a| a.paralog && a.essential == Some(true))
        .count() as u64;

    BackgroundRates {
        n_genes,
        n_paralogs,
        n_ess_paralogs,
        pct_paralog: percent(n_paralogs, n_genes),
        pct_ess_paralog: percent(n_ess_paralogs, n_paralogs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn gene(gene_id: GeneId, n_del: u64, paralog: bool, essential: Option<bool>) -> AnnotatedGene {
        AnnotatedGene {
            gene_id,
            n_del,
            paralog,
            essential,
        }
    }

    #[fixture]
    fn genes() -> Vec<AnnotatedGene> {
        vec![
            gene(1, 0, true, Some(true)),
            gene(2, 0, true, Some(false)),
            gene(3, 0, false, Some(true)),
            gene(4, 0, true, None),
            gene(5, 1, true, Some(true)),
            gene(6, 2, false, None),
            gene(7, 3, true, Some(false)),
            gene(8, 4, true, Some(true)),
        ]
    }

    #[rstest]
    fn test_annotate_counts_follows_annotations() {
        let counts = vec![
            GeneDeletionCount { gene_id: 3, n_del: 2 },
            GeneDeletionCount { gene_id: 1, n_del: 0 },
            GeneDeletionCount { gene_id: 2, n_del: 5 },
        ];
        let annotations = vec![
            GeneAnnotation { gene_id: 1, paralog: true, essential: None },
            GeneAnnotation { gene_id: 3, paralog: false, essential: Some(true) },
        ];

        assert_eq!(
            annotate_counts(&counts, &annotations),
            vec![gene(1, 0, true, None), gene(3, 2, false, Some(true))]
        );
    }

    #[rstest]
    fn test_uncounted_annotated_gene_lands_in_zero_bin() {
        let counts = vec![
            GeneDeletionCount { gene_id: 1, n_del: 0 },
            GeneDeletionCount { gene_id: 2, n_del: 3 },
        ];
        let annotations = vec![
            GeneAnnotation { gene_id: 1, paralog: false, essential: None },
            GeneAnnotation { gene_id: 2, paralog: true, essential: Some(false) },
            GeneAnnotation { gene_id: 999, paralog: true, essential: Some(true) },
        ];

        let genes = annotate_counts(&counts, &annotations);
        assert_eq!(genes[2], gene(999, 0, true, Some(true)));

        let bins = [GeneBin::Exact(0), GeneBin::AtLeast(1)];
        let proportions = compute_del_proportions(&genes, &bins);
        assert_eq!(proportions[0].n_genes, 2);
        assert_eq!(proportions[0].n_ess_paralogs, 1);

        // bins and background rates are computed over the same genes
        let n_binned: u64 = proportions.iter().map(|p| p.n_genes).sum();
        let rates = background_rates(&annotations);
        assert_eq!(n_binned, rates.n_genes);
        let n_paralogs: u64 = proportions.iter().map(|p| p.n_paralogs).sum();
        assert_eq!(n_paralogs, rates.n_paralogs);
    }

    #[rstest]
    fn test_compute_del_proportions(genes: Vec<AnnotatedGene>) {
        let bins = vec![GeneBin::Exact(0), GeneBin::AtLeast(1), GeneBin::AtLeast(3)];
        let proportions = compute_del_proportions(&genes, &bins);

        let counts: Vec<(u64, u64, u64)> = proportions
            .iter()
            .map(|p| (p.n_genes, p.n_paralogs, p.n_ess_paralogs))
            .collect();
        assert_eq!(counts, vec![(4, 3, 1), (4, 3, 2), (2, 2, 1)]);

        assert_eq!(proportions[0].pct_paralog, Some(75.0));
        assert_eq!(proportions[0].pct_of_all_genes, Some(50.0));
        assert_eq!(proportions[2].pct_ess_paralog, Some(50.0));
        assert_eq!(proportions[2].pct_of_all_genes, Some(25.0));
    }

    #[rstest]
    fn test_empty_bin_has_no_percentages(genes: Vec<AnnotatedGene>) {
        let proportions = compute_del_proportions(&genes, &[GeneBin::Range(10, 20)]);

        assert_eq!(
            proportions,
            vec![BinProportions {
                bin: GeneBin::Range(10, 20),
                pct_paralog: None,
                pct_ess_paralog: None,
                n_genes: 0,
                pct_of_all_genes: Some(0.0),
                n_paralogs: 0,
                n_ess_paralogs: 0,
            }]
        );
    }

    #[rstest]
    fn test_background_rates() {
        let annotations = vec![
            GeneAnnotation { gene_id: 1, paralog: true, essential: Some(true) },
            GeneAnnotation { gene_id: 2, paralog: true, essential: None },
            GeneAnnotation { gene_id: 3, paralog: false, essential: Some(true) },
            GeneAnnotation { gene_id: 4, paralog: true, essential: Some(false) },
        ];
        let rates = background_rates(&annotations);

        assert_eq!(rates.n_paralogs, 3);
        assert_eq!(rates.n_ess_paralogs, 1);
        assert_eq!(rates.pct_paralog, Some(75.0));
        assert!((rates.pct_ess_paralog.unwrap() - 100.0 / 3.0).abs() < 1e-9);
    }

    #[rstest]
    fn test_background_rates_empty() {
        let rates = background_rates(&[]);
        assert_eq!(rates.pct_paralog, None);
        assert_eq!(rates.pct_ess_paralog, None);
    }
}
