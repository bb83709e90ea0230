use log::debug;
use statrs::stats_tests::{Alternative, fishers_exact_with_odds_ratio};

use crate::errors::{StatsError, StatsResult};
use crate::models::{BinProportions, BinTest};

///
/// Two-sided Fisher's exact test on a row-major 2x2 table. Returns the sample
/// odds ratio and the p-value. A table with an empty row or column gives a `NaN`
/// odds ratio and a p-value of 1.
///
fn fisher_exact(table: [u64; 4], bin: &BinProportions) -> StatsResult<(f64, f64)> {
    fishers_exact_with_odds_ratio(&table, Alternative::TwoSided).map_err(|source| {
        StatsError::FisherTest {
            bin: bin.bin.to_string(),
            source,
        }
    })
}

///
/// Compare every bin against the first one.
///
/// Two tables are tested per bin, with the reference bin in the first column:
///
/// ```text
///              reference   bin                     reference   bin
/// singleton  |  n0 - p0  | ni - pi |   non-ess. |  p0 - e0  | pi - ei |
/// paralog    |  p0       | pi      |   ess.     |  e0       | ei      |
/// ```
///
/// where `n` counts genes, `p` paralogs and `e` essential paralogs. With fewer than
/// two bins there is nothing to compare and the result is empty.
///
pub fn compute_del_fets(proportions: &[BinProportions]) -> StatsResult<Vec<BinTest>> {
    let Some((reference, others)) = proportions.split_first() else {
        return Ok(Vec::new());
    };

    others
        .iter()
        .map(|bin| {
            let paralog_table = [
                reference.n_genes.saturating_sub(reference.n_paralogs),
                bin.n_genes.saturating_sub(bin.n_paralogs),
                reference.n_paralogs,
                bin.n_paralogs,
            ];
            let essential_table = [
                reference.n_paralogs.saturating_sub(reference.n_ess_paralogs),
                bin.n_paralogs.saturating_sub(bin.n_ess_paralogs),
                reference.n_ess_paralogs,
                bin.n_ess_paralogs,
            ];

            let (odds_ratio_paralog, pvalue_paralog) = fisher_exact(paralog_table, bin)?;
            let (odds_ratio_essential, pvalue_essential) = fisher_exact(essential_table, bin)?;
            debug!(
                "bin {} vs {}: paralog table {:?}, essential table {:?}",
                bin.bin, reference.bin, paralog_table, essential_table
            );

            Ok(BinTest {
                reference_bin: reference.bin,
                bin: bin.bin,
                odds_ratio_paralog,
                pvalue_paralog,
                odds_ratio_essential,
                pvalue_essential,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bins::GeneBin;

    use rstest::rstest;

    fn proportions(
        bin: GeneBin,
        n_genes: u64,
        n_paralogs: u64,
        n_ess_paralogs: u64,
    ) -> BinProportions {
        BinProportions {
            bin,
            pct_paralog: None,
            pct_ess_paralog: None,
            n_genes,
            pct_of_all_genes: None,
            n_paralogs,
            n_ess_paralogs,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    fn test_compute_del_fets() {
        // paralog table [[3, 1], [1, 3]], essential table [[1, 0], [0, 3]]
        let bins = vec![
            proportions(GeneBin::Exact(0), 4, 1, 0),
            proportions(GeneBin::AtLeast(1), 4, 3, 3),
        ];
        let tests = compute_del_fets(&bins).unwrap();

        assert_eq!(tests.len(), 1);
        let test = &tests[0];
        assert_eq!(test.reference_bin, GeneBin::Exact(0));
        assert_eq!(test.bin, GeneBin::AtLeast(1));
        assert_close(test.odds_ratio_paralog, 9.0);
        assert_close(test.pvalue_paralog, 0.4857142857142857);
        assert!(test.odds_ratio_essential.is_infinite());
        assert_close(test.pvalue_essential, 0.25);
    }

    #[rstest]
    fn test_each_bin_is_compared_to_the_first() {
        // paralog tables [[8, 2], [1, 5]] and [[8, 4], [1, 1]]
        let bins = vec![
            proportions(GeneBin::Exact(0), 9, 1, 1),
            proportions(GeneBin::AtLeast(1), 7, 5, 2),
            proportions(GeneBin::AtLeast(3), 5, 1, 0),
        ];
        let tests = compute_del_fets(&bins).unwrap();

        assert_eq!(tests.len(), 2);
        assert_close(tests[0].odds_ratio_paralog, 20.0);
        assert_close(tests[0].pvalue_paralog, 0.03496503496503496);
        assert_close(tests[1].odds_ratio_paralog, 2.0);
        assert!(tests.iter().all(|t| t.reference_bin == GeneBin::Exact(0)));
    }

    #[rstest]
    fn test_empty_bin_gives_nan_odds_ratio() {
        let bins = vec![
            proportions(GeneBin::Exact(0), 4, 1, 0),
            proportions(GeneBin::AtLeast(10), 0, 0, 0),
        ];
        let tests = compute_del_fets(&bins).unwrap();

        assert!(tests[0].odds_ratio_paralog.is_nan());
        assert_close(tests[0].pvalue_paralog, 1.0);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![proportions(GeneBin::Exact(0), 4, 1, 0)])]
    fn test_fewer_than_two_bins(#[case] bins: Vec<BinProportions>) {
        assert!(compute_del_fets(&bins).unwrap().is_empty());
    }
}
