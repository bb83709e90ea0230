use serde::{Serialize, Serializer};

use delmap_core::models::GeneId;

use crate::bins::GeneBin;

/// Text written for a percentage without a denominator.
pub const MISSING_VALUE: &str = "NA";

fn na_if_none<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_str(MISSING_VALUE),
    }
}

/// A gene with its deletion count and annotation.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedGene {
    pub gene_id: GeneId,
    pub n_del: u64,
    pub paralog: bool,
    pub essential: Option<bool>,
}

impl AnnotatedGene {
    pub fn is_essential_paralog(&self) -> bool {
        self.paralog && self.essential == Some(true)
    }
}

///
/// Paralog and essential-paralog composition of the genes falling into one bin.
/// Percentages are `None` when their denominator is zero.
///
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BinProportions {
    pub bin: GeneBin,
    #[serde(serialize_with = "na_if_none")]
    pub pct_paralog: Option<f64>,
    #[serde(serialize_with = "na_if_none")]
    pub pct_ess_paralog: Option<f64>,
    pub n_genes: u64,
    #[serde(serialize_with = "na_if_none")]
    pub pct_of_all_genes: Option<f64>,
    pub n_paralogs: u64,
    pub n_ess_paralogs: u64,
}

///
/// Fisher's exact tests of one bin against the reference (first) bin: paralogs
/// vs. singletons, and essential vs. non-essential paralogs.
///
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BinTest {
    pub reference_bin: GeneBin,
    pub bin: GeneBin,
    #[serde(rename = "OR_par")]
    pub odds_ratio_paralog: f64,
    #[serde(rename = "pval_par")]
    pub pvalue_paralog: f64,
    #[serde(rename = "OR_ess")]
    pub odds_ratio_essential: f64,
    #[serde(rename = "pval_ess")]
    pub pvalue_essential: f64,
}

/// Genome-wide paralog rates, the baseline the per-bin proportions are compared to.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BackgroundRates {
    pub n_genes: u64,
    pub n_paralogs: u64,
    pub n_ess_paralogs: u64,
    #[serde(serialize_with = "na_if_none")]
    pub pct_paralog: Option<f64>,
    #[serde(serialize_with = "na_if_none")]
    pub pct_ess_paralog: Option<f64>,
}
