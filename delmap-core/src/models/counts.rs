use serde::{Deserialize, Serialize};

use crate::models::GeneId;

/// Number of segments (one per affected sample) hitting a gene.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneDeletionCount {
    pub gene_id: GeneId,
    pub n_del: u64,
}

/// Number of gene hits summed over every segment of one group (usually a sample).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleDeletionCount {
    pub sample: String,
    pub n_genes: u64,
}

///
/// Gene-level properties used to stratify deletion counts. A gene without a
/// recorded essentiality call has `essential == None`.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneAnnotation {
    pub gene_id: GeneId,
    pub paralog: bool,
    pub essential: Option<bool>,
}
