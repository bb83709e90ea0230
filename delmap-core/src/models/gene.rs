use std::fmt::{self, Display};

use crate::models::{Chromosome, Interval};

/// Entrez gene identifier.
pub type GeneId = u64;

///
/// The representative coding interval of one gene, taken from its longest
/// validated CCDS transcript. Coordinates are closed: `[start, end]`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GeneInterval {
    pub chromosome: Chromosome,
    pub gene_id: GeneId,
    pub start: u32,
    pub end: u32,
    pub ccds_id: String,
}

impl GeneInterval {
    ///
    /// Span of the coding range, `end - start`
    ///
    pub fn span(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    ///
    /// Convert into an [Interval] carrying `val` as payload
    ///
    pub fn to_interval<T>(&self, val: T) -> Interval<u32, T>
    where
        T: Eq + Clone + Send + Sync,
    {
        Interval {
            start: self.start,
            end: self.end,
            val,
        }
    }
}

impl Display for GeneInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.chromosome, self.gene_id, self.start, self.end, self.ccds_id
        )
    }
}
