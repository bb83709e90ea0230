use std::fmt::{self, Display};

use crate::models::{Chromosome, GeneId};

///
/// One copy-number segment call. `fields` keeps every input column verbatim
/// (including the coordinate columns) so caller metadata flows through untouched.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Segment {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub fields: Vec<String>,
}

impl Segment {
    ///
    /// The parsed chromosome, or `None` when the segment sits outside 1-22/X/Y.
    ///
    pub fn chromosome(&self) -> Option<Chromosome> {
        self.chr.parse().ok()
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}

///
/// SegmentTable struct, a header plus the segments in input order.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentTable {
    pub columns: Vec<String>,
    pub segments: Vec<Segment>,
}

impl SegmentTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a SegmentTable {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// A segment together with the genes it was mapped to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedSegment {
    pub segment: Segment,
    pub genes: Vec<GeneId>,
}

///
/// The segment-to-gene table: one row per input segment, input order kept.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingTable {
    /// Columns of the originating segment table (without `genes`).
    pub columns: Vec<String>,
    pub rows: Vec<MappedSegment>,
}

impl MappingTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    ///
    /// Iterate over every gene occurrence across all rows (with repetition).
    ///
    pub fn iter_genes(&self) -> impl Iterator<Item = &GeneId> {
        self.rows.iter().flat_map(|row| row.genes.iter())
    }

    ///
    /// Total number of gene occurrences across all rows.
    ///
    pub fn n_gene_hits(&self) -> usize {
        self.rows.iter().map(|row| row.genes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn segment(chr: &str, start: u32, end: u32) -> Segment {
        Segment {
            chr: chr.to_string(),
            start,
            end,
            fields: vec![chr.to_string(), start.to_string(), end.to_string()],
        }
    }

    #[rstest]
    fn test_chromosome_of_segment() {
        assert_eq!(segment("3", 1, 2).chromosome(), Some(Chromosome::Autosome(3)));
        assert_eq!(segment("23", 1, 2).chromosome(), Some(Chromosome::X));
        assert_eq!(segment("MT", 1, 2).chromosome(), None);
    }

    #[rstest]
    fn test_mapping_table_gene_hits() {
        let table = MappingTable {
            columns: vec!["chr".into(), "startpos".into(), "endpos".into()],
            rows: vec![
                MappedSegment {
                    segment: segment("1", 10, 20),
                    genes: vec![1, 2],
                },
                MappedSegment {
                    segment: segment("2", 10, 20),
                    genes: vec![],
                },
                MappedSegment {
                    segment: segment("2", 30, 40),
                    genes: vec![2],
                },
            ],
        };

        assert_eq!(table.n_gene_hits(), 3);
        assert_eq!(table.iter_genes().copied().collect::<Vec<_>>(), vec![1, 2, 2]);
        assert_eq!(table.column_index("endpos"), Some(2));
        assert_eq!(table.column_index("genes"), None);
    }
}
