//! Per-chromosome gene lookup.
//!
//! [`GeneIndex`] splits the gene-interval table by chromosome and builds one
//! [`Overlapper`] per partition, keyed by the row's position inside that partition.
//! Queries return candidate genes in table order, which is the order the classifier
//! policies report their hits in.
//!
//! ```
//! use delmap_core::models::{Chromosome, GeneInterval, OverlapperType};
//! use delmap_overlaprs::gene_index::IntoGeneIndex;
//!
//! let genes = vec![
//!     GeneInterval { chromosome: Chromosome::Autosome(1), gene_id: 7, start: 100, end: 200, ccds_id: "CCDS1.1".into() },
//!     GeneInterval { chromosome: Chromosome::Autosome(2), gene_id: 9, start: 100, end: 200, ccds_id: "CCDS2.1".into() },
//! ];
//!
//! let index = genes.as_slice().into_gene_index(OverlapperType::AIList);
//! let hits = index.candidates(Chromosome::Autosome(1), 150, 400);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].gene_id, 7);
//! ```

use fxhash::FxHashMap;

use delmap_core::models::{Chromosome, GeneInterval, OverlapperType};

use crate::{AIList, LinearScan, Overlapper};

/// The genes of one chromosome and the overlapper built over them.
struct Partition {
    genes: Vec<GeneInterval>,
    overlapper: Box<dyn Overlapper<u32, usize>>,
}

///
/// A genome-wide gene index: one overlap structure per chromosome present in the
/// reference table.
///
pub struct GeneIndex {
    partitions: FxHashMap<Chromosome, Partition>,
    overlapper_type: OverlapperType,
}

impl GeneIndex {
    ///
    /// Build the index from a gene-interval table. Within each chromosome the
    /// genes keep their relative order from `genes`.
    ///
    pub fn new(genes: &[GeneInterval], overlapper_type: OverlapperType) -> Self {
        let mut grouped: FxHashMap<Chromosome, Vec<GeneInterval>> = FxHashMap::default();
        for gene in genes {
            grouped.entry(gene.chromosome).or_default().push(gene.clone());
        }

        let partitions = grouped
            .into_iter()
            .map(|(chromosome, genes)| {
                let intervals = genes
                    .iter()
                    .enumerate()
                    .map(|(row, gene)| gene.to_interval(row))
                    .collect();

                let overlapper: Box<dyn Overlapper<u32, usize>> = match overlapper_type {
                    OverlapperType::AIList => Box::new(AIList::build(intervals)),
                    OverlapperType::Linear => Box::new(LinearScan::build(intervals)),
                };

                (chromosome, Partition { genes, overlapper })
            })
            .collect();

        GeneIndex {
            partitions,
            overlapper_type,
        }
    }

    ///
    /// Genes on `chromosome` that share at least one position with `[start, end]`,
    /// in table order.
    ///
    pub fn candidates(&self, chromosome: Chromosome, start: u32, end: u32) -> Vec<&GeneInterval> {
        let Some(partition) = self.partitions.get(&chromosome) else {
            return Vec::new();
        };

        let mut rows: Vec<usize> = partition
            .overlapper
            .find_iter(start, end)
            .map(|iv| iv.val)
            .collect();
        rows.sort_unstable();

        rows.into_iter().map(|row| &partition.genes[row]).collect()
    }

    /// All genes on `chromosome`, in table order.
    pub fn genes_on(&self, chromosome: Chromosome) -> &[GeneInterval] {
        self.partitions
            .get(&chromosome)
            .map(|p| p.genes.as_slice())
            .unwrap_or_default()
    }

    /// Chromosomes with at least one gene, sorted.
    pub fn chromosomes(&self) -> Vec<Chromosome> {
        let mut chromosomes: Vec<Chromosome> = self.partitions.keys().copied().collect();
        chromosomes.sort();
        chromosomes
    }

    /// Total number of genes indexed.
    pub fn len(&self) -> usize {
        self.partitions.values().map(|p| p.overlapper.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn overlapper_type(&self) -> OverlapperType {
        self.overlapper_type
    }
}

pub trait IntoGeneIndex {
    fn into_gene_index(self, overlapper_type: OverlapperType) -> GeneIndex;
}

impl IntoGeneIndex for &[GeneInterval] {
    fn into_gene_index(self, overlapper_type: OverlapperType) -> GeneIndex {
        GeneIndex::new(self, overlapper_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn gene(chromosome: Chromosome, gene_id: u64, start: u32, end: u32) -> GeneInterval {
        GeneInterval {
            chromosome,
            gene_id,
            start,
            end,
            ccds_id: format!("CCDS{gene_id}.1"),
        }
    }

    #[fixture]
    fn genes() -> Vec<GeneInterval> {
        vec![
            gene(Chromosome::Autosome(1), 1, 100, 500),
            gene(Chromosome::Autosome(1), 2, 200, 300),
            gene(Chromosome::Autosome(1), 3, 900, 1_000),
            gene(Chromosome::X, 4, 100, 500),
        ]
    }

    #[rstest]
    fn test_partitions(genes: Vec<GeneInterval>) {
        let index = GeneIndex::new(&genes, OverlapperType::AIList);

        assert_eq!(index.len(), 4);
        assert!(!index.is_empty());
        assert_eq!(index.overlapper_type(), OverlapperType::AIList);
        assert_eq!(
            index.chromosomes(),
            vec![Chromosome::Autosome(1), Chromosome::X]
        );
        assert_eq!(index.genes_on(Chromosome::Autosome(1)).len(), 3);
        assert!(index.genes_on(Chromosome::Y).is_empty());
    }

    #[rstest]
    #[case(OverlapperType::AIList)]
    #[case(OverlapperType::Linear)]
    fn test_candidates_in_table_order(genes: Vec<GeneInterval>, #[case] kind: OverlapperType) {
        let index = GeneIndex::new(&genes, kind);

        let ids: Vec<u64> = index
            .candidates(Chromosome::Autosome(1), 250, 950)
            .iter()
            .map(|g| g.gene_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let ids: Vec<u64> = index
            .candidates(Chromosome::X, 0, 100)
            .iter()
            .map(|g| g.gene_id)
            .collect();
        assert_eq!(ids, vec![4]);
    }

    #[rstest]
    fn test_candidates_unknown_chromosome(genes: Vec<GeneInterval>) {
        let index = genes.as_slice().into_gene_index(OverlapperType::AIList);
        assert!(index.candidates(Chromosome::Autosome(7), 0, u32::MAX).is_empty());
    }

    #[rstest]
    fn test_empty_index() {
        let index = GeneIndex::new(&[], OverlapperType::Linear);
        assert!(index.is_empty());
        assert!(index.chromosomes().is_empty());
        assert_eq!(index.overlapper_type(), OverlapperType::Linear);
    }
}
