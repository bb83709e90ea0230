//! Deletion counting and gene-level statistics.
//!
//! This crate turns a segment-to-gene table into per-gene and per-sample deletion
//! counts, stratifies annotated genes into deletion-count bins and tests, with
//! Fisher's exact test, whether paralogs and essential paralogs are over- or
//! under-represented in a bin compared to the first one.
//!
//! # Example
//!
//! ```
//! use delmap_core::models::GeneAnnotation;
//! use delmap_stats::{annotate_counts, compute_del_fets, compute_del_proportions, parse_bins};
//! use delmap_core::models::GeneDeletionCount;
//!
//! let counts = vec![
//!     GeneDeletionCount { gene_id: 1, n_del: 0 },
//!     GeneDeletionCount { gene_id: 2, n_del: 2 },
//! ];
//! let annotations = vec![
//!     GeneAnnotation { gene_id: 1, paralog: false, essential: None },
//!     GeneAnnotation { gene_id: 2, paralog: true, essential: Some(false) },
//! ];
//!
//! let genes = annotate_counts(&counts, &annotations);
//! let bins = parse_bins(&["0", "1+"]).unwrap();
//! let proportions = compute_del_proportions(&genes, &bins);
//! assert_eq!(proportions[1].pct_paralog, Some(100.0));
//!
//! let tests = compute_del_fets(&proportions).unwrap();
//! assert_eq!(tests.len(), 1);
//! ```

pub mod aggregate;
pub mod bins;
pub mod errors;
pub mod fisher;
pub mod models;
pub mod proportions;

// re-exports
pub use aggregate::{count_dels_per_gene, count_dels_per_sample};
pub use bins::{GeneBin, parse_bins};
pub use errors::StatsError;
pub use fisher::compute_del_fets;
pub use models::{AnnotatedGene, BackgroundRates, BinProportions, BinTest};
pub use proportions::{annotate_counts, background_rates, compute_del_proportions};
