//! Gene overlap index and segment-to-gene mapping.
//!
//! This crate holds every piece of overlap logic in delmap: the interval
//! structures behind the [`Overlapper`] trait, the per-chromosome [`GeneIndex`],
//! the two overlap policies of the [`classify`] module and the [`mapper`] that
//! drives them over a whole segment table.
//!
//! All intervals are closed: `[start, end]` includes both coordinates.
//!
//! ## Quick Start
//!
//! ```rust
//! use delmap_core::models::{Chromosome, GeneInterval, OverlapPolicy, Segment, SegmentTable};
//! use delmap_overlaprs::map_segments;
//!
//! let genes = vec![GeneInterval {
//!     chromosome: Chromosome::Autosome(1),
//!     gene_id: 100,
//!     start: 1000,
//!     end: 2000,
//!     ccds_id: "CCDS1.1".to_string(),
//! }];
//!
//! let segments = SegmentTable {
//!     columns: vec!["chr".into(), "startpos".into(), "endpos".into()],
//!     segments: vec![Segment {
//!         chr: "1".into(),
//!         start: 1500,
//!         end: 2500,
//!         fields: vec!["1".into(), "1500".into(), "2500".into()],
//!     }],
//! };
//!
//! let partial = map_segments(&segments, &genes, OverlapPolicy::Partial, 0.0).unwrap();
//! assert_eq!(partial.rows[0].genes, vec![100]);
//!
//! // half of the gene is covered, which is not enough for a 60% threshold
//! let strict = map_segments(&segments, &genes, OverlapPolicy::Partial, 0.6).unwrap();
//! assert!(strict.rows[0].genes.is_empty());
//! ```

/// Augmented Interval List implementation.
///
/// See [`AIList`] for details.
pub mod ailist;

/// Overlap policies deciding which genes a segment hits.
pub mod classify;

/// Per-chromosome gene lookup.
pub mod gene_index;

/// Plain scan over intervals.
pub mod linear;

/// Segment table to gene list mapping.
pub mod mapper;

/// Core traits for overlap operations.
///
/// See [`Overlapper`] for the main trait.
pub mod traits;

// re-exports
pub use self::ailist::AIList;
pub use self::classify::{map_segment_full, map_segment_partial};
pub use self::gene_index::GeneIndex;
pub use self::linear::LinearScan;
pub use self::mapper::{MapperOptions, MappingError, map_segments, map_segments_with_options};
pub use self::traits::{Interval, Overlapper};
pub use delmap_core::models::OverlapperType;
