//! # delmap
//!
//! Map copy-number segments (homozygous deletions or amplifications) onto genes,
//! count how often each gene and sample is hit, and test whether paralogs and
//! essential paralogs are enriched among frequently deleted genes.
//!
//! The functionality lives in separate crates, re-exported here behind features:
//!
//! - `core`: models, configuration and file helpers
//! - `overlaprs`: overlap index, overlap policies and the segment mapper
//! - `io`: CCDS reference, segment, mapping and count tables
//! - `stats`: deletion counts, bins, proportions and Fisher's exact tests

#[cfg(feature = "core")]
#[doc(inline)]
pub use delmap_core as core;

#[cfg(feature = "overlaprs")]
#[doc(inline)]
pub use delmap_overlaprs as overlaprs;

#[cfg(feature = "io")]
#[doc(inline)]
pub use delmap_io as io;

#[cfg(feature = "stats")]
#[doc(inline)]
pub use delmap_stats as stats;
