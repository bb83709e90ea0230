//! Core models shared by every delmap crate.
//!
//! The crate defines the chromosome identifier, the gene-interval reference table entries,
//! copy-number segments and the segment-to-gene mapping table, along with the run
//! configuration and small file helpers. It deliberately holds no algorithms: overlap
//! logic lives in `delmap-overlaprs`, file formats in `delmap-io` and counting and
//! statistics in `delmap-stats`.

pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

/// Column names of the segment tables consumed and produced by delmap.
pub mod consts {
    pub const CHR_COLUMN: &str = "chr";
    pub const START_COLUMN: &str = "startpos";
    pub const END_COLUMN: &str = "endpos";
    pub const GENES_COLUMN: &str = "genes";
}
