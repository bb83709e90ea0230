//! # Input/Output for delmap tables.
//!
//! Readers and writers for everything delmap consumes and produces: the CCDS
//! reference, segment tables, the persisted segment-to-gene mapping, per-gene and
//! per-sample counts, gene annotations and the analysis result tables.
//!
//! Parsing functions work on any [`std::io::Read`] and return typed errors; the
//! `read_*`/`write_*` functions take paths, transparently handle `.gz` files and
//! return [`anyhow::Result`] with the path in the error context.
//!
pub mod error;
pub mod mapping;
pub mod reference;
pub mod segments;
pub mod tables;

// re-expose core functions
pub use error::*;
pub use mapping::{deserialize, read_mapping, serialize, write_mapping};
pub use reference::{CcdsRecord, load_reference, parse_reference, read_reference};
pub use segments::{parse_segments, read_segments};
pub use tables::*;
