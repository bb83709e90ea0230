//! Loading of the CCDS transcript table into one coding interval per gene.
//!
//! The input is the tab-separated `CCDS.current.txt` release file. Only records
//! with status `Public` are used; among them every gene keeps the transcript with
//! the longest coding span.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use delmap_core::models::{Chromosome, GeneId, GeneInterval};
use delmap_core::utils::get_dynamic_reader;

use crate::error::ReferenceError;

pub const PUBLIC_STATUS: &str = "Public";
pub const IDENTICAL_MATCH: &str = "Identical";

///
/// One row of the CCDS release table. Columns not listed here (strand, exon
/// locations, ...) are ignored.
///
/// Coordinates are kept as text: withdrawn records carry `-` instead of numbers.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CcdsRecord {
    #[serde(rename = "#chromosome")]
    pub chromosome: String,
    pub gene_id: GeneId,
    pub ccds_id: String,
    pub ccds_status: String,
    pub cds_from: String,
    pub cds_to: String,
    pub match_type: String,
}

fn parse_coordinate(
    record: usize,
    row: &CcdsRecord,
    column: &'static str,
    value: &str,
) -> Result<u32, ReferenceError> {
    value
        .trim()
        .parse()
        .map_err(|_| ReferenceError::InvalidCoordinate {
            record,
            ccds_id: row.ccds_id.clone(),
            column,
            value: value.to_string(),
        })
}

///
/// Build the gene-interval table from raw CCDS records.
///
/// Records are filtered to public ones, checked, deduplicated and reduced to the
/// longest transcript per gene. The result is sorted by chromosome and start.
///
/// # Arguments
///
/// - records: the CCDS rows in file order
///
/// # Errors
///
/// Fails on the first public record with a `match_type` other than `Identical`,
/// or with `cds_from > cds_to`. Both indicate an unexpected reference build.
///
pub fn load_reference<R>(records: R) -> Result<Vec<GeneInterval>, ReferenceError>
where
    R: IntoIterator<Item = CcdsRecord>,
{
    let mut n_public = 0;
    let mut n_unsupported = 0;
    let mut seen: HashSet<(Chromosome, GeneId, u32, u32, String)> = HashSet::new();
    let mut genes: Vec<GeneInterval> = Vec::new();

    for (idx, row) in records.into_iter().enumerate() {
        let record = idx + 1;
        if row.ccds_status != PUBLIC_STATUS {
            continue;
        }
        n_public += 1;

        if row.match_type != IDENTICAL_MATCH {
            return Err(ReferenceError::UnexpectedMatchType {
                record,
                ccds_id: row.ccds_id,
                match_type: row.match_type,
            });
        }

        let start = parse_coordinate(record, &row, "cds_from", &row.cds_from)?;
        let end = parse_coordinate(record, &row, "cds_to", &row.cds_to)?;
        if start > end {
            return Err(ReferenceError::InvertedCoordinates {
                record,
                ccds_id: row.ccds_id,
                start,
                end,
            });
        }

        let chromosome: Chromosome = match row.chromosome.parse() {
            Ok(chromosome) => chromosome,
            Err(_) => {
                n_unsupported += 1;
                continue;
            }
        };

        let key = (chromosome, row.gene_id, start, end, row.ccds_id.clone());
        if !seen.insert(key) {
            continue;
        }

        genes.push(GeneInterval {
            chromosome,
            gene_id: row.gene_id,
            start,
            end,
            ccds_id: row.ccds_id,
        });
    }

    if n_unsupported > 0 {
        warn!(
            "Dropped {} public CCDS records on chromosomes outside 1-22/X/Y",
            n_unsupported
        );
    }
    debug!(
        "{} public CCDS records, {} distinct transcripts",
        n_public,
        genes.len()
    );

    // longest transcript per gene; on equal spans the later one wins
    genes.sort_by_key(|g| (g.gene_id, g.span()));
    let mut longest: Vec<GeneInterval> = Vec::with_capacity(genes.len());
    for gene in genes {
        match longest.last_mut() {
            Some(last) if last.gene_id == gene.gene_id => *last = gene,
            _ => longest.push(gene),
        }
    }

    longest.sort_by_key(|g| (g.chromosome, g.start));

    info!("Loaded {} genes from the CCDS reference", longest.len());

    Ok(longest)
}

///
/// Parse CCDS records from any reader producing the tab-separated release format.
///
pub fn parse_reference<T: Read>(reader: T) -> Result<Vec<GeneInterval>, ReferenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);

    let records = reader
        .deserialize()
        .collect::<Result<Vec<CcdsRecord>, csv::Error>>()?;

    load_reference(records)
}

///
/// Read the gene-interval table from a CCDS file (plain or gzipped).
///
/// # Arguments
///
/// - path: path to `CCDS.current.txt` or a compatible file
///
pub fn read_reference(path: &Path) -> Result<Vec<GeneInterval>> {
    let reader = get_dynamic_reader(path)?;
    let genes = parse_reference(reader)
        .with_context(|| format!("Failed to load CCDS reference from {:?}", path))?;
    Ok(genes)
}
