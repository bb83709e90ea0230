//! Persistence of the segment-to-gene table.
//!
//! The table is written as CSV with a header: every segment column followed by a
//! `genes` column. A gene list is stored as its ids joined with commas (the field
//! gets quoted by the CSV writer) and an empty list as the sentinel `-`, so that an
//! empty list cannot be confused with a missing field.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use delmap_core::consts::GENES_COLUMN;
use delmap_core::models::{GeneId, MappedSegment, MappingTable};
use delmap_core::utils::{get_dynamic_reader, get_dynamic_writer};

use crate::error::MappingFormatError;
use crate::segments::CoordinateColumns;

/// Encoding of an empty gene list.
pub const EMPTY_GENES: &str = "-";
pub const GENE_SEPARATOR: &str = ",";

pub fn encode_genes(genes: &[GeneId]) -> String {
    if genes.is_empty() {
        return EMPTY_GENES.to_string();
    }
    genes
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<String>>()
        .join(GENE_SEPARATOR)
}

///
/// Decode one `genes` field. On failure the offending token is returned.
///
pub fn decode_genes(field: &str) -> std::result::Result<Vec<GeneId>, String> {
    if field == EMPTY_GENES {
        return Ok(Vec::new());
    }
    field
        .split(GENE_SEPARATOR)
        .map(|token| token.trim().parse::<GeneId>().map_err(|_| token.to_string()))
        .collect()
}

///
/// Write the mapping table as CSV to `writer`.
///
pub fn serialize<W: Write>(
    mapping: &MappingTable,
    writer: W,
) -> std::result::Result<(), MappingFormatError> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(
        mapping
            .columns
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(GENES_COLUMN)),
    )?;

    for row in &mapping.rows {
        let genes = encode_genes(&row.genes);
        writer.write_record(
            row.segment
                .fields
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(genes.as_str())),
        )?;
    }

    writer.flush()?;
    Ok(())
}

///
/// Restore a mapping table from CSV text produced by [serialize].
///
/// The `genes` column may sit anywhere in the header; all other columns become
/// the segment columns. Rows are numbered from 1 in error messages.
///
pub fn deserialize<R: Read>(reader: R) -> std::result::Result<MappingTable, MappingFormatError> {
    let mut reader = csv::Reader::from_reader(reader);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let genes_idx = header
        .iter()
        .position(|c| c == GENES_COLUMN)
        .ok_or_else(|| MappingFormatError::MissingGenesColumn(GENES_COLUMN.to_string()))?;

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != genes_idx)
        .map(|(_, c)| c.clone())
        .collect();
    let coordinates = CoordinateColumns::from_header(&columns)?;

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;

        let genes = decode_genes(record.get(genes_idx).unwrap_or_default())
            .map_err(|token| MappingFormatError::InvalidGeneToken { row, token })?;

        let fields: Vec<String> = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != genes_idx)
            .map(|(_, f)| f.to_string())
            .collect();
        let segment = coordinates.segment(fields, row)?;

        rows.push(MappedSegment { segment, genes });
    }

    Ok(MappingTable { columns, rows })
}

///
/// Write the mapping table to `path` (gzipped when it ends in `.gz`).
///
pub fn write_mapping(mapping: &MappingTable, path: &Path) -> Result<()> {
    let writer = get_dynamic_writer(path)?;
    serialize(mapping, writer).with_context(|| format!("Failed to write mapping to {:?}", path))?;

    info!("Wrote {} mapped segments to {:?}", mapping.len(), path);
    Ok(())
}

///
/// Read a mapping table written by [write_mapping].
///
pub fn read_mapping(path: &Path) -> Result<MappingTable> {
    let reader = get_dynamic_reader(path)?;
    let mapping =
        deserialize(reader).with_context(|| format!("Failed to read mapping from {:?}", path))?;
    Ok(mapping)
}
