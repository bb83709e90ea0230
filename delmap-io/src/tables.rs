use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use delmap_core::models::{GeneAnnotation, GeneDeletionCount, GeneId, SampleDeletionCount};
use delmap_core::utils::{get_dynamic_reader, get_dynamic_writer};

use crate::error::TableError;

pub const GENE_ID_COLUMN: &str = "gene_id";
pub const ENTREZ_ID_COLUMN: &str = "entrez_id";
pub const PARALOG_COLUMN: &str = "paralog";

///
/// Parse a boolean flag as written by common dataframe tools. Empty cells and
/// `NA`/`nan` are missing values.
///
pub fn parse_flag(value: &str) -> Option<Option<bool>> {
    match value.trim() {
        "True" | "true" | "TRUE" | "1" => Some(Some(true)),
        "False" | "false" | "FALSE" | "0" => Some(Some(false)),
        "" | "NA" | "na" | "NaN" | "nan" => Some(None),
        _ => None,
    }
}

///
/// Serialize `rows` as a tab-separated table with a header derived from the
/// field names of `T`.
///
pub fn write_tsv<T: Serialize, W: Write>(rows: &[T], writer: W) -> Result<(), TableError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

///
/// Write `rows` to `path` as TSV, see [write_tsv].
///
pub fn write_tsv_file<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    let writer = get_dynamic_writer(path)?;
    write_tsv(rows, writer).with_context(|| format!("Failed to write table to {:?}", path))?;
    info!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}

pub fn write_gene_counts(counts: &[GeneDeletionCount], path: &Path) -> Result<()> {
    write_tsv_file(counts, path)
}

pub fn parse_gene_counts<R: Read>(reader: R) -> Result<Vec<GeneDeletionCount>, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);
    let counts = reader
        .deserialize()
        .collect::<Result<Vec<GeneDeletionCount>, csv::Error>>()?;
    Ok(counts)
}

pub fn read_gene_counts(path: &Path) -> Result<Vec<GeneDeletionCount>> {
    let reader = get_dynamic_reader(path)?;
    let counts = parse_gene_counts(reader)
        .with_context(|| format!("Failed to read gene counts from {:?}", path))?;
    Ok(counts)
}

///
/// Write per-sample counts. The first column is named after the grouping key
/// the counts were computed with.
///
pub fn write_sample_counts(
    counts: &[SampleDeletionCount],
    group_key: &str,
    writer: impl Write,
) -> Result<(), TableError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);

    writer.write_record([group_key, "n_genes"])?;
    for count in counts {
        let n_genes = count.n_genes.to_string();
        writer.write_record([count.sample.as_str(), n_genes.as_str()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_sample_counts_file(
    counts: &[SampleDeletionCount],
    group_key: &str,
    path: &Path,
) -> Result<()> {
    let writer = get_dynamic_writer(path)?;
    write_sample_counts(counts, group_key, writer)
        .with_context(|| format!("Failed to write sample counts to {:?}", path))?;
    info!("Wrote {} sample counts to {:?}", counts.len(), path);
    Ok(())
}

///
/// Parse a gene annotation table.
///
/// The table needs a gene id column (`gene_id` or `entrez_id`) and a `paralog`
/// column. The essentiality calls are read from `essential_column`; when that column
/// is absent every gene gets a missing call.
///
/// # Arguments
///
/// - reader: source of the tab-separated table
/// - essential_column: name of the column holding the essentiality flag
///
pub fn parse_annotations<R: Read>(
    reader: R,
    essential_column: &str,
) -> Result<Vec<GeneAnnotation>, TableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(reader);

    let header = reader.headers()?.clone();
    let position = |name: &str| header.iter().position(|c| c == name);

    let (id_column, id_idx) = [GENE_ID_COLUMN, ENTREZ_ID_COLUMN]
        .into_iter()
        .find_map(|name| position(name).map(|idx| (name, idx)))
        .ok_or_else(|| TableError::MissingColumn(GENE_ID_COLUMN.to_string()))?;
    let paralog_idx = position(PARALOG_COLUMN)
        .ok_or_else(|| TableError::MissingColumn(PARALOG_COLUMN.to_string()))?;
    let essential_idx = position(essential_column);
    if essential_idx.is_none() {
        warn!(
            "Annotation table has no '{}' column, essentiality is treated as unknown",
            essential_column
        );
    }

    let mut annotations = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = idx + 1;
        let invalid = |column: &str, value: &str| TableError::InvalidValue {
            row,
            column: column.to_string(),
            value: value.to_string(),
        };

        let id_value = record.get(id_idx).unwrap_or_default();
        let gene_id: GeneId = id_value
            .trim()
            .parse()
            .map_err(|_| invalid(id_column, id_value))?;

        let paralog_value = record.get(paralog_idx).unwrap_or_default();
        let paralog = parse_flag(paralog_value)
            .flatten()
            .ok_or_else(|| invalid(PARALOG_COLUMN, paralog_value))?;

        let essential = match essential_idx {
            Some(i) => {
                let value = record.get(i).unwrap_or_default();
                parse_flag(value).ok_or_else(|| invalid(essential_column, value))?
            }
            None => None,
        };

        annotations.push(GeneAnnotation {
            gene_id,
            paralog,
            essential,
        });
    }

    Ok(annotations)
}

pub fn read_annotations(path: &Path, essential_column: &str) -> Result<Vec<GeneAnnotation>> {
    let reader = get_dynamic_reader(path)?;
    let annotations = parse_annotations(reader, essential_column)
        .with_context(|| format!("Failed to read gene annotations from {:?}", path))?;

    info!("Read annotations for {} genes from {:?}", annotations.len(), path);
    Ok(annotations)
}
