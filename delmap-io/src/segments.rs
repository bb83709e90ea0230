use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use delmap_core::consts::{CHR_COLUMN, END_COLUMN, START_COLUMN};
use delmap_core::models::{Segment, SegmentTable};
use delmap_core::utils::{delimiter_for_path, get_dynamic_reader};

use crate::error::SegmentTableError;

///
/// Positions of the coordinate columns inside a header.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CoordinateColumns {
    chr: usize,
    start: usize,
    end: usize,
}

impl CoordinateColumns {
    pub(crate) fn from_header(columns: &[String]) -> Result<Self, SegmentTableError> {
        let find = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| SegmentTableError::MissingColumn(name.to_string()))
        };

        Ok(CoordinateColumns {
            chr: find(CHR_COLUMN)?,
            start: find(START_COLUMN)?,
            end: find(END_COLUMN)?,
        })
    }

    fn coordinate(
        &self,
        fields: &[String],
        idx: usize,
        column: &str,
        row: usize,
    ) -> Result<u32, SegmentTableError> {
        let value = fields.get(idx).map(String::as_str).unwrap_or_default();
        value
            .trim()
            .parse()
            .map_err(|_| SegmentTableError::InvalidCoordinate {
                row,
                column: column.to_string(),
                value: value.to_string(),
            })
    }

    ///
    /// Build a [Segment] from one row of fields. `row` is only used for error
    /// messages.
    ///
    pub(crate) fn segment(
        &self,
        fields: Vec<String>,
        row: usize,
    ) -> Result<Segment, SegmentTableError> {
        let start = self.coordinate(&fields, self.start, START_COLUMN, row)?;
        let end = self.coordinate(&fields, self.end, END_COLUMN, row)?;
        if start > end {
            return Err(SegmentTableError::InvertedSegment { row, start, end });
        }

        Ok(Segment {
            chr: fields.get(self.chr).cloned().unwrap_or_default(),
            start,
            end,
            fields,
        })
    }
}

///
/// Parse a delimited segment table with a header row. The columns `chr`,
/// `startpos` and `endpos` are required; every other column is carried along
/// verbatim.
///
/// # Arguments
///
/// - reader: source of the table text
/// - delimiter: field separator, usually `b'\t'` or `b','`
///
pub fn parse_segments<T: Read>(
    reader: T,
    delimiter: u8,
) -> Result<SegmentTable, SegmentTableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let coordinates = CoordinateColumns::from_header(&columns)?;

    let mut segments = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let fields: Vec<String> = record.iter().map(str::to_string).collect();
        segments.push(coordinates.segment(fields, idx + 1)?);
    }

    Ok(SegmentTable { columns, segments })
}

///
/// Read a segment table from disk. The delimiter follows the file name:
/// comma for `.csv`, tab otherwise. Gzipped files are supported.
///
pub fn read_segments(path: &Path) -> Result<SegmentTable> {
    let reader = get_dynamic_reader(path)?;
    let table = parse_segments(reader, delimiter_for_path(path))
        .with_context(|| format!("Failed to read segments from {:?}", path))?;

    info!("Read {} segments from {:?}", table.len(), path);

    Ok(table)
}
