use thiserror::Error;

/// Errors raised while loading the CCDS reference table.
#[derive(Error, Debug)]
pub enum ReferenceError {
    /// A public record was matched to the assembly with something other than `Identical`.
    #[error(
        "Unexpected match_type '{match_type}' for {ccds_id} (record {record}); the reference build is not the expected one"
    )]
    UnexpectedMatchType {
        record: usize,
        ccds_id: String,
        match_type: String,
    },

    /// A public record whose coding start lies after its coding end.
    #[error("cds_from > cds_to for {ccds_id} (record {record}): {start} > {end}")]
    InvertedCoordinates {
        record: usize,
        ccds_id: String,
        start: u32,
        end: u32,
    },

    #[error("Invalid {column} value '{value}' for {ccds_id} (record {record})")]
    InvalidCoordinate {
        record: usize,
        ccds_id: String,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Errors raised while reading a segment table.
#[derive(Error, Debug)]
pub enum SegmentTableError {
    #[error("Segment table is missing the required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid {column} value '{value}' on row {row}")]
    InvalidCoordinate {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Segment on row {row} ends before it starts: {start} > {end}")]
    InvertedSegment { row: usize, start: u32, end: u32 },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Errors raised while restoring a persisted segment-to-gene table.
#[derive(Error, Debug)]
pub enum MappingFormatError {
    #[error("Invalid gene token '{token}' on row {row}; expected an integer id or '-'")]
    InvalidGeneToken { row: usize, token: String },

    #[error("Mapping table is missing the '{0}' column")]
    MissingGenesColumn(String),

    #[error(transparent)]
    Segment(#[from] SegmentTableError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading count and annotation tables.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Table is missing the required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid {column} value '{value}' on row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
