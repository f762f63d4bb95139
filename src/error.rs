//! Error types for CSV parsing

use thiserror::Error;

/// Errors produced while configuring the parser or building a table
#[derive(Error, Debug)]
pub enum CsvError {
    /// Qualifier must be exactly one character
    #[error("Qualifiers must be a single character, e.g. \" (got {qualifier:?})")]
    InvalidQualifier { qualifier: String },

    /// Strict mode found a row whose width differs from the header row
    #[error(
        "Malformed data - all rows must have the same number of cells: row {row} has {found}, expected {expected}"
    )]
    MalformedData {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Failed to read the source document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for csvgrid operations
pub type Result<T> = std::result::Result<T, CsvError>;
