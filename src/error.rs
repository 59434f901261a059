// src/error.rs

use thiserror::Error;

/// Failures raised while parsing an error-definition table.
///
/// All variants are fatal to the current parse; the reader yields the error
/// and the remaining rows are abandoned.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A data row did not split into exactly three columns. `line` is
    /// 1-based and counts the header, so data rows start at 2.
    #[error("column count mismatch, unquoted comma in description? (line {line})")]
    ColumnCount { line: u64 },

    /// A token in the codes column is not an integer.
    #[error("not all codes are integers (line {line})")]
    BadCodes { line: u64 },

    /// The raw name marks the error as parameterized (it contains '0') but
    /// the description has no `{word}` placeholder to capture from.
    #[error("no placeholder found in description of `{name}`")]
    NoPlaceholder { name: String },

    /// Underlying CSV reader failure (I/O, invalid UTF-8, broken quoting).
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
