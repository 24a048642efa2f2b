// src/error.rs

//! Error types for the conversion library.
//!
//! One `thiserror` enum covers every way a single file's conversion can fail.
//! All variants are fatal for the file they occur in; the batch driver in
//! `main.rs` reports them and moves on to the next input.

use thiserror::Error;

/// Convenience alias for results using the conversion error type.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The `Force_X` column-marker line was never found, so the header/data
    /// boundary is unknown and no rows can be emitted.
    #[error("no 'Force_X' column marker line found in input")]
    MissingMarker,

    /// The FREQUENCY line is absent, has no value, or its value is not a
    /// positive integer. Time stamps cannot be derived without it.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// A data row has too few fields or a field that is not a number.
    /// `row` is the 1-based data-row number (first row after the marker = 1).
    #[error("malformed data row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
