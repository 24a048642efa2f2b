// src/data_input/header_scan.rs

use crate::constants::{COLUMN_MARKER, FREQUENCY_MARKER};
use crate::error::{ConvertError, Result};

/// Per-file facts derived once from the TSV header, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileMetadata {
    /// Data rows following the column-marker line.
    pub row_count: usize,
    /// Columns in the .mot data section: marker-line tokens + time column +
    /// the added left-leg force/COP block.
    pub column_count: usize,
    /// Capture sampling frequency in Hz, from the FREQUENCY header line.
    pub sampling_frequency: u32,
}

impl FileMetadata {
    /// Seconds between consecutive frames.
    pub fn time_increment(&self) -> f64 {
        1.0 / self.sampling_frequency as f64
    }

    /// Frame index at which the recording switches from the right plate to
    /// the left plate. Floor division: for an odd row count the right leg
    /// gets the smaller half.
    pub fn dataset_half(&self) -> usize {
        self.row_count / 2
    }
}

/// Result of the header pass over one file's line sequence.
#[derive(Debug)]
pub struct HeaderScan {
    pub metadata: FileMetadata,
    /// Index into the line sequence of the first data row.
    pub data_start: usize,
    /// Header lines that are neither the FREQUENCY line nor the column
    /// marker. Reported to the operator, never copied into the output.
    pub extra_fields: Vec<String>,
}

/// Scans the file's lines for the FREQUENCY and `Force_X` marker lines.
///
/// Everything up to and including the marker line is header; everything after
/// it is data. If several FREQUENCY lines precede the marker, the last one
/// wins. Fails with `MissingMarker` when no marker line exists and with
/// `MalformedHeader` when the frequency is absent or not a positive integer.
pub fn scan_header(lines: &[String]) -> Result<HeaderScan> {
    let mut frequency: Option<u32> = None;
    let mut extra_fields: Vec<String> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if line.starts_with(FREQUENCY_MARKER) {
            frequency = Some(parse_frequency(line)?);
            continue;
        }

        if line.starts_with(COLUMN_MARKER) {
            let sampling_frequency = frequency.ok_or_else(|| {
                ConvertError::MalformedHeader(format!(
                    "no {} line found before the {} marker",
                    FREQUENCY_MARKER, COLUMN_MARKER
                ))
            })?;

            // Marker tokens + 1 time column + 9 left-leg columns.
            let column_count = line.split_whitespace().count() + 1 + 9;
            let row_count = lines.len() - (index + 1);

            return Ok(HeaderScan {
                metadata: FileMetadata {
                    row_count,
                    column_count,
                    sampling_frequency,
                },
                data_start: index + 1,
                extra_fields,
            });
        }

        extra_fields.push(line.clone());
    }

    Err(ConvertError::MissingMarker)
}

fn parse_frequency(line: &str) -> Result<u32> {
    let value = line.split_whitespace().nth(1).ok_or_else(|| {
        ConvertError::MalformedHeader(format!("{} line has no value", FREQUENCY_MARKER))
    })?;
    let frequency: u32 = value.parse().map_err(|_| {
        ConvertError::MalformedHeader(format!(
            "{} value is not an integer: '{}'",
            FREQUENCY_MARKER, value
        ))
    })?;
    if frequency == 0 {
        return Err(ConvertError::MalformedHeader(format!(
            "{} must be positive",
            FREQUENCY_MARKER
        )));
    }
    Ok(frequency)
}
