// src/data_input/raw_frame.rs

use crate::constants::RAW_FIELD_COUNT;
use crate::error::{ConvertError, Result};

/// One measured frame as it appears in the TSV data section, grouped into the
/// three vector quantities a force plate reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawFrame {
    pub force: [f64; 3],  // Ground reaction force [X, Y, Z], newtons.
    pub moment: [f64; 3], // Plate moment [X, Y, Z], newton-millimeters.
    pub cop: [f64; 3],    // Center of pressure [X, Y, Z], millimeters.
}

impl RawFrame {
    /// Parses one data line into a frame. Fields are whitespace-separated
    /// (QTM mixes tabs and space runs); only the first 9 tokens are read and
    /// any surplus columns are ignored. `row` is the 1-based data-row number
    /// used in error reports.
    pub fn parse(line: &str, row: usize) -> Result<Self> {
        let mut fields = [0.0f64; RAW_FIELD_COUNT];
        let mut tokens = line.split_whitespace();

        for (i, slot) in fields.iter_mut().enumerate() {
            let token = tokens.next().ok_or_else(|| ConvertError::MalformedRow {
                row,
                reason: format!("expected {} fields, found {}", RAW_FIELD_COUNT, i),
            })?;
            *slot = token.parse::<f64>().map_err(|_| ConvertError::MalformedRow {
                row,
                reason: format!("field {} is not a number: '{}'", i + 1, token),
            })?;
        }

        Ok(RawFrame {
            force: [fields[0], fields[1], fields[2]],
            moment: [fields[3], fields[4], fields[5]],
            cop: [fields[6], fields[7], fields[8]],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated_row() {
        let frame = RawFrame::parse("1.0\t2.0\t3.0\t4.0\t5.0\t6.0\t7.0\t8.0\t9.0", 1).unwrap();
        assert_eq!(frame.force, [1.0, 2.0, 3.0]);
        assert_eq!(frame.moment, [4.0, 5.0, 6.0]);
        assert_eq!(frame.cop, [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_parse_mixed_whitespace() {
        let frame = RawFrame::parse("  1.5   -2.5\t3.0 0 0 0 10.0 20.0 30.0", 1).unwrap();
        assert_eq!(frame.force, [1.5, -2.5, 3.0]);
        assert_eq!(frame.cop, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_surplus_columns_ignored() {
        let frame = RawFrame::parse("1 2 3 4 5 6 7 8 9 999 888", 1).unwrap();
        assert_eq!(frame.cop, [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_too_few_fields() {
        let err = RawFrame::parse("1 2 3", 7).unwrap_err();
        match err {
            ConvertError::MalformedRow { row, reason } => {
                assert_eq!(row, 7);
                assert!(reason.contains("expected 9 fields, found 3"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_field() {
        let err = RawFrame::parse("1 2 3 4 abc 6 7 8 9", 2).unwrap_err();
        match err {
            ConvertError::MalformedRow { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("'abc'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_tokens_pass_through() {
        // QTM gaps show up as NaN/inf; they parse and flow through unchanged.
        let frame = RawFrame::parse("NaN inf -inf 0 0 0 1 2 3", 1).unwrap();
        assert!(frame.force[0].is_nan());
        assert!(frame.force[1].is_infinite());
    }
}
