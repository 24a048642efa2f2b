// src/converter.rs

//! Per-file orchestration: scan the TSV header, then stream every data row
//! through the axis remap and leg split into the `.mot` writer.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data_input::header_scan::scan_header;
use crate::data_input::raw_frame::RawFrame;
use crate::error::Result;
use crate::mot_format;
use crate::transform::leg_split::TransformedFrame;

/// Loop-carried row state: the 0-based frame index and the running time
/// stamp, advanced together after each emitted row. The input carries no
/// time column; time accumulates from 0.0 in `quantum` steps.
struct FrameCursor {
    frame: usize,
    time: f64,
    quantum: f64,
}

impl FrameCursor {
    fn new(quantum: f64) -> Self {
        FrameCursor {
            frame: 0,
            time: 0.0,
            quantum,
        }
    }

    fn advance(&mut self) {
        self.frame += 1;
        self.time += self.quantum;
    }
}

/// Converts one TSV file, writing `<input>.mot` next to it. Returns the
/// output path on success. Any failure aborts this file's conversion; the
/// output handle is dropped on every exit path.
pub fn convert_file(input_path: &Path) -> Result<PathBuf> {
    let reader = BufReader::new(File::open(input_path)?);
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;

    let scan = scan_header(&lines)?;
    let metadata = scan.metadata;

    println!("  sampling frequency: {} Hz", metadata.sampling_frequency);
    println!("  data rows: {}", metadata.row_count);

    // The midpoint split assumes the capture protocol: right-leg strike in
    // the first half, left-leg strike in the second. Surface the computed
    // boundary so an operator can sanity-check it against the session notes.
    let half = metadata.dataset_half();
    println!(
        "  leg split: frames 0..{} -> right plate, {}..{} -> left plate",
        half, half, metadata.row_count
    );
    if metadata.row_count % 2 != 0 {
        eprintln!(
            "  Warning: odd row count ({}), uneven split between plates",
            metadata.row_count
        );
    }
    for field in &scan.extra_fields {
        println!("  extra header field (not written to .mot): {}", field);
    }

    let output_path = input_path.with_extension("mot");
    let output_name = output_path.display().to_string();
    let mut writer = BufWriter::new(File::create(&output_path)?);

    writer.write_all(mot_format::preamble(&output_name, &metadata).as_bytes())?;
    writeln!(writer, "{}", mot_format::column_header_line())?;

    let mut cursor = FrameCursor::new(metadata.time_increment());
    for line in &lines[scan.data_start..] {
        let raw = RawFrame::parse(line, cursor.frame + 1)?;
        let frame = TransformedFrame::from_raw(&raw, cursor.frame, half);
        writeln!(writer, "{}", mot_format::data_line(cursor.time, &frame))?;
        cursor.advance();
    }

    writer.flush()?;
    println!("  wrote {} rows -> {}", cursor.frame, output_name);
    Ok(output_path)
}
