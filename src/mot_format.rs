// src/mot_format.rs

//! Rendering of the .mot file: preamble, column-header line, and fixed-width
//! data rows.
//!
//! The layout is pinned to what OpenSim's Gait examples ship: every cell is
//! right-justified to 20 characters with 8 fixed decimals so the decimal
//! points line up in a text viewer, never scientific notation, sign kept.

use crate::constants::{CELL_DECIMALS, CELL_WIDTH};
use crate::data_input::header_scan::FileMetadata;
use crate::transform::leg_split::TransformedFrame;

/// The 18 value-column names, in .mot order: right force, right COP, left
/// force, left COP, right torque, left torque. OpenSim matches these names
/// against the model, so they are exact literals.
pub const MOT_COLUMN_NAMES: [&str; 18] = [
    "R_ground_force_vx",
    "R_ground_force_vy",
    "R_ground_force_vz",
    "R_ground_force_px",
    "R_ground_force_py",
    "R_ground_force_pz",
    "L_ground_force_vx",
    "L_ground_force_vy",
    "L_ground_force_vz",
    "L_ground_force_px",
    "L_ground_force_py",
    "L_ground_force_pz",
    "R_ground_torque_x",
    "R_ground_torque_y",
    "R_ground_torque_z",
    "L_ground_torque_x",
    "L_ground_torque_y",
    "L_ground_torque_z",
];

/// One value cell: fixed-point, 8 decimals, right-justified to width 20.
pub fn format_cell(value: f64) -> String {
    format!(
        "{:>width$.prec$}",
        value,
        width = CELL_WIDTH,
        prec = CELL_DECIMALS
    )
}

/// The fixed preamble, one line per element, `endheader` last.
pub fn preamble(output_name: &str, metadata: &FileMetadata) -> String {
    format!(
        "{}\nversion=1\nnRows={}\nnColumns={}\ninDegrees=yes\nendheader\n",
        output_name, metadata.row_count, metadata.column_count
    )
}

/// The column-header line: `time` plus the 18 names, every cell
/// right-justified to the common width and tab-joined.
pub fn column_header_line() -> String {
    let mut cells = Vec::with_capacity(1 + MOT_COLUMN_NAMES.len());
    cells.push(format!("{:>width$}", "time", width = CELL_WIDTH));
    for name in MOT_COLUMN_NAMES {
        cells.push(format!("{:>width$}", name, width = CELL_WIDTH));
    }
    cells.join("\t")
}

/// One data line: the time stamp followed by the frame's 18 values.
pub fn data_line(time: f64, frame: &TransformedFrame) -> String {
    let mut cells = Vec::with_capacity(1 + frame.values().len());
    cells.push(format_cell(time));
    for value in frame.values() {
        cells.push(format_cell(value));
    }
    cells.join("\t")
}
