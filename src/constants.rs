// src/constants.rs

// Marker prefixes located in the QTM TSV header. Both are matched against the
// start of the untrimmed line, exactly as Qualisys Track Manager exports them.
pub const FREQUENCY_MARKER: &str = "FREQUENCY";
pub const COLUMN_MARKER: &str = "Force_X";

// --- Rig Calibration Constants ---
// Plate origin relative to the model origin, in meters, for one specific
// capture rig / marker set. Not derivable from the data; reproduce exactly.
pub const SHIFT_X_M: f64 = -0.5;
pub const SHIFT_Z_M: f64 = 0.25;

// QTM exports COP in millimeters; the .mot file wants meters.
pub const MM_TO_M: f64 = 0.001;

// Fields consumed from each data row: force XYZ, moment XYZ, COP XYZ.
pub const RAW_FIELD_COUNT: usize = 9;

// Value columns in the .mot data section (time column excluded).
pub const MOT_VALUE_COLUMNS: usize = 18;

// --- Output Layout ---
// Every cell (time included) is right-justified to this width with this many
// fixed decimals, so decimal points line up in plain-text viewers.
pub const CELL_WIDTH: usize = 20;
pub const CELL_DECIMALS: usize = 8;
