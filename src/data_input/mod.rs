// src/data_input/mod.rs

pub mod header_scan;
pub mod raw_frame;
