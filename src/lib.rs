// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod converter;
pub mod data_input;
pub mod error;
pub mod mot_format;
pub mod transform;
