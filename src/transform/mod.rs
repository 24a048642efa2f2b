// src/transform/mod.rs

pub mod axis_map;
pub mod leg_split;
