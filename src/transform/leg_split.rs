// src/transform/leg_split.rs

use crate::constants::MOT_VALUE_COLUMNS;
use crate::data_input::raw_frame::RawFrame;
use crate::transform::axis_map::{map_cop, map_force};

const ZERO_TRIPLE: [f64; 3] = [0.0; 3];

/// Which plate a frame is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    Right,
    Left,
}

impl Leg {
    /// The capture protocol puts the right-leg strike in the first half of
    /// the recording and the left-leg strike in the second.
    pub fn for_frame(frame_index: usize, dataset_half: usize) -> Leg {
        if frame_index < dataset_half {
            Leg::Right
        } else {
            Leg::Left
        }
    }
}

/// One output row's 18 values, grouped the way the .mot columns are laid out.
/// Exactly one leg's force+COP blocks are populated per frame; the other
/// leg's blocks and both torque blocks are zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedFrame {
    pub r_force: [f64; 3],
    pub r_cop: [f64; 3],
    pub l_force: [f64; 3],
    pub l_cop: [f64; 3],
    pub r_torque: [f64; 3],
    pub l_torque: [f64; 3],
}

impl TransformedFrame {
    /// Remaps a raw frame into the model coordinate system and assigns it to
    /// the leg active at `frame_index`.
    pub fn from_raw(raw: &RawFrame, frame_index: usize, dataset_half: usize) -> Self {
        let force = map_force(raw.force);
        let cop = map_cop(raw.cop);

        // Plate torque is still pending (FP Type 6 Tz computation); both
        // torque blocks stay zero until it lands. The intended axis mapping
        // is pinned down in axis_map::map_moment.
        let (r_force, r_cop, l_force, l_cop) =
            match Leg::for_frame(frame_index, dataset_half) {
                Leg::Right => (force, cop, ZERO_TRIPLE, ZERO_TRIPLE),
                Leg::Left => (ZERO_TRIPLE, ZERO_TRIPLE, force, cop),
            };

        TransformedFrame {
            r_force,
            r_cop,
            l_force,
            l_cop,
            r_torque: ZERO_TRIPLE,
            l_torque: ZERO_TRIPLE,
        }
    }

    /// The 18 values in .mot column order.
    pub fn values(&self) -> [f64; MOT_VALUE_COLUMNS] {
        let mut out = [0.0; MOT_VALUE_COLUMNS];
        let blocks = [
            self.r_force,
            self.r_cop,
            self.l_force,
            self.l_cop,
            self.r_torque,
            self.l_torque,
        ];
        for (i, block) in blocks.iter().enumerate() {
            out[i * 3..i * 3 + 3].copy_from_slice(block);
        }
        out
    }
}
