// src/transform/axis_map.rs

//! Fixed capture-frame to model-frame axis remap.
//!
//! QTM and OpenSim disagree on axis conventions; the rotation that fixes it
//! is `X_opensim = -X_QTM`, `Y_opensim = Z_QTM`, `Z_opensim = Y_QTM`, applied
//! here as a Y/Z swap plus selective sign reversal, followed by the rig
//! calibration shifts. The mapping is a property of the capture rig and is
//! deliberately not configurable.

use crate::constants::{MM_TO_M, SHIFT_X_M, SHIFT_Z_M};

/// Remaps a ground-reaction-force vector (newtons).
pub fn map_force(force: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = force;
    // Swap Y and Z, then reverse the new Z.
    let (x, y, z) = (x, z, -y);
    // Rig shifts on X and Z.
    [x + SHIFT_X_M, y, z + SHIFT_Z_M]
}

/// Remaps a plate-moment vector (newton-millimeters). The output torque
/// columns are currently zero-filled placeholders, so nothing downstream
/// consumes this yet; it pins the convention for the pending plate-torque
/// computation.
#[allow(dead_code)]
pub fn map_moment(moment: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = moment;
    // Swap Y and Z, then reverse X and the new Z.
    let (x, y, z) = (-x, z, -y);
    [x + SHIFT_X_M, y, z + SHIFT_Z_M]
}

/// Remaps a center-of-pressure point (millimeters in, meters out). The model
/// Y is pinned to zero: the COP lies on the floor plane.
pub fn map_cop(cop: [f64; 3]) -> [f64; 3] {
    let [x, y, _z] = cop;
    // Scale mm->m; model Z takes capture Y sign-flipped, model Y pinned.
    let (x, y, z) = (x * MM_TO_M, 0.0, -(y * MM_TO_M));
    // Reverse X and Z.
    let (x, z) = (-x, -z);
    [x + SHIFT_X_M, y, z + SHIFT_Z_M]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_triple_eq(actual: [f64; 3], expected: [f64; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_force_map_worked_example() {
        // (1,2,3) -> swap (1,3,2) -> reverse z (1,3,-2) -> shift (0.5,3,-1.75)
        assert_triple_eq(map_force([1.0, 2.0, 3.0]), [0.5, 3.0, -1.75]);
    }

    #[test]
    fn test_force_map_is_deterministic() {
        let raw = [12.25, -3.5, 801.0];
        assert_eq!(map_force(raw), map_force(raw));
    }

    #[test]
    fn test_moment_map_reverses_x() {
        // (1,2,3) -> swap (1,3,2) -> reverse x,z (-1,3,-2) -> shift (-1.5,3,-1.75)
        assert_triple_eq(map_moment([1.0, 2.0, 3.0]), [-1.5, 3.0, -1.75]);
    }

    #[test]
    fn test_cop_net_mapping() {
        // Net closed form: (-0.001*px - 0.5, 0, 0.001*py + 0.25).
        assert_triple_eq(map_cop([700.0, 800.0, 900.0]), [-1.2, 0.0, 1.05]);
        assert_triple_eq(map_cop([7.0, 8.0, 9.0]), [-0.507, 0.0, 0.258]);
    }

    #[test]
    fn test_cop_y_is_always_zero() {
        assert_eq!(map_cop([123.0, -456.0, 789.0])[1], 0.0);
        assert_eq!(map_cop([0.0, 0.0, 0.0])[1], 0.0);
    }
}
