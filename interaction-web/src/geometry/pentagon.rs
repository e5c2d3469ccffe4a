//! Pentagon corner solver
//!
//! Corner k sits between edge k and edge k+1 (wrapping). Its angle comes
//! from the law of cosines on the triangle (e_k, e_{k+1}, aggregate), where
//! the aggregate of the pair closes the triangle. Corner 0 uses L1 and
//! corner 3 uses L2. Every corner is computed the same way, so rotating
//! the edge order rotates the corners with it.

use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::hand::FINGER_COUNT;

use super::edges::EdgeLengthSet;
use super::triangle::{aggregate, corner_angle};

/// Interior angles in radians, corner k following edge k
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PentagonCornerSet {
    pub angles: [f32; FINGER_COUNT],
}

impl PentagonCornerSet {
    /// Joint rotation applied after walking edge `k` when unfolding
    pub fn turn(&self, k: usize) -> f32 {
        std::f32::consts::PI - self.angles[k]
    }
}

pub fn solve_corners(edges: &EdgeLengthSet) -> Result<PentagonCornerSet> {
    let e = &edges.lengths;
    let mut angles = [0.0f32; FINGER_COUNT];

    for (k, angle) in angles.iter_mut().enumerate() {
        let a = e[k];
        let b = e[(k + 1) % FINGER_COUNT];
        let opposite = aggregate(a, b);
        *angle = corner_angle(a, b, opposite)
            .ok_or(EngineError::DegenerateCorner { corner: k, a, b, opposite })?;
    }

    Ok(PentagonCornerSet { angles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_reference_hand_gives_positive_angles() {
        let edges = EdgeLengthSet::new([80.0, 60.0, 100.0, 70.0, 50.0]);
        let corners = solve_corners(&edges).unwrap();
        for angle in corners.angles {
            assert!(angle.is_finite());
            assert!(angle > 0.0 && angle < PI);
        }
    }

    #[test]
    fn test_corner_zero_uses_l1() {
        let edges = EdgeLengthSet::new([80.0, 60.0, 100.0, 70.0, 50.0]);
        let corners = solve_corners(&edges).unwrap();
        let expected = corner_angle(80.0, 60.0, edges.l1()).unwrap();
        assert_eq!(corners.angles[0], expected);
        let expected = corner_angle(70.0, 50.0, edges.l2()).unwrap();
        assert_eq!(corners.angles[3], expected);
    }

    #[test]
    fn test_equal_edges_give_equal_corners() {
        let corners = solve_corners(&EdgeLengthSet::new([100.0; 5])).unwrap();
        // cos = 3/8 - 1/2 for equal sides
        let expected = (-0.125f32).acos();
        for angle in corners.angles {
            assert!((angle - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_zero_edge_is_domain_error() {
        let err = solve_corners(&EdgeLengthSet::new([80.0, 0.0, 100.0, 70.0, 50.0])).unwrap_err();
        assert!(matches!(err, EngineError::DegenerateCorner { corner: 0, .. }));
    }

    proptest! {
        #[test]
        fn angles_in_open_interval(edges in prop::array::uniform5(10.0f32..=200.0)) {
            let corners = solve_corners(&EdgeLengthSet::new(edges)).unwrap();
            for angle in corners.angles {
                prop_assert!(angle.is_finite() && angle > 0.0 && angle < PI);
            }
        }

        #[test]
        fn rotation_equivariant(edges in prop::array::uniform5(10.0f32..=200.0), shift in 0usize..5) {
            let base = solve_corners(&EdgeLengthSet::new(edges)).unwrap();
            let mut rotated = edges;
            rotated.rotate_left(shift);
            let turned = solve_corners(&EdgeLengthSet::new(rotated)).unwrap();
            let mut expected = base.angles;
            expected.rotate_left(shift);
            prop_assert_eq!(turned.angles, expected);
        }
    }
}
