//! Pile scene - finger strokes stacked into one tilting column
//!
//! Each finger draws a left and a right stroke around a shared joint. The
//! next finger then sits at the mean of the two settled offsets, tilted by
//! their difference, so the stack leans toward the more curled side.

use crate::config::PileParams;
use crate::hand::{finger_span, Handedness, Keypoint, SmoothedHandpose, FINGER_COUNT, FINGER_NAMES, HAND_KEYPOINTS};
use crate::renderer::{DrawList, LineSegment, Viewport};

use super::pairing::{mirror, paired_hands};

pub fn vertical_offset(hand: &[Keypoint; HAND_KEYPOINTS], n: usize, scale: f32) -> f32 {
    let (base, tip) = finger_span(n);
    (hand[tip].y - hand[base].y) * scale
}

pub fn pile_stroke(side: Handedness, d: f32, reach: f32) -> Vec<LineSegment> {
    let sign = mirror(side);
    if reach < d.abs() {
        vec![LineSegment::new(0.0, 0.0, 0.0, -reach)]
    } else if d > 0.0 {
        vec![LineSegment::new(0.0, 0.0, sign * reach / 2.0, 0.0)]
    } else {
        let knee_x = sign * (reach * reach - d * d).max(0.0).sqrt() / 2.0;
        vec![
            LineSegment::new(0.0, 0.0, knee_x, d / 2.0),
            LineSegment::new(knee_x, d / 2.0, 0.0, d),
        ]
    }
}

/// Height a stroke leaves for the next finger: full reach when
/// overreaching, nothing when extended, else the offset itself.
pub fn settled_offset(d: f32, reach: f32) -> f32 {
    if reach < d.abs() {
        -reach
    } else if d > 0.0 {
        0.0
    } else {
        d
    }
}

/// Lift and rotation carried to the next finger
pub fn pile_tilt(left_d: f32, right_d: f32, params: &PileParams) -> (f32, f32) {
    let l = settled_offset(left_d, params.reach);
    let r = settled_offset(right_d, params.reach);
    ((l + r) / 2.0, -(l - r).atan2(2.0 * params.offset))
}

pub fn map_pile(hands: &SmoothedHandpose, viewport: Viewport, params: &PileParams, out: &mut DrawList) {
    let Some((left, right)) = paired_hands(hands) else {
        return;
    };

    out.scoped(|out| {
        out.translate(viewport.width / 2.0, 2.0 * viewport.height / 3.0);

        for n in 0..FINGER_COUNT {
            let left_d = vertical_offset(left, n, params.scale);
            let right_d = vertical_offset(right, n, params.scale);

            for (side, d) in [(Handedness::Left, left_d), (Handedness::Right, right_d)] {
                let sign = mirror(side);
                out.scoped(|out| {
                    out.translate(sign * params.offset, 0.0);
                    for segment in pile_stroke(side, d, params.reach) {
                        out.segment(segment);
                    }
                    out.scoped(|out| {
                        out.translate(sign * params.label_offset, 0.0);
                        out.text(FINGER_NAMES[n], 0.0, 0.0);
                    });
                });
            }

            let (lift, tilt) = pile_tilt(left_d, right_d, params);
            out.translate(0.0, lift);
            out.rotate(tilt);
        }
    });
}
