//! Unit scene - one bent stroke per finger, five columns, both sides
//!
//! The bend offset is the vertical tip-minus-base distance of a finger.
//! Negative (tip above base) bends the stroke into a "<" whose depth grows
//! with the offset; positive lays it flat; beyond reach it stands straight.

use crate::config::UnitParams;
use crate::hand::{Handedness, Keypoint, SmoothedHandpose, FINGER_COUNT, FINGER_NAMES, HAND_KEYPOINTS, THUMB_MCP};
use crate::renderer::{DrawList, LineSegment, Viewport};

use super::pairing::{mirror, paired_hands};

/// Base keypoint for finger `n`; the thumb bends from its MCP joint here.
fn base_index(n: usize) -> usize {
    if n == 0 { THUMB_MCP } else { 4 * n + 1 }
}

pub fn bend_offset(hand: &[Keypoint; HAND_KEYPOINTS], n: usize, divisor: f32) -> f32 {
    let tip = 4 * n + 4;
    (hand[tip].y - hand[base_index(n)].y) / divisor
}

/// Stroke segments for one finger of one side, in column coordinates.
///
/// The right side tests for overreach before extension, the left side the
/// other way round, so an extended finger beyond reach stands upright on
/// the right but lies flat on the left.
pub fn unit_stroke(side: Handedness, d: f32, params: &UnitParams) -> Vec<LineSegment> {
    let r = params.reach;
    let sign = mirror(side);
    let o = sign * params.offset;

    let upright = || vec![LineSegment::new(o, 0.0, o, -3.0 * r)];
    let flat = || vec![LineSegment::new(o, 0.0, sign * 3.0 * r / 2.0, 0.0)];

    let overreach = r < d.abs();
    let extended = d > 0.0;
    match side {
        Handedness::Right if overreach => upright(),
        Handedness::Right if extended => flat(),
        Handedness::Left if extended => flat(),
        Handedness::Left if overreach => upright(),
        _ => {
            let knee_x = o + sign * (r * r - d * d).max(0.0).sqrt();
            vec![
                LineSegment::new(o, 0.0, knee_x, 3.0 * d / 2.0),
                LineSegment::new(knee_x, 3.0 * d / 2.0, o, 3.0 * d),
            ]
        }
    }
}

pub fn map_unit(hands: &SmoothedHandpose, viewport: Viewport, params: &UnitParams, out: &mut DrawList) {
    let Some((left, right)) = paired_hands(hands) else {
        return;
    };

    for (side, hand) in [(Handedness::Left, left), (Handedness::Right, right)] {
        out.scoped(|out| {
            out.translate(0.0, viewport.height / 2.0);
            for n in 0..FINGER_COUNT {
                out.scoped(|out| {
                    out.translate(viewport.width / 6.0 * (n + 1) as f32, 0.0);
                    let d = bend_offset(hand, n, params.divisor);
                    for segment in unit_stroke(side, d, params) {
                        out.segment(segment);
                    }
                    out.scoped(|out| {
                        out.translate(0.0, params.label_drop);
                        out.text(FINGER_NAMES[n], 0.0, 0.0);
                    });
                });
            }
        });
    }
}
