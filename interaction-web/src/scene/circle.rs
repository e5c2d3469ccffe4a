//! Circle scene - each hand's finger edges unfolded into a pentagon chain
//!
//! Every edge is drawn as a "<" of two strokes from the current joint up to
//! the next one; the frame then moves to that joint and turns by the
//! exterior angle of the corner, so the five edges close around.

use crate::config::CircleParams;
use crate::geometry::{EdgeLengthSet, PentagonCornerSet};
use crate::hand::{Handedness, FINGER_COUNT, FINGER_NAMES};
use crate::renderer::{DrawList, LineSegment, Viewport};

/// Draw inputs for one hand
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PentagonFigure {
    pub edges: EdgeLengthSet,
    pub corners: PentagonCornerSet,
}

/// The "<" spanning one edge of length `d`, from (0, 0) to (0, −d)
pub fn edge_strokes(d: f32, reach: f32) -> [LineSegment; 2] {
    let knee_x = -(reach * reach - d * d).max(0.0).sqrt() / 2.0;
    [
        LineSegment::new(0.0, 0.0, knee_x, -d / 2.0),
        LineSegment::new(knee_x, -d / 2.0, 0.0, -d),
    ]
}

pub fn map_circle(
    figures: [(Handedness, Option<PentagonFigure>); 2],
    viewport: Viewport,
    params: &CircleParams,
    out: &mut DrawList,
) {
    for (side, figure) in figures {
        let Some(figure) = figure else { continue };
        let dx = match side {
            Handedness::Left => -params.hand_spacing,
            Handedness::Right => params.hand_spacing,
        };

        out.scoped(|out| {
            out.translate(viewport.width / 2.0 + dx, viewport.height / 2.0);
            for i in 0..FINGER_COUNT {
                let d = figure.edges.lengths[i];
                for segment in edge_strokes(d, params.reach) {
                    out.segment(segment);
                }
                out.text(FINGER_NAMES[i], -params.label_offset, 0.0);

                out.translate(0.0, -d);
                out.rotate(figure.corners.turn(i));
            }
        });
    }
}
