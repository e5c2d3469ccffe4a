//! Scene context - all mutable state of the active scene
//!
//! Created when a scene mounts and dropped when it ends. Nothing carries
//! over between scenes: smoothing history, lost timer and edge buffers
//! start empty every time.

use crate::config::EngineConfig;
use crate::geometry::{solve_corners, EdgeLengthExtractor};
use crate::hand::{DualHandFrame, Handedness, SmoothedHandpose};
use crate::renderer::{DrawList, Viewport};
use crate::tracking::{LostStatus, LostTimer, TemporalSmoother};

use super::circle::{map_circle, PentagonFigure};
use super::indicator::draw_countdown;
use super::kind::SceneKind;
use super::pile::map_pile;
use super::trace::EdgeTrace;
use super::unit::map_unit;

/// Output of one scene frame
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub commands: DrawList,
    pub lost: LostStatus,
}

pub struct SceneContext {
    kind: SceneKind,
    smoother: TemporalSmoother,
    lost_timer: LostTimer,
    left_edges: EdgeLengthExtractor,
    right_edges: EdgeLengthExtractor,
    trace: EdgeTrace,
}

impl SceneContext {
    pub fn new(kind: SceneKind, config: &EngineConfig) -> Self {
        let edges = || {
            let c = &config.circle;
            EdgeLengthExtractor::new(c.scale, c.min_edge, c.reach, config.edge_window)
        };
        Self {
            kind,
            smoother: TemporalSmoother::new(config.history_window),
            lost_timer: LostTimer::new(config.lost_countdown_ms),
            left_edges: edges(),
            right_edges: edges(),
            trace: EdgeTrace::default(),
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Run one frame.
    ///
    /// `raw` is the normalized current detection, `hand_count` the number
    /// of detections currently buffered (drives the lost timer).
    pub fn frame(
        &mut self,
        raw: &DualHandFrame,
        hand_count: usize,
        now_ms: f64,
        viewport: Viewport,
        config: &EngineConfig,
    ) -> SceneFrame {
        let hands = self.smoother.update(raw);

        let mut commands = DrawList::new();
        commands.clear();

        let lost = self.lost_timer.update(hand_count, now_ms);
        if let Some(ratio) = lost.ratio {
            draw_countdown(ratio, viewport, &config.indicator, &mut commands);
        }

        match self.kind {
            SceneKind::Unit => map_unit(&hands, viewport, &config.unit, &mut commands),
            SceneKind::Pile => map_pile(&hands, viewport, &config.pile, &mut commands),
            SceneKind::Circle => {
                let figures = [
                    (Handedness::Left, self.pentagon(Handedness::Left, &hands)),
                    (Handedness::Right, self.pentagon(Handedness::Right, &hands)),
                ];
                map_circle(figures, viewport, &config.circle, &mut commands);
            }
        }

        SceneFrame { commands, lost }
    }

    fn pentagon(&mut self, side: Handedness, hands: &SmoothedHandpose) -> Option<PentagonFigure> {
        let extractor = match side {
            Handedness::Left => &mut self.left_edges,
            Handedness::Right => &mut self.right_edges,
        };
        let edges = extractor.update(hands.side(side))?;
        self.trace.record(&edges);

        match solve_corners(&edges) {
            Ok(corners) => Some(PentagonFigure { edges, corners }),
            Err(err) => {
                log::warn!("skipping {:?} hand this frame: {}", side, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{finger_span, HandSample, Keypoint, HAND_KEYPOINTS};
    use crate::renderer::{flatten, DrawCommand};

    fn open_hand() -> HandSample {
        let mut points = [Keypoint::new(0.0, 400.0, 0.0); HAND_KEYPOINTS];
        for (n, d) in [40.0, 30.0, 50.0, 35.0, 25.0].iter().enumerate() {
            let (base, tip) = finger_span(n);
            points[base] = Keypoint::new(50.0 * n as f32, 400.0, 0.0);
            points[tip] = Keypoint::new(50.0 * n as f32, 400.0 - d, 0.0);
        }
        HandSample::from_array(points)
    }

    fn viewport() -> Viewport {
        Viewport::new(1200.0, 800.0)
    }

    #[test]
    fn test_frame_starts_with_clear() {
        let config = EngineConfig::default();
        let mut ctx = SceneContext::new(SceneKind::Unit, &config);
        let frame = ctx.frame(&DualHandFrame::default(), 0, 0.0, viewport(), &config);
        assert_eq!(frame.commands.commands(), &[DrawCommand::Clear]);
        assert!(!frame.lost.lost);
    }

    #[test]
    fn test_circle_draws_detected_hand_only() {
        let config = EngineConfig::default();
        let mut ctx = SceneContext::new(SceneKind::Circle, &config);
        let raw = DualHandFrame { left: HandSample::empty(), right: open_hand() };
        let frame = ctx.frame(&raw, 1, 0.0, viewport(), &config);
        let flat = flatten(frame.commands.commands()).unwrap();
        assert_eq!(flat.segments.len(), 10);
        // right figure anchored at centre + spacing
        assert_eq!((flat.segments[0].x1, flat.segments[0].y1), (900.0, 400.0));
    }

    #[test]
    fn test_countdown_drawn_after_hands_leave() {
        let config = EngineConfig::default();
        let mut ctx = SceneContext::new(SceneKind::Pile, &config);
        let raw = DualHandFrame { left: open_hand(), right: HandSample::empty() };
        ctx.frame(&raw, 1, 0.0, viewport(), &config);

        let frame = ctx.frame(&DualHandFrame::default(), 0, 1000.0, viewport(), &config);
        assert!(frame.lost.lost);
        assert_eq!(frame.lost.ratio, Some(0.0));

        let frame = ctx.frame(&DualHandFrame::default(), 0, 2000.0, viewport(), &config);
        assert_eq!(frame.lost.ratio, Some(0.5));
        let flat = flatten(frame.commands.commands()).unwrap();
        assert!(flat.labels.iter().any(|(label, _)| label == &config.indicator.label));
        // frozen pose keeps the figure on screen while the countdown runs
        assert!(flat.labels.iter().any(|(label, _)| label == "pinky"));

        let frame = ctx.frame(&DualHandFrame::default(), 0, 3001.0, viewport(), &config);
        assert!(frame.lost.advance);
    }
}
