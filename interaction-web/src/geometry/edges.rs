//! Edge lengths - per-finger extension with degeneracy rejection
//!
//! Each finger contributes one edge: base-to-tip distance × scene scale,
//! clamped into [min_edge, reach]. A new reading is committed only if its
//! validation triple (L1, L2, middle) forms a triangle; otherwise the last
//! accepted reading is held. Committed readings go through their own
//! rolling average, independent of keypoint smoothing.

use serde::Serialize;

use crate::hand::{finger_span, HandSample, Keypoint, FINGER_COUNT, HAND_KEYPOINTS};
use crate::tracking::RollingWindow;

use super::triangle::{aggregate, is_valid_triangle};

/// Five finger extensions, thumb first
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeLengthSet {
    pub lengths: [f32; FINGER_COUNT],
}

impl EdgeLengthSet {
    pub fn new(lengths: [f32; FINGER_COUNT]) -> Self {
        Self { lengths }
    }

    /// Thumb/index aggregate
    pub fn l1(&self) -> f32 {
        aggregate(self.lengths[0], self.lengths[1])
    }

    /// Ring/pinky aggregate
    pub fn l2(&self) -> f32 {
        aggregate(self.lengths[3], self.lengths[4])
    }

    pub fn validation_triple(&self) -> [f32; 3] {
        [self.l1(), self.l2(), self.lengths[2]]
    }

    pub fn is_valid(&self) -> bool {
        is_valid_triangle(self.validation_triple())
    }

    /// Raw clamped reading from one hand pose
    pub fn measure(hand: &[Keypoint; HAND_KEYPOINTS], scale: f32, min_edge: f32, reach: f32) -> Self {
        let lengths = std::array::from_fn(|n| {
            let (base, tip) = finger_span(n);
            let d = hand[base].planar_distance(&hand[tip]) * scale;
            d.clamp(min_edge, reach)
        });
        Self { lengths }
    }
}

pub struct EdgeLengthExtractor {
    scale: f32,
    min_edge: f32,
    reach: f32,
    /// Last reading that passed validation. Every entry in `history` is a
    /// copy of some value this field held, so the history never contains
    /// a degenerate or out-of-range set.
    last_good: Option<EdgeLengthSet>,
    history: RollingWindow<[f32; FINGER_COUNT]>,
}

impl EdgeLengthExtractor {
    pub fn new(scale: f32, min_edge: f32, reach: f32, window: usize) -> Self {
        Self {
            scale,
            min_edge,
            reach,
            last_good: None,
            history: RollingWindow::new(window),
        }
    }

    pub fn last_good(&self) -> Option<&EdgeLengthSet> {
        self.last_good.as_ref()
    }

    pub fn history(&self) -> &RollingWindow<[f32; FINGER_COUNT]> {
        &self.history
    }

    /// Feed one smoothed hand; returns the rolling-average edge set, or
    /// None while the hand is absent or nothing has been accepted yet.
    pub fn update(&mut self, hand: &HandSample) -> Option<EdgeLengthSet> {
        let keypoints = hand.keypoints()?;

        let reading = EdgeLengthSet::measure(keypoints, self.scale, self.min_edge, self.reach);
        if reading.is_valid() {
            self.last_good = Some(reading);
        } else {
            log::debug!("holding previous edges, degenerate reading {:?}", reading.lengths);
        }

        let held = self.last_good?;
        self.history.push(held.lengths);
        self.smoothed()
    }

    pub fn smoothed(&self) -> Option<EdgeLengthSet> {
        self.history.mean().map(EdgeLengthSet::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Fingers laid out side by side, tip straight above base
    fn hand_with_extensions(extensions: [f32; FINGER_COUNT]) -> HandSample {
        let mut points = [Keypoint::default(); HAND_KEYPOINTS];
        for (n, d) in extensions.iter().enumerate() {
            let (base, tip) = finger_span(n);
            points[base] = Keypoint::new(100.0 * n as f32, 300.0, 0.0);
            points[tip] = Keypoint::new(100.0 * n as f32, 300.0 - d, 0.0);
        }
        HandSample::from_array(points)
    }

    #[test]
    fn test_valid_reading_passes_unclamped() {
        let mut extractor = EdgeLengthExtractor::new(1.0, 10.0, 200.0, 5);
        let edges = extractor
            .update(&hand_with_extensions([80.0, 60.0, 100.0, 70.0, 50.0]))
            .unwrap();
        assert_eq!(edges.lengths, [80.0, 60.0, 100.0, 70.0, 50.0]);
        assert_eq!(edges.l1(), 110.0);
        assert_eq!(edges.l2(), 95.0);
    }

    #[test]
    fn test_clamps_into_range() {
        let set = EdgeLengthSet::measure(
            hand_with_extensions([500.0, 0.0, 100.0, 70.0, 50.0]).keypoints().unwrap(),
            2.0,
            10.0,
            200.0,
        );
        assert_eq!(set.lengths, [200.0, 10.0, 200.0, 140.0, 100.0]);
    }

    #[test]
    fn test_degenerate_reading_holds_previous() {
        let mut extractor = EdgeLengthExtractor::new(1.0, 10.0, 200.0, 5);
        extractor.update(&hand_with_extensions([80.0, 60.0, 100.0, 70.0, 50.0]));

        // middle finger far longer than both aggregates combined
        let out = extractor
            .update(&hand_with_extensions([10.0, 10.0, 200.0, 10.0, 10.0]))
            .unwrap();
        assert_eq!(out.lengths, [80.0, 60.0, 100.0, 70.0, 50.0]);
        assert_eq!(extractor.history().len(), 2);
    }

    #[test]
    fn test_nothing_committed_before_first_valid_reading() {
        let mut extractor = EdgeLengthExtractor::new(1.0, 10.0, 200.0, 5);
        assert_eq!(extractor.update(&hand_with_extensions([10.0, 10.0, 200.0, 10.0, 10.0])), None);
        assert_eq!(extractor.update(&HandSample::empty()), None);
        assert!(extractor.history().is_empty());
    }

    #[test]
    fn test_rolling_average_over_five() {
        let mut extractor = EdgeLengthExtractor::new(1.0, 10.0, 200.0, 5);
        for _ in 0..5 {
            extractor.update(&hand_with_extensions([80.0, 60.0, 100.0, 70.0, 50.0]));
        }
        let out = extractor
            .update(&hand_with_extensions([90.0, 60.0, 100.0, 70.0, 50.0]))
            .unwrap();
        assert!((out.lengths[0] - 82.0).abs() < 1e-4);
        assert_eq!(extractor.history().len(), 5);
    }

    proptest! {
        #[test]
        fn committed_values_stay_in_range_and_valid(
            readings in prop::collection::vec(prop::array::uniform5(0.0f32..400.0), 1..20),
        ) {
            let mut extractor = EdgeLengthExtractor::new(1.0, 10.0, 200.0, 5);
            for reading in readings {
                extractor.update(&hand_with_extensions(reading));
                if let Some(good) = extractor.last_good() {
                    prop_assert!(good.is_valid());
                }
                for entry in extractor.history().iter() {
                    prop_assert!(entry.iter().all(|d| (10.0..=200.0).contains(d)));
                    prop_assert!(EdgeLengthSet::new(*entry).is_valid());
                }
            }
        }
    }
}
