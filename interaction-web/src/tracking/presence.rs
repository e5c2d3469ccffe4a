//! Presence tracker - outer hysteresis over detector confidence
//!
//! A frame is tracked when it has at least one hand and every hand clears
//! the confidence threshold. Misses are counted:
//! - more than `soft_after` misses: buffered detections are dropped
//! - more than `hard_after` misses: the application takes over
//!
//! A single tracked frame resets the counter.

use serde::Serialize;

use crate::hand::HandDetection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresenceLevel {
    Tracking,
    SoftLost,
    HardLost,
}

impl PresenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresenceLevel::Tracking => "tracking",
            PresenceLevel::SoftLost => "soft-lost",
            PresenceLevel::HardLost => "hard-lost",
        }
    }
}

/// Outcome of one detector frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PresenceUpdate {
    /// Detections passed the confidence gate
    pub accepted: bool,
    pub level: PresenceLevel,
    /// Set only on the frame the level changed
    pub entered: Option<PresenceLevel>,
    pub misses: u32,
}

pub struct PresenceTracker {
    threshold: f32,
    soft_after: u32,
    hard_after: u32,
    misses: u32,
    level: PresenceLevel,
}

impl PresenceTracker {
    pub fn new(threshold: f32, soft_after: u32, hard_after: u32) -> Self {
        Self {
            threshold,
            soft_after,
            hard_after,
            misses: 0,
            level: PresenceLevel::Tracking,
        }
    }

    pub fn level(&self) -> PresenceLevel {
        self.level
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub fn is_tracked_frame(&self, detections: &[HandDetection]) -> bool {
        !detections.is_empty() && detections.iter().all(|d| d.confidence >= self.threshold)
    }

    pub fn update(&mut self, detections: &[HandDetection]) -> PresenceUpdate {
        let accepted = self.is_tracked_frame(detections);
        if accepted {
            self.misses = 0;
        } else {
            self.misses = self.misses.saturating_add(1);
        }

        let level = if self.misses > self.hard_after {
            PresenceLevel::HardLost
        } else if self.misses > self.soft_after {
            PresenceLevel::SoftLost
        } else {
            PresenceLevel::Tracking
        };

        let entered = (level != self.level).then_some(level);
        self.level = level;

        PresenceUpdate { accepted, level, entered, misses: self.misses }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::{Handedness, Keypoint, HAND_KEYPOINTS};

    fn hand(confidence: f32) -> HandDetection {
        HandDetection {
            handedness: Handedness::Right,
            confidence,
            keypoints: vec![Keypoint::default(); HAND_KEYPOINTS],
        }
    }

    fn tracker() -> PresenceTracker {
        PresenceTracker::new(0.75, 5, 200)
    }

    #[test]
    fn test_soft_then_hard_lost_thresholds() {
        let mut t = tracker();
        for _ in 0..5 {
            assert!(t.update(&[hand(0.9)]).accepted);
        }
        for frame in 1..=250u32 {
            let update = t.update(&[hand(0.3)]);
            match frame {
                6 => assert_eq!(update.entered, Some(PresenceLevel::SoftLost)),
                201 => assert_eq!(update.entered, Some(PresenceLevel::HardLost)),
                _ => assert_eq!(update.entered, None, "frame {frame}"),
            }
            let expected = if frame > 200 {
                PresenceLevel::HardLost
            } else if frame > 5 {
                PresenceLevel::SoftLost
            } else {
                PresenceLevel::Tracking
            };
            assert_eq!(update.level, expected);
        }
    }

    #[test]
    fn test_zero_hands_counts_as_miss() {
        let mut t = tracker();
        let update = t.update(&[]);
        assert!(!update.accepted);
        assert_eq!(update.misses, 1);
    }

    #[test]
    fn test_every_hand_must_clear_threshold() {
        let t = tracker();
        assert!(t.is_tracked_frame(&[hand(0.75)]));
        assert!(!t.is_tracked_frame(&[hand(0.9), hand(0.5)]));
    }

    #[test]
    fn test_tracked_frame_recovers_from_hard_lost() {
        let mut t = tracker();
        for _ in 0..300 {
            t.update(&[]);
        }
        assert_eq!(t.level(), PresenceLevel::HardLost);
        let update = t.update(&[hand(0.95)]);
        assert_eq!(update.entered, Some(PresenceLevel::Tracking));
        assert_eq!(t.misses(), 0);
    }
}
