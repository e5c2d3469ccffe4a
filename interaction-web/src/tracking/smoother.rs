//! Rolling-window keypoint smoothing per hand
//!
//! An undetected hand leaves its history untouched, so the figure freezes
//! on the last pose instead of collapsing on a single dropped frame.
//! No outlier rejection happens here.

use crate::hand::{DualHandFrame, HandSample, Handedness, Keypoint, SmoothedHandpose, HAND_KEYPOINTS};

use super::rolling::RollingWindow;

type Pose = [Keypoint; HAND_KEYPOINTS];

/// Recent samples per side, newest last
pub struct HandposeHistory {
    pub left: RollingWindow<Pose>,
    pub right: RollingWindow<Pose>,
}

impl HandposeHistory {
    pub fn new(window: usize) -> Self {
        Self {
            left: RollingWindow::new(window),
            right: RollingWindow::new(window),
        }
    }

    fn side_mut(&mut self, handedness: Handedness) -> &mut RollingWindow<Pose> {
        match handedness {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }
}

pub struct TemporalSmoother {
    history: HandposeHistory,
}

impl TemporalSmoother {
    pub fn new(window: usize) -> Self {
        Self { history: HandposeHistory::new(window) }
    }

    pub fn history(&self) -> &HandposeHistory {
        &self.history
    }

    /// Push this frame's detected hands and return the smoothed pose.
    pub fn update(&mut self, frame: &DualHandFrame) -> SmoothedHandpose {
        for handedness in [Handedness::Left, Handedness::Right] {
            if let Some(pose) = frame.side(handedness).keypoints() {
                self.history.side_mut(handedness).push(*pose);
            }
        }
        self.smoothed()
    }

    pub fn smoothed(&self) -> SmoothedHandpose {
        SmoothedHandpose {
            left: mean_pose(&self.history.left),
            right: mean_pose(&self.history.right),
        }
    }
}

fn mean_pose(window: &RollingWindow<Pose>) -> HandSample {
    if window.is_empty() {
        return HandSample::empty();
    }

    let mut sum = [Keypoint::default(); HAND_KEYPOINTS];
    for pose in window.iter() {
        for (acc, kp) in sum.iter_mut().zip(pose) {
            acc.x += kp.x;
            acc.y += kp.y;
            acc.z += kp.z;
        }
    }

    let n = window.len() as f32;
    HandSample::from_array(sum.map(|kp| Keypoint::new(kp.x / n, kp.y / n, kp.z / n)))
}
