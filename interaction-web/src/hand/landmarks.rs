//! Hand landmark model: 21 keypoints per hand, one sample per side
//!
//! Index layout follows the MediaPipe hand topology.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const HAND_KEYPOINTS: usize = 21;
pub const FINGER_COUNT: usize = 5;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

pub const FINGER_NAMES: [&str; FINGER_COUNT] =
    ["thumb", "index finger", "middle finger", "ring finger", "pinky"];

/// (base, tip) keypoint indices of finger `n`, thumb first
pub const fn finger_span(n: usize) -> (usize, usize) {
    (4 * n + 1, 4 * n + 4)
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One tracked landmark, pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Keypoint {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the image plane (depth ignored)
    pub fn planar_distance(&self, other: &Keypoint) -> f32 {
        (Vector2::new(other.x, other.y) - Vector2::new(self.x, self.y)).norm()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// One hand as reported by the pose detector
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandDetection {
    pub handedness: Handedness,
    #[serde(alias = "score")]
    pub confidence: f32,
    pub keypoints: Vec<Keypoint>,
}

/// Full 21-keypoint pose of one hand, or nothing when undetected
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandSample {
    keypoints: Option<[Keypoint; HAND_KEYPOINTS]>,
}

impl HandSample {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_array(keypoints: [Keypoint; HAND_KEYPOINTS]) -> Self {
        Self { keypoints: Some(keypoints) }
    }

    /// Rejects partial hands; a sample is all 21 keypoints or nothing.
    pub fn from_keypoints(keypoints: &[Keypoint]) -> Result<Self> {
        let array: [Keypoint; HAND_KEYPOINTS] = keypoints
            .try_into()
            .map_err(|_| EngineError::MalformedHand { found: keypoints.len() })?;
        Ok(Self::from_array(array))
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_none()
    }

    pub fn keypoints(&self) -> Option<&[Keypoint; HAND_KEYPOINTS]> {
        self.keypoints.as_ref()
    }

    pub fn len(&self) -> usize {
        if self.is_empty() { 0 } else { HAND_KEYPOINTS }
    }
}

/// Current-frame input: one sample per side
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DualHandFrame {
    pub left: HandSample,
    pub right: HandSample,
}

/// Per-coordinate mean over the retained history, same shape as the input
pub type SmoothedHandpose = DualHandFrame;

impl DualHandFrame {
    pub fn side(&self, handedness: Handedness) -> &HandSample {
        match handedness {
            Handedness::Left => &self.left,
            Handedness::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, handedness: Handedness) -> &mut HandSample {
        match handedness {
            Handedness::Left => &mut self.left,
            Handedness::Right => &mut self.right,
        }
    }

    pub fn detected_count(&self) -> usize {
        usize::from(!self.left.is_empty()) + usize::from(!self.right.is_empty())
    }
}
