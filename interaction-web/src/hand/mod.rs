//! Hand module - landmark model and detector normalization
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod normalizer;

pub use landmarks::{
    finger_span, DualHandFrame, HandDetection, HandSample, Handedness, Keypoint,
    SmoothedHandpose, FINGER_COUNT, FINGER_NAMES, HAND_KEYPOINTS,
    // Constants
    WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP,
    RING_MCP, RING_TIP, PINKY_MCP, PINKY_TIP,
};
pub use normalizer::normalize_detections;
