//! Raw detections → fixed left/right structure
//!
//! Two detections with the same handedness: the later one wins.

use super::landmarks::{DualHandFrame, HandDetection, HandSample};

pub fn normalize_detections(detections: &[HandDetection]) -> DualHandFrame {
    let mut frame = DualHandFrame::default();

    for detection in detections {
        log::trace!("{:?} hand confidence {:.2}", detection.handedness, detection.confidence);
        match HandSample::from_keypoints(&detection.keypoints) {
            Ok(sample) => *frame.side_mut(detection.handedness) = sample,
            Err(err) => log::warn!("skipping {:?} detection: {}", detection.handedness, err),
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::landmarks::{Handedness, Keypoint, HAND_KEYPOINTS};

    fn detection(handedness: Handedness, x: f32, count: usize) -> HandDetection {
        HandDetection {
            handedness,
            confidence: 0.9,
            keypoints: vec![Keypoint::new(x, 0.0, 0.0); count],
        }
    }

    #[test]
    fn test_sides_follow_handedness() {
        let frame = normalize_detections(&[
            detection(Handedness::Right, 1.0, HAND_KEYPOINTS),
            detection(Handedness::Left, 2.0, HAND_KEYPOINTS),
        ]);
        assert_eq!(frame.right.keypoints().unwrap()[0].x, 1.0);
        assert_eq!(frame.left.keypoints().unwrap()[0].x, 2.0);
    }

    #[test]
    fn test_duplicate_handedness_last_write_wins() {
        let frame = normalize_detections(&[
            detection(Handedness::Left, 1.0, HAND_KEYPOINTS),
            detection(Handedness::Left, 7.0, HAND_KEYPOINTS),
        ]);
        assert_eq!(frame.left.keypoints().unwrap()[0].x, 7.0);
        assert!(frame.right.is_empty());
    }

    #[test]
    fn test_malformed_detection_leaves_side_empty() {
        let frame = normalize_detections(&[detection(Handedness::Right, 1.0, 12)]);
        assert_eq!(frame.detected_count(), 0);
    }

    #[test]
    fn test_no_detections() {
        assert_eq!(normalize_detections(&[]), DualHandFrame::default());
    }
}
