//! Left/right pairing with duplication of a lone hand

use crate::hand::{Handedness, Keypoint, SmoothedHandpose, HAND_KEYPOINTS};

type Pose = [Keypoint; HAND_KEYPOINTS];

/// Horizontal mirror factor: left figures open to the left
pub fn mirror(side: Handedness) -> f32 {
    match side {
        Handedness::Left => -1.0,
        Handedness::Right => 1.0,
    }
}

/// Both sides, with a single detected hand standing in for the missing one.
/// None when neither hand has any history.
pub fn paired_hands(hands: &SmoothedHandpose) -> Option<(&Pose, &Pose)> {
    match (hands.left.keypoints(), hands.right.keypoints()) {
        (Some(left), Some(right)) => Some((left, right)),
        (Some(only), None) | (None, Some(only)) => Some((only, only)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandSample;

    #[test]
    fn test_lone_hand_is_duplicated() {
        let pose = [Keypoint::new(3.0, 4.0, 0.0); HAND_KEYPOINTS];
        let hands = SmoothedHandpose { left: HandSample::empty(), right: HandSample::from_array(pose) };
        let (left, right) = paired_hands(&hands).unwrap();
        assert_eq!(left, right);
        assert_eq!(left[0].x, 3.0);
    }

    #[test]
    fn test_no_hands() {
        assert!(paired_hands(&SmoothedHandpose::default()).is_none());
    }
}
