//! Per-scene lost timer
//!
//! Unlike the outer presence tracker this has no hysteresis: the countdown
//! starts on the first handless frame and clears on the first frame with a
//! hand. Nothing happens until a hand has been seen once in this scene.

/// Snapshot of the timer after one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LostStatus {
    pub lost: bool,
    /// Elapsed / countdown while lost, unclamped
    pub ratio: Option<f64>,
    /// Fires once per lost episode, on the frame the ratio first exceeds 1
    pub advance: bool,
}

pub struct LostTimer {
    countdown_ms: f64,
    ever_detected: bool,
    lost_since: Option<f64>,
    advanced: bool,
}

impl LostTimer {
    pub fn new(countdown_ms: f64) -> Self {
        Self {
            countdown_ms,
            ever_detected: false,
            lost_since: None,
            advanced: false,
        }
    }

    pub fn ever_detected(&self) -> bool {
        self.ever_detected
    }

    pub fn lost_since(&self) -> Option<f64> {
        self.lost_since
    }

    pub fn update(&mut self, hand_count: usize, now_ms: f64) -> LostStatus {
        if hand_count > 0 {
            self.ever_detected = true;
            self.lost_since = None;
            self.advanced = false;
            return LostStatus { lost: false, ratio: None, advance: false };
        }

        if !self.ever_detected {
            return LostStatus { lost: false, ratio: None, advance: false };
        }

        let since = *self.lost_since.get_or_insert(now_ms);
        let ratio = (now_ms - since) / self.countdown_ms;

        let advance = ratio > 1.0 && !self.advanced;
        if advance {
            self.advanced = true;
        }

        LostStatus { lost: true, ratio: Some(ratio), advance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_until_first_detection() {
        let mut timer = LostTimer::new(2000.0);
        for i in 0..100 {
            let status = timer.update(0, i as f64 * 16.0);
            assert!(!status.lost);
            assert!(!status.advance);
        }
        assert!(!timer.ever_detected());
    }

    #[test]
    fn test_lost_and_cleared_immediately() {
        let mut timer = LostTimer::new(2000.0);
        timer.update(1, 0.0);
        let status = timer.update(0, 16.0);
        assert!(status.lost);
        assert_eq!(status.ratio, Some(0.0));
        assert_eq!(timer.lost_since(), Some(16.0));

        let status = timer.update(2, 32.0);
        assert!(!status.lost);
        assert_eq!(timer.lost_since(), None);
        assert!(timer.ever_detected());
    }

    #[test]
    fn test_ratio_increases_and_advance_fires_once() {
        let mut timer = LostTimer::new(2000.0);
        timer.update(1, 0.0);

        let mut last_ratio = -1.0;
        let mut fired = Vec::new();
        for frame in 1..=200 {
            let now = frame as f64 * 16.0;
            let status = timer.update(0, now);
            let ratio = status.ratio.unwrap();
            if frame > 1 {
                assert!(ratio > last_ratio);
            }
            last_ratio = ratio;
            if status.advance {
                fired.push(frame);
                assert!(ratio > 1.0);
            }
        }
        assert_eq!(fired.len(), 1);
        // episode started at 16ms; 2016ms is exactly 1.0, 2032ms is the first above
        assert_eq!(fired[0], 127);
    }

    #[test]
    fn test_new_episode_can_fire_again() {
        let mut timer = LostTimer::new(100.0);
        timer.update(1, 0.0);
        timer.update(0, 10.0);
        assert!(timer.update(0, 200.0).advance);
        assert!(!timer.update(0, 300.0).advance);
        timer.update(1, 310.0);
        timer.update(0, 320.0);
        assert!(timer.update(0, 500.0).advance);
    }
}
