//! Fixed-capacity rolling window, oldest entry evicted first
//!
//! Backs both the keypoint history and the edge-length history.

use std::collections::VecDeque;

pub struct RollingWindow<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// A capacity of zero is bumped to one so the window can always hold
    /// the latest entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<const N: usize> RollingWindow<[f32; N]> {
    /// Element-wise mean of the retained entries
    pub fn mean(&self) -> Option<[f32; N]> {
        if self.entries.is_empty() {
            return None;
        }
        let mut sum = [0.0f32; N];
        for entry in &self.entries {
            for (acc, value) in sum.iter_mut().zip(entry) {
                *acc += value;
            }
        }
        let n = self.entries.len() as f32;
        Some(sum.map(|s| s / n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_oldest_first() {
        let mut window = RollingWindow::new(3);
        for i in 0..5 {
            window.push(i);
        }
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_mean_over_partial_window() {
        let mut window = RollingWindow::new(5);
        assert_eq!(window.mean(), None);
        window.push([1.0, 10.0]);
        window.push([3.0, 20.0]);
        assert_eq!(window.mean(), Some([2.0, 15.0]));
    }

    #[test]
    fn test_zero_capacity_holds_latest() {
        let mut window = RollingWindow::new(0);
        window.push(1);
        window.push(2);
        assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2]);
    }
}
