//! Edge-length trace, dumped to the debug log in batches
//!
//! Used to tune reach/scale against real visitors' hands.

use crate::geometry::EdgeLengthSet;

pub const TRACE_BATCH: usize = 300;

pub struct EdgeTrace {
    entries: Vec<[f32; 5]>,
    batch: usize,
}

impl EdgeTrace {
    pub fn new(batch: usize) -> Self {
        Self { entries: Vec::with_capacity(batch + 1), batch }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the JSON batch when it was flushed
    pub fn record(&mut self, edges: &EdgeLengthSet) -> Option<String> {
        self.entries.push(edges.lengths);
        if self.entries.len() <= self.batch {
            return None;
        }

        let dump = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("edge trace not serializable: {}", err);
                self.entries.clear();
                return None;
            }
        };
        log::debug!("edge trace: {}", dump);
        self.entries.clear();
        Some(dump)
    }
}

impl Default for EdgeTrace {
    fn default() -> Self {
        Self::new(TRACE_BATCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flushes_after_batch() {
        let mut trace = EdgeTrace::new(2);
        let edges = EdgeLengthSet::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(trace.record(&edges).is_none());
        assert!(trace.record(&edges).is_none());
        let dump = trace.record(&edges).unwrap();
        assert_eq!(dump.matches('[').count(), 4);
        assert!(trace.is_empty());
    }
}
