//! Median smoothing of readings across passes.
//!
//! OCR of the same label jitters from frame to frame (a "140" becomes "148"
//! for one pass). Keeping the last few accepted readings and reporting the
//! per-field median hides single-frame outliers.

use std::collections::VecDeque;
use tracing::trace;

use super::Reading;

/// Rolling history of accepted readings.
///
/// Holds no timer: clearing stale history is up to the caller via [`reset`].
///
/// [`reset`]: TemporalSmoother::reset
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    history: VecDeque<Reading>,
    capacity: usize,
    min_history: usize,
}

impl Default for TemporalSmoother {
    fn default() -> Self {
        Self::new(5, 3)
    }
}

impl TemporalSmoother {
    /// Creates a smoother keeping `capacity` readings that starts reporting
    /// medians once `min_history` readings are held. Both are at least 1, and
    /// `min_history` never exceeds `capacity`.
    pub fn new(capacity: usize, min_history: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
            min_history: min_history.clamp(1, capacity),
        }
    }

    /// Records a reading and returns the smoothed value.
    ///
    /// Until `min_history` readings are held the new reading is returned as-is.
    /// After that, calories and protein are each replaced by the median of
    /// their own history, so the result need not be any single past reading.
    pub fn push(&mut self, reading: Reading) -> Reading {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(reading);

        if self.history.len() < self.min_history {
            return reading;
        }

        let calories = median(self.history.iter().map(|r| r.calories));
        let protein = median(self.history.iter().map(|r| r.protein));
        let smoothed = Reading { calories, protein };

        trace!(
            "Smoothed {:?} -> {:?} over {} readings",
            reading,
            smoothed,
            self.history.len()
        );
        smoothed
    }

    /// Drops all history.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Readings currently held, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Reading> {
        self.history.iter()
    }
}

/// Middle element of the sorted values. For an even count this is the lower
/// of the two middle values; no averaging, so the result is always observed.
fn median(values: impl Iterator<Item = u32>) -> u32 {
    let mut sorted: Vec<u32> = values.collect();
    sorted.sort_unstable();
    match sorted.len() {
        0 => 0,
        n => sorted[(n - 1) / 2],
    }
}
