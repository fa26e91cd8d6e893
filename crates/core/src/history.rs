use crate::sample::Sample;
use std::collections::VecDeque;

/// Rolling window of the last `capacity` samples, oldest first.
///
/// The window starts out full of zero samples, so a freshly created history
/// already renders as a row of blank columns.
#[derive(Debug, Clone)]
pub struct History {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl History {
    /// A zero capacity is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut samples = VecDeque::with_capacity(capacity);
        samples.resize(capacity, Sample::MIN);
        Self { samples, capacity }
    }

    /// Push a new sample, evicting the oldest.
    pub fn append(&mut self, sample: impl Into<Sample>) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample.into());
    }

    /// Copy of the window, oldest first.  Always `capacity()` long.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.samples.iter().copied()
    }

    /// Most recent sample (`0` before the first append).
    pub fn latest(&self) -> Sample {
        self.samples.back().copied().unwrap_or_default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
