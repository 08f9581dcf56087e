use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSample {
    pub timestamp_ms: u64,
    pub resource: f64,
}

/// Fixed-capacity FIFO of recent balance samples for trend lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHistory {
    capacity: usize,
    samples: VecDeque<ChartSample>,
}

impl ChartHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: ChartSample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&ChartSample> {
        self.samples.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ChartSample> {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
