use std::collections::VecDeque;

use super::Resource;

pub const DEFAULT_CAPACITY: usize = 1024;

/// One plotted observation: seconds since startup, and the stall rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatePoint {
    pub at: f64,
    pub pct: f64,
}

/// Fixed-capacity sliding window of rate points per resource. Append-only;
/// the oldest points are evicted once the window is full. Insertion order
/// is chronological order.
#[derive(Debug)]
pub struct HistoryStore {
    series: [VecDeque<RatePoint>; Resource::COUNT],
    capacity: usize,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            series: std::array::from_fn(|_| VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn record(&mut self, resource: Resource, point: RatePoint) {
        let series = &mut self.series[resource.index()];
        while series.len() >= self.capacity {
            series.pop_front();
        }
        series.push_back(point);
    }

    pub fn series(&self, resource: Resource) -> &VecDeque<RatePoint> {
        &self.series[resource.index()]
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
