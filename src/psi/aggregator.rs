use std::time::{Duration, Instant};

use tracing::debug;

use super::Resource;
use super::error::RoundError;
use super::sampler::SamplerPool;

/// Counters for every resource, captured at a single logical point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    taken_at: Instant,
    totals: [u64; Resource::COUNT],
}

impl Snapshot {
    fn total(&self, resource: Resource) -> u64 {
        self.totals[resource.index()]
    }
}

/// Outcome of one successful sampling round.
#[derive(Debug)]
pub enum Round {
    /// First successful round ever: a baseline now exists, but no rate can
    /// be derived until a second sample separated in time arrives.
    ColdStart,
    Complete(Vec<RateSample>),
}

#[derive(Debug, Clone, Copy)]
pub struct RateSample {
    pub resource: Resource,
    pub pct: f64,
}

/// Percentage of `elapsed` during which the resource was stalled, derived
/// from two consecutive cumulative counters in microseconds.
///
/// A zero elapsed time reports 0 instead of dividing; a regressed counter
/// clamps the delta to zero. Rates above 100 pass through unchanged, the
/// meter flags them visually.
pub fn stall_pct(prev_total: u64, cur_total: u64, elapsed: Duration) -> f64 {
    let stalled_us = cur_total.saturating_sub(prev_total);
    let elapsed_us = elapsed.as_micros();
    if elapsed_us == 0 {
        return 0.0;
    }
    100.0 * stalled_us as f64 / elapsed_us as f64
}

/// Drives synchronized rounds against the sampler pool and converts counter
/// deltas into percentage rates.
pub struct RateAggregator {
    pool: SamplerPool,
    prev: Option<Snapshot>,
}

impl RateAggregator {
    pub fn new(pool: SamplerPool) -> Self {
        Self { pool, prev: None }
    }

    /// Runs one round at `now`.
    ///
    /// The stored snapshot is replaced only when the whole round succeeds.
    /// Any failure leaves the previous baseline untouched, so the next
    /// successful round computes deltas against the pre-failure counters.
    pub async fn tick(&mut self, now: Instant) -> Result<Round, RoundError> {
        let totals = self.pool.sample_all().await?;
        let current = Snapshot {
            taken_at: now,
            totals,
        };

        let round = match &self.prev {
            None => {
                debug!("cold start: baseline snapshot stored");
                Round::ColdStart
            }
            Some(prev) => {
                let elapsed = now.saturating_duration_since(prev.taken_at);
                let samples = Resource::ALL
                    .iter()
                    .map(|&resource| RateSample {
                        resource,
                        pct: stall_pct(prev.total(resource), current.total(resource), elapsed),
                    })
                    .collect();
                Round::Complete(samples)
            }
        };

        self.prev = Some(current);
        Ok(round)
    }
}
