use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::psi::Resource;
use crate::psi::aggregator::{RateAggregator, Round};
use crate::psi::error::RoundError;
use crate::psi::history::{HistoryStore, RatePoint};
use crate::psi::reader::PressureFile;
use crate::psi::sampler::SamplerPool;

pub struct App {
    pub running: bool,
    aggregator: RateAggregator,
    pub history: HistoryStore,
    latest: [Option<f64>; Resource::COUNT],
    started: Instant,
}

impl App {
    /// App over the live /proc/pressure sources.
    pub fn new() -> Self {
        Self::with_pool(SamplerPool::spawn(PressureFile::new))
    }

    /// App over an arbitrary sampler pool; tests supply scripted sources
    /// through this.
    pub fn with_pool(pool: SamplerPool) -> Self {
        App {
            running: true,
            aggregator: RateAggregator::new(pool),
            history: HistoryStore::default(),
            latest: [None; Resource::COUNT],
            started: Instant::now(),
        }
    }

    /// Runs one synchronized sampling round, updating the latest rates and
    /// the rolling history. A failed round is surfaced to the caller; the
    /// delta baseline survives it.
    pub async fn poll_round(&mut self) -> Result<(), RoundError> {
        let now = Instant::now();
        match self.aggregator.tick(now).await? {
            Round::ColdStart => {}
            Round::Complete(samples) => {
                let at = now.duration_since(self.started).as_secs_f64();
                for sample in samples {
                    self.latest[sample.resource.index()] = Some(sample.pct);
                    self.history.record(
                        sample.resource,
                        RatePoint {
                            at,
                            pct: sample.pct,
                        },
                    );
                }
                debug!(elapsed_secs = at, "round complete");
            }
        }
        Ok(())
    }

    pub fn latest_pct(&self, resource: Resource) -> Option<f64> {
        self.latest[resource.index()]
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            _ => {}
        }
    }
}
