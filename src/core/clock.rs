use std::time::Duration;

use anyhow::{Result, anyhow};
use tracing::{debug, info};

use super::chart::{ChartHistory, ChartSample};
use super::engine::Engine;
use super::time::TimeSource;
use crate::config::EngineConfig;
use crate::save::PersistenceAdapter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockState {
    #[default]
    Stopped,
    Running,
}

/// What one `advance` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClockReport {
    pub ticks: u32,
    pub credited: f64,
    pub samples: u32,
    pub saves: u32,
}

/// Accumulates elapsed time and reports how many whole intervals passed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Cadence {
    interval: Duration,
    accumulated: Duration,
}

impl Cadence {
    fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
        }
    }

    fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let fired = self.accumulated.as_nanos() / self.interval.as_nanos();
        let fired = u32::try_from(fired).unwrap_or(u32::MAX);
        self.accumulated -= self.interval * fired;
        fired
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// Drives income accrual, chart sampling and autosave from elapsed time.
///
/// The clock never owns the game. Callers hand it the [`Engine`] on every
/// `advance`/`pump`, so ticks and API calls are serialized by the borrow
/// checker. It is cooperative: `stop` takes effect immediately because no
/// tick can be in flight while the caller holds `&mut self`.
pub struct SimulationClock {
    config: EngineConfig,
    state: ClockState,
    time: Box<dyn TimeSource>,
    last_pump_ms: Option<u64>,
    tick: Cadence,
    sample: Cadence,
    autosave: Cadence,
    chart: ChartHistory,
    persistence: Option<PersistenceAdapter>,
}

impl std::fmt::Debug for SimulationClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationClock")
            .field("state", &self.state)
            .field("chart_len", &self.chart.len())
            .field("persistence", &self.persistence)
            .finish_non_exhaustive()
    }
}

impl SimulationClock {
    pub fn new(config: EngineConfig, time: impl TimeSource + 'static) -> Self {
        Self {
            tick: Cadence::new(config.tick_interval()),
            sample: Cadence::new(config.chart_sample_interval()),
            autosave: Cadence::new(config.autosave_interval()),
            chart: ChartHistory::new(config.chart_capacity),
            config,
            state: ClockState::Stopped,
            time: Box::new(time),
            last_pump_ms: None,
            persistence: None,
        }
    }

    pub fn with_persistence(mut self, persistence: PersistenceAdapter) -> Self {
        self.persistence = Some(persistence);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    pub fn chart(&self) -> &ChartHistory {
        &self.chart
    }

    pub fn persistence(&self) -> Option<&PersistenceAdapter> {
        self.persistence.as_ref()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = ClockState::Running;
        self.last_pump_ms = Some(self.time.now_ms());
        info!(
            tick_ms = self.config.tick_interval_ms,
            autosave_ms = self.config.autosave_interval_ms,
            "simulation clock started"
        );
    }

    /// No tick, sample or autosave happens after this returns, and partial
    /// intervals are discarded.
    pub fn stop(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = ClockState::Stopped;
        self.last_pump_ms = None;
        self.tick.reset();
        self.sample.reset();
        self.autosave.reset();
        info!("simulation clock stopped");
    }

    /// Advances by the time the source reports since the previous pump.
    pub fn pump(&mut self, engine: &mut Engine) -> ClockReport {
        if !self.is_running() {
            return ClockReport::default();
        }
        let now = self.time.now_ms();
        let previous = self.last_pump_ms.replace(now).unwrap_or(now);
        let elapsed = Duration::from_millis(now.saturating_sub(previous));
        self.advance(elapsed, engine)
    }

    pub fn advance(&mut self, elapsed: Duration, engine: &mut Engine) -> ClockReport {
        let mut report = ClockReport::default();
        if !self.is_running() {
            return report;
        }

        let elapsed = elapsed.min(self.config.max_catch_up());
        let tick_interval = self.tick.interval;
        let tick_seconds = tick_interval.as_secs_f64();

        for _ in 0..self.tick.advance(elapsed) {
            report.ticks += 1;
            let rate = engine.total_production_rate();
            report.credited += engine.accrue(rate * tick_seconds);

            if self.sample.advance(tick_interval) > 0 {
                self.chart.push(ChartSample {
                    timestamp_ms: self.time.now_ms(),
                    resource: engine.state().resource(),
                });
                report.samples += 1;
            }

            if self.autosave.advance(tick_interval) > 0 {
                if let Some(persistence) = &self.persistence {
                    persistence.save(engine.state());
                    report.saves += 1;
                }
            }
        }

        if report.ticks > 0 {
            debug!(
                ticks = report.ticks,
                credited = report.credited,
                "simulation advanced"
            );
        }
        report
    }

    /// Saves right away, e.g. from a shutdown hook. Works while stopped.
    pub fn flush(&self, engine: &Engine) {
        if let Some(persistence) = &self.persistence {
            persistence.save(engine.state());
        }
    }

    /// Like [`flush`](Self::flush) but reports failures, including a clock
    /// with no store attached.
    pub fn try_flush(&self, engine: &Engine) -> Result<()> {
        let persistence = self
            .persistence
            .as_ref()
            .ok_or_else(|| anyhow!("no save store attached"))?;
        persistence.try_save(engine.state())
    }
}
