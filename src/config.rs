use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SAVE_KEY: &str = "cosmoClickerSave";
/// Upper bound for `max_catch_up_ms`, keeping one `advance` call short.
pub const MAX_CATCH_UP_LIMIT_MS: u64 = 60_000;

/// Cadences and limits of the simulation clock and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub tick_interval_ms: u64,
    pub chart_sample_interval_ms: u64,
    pub chart_capacity: usize,
    pub autosave_interval_ms: u64,
    /// Elapsed time beyond this per `advance` call is dropped.
    pub max_catch_up_ms: u64,
    pub save_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            chart_sample_interval_ms: 1000,
            chart_capacity: 20,
            autosave_interval_ms: 5000,
            max_catch_up_ms: 1000,
            save_key: DEFAULT_SAVE_KEY.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn validated(self) -> Result<Self> {
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be positive");
        }
        if self.chart_sample_interval_ms == 0 || self.autosave_interval_ms == 0 {
            bail!("chart and autosave intervals must be positive");
        }
        if self.max_catch_up_ms == 0 || self.max_catch_up_ms > MAX_CATCH_UP_LIMIT_MS {
            bail!(
                "max_catch_up_ms must be between 1 and {MAX_CATCH_UP_LIMIT_MS}, got {}",
                self.max_catch_up_ms
            );
        }
        if self.chart_capacity == 0 {
            bail!("chart_capacity must be at least 1");
        }
        if self.save_key.trim().is_empty() {
            bail!("save_key must not be empty");
        }
        Ok(self)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn chart_sample_interval(&self) -> Duration {
        Duration::from_millis(self.chart_sample_interval_ms)
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_millis(self.autosave_interval_ms)
    }

    pub fn max_catch_up(&self) -> Duration {
        Duration::from_millis(self.max_catch_up_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineConfig, MAX_CATCH_UP_LIMIT_MS};

    #[test]
    fn defaults_match_game_cadences() {
        let config = EngineConfig::default().validated().expect("defaults are valid");
        assert_eq!(config.tick_interval().as_millis(), 100);
        assert_eq!(config.autosave_interval().as_millis(), 5000);
        assert_eq!(config.save_key, "cosmoClickerSave");
    }

    #[test]
    fn zero_intervals_are_rejected() {
        let config = EngineConfig {
            tick_interval_ms: 0,
            ..EngineConfig::default()
        };
        assert!(config.validated().is_err());

        let config = EngineConfig {
            chart_capacity: 0,
            ..EngineConfig::default()
        };
        assert!(config.validated().is_err());
    }

    #[test]
    fn catch_up_window_must_be_positive_and_bounded() {
        let config = EngineConfig {
            max_catch_up_ms: 0,
            ..EngineConfig::default()
        };
        assert!(config.validated().is_err());

        let config = EngineConfig {
            max_catch_up_ms: MAX_CATCH_UP_LIMIT_MS + 1,
            ..EngineConfig::default()
        };
        assert!(config.validated().is_err());

        let config = EngineConfig {
            max_catch_up_ms: MAX_CATCH_UP_LIMIT_MS,
            ..EngineConfig::default()
        };
        assert!(config.validated().is_ok());
    }
}
