use std::path::PathBuf;

use bevy::prelude::*;
use cosmo_clicker::{Engine, SimulationClock};

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub save_dir: PathBuf,
    /// Optional JSON engine config; defaults apply when the file is absent.
    pub config_path: PathBuf,
    pub export_file_name: String,
    pub feedback_lifetime_secs: f32,
    pub feedback_rise_px: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("saves"),
            config_path: PathBuf::from("cosmo.json"),
            export_file_name: "export.txt".to_string(),
            feedback_lifetime_secs: 0.8,
            feedback_rise_px: 80.0,
        }
    }
}

impl RuntimeConfig {
    pub fn export_path(&self) -> PathBuf {
        self.save_dir.join(&self.export_file_name)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum SessionPhase {
    #[default]
    Loading,
    Playing,
}

/// Mirrors the simulation clock's Running/Stopped state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum ClockRunState {
    #[default]
    Ticking,
    Paused,
}

#[derive(Resource, Debug)]
pub struct SessionState {
    pub engine: Engine,
    pub clock: SimulationClock,
    pub last_status: Option<String>,
}

#[derive(Event, Debug, Clone, Copy)]
pub enum PlayerAction {
    /// Cursor position in window coordinates, when the action came from a click.
    ManualAction { at: Option<Vec2> },
    UpgradeManual,
    BuyProducer(usize),
    Save,
    Export,
    Import,
}

#[derive(Component, Debug)]
pub struct FloatingFeedback {
    pub origin: Vec2,
    pub timer: Timer,
}

#[derive(Component)]
pub struct HudText;
