use std::sync::Arc;

use bevy::prelude::*;
use cosmo_clicker::{
    Catalog, Engine, EngineConfig, FileStore, PersistenceAdapter, SimulationClock,
    SystemTimeSource, TimeSource, load_engine_config_from_path,
};

use super::resources::{RuntimeConfig, SessionPhase, SessionState};

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<SessionPhase>>,
) {
    let engine_config = if config.config_path.exists() {
        load_engine_config_from_path(&config.config_path).unwrap_or_else(|err| {
            warn!("ignoring engine config {}: {err:#}", config.config_path.display());
            EngineConfig::default()
        })
    } else {
        EngineConfig::default()
    };

    let catalog = Arc::new(Catalog::standard());
    let persistence = PersistenceAdapter::new(
        FileStore::new(&config.save_dir),
        engine_config.save_key.clone(),
    );
    let state = persistence.load_or_fresh(&catalog, SystemTimeSource.now_ms());

    let mut clock = SimulationClock::new(engine_config, SystemTimeSource).with_persistence(persistence);
    clock.start();

    commands.insert_resource(SessionState {
        engine: Engine::new(catalog, state),
        clock,
        last_status: None,
    });

    next_phase.set(SessionPhase::Playing);
}
