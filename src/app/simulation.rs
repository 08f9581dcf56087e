use std::fs;

use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::window::WindowCloseRequested;
use cosmo_clicker::{Engine, export_state, import_state};

use super::resources::{FloatingFeedback, PlayerAction, RuntimeConfig, SessionState};
use super::view::FEEDBACK_COLOR;

pub fn apply_player_actions(
    mut commands: Commands,
    mut actions: EventReader<PlayerAction>,
    mut session: ResMut<SessionState>,
    config: Res<RuntimeConfig>,
    windows: Query<&Window>,
) {
    let SessionState {
        engine,
        clock,
        last_status,
    } = &mut *session;

    for action in actions.read() {
        match *action {
            PlayerAction::ManualAction { at } => {
                let amount = engine.perform_manual_action();
                let origin = at
                    .or_else(|| {
                        windows
                            .get_single()
                            .ok()
                            .map(|window| Vec2::new(window.width(), window.height()) * 0.5)
                    })
                    .unwrap_or(Vec2::ZERO);
                spawn_feedback(&mut commands, &config, origin, amount);
            }
            PlayerAction::UpgradeManual => {
                if let Err(err) = engine.try_purchase_manual_upgrade() {
                    *last_status = Some(err.to_string());
                }
            }
            PlayerAction::BuyProducer(index) => {
                let Some(id) = engine.catalog().list_all().get(index).map(|def| def.id.clone())
                else {
                    continue;
                };
                if let Err(err) = engine.try_purchase_producer(&id) {
                    *last_status = Some(err.to_string());
                }
            }
            PlayerAction::Save => {
                let result = clock.try_flush(engine);
                *last_status = Some(status_line("saved", result));
            }
            PlayerAction::Export => {
                let result = export_save(engine, &config);
                *last_status = Some(status_line("exported", result));
            }
            PlayerAction::Import => {
                let result = import_save(engine, &config);
                *last_status = Some(status_line("imported", result));
            }
        }
    }
}

pub fn tick_simulation(time: Res<Time>, mut session: ResMut<SessionState>) {
    let SessionState { engine, clock, .. } = &mut *session;
    clock.advance(time.delta(), engine);
}

pub fn flush_on_close(
    mut close_requests: EventReader<WindowCloseRequested>,
    session: Res<SessionState>,
) {
    if close_requests.read().count() > 0 {
        session.clock.flush(&session.engine);
    }
}

pub fn resume_clock(session: Option<ResMut<SessionState>>) {
    if let Some(mut session) = session {
        session.clock.start();
    }
}

pub fn pause_clock(session: Option<ResMut<SessionState>>) {
    if let Some(mut session) = session {
        session.clock.stop();
    }
}

fn spawn_feedback(commands: &mut Commands, config: &RuntimeConfig, origin: Vec2, amount: f64) {
    commands.spawn((
        Name::new("FloatingFeedback"),
        FloatingFeedback {
            origin,
            timer: Timer::from_seconds(config.feedback_lifetime_secs, TimerMode::Once),
        },
        Text::new(format!("+{}", cosmo_clicker::format_energy(amount))),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(FEEDBACK_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(origin.x),
            top: Val::Px(origin.y),
            ..default()
        },
    ));
}

fn export_save(engine: &Engine, config: &RuntimeConfig) -> Result<()> {
    let encoded = export_state(engine.state())?;
    let path = config.export_path();
    fs::create_dir_all(&config.save_dir)
        .with_context(|| format!("failed creating {}", config.save_dir.display()))?;
    fs::write(&path, encoded).with_context(|| format!("failed writing {}", path.display()))
}

fn import_save(engine: &mut Engine, config: &RuntimeConfig) -> Result<()> {
    let path = config.export_path();
    let encoded =
        fs::read_to_string(&path).with_context(|| format!("failed reading {}", path.display()))?;
    let state = import_state(&encoded, engine.catalog())?;
    engine.replace_state(state);
    Ok(())
}

fn status_line(done: &str, result: Result<()>) -> String {
    match result {
        Ok(()) => format!("Save: {done}"),
        Err(err) => {
            warn!("save action failed: {err:#}");
            format!("Save: {err:#}")
        }
    }
}
