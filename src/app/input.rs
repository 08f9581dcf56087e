use bevy::prelude::*;

use super::resources::{ClockRunState, PlayerAction};

const PRODUCER_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

pub fn handle_keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    run_state: Res<State<ClockRunState>>,
    mut next_run_state: ResMut<NextState<ClockRunState>>,
    mut actions: EventWriter<PlayerAction>,
) {
    if keys.just_pressed(KeyCode::Space) {
        actions.send(PlayerAction::ManualAction { at: None });
    }
    if keys.just_pressed(KeyCode::KeyU) {
        actions.send(PlayerAction::UpgradeManual);
    }
    for (index, key) in PRODUCER_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            actions.send(PlayerAction::BuyProducer(index));
        }
    }

    if keys.just_pressed(KeyCode::F5) {
        actions.send(PlayerAction::Save);
    }
    if keys.just_pressed(KeyCode::F6) {
        actions.send(PlayerAction::Export);
    }
    if keys.just_pressed(KeyCode::F9) {
        actions.send(PlayerAction::Import);
    }

    if keys.just_pressed(KeyCode::KeyP) {
        let next = match run_state.get() {
            ClockRunState::Ticking => ClockRunState::Paused,
            ClockRunState::Paused => ClockRunState::Ticking,
        };
        next_run_state.set(next);
    }
}

pub fn emit_mouse_actions(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut actions: EventWriter<PlayerAction>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let at = windows
        .get_single()
        .ok()
        .and_then(|window| window.cursor_position());
    actions.send(PlayerAction::ManualAction { at });
}
