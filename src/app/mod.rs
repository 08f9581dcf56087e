mod input;
mod resources;
mod setup;
mod simulation;
mod view;

use bevy::prelude::*;

use resources::{ClockRunState, PlayerAction, RuntimeConfig, SessionPhase};

pub struct CosmoAppPlugin;

impl Plugin for CosmoAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SessionPhase>()
            .init_state::<ClockRunState>()
            .init_resource::<RuntimeConfig>()
            .add_event::<PlayerAction>()
            .add_systems(Startup, setup::spawn_camera)
            .add_systems(OnEnter(SessionPhase::Loading), setup::bootstrap_session)
            .add_systems(OnEnter(SessionPhase::Playing), view::spawn_hud)
            .add_systems(OnEnter(ClockRunState::Ticking), simulation::resume_clock)
            .add_systems(OnEnter(ClockRunState::Paused), simulation::pause_clock)
            .add_systems(
                Update,
                (
                    input::handle_keyboard_controls,
                    input::emit_mouse_actions,
                    simulation::apply_player_actions,
                    simulation::tick_simulation,
                    simulation::flush_on_close,
                    view::animate_feedback,
                    view::refresh_hud,
                )
                    .chain()
                    .run_if(in_state(SessionPhase::Playing)),
            );
    }
}
