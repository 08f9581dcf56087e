use bevy::prelude::*;
use cosmo_clicker::format_energy;

use super::resources::{ClockRunState, FloatingFeedback, HudText, RuntimeConfig, SessionState};

pub const FEEDBACK_COLOR: Color = Color::srgb(0.0, 0.83, 1.0);

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Initializing..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.94, 0.97, 0.99)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn refresh_hud(
    session: Res<SessionState>,
    run_state: Res<State<ClockRunState>>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let engine = &session.engine;
    let state = engine.state();
    let run_label = match run_state.get() {
        ClockRunState::Ticking => "TICKING",
        ClockRunState::Paused => "PAUSED",
    };

    let mut lines = vec![
        format!(
            "Energy: {}  ({}/s)  Lifetime: {}  [{}]",
            format_energy(state.resource()),
            format_energy(engine.total_production_rate()),
            format_energy(state.lifetime_resource()),
            run_label,
        ),
        format!(
            "{}[U] Signal Booster  Lvl {}  cost {}",
            affordable_marker(engine.can_afford_manual_upgrade()),
            state.manual_action_level(),
            format_energy(engine.manual_upgrade_cost()),
        ),
    ];

    for (index, def) in engine.catalog().list_all().iter().enumerate() {
        let cost = engine.producer_cost(&def.id).unwrap_or(0.0);
        lines.push(format!(
            "{}[{}] {} x{}  cost {}  +{}/s each",
            affordable_marker(engine.can_afford_producer(&def.id)),
            index + 1,
            def.name,
            state.producer_count(&def.id),
            format_energy(cost),
            format_energy(def.base_income),
        ));
    }

    let chart = session.clock.chart();
    if let (Some(first), Some(last)) = (chart.iter().next(), chart.latest()) {
        lines.push(format!(
            "Trend ({} samples): {} -> {}",
            chart.len(),
            format_energy(first.resource),
            format_energy(last.resource),
        ));
    }

    lines.push(
        session
            .last_status
            .clone()
            .unwrap_or_else(|| "Space/click extract, P pause, F5 save, F6 export, F9 import".to_string()),
    );

    *hud = Text::new(lines.join("\n"));
}

pub fn animate_feedback(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<RuntimeConfig>,
    mut feedback: Query<(Entity, &mut FloatingFeedback, &mut Node, &mut TextColor)>,
) {
    for (entity, mut entry, mut node, mut color) in &mut feedback {
        entry.timer.tick(time.delta());
        if entry.timer.finished() {
            commands.entity(entity).despawn();
            continue;
        }
        let progress = entry.timer.fraction();
        node.top = Val::Px(entry.origin.y - config.feedback_rise_px * progress);
        color.0 = FEEDBACK_COLOR.with_alpha(1.0 - progress);
    }
}

fn affordable_marker(affordable: bool) -> &'static str {
    if affordable { "* " } else { "  " }
}
