//! Debug domain: hotkey help and status message overlay.

use bevy::prelude::*;

use crate::debug::state::DebugState;

const HOTKEY_HELP: &str =
    "Ctrl+M sword mode | Ctrl+J dash | Ctrl+E enemy | Ctrl+I invincible | Ctrl+H heal | Ctrl+P snapshot";

/// Marker for the debug overlay text
#[derive(Component)]
pub struct DebugOverlayText;

pub(crate) fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(HOTKEY_HELP),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgba(0.7, 0.7, 0.75, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(12.0),
            ..default()
        },
    ));
}

pub(crate) fn update_debug_overlay(
    debug_state: Res<DebugState>,
    mut query: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !debug_state.is_changed() {
        return;
    }

    let line = match &debug_state.status_message {
        Some((message, _)) => format!("{HOTKEY_HELP}\n[DEBUG] {message}"),
        None => HOTKEY_HELP.to_string(),
    };
    for mut text in &mut query {
        **text = line.clone();
    }
}
