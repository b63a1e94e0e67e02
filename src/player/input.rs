//! Player domain: per-frame input sampling.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use serde::Serialize;

use crate::core::MainCamera;

/// Directional intent plus the discrete action edges of one frame.
#[derive(Resource, Debug, Default, Clone, Serialize)]
pub struct PlayerInput {
    /// Raw axes in {-1, 0, 1}.
    pub axis: Vec2,
    pub jump: bool,
    pub attack: bool,
    pub dash: bool,
    pub counter: bool,
    pub blackhole: bool,
    pub aim_pressed: bool,
    pub aim_held: bool,
    pub aim_released: bool,
    /// Pointer position in world space; last known value when off-screen.
    pub pointer: Vec2,
}

fn axis(keyboard: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut value = 0.0;
    if keyboard.any_pressed(negative) {
        value -= 1.0;
    }
    if keyboard.any_pressed(positive) {
        value += 1.0;
    }
    value
}

pub(crate) fn read_player_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut input: ResMut<PlayerInput>,
) {
    input.axis = Vec2::new(
        axis(
            &keyboard,
            [KeyCode::KeyA, KeyCode::ArrowLeft],
            [KeyCode::KeyD, KeyCode::ArrowRight],
        ),
        axis(
            &keyboard,
            [KeyCode::KeyS, KeyCode::ArrowDown],
            [KeyCode::KeyW, KeyCode::ArrowUp],
        ),
    );
    input.jump = keyboard.just_pressed(KeyCode::Space);
    input.attack = mouse.just_pressed(MouseButton::Left);
    input.dash = keyboard.just_pressed(KeyCode::ShiftLeft);
    input.counter = keyboard.just_pressed(KeyCode::KeyQ);
    input.blackhole = keyboard.just_pressed(KeyCode::KeyR);
    input.aim_pressed = mouse.just_pressed(MouseButton::Right);
    input.aim_held = mouse.pressed(MouseButton::Right);
    input.aim_released = mouse.just_released(MouseButton::Right);

    let Ok(window) = window_query.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position()
        && let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor)
    {
        input.pointer = world;
    }
}
