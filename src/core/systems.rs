//! Core domain: camera setup, camera shake and pause toggling.

use bevy::prelude::*;

use crate::core::resources::{CameraShake, GameplayPaused};
use crate::fx::FxTuning;

/// World units per screen pixel; 1 unit is roughly one character width.
const CAMERA_SCALE: f32 = 1.0 / 40.0;
const CAMERA_HOME: Vec3 = Vec3::new(0.0, 4.0, 0.0);

#[derive(Component, Debug)]
pub struct MainCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(CAMERA_HOME),
    ));
}

pub(crate) fn apply_camera_shake(
    time: Res<Time>,
    tuning: Res<FxTuning>,
    mut shake: ResMut<CameraShake>,
    mut camera: Query<&mut Transform, With<MainCamera>>,
) {
    let offset = shake.decay(time.delta_secs(), tuning.shake_decay);
    for mut transform in &mut camera {
        transform.translation = CAMERA_HOME + offset.extend(0.0);
    }
}

/// Escape toggles pause: gameplay systems stop and virtual time freezes, so
/// physics and every countdown halt together.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    paused.toggle("menu");
    if paused.is_paused() {
        time.pause();
        info!("Gameplay paused");
    } else {
        time.unpause();
        info!("Gameplay resumed");
    }
}
