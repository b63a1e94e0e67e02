//! FX domain: sprite colour updates, camera impulses and effect sprites.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::actor::Facing;
use crate::core::CameraShake;
use crate::fx::components::{EntityFx, FadingEffect, PlayerFx};
use crate::fx::events::{EffectKind, ScreenShake, SpawnEffect};
use crate::fx::resources::FxTuning;

const EFFECT_Z: f32 = 5.0;
const AFTER_IMAGE_Z: f32 = 0.5;

pub(crate) fn tick_entity_fx(time: Res<Time>, mut query: Query<(&mut EntityFx, &mut Sprite)>) {
    let dt = time.delta_secs();
    for (mut fx, mut sprite) in &mut query {
        fx.tick(dt);
        sprite.color = fx.color();
    }
}

pub(crate) fn tick_player_fx(time: Res<Time>, mut query: Query<&mut PlayerFx>) {
    let dt = time.delta_secs();
    for mut fx in &mut query {
        fx.tick(dt);
    }
}

pub(crate) fn apply_screen_shake(
    mut shake_events: MessageReader<ScreenShake>,
    tuning: Res<FxTuning>,
    mut shake: ResMut<CameraShake>,
) {
    for event in shake_events.read() {
        let impulse = Vec2::new(event.power.x * event.facing.dir(), event.power.y);
        shake.add_impulse(impulse * tuning.shake_multiplier);
    }
}

fn effect_look(kind: EffectKind) -> (Color, Vec2) {
    match kind {
        EffectKind::Hit => (Color::srgb(1.0, 0.95, 0.6), Vec2::splat(0.6)),
        EffectKind::Dust => (Color::srgba(0.8, 0.75, 0.65, 0.8), Vec2::new(1.2, 0.3)),
        EffectKind::AfterImage => (Color::srgba(0.6, 0.8, 1.0, 0.6), Vec2::new(0.8, 1.6)),
    }
}

pub(crate) fn spawn_effects(
    mut commands: Commands,
    mut effect_events: MessageReader<SpawnEffect>,
    tuning: Res<FxTuning>,
) {
    for event in effect_events.read() {
        let (color, size) = effect_look(event.kind);
        let (lifetime, z) = match event.kind {
            EffectKind::Hit => (tuning.hit_lifetime, EFFECT_Z),
            EffectKind::Dust => (tuning.dust_lifetime, EFFECT_Z),
            EffectKind::AfterImage => (
                color.alpha() / tuning.after_image_fade.max(0.01),
                AFTER_IMAGE_Z,
            ),
        };

        commands.spawn((
            Name::new(format!("{:?} Effect", event.kind)),
            FadingEffect {
                remaining: lifetime,
                fade_rate: color.alpha() / lifetime.max(0.01),
            },
            Sprite {
                color,
                custom_size: Some(size),
                flip_x: event.facing == Facing::Left,
                ..default()
            },
            Transform::from_translation(event.position.extend(z)),
        ));
    }
}

pub(crate) fn fade_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FadingEffect, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (entity, mut effect, mut sprite) in &mut query {
        effect.remaining -= dt;
        if effect.remaining <= 0.0 {
            commands.entity(entity).despawn();
            continue;
        }
        let alpha = (sprite.color.alpha() - effect.fade_rate * dt).max(0.0);
        sprite.color.set_alpha(alpha);
    }
}
