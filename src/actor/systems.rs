//! Actor domain: contact detection, knockback timers and facing notifications.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::actor::components::{Actor, Contacts, Facing, GameLayer, Probes};
use crate::actor::events::FacingChanged;

pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Actor, &Probes, &mut Contacts)>,
) {
    let terrain_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (transform, actor, probes, mut contacts) in &mut query {
        let position = transform.translation.truncate();

        let (origin, direction, distance) = probes.ground_ray(position);
        let grounded = spatial_query
            .cast_ray(origin, direction, distance, true, &terrain_filter)
            .is_some();

        let (origin, direction, distance) = probes.wall_ray(position, actor.facing());
        let wall = spatial_query
            .cast_ray(origin, direction, distance, true, &terrain_filter)
            .is_some();

        if contacts.grounded != grounded || contacts.wall != wall {
            debug!("Contacts changed: grounded={}, wall={}", grounded, wall);
        }
        contacts.grounded = grounded;
        contacts.wall = wall;
    }
}

pub(crate) fn tick_knockback(time: Res<Time>, mut query: Query<&mut Actor>) {
    let dt = time.delta_secs();
    for mut actor in &mut query {
        actor.tick_knockback(dt);
    }
}

/// Emit `FacingChanged` for every flip and mirror the sprite.
pub(crate) fn publish_facing_changes(
    mut facing_events: MessageWriter<FacingChanged>,
    mut query: Query<(Entity, &mut Actor, Option<&mut Sprite>)>,
) {
    for (entity, mut actor, sprite) in &mut query {
        let flips = actor.drain_flips();
        if flips.is_empty() {
            continue;
        }
        for facing in flips {
            facing_events.write(FacingChanged { entity, facing });
        }
        if let Some(mut sprite) = sprite {
            sprite.flip_x = actor.facing() == Facing::Left;
        }
    }
}
