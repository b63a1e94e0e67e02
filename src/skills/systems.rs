//! Skills domain: sword flight, aim preview, cooldown ticking and blackhole zones.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::actor::{Actor, GameLayer};
use crate::combat::{DamageEvent, Enemy, EnemyStatus, HitEffects};
use crate::fx::{FxTuning, ScreenShake};
use crate::player::{Player, PlayerInput};
use crate::skills::components::{AimDot, BlackholeZone, PlayerSkills};
use crate::skills::events::{SwordCaught, SwordExpired};
use crate::skills::projectile::{Impact, Sword, SwordEvent, SwordPhase, SwordWorld};
use crate::skills::resources::{SkillTuning, SkillUnlocks, SwordTuning};
use crate::skills::sword::SwordSlot;

const SWORD_COLOR: Color = Color::srgb(0.85, 0.85, 0.95);
const SWORD_SIZE: Vec2 = Vec2::new(0.9, 0.2);
const SWORD_Z: f32 = 2.0;
/// Stuck swords sit slightly off the surface they hit.
const SURFACE_OFFSET: f32 = 0.05;
/// Radians per second while spinning.
const SPIN_RATE: f32 = 20.0;

const DOT_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.7);
const DOT_SIZE: f32 = 0.15;

const BLACKHOLE_COLOR: Color = Color::srgba(0.1, 0.0, 0.2, 0.6);

/// Spawn a launched sword at `position`.
pub fn spawn_sword(commands: &mut Commands, sword: Sword, position: Vec2) -> Entity {
    let sword_type = sword.sword_type();
    let velocity = sword.velocity;
    let entity = commands
        .spawn((
            Name::new(format!("{:?} Sword", sword_type)),
            sword,
            Sprite {
                color: SWORD_COLOR,
                custom_size: Some(SWORD_SIZE),
                ..default()
            },
            Transform::from_translation(position.extend(SWORD_Z))
                .with_rotation(Quat::from_rotation_z(velocity.to_angle())),
        ))
        .id();

    info!(
        "Launched {:?} sword {:?} with velocity ({:.1}, {:.1})",
        sword_type, entity, velocity.x, velocity.y
    );
    entity
}

/// Spawn the blackhole area centred on `position`.
pub fn spawn_blackhole(
    commands: &mut Commands,
    owner: Entity,
    position: Vec2,
    tuning: &SkillTuning,
) -> Entity {
    let zone = BlackholeZone::new(owner, tuning);
    let diameter = zone.radius * 2.0;
    commands
        .spawn((
            Name::new("Blackhole"),
            zone,
            Sprite {
                color: BLACKHOLE_COLOR,
                custom_size: Some(Vec2::splat(diameter)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
        ))
        .id()
}

fn sword_hit_effects(unlocks: &SkillUnlocks, tuning: &SwordTuning) -> HitEffects {
    HitEffects {
        freeze_for: unlocks.time_stop.then_some(tuning.time_stop_duration),
        vulnerable_for: unlocks.vulnerable.then_some(tuning.vulnerable_duration),
        ..default()
    }
}

/// Advance every sword one frame: kinematics, terrain ray casts, target
/// overlaps, then the resulting damage, catch and expiry messages.
#[allow(clippy::too_many_arguments)]
pub(crate) fn advance_swords(
    mut commands: Commands,
    time: Res<Time>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    tuning: Res<SwordTuning>,
    fx_tuning: Res<FxTuning>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut caught_events: MessageWriter<SwordCaught>,
    mut expired_events: MessageWriter<SwordExpired>,
    mut shake_events: MessageWriter<ScreenShake>,
    mut sword_query: Query<(Entity, &mut Sword, &mut Transform)>,
    mut owner_query: Query<(&Transform, &Actor, &PlayerSkills, &mut SwordSlot), Without<Sword>>,
    enemy_query: Query<(Entity, &Transform), (With<Enemy>, Without<Sword>)>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }
    let targets: Vec<(Entity, Vec2)> = enemy_query
        .iter()
        .map(|(entity, transform)| (entity, transform.translation.truncate()))
        .collect();
    let terrain_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (entity, mut sword, mut transform) in &mut sword_query {
        let Ok((owner_transform, owner_actor, owner_skills, mut slot)) =
            owner_query.get_mut(sword.owner)
        else {
            // owner gone; nobody can catch this sword
            commands.entity(entity).despawn();
            continue;
        };

        let world = SwordWorld {
            gravity: gravity.0,
            owner_position: owner_transform.translation.truncate(),
            targets: &targets,
        };
        let mut events = Vec::new();
        let position = transform.translation.truncate();

        let mut next = sword.on_update(position, dt, &world, &mut events);

        if sword.is_flying() {
            let travel = next - position;
            if let Ok(direction) = Dir2::new(travel)
                && let Some(hit) = spatial_query.cast_ray(
                    position,
                    direction,
                    travel.length(),
                    true,
                    &terrain_filter,
                )
            {
                let point = position + *direction * hit.distance;
                next = point + hit.normal * SURFACE_OFFSET;
                sword.on_impact(
                    Impact::Terrain {
                        point,
                        normal: hit.normal,
                    },
                    next,
                    &world,
                    &mut events,
                );
            }
        }

        for impact in sword.track_overlaps(next, &targets) {
            sword.on_impact(impact, next, &world, &mut events);
        }

        transform.translation = next.extend(SWORD_Z);
        match sword.phase {
            SwordPhase::Flying | SwordPhase::Returning => {
                if sword.velocity.length_squared() > f32::EPSILON {
                    transform.rotation = Quat::from_rotation_z(sword.velocity.to_angle());
                }
            }
            SwordPhase::Spinning { .. } => transform.rotate_z(SPIN_RATE * dt),
            SwordPhase::Stuck { .. } => {}
        }

        let effects = sword_hit_effects(&owner_skills.unlocks, &tuning);
        for event in events {
            match event {
                SwordEvent::Damage(target) => {
                    damage_events.write(DamageEvent {
                        source: sword.owner,
                        target,
                        amount: tuning.damage,
                        source_x: next.x,
                        knockback: None,
                        effects,
                    });
                }
                SwordEvent::Redirected { velocity } => {
                    debug!(
                        "Sword {:?} redirected to ({:.1}, {:.1})",
                        entity, velocity.x, velocity.y
                    );
                }
                SwordEvent::Stuck => {
                    debug!("Sword {:?} stuck at ({:.1}, {:.1})", entity, next.x, next.y);
                    shake_events.write(ScreenShake {
                        power: Vec2::from(fx_tuning.shake_sword_impact),
                        facing: owner_actor.facing(),
                    });
                }
                SwordEvent::SpinStarted => debug!("Sword {:?} started spinning", entity),
                SwordEvent::Caught => {
                    caught_events.write(SwordCaught {
                        owner: sword.owner,
                        sword: entity,
                        position: next,
                    });
                    slot.release(entity);
                    commands.entity(entity).despawn();
                    break;
                }
                SwordEvent::Expired => {
                    info!("Sword {:?} expired uncaught", entity);
                    expired_events.write(SwordExpired {
                        owner: sword.owner,
                        sword: entity,
                        sword_type: sword.sword_type(),
                    });
                    slot.release(entity);
                    commands.entity(entity).despawn();
                    break;
                }
            }
        }
    }
}

pub(crate) fn spawn_aim_dots(mut commands: Commands, tuning: Res<SwordTuning>) {
    for index in 0..tuning.dot_count {
        commands.spawn((
            Name::new("Aim Dot"),
            AimDot { index },
            Sprite {
                color: DOT_COLOR,
                custom_size: Some(Vec2::splat(DOT_SIZE)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, SWORD_Z),
            Visibility::Hidden,
        ));
    }
}

/// Reposition the aim dots along the predicted arc while the player aims.
pub(crate) fn update_aim_dots(
    input: Res<PlayerInput>,
    gravity: Res<Gravity>,
    player_query: Query<(&Transform, &Actor, &PlayerSkills), With<Player>>,
    mut dot_query: Query<(&AimDot, &mut Transform, &mut Visibility), Without<Player>>,
) {
    let preview = player_query.iter().next().and_then(|(transform, actor, skills)| {
        if !skills.sword.dots_active {
            return None;
        }
        let sword_type = skills.sword_type()?;
        let origin = transform.translation.truncate();
        let aim = skills
            .sword
            .aim_direction(origin, input.pointer, actor.facing());
        Some(
            skills
                .sword
                .dot_positions(origin, aim, sword_type, gravity.0),
        )
    });

    for (dot, mut transform, mut visibility) in &mut dot_query {
        match preview.as_ref().and_then(|points| points.get(dot.index)) {
            Some(point) => {
                transform.translation = point.extend(SWORD_Z);
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

pub(crate) fn tick_player_skills(time: Res<Time>, mut query: Query<&mut PlayerSkills>) {
    let dt = time.delta_secs();
    for mut skills in &mut query {
        skills.tick(dt);
    }
}

/// Hold enemies inside each blackhole and damage them on every pulse.
pub(crate) fn update_blackholes(
    mut commands: Commands,
    time: Res<Time>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut zone_query: Query<(Entity, &mut BlackholeZone, &Transform)>,
    mut enemy_query: Query<(Entity, &Transform, &mut EnemyStatus), With<Enemy>>,
) {
    let dt = time.delta_secs();
    for (entity, mut zone, transform) in &mut zone_query {
        let center = transform.translation.truncate();
        let pulse = zone.tick(dt);

        for (enemy, enemy_transform, mut status) in &mut enemy_query {
            if enemy_transform.translation.truncate().distance(center) > zone.radius {
                continue;
            }
            status.freeze_for(dt * 2.0);
            if pulse {
                damage_events.write(DamageEvent {
                    source: zone.owner,
                    target: enemy,
                    amount: zone.damage,
                    source_x: center.x,
                    knockback: None,
                    effects: HitEffects {
                        ignite_for: Some(zone.tick_interval),
                        ..default()
                    },
                });
            }
        }

        if zone.is_expired() {
            debug!("Blackhole {:?} closed", entity);
            commands.entity(entity).despawn();
        }
    }
}
