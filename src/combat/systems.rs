//! Combat domain: enemy spawning, enemy AI, damage, stuns and deaths.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;

use crate::actor::{
    Actor, Contacts, Facing, GameLayer, Knockback, KnockbackEnd, KnockbackTuning, Probe, Probes,
};
use crate::combat::components::{Enemy, EnemyIntent, EnemyStatus, Health};
use crate::combat::events::{DamageEvent, DeathEvent, HitEffects, SlowEvent, StunEvent};
use crate::combat::resources::EnemyTuning;
use crate::core::{ARENA_FLOOR_Y, GameRng};
use crate::fx::{Ailment, EffectKind, EntityFx, FxTuning, ScreenShake, SpawnEffect};
use crate::player::Player;

const ENEMY_COLOR: Color = Color::srgb(0.8, 0.3, 0.3);
const ENEMY_GRAVITY_SCALE: f32 = 3.0;
/// Hits above this fraction of max health shake the camera.
const HIGH_DAMAGE_FRACTION: f32 = 0.3;

/// Spawn one training enemy standing on the floor at `x`.
pub fn spawn_enemy(
    commands: &mut Commands,
    x: f32,
    tuning: &EnemyTuning,
    knockback: &KnockbackTuning,
) -> Entity {
    let size = Vec2::from(tuning.size);
    let half = size * 0.5;

    let entity = commands
        .spawn((
            Name::new("Training Dummy"),
            Enemy::default(),
            EnemyStatus::default(),
            Health::new(tuning.max_health),
            Actor::new(Facing::Left, Knockback::new(knockback, KnockbackEnd::Keep)),
            Probes {
                ground: Probe {
                    offset: Vec2::new(0.0, -half.y + 0.1),
                    distance: 0.3,
                },
                wall: Probe {
                    offset: Vec2::ZERO,
                    distance: half.x + 0.1,
                },
                attack_offset: Vec2::new(half.x + 0.4, 0.0),
                attack_radius: tuning.attack_range * 0.75,
            },
            Contacts::default(),
            EntityFx::new(ENEMY_COLOR),
            Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(x, ARENA_FLOOR_Y + half.y + 0.05, 1.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(ENEMY_GRAVITY_SCALE),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .id();

    info!("Spawned training enemy at x={:.1}", x);
    entity
}

pub(crate) fn spawn_training_enemies(
    mut commands: Commands,
    tuning: Res<EnemyTuning>,
    knockback: Res<KnockbackTuning>,
) {
    for &x in &tuning.spawn_points {
        spawn_enemy(&mut commands, x, &tuning, &knockback);
    }
}

pub(crate) fn tick_enemy_status(time: Res<Time>, mut query: Query<&mut EnemyStatus>) {
    let dt = time.delta_secs();
    for mut status in &mut query {
        status.tick(dt);
    }
}

pub(crate) fn update_enemies(
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    mut damage_events: MessageWriter<DamageEvent>,
    player_query: Query<(Entity, &Transform), With<Player>>,
    mut enemy_query: Query<
        (
            Entity,
            &Transform,
            &mut Enemy,
            &EnemyStatus,
            &mut Actor,
            &Probes,
            &mut LinearVelocity,
        ),
        Without<Player>,
    >,
) {
    let dt = time.delta_secs();
    let player = player_query
        .iter()
        .next()
        .map(|(entity, transform)| (entity, transform.translation.truncate()));

    for (entity, transform, mut enemy, status, mut actor, probes, mut velocity) in &mut enemy_query
    {
        if status.is_frozen() {
            velocity.x = 0.0;
            continue;
        }

        let position = transform.translation.truncate();
        let to_player = player.map(|(_, player_position)| player_position.x - position.x);

        let intent = enemy.tick(dt, to_player, &tuning);
        let vy = velocity.y;
        match intent {
            EnemyIntent::Hold => {
                actor.set_velocity(&mut velocity.0, 0.0, vy);
                if let Some(dx) = to_player
                    && !enemy.is_stunned()
                {
                    actor.face_towards(0.0, dx);
                }
            }
            EnemyIntent::Move(dir) => {
                actor.set_velocity(&mut velocity.0, dir * tuning.move_speed, vy);
            }
            EnemyIntent::Strike => {
                let Some((player_entity, player_position)) = player else {
                    continue;
                };
                let center = probes.attack_center(position, actor.facing());
                if center.distance(player_position) <= probes.attack_radius + 0.5 {
                    debug!("Enemy {:?} strike connected", entity);
                    damage_events.write(DamageEvent {
                        source: entity,
                        target: player_entity,
                        amount: tuning.attack_damage,
                        source_x: position.x,
                        knockback: Some(Vec2::from(tuning.strike_knockback)),
                        effects: HitEffects {
                            chill: Some((tuning.chill_slow, tuning.chill_duration)),
                            ..default()
                        },
                    });
                }
            }
        }
    }
}

pub(crate) fn apply_stuns(
    mut stun_events: MessageReader<StunEvent>,
    tuning: Res<EnemyTuning>,
    fx_tuning: Res<FxTuning>,
    mut query: Query<(
        &Transform,
        &mut Enemy,
        &mut Actor,
        &mut LinearVelocity,
        &mut EntityFx,
    )>,
) {
    for event in stun_events.read() {
        let Ok((transform, mut enemy, mut actor, mut velocity, mut fx)) =
            query.get_mut(event.target)
        else {
            continue;
        };
        if !enemy.try_stun(tuning.stun_duration) {
            continue;
        }

        actor.setup_knockback_dir(event.source_x, transform.translation.x);
        let push = Vec2::from(tuning.stun_knockback);
        velocity.0 = Vec2::new(push.x * actor.knockback.direction, push.y);
        fx.red_blink(&fx_tuning, tuning.stun_duration);
        debug!("Enemy {:?} stunned by {:?}", event.target, event.source);
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut slow_events: MessageWriter<SlowEvent>,
    mut effect_events: MessageWriter<SpawnEffect>,
    mut shake_events: MessageWriter<ScreenShake>,
    mut rng: ResMut<GameRng>,
    enemy_tuning: Res<EnemyTuning>,
    fx_tuning: Res<FxTuning>,
    mut query: Query<(
        &Transform,
        &mut Health,
        &mut Actor,
        &mut LinearVelocity,
        Option<&mut EnemyStatus>,
        Option<&mut EntityFx>,
        Has<Player>,
    )>,
) {
    for event in damage_events.read() {
        let Ok((transform, mut health, mut actor, mut velocity, status, fx, is_player)) =
            query.get_mut(event.target)
        else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        let position = transform.translation.truncate();
        let mut amount = event.amount;
        if let Some(status) = status.as_ref()
            && status.is_vulnerable()
        {
            amount *= enemy_tuning.vulnerable_multiplier;
        }
        let dealt = health.take_damage(amount);

        actor.setup_knockback_dir(event.source_x, position.x);
        if let Some(power) = event.knockback {
            actor.setup_knockback_power(power);
        }
        actor.hit_knockback(&mut velocity.0, &mut rng.0);

        let effects = event.effects;
        if let Some(mut status) = status {
            if let Some(seconds) = effects.freeze_for {
                status.freeze_for(seconds);
            }
            if let Some(seconds) = effects.vulnerable_for {
                status.vulnerable_for(seconds);
            }
        }
        if let Some((percent, duration)) = effects.chill {
            slow_events.write(SlowEvent {
                target: event.target,
                percent,
                duration,
            });
        }

        if let Some(mut fx) = fx {
            fx.flash(&fx_tuning);
            if let Some(seconds) = effects.freeze_for.or(effects.chill.map(|(_, d)| d)) {
                fx.ailment_for(Ailment::Chill, seconds, &fx_tuning);
            } else if let Some(seconds) = effects.vulnerable_for {
                fx.ailment_for(Ailment::Shock, seconds, &fx_tuning);
            } else if let Some(seconds) = effects.ignite_for {
                fx.ailment_for(Ailment::Ignite, seconds, &fx_tuning);
            }
        }

        let jitter = Vec2::new(
            rng.0.random_range(-0.5..=0.5),
            rng.0.random_range(-0.5..=0.5),
        );
        effect_events.write(SpawnEffect {
            kind: EffectKind::Hit,
            position: position + jitter,
            facing: actor.facing(),
        });

        if is_player && dealt > health.max * HIGH_DAMAGE_FRACTION {
            shake_events.write(ScreenShake {
                power: Vec2::from(fx_tuning.shake_high_damage),
                facing: actor.facing(),
            });
        }

        debug!(
            "Damage {:.1} to {:?} from {:?}, health {:.1}/{:.1}",
            dealt, event.target, event.source, health.current, health.max
        );

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    for event in death_events.read() {
        if let Ok(entity) = enemy_query.get(event.entity) {
            info!("Enemy {:?} defeated", entity);
            commands.entity(entity).despawn();
        }
    }
}
