//! Player domain: spawning, state stepping and request application.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::actor::{
    Actor, Contacts, Facing, GameLayer, Knockback, KnockbackEnd, KnockbackTuning, Probe, Probes,
};
use crate::animation::{AnimationCue, AnimationCueEvent, AnimationTuning, Animator};
use crate::combat::{DamageEvent, DeathEvent, Enemy, Health, HitEffects, SlowEvent, StunEvent};
use crate::core::ARENA_FLOOR_Y;
use crate::fx::{EffectKind, EntityFx, FxTuning, PlayerFx, ScreenShake, SpawnEffect};
use crate::player::components::{
    CounterTarget, PendingRequests, Player, PlayerController, PlayerRequest,
};
use crate::player::input::PlayerInput;
use crate::player::resources::{PlayerTuning, ReentryPolicy};
use crate::player::state::{PlayerState, PlayerStateMachine};
use crate::player::states::{PlayerCtx, run_frame};
use crate::skills::{
    PlayerSkills, SkillTuning, SkillUnlocks, Sword, SwordCaught, SwordSlot, SwordTuning,
    spawn_blackhole, spawn_sword,
};

const PLAYER_COLOR: Color = Color::srgb(0.85, 0.9, 0.95);

#[allow(clippy::too_many_arguments)]
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<PlayerTuning>,
    knockback: Res<KnockbackTuning>,
    animation: Res<AnimationTuning>,
    skill_tuning: Res<SkillTuning>,
    sword_tuning: Res<SwordTuning>,
    unlocks: Res<SkillUnlocks>,
    reentry: Res<ReentryPolicy>,
) {
    let size = Vec2::from(tuning.size);
    let half = size * 0.5;
    let spawn = Vec2::from(tuning.spawn);

    commands.spawn((
        (
            Name::new("Player"),
            Player,
            PlayerStateMachine::new(&reentry),
            PlayerController::new(&tuning),
            PendingRequests::default(),
            PlayerSkills::new(unlocks.clone(), &skill_tuning, &sword_tuning),
            SwordSlot::default(),
            Health::new(tuning.max_health),
        ),
        (
            Actor::new(
                Facing::Right,
                Knockback::new(&knockback, KnockbackEnd::ZeroPower),
            ),
            Probes {
                ground: Probe {
                    offset: Vec2::new(0.0, -half.y + 0.1),
                    distance: 0.3,
                },
                wall: Probe {
                    offset: Vec2::ZERO,
                    distance: half.x + 0.15,
                },
                attack_offset: Vec2::new(half.x + 0.5, 0.0),
                attack_radius: 0.9,
            },
            Contacts::default(),
            Animator::new(&animation),
            EntityFx::new(PLAYER_COLOR),
            PlayerFx::default(),
        ),
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(spawn.x, ARENA_FLOOR_Y + spawn.y.max(half.y), 2.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(tuning.gravity_scale),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    info!("Spawned player at ({:.1}, {:.1})", spawn.x, spawn.y);
}

pub(crate) fn tick_player_controller(
    time: Res<Time>,
    mut query: Query<(&mut PlayerController, &mut Animator), With<Player>>,
) {
    let dt = time.delta_secs();
    for (mut controller, mut animator) in &mut query {
        if controller.tick(dt) {
            animator.set_speed(1.0);
            debug!("Player speed restored");
        }
    }
}

/// Route animation cues: clip ends reach the state machine, strike frames
/// become melee hits.
pub(crate) fn forward_animation_cues(
    mut cue_events: MessageReader<AnimationCueEvent>,
    mut damage_events: MessageWriter<DamageEvent>,
    tuning: Res<PlayerTuning>,
    mut player_query: Query<(&Transform, &Actor, &Probes, &mut PlayerStateMachine), With<Player>>,
    enemy_query: Query<(Entity, &Transform), (With<Enemy>, Without<Player>)>,
) {
    for event in cue_events.read() {
        let Ok((transform, actor, probes, mut machine)) = player_query.get_mut(event.entity) else {
            continue;
        };

        match event.cue {
            AnimationCue::Finished => machine.animation_finish_trigger(),
            AnimationCue::Strike => {
                let position = transform.translation.truncate();
                let center = probes.attack_center(position, actor.facing());
                for (enemy, enemy_transform) in &enemy_query {
                    if enemy_transform.translation.truncate().distance(center)
                        > probes.attack_radius
                    {
                        continue;
                    }
                    damage_events.write(DamageEvent {
                        source: event.entity,
                        target: enemy,
                        amount: tuning.attack_damage,
                        source_x: position.x,
                        knockback: None,
                        effects: HitEffects::default(),
                    });
                }
            }
        }
    }
}

/// Run one state update per player. Also performs the deferred
/// initialization, death and sword-catch transitions.
#[allow(clippy::type_complexity)]
pub(crate) fn step_player_state(
    time: Res<Time>,
    input: Res<PlayerInput>,
    tuning: Res<PlayerTuning>,
    enemy_query: Query<(Entity, &Transform, &Enemy), Without<Player>>,
    mut player_query: Query<
        (
            &Transform,
            &Contacts,
            &Probes,
            &Health,
            &SwordSlot,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Actor,
            &mut PlayerController,
            &mut PlayerStateMachine,
            &mut Animator,
            &mut PlayerSkills,
            &mut PendingRequests,
        ),
        With<Player>,
    >,
) {
    let counter_targets: Vec<CounterTarget> = enemy_query
        .iter()
        .map(|(entity, transform, enemy)| CounterTarget {
            entity,
            position: transform.translation.truncate(),
            window_open: enemy.counter_window_open(),
        })
        .collect();

    for (
        transform,
        contacts,
        probes,
        health,
        slot,
        mut velocity,
        mut gravity,
        mut actor,
        mut controller,
        mut machine,
        mut animator,
        mut skills,
        mut requests,
    ) in &mut player_query
    {
        let mut ctx = PlayerCtx {
            dt: time.delta_secs(),
            now: time.elapsed_secs(),
            input: &input,
            contacts: *contacts,
            tuning: &tuning,
            probes,
            position: transform.translation.truncate(),
            velocity: &mut velocity.0,
            gravity_scale: &mut gravity.0,
            actor: &mut *actor,
            controller: &mut *controller,
            animator: &mut *animator,
            skills: &mut *skills,
            sword_slot: slot,
            sword_position: None,
            counter_targets: &counter_targets,
            requests: &mut requests.0,
        };

        if machine.current().is_none() {
            machine.initialize(PlayerState::Idle, &mut ctx);
            continue;
        }

        if health.is_dead() {
            if !machine.is_in(PlayerState::Dead) {
                machine.change_state(PlayerState::Dead, &mut ctx);
            }
            run_frame(&mut machine, &mut ctx);
            continue;
        }

        if let Some(sword_position) = ctx.controller.take_catch() {
            ctx.controller.busy.clear();
            ctx.sword_position = Some(sword_position);
            if machine.change_state(PlayerState::CatchSword, &mut ctx) {
                info!("Player caught the sword");
            }
            ctx.sword_position = None;
        }

        run_frame(&mut machine, &mut ctx);
    }
}

/// Apply what the state step asked for: sword launch and recall, stuns,
/// blackhole casts and feedback.
#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_player_requests(
    mut commands: Commands,
    skill_tuning: Res<SkillTuning>,
    fx_tuning: Res<FxTuning>,
    mut stun_events: MessageWriter<StunEvent>,
    mut shake_events: MessageWriter<ScreenShake>,
    mut effect_events: MessageWriter<SpawnEffect>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &Actor,
            &PlayerSkills,
            &mut SwordSlot,
            &mut PendingRequests,
            &mut EntityFx,
            &mut PlayerFx,
        ),
        With<Player>,
    >,
    mut sword_query: Query<&mut Sword>,
) {
    for (entity, transform, actor, skills, mut slot, mut requests, mut fx, mut player_fx) in
        &mut player_query
    {
        let position = transform.translation.truncate();

        for request in std::mem::take(&mut requests.0) {
            match request {
                PlayerRequest::LaunchSword { aim, sword_type } => {
                    if let Some(existing) = slot.current() {
                        warn!("Sword launch ignored: {:?} is still out", existing);
                        continue;
                    }
                    let sword = skills.sword.launch(entity, aim, sword_type);
                    let sword_entity = spawn_sword(&mut commands, sword, position);
                    if let Err(err) = slot.assign(sword_entity) {
                        warn!("{}", err);
                    }
                }
                PlayerRequest::RecallSword => {
                    let Some(sword_entity) = slot.current() else {
                        continue;
                    };
                    match sword_query.get_mut(sword_entity) {
                        Ok(mut sword) => {
                            if sword.recall() {
                                debug!("Recalling sword {:?}", sword_entity);
                            }
                        }
                        Err(_) => {
                            // despawned without notice; free the slot
                            slot.release(sword_entity);
                        }
                    }
                }
                PlayerRequest::Stun(target) => {
                    stun_events.write(StunEvent {
                        source: entity,
                        target,
                        source_x: position.x,
                    });
                }
                PlayerRequest::ScreenShake => {
                    shake_events.write(ScreenShake {
                        power: Vec2::from(fx_tuning.shake_sword_impact),
                        facing: actor.facing(),
                    });
                }
                PlayerRequest::Dust => {
                    effect_events.write(SpawnEffect {
                        kind: EffectKind::Dust,
                        position: Vec2::new(position.x, position.y - 0.7),
                        facing: actor.facing(),
                    });
                }
                PlayerRequest::AfterImage => {
                    if player_fx.try_after_image(fx_tuning.after_image_cooldown) {
                        effect_events.write(SpawnEffect {
                            kind: EffectKind::AfterImage,
                            position,
                            facing: actor.facing(),
                        });
                    }
                }
                PlayerRequest::SetTransparent(transparent) => fx.set_transparent(transparent),
                PlayerRequest::CastBlackhole => {
                    info!("Blackhole cast at ({:.1}, {:.1})", position.x, position.y);
                    spawn_blackhole(&mut commands, entity, position, &skill_tuning);
                }
            }
        }
    }
}

/// Catches are applied by the next state step.
pub(crate) fn queue_sword_catches(
    mut caught_events: MessageReader<SwordCaught>,
    mut query: Query<&mut PlayerController, With<Player>>,
) {
    for event in caught_events.read() {
        if let Ok(mut controller) = query.get_mut(event.owner) {
            controller.queue_catch(event.position);
        }
    }
}

pub(crate) fn apply_player_slows(
    mut slow_events: MessageReader<SlowEvent>,
    mut query: Query<(&mut PlayerController, &mut Animator), With<Player>>,
) {
    for event in slow_events.read() {
        let Ok((mut controller, mut animator)) = query.get_mut(event.target) else {
            continue;
        };
        let factor = controller.slow_by(event.percent, event.duration);
        animator.set_speed(factor);
        debug!(
            "Player slowed by {:.0}% for {:.1}s",
            event.percent * 100.0,
            event.duration
        );
    }
}

pub(crate) fn handle_player_death(
    mut death_events: MessageReader<DeathEvent>,
    mut query: Query<&mut EntityFx, With<Player>>,
) {
    for event in death_events.read() {
        if let Ok(mut fx) = query.get_mut(event.entity) {
            fx.cancel_all();
        }
    }
}
