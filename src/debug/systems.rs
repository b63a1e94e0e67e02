//! Debug domain: hotkeys and runtime tweaks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::{Actor, KnockbackTuning};
use crate::combat::{EnemyTuning, Health, spawn_enemy};
use crate::debug::snapshot::PlayerSnapshot;
use crate::debug::state::{DebugState, cycle_sword_mode};
use crate::player::{Player, PlayerController, PlayerStateMachine};
use crate::skills::{PlayerSkills, SkillUnlocks, SwordSlot};

const MESSAGE_SECONDS: f32 = 2.0;
/// Horizontal distance in front of the player for debug spawns
const SPAWN_AHEAD: f32 = 4.0;

fn ctrl_pressed(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight)
}

/// Ctrl+M cycles the sword mode, Ctrl+J toggles dash, Ctrl+E spawns an
/// enemy, Ctrl+I toggles invincibility and Ctrl+H heals.
#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut unlocks: ResMut<SkillUnlocks>,
    enemy_tuning: Res<EnemyTuning>,
    knockback: Res<KnockbackTuning>,
    mut player_query: Query<(&Transform, &Actor, &mut PlayerSkills, &mut Health), With<Player>>,
) {
    if !ctrl_pressed(&keyboard) {
        return;
    }

    let mut unlocks_changed = false;

    if keyboard.just_pressed(KeyCode::KeyM) {
        *unlocks = cycle_sword_mode(&unlocks);
        unlocks_changed = true;
        let mode = crate::skills::select_type(&unlocks);
        debug_state.set_message(format!("Sword mode: {:?}", mode), MESSAGE_SECONDS);
        info!("[DEBUG] Sword mode set to {:?}", mode);
    }

    if keyboard.just_pressed(KeyCode::KeyJ) {
        unlocks.dash = !unlocks.dash;
        unlocks_changed = true;
        let msg = if unlocks.dash { "Dash ON" } else { "Dash OFF" };
        debug_state.set_message(msg, MESSAGE_SECONDS);
        info!("[DEBUG] {}", msg);
    }

    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.invincible = !debug_state.invincible;
        let msg = if debug_state.invincible {
            "Invincibility ON"
        } else {
            "Invincibility OFF"
        };
        debug_state.set_message(msg, MESSAGE_SECONDS);
        info!("[DEBUG] {}", msg);
    }

    for (transform, actor, mut skills, mut health) in &mut player_query {
        if unlocks_changed {
            skills.unlocks = unlocks.clone();
        }

        if keyboard.just_pressed(KeyCode::KeyE) {
            let x = transform.translation.x + SPAWN_AHEAD * actor.facing_dir();
            spawn_enemy(&mut commands, x, &enemy_tuning, &knockback);
            debug_state.set_message("Spawned enemy", MESSAGE_SECONDS);
            info!("[DEBUG] Spawned enemy at x={:.1}", x);
        }

        if keyboard.just_pressed(KeyCode::KeyH) {
            if health.is_dead() {
                debug_state.set_message("Player is dead", MESSAGE_SECONDS);
            } else {
                health.current = health.max;
                debug_state.set_message("Full Heal", MESSAGE_SECONDS);
                info!("[DEBUG] Full heal");
            }
        }
    }
}

/// Ctrl+P logs a JSON snapshot of the player.
#[allow(clippy::type_complexity)]
pub(crate) fn dump_player_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &Actor,
            &Health,
            &PlayerController,
            &PlayerStateMachine,
            &PlayerSkills,
            &SwordSlot,
        ),
        With<Player>,
    >,
) {
    if !ctrl_pressed(&keyboard) || !keyboard.just_pressed(KeyCode::KeyP) {
        return;
    }

    for (transform, velocity, actor, health, controller, machine, skills, slot) in &player_query {
        let snapshot = PlayerSnapshot::capture(
            machine,
            controller,
            actor,
            skills,
            slot,
            health,
            transform.translation.truncate(),
            velocity.0,
        );
        match snapshot.to_json() {
            Ok(json) => {
                info!("[DEBUG] Player snapshot:\n{}", json);
                debug_state.set_message("Snapshot written to log", MESSAGE_SECONDS);
            }
            Err(err) => warn!("[DEBUG] Snapshot failed: {}", err),
        }
    }
}

pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<&mut Health, With<Player>>,
) {
    if !debug_state.invincible {
        return;
    }
    for mut health in &mut player_query {
        if !health.is_dead() && health.current < health.max {
            health.current = health.max;
        }
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if debug_state.status_message.is_some() {
        debug_state.tick_message(time.delta_secs());
    }
}
