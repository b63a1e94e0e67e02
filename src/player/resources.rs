//! Player domain: movement tuning and the state re-entry policy.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player::state::PlayerState;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    /// Gravity scale outside dash and blackhole.
    pub gravity_scale: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub wall_jump_duration: f32,
    pub wall_jump_push: f32,
    /// Fraction of `move_speed` available in the air.
    pub air_control: f32,
    /// Fall speed multiplier while sliding without holding down.
    pub wall_slide_factor: f32,
    /// Lunge velocity per combo step.
    pub attack_movement: Vec<[f32; 2]>,
    pub combo_window: f32,
    pub attack_busy: f32,
    /// How long the lunge velocity is held before stopping.
    pub attack_lunge_time: f32,
    pub attack_damage: f32,
    pub counter_attack_duration: f32,
    /// Counter window held open after a successful stun until the clip ends.
    pub counter_success_hold: f32,
    pub sword_return_impact: f32,
    pub catch_busy: f32,
    pub aim_busy: f32,
    /// Blackhole rise time before hovering.
    pub fly_time: f32,
    pub fly_speed: f32,
    pub hover_velocity: f32,
    pub max_health: f32,
    pub size: [f32; 2],
    pub spawn: [f32; 2],
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            jump_force: 12.0,
            gravity_scale: 3.5,
            dash_speed: 25.0,
            dash_duration: 0.2,
            wall_jump_duration: 0.4,
            wall_jump_push: 5.0,
            air_control: 0.8,
            wall_slide_factor: 0.7,
            attack_movement: vec![[3.0, 1.5], [1.0, 2.5], [4.5, 1.5]],
            combo_window: 2.0,
            attack_busy: 0.15,
            attack_lunge_time: 0.1,
            attack_damage: 12.0,
            counter_attack_duration: 0.2,
            counter_success_hold: 10.0,
            sword_return_impact: 7.0,
            catch_busy: 0.1,
            aim_busy: 0.2,
            fly_time: 0.4,
            fly_speed: 15.0,
            hover_velocity: -0.1,
            max_health: 100.0,
            size: [0.8, 1.6],
            spawn: [-3.0, 2.0],
        }
    }
}

impl PlayerTuning {
    /// Lunge for a combo step; the last entry repeats past the end.
    pub fn lunge(&self, step: usize) -> Vec2 {
        self.attack_movement
            .get(step)
            .or(self.attack_movement.last())
            .map(|v| Vec2::from(*v))
            .unwrap_or(Vec2::ZERO)
    }

    pub fn combo_len(&self) -> usize {
        self.attack_movement.len().max(1)
    }
}

/// States that may be re-entered while already active. Re-entering runs the
/// full exit and enter hooks again.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReentryPolicy {
    pub restartable: Vec<PlayerState>,
}

impl Default for ReentryPolicy {
    fn default() -> Self {
        Self {
            restartable: vec![PlayerState::PrimaryAttack],
        }
    }
}
