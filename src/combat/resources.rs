//! Combat domain: enemy tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub max_health: f32,
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_damage: f32,
    pub attack_cooldown: f32,
    /// Wind-up before a strike; the counter window is open during it.
    pub telegraph_time: f32,
    pub recover_time: f32,
    pub stun_duration: f32,
    /// Velocity applied when a counter stuns the enemy.
    pub stun_knockback: [f32; 2],
    /// Knockback power a strike applies to the player.
    pub strike_knockback: [f32; 2],
    /// Damage multiplier while vulnerable.
    pub vulnerable_multiplier: f32,
    /// Movement slow applied to the player by a strike.
    pub chill_slow: f32,
    pub chill_duration: f32,
    pub size: [f32; 2],
    /// Spawn x positions for the training dummies.
    pub spawn_points: Vec<f32>,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_health: 60.0,
            move_speed: 2.5,
            detection_range: 8.0,
            attack_range: 1.5,
            attack_damage: 10.0,
            attack_cooldown: 2.0,
            telegraph_time: 0.5,
            recover_time: 0.4,
            stun_duration: 1.0,
            stun_knockback: [6.0, 8.0],
            strike_knockback: [9.0, 10.0],
            vulnerable_multiplier: 1.5,
            chill_slow: 0.25,
            chill_duration: 1.0,
            size: [0.9, 1.6],
            spawn_points: vec![6.0, -9.0],
        }
    }
}
