//! Skills domain: tuning and unlock resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwordTuning {
    /// Per-axis launch force applied to the normalized aim direction.
    pub launch_force: [f32; 2],
    /// Gravity scale of a Regular sword.
    pub sword_gravity: f32,
    pub bounce_amount: u32,
    pub bounce_gravity: f32,
    pub bounce_speed: f32,
    /// Search radius for the next bounce target.
    pub bounce_radius: f32,
    pub pierce_amount: u32,
    pub pierce_gravity: f32,
    pub spin_gravity: f32,
    pub spin_max_travel: f32,
    pub spin_duration: f32,
    pub spin_hit_cooldown: f32,
    pub spin_radius: f32,
    /// How long a stuck sword stays catchable before it despawns.
    pub freeze_window: f32,
    /// A sword still flying after this long despawns.
    pub max_flight_time: f32,
    pub return_speed: f32,
    pub catch_radius: f32,
    /// Overlap radius for striking enemies in flight.
    pub hit_radius: f32,
    pub damage: f32,
    pub time_stop_duration: f32,
    pub vulnerable_duration: f32,
    pub dot_count: usize,
    pub dot_spacing: f32,
}

impl Default for SwordTuning {
    fn default() -> Self {
        Self {
            launch_force: [18.0, 20.0],
            sword_gravity: 4.5,
            bounce_amount: 4,
            bounce_gravity: 4.0,
            bounce_speed: 20.0,
            bounce_radius: 10.0,
            pierce_amount: 2,
            pierce_gravity: 0.5,
            spin_gravity: 1.0,
            spin_max_travel: 7.0,
            spin_duration: 2.0,
            spin_hit_cooldown: 0.35,
            spin_radius: 1.0,
            freeze_window: 5.0,
            max_flight_time: 7.0,
            return_speed: 12.0,
            catch_radius: 1.0,
            hit_radius: 0.75,
            damage: 10.0,
            time_stop_duration: 1.0,
            vulnerable_duration: 4.0,
            dot_count: 20,
            dot_spacing: 0.07,
        }
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillTuning {
    pub dash_cooldown: f32,
    pub blackhole_cooldown: f32,
    /// How long a cast blackhole stays open.
    pub blackhole_duration: f32,
    pub blackhole_radius: f32,
    pub blackhole_tick: f32,
    pub blackhole_damage: f32,
}

impl Default for SkillTuning {
    fn default() -> Self {
        Self {
            dash_cooldown: 1.0,
            blackhole_cooldown: 10.0,
            blackhole_duration: 3.0,
            blackhole_radius: 4.0,
            blackhole_tick: 0.5,
            blackhole_damage: 5.0,
        }
    }
}

/// Skill unlock flags. Unlock state is not persisted between runs.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillUnlocks {
    pub dash: bool,
    pub counter: bool,
    pub blackhole: bool,
    pub sword: bool,
    pub bounce: bool,
    pub pierce: bool,
    pub spin: bool,
    pub time_stop: bool,
    pub vulnerable: bool,
}

impl Default for SkillUnlocks {
    fn default() -> Self {
        Self {
            dash: true,
            counter: true,
            blackhole: true,
            sword: true,
            bounce: false,
            pierce: false,
            spin: false,
            time_stop: false,
            vulnerable: false,
        }
    }
}
