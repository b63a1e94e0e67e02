//! Combat domain: enemies, health, damage, stuns and deaths.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Enemy, EnemyIntent, EnemyPhase, EnemyStatus, Health};
pub use events::{DamageEvent, DeathEvent, HitEffects, SlowEvent, StunEvent};
pub use resources::EnemyTuning;
pub use systems::spawn_enemy;

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, apply_stuns, process_deaths, spawn_training_enemies, tick_enemy_status,
    update_enemies,
};
use crate::core::GameplaySet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_message::<DamageEvent>()
            .add_message::<StunEvent>()
            .add_message::<SlowEvent>()
            .add_message::<DeathEvent>()
            .add_systems(Startup, spawn_training_enemies)
            .add_systems(Update, tick_enemy_status.in_set(GameplaySet::Tick))
            .add_systems(Update, update_enemies.in_set(GameplaySet::Decide))
            .add_systems(
                Update,
                (apply_stuns, apply_damage, process_deaths)
                    .chain()
                    .in_set(GameplaySet::Resolve),
            );
    }
}
