//! Skills domain: dash and blackhole cooldowns, the sword skill and its projectile.

mod components;
mod cooldown;
mod events;
mod projectile;
mod resources;
mod sword;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AimDot, BlackholeZone, PlayerSkills};
pub use cooldown::{BlackholeSkill, SkillCooldown};
pub use events::{SwordCaught, SwordExpired};
pub use projectile::{
    Anchor, Impact, Sword, SwordBehavior, SwordEvent, SwordParams, SwordPhase, SwordType,
    SwordWorld, reflect,
};
pub use resources::{SkillTuning, SkillUnlocks, SwordTuning};
pub use sword::{SlotOccupied, SwordSkill, SwordSlot, select_type};
pub use systems::{spawn_blackhole, spawn_sword};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::skills::systems::{
    advance_swords, spawn_aim_dots, tick_player_skills, update_aim_dots, update_blackholes,
};

pub struct SkillsPlugin;

impl Plugin for SkillsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SwordTuning>()
            .init_resource::<SkillTuning>()
            .init_resource::<SkillUnlocks>()
            .add_message::<SwordCaught>()
            .add_message::<SwordExpired>()
            .add_systems(Startup, spawn_aim_dots)
            .add_systems(Update, tick_player_skills.in_set(GameplaySet::Tick))
            .add_systems(
                Update,
                (advance_swords, update_blackholes).in_set(GameplaySet::Act),
            )
            .add_systems(Update, update_aim_dots.in_set(GameplaySet::Present));
    }
}
