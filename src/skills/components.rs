//! Skills domain: per-player skill loadout and skill-spawned entities.

use bevy::prelude::*;

use crate::skills::cooldown::{BlackholeSkill, SkillCooldown};
use crate::skills::projectile::SwordType;
use crate::skills::resources::{SkillTuning, SkillUnlocks, SwordTuning};
use crate::skills::sword::{SwordSkill, select_type};

/// Skills owned by a player, injected into state logic.
#[derive(Component, Debug, Clone)]
pub struct PlayerSkills {
    pub unlocks: SkillUnlocks,
    pub dash: SkillCooldown,
    pub blackhole: BlackholeSkill,
    pub sword: SwordSkill,
}

impl PlayerSkills {
    pub fn new(unlocks: SkillUnlocks, skills: &SkillTuning, sword: &SwordTuning) -> Self {
        Self {
            unlocks,
            dash: SkillCooldown::new(skills.dash_cooldown),
            blackhole: BlackholeSkill::new(skills.blackhole_cooldown, skills.blackhole_duration),
            sword: SwordSkill::new(sword.clone()),
        }
    }

    pub fn sword_type(&self) -> Option<SwordType> {
        select_type(&self.unlocks)
    }

    pub fn tick(&mut self, dt: f32) {
        self.dash.tick(dt);
        self.blackhole.tick(dt);
    }

    /// Dash is usable: unlocked and off cooldown. Consumes the cooldown.
    pub fn try_dash(&mut self) -> bool {
        self.unlocks.dash && self.dash.try_use()
    }

    pub fn blackhole_ready(&self) -> bool {
        self.unlocks.blackhole && self.blackhole.ready()
    }
}

/// Trajectory preview marker; `index` is the sample number along the arc.
#[derive(Component, Debug)]
pub struct AimDot {
    pub index: usize,
}

/// Area left by the blackhole skill: holds enemies in place and damages
/// them on a fixed interval.
#[derive(Component, Debug)]
pub struct BlackholeZone {
    pub owner: Entity,
    pub remaining: f32,
    pub radius: f32,
    pub tick_interval: f32,
    pub tick_timer: f32,
    pub damage: f32,
}

impl BlackholeZone {
    pub fn new(owner: Entity, tuning: &SkillTuning) -> Self {
        Self {
            owner,
            remaining: tuning.blackhole_duration,
            radius: tuning.blackhole_radius,
            tick_interval: tuning.blackhole_tick,
            tick_timer: tuning.blackhole_tick,
            damage: tuning.blackhole_damage,
        }
    }

    /// Advance timers; true when a damage pulse is due this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.tick_timer -= dt;
        if self.tick_timer <= 0.0 {
            self.tick_timer += self.tick_interval;
            true
        } else {
            false
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }
}
