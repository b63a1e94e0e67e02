//! Sword skill: mode selection, aiming, trajectory preview and launch.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::actor::Facing;
use crate::skills::projectile::{Sword, SwordBehavior, SwordParams, SwordType};
use crate::skills::resources::{SkillUnlocks, SwordTuning};

/// Active sword mode for the given unlocks, `None` while the sword itself is
/// locked. Bounce, Spin and Pierce override in that order.
pub fn select_type(unlocks: &SkillUnlocks) -> Option<SwordType> {
    if !unlocks.sword {
        return None;
    }
    let mut selected = SwordType::Regular;
    if unlocks.bounce {
        selected = SwordType::Bounce;
    }
    if unlocks.spin {
        selected = SwordType::Spin;
    }
    if unlocks.pierce {
        selected = SwordType::Pierce;
    }
    Some(selected)
}

#[derive(Debug, Clone)]
pub struct SwordSkill {
    pub tuning: SwordTuning,
    /// Whether the aim dots are shown.
    pub dots_active: bool,
}

impl SwordSkill {
    pub fn new(tuning: SwordTuning) -> Self {
        Self {
            tuning,
            dots_active: false,
        }
    }

    pub fn gravity_for(&self, sword_type: SwordType) -> f32 {
        match sword_type {
            SwordType::Regular => self.tuning.sword_gravity,
            SwordType::Bounce => self.tuning.bounce_gravity,
            SwordType::Pierce => self.tuning.pierce_gravity,
            SwordType::Spin => self.tuning.spin_gravity,
        }
    }

    /// Vector from the player to the pointer; straight ahead when the
    /// pointer sits on the player.
    pub fn aim_direction(&self, player: Vec2, pointer: Vec2, facing: Facing) -> Vec2 {
        let direction = pointer - player;
        if direction.length_squared() <= f32::EPSILON {
            Vec2::new(facing.dir(), 0.0)
        } else {
            direction
        }
    }

    pub fn launch_velocity(&self, aim: Vec2) -> Vec2 {
        aim.normalize_or_zero() * Vec2::from(self.tuning.launch_force)
    }

    /// Predicted position `t` seconds after launch.
    pub fn dot_position(&self, origin: Vec2, velocity: Vec2, gravity: Vec2, scale: f32, t: f32) -> Vec2 {
        origin + velocity * t + 0.5 * (gravity * scale) * (t * t)
    }

    /// Dot `i` samples the parabola at `t = i * dot_spacing`.
    pub fn dot_positions(
        &self,
        origin: Vec2,
        aim: Vec2,
        sword_type: SwordType,
        gravity: Vec2,
    ) -> Vec<Vec2> {
        let velocity = self.launch_velocity(aim);
        let scale = self.gravity_for(sword_type);
        (0..self.tuning.dot_count)
            .map(|i| {
                let t = i as f32 * self.tuning.dot_spacing;
                self.dot_position(origin, velocity, gravity, scale, t)
            })
            .collect()
    }

    pub fn behavior_for(&self, sword_type: SwordType) -> SwordBehavior {
        match sword_type {
            SwordType::Regular => SwordBehavior::Regular,
            SwordType::Bounce => SwordBehavior::Bounce {
                remaining: self.tuning.bounce_amount,
                speed: self.tuning.bounce_speed,
                radius: self.tuning.bounce_radius,
                homing: None,
            },
            SwordType::Pierce => SwordBehavior::Pierce {
                remaining: self.tuning.pierce_amount,
                struck: HashSet::new(),
            },
            SwordType::Spin => SwordBehavior::Spin {
                max_travel: self.tuning.spin_max_travel,
                duration: self.tuning.spin_duration,
                hit_cooldown: self.tuning.spin_hit_cooldown,
                cooldowns: HashMap::new(),
            },
        }
    }

    pub fn params(&self) -> SwordParams {
        SwordParams {
            freeze_window: self.tuning.freeze_window,
            max_flight_time: self.tuning.max_flight_time,
            return_speed: self.tuning.return_speed,
            catch_radius: self.tuning.catch_radius,
            hit_radius: self.tuning.hit_radius,
            spin_radius: self.tuning.spin_radius,
        }
    }

    /// Build the projectile for a release along `aim`.
    pub fn launch(&self, owner: Entity, aim: Vec2, sword_type: SwordType) -> Sword {
        Sword::new(
            owner,
            self.launch_velocity(aim),
            self.gravity_for(sword_type),
            self.behavior_for(sword_type),
            self.params(),
        )
    }
}

/// Rejected assignment into an occupied sword slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOccupied(pub Entity);

impl std::fmt::Display for SlotOccupied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sword slot already holds {:?}", self.0)
    }
}

/// The single sword a player currently owns.
#[derive(Component, Debug, Default, Clone)]
pub struct SwordSlot {
    sword: Option<Entity>,
}

impl SwordSlot {
    pub fn current(&self) -> Option<Entity> {
        self.sword
    }

    pub fn is_empty(&self) -> bool {
        self.sword.is_none()
    }

    pub fn assign(&mut self, sword: Entity) -> Result<(), SlotOccupied> {
        if let Some(existing) = self.sword {
            return Err(SlotOccupied(existing));
        }
        self.sword = Some(sword);
        Ok(())
    }

    /// Empty the slot if it holds `sword`.
    pub fn release(&mut self, sword: Entity) -> bool {
        if self.sword == Some(sword) {
            self.sword = None;
            true
        } else {
            false
        }
    }
}
