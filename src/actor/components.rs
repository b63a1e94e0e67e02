//! Actor domain: facing, knockback, contact probes and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, ledges)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
}

/// Horizontal facing. Its direction is +1 or -1 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn dir(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Facing implied by a signed horizontal value; `None` for zero.
    pub fn from_sign(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Facing::Right)
        } else if x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// What happens to the knockback power once a knockback ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KnockbackEnd {
    /// A per-hit power override is dropped; the next hit falls back to the
    /// configured power.
    ZeroPower,
    /// A per-hit power override persists between hits.
    #[default]
    Keep,
}

/// Knockback parameters loaded from config.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KnockbackTuning {
    pub power: [f32; 2],
    /// Random horizontal bonus drawn from `[offset[0], offset[1]]`
    pub offset: [f32; 2],
    pub duration: f32,
}

impl Default for KnockbackTuning {
    fn default() -> Self {
        Self {
            power: [7.0, 12.0],
            offset: [0.5, 2.0],
            duration: 0.07,
        }
    }
}

/// Timed velocity override applied on hit.
#[derive(Debug, Clone)]
pub struct Knockback {
    /// Configured power, used whenever no override is set
    pub power: Vec2,
    /// Power set by the attacker for the current hit
    pub power_override: Option<Vec2>,
    pub offset_range: Vec2,
    pub duration: f32,
    /// -1 pushes left, +1 pushes right, 0 before the first directed hit
    pub direction: f32,
    pub on_end: KnockbackEnd,
    timer: f32,
    active: bool,
}

impl Knockback {
    pub fn new(tuning: &KnockbackTuning, on_end: KnockbackEnd) -> Self {
        Self {
            power: Vec2::from(tuning.power),
            power_override: None,
            offset_range: Vec2::from(tuning.offset),
            duration: tuning.duration,
            direction: 0.0,
            on_end,
            timer: 0.0,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn effective_power(&self) -> Vec2 {
        self.power_override.unwrap_or(self.power)
    }
}

/// Shared physical identity of every actor (player and enemies).
#[derive(Component, Debug, Clone)]
pub struct Actor {
    facing: Facing,
    pub knockback: Knockback,
    /// Facing values produced by flips since the last drain
    pending_flips: Vec<Facing>,
}

impl Actor {
    pub fn new(facing: Facing, knockback: Knockback) -> Self {
        Self {
            facing,
            knockback,
            pending_flips: Vec::new(),
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn facing_dir(&self) -> f32 {
        self.facing.dir()
    }

    /// Toggle facing and queue one change notification.
    pub fn flip(&mut self) {
        self.facing = self.facing.flipped();
        self.pending_flips.push(self.facing);
    }

    /// Flip only if `x` points against the current facing.
    pub fn flip_controller(&mut self, x: f32) {
        if let Some(wanted) = Facing::from_sign(x)
            && wanted != self.facing
        {
            self.flip();
        }
    }

    /// Turn to face `target_x` as seen from `from_x`.
    pub fn face_towards(&mut self, from_x: f32, target_x: f32) {
        self.flip_controller(target_x - from_x);
    }

    pub fn is_knocked(&self) -> bool {
        self.knockback.active
    }

    /// Ignored while knocked back.
    pub fn set_velocity(&mut self, velocity: &mut Vec2, x: f32, y: f32) {
        if self.knockback.active {
            return;
        }
        *velocity = Vec2::new(x, y);
        self.flip_controller(x);
    }

    /// Ignored while knocked back.
    pub fn set_zero_velocity(&mut self, velocity: &mut Vec2) {
        if self.knockback.active {
            return;
        }
        *velocity = Vec2::ZERO;
    }

    /// Attacker to the right pushes left and vice versa; equal x keeps the
    /// previous direction.
    pub fn setup_knockback_dir(&mut self, attacker_x: f32, self_x: f32) {
        if attacker_x > self_x {
            self.knockback.direction = -1.0;
        } else if attacker_x < self_x {
            self.knockback.direction = 1.0;
        }
    }

    /// Override the configured power until the end policy drops it.
    pub fn setup_knockback_power(&mut self, power: Vec2) {
        self.knockback.power_override = Some(power);
    }

    /// Start a knockback: apply the impulse and lock velocity writes.
    pub fn hit_knockback(&mut self, velocity: &mut Vec2, rng: &mut impl Rng) {
        let knockback = &mut self.knockback;
        knockback.active = true;
        knockback.timer = knockback.duration;

        let lo = knockback.offset_range.x.min(knockback.offset_range.y);
        let hi = knockback.offset_range.x.max(knockback.offset_range.y);
        let x_offset = rng.random_range(lo..=hi);

        let power = knockback.effective_power();
        if power.x > 0.0 || power.y > 0.0 {
            *velocity = Vec2::new((power.x + x_offset) * knockback.direction, power.y);
        }
    }

    pub fn tick_knockback(&mut self, dt: f32) {
        let knockback = &mut self.knockback;
        if !knockback.active {
            return;
        }
        knockback.timer -= dt;
        if knockback.timer <= 0.0 {
            knockback.active = false;
            if knockback.on_end == KnockbackEnd::ZeroPower {
                knockback.power_override = None;
            }
        }
    }

    pub fn drain_flips(&mut self) -> Vec<Facing> {
        std::mem::take(&mut self.pending_flips)
    }
}

/// A ray probe relative to the actor's position.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub offset: Vec2,
    pub distance: f32,
}

/// Detection probes for ground, wall and melee range.
#[derive(Component, Debug, Clone)]
pub struct Probes {
    pub ground: Probe,
    pub wall: Probe,
    pub attack_offset: Vec2,
    pub attack_radius: f32,
}

impl Probes {
    /// Origin, direction and max distance of the downward ground ray.
    pub fn ground_ray(&self, position: Vec2) -> (Vec2, Dir2, f32) {
        (position + self.ground.offset, Dir2::NEG_Y, self.ground.distance)
    }

    /// Origin, direction and max distance of the wall ray in facing direction.
    pub fn wall_ray(&self, position: Vec2, facing: Facing) -> (Vec2, Dir2, f32) {
        let dir = match facing {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        };
        (position + self.wall.offset, dir, self.wall.distance)
    }

    /// Center of the melee check circle.
    pub fn attack_center(&self, position: Vec2, facing: Facing) -> Vec2 {
        position + Vec2::new(self.attack_offset.x * facing.dir(), self.attack_offset.y)
    }
}

/// Contact flags refreshed every frame from the probes.
#[derive(Component, Debug, Default, Clone, Copy, Serialize)]
pub struct Contacts {
    pub grounded: bool,
    pub wall: bool,
}
