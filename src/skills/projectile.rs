//! Thrown sword: flight kinematics and per-mode impact behavior.
//!
//! The sword is kinematic. Flight follows the same analytic parabola the aim
//! dots preview, terrain is found by ray casts between frames and enemies by
//! overlap. Each mode is a `SwordBehavior` variant dispatched through
//! `on_impact` and `on_update`.

use bevy::prelude::*;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwordType {
    Regular,
    Bounce,
    Pierce,
    Spin,
}

/// Per-sword constants copied from tuning at launch.
#[derive(Debug, Clone, Copy)]
pub struct SwordParams {
    pub freeze_window: f32,
    pub max_flight_time: f32,
    pub return_speed: f32,
    pub catch_radius: f32,
    pub hit_radius: f32,
    pub spin_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub target: Entity,
    pub offset: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwordPhase {
    Flying,
    /// Frozen in place (or riding an enemy) and catchable.
    Stuck {
        remaining: f32,
        anchor: Option<Anchor>,
    },
    Spinning {
        remaining: f32,
    },
    Returning,
}

#[derive(Debug, Clone)]
pub enum SwordBehavior {
    Regular,
    Bounce {
        remaining: u32,
        speed: f32,
        radius: f32,
        homing: Option<Entity>,
    },
    Pierce {
        remaining: u32,
        struck: HashSet<Entity>,
    },
    Spin {
        max_travel: f32,
        duration: f32,
        hit_cooldown: f32,
        cooldowns: HashMap<Entity, f32>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Impact {
    Terrain { point: Vec2, normal: Vec2 },
    Target { entity: Entity, position: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwordEvent {
    Damage(Entity),
    Redirected { velocity: Vec2 },
    Stuck,
    SpinStarted,
    Caught,
    Expired,
}

/// What the sword can see of the world during one frame.
#[derive(Debug, Clone, Copy)]
pub struct SwordWorld<'a> {
    pub gravity: Vec2,
    pub owner_position: Vec2,
    pub targets: &'a [(Entity, Vec2)],
}

impl SwordWorld<'_> {
    fn position_of(&self, entity: Entity) -> Option<Vec2> {
        self.targets
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, p)| *p)
    }
}

enum ImpactOutcome {
    Continue,
    Stick,
    Spin,
}

#[derive(Component, Debug, Clone)]
pub struct Sword {
    /// Player that threw the sword. Not owned.
    pub owner: Entity,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub traveled: f32,
    pub flight_time: f32,
    pub phase: SwordPhase,
    pub behavior: SwordBehavior,
    pub params: SwordParams,
    touching: HashSet<Entity>,
}

impl Sword {
    pub fn new(
        owner: Entity,
        velocity: Vec2,
        gravity_scale: f32,
        behavior: SwordBehavior,
        params: SwordParams,
    ) -> Self {
        Self {
            owner,
            velocity,
            gravity_scale,
            traveled: 0.0,
            flight_time: 0.0,
            phase: SwordPhase::Flying,
            behavior,
            params,
            touching: HashSet::new(),
        }
    }

    pub fn sword_type(&self) -> SwordType {
        match self.behavior {
            SwordBehavior::Regular => SwordType::Regular,
            SwordBehavior::Bounce { .. } => SwordType::Bounce,
            SwordBehavior::Pierce { .. } => SwordType::Pierce,
            SwordBehavior::Spin { .. } => SwordType::Spin,
        }
    }

    pub fn is_flying(&self) -> bool {
        self.phase == SwordPhase::Flying
    }

    pub fn is_stuck(&self) -> bool {
        matches!(self.phase, SwordPhase::Stuck { .. })
    }

    /// Homing bounces fly straight; everything else falls.
    pub fn effective_gravity(&self) -> f32 {
        match self.behavior {
            SwordBehavior::Bounce {
                homing: Some(_), ..
            } => 0.0,
            _ => self.gravity_scale,
        }
    }

    /// Send the sword back to its owner. False if it is already returning.
    pub fn recall(&mut self) -> bool {
        if self.phase == SwordPhase::Returning {
            return false;
        }
        self.phase = SwordPhase::Returning;
        self.velocity = Vec2::ZERO;
        self.touching.clear();
        true
    }

    /// Advance one frame and return the new position. Terrain along the way
    /// is resolved by the caller through `on_impact`.
    pub fn on_update(
        &mut self,
        position: Vec2,
        dt: f32,
        world: &SwordWorld,
        events: &mut Vec<SwordEvent>,
    ) -> Vec2 {
        match self.phase {
            SwordPhase::Flying => self.update_flight(position, dt, world, events),
            SwordPhase::Stuck { .. } => self.update_stuck(position, dt, world, events),
            SwordPhase::Spinning { .. } => {
                self.update_spin(position, dt, world, events);
                position
            }
            SwordPhase::Returning => self.update_return(position, dt, world, events),
        }
    }

    fn update_flight(
        &mut self,
        position: Vec2,
        dt: f32,
        world: &SwordWorld,
        events: &mut Vec<SwordEvent>,
    ) -> Vec2 {
        self.flight_time += dt;
        if self.flight_time >= self.params.max_flight_time {
            events.push(SwordEvent::Expired);
            return position;
        }

        if let SwordBehavior::Bounce { homing, speed, .. } = &mut self.behavior
            && let Some(target) = *homing
        {
            match world.position_of(target) {
                Some(target_position) => {
                    self.velocity = (target_position - position).normalize_or_zero() * *speed;
                }
                None => *homing = None,
            }
        }

        let g = world.gravity * self.effective_gravity();
        let delta = self.velocity * dt + 0.5 * g * dt * dt;
        self.velocity += g * dt;
        self.traveled += delta.length();

        if let SwordBehavior::Spin { max_travel, .. } = self.behavior
            && self.traveled >= max_travel
        {
            self.start_spin(events);
        }

        position + delta
    }

    fn update_stuck(
        &mut self,
        position: Vec2,
        dt: f32,
        world: &SwordWorld,
        events: &mut Vec<SwordEvent>,
    ) -> Vec2 {
        let SwordPhase::Stuck { remaining, anchor } = &mut self.phase else {
            return position;
        };

        *remaining -= dt;
        if *remaining <= 0.0 {
            events.push(SwordEvent::Expired);
            return position;
        }

        let Some(current) = *anchor else {
            return position;
        };
        match world.position_of(current.target) {
            Some(target_position) => target_position + current.offset,
            None => {
                *anchor = None;
                position
            }
        }
    }

    fn update_spin(
        &mut self,
        position: Vec2,
        dt: f32,
        world: &SwordWorld,
        events: &mut Vec<SwordEvent>,
    ) {
        let spin_radius = self.params.spin_radius;
        if let SwordBehavior::Spin {
            hit_cooldown,
            cooldowns,
            ..
        } = &mut self.behavior
        {
            for cooldown in cooldowns.values_mut() {
                *cooldown -= dt;
            }
            for (entity, target_position) in world.targets {
                if target_position.distance(position) > spin_radius {
                    continue;
                }
                let cooldown = cooldowns.entry(*entity).or_insert(0.0);
                if *cooldown <= 0.0 {
                    *cooldown = *hit_cooldown;
                    events.push(SwordEvent::Damage(*entity));
                }
            }
        }

        let SwordPhase::Spinning { remaining } = &mut self.phase else {
            return;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.recall();
        }
    }

    fn update_return(
        &mut self,
        position: Vec2,
        dt: f32,
        world: &SwordWorld,
        events: &mut Vec<SwordEvent>,
    ) -> Vec2 {
        let to_owner = world.owner_position - position;
        let distance = to_owner.length();
        let step = self.params.return_speed * dt;

        let next = if distance <= step {
            world.owner_position
        } else {
            position + to_owner / distance * step
        };
        self.velocity = (next - position) / dt.max(f32::EPSILON);

        if next.distance(world.owner_position) <= self.params.catch_radius {
            events.push(SwordEvent::Caught);
        }
        next
    }

    /// Targets the sword started overlapping this frame. Only entering counts
    /// as an impact; a target must leave before it can be struck again.
    pub fn track_overlaps(&mut self, position: Vec2, targets: &[(Entity, Vec2)]) -> Vec<Impact> {
        let radius = self.params.hit_radius;
        let inside: HashSet<Entity> = targets
            .iter()
            .filter(|(_, p)| p.distance(position) <= radius)
            .map(|(e, _)| *e)
            .collect();

        let entered = targets
            .iter()
            .filter(|(e, _)| inside.contains(e) && !self.touching.contains(e))
            .map(|(entity, position)| Impact::Target {
                entity: *entity,
                position: *position,
            })
            .collect();

        self.touching = inside;
        entered
    }

    /// React to an impact while flying; ignored in any other phase.
    pub fn on_impact(
        &mut self,
        impact: Impact,
        position: Vec2,
        world: &SwordWorld,
        events: &mut Vec<SwordEvent>,
    ) {
        if !self.is_flying() {
            return;
        }

        let struck = match impact {
            Impact::Target { entity, .. } => Some(entity),
            Impact::Terrain { .. } => None,
        };

        let outcome = match &mut self.behavior {
            SwordBehavior::Regular => {
                if let Some(entity) = struck {
                    events.push(SwordEvent::Damage(entity));
                }
                ImpactOutcome::Stick
            }
            SwordBehavior::Bounce {
                remaining,
                speed,
                radius,
                homing,
            } => {
                if let Some(entity) = struck {
                    events.push(SwordEvent::Damage(entity));
                }
                if *remaining == 0 {
                    ImpactOutcome::Stick
                } else {
                    *remaining -= 1;
                    let next_target = world
                        .targets
                        .iter()
                        .filter(|(e, _)| Some(*e) != struck)
                        .filter(|(_, p)| p.distance(position) <= *radius)
                        .min_by(|(_, a), (_, b)| {
                            a.distance_squared(position)
                                .total_cmp(&b.distance_squared(position))
                        });

                    match next_target {
                        Some((entity, target_position)) => {
                            *homing = Some(*entity);
                            self.velocity =
                                (*target_position - position).normalize_or_zero() * *speed;
                        }
                        None => {
                            *homing = None;
                            let normal = match impact {
                                Impact::Terrain { normal, .. } => normal,
                                Impact::Target {
                                    position: target_position,
                                    ..
                                } => (position - target_position).normalize_or(Vec2::Y),
                            };
                            self.velocity = reflect(self.velocity, normal);
                        }
                    }
                    events.push(SwordEvent::Redirected {
                        velocity: self.velocity,
                    });
                    ImpactOutcome::Continue
                }
            }
            SwordBehavior::Pierce { remaining, struck: ledger } => match struck {
                None => ImpactOutcome::Stick,
                Some(entity) => {
                    if !ledger.insert(entity) {
                        return;
                    }
                    events.push(SwordEvent::Damage(entity));
                    if *remaining > 0 {
                        *remaining -= 1;
                        ImpactOutcome::Continue
                    } else {
                        ImpactOutcome::Stick
                    }
                }
            },
            SwordBehavior::Spin {
                hit_cooldown,
                cooldowns,
                ..
            } => {
                if let Some(entity) = struck {
                    cooldowns.insert(entity, *hit_cooldown);
                    events.push(SwordEvent::Damage(entity));
                }
                ImpactOutcome::Spin
            }
        };

        match outcome {
            ImpactOutcome::Continue => {}
            ImpactOutcome::Stick => self.stick(impact, position, events),
            ImpactOutcome::Spin => self.start_spin(events),
        }
    }

    fn stick(&mut self, impact: Impact, position: Vec2, events: &mut Vec<SwordEvent>) {
        let anchor = match impact {
            Impact::Target {
                entity,
                position: target_position,
            } => Some(Anchor {
                target: entity,
                offset: position - target_position,
            }),
            Impact::Terrain { .. } => None,
        };
        self.phase = SwordPhase::Stuck {
            remaining: self.params.freeze_window,
            anchor,
        };
        self.velocity = Vec2::ZERO;
        events.push(SwordEvent::Stuck);
    }

    fn start_spin(&mut self, events: &mut Vec<SwordEvent>) {
        let SwordBehavior::Spin { duration, .. } = self.behavior else {
            return;
        };
        self.phase = SwordPhase::Spinning {
            remaining: duration,
        };
        self.velocity = Vec2::ZERO;
        events.push(SwordEvent::SpinStarted);
    }
}

/// Mirror `velocity` about a surface with unit `normal`.
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
