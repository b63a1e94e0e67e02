//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Status effects carried by a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitEffects {
    /// Time stop: the target is frozen in place.
    pub freeze_for: Option<f32>,
    /// The target takes extra damage for this long.
    pub vulnerable_for: Option<f32>,
    /// Movement slow as (fraction, seconds).
    pub chill: Option<(f32, f32)>,
    pub ignite_for: Option<f32>,
}

#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    /// Attacker x, used for knockback direction.
    pub source_x: f32,
    /// Knockback power for this hit; the target's configured power when `None`.
    pub knockback: Option<Vec2>,
    pub effects: HitEffects,
}

impl Message for DamageEvent {}

/// A counter attack caught an enemy with its counter window open.
#[derive(Debug)]
pub struct StunEvent {
    pub source: Entity,
    pub target: Entity,
    pub source_x: f32,
}

impl Message for StunEvent {}

/// Movement slow applied to a target.
#[derive(Debug)]
pub struct SlowEvent {
    pub target: Entity,
    pub percent: f32,
    pub duration: f32,
}

impl Message for SlowEvent {}

#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}
