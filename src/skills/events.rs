//! Skills domain: skill-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::skills::projectile::SwordType;

/// A returning sword reached its owner.
#[derive(Debug)]
pub struct SwordCaught {
    pub owner: Entity,
    pub sword: Entity,
    pub position: Vec2,
}

impl Message for SwordCaught {}

/// A sword left play without being caught.
#[derive(Debug)]
pub struct SwordExpired {
    pub owner: Entity,
    pub sword: Entity,
    pub sword_type: SwordType,
}

impl Message for SwordExpired {}
