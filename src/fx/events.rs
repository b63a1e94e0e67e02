//! FX domain: feedback requests from gameplay.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::actor::Facing;

/// Camera impulse; the horizontal part is mirrored by `facing`.
#[derive(Debug)]
pub struct ScreenShake {
    pub power: Vec2,
    pub facing: Facing,
}

impl Message for ScreenShake {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Hit,
    Dust,
    AfterImage,
}

#[derive(Debug)]
pub struct SpawnEffect {
    pub kind: EffectKind,
    pub position: Vec2,
    pub facing: Facing,
}

impl Message for SpawnEffect {}
