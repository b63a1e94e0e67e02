//! Actor domain: actor-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::actor::components::Facing;

/// Event emitted once per actual facing flip
#[derive(Debug)]
pub struct FacingChanged {
    pub entity: Entity,
    pub facing: Facing,
}

impl Message for FacingChanged {}
