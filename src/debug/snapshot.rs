//! Debug domain: serializable view of the player for JSON dumps.

use bevy::prelude::*;
use serde::Serialize;

use crate::actor::{Actor, Facing};
use crate::combat::Health;
use crate::player::{PlayerController, PlayerState, PlayerStateMachine, Speeds, StateScratch};
use crate::skills::{PlayerSkills, SwordSlot, SwordType};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub state: Option<PlayerState>,
    pub previous: Option<PlayerState>,
    pub scratch: StateScratch,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub facing: Facing,
    pub knocked: bool,
    pub health: f32,
    pub busy_remaining: f32,
    pub combo_counter: usize,
    pub speeds: Speeds,
    pub sword_type: Option<SwordType>,
    pub sword_out: bool,
    pub dash_cooldown: f32,
    pub blackhole_ready: bool,
}

impl PlayerSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn capture(
        machine: &PlayerStateMachine,
        controller: &PlayerController,
        actor: &Actor,
        skills: &PlayerSkills,
        slot: &SwordSlot,
        health: &Health,
        position: Vec2,
        velocity: Vec2,
    ) -> Self {
        Self {
            state: machine.current(),
            previous: machine.previous(),
            scratch: machine.scratch.clone(),
            position: position.to_array(),
            velocity: velocity.to_array(),
            facing: actor.facing(),
            knocked: actor.is_knocked(),
            health: health.current,
            busy_remaining: controller.busy.remaining(),
            combo_counter: controller.combo_counter,
            speeds: controller.speeds,
            sword_type: skills.sword_type(),
            sword_out: !slot.is_empty(),
            dash_cooldown: skills.dash.remaining(),
            blackhole_ready: skills.blackhole_ready(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
