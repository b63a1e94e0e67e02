//! Player domain: input, controller, state machine and the concrete states.

mod components;
mod input;
mod resources;
mod state;
mod states;
mod systems;


pub use components::{
    CounterTarget, PendingRequests, Player, PlayerController, PlayerRequest, Speeds,
};
pub use input::PlayerInput;
pub use resources::{PlayerTuning, ReentryPolicy};
pub use state::{PlayerState, PlayerStateMachine, StateHooks, StateScratch};
pub use states::{PlayerCtx, run_frame};
pub(crate) use systems::spawn_player;

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::player::input::read_player_input;
use crate::player::systems::{
    apply_player_requests, apply_player_slows, forward_animation_cues, handle_player_death,
    queue_sword_catches, step_player_state, tick_player_controller,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .init_resource::<PlayerTuning>()
            .init_resource::<ReentryPolicy>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_player_input.in_set(GameplaySet::Input))
            .add_systems(Update, tick_player_controller.in_set(GameplaySet::Tick))
            .add_systems(
                Update,
                (
                    forward_animation_cues,
                    step_player_state,
                    apply_player_requests,
                )
                    .chain()
                    .in_set(GameplaySet::Decide),
            )
            .add_systems(
                Update,
                (queue_sword_catches, apply_player_slows, handle_player_death)
                    .in_set(GameplaySet::Resolve),
            );
    }
}
