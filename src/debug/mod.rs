//! Debug domain: dev-tools hotkeys for fast iteration.
//!
//! Features:
//! - Cycle the sword mode and toggle dash
//! - Spawn enemies in front of the player
//! - Invincibility and full heal
//! - JSON snapshot of the player state in the log

mod snapshot;
mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use snapshot::PlayerSnapshot;
pub use state::{DebugState, cycle_sword_mode};

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::debug::systems::{
    apply_invincibility, dump_player_snapshot, handle_debug_hotkeys, update_status_message,
};
use crate::debug::ui::{spawn_debug_overlay, update_debug_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_overlay)
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    dump_player_snapshot,
                    update_status_message,
                    update_debug_overlay,
                )
                    .chain(),
            )
            .add_systems(Update, apply_invincibility.in_set(GameplaySet::Present));
    }
}
