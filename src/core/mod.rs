//! Core domain: frame ordering, pause, seeding, camera and arena geometry.

mod arena;
mod resources;
mod systems;

pub use arena::{ARENA_FLOOR_Y, Ground, Wall};
pub use resources::{CameraShake, GameRng, GameplayPaused, RunConfig, gameplay_active};
pub use systems::MainCamera;

use bevy::prelude::*;

use crate::core::arena::spawn_arena;
use crate::core::systems::{apply_camera_shake, setup_camera, toggle_pause};

/// Ordered stages of one simulation frame.
///
/// Contact probes (`Sense`) read transforms already integrated by the
/// physics step of the previous frame; nothing in gameplay requests a
/// mid-frame re-integration.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Input,
    Sense,
    Tick,
    Decide,
    Act,
    Resolve,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        // content may already have pinned the seed
        let seed = app
            .world_mut()
            .get_resource_or_insert_with(RunConfig::default)
            .seed;
        info!("Starting run with seed: {}", seed);

        app.init_resource::<GameplayPaused>()
            .init_resource::<CameraShake>()
            .insert_resource(GameRng::from_seed(seed))
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Sense,
                    GameplaySet::Tick,
                    GameplaySet::Decide,
                    GameplaySet::Act,
                    GameplaySet::Resolve,
                    GameplaySet::Present,
                )
                    .chain()
                    .run_if(gameplay_active),
            )
            .add_systems(Startup, (setup_camera, spawn_arena))
            .add_systems(Update, toggle_pause)
            .add_systems(Update, apply_camera_shake.in_set(GameplaySet::Present));
    }
}
