//! FX domain: hit flashes, ailment tints, screen shake and effect sprites.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{Ailment, EntityFx, FadingEffect, PlayerFx};
pub use events::{EffectKind, ScreenShake, SpawnEffect};
pub use resources::FxTuning;

use bevy::prelude::*;

use crate::core::GameplaySet;
use crate::fx::systems::{
    apply_screen_shake, fade_effects, spawn_effects, tick_entity_fx, tick_player_fx,
};

pub struct FxPlugin;

impl Plugin for FxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FxTuning>()
            .add_message::<ScreenShake>()
            .add_message::<SpawnEffect>()
            .add_systems(Update, (tick_entity_fx, tick_player_fx).in_set(GameplaySet::Tick))
            .add_systems(
                Update,
                (apply_screen_shake, spawn_effects, fade_effects).in_set(GameplaySet::Present),
            );
    }
}
