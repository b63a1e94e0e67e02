//! Actor domain: state shared by every character (facing, contacts, knockback).

mod components;
mod events;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    Actor, Contacts, Facing, GameLayer, Knockback, KnockbackEnd, KnockbackTuning, Probe, Probes,
};
pub use events::FacingChanged;

use bevy::prelude::*;

use crate::actor::systems::{detect_contacts, publish_facing_changes, tick_knockback};
use crate::core::GameplaySet;

pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KnockbackTuning>()
            .add_message::<FacingChanged>()
            .add_systems(Update, detect_contacts.in_set(GameplaySet::Sense))
            .add_systems(Update, tick_knockback.in_set(GameplaySet::Tick))
            .add_systems(Update, publish_facing_changes.in_set(GameplaySet::Present));
    }
}
