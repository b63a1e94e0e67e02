//! UI domain: player HUD and the end screen.

mod death;
mod hud_player;

#[cfg(test)]
mod tests;

pub use death::EndScreenState;
pub use hud_player::SwordLostNotice;

use bevy::prelude::*;

use crate::ui::death::{detect_player_death, handle_restart};
use crate::ui::hud_player::{
    spawn_player_hud, track_lost_swords, update_player_healthbar, update_player_status,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EndScreenState>()
            .init_resource::<SwordLostNotice>()
            .add_systems(Startup, spawn_player_hud)
            .add_systems(
                Update,
                (
                    update_player_healthbar,
                    track_lost_swords,
                    update_player_status,
                    detect_player_death,
                    handle_restart,
                )
                    .chain(),
            );
    }
}
