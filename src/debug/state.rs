//! Debug domain: dev-tools state and the sword mode cycle.

use bevy::prelude::*;

use crate::skills::{SkillUnlocks, SwordType, select_type};

/// Resource tracking dev-tools state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the player ignores damage
    pub invincible: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count the message down; returns false once it has expired.
    pub fn tick_message(&mut self, dt: f32) -> bool {
        let Some((_, remaining)) = self.status_message.as_mut() else {
            return false;
        };
        *remaining -= dt;
        if *remaining <= 0.0 {
            self.status_message = None;
            return false;
        }
        true
    }
}

/// Next mode in Regular, Bounce, Pierce, Spin order, expressed as unlocks.
/// A locked sword unlocks as Regular.
pub fn cycle_sword_mode(unlocks: &SkillUnlocks) -> SkillUnlocks {
    let next = match select_type(unlocks) {
        None | Some(SwordType::Spin) => SwordType::Regular,
        Some(SwordType::Regular) => SwordType::Bounce,
        Some(SwordType::Bounce) => SwordType::Pierce,
        Some(SwordType::Pierce) => SwordType::Spin,
    };

    SkillUnlocks {
        sword: true,
        bounce: next == SwordType::Bounce,
        pierce: next == SwordType::Pierce,
        spin: next == SwordType::Spin,
        ..unlocks.clone()
    }
}
