//! FX domain: tuning for hit feedback, screen shake and after images.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FxTuning {
    pub flash_duration: f32,
    pub blink_interval: f32,
    /// Period of the two-colour ailment cycle.
    pub ailment_interval: f32,
    pub shake_multiplier: f32,
    pub shake_sword_impact: [f32; 2],
    pub shake_high_damage: [f32; 2],
    /// Exponential decay rate of the camera shake offset.
    pub shake_decay: f32,
    pub after_image_cooldown: f32,
    /// Alpha lost per second by an after image.
    pub after_image_fade: f32,
    pub dust_lifetime: f32,
    pub hit_lifetime: f32,
}

impl Default for FxTuning {
    fn default() -> Self {
        Self {
            flash_duration: 0.1,
            blink_interval: 0.1,
            ailment_interval: 0.3,
            shake_multiplier: 1.0,
            shake_sword_impact: [0.3, 0.15],
            shake_high_damage: [0.5, 0.3],
            shake_decay: 8.0,
            after_image_cooldown: 0.05,
            after_image_fade: 3.0,
            dust_lifetime: 0.35,
            hit_lifetime: 0.5,
        }
    }
}
