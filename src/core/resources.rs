//! Core domain: shared resources for pause, seeding and camera feedback.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    pub fn toggle(&mut self, source: impl Into<String>) {
        let source = source.into();
        if !self.sources.remove(&source) {
            self.sources.insert(source);
        }
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Deterministic RNG for gameplay rolls (knockback offsets, hit FX jitter).
#[derive(Resource, Debug)]
pub struct GameRng(pub ChaCha8Rng);

impl GameRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Accumulated camera impulse, decayed every frame.
#[derive(Resource, Debug, Default)]
pub struct CameraShake {
    pub offset: Vec2,
}

impl CameraShake {
    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.offset += impulse;
    }

    /// Exponential decay toward zero; returns the offset to apply this frame.
    pub fn decay(&mut self, dt: f32, rate: f32) -> Vec2 {
        self.offset *= (-rate * dt).exp();
        if self.offset.length_squared() < 1e-6 {
            self.offset = Vec2::ZERO;
        }
        self.offset
    }
}
