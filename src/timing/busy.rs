//! Timing domain: the "busy for duration" lock.

use serde::Serialize;

/// Suppresses player-initiated actions for a bounded duration.
///
/// Overlapping holds never shorten each other: the lock stays busy until the
/// latest requested end.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BusyLock {
    remaining: f32,
}

impl BusyLock {
    /// Hold the lock for at least `seconds` from now.
    pub fn hold_for(&mut self, seconds: f32) {
        self.remaining = self.remaining.max(seconds);
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Release immediately. Only the sword catch handshake does this.
    pub fn clear(&mut self) {
        self.remaining = 0.0;
    }
}
