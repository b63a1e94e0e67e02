//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

use crate::combat::resources::EnemyTuning;

/// Health component for damageable entities
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current);
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        self.current / self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyPhase {
    Idle,
    Chase,
    /// Winding up a strike. The counter window is open.
    Telegraph { timer: f32 },
    Recover { timer: f32 },
    Stunned { timer: f32 },
}

/// What the enemy wants to do this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyIntent {
    Hold,
    /// Walk in the given horizontal direction (-1 or +1).
    Move(f32),
    Strike,
}

/// Training enemy: walks up to the player, telegraphs, strikes, recovers.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub phase: EnemyPhase,
    attack_cooldown: f32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            phase: EnemyPhase::Idle,
            attack_cooldown: 0.0,
        }
    }
}

impl Enemy {
    pub fn counter_window_open(&self) -> bool {
        matches!(self.phase, EnemyPhase::Telegraph { .. })
    }

    pub fn is_stunned(&self) -> bool {
        matches!(self.phase, EnemyPhase::Stunned { .. })
    }

    /// Stun only succeeds while the counter window is open; the window closes.
    pub fn try_stun(&mut self, duration: f32) -> bool {
        if !self.counter_window_open() {
            return false;
        }
        self.phase = EnemyPhase::Stunned { timer: duration };
        true
    }

    /// `to_player` is the horizontal offset to the player, if there is one.
    pub fn tick(&mut self, dt: f32, to_player: Option<f32>, tuning: &EnemyTuning) -> EnemyIntent {
        self.attack_cooldown = (self.attack_cooldown - dt).max(0.0);

        match &mut self.phase {
            EnemyPhase::Idle | EnemyPhase::Chase => {
                let Some(dx) = to_player.filter(|dx| dx.abs() <= tuning.detection_range) else {
                    self.phase = EnemyPhase::Idle;
                    return EnemyIntent::Hold;
                };
                if dx.abs() <= tuning.attack_range {
                    if self.attack_cooldown <= 0.0 {
                        self.phase = EnemyPhase::Telegraph {
                            timer: tuning.telegraph_time,
                        };
                    }
                    EnemyIntent::Hold
                } else {
                    self.phase = EnemyPhase::Chase;
                    EnemyIntent::Move(dx.signum())
                }
            }
            EnemyPhase::Telegraph { timer } => {
                *timer -= dt;
                if *timer > 0.0 {
                    return EnemyIntent::Hold;
                }
                self.phase = EnemyPhase::Recover {
                    timer: tuning.recover_time,
                };
                self.attack_cooldown = tuning.attack_cooldown;
                EnemyIntent::Strike
            }
            EnemyPhase::Recover { timer } | EnemyPhase::Stunned { timer } => {
                *timer -= dt;
                if *timer <= 0.0 {
                    self.phase = EnemyPhase::Idle;
                }
                EnemyIntent::Hold
            }
        }
    }
}

/// Timed statuses applied by sword passives.
#[derive(Component, Debug, Clone, Default)]
pub struct EnemyStatus {
    pub frozen: f32,
    pub vulnerable: f32,
}

impl EnemyStatus {
    pub fn is_frozen(&self) -> bool {
        self.frozen > 0.0
    }

    pub fn is_vulnerable(&self) -> bool {
        self.vulnerable > 0.0
    }

    pub fn freeze_for(&mut self, seconds: f32) {
        self.frozen = self.frozen.max(seconds);
    }

    pub fn vulnerable_for(&mut self, seconds: f32) {
        self.vulnerable = self.vulnerable.max(seconds);
    }

    pub fn tick(&mut self, dt: f32) {
        self.frozen = (self.frozen - dt).max(0.0);
        self.vulnerable = (self.vulnerable - dt).max(0.0);
    }
}
