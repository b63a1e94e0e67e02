//! Cooldown-gated skills: dash and blackhole.

use serde::Serialize;

/// Countdown that gates repeated use of a skill.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCooldown {
    pub cooldown: f32,
    timer: f32,
}

impl SkillCooldown {
    pub fn new(cooldown: f32) -> Self {
        Self {
            cooldown,
            timer: 0.0,
        }
    }

    pub fn ready(&self) -> bool {
        self.timer <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.timer.max(0.0)
    }

    /// Use the skill if it is off cooldown and restart the countdown.
    pub fn try_use(&mut self) -> bool {
        if !self.ready() {
            return false;
        }
        self.timer = self.cooldown;
        true
    }

    pub fn tick(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }
}

/// Blackhole skill: cooldown plus an active window that reports completion.
#[derive(Debug, Clone, Serialize)]
pub struct BlackholeSkill {
    pub cooldown: SkillCooldown,
    pub duration: f32,
    active: Option<f32>,
    completed: bool,
}

impl BlackholeSkill {
    pub fn new(cooldown: f32, duration: f32) -> Self {
        Self {
            cooldown: SkillCooldown::new(cooldown),
            duration,
            active: None,
            completed: false,
        }
    }

    pub fn ready(&self) -> bool {
        self.cooldown.ready() && self.active.is_none()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start the active window; false while on cooldown.
    pub fn try_cast(&mut self) -> bool {
        if !self.ready() || !self.cooldown.try_use() {
            return false;
        }
        self.active = Some(self.duration);
        self.completed = false;
        true
    }

    pub fn tick(&mut self, dt: f32) {
        self.cooldown.tick(dt);
        if let Some(remaining) = self.active.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.active = None;
                self.completed = true;
            }
        }
    }

    /// True once after the active window closes.
    pub fn take_completed(&mut self) -> bool {
        std::mem::take(&mut self.completed)
    }
}
