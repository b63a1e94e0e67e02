//! FX domain: per-entity colour feedback and short-lived effect sprites.

use bevy::prelude::*;

use crate::fx::resources::FxTuning;
use crate::timing::TaskQueue;

const BLINK_RED: Color = Color::srgb(1.0, 0.2, 0.2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ailment {
    Ignite,
    Chill,
    Shock,
}

impl Ailment {
    fn colors(self) -> [Color; 2] {
        match self {
            Ailment::Ignite => [Color::srgb(1.0, 0.55, 0.1), Color::srgb(0.9, 0.2, 0.1)],
            Ailment::Chill => [Color::srgb(0.6, 0.85, 1.0), Color::srgb(0.3, 0.5, 1.0)],
            Ailment::Shock => [Color::srgb(1.0, 1.0, 0.4), Color::srgb(1.0, 0.85, 0.0)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FxTask {
    EndFlash,
    RedBlink,
    AilmentCycle(Ailment),
    CancelColorChange,
}

/// Sprite colour driven by timed feedback tasks.
#[derive(Component, Debug)]
pub struct EntityFx {
    base_color: Color,
    tint: Option<Color>,
    flashing: bool,
    transparent: bool,
    tasks: TaskQueue<FxTask>,
}

impl EntityFx {
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            tint: None,
            flashing: false,
            transparent: false,
            tasks: TaskQueue::new(),
        }
    }

    pub fn flash(&mut self, tuning: &FxTuning) {
        self.flashing = true;
        self.tasks.cancel_where(|task| *task == FxTask::EndFlash);
        self.tasks.schedule(tuning.flash_duration, FxTask::EndFlash);
    }

    pub fn red_blink(&mut self, tuning: &FxTuning, duration: f32) {
        self.cancel_color_change();
        self.tasks
            .schedule_repeating(0.0, tuning.blink_interval, FxTask::RedBlink);
        self.tasks.schedule(duration, FxTask::CancelColorChange);
    }

    pub fn ailment_for(&mut self, ailment: Ailment, seconds: f32, tuning: &FxTuning) {
        self.cancel_color_change();
        self.tasks.schedule_repeating(
            0.0,
            tuning.ailment_interval,
            FxTask::AilmentCycle(ailment),
        );
        self.tasks.schedule(seconds, FxTask::CancelColorChange);
    }

    /// Stop blinking and ailment cycles and restore the base colour.
    pub fn cancel_color_change(&mut self) {
        self.tasks
            .cancel_where(|task| *task != FxTask::EndFlash);
        self.tint = None;
    }

    /// Drop every pending task; used when the owner dies.
    pub fn cancel_all(&mut self) {
        self.tasks.cancel_all();
        self.tint = None;
        self.flashing = false;
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    pub fn tick(&mut self, dt: f32) {
        let mut cancelled = false;
        for task in self.tasks.tick(dt) {
            match task {
                FxTask::EndFlash => self.flashing = false,
                // cycles due in the same tick as a cancel must not repaint
                FxTask::RedBlink | FxTask::AilmentCycle(_) if cancelled => {}
                FxTask::RedBlink => {
                    self.tint = if self.tint == Some(BLINK_RED) {
                        Some(Color::WHITE)
                    } else {
                        Some(BLINK_RED)
                    };
                }
                FxTask::AilmentCycle(ailment) => {
                    let [first, second] = ailment.colors();
                    self.tint = if self.tint == Some(first) {
                        Some(second)
                    } else {
                        Some(first)
                    };
                }
                FxTask::CancelColorChange => {
                    self.cancel_color_change();
                    cancelled = true;
                }
            }
        }
    }

    pub fn color(&self) -> Color {
        if self.transparent {
            Color::NONE
        } else if self.flashing {
            Color::WHITE
        } else {
            self.tint.unwrap_or(self.base_color)
        }
    }
}

/// After-image throttle for the player.
#[derive(Component, Debug, Default)]
pub struct PlayerFx {
    after_image_timer: f32,
}

impl PlayerFx {
    pub fn tick(&mut self, dt: f32) {
        self.after_image_timer -= dt;
    }

    /// True when an after image may spawn; restarts the cooldown.
    pub fn try_after_image(&mut self, cooldown: f32) -> bool {
        if self.after_image_timer > 0.0 {
            return false;
        }
        self.after_image_timer = cooldown;
        true
    }
}

/// Effect sprite that fades out and despawns.
#[derive(Component, Debug)]
pub struct FadingEffect {
    pub remaining: f32,
    pub fade_rate: f32,
}
