//! Player domain: controller data and requests raised by state logic.

use bevy::prelude::*;
use serde::Serialize;

use crate::player::resources::PlayerTuning;
use crate::skills::SwordType;
use crate::timing::{BusyLock, TaskQueue};

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speeds {
    pub move_speed: f32,
    pub jump_force: f32,
    pub dash_speed: f32,
}

impl Speeds {
    fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            move_speed: tuning.move_speed,
            jump_force: tuning.jump_force,
            dash_speed: tuning.dash_speed,
        }
    }

    fn scaled(self, factor: f32) -> Self {
        Self {
            move_speed: self.move_speed * factor,
            jump_force: self.jump_force * factor,
            dash_speed: self.dash_speed * factor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum ControllerTask {
    RestoreSpeeds,
}

/// Mutable per-player data the states read and write.
#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    pub busy: BusyLock,
    /// Horizontal direction of the current dash, never 0.
    pub dash_dir: f32,
    pub combo_counter: usize,
    pub last_attack_time: f32,
    pub speeds: Speeds,
    base_speeds: Speeds,
    /// Position of a sword caught since the last state step.
    pending_catch: Option<Vec2>,
    tasks: TaskQueue<ControllerTask>,
}

impl PlayerController {
    pub fn new(tuning: &PlayerTuning) -> Self {
        let speeds = Speeds::from_tuning(tuning);
        Self {
            busy: BusyLock::default(),
            dash_dir: 1.0,
            combo_counter: 0,
            last_attack_time: f32::NEG_INFINITY,
            speeds,
            base_speeds: speeds,
            pending_catch: None,
            tasks: TaskQueue::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn busy_for(&mut self, seconds: f32) {
        self.busy.hold_for(seconds);
    }

    /// Scale move, jump and dash speed by `1 - percent` for `duration`.
    /// A new slow replaces the previous one. Returns the speed factor.
    pub fn slow_by(&mut self, percent: f32, duration: f32) -> f32 {
        let factor = (1.0 - percent).clamp(0.0, 1.0);
        self.speeds = self.base_speeds.scaled(factor);
        self.tasks
            .cancel_where(|task| *task == ControllerTask::RestoreSpeeds);
        self.tasks.schedule(duration, ControllerTask::RestoreSpeeds);
        factor
    }

    pub fn is_slowed(&self) -> bool {
        self.speeds != self.base_speeds
    }

    /// Advance the busy lock and pending tasks; true when speeds were
    /// restored this frame.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.busy.tick(dt);
        let mut restored = false;
        for task in self.tasks.tick(dt) {
            match task {
                ControllerTask::RestoreSpeeds => {
                    self.speeds = self.base_speeds;
                    restored = true;
                }
            }
        }
        restored
    }

    pub fn cancel_tasks(&mut self) {
        self.tasks.cancel_all();
    }

    pub fn queue_catch(&mut self, sword_position: Vec2) {
        self.pending_catch = Some(sword_position);
    }

    pub fn take_catch(&mut self) -> Option<Vec2> {
        self.pending_catch.take()
    }
}

/// Side effects requested by state logic, applied after the state step.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerRequest {
    LaunchSword { aim: Vec2, sword_type: SwordType },
    RecallSword,
    Stun(Entity),
    /// Camera kick of a sword impact.
    ScreenShake,
    Dust,
    AfterImage,
    SetTransparent(bool),
    CastBlackhole,
}

#[derive(Component, Debug, Default)]
pub struct PendingRequests(pub Vec<PlayerRequest>);

/// An enemy as seen by the counter attack check.
#[derive(Debug, Clone, Copy)]
pub struct CounterTarget {
    pub entity: Entity,
    pub position: Vec2,
    pub window_open: bool,
}
