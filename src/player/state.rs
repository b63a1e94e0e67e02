//! Player state machine: current/previous state with exit-before-enter
//! transitions.
//!
//! The machine only sequences hooks. Whether a transition is legal is
//! decided by the state logic that requests it; the machine itself refuses
//! just two things: any change before `initialize`, and any change out of
//! `Dead`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::AnimFlag;
use crate::player::resources::ReentryPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    Move,
    Jump,
    Air,
    WallSlide,
    WallJump,
    Dash,
    PrimaryAttack,
    CounterAttack,
    AimSword,
    CatchSword,
    Blackhole,
    Dead,
}

impl PlayerState {
    /// Animator flag raised while the state is active.
    pub fn anim_flag(self) -> AnimFlag {
        match self {
            PlayerState::Idle => AnimFlag::Idle,
            PlayerState::Move => AnimFlag::Move,
            PlayerState::Jump | PlayerState::Air | PlayerState::WallJump => AnimFlag::Jump,
            PlayerState::Blackhole => AnimFlag::Jump,
            PlayerState::WallSlide => AnimFlag::WallSlide,
            PlayerState::Dash => AnimFlag::Dash,
            PlayerState::PrimaryAttack => AnimFlag::Attack,
            PlayerState::CounterAttack => AnimFlag::CounterAttack,
            PlayerState::AimSword => AnimFlag::AimSword,
            PlayerState::CatchSword => AnimFlag::CatchSword,
            PlayerState::Dead => AnimFlag::Die,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == PlayerState::Dead
    }

    /// Idle and Move share the grounded transition checks.
    pub fn is_grounded(self) -> bool {
        matches!(self, PlayerState::Idle | PlayerState::Move)
    }
}

/// Per-entry working memory, reset by every transition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StateScratch {
    pub timer: f32,
    pub trigger_called: bool,
    pub x_input: f32,
    pub y_input: f32,
    /// Blackhole: the skill has been cast during this entry.
    pub skill_used: bool,
}

/// Enter and exit side effects, supplied by whoever owns the state data.
pub trait StateHooks {
    fn enter(&mut self, state: PlayerState, scratch: &mut StateScratch);
    fn exit(&mut self, state: PlayerState, scratch: &mut StateScratch);
}

#[derive(Component, Debug, Clone)]
pub struct PlayerStateMachine {
    current: Option<PlayerState>,
    previous: Option<PlayerState>,
    pub scratch: StateScratch,
    restartable: Vec<PlayerState>,
}

impl PlayerStateMachine {
    pub fn new(policy: &ReentryPolicy) -> Self {
        Self {
            current: None,
            previous: None,
            scratch: StateScratch::default(),
            restartable: policy.restartable.clone(),
        }
    }

    pub fn current(&self) -> Option<PlayerState> {
        self.current
    }

    pub fn previous(&self) -> Option<PlayerState> {
        self.previous
    }

    pub fn is_in(&self, state: PlayerState) -> bool {
        self.current == Some(state)
    }

    /// Set the first state and run its enter hook. Later calls are ignored.
    pub fn initialize(&mut self, state: PlayerState, hooks: &mut impl StateHooks) {
        if self.current.is_some() {
            warn!("Player state machine already initialized, ignoring {:?}", state);
            return;
        }
        self.scratch = StateScratch::default();
        self.current = Some(state);
        hooks.enter(state, &mut self.scratch);
    }

    /// Whether `change_state(next)` would go through.
    pub fn accepts(&self, next: PlayerState) -> bool {
        match self.current {
            None => false,
            Some(current) if current.is_terminal() => false,
            Some(current) => current != next || self.restartable.contains(&next),
        }
    }

    /// Run exit(current), switch, run enter(next). Returns false when the
    /// change was refused.
    pub fn change_state(&mut self, next: PlayerState, hooks: &mut impl StateHooks) -> bool {
        let Some(current) = self.current else {
            warn!("change_state({:?}) before initialize", next);
            return false;
        };
        if !self.accepts(next) {
            return false;
        }

        hooks.exit(current, &mut self.scratch);
        self.previous = Some(current);
        self.current = Some(next);
        self.scratch = StateScratch::default();
        hooks.enter(next, &mut self.scratch);

        debug!("Player state {:?} -> {:?}", current, next);
        true
    }

    /// Called when the active clip finishes.
    pub fn animation_finish_trigger(&mut self) {
        self.scratch.trigger_called = true;
    }
}
