//! Concrete player states.
//!
//! Each state is a set of rules over a `PlayerCtx`: the enter and exit hooks
//! set up and tear down per-state physics and animation, and `run_frame`
//! performs one update of the active state followed by the global dash check.
//! Every update returns the state it wants next; the machine applies it.

use bevy::prelude::*;

use crate::actor::{Actor, Contacts, Probes};
use crate::animation::{AnimFlag, AnimFloat, AnimInt, Animator};
use crate::player::components::{CounterTarget, PlayerController, PlayerRequest};
use crate::player::input::PlayerInput;
use crate::player::resources::PlayerTuning;
use crate::player::state::{PlayerState, PlayerStateMachine, StateHooks, StateScratch};
use crate::skills::{PlayerSkills, SwordSlot};

/// Everything state logic may read or write during one frame.
pub struct PlayerCtx<'a> {
    pub dt: f32,
    /// Seconds since startup, for the combo window.
    pub now: f32,
    pub input: &'a PlayerInput,
    pub contacts: Contacts,
    pub tuning: &'a PlayerTuning,
    pub probes: &'a Probes,
    pub position: Vec2,
    pub velocity: &'a mut Vec2,
    pub gravity_scale: &'a mut f32,
    pub actor: &'a mut Actor,
    pub controller: &'a mut PlayerController,
    pub animator: &'a mut Animator,
    pub skills: &'a mut PlayerSkills,
    pub sword_slot: &'a SwordSlot,
    /// Where the sword was caught, set only for the catch transition.
    pub sword_position: Option<Vec2>,
    pub counter_targets: &'a [CounterTarget],
    pub requests: &'a mut Vec<PlayerRequest>,
}

impl PlayerCtx<'_> {
    fn set_velocity(&mut self, x: f32, y: f32) {
        self.actor.set_velocity(self.velocity, x, y);
    }

    fn set_zero_velocity(&mut self) {
        self.actor.set_zero_velocity(self.velocity);
    }

    fn facing_dir(&self) -> f32 {
        self.actor.facing_dir()
    }

    fn enter_primary_attack(&mut self, scratch: &mut StateScratch) {
        if self.controller.combo_counter >= self.tuning.combo_len()
            || self.now > self.controller.last_attack_time + self.tuning.combo_window
        {
            self.controller.combo_counter = 0;
        }
        let step = self.controller.combo_counter;
        self.animator.set_integer(AnimInt::ComboCounter, step as i32);

        let direction = if self.input.axis.x != 0.0 {
            self.input.axis.x
        } else {
            self.facing_dir()
        };
        let lunge = self.tuning.lunge(step);
        self.set_velocity(lunge.x * direction, lunge.y);
        scratch.timer = self.tuning.attack_lunge_time;
    }

    fn enter_catch_sword(&mut self) {
        if let Some(sword_position) = self.sword_position {
            self.actor.face_towards(self.position.x, sword_position.x);
        }
        self.requests.push(PlayerRequest::Dust);
        self.requests.push(PlayerRequest::ScreenShake);
        // push-back bypasses the facing update of `set_velocity`
        self.velocity.x = self.tuning.sword_return_impact * -self.facing_dir();
    }
}

impl StateHooks for PlayerCtx<'_> {
    fn enter(&mut self, state: PlayerState, scratch: &mut StateScratch) {
        self.animator.set_bool(state.anim_flag(), true);

        match state {
            PlayerState::Idle => self.set_zero_velocity(),
            PlayerState::Jump => {
                let vx = self.velocity.x;
                self.set_velocity(vx, self.controller.speeds.jump_force);
            }
            PlayerState::WallJump => {
                scratch.timer = self.tuning.wall_jump_duration;
                let push = self.tuning.wall_jump_push * -self.facing_dir();
                self.set_velocity(push, self.controller.speeds.jump_force);
            }
            PlayerState::Dash => {
                scratch.timer = self.tuning.dash_duration;
                *self.gravity_scale = 0.0;
            }
            PlayerState::PrimaryAttack => self.enter_primary_attack(scratch),
            PlayerState::CounterAttack => {
                scratch.timer = self.tuning.counter_attack_duration;
                self.animator
                    .set_bool(AnimFlag::SuccessfulCounterAttack, false);
            }
            PlayerState::AimSword => self.skills.sword.dots_active = true,
            PlayerState::CatchSword => self.enter_catch_sword(),
            PlayerState::Blackhole => {
                scratch.timer = self.tuning.fly_time;
                scratch.skill_used = false;
                *self.gravity_scale = 0.0;
            }
            PlayerState::Dead => {
                self.controller.cancel_tasks();
                self.skills.sword.dots_active = false;
                info!("Player died");
            }
            PlayerState::Move | PlayerState::Air | PlayerState::WallSlide => {}
        }
    }

    fn exit(&mut self, state: PlayerState, _scratch: &mut StateScratch) {
        self.animator.set_bool(state.anim_flag(), false);

        match state {
            PlayerState::Dash => {
                let vy = self.velocity.y;
                self.set_velocity(0.0, vy);
                *self.gravity_scale = self.tuning.gravity_scale;
            }
            PlayerState::PrimaryAttack => {
                self.controller.busy_for(self.tuning.attack_busy);
                self.controller.combo_counter += 1;
                self.controller.last_attack_time = self.now;
            }
            PlayerState::CounterAttack => {
                self.animator
                    .set_bool(AnimFlag::SuccessfulCounterAttack, false);
            }
            PlayerState::AimSword => {
                self.controller.busy_for(self.tuning.aim_busy);
                self.skills.sword.dots_active = false;
            }
            PlayerState::CatchSword => self.controller.busy_for(self.tuning.catch_busy),
            PlayerState::Blackhole => {
                *self.gravity_scale = self.tuning.gravity_scale;
                self.requests.push(PlayerRequest::SetTransparent(false));
            }
            _ => {}
        }
    }
}

/// One frame of the active state, then the global dash check.
pub fn run_frame(machine: &mut PlayerStateMachine, ctx: &mut PlayerCtx) {
    let Some(state) = machine.current() else {
        return;
    };

    let scratch = &mut machine.scratch;
    scratch.timer -= ctx.dt;
    scratch.x_input = ctx.input.axis.x;
    scratch.y_input = ctx.input.axis.y;
    ctx.animator.set_float(AnimFloat::YVelocity, ctx.velocity.y);

    if let Some(next) = update_state(state, scratch, ctx) {
        machine.change_state(next, ctx);
    }

    check_dash(machine, ctx);
}

/// Dash is available from any state except Dead and Blackhole. A refused
/// dash leaves the cooldown untouched.
fn check_dash(machine: &mut PlayerStateMachine, ctx: &mut PlayerCtx) {
    if !ctx.input.dash {
        return;
    }
    if machine.is_in(PlayerState::Blackhole)
        || machine.is_in(PlayerState::Dash)
        || !machine.accepts(PlayerState::Dash)
    {
        return;
    }
    if ctx.contacts.wall {
        debug!("Dash blocked by wall");
        return;
    }
    if !ctx.skills.try_dash() {
        debug!("Dash unavailable");
        return;
    }

    ctx.controller.dash_dir = if ctx.input.axis.x != 0.0 {
        ctx.input.axis.x.signum()
    } else {
        ctx.facing_dir()
    };
    machine.change_state(PlayerState::Dash, ctx);
}

fn update_state(
    state: PlayerState,
    scratch: &mut StateScratch,
    ctx: &mut PlayerCtx,
) -> Option<PlayerState> {
    match state {
        PlayerState::Idle => grounded(ctx).or_else(|| update_idle(scratch, ctx)),
        PlayerState::Move => grounded(ctx).or_else(|| update_move(scratch, ctx)),
        PlayerState::Jump => update_jump(ctx),
        PlayerState::Air => update_air(scratch, ctx),
        PlayerState::WallSlide => update_wall_slide(scratch, ctx),
        PlayerState::WallJump => update_wall_jump(scratch, ctx),
        PlayerState::Dash => update_dash(scratch, ctx),
        PlayerState::PrimaryAttack => update_primary_attack(scratch, ctx),
        PlayerState::CounterAttack => update_counter_attack(scratch, ctx),
        PlayerState::AimSword => update_aim_sword(ctx),
        PlayerState::CatchSword => scratch.trigger_called.then_some(PlayerState::Idle),
        PlayerState::Blackhole => update_blackhole(scratch, ctx),
        PlayerState::Dead => {
            ctx.set_zero_velocity();
            None
        }
    }
}

/// Checks shared by Idle and Move, in priority order.
fn grounded(ctx: &mut PlayerCtx) -> Option<PlayerState> {
    let input = ctx.input;

    if input.blackhole && ctx.skills.blackhole_ready() {
        return Some(PlayerState::Blackhole);
    }

    if input.aim_pressed && ctx.skills.sword_type().is_some() {
        if ctx.sword_slot.is_empty() {
            return Some(PlayerState::AimSword);
        }
        // aiming while a sword is out calls it back instead
        ctx.requests.push(PlayerRequest::RecallSword);
    }

    if input.counter && ctx.skills.unlocks.counter {
        return Some(PlayerState::CounterAttack);
    }
    if input.attack && !ctx.controller.is_busy() {
        return Some(PlayerState::PrimaryAttack);
    }
    if !ctx.contacts.grounded {
        return Some(PlayerState::Air);
    }
    if input.jump {
        return Some(PlayerState::Jump);
    }
    None
}

fn update_idle(scratch: &StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    let x = scratch.x_input;
    if x == ctx.facing_dir() && ctx.contacts.wall {
        return None;
    }
    (x != 0.0 && !ctx.controller.is_busy()).then_some(PlayerState::Move)
}

fn update_move(scratch: &StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    let x = scratch.x_input;
    let vy = ctx.velocity.y;
    ctx.set_velocity(x * ctx.controller.speeds.move_speed, vy);

    (x == 0.0 || ctx.contacts.wall).then_some(PlayerState::Idle)
}

fn update_jump(ctx: &mut PlayerCtx) -> Option<PlayerState> {
    (ctx.velocity.y < 0.0).then_some(PlayerState::Air)
}

fn update_air(scratch: &StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    if ctx.contacts.wall && ctx.velocity.y < 0.0 {
        return Some(PlayerState::WallSlide);
    }
    if ctx.contacts.grounded {
        return Some(PlayerState::Idle);
    }

    let x = scratch.x_input;
    if x != 0.0 {
        let vy = ctx.velocity.y;
        let speed = ctx.controller.speeds.move_speed * ctx.tuning.air_control;
        ctx.set_velocity(x * speed, vy);
    }
    None
}

fn update_wall_slide(scratch: &StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    if !ctx.contacts.wall {
        return Some(PlayerState::Air);
    }
    if ctx.input.jump {
        return Some(PlayerState::WallJump);
    }
    let x = scratch.x_input;
    if x != 0.0 && x != ctx.facing_dir() {
        return Some(PlayerState::Idle);
    }

    let vy = ctx.velocity.y;
    if scratch.y_input < 0.0 {
        ctx.set_velocity(0.0, vy);
    } else {
        ctx.set_velocity(0.0, vy * ctx.tuning.wall_slide_factor);
    }

    ctx.contacts.grounded.then_some(PlayerState::Idle)
}

fn update_wall_jump(scratch: &StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    if scratch.timer < 0.0 {
        return Some(PlayerState::Air);
    }
    ctx.contacts.grounded.then_some(PlayerState::Idle)
}

fn update_dash(scratch: &StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    if !ctx.contacts.grounded && ctx.contacts.wall {
        return Some(PlayerState::WallSlide);
    }

    let vx = ctx.controller.speeds.dash_speed * ctx.controller.dash_dir;
    ctx.set_velocity(vx, 0.0);
    ctx.requests.push(PlayerRequest::AfterImage);

    (scratch.timer <= 0.0).then_some(PlayerState::Idle)
}

fn update_primary_attack(scratch: &StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    if scratch.timer < 0.0 {
        ctx.set_zero_velocity();
    }
    scratch.trigger_called.then_some(PlayerState::Idle)
}

fn update_counter_attack(scratch: &mut StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    ctx.set_zero_velocity();

    let center = ctx.probes.attack_center(ctx.position, ctx.actor.facing());
    let radius = ctx.probes.attack_radius;
    for target in ctx.counter_targets {
        if !target.window_open || target.position.distance(center) > radius {
            continue;
        }
        scratch.timer = ctx.tuning.counter_success_hold;
        ctx.animator
            .set_bool(AnimFlag::SuccessfulCounterAttack, true);
        ctx.requests.push(PlayerRequest::Stun(target.entity));
    }

    (scratch.timer < 0.0 || scratch.trigger_called).then_some(PlayerState::Idle)
}

fn update_aim_sword(ctx: &mut PlayerCtx) -> Option<PlayerState> {
    ctx.set_zero_velocity();
    ctx.actor.face_towards(ctx.position.x, ctx.input.pointer.x);

    if ctx.input.aim_held {
        return None;
    }

    if let Some(sword_type) = ctx.skills.sword_type()
        && ctx.sword_slot.is_empty()
    {
        let aim = ctx
            .skills
            .sword
            .aim_direction(ctx.position, ctx.input.pointer, ctx.actor.facing());
        ctx.requests
            .push(PlayerRequest::LaunchSword { aim, sword_type });
    }
    Some(PlayerState::Idle)
}

fn update_blackhole(scratch: &mut StateScratch, ctx: &mut PlayerCtx) -> Option<PlayerState> {
    if scratch.timer > 0.0 {
        ctx.set_velocity(0.0, ctx.tuning.fly_speed);
    } else {
        ctx.set_velocity(0.0, ctx.tuning.hover_velocity);

        if !scratch.skill_used {
            if !ctx.skills.blackhole.try_cast() {
                return Some(PlayerState::Air);
            }
            scratch.skill_used = true;
            ctx.requests.push(PlayerRequest::CastBlackhole);
            ctx.requests.push(PlayerRequest::SetTransparent(true));
        }
    }

    ctx.skills
        .blackhole
        .take_completed()
        .then_some(PlayerState::Air)
}
