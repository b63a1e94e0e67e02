//! Typed animator parameters and clip playback.
//!
//! States drive the animator through typed flags instead of string keys.
//! Playback follows the most recently raised flag and reports two cues:
//! the strike frame of an attack clip and the end of a non-looping clip.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Boolean animator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimFlag {
    Idle,
    Move,
    Jump,
    WallSlide,
    Dash,
    Attack,
    CounterAttack,
    SuccessfulCounterAttack,
    AimSword,
    CatchSword,
    Die,
}

/// Float animator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimFloat {
    YVelocity,
}

/// Integer animator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimInt {
    ComboCounter,
}

/// Playback events raised while a clip advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCue {
    /// The clip reached its strike frame (melee hit moment).
    Strike,
    /// A non-looping clip played its last frame.
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipDef {
    pub flag: AnimFlag,
    pub frames: u32,
    pub frame_duration: f32,
    pub looping: bool,
    /// Frame index at which `AnimationCue::Strike` fires.
    pub strike_frame: Option<u32>,
}

impl ClipDef {
    fn new(flag: AnimFlag, frames: u32, frame_duration: f32, looping: bool) -> Self {
        Self {
            flag,
            frames,
            frame_duration,
            looping,
            strike_frame: None,
        }
    }

    fn with_strike(mut self, frame: u32) -> Self {
        self.strike_frame = Some(frame);
        self
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTuning {
    pub clips: Vec<ClipDef>,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            clips: vec![
                ClipDef::new(AnimFlag::Idle, 4, 0.15, true),
                ClipDef::new(AnimFlag::Move, 6, 0.1, true),
                ClipDef::new(AnimFlag::Jump, 2, 0.15, true),
                ClipDef::new(AnimFlag::WallSlide, 2, 0.15, true),
                ClipDef::new(AnimFlag::Dash, 3, 0.07, true),
                ClipDef::new(AnimFlag::Attack, 4, 0.0625, false).with_strike(2),
                ClipDef::new(AnimFlag::CounterAttack, 2, 0.1, true),
                ClipDef::new(AnimFlag::SuccessfulCounterAttack, 4, 0.0625, false).with_strike(1),
                ClipDef::new(AnimFlag::AimSword, 2, 0.2, true),
                ClipDef::new(AnimFlag::CatchSword, 3, 0.0625, false),
                ClipDef::new(AnimFlag::Die, 4, 0.15, false),
            ],
        }
    }
}

impl AnimationTuning {
    pub fn clip(&self, flag: AnimFlag) -> Option<&ClipDef> {
        self.clips.iter().find(|clip| clip.flag == flag)
    }
}

#[derive(Debug, Clone)]
struct Playback {
    clip: ClipDef,
    frame: u32,
    timer: f32,
    finished: bool,
}

impl Playback {
    fn start(clip: ClipDef) -> Self {
        Self {
            clip,
            frame: 0,
            timer: 0.0,
            finished: false,
        }
    }
}

/// Animator parameters plus the clip currently playing.
#[derive(Component, Debug, Clone)]
pub struct Animator {
    clips: Vec<ClipDef>,
    /// Raised flags in the order they were set.
    flags: Vec<AnimFlag>,
    y_velocity: f32,
    combo_counter: i32,
    speed: f32,
    playback: Option<Playback>,
    cues: Vec<AnimationCue>,
}

impl Animator {
    pub fn new(tuning: &AnimationTuning) -> Self {
        Self {
            clips: tuning.clips.clone(),
            flags: Vec::new(),
            y_velocity: 0.0,
            combo_counter: 0,
            speed: 1.0,
            playback: None,
            cues: Vec::new(),
        }
    }

    /// Raising a lowered flag restarts its clip; lowering the playing flag
    /// falls back to the most recent flag still raised.
    pub fn set_bool(&mut self, flag: AnimFlag, value: bool) {
        let raised = self.flags.contains(&flag);
        if value && !raised {
            self.flags.push(flag);
            self.play(flag);
        } else if !value && raised {
            self.flags.retain(|f| *f != flag);
            let was_playing = self
                .playback
                .as_ref()
                .is_some_and(|playback| playback.clip.flag == flag);
            if was_playing {
                self.playback = None;
                if let Some(&latest) = self.flags.last() {
                    self.play(latest);
                }
            }
        }
    }

    pub fn get_bool(&self, flag: AnimFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn set_float(&mut self, param: AnimFloat, value: f32) {
        match param {
            AnimFloat::YVelocity => self.y_velocity = value,
        }
    }

    pub fn get_float(&self, param: AnimFloat) -> f32 {
        match param {
            AnimFloat::YVelocity => self.y_velocity,
        }
    }

    pub fn set_integer(&mut self, param: AnimInt, value: i32) {
        match param {
            AnimInt::ComboCounter => self.combo_counter = value,
        }
    }

    pub fn get_integer(&self, param: AnimInt) -> i32 {
        match param {
            AnimInt::ComboCounter => self.combo_counter,
        }
    }

    /// Playback rate multiplier (slow effects).
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn playing(&self) -> Option<AnimFlag> {
        self.playback.as_ref().map(|playback| playback.clip.flag)
    }

    pub fn frame(&self) -> u32 {
        self.playback.as_ref().map_or(0, |playback| playback.frame)
    }

    fn play(&mut self, flag: AnimFlag) {
        self.playback = self
            .clips
            .iter()
            .find(|clip| clip.flag == flag)
            .cloned()
            .map(Playback::start);
    }

    pub fn tick(&mut self, dt: f32) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        if playback.finished {
            return;
        }

        let clip = &playback.clip;
        if clip.frame_duration <= 0.0 || clip.frames == 0 {
            if !clip.looping {
                playback.finished = true;
                self.cues.push(AnimationCue::Finished);
            }
            return;
        }

        playback.timer += dt * self.speed;
        while playback.timer >= clip.frame_duration {
            playback.timer -= clip.frame_duration;
            playback.frame += 1;

            if clip.strike_frame == Some(playback.frame) {
                self.cues.push(AnimationCue::Strike);
            }

            if playback.frame >= clip.frames {
                if clip.looping {
                    playback.frame = 0;
                } else {
                    playback.frame = clip.frames - 1;
                    playback.finished = true;
                    self.cues.push(AnimationCue::Finished);
                    break;
                }
            }
        }
    }

    pub fn drain_cues(&mut self) -> Vec<AnimationCue> {
        std::mem::take(&mut self.cues)
    }
}

/// Message forwarded for every cue an animator raised this frame.
#[derive(Debug)]
pub struct AnimationCueEvent {
    pub entity: Entity,
    pub cue: AnimationCue,
}

impl Message for AnimationCueEvent {}

/// System that advances every animator and forwards its cues.
pub fn advance_animators(
    time: Res<Time>,
    mut query: Query<(Entity, &mut Animator)>,
    mut cue_events: MessageWriter<AnimationCueEvent>,
) {
    let dt = time.delta_secs();
    for (entity, mut animator) in &mut query {
        animator.tick(dt);
        for cue in animator.drain_cues() {
            cue_events.write(AnimationCueEvent { entity, cue });
        }
    }
}
