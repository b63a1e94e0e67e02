//! Animation domain: typed animator parameters and clip playback cues.

mod animator;

pub use animator::{
    AnimFlag, AnimFloat, AnimInt, AnimationCue, AnimationCueEvent, AnimationTuning, Animator,
    ClipDef,
};

use bevy::prelude::*;

use crate::animation::animator::advance_animators;
use crate::core::GameplaySet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationTuning>()
            .add_message::<AnimationCueEvent>()
            .add_systems(Update, advance_animators.in_set(GameplaySet::Tick));
    }
}
