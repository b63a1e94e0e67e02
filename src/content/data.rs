//! Gameplay configuration schema, one section per gameplay domain.

use serde::{Deserialize, Serialize};

use crate::actor::KnockbackTuning;
use crate::animation::AnimationTuning;
use crate::combat::EnemyTuning;
use crate::fx::FxTuning;
use crate::player::{PlayerTuning, ReentryPolicy};
use crate::skills::{SkillTuning, SkillUnlocks, SwordTuning};

/// Root of `assets/data/gameplay.ron`. Every section is optional in the file
/// and falls back to its `Default`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Fixed RNG seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
    pub player: PlayerTuning,
    pub knockback: KnockbackTuning,
    pub sword: SwordTuning,
    pub skills: SkillTuning,
    pub unlocks: SkillUnlocks,
    pub enemy: EnemyTuning,
    pub fx: FxTuning,
    pub animation: AnimationTuning,
    pub reentry: ReentryPolicy,
}
