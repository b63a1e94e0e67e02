//! Sanity checks for loaded gameplay tuning.
//!
//! Issues are reported, never fatal: the values are still used as loaded.

use std::collections::HashSet;

use super::data::GameplayConfig;
use crate::player::PlayerState;

/// A tuning value that will not behave sensibly in play.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Push an issue unless `$value $op $bound` holds.
macro_rules! check_bound {
    ($issues:expr, $section:expr, $owner:expr, $field:ident $op:tt $bound:expr) => {
        if !($owner.$field $op $bound) {
            $issues.push(ValidationIssue {
                section: $section,
                field: stringify!($field),
                message: format!(
                    "expected {} {}, got {}",
                    stringify!($op),
                    $bound,
                    $owner.$field
                ),
            });
        }
    };
}

/// Validate every section of the config. Returns an empty list when all
/// values are usable.
pub fn validate_config(config: &GameplayConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let player = &config.player;
    check_bound!(issues, "player", player, move_speed > 0.0);
    check_bound!(issues, "player", player, jump_force > 0.0);
    check_bound!(issues, "player", player, gravity_scale >= 0.0);
    check_bound!(issues, "player", player, dash_speed > 0.0);
    check_bound!(issues, "player", player, dash_duration > 0.0);
    check_bound!(issues, "player", player, wall_jump_duration > 0.0);
    check_bound!(issues, "player", player, combo_window >= 0.0);
    check_bound!(issues, "player", player, counter_attack_duration > 0.0);
    check_bound!(issues, "player", player, fly_time >= 0.0);
    check_bound!(issues, "player", player, max_health > 0.0);
    if player.attack_movement.is_empty() {
        issues.push(ValidationIssue {
            section: "player",
            field: "attack_movement",
            message: "no combo steps; attacks will not lunge".to_string(),
        });
    }

    let sword = &config.sword;
    if sword.launch_force.iter().any(|f| *f <= 0.0) {
        issues.push(ValidationIssue {
            section: "sword",
            field: "launch_force",
            message: format!("both axes must be positive, got {:?}", sword.launch_force),
        });
    }
    check_bound!(issues, "sword", sword, bounce_speed > 0.0);
    check_bound!(issues, "sword", sword, spin_max_travel > 0.0);
    check_bound!(issues, "sword", sword, spin_hit_cooldown > 0.0);
    check_bound!(issues, "sword", sword, freeze_window > 0.0);
    check_bound!(issues, "sword", sword, max_flight_time > 0.0);
    check_bound!(issues, "sword", sword, return_speed > 0.0);
    check_bound!(issues, "sword", sword, catch_radius > 0.0);
    check_bound!(issues, "sword", sword, dot_count > 0);
    check_bound!(issues, "sword", sword, dot_spacing > 0.0);

    let skills = &config.skills;
    check_bound!(issues, "skills", skills, dash_cooldown >= 0.0);
    check_bound!(issues, "skills", skills, blackhole_cooldown >= 0.0);
    check_bound!(issues, "skills", skills, blackhole_duration > 0.0);
    check_bound!(issues, "skills", skills, blackhole_tick > 0.0);

    let knockback = &config.knockback;
    check_bound!(issues, "knockback", knockback, duration >= 0.0);

    let enemy = &config.enemy;
    check_bound!(issues, "enemy", enemy, max_health > 0.0);
    check_bound!(issues, "enemy", enemy, attack_cooldown > 0.0);
    check_bound!(issues, "enemy", enemy, telegraph_time >= 0.0);
    check_bound!(issues, "enemy", enemy, vulnerable_multiplier >= 1.0);

    let fx = &config.fx;
    check_bound!(issues, "fx", fx, blink_interval > 0.0);
    check_bound!(issues, "fx", fx, ailment_interval > 0.0);
    check_bound!(issues, "fx", fx, after_image_fade > 0.0);

    let mut seen = HashSet::new();
    for clip in &config.animation.clips {
        if !seen.insert(clip.flag) {
            issues.push(ValidationIssue {
                section: "animation",
                field: "clips",
                message: format!("duplicate clip for {:?}", clip.flag),
            });
        }
        if clip.frames == 0 || clip.frame_duration <= 0.0 {
            issues.push(ValidationIssue {
                section: "animation",
                field: "clips",
                message: format!("clip {:?} has no playable frames", clip.flag),
            });
        }
        if let Some(strike) = clip.strike_frame
            && strike >= clip.frames
        {
            issues.push(ValidationIssue {
                section: "animation",
                field: "clips",
                message: format!(
                    "clip {:?} strikes on frame {} of {}",
                    clip.flag, strike, clip.frames
                ),
            });
        }
    }

    if config.reentry.restartable.contains(&PlayerState::Dead) {
        issues.push(ValidationIssue {
            section: "reentry",
            field: "restartable",
            message: "Dead is terminal and cannot be re-entered".to_string(),
        });
    }
    if config.reentry.restartable.contains(&PlayerState::Dash) {
        issues.push(ValidationIssue {
            section: "reentry",
            field: "restartable",
            message: "Dash cannot be re-entered; it would outlast dash_duration".to_string(),
        });
    }

    issues
}
