//! Content domain: tests for config parsing and validation.

use super::*;
use crate::animation::{AnimFlag, ClipDef};
use crate::player::PlayerState;

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_empty_file_uses_defaults() {
    let config = parse_gameplay_config("()", "inline").expect("empty config parses");
    assert_eq!(config.seed, None);
    assert_eq!(config.player.move_speed, 8.0);
    assert_eq!(config.sword.max_flight_time, 7.0);
    assert_eq!(config.reentry.restartable, vec![PlayerState::PrimaryAttack]);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = parse_gameplay_config("(player: (move_speed: 4.5), unlocks: (spin: true))", "inline")
        .expect("partial config parses");

    assert_eq!(config.player.move_speed, 4.5);
    assert_eq!(config.player.jump_force, 12.0);
    assert!(config.unlocks.spin);
    assert!(config.unlocks.sword);
}

#[test]
fn test_seed_without_some_wrapper() {
    let config = parse_gameplay_config("(seed: 42)", "inline").expect("seed parses");
    assert_eq!(config.seed, Some(42));
}

#[test]
fn test_reentry_states_parse_by_name() {
    let config = parse_gameplay_config(
        "(reentry: (restartable: [PrimaryAttack, CounterAttack]))",
        "inline",
    )
    .expect("reentry parses");
    assert_eq!(
        config.reentry.restartable,
        vec![PlayerState::PrimaryAttack, PlayerState::CounterAttack]
    );
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_gameplay_config("(player: (move_speed: fast))", "bad.ron")
        .expect_err("non-numeric speed fails");
    assert_eq!(err.file, "bad.ron");
    assert!(err.to_string().starts_with("Failed to load bad.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_gameplay_config(std::path::Path::new("does/not/exist.ron"))
        .expect_err("missing file fails");
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_is_clean() {
    let contents = include_str!("../../assets/data/gameplay.ron");
    let config = parse_gameplay_config(contents, "gameplay.ron").expect("shipped config parses");
    assert!(validate_config(&config).is_empty());
    assert_eq!(config.player.attack_movement.len(), 3);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_validate_clean() {
    assert_eq!(validate_config(&GameplayConfig::default()), Vec::new());
}

#[test]
fn test_nonpositive_values_reported() {
    let mut config = GameplayConfig::default();
    config.player.dash_duration = 0.0;
    config.sword.dot_count = 0;

    let issues = validate_config(&config);
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].section, "player");
    assert_eq!(issues[0].field, "dash_duration");
    assert_eq!(issues[1].field, "dot_count");
    assert_eq!(issues[0].to_string(), "player.dash_duration: expected > 0, got 0");
}

#[test]
fn test_empty_combo_reported() {
    let mut config = GameplayConfig::default();
    config.player.attack_movement.clear();

    let issues = validate_config(&config);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "attack_movement");
}

#[test]
fn test_dead_cannot_be_restartable() {
    let mut config = GameplayConfig::default();
    config.reentry.restartable.push(PlayerState::Dead);

    let issues = validate_config(&config);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].section, "reentry");
}

#[test]
fn test_dash_cannot_be_restartable() {
    let mut config = GameplayConfig::default();
    config.reentry.restartable.push(PlayerState::Dash);

    let issues = validate_config(&config);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "restartable");
    assert!(issues[0].message.starts_with("Dash cannot be re-entered"));
}

#[test]
fn test_clip_problems_reported() {
    let mut config = GameplayConfig::default();
    config.animation.clips.push(ClipDef {
        flag: AnimFlag::Idle,
        frames: 2,
        frame_duration: 0.125,
        looping: true,
        strike_frame: Some(5),
    });

    let issues = validate_config(&config);
    let messages: Vec<String> = issues.iter().map(|i| i.message.clone()).collect();
    assert_eq!(issues.len(), 2, "{messages:?}");
    assert!(messages[0].contains("duplicate clip"));
    assert!(messages[1].contains("strikes on frame 5 of 2"));
}
