//! Combat domain: tests for health, enemy behavior and statuses.

use super::{Enemy, EnemyIntent, EnemyPhase, EnemyStatus, EnemyTuning, Health};

fn tuning() -> EnemyTuning {
    EnemyTuning {
        detection_range: 8.0,
        attack_range: 1.5,
        attack_cooldown: 2.0,
        telegraph_time: 0.5,
        recover_time: 0.25,
        ..EnemyTuning::default()
    }
}

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_damage_is_clamped() {
    let mut health = Health::new(20.0);
    assert_eq!(health.take_damage(15.0), 15.0);
    assert_eq!(health.take_damage(15.0), 5.0);
    assert!(health.is_dead());
    assert_eq!(health.percent(), 0.0);
}

// -----------------------------------------------------------------------------
// Enemy behavior tests
// -----------------------------------------------------------------------------

#[test]
fn test_enemy_ignores_player_out_of_range() {
    let mut enemy = Enemy::default();
    assert_eq!(enemy.tick(0.1, Some(20.0), &tuning()), EnemyIntent::Hold);
    assert_eq!(enemy.tick(0.1, None, &tuning()), EnemyIntent::Hold);
    assert_eq!(enemy.phase, EnemyPhase::Idle);
}

#[test]
fn test_enemy_chases_towards_player() {
    let mut enemy = Enemy::default();
    assert_eq!(enemy.tick(0.1, Some(-4.0), &tuning()), EnemyIntent::Move(-1.0));
    assert_eq!(enemy.phase, EnemyPhase::Chase);
}

#[test]
fn test_enemy_telegraphs_then_strikes_once() {
    let tuning = tuning();
    let mut enemy = Enemy::default();

    assert_eq!(enemy.tick(0.125, Some(1.0), &tuning), EnemyIntent::Hold);
    assert!(enemy.counter_window_open());

    assert_eq!(enemy.tick(0.25, Some(1.0), &tuning), EnemyIntent::Hold);
    assert_eq!(enemy.tick(0.25, Some(1.0), &tuning), EnemyIntent::Strike);
    assert!(!enemy.counter_window_open());

    // recovering, then on cooldown: no second strike yet
    assert_eq!(enemy.tick(0.25, Some(1.0), &tuning), EnemyIntent::Hold);
    assert_eq!(enemy.tick(0.25, Some(1.0), &tuning), EnemyIntent::Hold);
    assert!(!enemy.counter_window_open());
}

#[test]
fn test_stun_requires_open_counter_window() {
    let tuning = tuning();
    let mut enemy = Enemy::default();
    assert!(!enemy.try_stun(1.0));

    enemy.tick(0.125, Some(1.0), &tuning);
    assert!(enemy.try_stun(1.0));
    assert!(enemy.is_stunned());
    // window closed by the stun
    assert!(!enemy.try_stun(1.0));

    assert_eq!(enemy.tick(0.5, Some(1.0), &tuning), EnemyIntent::Hold);
    assert!(enemy.is_stunned());
    enemy.tick(0.5, Some(1.0), &tuning);
    assert_eq!(enemy.phase, EnemyPhase::Idle);
}

// -----------------------------------------------------------------------------
// Status tests
// -----------------------------------------------------------------------------

#[test]
fn test_status_keeps_longest_duration() {
    let mut status = EnemyStatus::default();
    status.freeze_for(1.0);
    status.freeze_for(0.5);
    status.vulnerable_for(2.0);

    status.tick(0.75);
    assert!(status.is_frozen());
    status.tick(0.25);
    assert!(!status.is_frozen());
    assert!(status.is_vulnerable());
}
