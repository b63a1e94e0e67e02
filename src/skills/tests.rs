//! Skills domain: tests for cooldowns, sword aiming and per-mode projectile behavior.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use super::{
    BlackholeSkill, BlackholeZone, Impact, PlayerSkills, SkillCooldown, SkillTuning, SkillUnlocks,
    SlotOccupied, Sword, SwordBehavior, SwordEvent, SwordParams, SwordPhase, SwordSkill,
    SwordSlot, SwordTuning, SwordType, SwordWorld, select_type,
};
use crate::actor::Facing;

fn params() -> SwordParams {
    SwordParams {
        freeze_window: 1.0,
        max_flight_time: 4.0,
        return_speed: 8.0,
        catch_radius: 0.5,
        hit_radius: 0.5,
        spin_radius: 1.0,
    }
}

fn owner() -> Entity {
    Entity::from_bits(1)
}

fn world(targets: &[(Entity, Vec2)]) -> SwordWorld<'_> {
    SwordWorld {
        gravity: Vec2::ZERO,
        owner_position: Vec2::ZERO,
        targets,
    }
}

fn sword(velocity: Vec2, behavior: SwordBehavior) -> Sword {
    Sword::new(owner(), velocity, 1.0, behavior, params())
}

fn floor_hit() -> Impact {
    Impact::Terrain {
        point: Vec2::ZERO,
        normal: Vec2::Y,
    }
}

fn count_redirects(events: &[SwordEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SwordEvent::Redirected { .. }))
        .count()
}

fn assert_near(actual: Vec2, expected: Vec2) {
    assert!(
        actual.abs_diff_eq(expected, 1e-4),
        "expected {expected:?}, got {actual:?}"
    );
}

// -----------------------------------------------------------------------------
// Mode selection and aiming tests
// -----------------------------------------------------------------------------

#[test]
fn test_select_type_precedence() {
    let mut unlocks = SkillUnlocks {
        sword: false,
        ..SkillUnlocks::default()
    };
    assert_eq!(select_type(&unlocks), None);

    unlocks.sword = true;
    assert_eq!(select_type(&unlocks), Some(SwordType::Regular));

    unlocks.bounce = true;
    assert_eq!(select_type(&unlocks), Some(SwordType::Bounce));

    unlocks.spin = true;
    assert_eq!(select_type(&unlocks), Some(SwordType::Spin));

    unlocks.pierce = true;
    assert_eq!(select_type(&unlocks), Some(SwordType::Pierce));
}

fn example_skill() -> SwordSkill {
    SwordSkill::new(SwordTuning {
        launch_force: [10.0, 6.0],
        sword_gravity: 1.0,
        dot_count: 6,
        dot_spacing: 0.2,
        ..SwordTuning::default()
    })
}

#[test]
fn test_dot_preview_follows_parabola() {
    let skill = example_skill();
    let origin = Vec2::new(1.0, 2.0);
    let gravity = Vec2::new(0.0, -10.0);
    // normalized (0.6, 0.8) scaled by (10, 6)
    let aim = Vec2::new(3.0, 4.0);

    let dots = skill.dot_positions(origin, aim, SwordType::Regular, gravity);
    assert_eq!(dots.len(), 6);
    assert_eq!(dots[0], origin);
    // t = 1: origin + (6, 4.8) + 0.5 * (0, -10)
    assert_near(dots[5], Vec2::new(7.0, 1.8));

    for pair in dots.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
}

#[test]
fn test_launch_matches_preview_velocity() {
    let skill = example_skill();
    let sword = skill.launch(owner(), Vec2::new(3.0, 4.0), SwordType::Regular);

    assert_near(sword.velocity, Vec2::new(6.0, 4.8));
    assert_eq!(sword.gravity_scale, 1.0);
    assert!(sword.is_flying());
}

#[test]
fn test_mode_gravity_substitution() {
    let tuning = SwordTuning::default();
    let skill = SwordSkill::new(tuning.clone());

    assert_eq!(skill.gravity_for(SwordType::Regular), tuning.sword_gravity);
    assert_eq!(skill.gravity_for(SwordType::Bounce), tuning.bounce_gravity);
    assert_eq!(skill.gravity_for(SwordType::Pierce), tuning.pierce_gravity);
    assert_eq!(skill.gravity_for(SwordType::Spin), tuning.spin_gravity);
}

#[test]
fn test_aim_on_player_points_forward() {
    let skill = example_skill();
    let at = Vec2::new(2.0, 2.0);
    assert_eq!(skill.aim_direction(at, at, Facing::Left), Vec2::new(-1.0, 0.0));
}

// -----------------------------------------------------------------------------
// Flight tests
// -----------------------------------------------------------------------------

#[test]
fn test_flight_is_analytic_parabola() {
    let mut sword = sword(Vec2::new(4.0, 4.0), SwordBehavior::Regular);
    let world = SwordWorld {
        gravity: Vec2::new(0.0, -8.0),
        owner_position: Vec2::ZERO,
        targets: &[],
    };
    let mut events = Vec::new();

    let next = sword.on_update(Vec2::ZERO, 0.5, &world, &mut events);
    // v*t + 0.5*g*t^2 = (2, 2) + (0, -1)
    assert_eq!(next, Vec2::new(2.0, 1.0));
    assert_eq!(sword.velocity, Vec2::new(4.0, 0.0));
    assert!(events.is_empty());
}

#[test]
fn test_flight_timeout_expires() {
    let mut sword = sword(Vec2::new(1.0, 0.0), SwordBehavior::Regular);
    let mut events = Vec::new();
    let mut position = Vec2::ZERO;

    for _ in 0..3 {
        position = sword.on_update(position, 1.0, &world(&[]), &mut events);
    }
    assert!(events.is_empty());

    sword.on_update(position, 1.0, &world(&[]), &mut events);
    assert_eq!(events, vec![SwordEvent::Expired]);
}

// -----------------------------------------------------------------------------
// Regular mode tests
// -----------------------------------------------------------------------------

#[test]
fn test_regular_sticks_then_expires_after_freeze_window() {
    let mut sword = sword(Vec2::new(4.0, -4.0), SwordBehavior::Regular);
    let mut events = Vec::new();

    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);
    assert!(sword.is_stuck());
    assert_eq!(sword.velocity, Vec2::ZERO);
    assert_eq!(events, vec![SwordEvent::Stuck]);

    events.clear();
    sword.on_update(Vec2::ZERO, 0.5, &world(&[]), &mut events);
    assert!(events.is_empty());

    sword.on_update(Vec2::ZERO, 0.5, &world(&[]), &mut events);
    assert_eq!(events, vec![SwordEvent::Expired]);
}

#[test]
fn test_regular_stuck_in_target_rides_along() {
    let target = Entity::from_bits(7);
    let mut sword = sword(Vec2::new(4.0, 0.0), SwordBehavior::Regular);
    let mut events = Vec::new();

    let impact = Impact::Target {
        entity: target,
        position: Vec2::new(2.0, 1.0),
    };
    sword.on_impact(impact, Vec2::new(1.5, 1.0), &world(&[]), &mut events);
    assert_eq!(events, vec![SwordEvent::Damage(target), SwordEvent::Stuck]);

    let moved = [(target, Vec2::new(3.0, 1.0))];
    let next = sword.on_update(Vec2::new(1.5, 1.0), 0.125, &world(&moved), &mut events);
    assert_eq!(next, Vec2::new(2.5, 1.0));
}

#[test]
fn test_impacts_ignored_once_stuck() {
    let mut sword = sword(Vec2::new(4.0, -4.0), SwordBehavior::Regular);
    let mut events = Vec::new();
    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);

    events.clear();
    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);
    assert!(events.is_empty());
}

// -----------------------------------------------------------------------------
// Bounce mode tests
// -----------------------------------------------------------------------------

fn bounce(remaining: u32) -> SwordBehavior {
    SwordBehavior::Bounce {
        remaining,
        speed: 16.0,
        radius: 4.0,
        homing: None,
    }
}

#[test]
fn test_bounce_two_redirects_then_stuck() {
    let mut sword = sword(Vec2::new(4.0, -4.0), bounce(2));
    let mut events = Vec::new();

    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);
    assert_eq!(sword.velocity, Vec2::new(4.0, 4.0));
    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);
    assert!(sword.is_flying());

    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);
    assert_eq!(count_redirects(&events), 2);
    assert!(sword.is_stuck());
}

#[test]
fn test_bounce_zero_sticks_immediately() {
    let mut sword = sword(Vec2::new(4.0, -4.0), bounce(0));
    let mut events = Vec::new();

    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);
    assert_eq!(count_redirects(&events), 0);
    assert!(sword.is_stuck());
}

#[test]
fn test_bounce_homes_on_nearest_other_target() {
    let first = Entity::from_bits(10);
    let near = Entity::from_bits(11);
    let far = Entity::from_bits(12);
    let targets = [
        (first, Vec2::new(2.0, 0.0)),
        (far, Vec2::new(2.0, 3.5)),
        (near, Vec2::new(4.0, 0.0)),
    ];
    let mut sword = sword(Vec2::new(4.0, 0.0), bounce(1));
    let mut events = Vec::new();

    let impact = Impact::Target {
        entity: first,
        position: targets[0].1,
    };
    sword.on_impact(impact, Vec2::new(2.0, 0.0), &world(&targets), &mut events);

    assert_eq!(events[0], SwordEvent::Damage(first));
    assert_eq!(sword.velocity, Vec2::new(16.0, 0.0));
    assert!(matches!(
        sword.behavior,
        SwordBehavior::Bounce {
            remaining: 0,
            homing: Some(target),
            ..
        } if target == near
    ));
    assert_eq!(sword.effective_gravity(), 0.0);
}

// -----------------------------------------------------------------------------
// Pierce mode tests
// -----------------------------------------------------------------------------

fn pierce(remaining: u32) -> SwordBehavior {
    SwordBehavior::Pierce {
        remaining,
        struck: HashSet::new(),
    }
}

fn hit(entity: Entity) -> Impact {
    Impact::Target {
        entity,
        position: Vec2::ZERO,
    }
}

#[test]
fn test_pierce_counts_each_target_once() {
    let a = Entity::from_bits(20);
    let b = Entity::from_bits(21);
    let c = Entity::from_bits(22);
    let mut sword = sword(Vec2::new(4.0, 0.0), pierce(2));
    let mut events = Vec::new();

    sword.on_impact(hit(a), Vec2::ZERO, &world(&[]), &mut events);
    sword.on_impact(hit(a), Vec2::ZERO, &world(&[]), &mut events);
    sword.on_impact(hit(b), Vec2::ZERO, &world(&[]), &mut events);
    assert!(sword.is_flying());
    assert_eq!(
        events,
        vec![SwordEvent::Damage(a), SwordEvent::Damage(b)],
        "re-striking a target must not spend budget"
    );

    sword.on_impact(hit(c), Vec2::ZERO, &world(&[]), &mut events);
    assert_eq!(events.last(), Some(&SwordEvent::Stuck));
    assert!(sword.is_stuck());
}

#[test]
fn test_pierce_sticks_in_terrain() {
    let mut sword = sword(Vec2::new(4.0, 0.0), pierce(3));
    let mut events = Vec::new();
    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);
    assert!(sword.is_stuck());
}

// -----------------------------------------------------------------------------
// Spin mode tests
// -----------------------------------------------------------------------------

fn spin() -> SwordBehavior {
    SwordBehavior::Spin {
        max_travel: 1.0,
        duration: 0.5,
        hit_cooldown: 0.25,
        cooldowns: HashMap::new(),
    }
}

#[test]
fn test_spin_starts_at_max_travel_and_returns_on_its_own() {
    let target = Entity::from_bits(30);
    let mut sword = sword(Vec2::new(4.0, 0.0), spin());
    let mut events = Vec::new();

    let mut position = sword.on_update(Vec2::ZERO, 0.125, &world(&[]), &mut events);
    assert!(sword.is_flying());
    position = sword.on_update(position, 0.125, &world(&[]), &mut events);
    assert_eq!(events, vec![SwordEvent::SpinStarted]);
    assert_eq!(sword.phase, SwordPhase::Spinning { remaining: 0.5 });

    events.clear();
    let targets = [(target, position)];
    for _ in 0..4 {
        sword.on_update(position, 0.125, &world(&targets), &mut events);
    }
    assert_eq!(
        events,
        vec![SwordEvent::Damage(target), SwordEvent::Damage(target)]
    );
    assert_eq!(sword.phase, SwordPhase::Returning);
}

#[test]
fn test_spin_impact_starts_spinning() {
    let mut sword = sword(Vec2::new(4.0, 0.0), spin());
    let mut events = Vec::new();
    sword.on_impact(floor_hit(), Vec2::ZERO, &world(&[]), &mut events);

    assert_eq!(events, vec![SwordEvent::SpinStarted]);
    assert_eq!(sword.velocity, Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Recall and overlap tests
// -----------------------------------------------------------------------------

#[test]
fn test_recall_returns_and_is_caught() {
    let mut sword = sword(Vec2::new(4.0, 0.0), SwordBehavior::Regular);
    assert!(sword.recall());
    assert!(!sword.recall());

    let mut events = Vec::new();
    let mut position = Vec2::new(3.0, 0.0);
    position = sword.on_update(position, 0.125, &world(&[]), &mut events);
    assert_eq!(position, Vec2::new(2.0, 0.0));
    position = sword.on_update(position, 0.125, &world(&[]), &mut events);
    assert!(events.is_empty());

    position = sword.on_update(position, 0.125, &world(&[]), &mut events);
    assert_eq!(position, Vec2::ZERO);
    assert_eq!(events, vec![SwordEvent::Caught]);
}

#[test]
fn test_overlap_counts_entering_only() {
    let target = Entity::from_bits(40);
    let mut sword = sword(Vec2::new(4.0, 0.0), SwordBehavior::Regular);
    let targets = [(target, Vec2::new(1.0, 0.0))];

    assert_eq!(sword.track_overlaps(Vec2::new(1.25, 0.0), &targets).len(), 1);
    assert!(sword.track_overlaps(Vec2::new(1.25, 0.0), &targets).is_empty());
    assert!(sword.track_overlaps(Vec2::new(3.0, 0.0), &targets).is_empty());
    assert_eq!(sword.track_overlaps(Vec2::new(1.0, 0.0), &targets).len(), 1);
}

// -----------------------------------------------------------------------------
// Slot tests
// -----------------------------------------------------------------------------

#[test]
fn test_slot_rejects_second_sword() {
    let first = Entity::from_bits(50);
    let second = Entity::from_bits(51);
    let mut slot = SwordSlot::default();

    assert!(slot.assign(first).is_ok());
    assert_eq!(slot.assign(second), Err(SlotOccupied(first)));
    assert_eq!(slot.current(), Some(first));

    assert!(!slot.release(second));
    assert!(slot.release(first));
    assert!(slot.is_empty());
}

// -----------------------------------------------------------------------------
// Cooldown tests
// -----------------------------------------------------------------------------

#[test]
fn test_cooldown_gates_reuse() {
    let mut cooldown = SkillCooldown::new(1.0);
    assert!(cooldown.try_use());
    assert!(!cooldown.try_use());

    cooldown.tick(0.5);
    assert_eq!(cooldown.remaining(), 0.5);
    cooldown.tick(0.5);
    assert!(cooldown.try_use());
}

#[test]
fn test_dash_needs_unlock() {
    let unlocks = SkillUnlocks {
        dash: false,
        ..SkillUnlocks::default()
    };
    let mut skills = PlayerSkills::new(unlocks, &SkillTuning::default(), &SwordTuning::default());
    assert!(!skills.try_dash());

    skills.unlocks.dash = true;
    assert!(skills.try_dash());
    assert!(!skills.try_dash());
}

#[test]
fn test_blackhole_reports_completion_once() {
    let mut blackhole = BlackholeSkill::new(4.0, 1.0);
    assert!(blackhole.try_cast());
    assert!(blackhole.is_active());
    assert!(!blackhole.try_cast());

    blackhole.tick(1.0);
    assert!(!blackhole.is_active());
    assert!(blackhole.take_completed());
    assert!(!blackhole.take_completed());

    // still cooling down
    assert!(!blackhole.ready());
    blackhole.tick(3.0);
    assert!(blackhole.ready());
}

#[test]
fn test_blackhole_zone_pulses_on_interval() {
    let tuning = SkillTuning {
        blackhole_duration: 1.0,
        blackhole_tick: 0.5,
        ..SkillTuning::default()
    };
    let mut zone = BlackholeZone::new(owner(), &tuning);

    assert!(!zone.tick(0.25));
    assert!(zone.tick(0.25));
    assert!(!zone.tick(0.25));
    assert!(zone.tick(0.25));
    assert!(zone.is_expired());
}
