//! Debug domain: tests for the sword mode cycle, messages and snapshots.

use bevy::prelude::*;

use super::*;
use crate::actor::{Actor, Facing, Knockback, KnockbackEnd, KnockbackTuning};
use crate::combat::Health;
use crate::player::{
    PlayerController, PlayerState, PlayerStateMachine, PlayerTuning, ReentryPolicy,
};
use crate::skills::{
    PlayerSkills, SkillTuning, SkillUnlocks, SwordSlot, SwordTuning, SwordType, select_type,
};

#[test]
fn test_sword_mode_cycles_through_all_modes() {
    let mut unlocks = SkillUnlocks::default();
    let mut seen = Vec::new();
    for _ in 0..4 {
        unlocks = cycle_sword_mode(&unlocks);
        seen.push(select_type(&unlocks));
    }

    assert_eq!(
        seen,
        vec![
            Some(SwordType::Bounce),
            Some(SwordType::Pierce),
            Some(SwordType::Spin),
            Some(SwordType::Regular),
        ]
    );
}

#[test]
fn test_sword_mode_cycle_keeps_other_unlocks() {
    let unlocks = SkillUnlocks {
        sword: false,
        dash: false,
        time_stop: true,
        ..SkillUnlocks::default()
    };
    let next = cycle_sword_mode(&unlocks);

    assert_eq!(select_type(&next), Some(SwordType::Regular));
    assert!(!next.dash);
    assert!(next.time_stop);
}

#[test]
fn test_status_message_expires() {
    let mut state = DebugState::default();
    state.set_message("hello", 0.25);

    assert!(state.tick_message(0.125));
    assert!(!state.tick_message(0.125));
    assert!(state.status_message.is_none());
}

#[test]
fn test_snapshot_serializes_player() {
    let tuning = PlayerTuning::default();
    let mut machine = PlayerStateMachine::new(&ReentryPolicy::default());
    machine.scratch.timer = 0.5;
    let controller = PlayerController::new(&tuning);
    let actor = Actor::new(
        Facing::Left,
        Knockback::new(&KnockbackTuning::default(), KnockbackEnd::ZeroPower),
    );
    let skills = PlayerSkills::new(
        SkillUnlocks::default(),
        &SkillTuning::default(),
        &SwordTuning::default(),
    );
    let mut slot = SwordSlot::default();
    assert!(slot.assign(Entity::from_bits(7)).is_ok());

    let snapshot = PlayerSnapshot::capture(
        &machine,
        &controller,
        &actor,
        &skills,
        &slot,
        &Health::new(50.0),
        Vec2::new(1.5, -2.0),
        Vec2::ZERO,
    );
    assert_eq!(snapshot.state, None::<PlayerState>);
    assert!(snapshot.sword_out);

    let json = snapshot.to_json().expect("snapshot serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["facing"], "Left");
    assert_eq!(value["position"][0], 1.5);
    assert_eq!(value["sword_type"], "Regular");
    assert_eq!(value["scratch"]["timer"], 0.5);
    assert_eq!(value["health"], 50.0);
}
