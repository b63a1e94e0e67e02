//! UI domain: tests for HUD formatting.

use bevy::prelude::*;

use super::hud_player::{SwordLostNotice, SwordStatus, health_color, status_line};
use crate::player::PlayerState;
use crate::skills::{PlayerSkills, SkillTuning, SkillUnlocks, SwordSlot, SwordTuning, SwordType};

fn skills(unlocks: SkillUnlocks) -> PlayerSkills {
    PlayerSkills::new(unlocks, &SkillTuning::default(), &SwordTuning::default())
}

#[test]
fn test_status_line_idle() {
    let line = status_line(
        Some(PlayerState::Idle),
        SwordStatus::Ready(SwordType::Regular),
        0.0,
        0.0,
    );
    assert_eq!(line, "Idle | sword: Regular");
}

#[test]
fn test_status_line_busy_and_dash() {
    let line = status_line(Some(PlayerState::Dash), SwordStatus::Out, 0.125, 0.75);
    assert_eq!(line, "Dash | sword: out | busy | dash 0.8s");
}

#[test]
fn test_status_line_before_first_step() {
    assert_eq!(status_line(None, SwordStatus::Locked, 0.0, 0.0), "- | sword: locked");
}

#[test]
fn test_sword_status_follows_slot_and_unlocks() {
    let mut slot = SwordSlot::default();
    let unlocks = SkillUnlocks {
        spin: true,
        ..SkillUnlocks::default()
    };
    assert_eq!(
        SwordStatus::of(&skills(unlocks), &slot),
        SwordStatus::Ready(SwordType::Spin)
    );

    assert!(slot.assign(Entity::from_bits(4)).is_ok());
    assert_eq!(SwordStatus::of(&skills(SkillUnlocks::default()), &slot), SwordStatus::Out);

    let locked = SkillUnlocks {
        sword: false,
        ..SkillUnlocks::default()
    };
    assert_eq!(
        SwordStatus::of(&skills(locked), &SwordSlot::default()),
        SwordStatus::Locked
    );
}

#[test]
fn test_health_color_ends() {
    let full = health_color(1.0).to_srgba();
    assert!(full.green > full.red);
    assert_eq!(health_color(0.0), Color::srgb(0.9, 0.2, 0.2));
}

#[test]
fn test_lost_sword_notice_expires() {
    let mut notice = SwordLostNotice::default();
    assert_eq!(notice.suffix(), None);

    notice.show(SwordType::Bounce, 0.25);
    notice.tick(0.125);
    assert_eq!(notice.suffix().as_deref(), Some(" | Bounce sword lost"));

    notice.tick(0.125);
    assert_eq!(notice.suffix(), None);
}
