//! Actor domain: tests for facing, knockback and probe geometry.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::*;

fn test_actor(on_end: KnockbackEnd) -> Actor {
    let tuning = KnockbackTuning {
        power: [4.0, 8.0],
        offset: [1.0, 1.0],
        duration: 0.25,
    };
    Actor::new(Facing::Right, Knockback::new(&tuning, on_end))
}

#[test]
fn test_facing_dir_is_unit() {
    assert_eq!(Facing::Right.dir(), 1.0);
    assert_eq!(Facing::Left.dir(), -1.0);
    assert_eq!(Facing::Right.flipped(), Facing::Left);
    assert_eq!(Facing::from_sign(0.0), None);
}

#[test]
fn test_flip_controller_only_flips_against_facing() {
    let mut actor = test_actor(KnockbackEnd::Keep);

    actor.flip_controller(1.0);
    actor.flip_controller(0.0);
    assert_eq!(actor.facing(), Facing::Right);
    assert!(actor.drain_flips().is_empty());

    actor.flip_controller(-0.5);
    assert_eq!(actor.facing(), Facing::Left);
    assert_eq!(actor.drain_flips(), vec![Facing::Left]);
}

#[test]
fn test_each_flip_queues_one_notification() {
    let mut actor = test_actor(KnockbackEnd::Keep);
    actor.flip();
    actor.flip();
    assert_eq!(actor.drain_flips(), vec![Facing::Left, Facing::Right]);
    assert!(actor.drain_flips().is_empty());
}

#[test]
fn test_set_velocity_flips_towards_motion() {
    let mut actor = test_actor(KnockbackEnd::Keep);
    let mut velocity = Vec2::ZERO;

    actor.set_velocity(&mut velocity, -3.0, 2.0);
    assert_eq!(velocity, Vec2::new(-3.0, 2.0));
    assert_eq!(actor.facing(), Facing::Left);
}

#[test]
fn test_knockback_blocks_velocity_writes_until_expired() {
    let mut actor = test_actor(KnockbackEnd::Keep);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut velocity = Vec2::ZERO;

    actor.setup_knockback_dir(5.0, 0.0);
    actor.hit_knockback(&mut velocity, &mut rng);
    assert!(actor.is_knocked());
    // attacker on the right pushes left; offset range is the single value 1.0
    assert_eq!(velocity, Vec2::new(-5.0, 8.0));

    actor.set_velocity(&mut velocity, 2.0, 0.0);
    actor.set_zero_velocity(&mut velocity);
    assert_eq!(velocity, Vec2::new(-5.0, 8.0));
    assert_eq!(actor.facing(), Facing::Right);

    actor.tick_knockback(0.125);
    assert!(actor.is_knocked());
    actor.tick_knockback(0.125);
    assert!(!actor.is_knocked());

    actor.set_velocity(&mut velocity, 2.0, 0.0);
    assert_eq!(velocity, Vec2::new(2.0, 0.0));
}

#[test]
fn test_knockback_dir_keeps_previous_when_aligned() {
    let mut actor = test_actor(KnockbackEnd::Keep);
    actor.setup_knockback_dir(-2.0, 0.0);
    assert_eq!(actor.knockback.direction, 1.0);
    actor.setup_knockback_dir(0.0, 0.0);
    assert_eq!(actor.knockback.direction, 1.0);
}

#[test]
fn test_every_hit_pushes_with_configured_power() {
    let mut actor = test_actor(KnockbackEnd::ZeroPower);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut velocity = Vec2::ZERO;

    for _ in 0..3 {
        velocity = Vec2::new(3.0, 0.0);
        actor.setup_knockback_dir(1.0, 0.0);
        actor.hit_knockback(&mut velocity, &mut rng);
        assert!(actor.is_knocked());
        assert_eq!(velocity, Vec2::new(-5.0, 8.0));
        actor.tick_knockback(0.5);
        assert!(!actor.is_knocked());
    }
}

#[test]
fn test_zero_power_policy_drops_override_after_knockback() {
    let mut actor = test_actor(KnockbackEnd::ZeroPower);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut velocity = Vec2::ZERO;

    actor.setup_knockback_dir(-1.0, 0.0);
    actor.setup_knockback_power(Vec2::new(10.0, 2.0));
    actor.hit_knockback(&mut velocity, &mut rng);
    assert_eq!(velocity, Vec2::new(11.0, 2.0));

    actor.tick_knockback(0.5);
    assert_eq!(actor.knockback.power_override, None);
    assert_eq!(actor.knockback.power, Vec2::new(4.0, 8.0));

    // next hit is back on the configured power
    actor.hit_knockback(&mut velocity, &mut rng);
    assert_eq!(velocity, Vec2::new(5.0, 8.0));
}

#[test]
fn test_keep_policy_preserves_override() {
    let mut actor = test_actor(KnockbackEnd::Keep);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut velocity = Vec2::ZERO;

    actor.setup_knockback_power(Vec2::new(2.0, 0.0));
    actor.hit_knockback(&mut velocity, &mut rng);
    actor.tick_knockback(0.5);
    assert_eq!(actor.knockback.effective_power(), Vec2::new(2.0, 0.0));
}

#[test]
fn test_probe_geometry_follows_facing() {
    let probes = Probes {
        ground: Probe {
            offset: Vec2::new(0.0, -0.5),
            distance: 0.25,
        },
        wall: Probe {
            offset: Vec2::ZERO,
            distance: 0.5,
        },
        attack_offset: Vec2::new(1.0, 0.5),
        attack_radius: 0.75,
    };
    let position = Vec2::new(2.0, 3.0);

    let (origin, dir, distance) = probes.ground_ray(position);
    assert_eq!(origin, Vec2::new(2.0, 2.5));
    assert_eq!(dir, Dir2::NEG_Y);
    assert_eq!(distance, 0.25);

    let (_, dir, _) = probes.wall_ray(position, Facing::Left);
    assert_eq!(dir, Dir2::NEG_X);

    assert_eq!(
        probes.attack_center(position, Facing::Left),
        Vec2::new(1.0, 3.5)
    );
}
