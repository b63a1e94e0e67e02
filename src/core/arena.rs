//! Core domain: static arena geometry (floor, side walls, ledges).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::GameLayer;

/// Top surface of the arena floor in world units.
pub const ARENA_FLOOR_Y: f32 = 0.0;

const ARENA_HALF_WIDTH: f32 = 15.0;
const WALL_HEIGHT: f32 = 14.0;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

pub(crate) fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let wall_color = Color::srgb(0.25, 0.25, 0.35);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player, GameLayer::Enemy]);

    // Floor
    let floor_size = Vec2::new(ARENA_HALF_WIDTH * 2.0 + 2.0, 1.0);
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(floor_size),
            ..default()
        },
        Transform::from_xyz(0.0, ARENA_FLOOR_Y - floor_size.y * 0.5, 0.0),
        RigidBody::Static,
        Collider::rectangle(floor_size.x, floor_size.y),
        ground_layers,
    ));

    // Side walls, tall enough to wall-slide and wall-jump on
    for side in [-1.0, 1.0] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(1.0, WALL_HEIGHT)),
                ..default()
            },
            Transform::from_xyz(
                side * (ARENA_HALF_WIDTH + 0.5),
                ARENA_FLOOR_Y + WALL_HEIGHT * 0.5,
                0.0,
            ),
            RigidBody::Static,
            Collider::rectangle(1.0, WALL_HEIGHT),
            wall_layers,
        ));
    }

    // Two ledges for aiming practice
    for (x, y, width) in [(-7.0, 4.0, 5.0), (6.5, 6.5, 4.0)] {
        commands.spawn((
            Ground,
            Sprite {
                color: ground_color,
                custom_size: Some(Vec2::new(width, 0.5)),
                ..default()
            },
            Transform::from_xyz(x, ARENA_FLOOR_Y + y, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, 0.5),
            ground_layers,
        ));
    }
}
