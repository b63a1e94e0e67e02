//! UI domain: end screen shown once the player reaches the Dead state, and
//! the restart flow.

use bevy::prelude::*;

use crate::player::{Player, PlayerState, PlayerStateMachine, spawn_player};
use crate::skills::{BlackholeZone, SwordSlot};

/// Marker for the end screen overlay
#[derive(Component)]
pub struct EndScreenUI;

/// Marker for the restart button on the end screen
#[derive(Component)]
pub struct RestartButton;

/// Tracks whether the end screen is up (prevents stacking overlays)
#[derive(Resource, Default)]
pub struct EndScreenState {
    pub shown: bool,
}

pub(crate) fn detect_player_death(
    mut commands: Commands,
    player_query: Query<&PlayerStateMachine, With<Player>>,
    mut end_state: ResMut<EndScreenState>,
    existing_screen: Query<Entity, With<EndScreenUI>>,
) {
    if end_state.shown {
        return;
    }

    let Ok(machine) = player_query.single() else {
        return;
    };

    if machine.is_in(PlayerState::Dead) {
        end_state.shown = true;
        if existing_screen.is_empty() {
            info!("Showing end screen");
            spawn_end_screen(&mut commands);
        }
    }
}

fn spawn_end_screen(commands: &mut Commands) {
    commands
        .spawn((
            EndScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("YOU DIED"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RestartButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("RESTART"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Press [Enter] or click to restart"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

/// Dead is terminal, so a restart replaces the player entity instead of
/// reviving it.
pub(crate) fn handle_restart(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<RestartButton>, Changed<Interaction>)>,
    screen_query: Query<Entity, With<EndScreenUI>>,
    mut end_state: ResMut<EndScreenState>,
    player_query: Query<(Entity, &SwordSlot), With<Player>>,
    blackhole_query: Query<(Entity, &BlackholeZone)>,
) {
    let should_restart = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if !should_restart || !end_state.shown {
        return;
    }

    end_state.shown = false;

    for entity in &screen_query {
        commands.entity(entity).despawn();
    }

    for (player, slot) in &player_query {
        if let Some(sword) = slot.current() {
            commands.entity(sword).despawn();
        }
        for (zone_entity, zone) in &blackhole_query {
            if zone.owner == player {
                commands.entity(zone_entity).despawn();
            }
        }
        commands.entity(player).despawn();
    }

    info!("Restarting run");
    commands.run_system_cached(spawn_player);
}
