//! UI domain: player HUD health bar and status readout.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::Health;
use crate::player::{Player, PlayerController, PlayerState, PlayerStateMachine};
use crate::skills::{PlayerSkills, SwordExpired, SwordSlot, SwordType};

pub(crate) const PLAYER_HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const PLAYER_HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const PLAYER_HEALTHBAR_PADDING: f32 = 16.0;
pub(crate) const SWORD_LOST_NOTICE_SECS: f32 = 2.0;

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct PlayerHealthBarUI;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

/// Marker for the state/sword/busy text under the health bar
#[derive(Component)]
pub struct PlayerStatusText;

pub(crate) fn spawn_player_hud(mut commands: Commands) {
    commands
        .spawn((
            PlayerHealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(PLAYER_HEALTHBAR_PADDING),
                width: Val::Px(PLAYER_HEALTHBAR_WIDTH),
                height: Val::Px(PLAYER_HEALTHBAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHealthBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
            ));
        });

    commands.spawn((
        PlayerStatusText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.85, 0.85, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(PLAYER_HEALTHBAR_PADDING),
            top: Val::Px(PLAYER_HEALTHBAR_PADDING + PLAYER_HEALTHBAR_HEIGHT + 8.0),
            ..default()
        },
    ));
}

pub(crate) fn update_player_healthbar(
    player_query: Query<&Health, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    let Ok(health) = player_query.single() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let percent = health.percent();
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = health_color(percent);
    }
}

/// Green above half health, fading through yellow to red.
pub(crate) fn health_color(percent: f32) -> Color {
    if percent > 0.5 {
        let t = (percent - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = percent * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

/// What the HUD shows about the sword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SwordStatus {
    Locked,
    Ready(SwordType),
    Out,
}

impl SwordStatus {
    pub(crate) fn of(skills: &PlayerSkills, slot: &SwordSlot) -> Self {
        if !slot.is_empty() {
            return SwordStatus::Out;
        }
        match skills.sword_type() {
            Some(sword_type) => SwordStatus::Ready(sword_type),
            None => SwordStatus::Locked,
        }
    }
}

pub(crate) fn status_line(
    state: Option<PlayerState>,
    sword: SwordStatus,
    busy_remaining: f32,
    dash_remaining: f32,
) -> String {
    let state = match state {
        Some(state) => format!("{state:?}"),
        None => "-".to_string(),
    };
    let sword = match sword {
        SwordStatus::Locked => "locked".to_string(),
        SwordStatus::Ready(sword_type) => format!("{sword_type:?}"),
        SwordStatus::Out => "out".to_string(),
    };

    let mut line = format!("{state} | sword: {sword}");
    if busy_remaining > 0.0 {
        line.push_str(" | busy");
    }
    if dash_remaining > 0.0 {
        line.push_str(&format!(" | dash {dash_remaining:.1}s"));
    }
    line
}

/// Short-lived HUD notice for a sword that expired before it was caught.
#[derive(Resource, Debug, Default)]
pub struct SwordLostNotice {
    sword_type: Option<SwordType>,
    remaining: f32,
}

impl SwordLostNotice {
    pub fn show(&mut self, sword_type: SwordType, seconds: f32) {
        self.sword_type = Some(sword_type);
        self.remaining = seconds;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.sword_type.is_none() {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.sword_type = None;
        }
    }

    pub fn suffix(&self) -> Option<String> {
        self.sword_type
            .map(|sword_type| format!(" | {sword_type:?} sword lost"))
    }
}

pub(crate) fn track_lost_swords(
    time: Res<Time>,
    mut expired_events: MessageReader<SwordExpired>,
    player_query: Query<(), With<Player>>,
    mut notice: ResMut<SwordLostNotice>,
) {
    notice.tick(time.delta_secs());
    for event in expired_events.read() {
        if player_query.contains(event.owner) {
            debug!("Sword {:?} lost by {:?}", event.sword, event.owner);
            notice.show(event.sword_type, SWORD_LOST_NOTICE_SECS);
        }
    }
}

pub(crate) fn update_player_status(
    player_query: Query<
        (&PlayerStateMachine, &PlayerController, &PlayerSkills, &SwordSlot),
        With<Player>,
    >,
    notice: Res<SwordLostNotice>,
    mut text_query: Query<&mut Text, With<PlayerStatusText>>,
) {
    let Ok((machine, controller, skills, slot)) = player_query.single() else {
        return;
    };

    let mut line = status_line(
        machine.current(),
        SwordStatus::of(skills, slot),
        controller.busy.remaining(),
        skills.dash.remaining(),
    );
    if let Some(suffix) = notice.suffix() {
        line.push_str(&suffix);
    }
    for mut text in &mut text_query {
        if text.as_str() != line {
            **text = line.clone();
        }
    }
}
