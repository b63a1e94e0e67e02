mod actor;
mod animation;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod fx;
mod player;
mod skills;
mod timing;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Swordfall".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // content first: it inserts the tuning the other plugins read
    .add_plugins(content::ContentPlugin)
    .add_plugins((
        core::CorePlugin,
        actor::ActorPlugin,
        animation::AnimationPlugin,
        player::PlayerPlugin,
        skills::SkillsPlugin,
        combat::CombatPlugin,
        fx::FxPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
