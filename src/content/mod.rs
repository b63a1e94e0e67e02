//! Content domain: gameplay tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::GameplayConfig;
pub use loader::{ContentLoadError, load_gameplay_config, parse_gameplay_config};
pub use validation::{ValidationIssue, validate_config};

use bevy::prelude::*;
use std::path::Path;

use crate::core::RunConfig;

pub const GAMEPLAY_CONFIG_PATH: &str = "assets/data/gameplay.ron";

/// Loads the gameplay config and inserts each section as a resource.
///
/// Add before the domain plugins: they only `init_resource` their tuning,
/// which keeps whatever was loaded here.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let path = Path::new(GAMEPLAY_CONFIG_PATH);
        let config = match load_gameplay_config(path) {
            Ok(config) => {
                info!("Loaded gameplay config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{}; using built-in defaults", err);
                GameplayConfig::default()
            }
        };

        let issues = validate_config(&config);
        for issue in &issues {
            warn!("Gameplay config: {}", issue);
        }
        if !issues.is_empty() {
            warn!("Gameplay config has {} issue(s)", issues.len());
        }

        insert_config(app, config);
    }
}

fn insert_config(app: &mut App, config: GameplayConfig) {
    let GameplayConfig {
        seed,
        player,
        knockback,
        sword,
        skills,
        unlocks,
        enemy,
        fx,
        animation,
        reentry,
    } = config;

    if let Some(seed) = seed {
        app.insert_resource(RunConfig { seed });
    }

    app.insert_resource(player)
        .insert_resource(knockback)
        .insert_resource(sword)
        .insert_resource(skills)
        .insert_resource(unlocks)
        .insert_resource(enemy)
        .insert_resource(fx)
        .insert_resource(animation)
        .insert_resource(reentry);
}
