//! Content domain: RON-driven levels, skins and controller tuning.

mod data;
mod loader;
mod registry;
mod validation;

pub use data::{BoxDef, DataFile, DiamondDef, LevelDef, SkinDef, Vec2Def};
pub use loader::{ContentLoadError, load_all_content, parse_data_file, parse_tuning};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use std::path::Path;

use bevy::prelude::*;

use crate::core::GameState;
use crate::gravity::GravityTuning;

/// Directory holding the RON data files.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

pub(crate) fn load_content(
    mut commands: Commands,
    mut tuning: ResMut<GravityTuning>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let (mut registry, load_errors) = load_all_content(Path::new(CONTENT_DIR));
    for e in &load_errors {
        warn!("{} (using built-in content)", e);
    }

    let validation_errors = validate_content(&registry);
    if !validation_errors.is_empty() {
        for e in &validation_errors {
            error!("Content validation: {}", e);
        }
        warn!("Falling back to built-in levels and skins");
        let builtin = ContentRegistry::builtin();
        registry.levels = builtin.levels;
        registry.skins = builtin.skins;
    }

    info!("{}", registry.summary());
    *tuning = registry.tuning;
    commands.insert_resource(registry);
    next_state.set(GameState::Menu);
}
