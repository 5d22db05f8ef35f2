//! Levels domain: level progression, spawning and the play/outcome loop.

mod components;
mod events;
mod flow;
mod progress;
mod spawn;
mod triggers;

pub use components::{Diamond, FinishZone, LevelEntity, LoseZone};
pub use events::{LevelOutcomeEvent, StartLevelRequest};
pub use flow::sync_level_count;
pub use progress::{LevelProgress, LevelRun, LevelSelection, level_progress_fraction};
pub use spawn::{spawn_level_geometry, spawn_player};

use bevy::prelude::*;

use crate::content::load_content;
use crate::core::GameState;
use crate::levels::flow::{
    advance_on_activation, handle_level_select_keys, reset_level_selection, resolve_level_outcome,
    start_requested_level, teardown_level,
};
use crate::levels::triggers::detect_level_triggers;

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelProgress>()
            .init_resource::<LevelRun>()
            .init_resource::<LevelSelection>()
            .add_message::<StartLevelRequest>()
            .add_message::<LevelOutcomeEvent>()
            .add_systems(Startup, sync_level_count.after(load_content))
            .add_systems(
                OnEnter(GameState::Menu),
                (teardown_level, reset_level_selection),
            )
            .add_systems(
                Update,
                (
                    handle_level_select_keys.run_if(in_state(GameState::Menu)),
                    detect_level_triggers,
                    resolve_level_outcome,
                    advance_on_activation,
                    start_requested_level,
                )
                    .chain(),
            );
    }
}
