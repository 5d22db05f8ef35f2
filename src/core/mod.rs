//! Core domain: game state, pause handling and the camera.

mod resources;
mod state;
mod systems;

pub use resources::{GameplayPaused, OUTCOME_PAUSE};
pub use state::GameState;
pub use systems::MainCamera;

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, sync_virtual_time};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(PreUpdate, sync_virtual_time)
            .add_systems(PostUpdate, follow_player);
    }
}
