//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// Level select idle screen; a tap starts the highlighted level.
    Menu,
    Playing,
    Won,
    Lost,
}
