//! Levels domain: markers for spawned level pieces.

use bevy::prelude::*;

/// Everything spawned for the level being played; torn down on restart,
/// next level and return to menu.
#[derive(Component, Debug)]
pub struct LevelEntity;

#[derive(Component, Debug)]
pub struct FinishZone;

#[derive(Component, Debug)]
pub struct LoseZone;

#[derive(Component, Debug)]
pub struct Diamond {
    pub coins: u32,
}
