//! Gravity domain: markers and physics layers for the controlled body.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces the player can stand on, under either gravity sign
    Ground,
    /// Player ball
    Player,
    /// Finish, lose and pickup triggers - never block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Radius of the player ball collider.
pub const PLAYER_RADIUS: f32 = 0.25;

/// Filter used by the ground probe and penetration casts.
pub fn ground_filter() -> SpatialQueryFilter {
    SpatialQueryFilter::from_mask(GameLayer::Ground)
}
