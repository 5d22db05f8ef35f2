//! Gravity domain: gravity flipping and surface locomotion for the player
//! ball.

mod body;
mod components;
mod controller;
mod events;
mod input;
mod state;
pub(crate) mod systems;
#[cfg(test)]
mod tests;
mod tuning;

pub use body::{PhysicsBody, SurfaceHit};
pub use components::{GameLayer, Ground, PLAYER_RADIUS, Player, ground_filter};
pub use controller::{
    BOOST_EASE_RATE, GravityController, GravityFlip, SPEED_CLAMP_RATE, clamp_speed, ease_angle,
};
pub use events::GravityFlippedEvent;
pub use input::{ActivationEdge, PointerSnapshot, TouchPhase, sample};
pub use state::{ContactSample, GravitySign, GravityState};
pub use tuning::{GravityTuning, TuningError};

use bevy::prelude::*;

use crate::core::GameState;
use crate::gravity::systems::{
    flip_gravity_on_activation, read_activation_input, step_gravity_controllers,
};

pub struct GravityPlugin;

impl Plugin for GravityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GravityTuning>()
            .add_message::<ActivationEdge>()
            .add_message::<GravityFlippedEvent>()
            .add_systems(
                Update,
                (
                    read_activation_input,
                    flip_gravity_on_activation,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                step_gravity_controllers.run_if(in_state(GameState::Playing)),
            );
    }
}
