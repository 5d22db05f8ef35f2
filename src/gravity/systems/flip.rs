//! Gravity domain: applies activation edges to the player's controller.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameState;
use crate::gravity::systems::avian_body::AvianBody;
use crate::gravity::{ActivationEdge, GravityController, GravityFlippedEvent, Player, ground_filter};

/// Always drains the edges so a tap that ended a level is not replayed
/// once play resumes.
pub(crate) fn flip_gravity_on_activation(
    state: Res<State<GameState>>,
    mut edges: MessageReader<ActivationEdge>,
    mut flipped_events: MessageWriter<GravityFlippedEvent>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &mut GravityController,
            &mut Transform,
            &mut LinearVelocity,
            &Collider,
        ),
        With<Player>,
    >,
) {
    // At most one edge is sampled per frame; extra messages are drained.
    let edge = edges.read().last().copied();
    if edge.is_none() || *state.get() != GameState::Playing {
        return;
    }

    let filter = ground_filter();
    for (entity, mut controller, mut transform, mut velocity, collider) in &mut query {
        let mass = controller.tuning().mass;
        let mut body = AvianBody::new(
            &mut transform,
            &mut velocity,
            collider,
            mass,
            &spatial_query,
            &filter,
        );

        if let Some(flip) = controller.on_frame(edge, &mut body) {
            flipped_events.write(GravityFlippedEvent {
                entity,
                sign: flip.sign,
                released_from_ground: flip.release_impulse.is_some(),
            });
        }
    }
}
