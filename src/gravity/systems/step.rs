//! Gravity domain: fixed-step controller update.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gravity::systems::avian_body::AvianBody;
use crate::gravity::{GravityController, Player, ground_filter};

/// Runs in `FixedUpdate`, ahead of the avian step.
pub(crate) fn step_gravity_controllers(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &mut GravityController,
            &mut Transform,
            &mut LinearVelocity,
            &Collider,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let filter = ground_filter();
    for (mut controller, mut transform, mut velocity, collider) in &mut query {
        let mass = controller.tuning().mass;
        let mut body = AvianBody::new(
            &mut transform,
            &mut velocity,
            collider,
            mass,
            &spatial_query,
            &filter,
        );
        controller.on_physics_step(&mut body, dt);
    }
}
