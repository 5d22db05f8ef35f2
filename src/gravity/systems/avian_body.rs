//! Gravity domain: `PhysicsBody` backed by avian2d components.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::gravity::{PhysicsBody, SurfaceHit};

/// Borrowed view of a player body for one controller call.
///
/// Position and rotation go through `Transform`; avian picks up the change
/// before its next step.
pub(crate) struct AvianBody<'a, 'w, 's> {
    transform: &'a mut Transform,
    velocity: &'a mut LinearVelocity,
    collider: &'a Collider,
    mass: f32,
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: &'a SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianBody<'a, 'w, 's> {
    pub(crate) fn new(
        transform: &'a mut Transform,
        velocity: &'a mut LinearVelocity,
        collider: &'a Collider,
        mass: f32,
        spatial_query: &'a SpatialQuery<'w, 's>,
        filter: &'a SpatialQueryFilter,
    ) -> Self {
        Self {
            transform,
            velocity,
            collider,
            mass,
            spatial_query,
            filter,
        }
    }
}

impl PhysicsBody for AvianBody<'_, '_, '_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        self.transform.translation.x = position.x;
        self.transform.translation.y = position.y;
    }

    fn linear_velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_linear_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn rotation(&self) -> f32 {
        let (z, _, _) = self.transform.rotation.to_euler(EulerRot::ZYX);
        z
    }

    fn set_rotation(&mut self, radians: f32) {
        self.transform.rotation = Quat::from_rotation_z(radians);
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn cast(&self, direction: Dir2, max_distance: f32) -> Option<SurfaceHit> {
        let config = ShapeCastConfig::from_max_distance(max_distance);
        self.spatial_query
            .cast_shape(
                self.collider,
                self.position(),
                self.rotation(),
                direction,
                &config,
                self.filter,
            )
            .map(|hit| SurfaceHit {
                distance: hit.distance,
                normal: hit.normal1,
            })
    }
}
