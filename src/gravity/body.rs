//! Gravity domain: the physical body seam between the controller and the
//! physics backend.

use bevy::prelude::*;

/// First surface hit by a directional cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Travel distance along the cast direction before touching the surface.
    pub distance: f32,
    /// Outward normal of the hit surface.
    pub normal: Vec2,
}

/// Read/write handle on the controlled body plus the cast query against
/// ground-classified colliders.
///
/// Forces and impulses are expressed through velocity changes so a backend
/// only has to expose position, velocity and rotation.
pub trait PhysicsBody {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    fn linear_velocity(&self) -> Vec2;
    fn set_linear_velocity(&mut self, velocity: Vec2);

    /// Rotation around Z in radians.
    fn rotation(&self) -> f32;
    fn set_rotation(&mut self, radians: f32);

    fn mass(&self) -> f32;

    /// Cast the body's shape along `direction` up to `max_distance`, hitting
    /// only ground colliders (no triggers).
    fn cast(&self, direction: Dir2, max_distance: f32) -> Option<SurfaceHit>;

    /// Continuous force for a step of `dt` seconds.
    fn apply_force(&mut self, force: Vec2, dt: f32) {
        let mass = self.mass();
        let velocity = self.linear_velocity();
        self.set_linear_velocity(velocity + force / mass * dt);
    }

    /// Mass-independent acceleration for a step of `dt` seconds.
    fn apply_acceleration(&mut self, acceleration: Vec2, dt: f32) {
        let velocity = self.linear_velocity();
        self.set_linear_velocity(velocity + acceleration * dt);
    }

    /// Instantaneous impulse.
    fn apply_impulse(&mut self, impulse: Vec2) {
        let mass = self.mass();
        let velocity = self.linear_velocity();
        self.set_linear_velocity(velocity + impulse / mass);
    }

    fn translate(&mut self, offset: Vec2) {
        let position = self.position();
        self.set_position(position + offset);
    }
}
