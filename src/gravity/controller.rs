//! Gravity controller.
//!
//! Owns the gravity state of one body and drives it through two entry
//! points: [`GravityController::on_frame`] once per rendered frame with the
//! sampled activation edge, and [`GravityController::on_physics_step`] once
//! per fixed physics step. Each physics step runs, in order:
//!
//! 1. ground probe
//! 2. signed gravity and speed clamp
//! 3. surface attraction, curve boost and forward drive (grounded only)
//! 4. penetration correction (grounded only)
//! 5. rotation easing

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

use super::body::PhysicsBody;
use super::input::ActivationEdge;
use super::state::{ContactSample, GravitySign, GravityState};
use super::tuning::{GravityTuning, TuningError};

/// Rate of the exponential approach toward `max_speed`, per second.
pub const SPEED_CLAMP_RATE: f32 = 5.0;

/// Rate at which the curve boost eases toward its target, per second.
pub const BOOST_EASE_RATE: f32 = 2.0;

/// Outcome of a gravity flip, reported to the caller for notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityFlip {
    pub sign: GravitySign,
    /// Impulse applied to the body, if it was grounded when flipping.
    pub release_impulse: Option<Vec2>,
}

/// Gravity and surface-locomotion controller for one body.
#[derive(Component, Debug, Clone)]
pub struct GravityController {
    tuning: GravityTuning,
    state: GravityState,
    contact: ContactSample,
}

impl GravityController {
    /// Build a controller, rejecting tuning it cannot run with.
    pub fn new(tuning: GravityTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            state: GravityState::default(),
            contact: ContactSample::AIRBORNE,
        })
    }

    pub fn tuning(&self) -> &GravityTuning {
        &self.tuning
    }

    pub fn state(&self) -> &GravityState {
        &self.state
    }

    pub fn sign(&self) -> GravitySign {
        self.state.sign
    }

    /// Contact from the most recent physics step.
    pub fn contact(&self) -> ContactSample {
        self.contact
    }

    pub fn is_grounded(&self) -> bool {
        self.contact.is_grounded()
    }

    pub fn target_rotation(&self) -> f32 {
        self.state.sign.target_rotation()
    }

    /// Frame tick. Flips gravity on an activation edge; a body grounded at
    /// the last physics step also gets the release impulse.
    pub fn on_frame(
        &mut self,
        edge: Option<ActivationEdge>,
        body: &mut dyn PhysicsBody,
    ) -> Option<GravityFlip> {
        edge.map(|_| self.flip(body))
    }

    /// Toggle gravity. Never debounced: every call flips.
    pub fn flip(&mut self, body: &mut dyn PhysicsBody) -> GravityFlip {
        self.state.sign = self.state.sign.flipped();

        let release_impulse = self.contact.is_grounded().then(|| {
            let impulse = -self.state.sign.direction() * self.tuning.surface_release_force;
            body.apply_impulse(impulse);
            impulse
        });

        debug!(
            "Gravity flipped: sign={:?}, grounded={}",
            self.state.sign,
            release_impulse.is_some()
        );

        GravityFlip {
            sign: self.state.sign,
            release_impulse,
        }
    }

    /// Fixed physics tick.
    pub fn on_physics_step(&mut self, body: &mut dyn PhysicsBody, dt: f32) {
        let was_grounded = self.contact.is_grounded();
        self.contact = self.probe(body);

        if self.contact.is_grounded() != was_grounded {
            debug!(
                "Ground contact changed: grounded={}, normal={:?}",
                self.contact.is_grounded(),
                self.contact.normal()
            );
        }

        self.apply_gravity(body, dt);
        clamp_speed(body, self.tuning.max_speed, dt);

        if let Some(normal) = self.contact.normal() {
            self.apply_surface_forces(body, normal, dt);
            self.correct_penetration(body);
        }

        self.ease_rotation(body, dt);
    }

    /// Cast along the gravity pull for `ground_check_distance + shell_radius`.
    pub fn probe(&self, body: &dyn PhysicsBody) -> ContactSample {
        body.cast(self.state.sign.probe_dir(), self.tuning.probe_distance())
            .map_or(ContactSample::AIRBORNE, |hit| {
                ContactSample::grounded(hit.normal)
            })
    }

    /// Signed gravity acceleration for the current contact state.
    pub fn gravity_acceleration(&self) -> Vec2 {
        let multiplier = if self.contact.is_grounded() {
            1.0
        } else {
            self.tuning.airborne_gravity_multiplier
        };
        let magnitude = self.tuning.gravity * self.tuning.base_gravity_scale * multiplier;
        self.state.sign.direction() * magnitude
    }

    fn apply_gravity(&self, body: &mut dyn PhysicsBody, dt: f32) {
        body.apply_acceleration(self.gravity_acceleration(), dt);
    }

    fn apply_surface_forces(&mut self, body: &mut dyn PhysicsBody, normal: Vec2, dt: f32) {
        let gravity = self.gravity_acceleration();

        // Projection onto -normal keeps the body pressed against slopes and
        // ceilings alike.
        let attraction = gravity.project_onto_normalized(-normal);
        body.apply_force(attraction * self.tuning.surface_attraction_force, dt);

        let boost_target = if normal.x.abs() > self.tuning.min_normal_x_for_boost {
            self.tuning.curve_boost_multiplier
        } else {
            1.0
        };
        self.state.ease_boost(boost_target, BOOST_EASE_RATE * dt);

        let curve_factor = 0.5 + normal.x.abs() * self.tuning.curve_adjustment_factor;
        let drive = Vec2::X * self.tuning.move_right_force * self.state.current_boost() * curve_factor;
        body.apply_force(drive, dt);
    }

    /// Snap the body back to `shell_radius` from the surface under it.
    /// Each iteration re-casts since one correction can expose a closer hit.
    pub fn correct_penetration(&self, body: &mut dyn PhysicsBody) {
        let direction = self.state.sign.probe_dir();
        let distance = self.tuning.probe_distance();

        for _ in 0..self.tuning.collision_iterations {
            let Some(hit) = body.cast(direction, distance) else {
                break;
            };

            let push = (hit.distance - self.tuning.shell_radius).max(0.0);
            if push > 0.0 {
                body.translate(*direction * push);
            }
        }
    }

    fn ease_rotation(&self, body: &mut dyn PhysicsBody, dt: f32) {
        let current = body.rotation();
        let t = (self.tuning.rotation_speed * dt).clamp(0.0, 1.0);
        body.set_rotation(ease_angle(current, self.target_rotation(), t));
    }
}

/// Exponential approach toward `max_speed` when moving faster than it.
/// Skipped for a zero or non-finite velocity.
pub fn clamp_speed(body: &mut dyn PhysicsBody, max_speed: f32, dt: f32) {
    let velocity = body.linear_velocity();
    if velocity.length() <= max_speed {
        return;
    }
    let Some(direction) = velocity.try_normalize() else {
        return;
    };

    let t = (SPEED_CLAMP_RATE * dt).clamp(0.0, 1.0);
    body.set_linear_velocity(velocity.lerp(direction * max_speed, t));
}

/// Move `current` toward `target` by fraction `t` along the shortest arc.
pub fn ease_angle(current: f32, target: f32, t: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(TAU);
    if delta > PI {
        delta -= TAU;
    }
    current + delta * t
}
