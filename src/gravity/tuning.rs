//! Gravity domain: immutable tuning record for the gravity controller.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tuning for one gravity-flip body. Loaded once from content and never
/// mutated while a controller is alive.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityTuning {
    /// Acceleration of gravity at scale 1.0 (units/s²).
    pub gravity: f32,
    pub base_gravity_scale: f32,
    /// Extra gravity scale while no ground is under the body.
    pub airborne_gravity_multiplier: f32,
    pub max_speed: f32,
    pub surface_attraction_force: f32,
    /// Impulse applied opposite the new gravity pull when flipping on the ground.
    pub surface_release_force: f32,
    pub rotation_speed: f32,
    pub ground_check_distance: f32,
    pub move_right_force: f32,
    pub curve_adjustment_factor: f32,
    /// Clearance kept between the body and the surface it rests on.
    pub shell_radius: f32,
    pub collision_iterations: u32,
    pub curve_boost_multiplier: f32,
    /// Minimum |normal.x| for a surface to count as a slope.
    pub min_normal_x_for_boost: f32,
    pub mass: f32,
}

impl Default for GravityTuning {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            base_gravity_scale: 1.0,
            airborne_gravity_multiplier: 1.5,
            max_speed: 8.0,
            surface_attraction_force: 8.0,
            surface_release_force: 7.0,
            rotation_speed: 5.0,
            ground_check_distance: 0.2,
            move_right_force: 4.0,
            curve_adjustment_factor: 1.5,
            shell_radius: 0.01,
            collision_iterations: 3,
            curve_boost_multiplier: 1.2,
            min_normal_x_for_boost: 0.3,
            mass: 1.0,
        }
    }
}

/// Rejected tuning value.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// Field must be strictly positive.
    NotPositive { field: &'static str, value: f32 },
    /// Field must be finite and non-negative.
    Negative { field: &'static str, value: f32 },
    /// Boost multiplier below 1.0 would make the boost range empty.
    BoostBelowOne(f32),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::NotPositive { field, value } => {
                write!(f, "tuning field '{}' must be positive, got {}", field, value)
            }
            TuningError::Negative { field, value } => {
                write!(
                    f,
                    "tuning field '{}' must be finite and non-negative, got {}",
                    field, value
                )
            }
            TuningError::BoostBelowOne(value) => {
                write!(f, "curve_boost_multiplier must be >= 1.0, got {}", value)
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl GravityTuning {
    /// Check every field a controller relies on.
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.collision_iterations == 0 {
            return Err(TuningError::NotPositive {
                field: "collision_iterations",
                value: 0.0,
            });
        }

        for (field, value) in [
            ("ground_check_distance", self.ground_check_distance),
            ("max_speed", self.max_speed),
            ("mass", self.mass),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        for (field, value) in [
            ("gravity", self.gravity),
            ("base_gravity_scale", self.base_gravity_scale),
            ("airborne_gravity_multiplier", self.airborne_gravity_multiplier),
            ("surface_attraction_force", self.surface_attraction_force),
            ("surface_release_force", self.surface_release_force),
            ("rotation_speed", self.rotation_speed),
            ("move_right_force", self.move_right_force),
            ("curve_adjustment_factor", self.curve_adjustment_factor),
            ("shell_radius", self.shell_radius),
            ("min_normal_x_for_boost", self.min_normal_x_for_boost),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !(self.curve_boost_multiplier.is_finite() && self.curve_boost_multiplier >= 1.0) {
            return Err(TuningError::BoostBelowOne(self.curve_boost_multiplier));
        }

        Ok(())
    }

    /// Length of the ground probe and penetration casts.
    pub fn probe_distance(&self) -> f32 {
        self.ground_check_distance + self.shell_radius
    }
}
