//! Gravity domain: gravity sign, boost and per-step contact state.

use std::f32::consts::PI;

use bevy::prelude::*;

/// Which way gravity pulls the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravitySign {
    #[default]
    Down,
    Up,
}

impl GravitySign {
    pub fn flipped(self) -> Self {
        match self {
            GravitySign::Down => GravitySign::Up,
            GravitySign::Up => GravitySign::Down,
        }
    }

    /// Unit vector of the gravity pull.
    pub fn direction(self) -> Vec2 {
        match self {
            GravitySign::Down => Vec2::NEG_Y,
            GravitySign::Up => Vec2::Y,
        }
    }

    /// Cast direction for the ground probe (same as the pull).
    pub fn probe_dir(self) -> Dir2 {
        match self {
            GravitySign::Down => Dir2::NEG_Y,
            GravitySign::Up => Dir2::Y,
        }
    }

    /// Visual rotation in radians: upright for `Down`, upside down for `Up`.
    pub fn target_rotation(self) -> f32 {
        match self {
            GravitySign::Down => 0.0,
            GravitySign::Up => PI,
        }
    }
}

/// Persistent gravity state of one controlled body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityState {
    pub sign: GravitySign,
    current_boost: f32,
}

impl Default for GravityState {
    fn default() -> Self {
        Self {
            sign: GravitySign::Down,
            current_boost: 1.0,
        }
    }
}

impl GravityState {
    pub fn current_boost(&self) -> f32 {
        self.current_boost
    }

    /// Ease the boost toward `target`. `t` is clamped to `[0, 1]` so the
    /// result always stays between the old value and the target.
    pub(crate) fn ease_boost(&mut self, target: f32, t: f32) {
        let t = t.clamp(0.0, 1.0);
        self.current_boost += (target - self.current_boost) * t;
    }
}

/// Result of one ground probe. Recomputed every physics step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactSample {
    normal: Option<Vec2>,
}

impl ContactSample {
    pub const AIRBORNE: Self = Self { normal: None };

    /// Grounded sample; the normal is re-normalized, a degenerate normal
    /// counts as airborne.
    pub fn grounded(normal: Vec2) -> Self {
        Self {
            normal: normal.try_normalize(),
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.normal.is_some()
    }

    /// Surface normal, only available while grounded.
    pub fn normal(&self) -> Option<Vec2> {
        self.normal
    }
}
