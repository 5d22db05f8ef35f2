//! Levels domain: unlock bookkeeping and in-level progress.

use bevy::prelude::*;

/// Which levels are unlocked and which one is being played. Levels unlock
/// strictly in order.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct LevelProgress {
    pub current: usize,
    pub last_unlocked: usize,
    pub level_count: usize,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new(1)
    }
}

impl LevelProgress {
    pub fn new(level_count: usize) -> Self {
        Self {
            current: 0,
            last_unlocked: 0,
            level_count: level_count.max(1),
        }
    }

    pub fn is_unlocked(&self, index: usize) -> bool {
        index <= self.last_unlocked && index < self.level_count
    }

    /// Make `index` the current level. Refused for locked levels.
    pub fn start(&mut self, index: usize) -> bool {
        if !self.is_unlocked(index) {
            return false;
        }
        self.current = index;
        true
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.level_count
    }

    /// Index of the level after the current one, if it exists and is
    /// unlocked.
    pub fn next_level(&self) -> Option<usize> {
        let next = self.current + 1;
        self.is_unlocked(next).then_some(next)
    }

    /// Record the current level as finished. Unlocks the following level
    /// when the current one was the frontier; returns the newly unlocked
    /// index.
    pub fn complete_current(&mut self) -> Option<usize> {
        if self.current >= self.last_unlocked && self.has_next() {
            self.last_unlocked = self.current + 1;
            Some(self.last_unlocked)
        } else {
            None
        }
    }

    /// Restore a saved frontier, clamped to the levels that exist.
    pub fn set_last_unlocked(&mut self, index: usize) {
        self.last_unlocked = index.min(self.level_count - 1);
        self.current = self.current.min(self.last_unlocked);
    }

    /// Adopt a new level count after content loads, keeping saved progress
    /// in range.
    pub fn resize(&mut self, level_count: usize) {
        self.level_count = level_count.max(1);
        let last = self.last_unlocked;
        self.set_last_unlocked(last);
    }
}

/// Level highlighted on the menu. Stays within the unlocked range.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelSelection {
    pub index: usize,
}

impl LevelSelection {
    /// Move the highlight by `step` levels; returns whether it moved.
    pub fn shift(&mut self, step: isize, progress: &LevelProgress) -> bool {
        let from = self.index.min(progress.last_unlocked);
        let to = from.saturating_add_signed(step).min(progress.last_unlocked);
        self.index = to;
        to != from
    }

    pub fn reset(&mut self, progress: &LevelProgress) {
        self.index = progress.last_unlocked;
    }
}

/// Horizontal extent of the level being played.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct LevelRun {
    pub start_x: f32,
    pub finish_x: f32,
}

impl LevelRun {
    pub fn fraction(&self, x: f32) -> f32 {
        level_progress_fraction(self.start_x, self.finish_x, x)
    }
}

/// Share of the distance from start to finish covered at `x`, in `[0, 1]`.
pub fn level_progress_fraction(start_x: f32, finish_x: f32, x: f32) -> f32 {
    let span = finish_x - start_x;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((x - start_x) / span).clamp(0.0, 1.0)
}
