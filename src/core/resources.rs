//! Core domain: simulation pause bookkeeping.

use std::collections::BTreeSet;

use bevy::prelude::*;

/// Named holds on the simulation. Virtual time, and with it the fixed
/// physics step, is stopped while at least one hold is in place.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    holds: BTreeSet<&'static str>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.holds.is_empty()
    }

    /// Returns false if `reason` was already held.
    pub fn hold(&mut self, reason: &'static str) -> bool {
        self.holds.insert(reason)
    }

    /// Returns false if `reason` was not held.
    pub fn release(&mut self, reason: &'static str) -> bool {
        self.holds.remove(reason)
    }

    pub fn release_all(&mut self) {
        self.holds.clear();
    }

    pub fn holds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.holds.iter().copied()
    }
}

/// Hold placed while a level outcome screen is up.
pub const OUTCOME_PAUSE: &str = "level_outcome";
