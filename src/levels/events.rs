//! Levels domain: level flow messages.

use bevy::ecs::message::Message;

/// Request to (re)start the level at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartLevelRequest {
    pub index: usize,
}

impl Message for StartLevelRequest {}

/// Outcome reported by the finish and lose triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcomeEvent {
    Completed,
    Failed,
}

impl Message for LevelOutcomeEvent {}
