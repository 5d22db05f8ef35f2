//! Gravity domain: collapses pointer and touch state into activation edges.

use bevy::ecs::message::Message;

/// Phase of the primary touch this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Held,
}

/// Raw pointer state for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerSnapshot {
    /// Phase of the primary (lowest id) active touch, if any touch is down.
    pub primary_touch: Option<TouchPhase>,
    pub mouse_just_pressed: bool,
}

/// A press began this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationEdge;

impl Message for ActivationEdge {}

/// Touch wins whenever a touch is active; the mouse is only consulted with
/// no touch down. Holds never produce an edge.
pub fn sample(snapshot: &PointerSnapshot) -> Option<ActivationEdge> {
    let began = match snapshot.primary_touch {
        Some(phase) => phase == TouchPhase::Began,
        None => snapshot.mouse_just_pressed,
    };

    began.then_some(ActivationEdge)
}
