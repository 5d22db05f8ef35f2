//! Gravity domain: pointer sampling into activation edges.

use bevy::ecs::message::MessageWriter;
use bevy::input::touch::Touches;
use bevy::prelude::*;

use crate::gravity::{ActivationEdge, PointerSnapshot, TouchPhase, sample};

/// Build this frame's pointer snapshot. The lowest touch id is the primary
/// touch.
pub(crate) fn pointer_snapshot(
    mouse: &ButtonInput<MouseButton>,
    touches: &Touches,
) -> PointerSnapshot {
    let primary_touch = touches
        .iter()
        .map(|touch| touch.id())
        .min()
        .map(|id| {
            if touches.just_pressed(id) {
                TouchPhase::Began
            } else {
                TouchPhase::Held
            }
        });

    PointerSnapshot {
        primary_touch,
        mouse_just_pressed: mouse.just_pressed(MouseButton::Left),
    }
}

pub(crate) fn read_activation_input(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut edges: MessageWriter<ActivationEdge>,
) {
    let snapshot = pointer_snapshot(&mouse, &touches);
    if let Some(edge) = sample(&snapshot) {
        edges.write(edge);
    }
}
