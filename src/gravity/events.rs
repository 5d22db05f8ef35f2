//! Gravity domain: outbound notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::state::GravitySign;

/// Fired once per gravity flip.
#[derive(Debug)]
pub struct GravityFlippedEvent {
    pub entity: Entity,
    pub sign: GravitySign,
    pub released_from_ground: bool,
}

impl Message for GravityFlippedEvent {}
