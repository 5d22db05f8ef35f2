//! Debug mode for fast iteration on levels and controller tuning.
//!
//! Features:
//! - Restart or skip levels
//! - Grant coins
//! - Probe-ray gizmos for the gravity controller
//! - Live controller info overlay

mod systems;
#[cfg(test)]
mod tests;

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::debug::systems::{
    apply_debug_actions, draw_probe_gizmos, read_debug_hotkeys, update_debug_info_overlay,
    update_status_message,
};

/// Coins granted per Ctrl+C.
pub const DEBUG_COIN_GRANT: u32 = 100;

// ============================================================================
// Debug State Resource
// ============================================================================

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the probe ray and contact normal are drawn
    pub show_probe: bool,
    /// Whether the controller info overlay is shown
    pub show_info: bool,
    /// Message to display temporarily in the info overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }
}

/// Marker for the controller info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Actions bound to Ctrl hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    RestartLevel,
    SkipLevel,
    UnlockAll,
    GrantCoins,
    ToggleProbe,
    ToggleInfo,
}

impl DebugAction {
    pub const BINDINGS: [(KeyCode, DebugAction); 6] = [
        (KeyCode::KeyR, DebugAction::RestartLevel),
        (KeyCode::KeyN, DebugAction::SkipLevel),
        (KeyCode::KeyU, DebugAction::UnlockAll),
        (KeyCode::KeyC, DebugAction::GrantCoins),
        (KeyCode::KeyG, DebugAction::ToggleProbe),
        (KeyCode::KeyD, DebugAction::ToggleInfo),
    ];

    /// Action for a key pressed with Ctrl held.
    pub fn for_key(key: KeyCode) -> Option<Self> {
        Self::BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }
}

/// A debug action requested this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugActionEvent(pub DebugAction);

impl Message for DebugActionEvent {}

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_message::<DebugActionEvent>()
            .add_systems(
                Update,
                (
                    read_debug_hotkeys,
                    apply_debug_actions,
                    update_status_message,
                    update_debug_info_overlay,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                draw_probe_gizmos.run_if(|state: Res<DebugState>| state.show_probe),
            );
    }
}
