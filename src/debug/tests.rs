//! Debug: hotkey binding tests.

use std::collections::HashSet;

use bevy::prelude::KeyCode;

use super::{DebugAction, DebugState};

#[test]
fn test_each_binding_is_unique() {
    let keys: HashSet<_> = DebugAction::BINDINGS.iter().map(|(key, _)| *key).collect();
    let actions: HashSet<_> = DebugAction::BINDINGS
        .iter()
        .map(|(_, action)| format!("{:?}", action))
        .collect();
    assert_eq!(keys.len(), DebugAction::BINDINGS.len());
    assert_eq!(actions.len(), DebugAction::BINDINGS.len());
}

#[test]
fn test_unbound_key_has_no_action() {
    assert_eq!(DebugAction::for_key(KeyCode::KeyR), Some(DebugAction::RestartLevel));
    // Plain gameplay and shop keys stay free.
    assert_eq!(DebugAction::for_key(KeyCode::KeyM), None);
    assert_eq!(DebugAction::for_key(KeyCode::KeyB), None);
}

#[test]
fn test_status_message_replaces_previous() {
    let mut state = DebugState::default();
    state.set_message("first", 1.0);
    state.set_message("second", 2.0);
    assert_eq!(state.status_message, Some(("second".to_string(), 2.0)));
}
