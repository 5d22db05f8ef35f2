//! Debug systems: hotkeys, actions, overlay and gizmos.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::{DEBUG_COIN_GRANT, DebugAction, DebugActionEvent, DebugInfoOverlay, DebugState};
use crate::gravity::{GravityController, PLAYER_RADIUS, Player};
use crate::levels::{LevelProgress, StartLevelRequest};
use crate::persistence::SaveProfileRequest;
use crate::rewards::PlayerWallet;

/// Ctrl + bound key fires the action.
pub(crate) fn read_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut actions: MessageWriter<DebugActionEvent>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    for key in keyboard.get_just_pressed() {
        if let Some(action) = DebugAction::for_key(*key) {
            actions.write(DebugActionEvent(action));
        }
    }
}

pub(crate) fn apply_debug_actions(
    mut actions: MessageReader<DebugActionEvent>,
    state: Res<State<GameState>>,
    mut debug_state: ResMut<DebugState>,
    mut progress: ResMut<LevelProgress>,
    mut wallet: ResMut<PlayerWallet>,
    mut requests: MessageWriter<StartLevelRequest>,
    mut saves: MessageWriter<SaveProfileRequest>,
) {
    for DebugActionEvent(action) in actions.read() {
        match action {
            DebugAction::RestartLevel => {
                if *state.get() == GameState::Boot {
                    continue;
                }
                requests.write(StartLevelRequest {
                    index: progress.current,
                });
                debug_state.set_message("Restarting level", 2.0);
            }
            DebugAction::SkipLevel => {
                if !progress.has_next() {
                    debug_state.set_message("Already on the last level", 2.0);
                    continue;
                }
                let next = progress.current + 1;
                if next > progress.last_unlocked {
                    progress.set_last_unlocked(next);
                }
                requests.write(StartLevelRequest { index: next });
                debug_state.set_message(format!("Skipping to level {}", next + 1), 2.0);
            }
            DebugAction::UnlockAll => {
                let last = progress.level_count - 1;
                progress.set_last_unlocked(last);
                saves.write(SaveProfileRequest);
                debug_state.set_message("All levels unlocked", 2.0);
            }
            DebugAction::GrantCoins => {
                wallet.add(DEBUG_COIN_GRANT);
                saves.write(SaveProfileRequest);
                debug_state.set_message(format!("+{} coins", DEBUG_COIN_GRANT), 2.0);
            }
            DebugAction::ToggleProbe => {
                debug_state.show_probe = !debug_state.show_probe;
                let msg = if debug_state.show_probe {
                    "Probe gizmos ON"
                } else {
                    "Probe gizmos OFF"
                };
                debug_state.set_message(msg, 2.0);
            }
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
                let msg = if debug_state.show_info {
                    "Debug Info ON"
                } else {
                    "Debug Info OFF"
                };
                debug_state.set_message(msg, 2.0);
            }
        }
        info!("[DEBUG] {:?}", action);
    }
}

/// Update status message timer and fade out
pub(crate) fn update_status_message(time: Res<Time<Real>>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Update the debug info overlay with the controller's live state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    game_state: Res<State<GameState>>,
    player_query: Query<(&Transform, &GravityController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    let wants_overlay = debug_state.show_info || debug_state.status_message.is_some();
    if !wants_overlay {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let mut lines = Vec::new();
    if let Some((message, _)) = &debug_state.status_message {
        lines.push(message.clone());
    }
    if debug_state.show_info {
        lines.push(format!("State: {:?}", game_state.get()));
        if let Some((transform, controller)) = player_query.iter().next() {
            let pos = transform.translation;
            lines.push(format!("Pos: ({:.2}, {:.2})", pos.x, pos.y));
            lines.push(format!("Gravity: {:?}", controller.sign()));
            lines.push(format!("Grounded: {}", controller.is_grounded()));
            lines.push(format!("Boost: {:.3}", controller.state().current_boost()));
        }
    }
    **text = lines.join("\n");
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.5, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            bottom: Val::Px(12.0),
            ..default()
        },
        ZIndex(200),
    ));
}

/// Draw the ground probe ray (green when grounded) and the contact normal.
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    player_query: Query<(&Transform, &GravityController), With<Player>>,
) {
    for (transform, controller) in &player_query {
        let origin = transform.translation.truncate();
        let reach = PLAYER_RADIUS + controller.tuning().probe_distance();
        let tip = origin + controller.sign().direction() * reach;
        let color = if controller.is_grounded() {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };

        gizmos.circle_2d(origin, PLAYER_RADIUS, color);
        gizmos.line_2d(origin, tip, color);

        if let Some(normal) = controller.contact().normal() {
            gizmos.arrow_2d(tip, tip + normal * 0.5, Color::srgb(0.3, 0.6, 1.0));
        }
    }
}
