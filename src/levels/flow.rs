//! Levels domain: starting levels, resolving outcomes and advancing from
//! the outcome screens.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{AudioCue, PlayCue};
use crate::content::ContentRegistry;
use crate::core::{GameState, GameplayPaused, OUTCOME_PAUSE};
use crate::gravity::{ActivationEdge, GravityController, GravityTuning};
use crate::levels::components::LevelEntity;
use crate::levels::events::{LevelOutcomeEvent, StartLevelRequest};
use crate::levels::progress::{LevelProgress, LevelRun, LevelSelection};
use crate::levels::spawn::{spawn_level_geometry, spawn_player};
use crate::persistence::SaveProfileRequest;
use crate::rewards::{PlayerWallet, RunLoot};

/// Adopt the loaded level count. Runs once content is in.
pub fn sync_level_count(
    registry: Option<Res<ContentRegistry>>,
    mut progress: ResMut<LevelProgress>,
) {
    if let Some(registry) = registry {
        progress.resize(registry.levels.len());
    }
}

pub(crate) fn start_requested_level(
    mut commands: Commands,
    mut requests: MessageReader<StartLevelRequest>,
    registry: Option<Res<ContentRegistry>>,
    tuning: Res<GravityTuning>,
    mut progress: ResMut<LevelProgress>,
    mut loot: ResMut<RunLoot>,
    mut paused: ResMut<GameplayPaused>,
    mut next_state: ResMut<NextState<GameState>>,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };
    let Some(registry) = registry else {
        warn!("Level {} requested before content loaded", request.index);
        return;
    };

    if !progress.start(request.index) {
        warn!("Level {} is locked", request.index);
        return;
    }
    let Some(level) = registry.level(request.index) else {
        error!("Level {} is unlocked but missing from content", request.index);
        return;
    };

    let controller = match GravityController::new(*tuning) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot start level '{}': {}", level.id, e);
            return;
        }
    };

    for entity in &level_entities {
        commands.entity(entity).despawn();
    }

    loot.clear();
    spawn_level_geometry(&mut commands, level);
    spawn_player(&mut commands, level, controller);
    commands.insert_resource(LevelRun {
        start_x: level.spawn.x,
        finish_x: level.finish.center.x,
    });

    paused.release(OUTCOME_PAUSE);
    next_state.set(GameState::Playing);

    info!(
        "Level {} '{}' started ({} diamonds)",
        request.index + 1,
        level.name,
        level.diamonds.len()
    );
}

pub(crate) fn resolve_level_outcome(
    state: Res<State<GameState>>,
    mut outcomes: MessageReader<LevelOutcomeEvent>,
    mut next_state: ResMut<NextState<GameState>>,
    mut paused: ResMut<GameplayPaused>,
    mut progress: ResMut<LevelProgress>,
    mut loot: ResMut<RunLoot>,
    mut wallet: ResMut<PlayerWallet>,
    mut cues: MessageWriter<PlayCue>,
    mut saves: MessageWriter<SaveProfileRequest>,
) {
    let Some(outcome) = outcomes.read().last().copied() else {
        return;
    };
    if *state.get() != GameState::Playing {
        return;
    }

    match outcome {
        LevelOutcomeEvent::Completed => {
            let diamonds = loot.diamonds;
            let banked = loot.bank_into(&mut wallet);
            let unlocked = progress.complete_current();

            cues.write(PlayCue(AudioCue::Win));
            if banked > 0 {
                cues.write(PlayCue(AudioCue::DiamondBank));
            }
            saves.write(SaveProfileRequest);
            next_state.set(GameState::Won);

            info!(
                "Level {} complete: {} diamonds, {} coins banked (wallet {}), unlocked {:?}",
                progress.current + 1,
                diamonds,
                banked,
                wallet.coins,
                unlocked.map(|index| index + 1)
            );
        }
        LevelOutcomeEvent::Failed => {
            cues.write(PlayCue(AudioCue::Lose));
            next_state.set(GameState::Lost);
            info!("Level {} failed", progress.current + 1);
        }
    }

    paused.hold(OUTCOME_PAUSE);
}

/// A tap on the menu or an outcome screen moves the flow forward. Edges are
/// drained in every state so a tap is never acted on twice.
pub(crate) fn advance_on_activation(
    state: Res<State<GameState>>,
    mut edges: MessageReader<ActivationEdge>,
    progress: Res<LevelProgress>,
    selection: Res<LevelSelection>,
    mut requests: MessageWriter<StartLevelRequest>,
    mut next_state: ResMut<NextState<GameState>>,
    mut cues: MessageWriter<PlayCue>,
) {
    if edges.read().count() == 0 {
        return;
    }

    match state.get() {
        GameState::Menu => {
            requests.write(StartLevelRequest {
                index: selection.index.min(progress.last_unlocked),
            });
        }
        GameState::Won => match progress.next_level() {
            Some(index) => {
                requests.write(StartLevelRequest { index });
            }
            None => next_state.set(GameState::Menu),
        },
        GameState::Lost => {
            requests.write(StartLevelRequest {
                index: progress.current,
            });
        }
        GameState::Boot | GameState::Playing => return,
    }

    cues.write(PlayCue(AudioCue::Click));
}

/// Menu level select: Left/Right walk the unlocked levels.
pub(crate) fn handle_level_select_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    progress: Res<LevelProgress>,
    mut selection: ResMut<LevelSelection>,
    mut cues: MessageWriter<PlayCue>,
) {
    let mut step = 0;
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        step -= 1;
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        step += 1;
    }
    if step != 0 && selection.shift(step, &progress) {
        cues.write(PlayCue(AudioCue::Click));
    }
}

pub(crate) fn reset_level_selection(
    progress: Res<LevelProgress>,
    mut selection: ResMut<LevelSelection>,
) {
    selection.reset(&progress);
}

/// Clear the board and every pause source when returning to the menu.
pub(crate) fn teardown_level(
    mut commands: Commands,
    mut loot: ResMut<RunLoot>,
    mut paused: ResMut<GameplayPaused>,
    level_entities: Query<Entity, With<LevelEntity>>,
) {
    for entity in &level_entities {
        commands.entity(entity).despawn();
    }
    loot.clear();
    paused.release_all();
}
