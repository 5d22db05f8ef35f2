//! Levels domain: finish, lose and pickup sensors.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{AudioCue, PlayCue};
use crate::core::GameState;
use crate::gravity::Player;
use crate::levels::components::{Diamond, FinishZone, LoseZone};
use crate::levels::events::LevelOutcomeEvent;
use crate::rewards::DiamondCollectedEvent;

/// Turn player/sensor contacts into pickups and at most one level outcome
/// per frame.
pub(crate) fn detect_level_triggers(
    mut commands: Commands,
    state: Res<State<GameState>>,
    mut collision_events: MessageReader<CollisionStart>,
    mut outcome_events: MessageWriter<LevelOutcomeEvent>,
    mut diamond_events: MessageWriter<DiamondCollectedEvent>,
    mut cues: MessageWriter<PlayCue>,
    players: Query<(), With<Player>>,
    finish_zones: Query<(), With<FinishZone>>,
    lose_zones: Query<(), With<LoseZone>>,
    diamonds: Query<&Diamond>,
) {
    if *state.get() != GameState::Playing {
        collision_events.clear();
        return;
    }

    let mut outcome = None;
    let mut collected: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            if !players.contains(player_entity) {
                continue;
            }

            if let Ok(diamond) = diamonds.get(other) {
                if collected.contains(&other) {
                    continue;
                }
                collected.push(other);
                diamond_events.write(DiamondCollectedEvent {
                    coins: diamond.coins,
                });
                cues.write(PlayCue(AudioCue::Diamond));
                commands.entity(other).despawn();
            } else if finish_zones.contains(other) {
                outcome.get_or_insert(LevelOutcomeEvent::Completed);
            } else if lose_zones.contains(other) {
                outcome.get_or_insert(LevelOutcomeEvent::Failed);
            }
        }
    }

    if let Some(outcome) = outcome {
        debug!("Level trigger hit: {:?}", outcome);
        outcome_events.write(outcome);
    }
}
