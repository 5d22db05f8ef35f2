use super::systems::play_cues;
use super::*;
use std::collections::HashSet;

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

#[test]
fn test_sound_toggle_leaves_music_alone() {
    let mut settings = AudioSettings::default();
    assert!(!settings.toggle_sounds());
    assert!(settings.music_enabled);
    assert!(settings.toggle_sounds());
}

#[test]
fn test_muted_cues_spawn_no_players() {
    let mut world = World::new();
    world.insert_resource(AudioSettings {
        music_enabled: true,
        sounds_enabled: false,
    });
    world.init_resource::<Messages<PlayCue>>();
    world
        .resource_mut::<Messages<PlayCue>>()
        .write(PlayCue(AudioCue::Win));

    world.run_system_once(play_cues).expect("cue system runs");

    let mut players = world.query::<&AudioPlayer>();
    assert_eq!(players.iter(&world).count(), 0);
}

#[test]
fn test_music_toggle_leaves_sounds_alone() {
    let mut settings = AudioSettings::default();
    assert!(!settings.toggle_music());
    assert!(settings.sounds_enabled);
    assert!(settings.toggle_music());
}

#[test]
fn test_each_cue_has_its_own_clip() {
    let paths: HashSet<_> = AudioCue::ALL.iter().map(|cue| cue.asset_path()).collect();
    assert_eq!(paths.len(), AudioCue::ALL.len());
    assert!(!paths.contains(MUSIC_PATH));
}
