//! Audio domain: cue playback and the music track.

use bevy::audio::{AudioSinkPlayback, PlaybackSettings};
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashMap;

use crate::audio::cues::{AudioCue, AudioSettings, MUSIC_PATH, PlayCue};
use crate::gravity::GravityFlippedEvent;

/// Loaded handles for every cue.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    clips: HashMap<AudioCue, Handle<AudioSource>>,
}

impl SoundBank {
    pub fn clip(&self, cue: AudioCue) -> Option<&Handle<AudioSource>> {
        self.clips.get(&cue)
    }
}

/// Marker for the looping background music entity.
#[derive(Component, Debug)]
pub struct MusicTrack;

pub(crate) fn load_sound_bank(mut commands: Commands, asset_server: Res<AssetServer>) {
    let clips = AudioCue::ALL
        .iter()
        .map(|cue| (*cue, asset_server.load(cue.asset_path())))
        .collect();
    commands.insert_resource(SoundBank { clips });

    commands.spawn((
        MusicTrack,
        AudioPlayer::new(asset_server.load(MUSIC_PATH)),
        PlaybackSettings::LOOP,
    ));
}

pub(crate) fn cue_gravity_flips(
    mut flips: MessageReader<GravityFlippedEvent>,
    mut cues: MessageWriter<PlayCue>,
) {
    for _ in flips.read() {
        cues.write(PlayCue(AudioCue::GravityFlip));
    }
}

pub(crate) fn play_cues(
    mut commands: Commands,
    mut cues: MessageReader<PlayCue>,
    settings: Res<AudioSettings>,
    bank: Option<Res<SoundBank>>,
) {
    for PlayCue(cue) in cues.read() {
        if !settings.sounds_enabled {
            continue;
        }
        let Some(clip) = bank.as_ref().and_then(|bank| bank.clip(*cue)) else {
            warn!("No clip loaded for {:?}", cue);
            continue;
        };
        commands.spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN));
    }
}

/// Keep the music sink in line with the setting, including when the sink is
/// first created after the clip finishes loading.
pub(crate) fn apply_music_setting(
    settings: Res<AudioSettings>,
    music: Query<Ref<AudioSink>, With<MusicTrack>>,
) {
    for sink in &music {
        if !settings.is_changed() && !sink.is_added() {
            continue;
        }
        if settings.music_enabled {
            sink.play();
        } else {
            sink.pause();
        }
    }
}

/// [M] toggles music, [S] toggles sound effects.
pub(crate) fn handle_audio_toggle_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<AudioSettings>,
    mut cues: MessageWriter<PlayCue>,
) {
    if keyboard.just_pressed(KeyCode::KeyM) {
        let on = settings.toggle_music();
        info!("Music {}", if on { "on" } else { "off" });
        cues.write(PlayCue(AudioCue::Click));
    }
    if keyboard.just_pressed(KeyCode::KeyS) {
        let on = settings.toggle_sounds();
        info!("Sounds {}", if on { "on" } else { "off" });
        cues.write(PlayCue(AudioCue::Click));
    }
}
