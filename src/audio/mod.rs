//! Audio domain: one-shot cues and background music.

mod cues;
mod systems;
#[cfg(test)]
mod tests;

pub use cues::{AudioCue, AudioSettings, MUSIC_PATH, PlayCue};
pub use systems::{MusicTrack, SoundBank};

use bevy::prelude::*;

use crate::audio::systems::{
    apply_music_setting, cue_gravity_flips, handle_audio_toggle_keys, load_sound_bank, play_cues,
};

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AudioSettings>()
            .add_message::<PlayCue>()
            .add_systems(Startup, load_sound_bank)
            .add_systems(
                Update,
                (
                    (handle_audio_toggle_keys, cue_gravity_flips, play_cues).chain(),
                    apply_music_setting,
                ),
            );
    }
}
