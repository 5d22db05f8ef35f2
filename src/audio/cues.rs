//! Audio domain: cue catalogue and player sound settings.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Every one-shot sound the game can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    GravityFlip,
    Diamond,
    DiamondBank,
    Win,
    Lose,
    Click,
    SkinSelect,
}

impl AudioCue {
    pub const ALL: [AudioCue; 7] = [
        AudioCue::GravityFlip,
        AudioCue::Diamond,
        AudioCue::DiamondBank,
        AudioCue::Win,
        AudioCue::Lose,
        AudioCue::Click,
        AudioCue::SkinSelect,
    ];

    pub fn asset_path(self) -> &'static str {
        match self {
            AudioCue::GravityFlip => "audio/gravity_flip.ogg",
            AudioCue::Diamond => "audio/diamond.ogg",
            AudioCue::DiamondBank => "audio/diamond_bank.ogg",
            AudioCue::Win => "audio/win.ogg",
            AudioCue::Lose => "audio/lose.ogg",
            AudioCue::Click => "audio/click.ogg",
            AudioCue::SkinSelect => "audio/skin_select.ogg",
        }
    }
}

pub const MUSIC_PATH: &str = "audio/music.ogg";

/// Request to play a one-shot cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayCue(pub AudioCue);

impl Message for PlayCue {}

/// Player-facing audio switches.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSettings {
    pub music_enabled: bool,
    pub sounds_enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sounds_enabled: true,
        }
    }
}

impl AudioSettings {
    pub fn toggle_music(&mut self) -> bool {
        self.music_enabled = !self.music_enabled;
        self.music_enabled
    }

    pub fn toggle_sounds(&mut self) -> bool {
        self.sounds_enabled = !self.sounds_enabled;
        self.sounds_enabled
    }

}
