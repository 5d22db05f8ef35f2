//! Persistence domain: load the player profile at startup and write it back
//! on milestones, on a timer, on suspend and at exit.

mod profile;

pub use profile::{PlayerProfile, ProfileError};

use std::path::PathBuf;

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::AppLifecycle;

use crate::content::ContentRegistry;
use crate::levels::{LevelProgress, sync_level_count};
use crate::rewards::{PlayerWallet, SkinCollection};

pub const PROFILE_FILE: &str = "flipside_profile.json";
pub const AUTOSAVE_INTERVAL_SECS: f32 = 60.0;

/// Where the profile lives on disk.
#[derive(Resource, Debug, Clone)]
pub struct ProfilePath(pub PathBuf);

impl Default for ProfilePath {
    fn default() -> Self {
        Self(PathBuf::from(PROFILE_FILE))
    }
}

#[derive(Resource, Debug)]
pub struct AutosaveTimer(pub Timer);

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self(Timer::from_seconds(AUTOSAVE_INTERVAL_SECS, TimerMode::Repeating))
    }
}

/// Ask for the profile to be written this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveProfileRequest;

impl Message for SaveProfileRequest {}

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProfilePath>()
            .init_resource::<AutosaveTimer>()
            .add_message::<SaveProfileRequest>()
            .add_systems(Startup, load_profile.after(sync_level_count))
            .add_systems(Update, (tick_autosave, save_on_request).chain())
            .add_systems(Last, save_on_exit_or_suspend);
    }
}

fn load_profile(
    path: Res<ProfilePath>,
    registry: Option<Res<ContentRegistry>>,
    mut wallet: ResMut<PlayerWallet>,
    mut progress: ResMut<LevelProgress>,
    mut skins: ResMut<SkinCollection>,
) {
    let Some(registry) = registry else {
        warn!("Content not loaded; profile left at defaults");
        return;
    };

    let profile = match PlayerProfile::load_from(&path.0) {
        Ok(Some(profile)) => {
            info!("Loaded profile from {}", path.0.display());
            profile
        }
        Ok(None) => {
            info!("No profile at {}, starting fresh", path.0.display());
            PlayerProfile::default()
        }
        Err(e) => {
            warn!("{} ({}); starting fresh", e, path.0.display());
            PlayerProfile::default()
        }
    };

    profile.apply(&registry, &mut wallet, &mut progress, &mut skins);
}

fn write_profile(
    path: &ProfilePath,
    wallet: &PlayerWallet,
    progress: &LevelProgress,
    skins: &SkinCollection,
) {
    let profile = PlayerProfile::capture(wallet, progress, skins);
    match profile.save_to(&path.0) {
        Ok(()) => info!("Profile saved to {}", path.0.display()),
        Err(e) => warn!("Failed to save profile: {}", e),
    }
}

/// Real time keeps ticking while gameplay is paused.
fn tick_autosave(
    time: Res<Time<Real>>,
    mut timer: ResMut<AutosaveTimer>,
    mut requests: MessageWriter<SaveProfileRequest>,
) {
    timer.0.tick(time.delta());
    if timer.0.just_finished() {
        requests.write(SaveProfileRequest);
    }
}

fn save_on_request(
    mut requests: MessageReader<SaveProfileRequest>,
    path: Res<ProfilePath>,
    wallet: Res<PlayerWallet>,
    progress: Res<LevelProgress>,
    skins: Res<SkinCollection>,
) {
    if requests.read().count() == 0 {
        return;
    }
    write_profile(&path, &wallet, &progress, &skins);
}

/// Mobile platforms may kill a suspended app without an exit message.
pub(crate) fn save_on_exit_or_suspend(
    mut exits: MessageReader<AppExit>,
    mut lifecycle: MessageReader<AppLifecycle>,
    path: Res<ProfilePath>,
    wallet: Res<PlayerWallet>,
    progress: Res<LevelProgress>,
    skins: Res<SkinCollection>,
) {
    let exiting = exits.read().count() > 0;
    let suspending = lifecycle
        .read()
        .filter(|event| **event == AppLifecycle::WillSuspend)
        .count()
        > 0;
    if !exiting && !suspending {
        return;
    }
    write_profile(&path, &wallet, &progress, &skins);
}
