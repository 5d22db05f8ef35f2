//! Persistence domain: the saved player profile.

use std::io;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::ContentRegistry;
use crate::levels::LevelProgress;
use crate::rewards::{PlayerWallet, SkinCollection};

/// Everything that survives between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub coins: u32,
    pub last_unlocked_level: usize,
    pub current_level: usize,
    pub purchased_skins: Vec<String>,
    pub equipped_skin: Option<String>,
}

#[derive(Debug)]
pub enum ProfileError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::Io(e) => write!(f, "profile I/O failed: {}", e),
            ProfileError::Parse(e) => write!(f, "profile is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for ProfileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProfileError::Io(e) => Some(e),
            ProfileError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ProfileError {
    fn from(e: io::Error) -> Self {
        ProfileError::Io(e)
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(e: serde_json::Error) -> Self {
        ProfileError::Parse(e)
    }
}

impl PlayerProfile {
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ProfileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a profile from disk. A missing file is not an error and yields
    /// `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ProfileError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Snapshot the live resources.
    pub fn capture(
        wallet: &PlayerWallet,
        progress: &LevelProgress,
        skins: &SkinCollection,
    ) -> Self {
        Self {
            coins: wallet.coins,
            last_unlocked_level: progress.last_unlocked,
            current_level: progress.current,
            purchased_skins: skins.purchased.iter().cloned().collect(),
            equipped_skin: skins.equipped.clone(),
        }
    }

    /// Restore into the live resources. Level indices are clamped to the
    /// levels that exist; skins the catalog no longer knows are dropped.
    pub fn apply(
        &self,
        registry: &ContentRegistry,
        wallet: &mut PlayerWallet,
        progress: &mut LevelProgress,
        skins: &mut SkinCollection,
    ) {
        wallet.coins = self.coins;

        progress.set_last_unlocked(self.last_unlocked_level);
        progress.current = self.current_level.min(progress.last_unlocked);

        skins.purchased = self
            .purchased_skins
            .iter()
            .filter(|id| registry.skin(id).is_some())
            .cloned()
            .collect();
        skins.equipped = None;
        if let Some(id) = &self.equipped_skin {
            if let Err(e) = skins.equip(id, registry) {
                warn!("Saved skin not restored: {}", e);
            }
        }
    }
}
