//! Rewards domain: skin ownership, purchases and the equipped skin.

use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::content::{ContentRegistry, SkinDef};
use crate::rewards::economy::PlayerWallet;

/// Why a purchase or equip was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinError {
    UnknownSkin(String),
    AlreadyOwned(String),
    NotOwned(String),
    InsufficientCoins { price: u32, coins: u32 },
}

impl std::fmt::Display for SkinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkinError::UnknownSkin(id) => write!(f, "unknown skin '{}'", id),
            SkinError::AlreadyOwned(id) => write!(f, "skin '{}' is already owned", id),
            SkinError::NotOwned(id) => write!(f, "skin '{}' is not owned", id),
            SkinError::InsufficientCoins { price, coins } => {
                write!(f, "skin costs {} coins, wallet has {}", price, coins)
            }
        }
    }
}

impl std::error::Error for SkinError {}

/// Owned and equipped skins. Default skins are always owned.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SkinCollection {
    pub purchased: BTreeSet<String>,
    pub equipped: Option<String>,
}

impl SkinCollection {
    pub fn owns(&self, skin: &SkinDef) -> bool {
        skin.is_default || self.purchased.contains(&skin.id)
    }

    pub fn try_buy(
        &mut self,
        id: &str,
        registry: &ContentRegistry,
        wallet: &mut PlayerWallet,
    ) -> Result<(), SkinError> {
        let skin = registry
            .skin(id)
            .ok_or_else(|| SkinError::UnknownSkin(id.to_string()))?;

        if self.owns(skin) {
            return Err(SkinError::AlreadyOwned(id.to_string()));
        }
        if !wallet.spend(skin.price) {
            return Err(SkinError::InsufficientCoins {
                price: skin.price,
                coins: wallet.coins,
            });
        }

        self.purchased.insert(skin.id.clone());
        Ok(())
    }

    pub fn equip(&mut self, id: &str, registry: &ContentRegistry) -> Result<(), SkinError> {
        let skin = registry
            .skin(id)
            .ok_or_else(|| SkinError::UnknownSkin(id.to_string()))?;

        if !self.owns(skin) {
            return Err(SkinError::NotOwned(id.to_string()));
        }

        self.equipped = Some(skin.id.clone());
        Ok(())
    }

    /// The equipped skin, falling back to the registry's default skin when
    /// nothing (or something no longer owned) is equipped.
    pub fn active<'a>(&self, registry: &'a ContentRegistry) -> Option<&'a SkinDef> {
        self.equipped
            .as_deref()
            .and_then(|id| registry.skin(id))
            .filter(|skin| self.owns(skin))
            .or_else(|| registry.default_skin())
    }

    /// Cheapest skin not yet owned, in catalog order on ties.
    pub fn next_for_sale<'a>(&self, registry: &'a ContentRegistry) -> Option<&'a SkinDef> {
        registry
            .skins
            .iter()
            .filter(|skin| !self.owns(skin))
            .min_by_key(|skin| skin.price)
    }

    /// Owned skin after the active one in catalog order, wrapping around.
    pub fn next_owned<'a>(&self, registry: &'a ContentRegistry) -> Option<&'a SkinDef> {
        let owned: Vec<&SkinDef> = registry.skins.iter().filter(|s| self.owns(s)).collect();
        let active = self.active(registry).map(|skin| skin.id.as_str());
        let position = owned.iter().position(|skin| Some(skin.id.as_str()) == active);
        match position {
            Some(i) => owned.get((i + 1) % owned.len()).copied(),
            None => owned.first().copied(),
        }
    }
}

/// Tint for the player sprite.
pub fn skin_color(skin: Option<&SkinDef>) -> Color {
    match skin {
        Some(skin) => Color::srgb(skin.color[0], skin.color[1], skin.color[2]),
        None => Color::srgb(0.9, 0.9, 0.9),
    }
}
