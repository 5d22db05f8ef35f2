//! Content data definitions deserialized from RON files in assets/data/.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Wrapper for list-style data files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

/// Serializable Vec2 for RON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

// ============================================================================
// Levels (levels.ron)
// ============================================================================

/// Oriented box. Rotated boxes make the ramps and slopes of a level.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoxDef {
    pub center: Vec2Def,
    pub size: Vec2Def,
    #[serde(default)]
    pub rotation_degrees: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DiamondDef {
    pub position: Vec2Def,
    /// Coins banked when the level is finished with this diamond collected.
    pub coins: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub id: String,
    pub name: String,
    pub spawn: Vec2Def,
    pub finish: BoxDef,
    pub ground: Vec<BoxDef>,
    #[serde(default)]
    pub hazards: Vec<BoxDef>,
    #[serde(default)]
    pub diamonds: Vec<DiamondDef>,
}

// ============================================================================
// Skins (skins.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SkinDef {
    pub id: String,
    pub name: String,
    pub price: u32,
    /// sRGB tint applied to the player ball.
    pub color: [f32; 3],
    /// Default skins are always owned.
    #[serde(default)]
    pub is_default: bool,
}
