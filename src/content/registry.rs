//! ContentRegistry resource holding the ordered level list, skins and
//! controller tuning.

use bevy::prelude::*;

use super::data::*;
use crate::gravity::GravityTuning;

/// Central registry for all loaded game content.
#[derive(Resource, Debug, Clone)]
pub struct ContentRegistry {
    /// Levels in play order; a level's index is its progression id.
    pub levels: Vec<LevelDef>,
    pub skins: Vec<SkinDef>,
    pub tuning: GravityTuning,
}

impl ContentRegistry {
    pub fn level(&self, index: usize) -> Option<&LevelDef> {
        self.levels.get(index)
    }

    pub fn skin(&self, id: &str) -> Option<&SkinDef> {
        self.skins.iter().find(|skin| skin.id == id)
    }

    pub fn default_skin(&self) -> Option<&SkinDef> {
        self.skins.iter().find(|skin| skin.is_default)
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded: {} levels, {} skins",
            self.levels.len(),
            self.skins.len()
        )
    }

    /// Minimal content used when the data files cannot be loaded.
    pub fn builtin() -> Self {
        let flat = |x: f32, y: f32, width: f32| BoxDef {
            center: Vec2Def { x, y },
            size: Vec2Def { x: width, y: 1.0 },
            rotation_degrees: 0.0,
        };

        Self {
            levels: vec![LevelDef {
                id: "builtin_corridor".to_string(),
                name: "Corridor".to_string(),
                spawn: Vec2Def { x: 0.0, y: 0.0 },
                finish: BoxDef {
                    center: Vec2Def { x: 58.0, y: 1.0 },
                    size: Vec2Def { x: 1.0, y: 6.0 },
                    rotation_degrees: 0.0,
                },
                ground: vec![flat(30.0, -2.0, 64.0), flat(30.0, 4.0, 64.0)],
                hazards: Vec::new(),
                diamonds: Vec::new(),
            }],
            skins: vec![SkinDef {
                id: "skin_classic".to_string(),
                name: "Classic".to_string(),
                price: 0,
                color: [0.95, 0.95, 0.95],
                is_default: true,
            }],
            tuning: GravityTuning::default(),
        }
    }
}
