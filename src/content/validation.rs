//! Validation for level and skin definitions.

use std::collections::HashSet;

use super::data::*;
use super::registry::ContentRegistry;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source_type, self.source_id, self.message)
    }
}

fn box_is_valid(def: &BoxDef) -> bool {
    def.size.x > 0.0 && def.size.y > 0.0 && def.rotation_degrees.is_finite()
}

/// Validate all definitions in the registry.
/// Returns a list of validation errors, empty if the content is usable.
pub fn validate_content(registry: &ContentRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if registry.levels.is_empty() {
        errors.push(ValidationError {
            source_type: "Levels",
            source_id: "levels.ron".to_string(),
            message: "at least one level is required".to_string(),
        });
    }

    let mut level_ids = HashSet::new();
    for level in &registry.levels {
        let mut push = |message: String| {
            errors.push(ValidationError {
                source_type: "Level",
                source_id: level.id.clone(),
                message,
            });
        };

        if !level_ids.insert(level.id.as_str()) {
            push("duplicate level id".to_string());
        }
        if level.finish.center.x <= level.spawn.x {
            push(format!(
                "finish x {} must be right of spawn x {}",
                level.finish.center.x, level.spawn.x
            ));
        }
        if !box_is_valid(&level.finish) {
            push("finish zone has a non-positive size".to_string());
        }
        if level.ground.is_empty() {
            push("level has no ground".to_string());
        }
        for (index, ground) in level.ground.iter().enumerate() {
            if !box_is_valid(ground) {
                push(format!("ground[{}] has a non-positive size", index));
            }
        }
        for (index, hazard) in level.hazards.iter().enumerate() {
            if !box_is_valid(hazard) {
                push(format!("hazards[{}] has a non-positive size", index));
            }
        }
    }

    let mut skin_ids = HashSet::new();
    for skin in &registry.skins {
        if !skin_ids.insert(skin.id.as_str()) {
            errors.push(ValidationError {
                source_type: "Skin",
                source_id: skin.id.clone(),
                message: "duplicate skin id".to_string(),
            });
        }
    }
    if registry.default_skin().is_none() {
        errors.push(ValidationError {
            source_type: "Skins",
            source_id: "skins.ron".to_string(),
            message: "no default skin".to_string(),
        });
    }

    errors
}
