//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;
use crate::gravity::GravityTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a DataFile<T> wrapper from RON text.
pub fn parse_data_file<T>(file_name: &str, contents: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse and validate controller tuning from RON text.
pub fn parse_tuning(file_name: &str, contents: &str) -> Result<GravityTuning, ContentLoadError> {
    let tuning: GravityTuning = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    tuning.validate().map_err(|e| ContentLoadError {
        file: file_name.to_string(),
        message: format!("Invalid tuning: {}", e),
    })?;

    Ok(tuning)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Load all content from assets/data/*.ron into a ContentRegistry.
///
/// Each file falls back to its built-in counterpart independently, so the
/// registry is always usable; the returned errors say what was replaced.
pub fn load_all_content(base_path: &Path) -> (ContentRegistry, Vec<ContentLoadError>) {
    let mut registry = ContentRegistry::builtin();
    let mut errors = Vec::new();

    let tuning_path = base_path.join("gravity_tuning.ron");
    match read_file(&tuning_path)
        .and_then(|text| parse_tuning(&tuning_path.display().to_string(), &text))
    {
        Ok(tuning) => registry.tuning = tuning,
        Err(e) => errors.push(e),
    }

    let levels_path = base_path.join("levels.ron");
    match read_file(&levels_path)
        .and_then(|text| parse_data_file::<LevelDef>(&levels_path.display().to_string(), &text))
    {
        Ok(levels) if !levels.is_empty() => registry.levels = levels,
        Ok(_) => errors.push(ContentLoadError {
            file: levels_path.display().to_string(),
            message: "no levels defined".to_string(),
        }),
        Err(e) => errors.push(e),
    }

    let skins_path = base_path.join("skins.ron");
    match read_file(&skins_path)
        .and_then(|text| parse_data_file::<SkinDef>(&skins_path.display().to_string(), &text))
    {
        Ok(skins) if !skins.is_empty() => registry.skins = skins,
        Ok(_) => errors.push(ContentLoadError {
            file: skins_path.display().to_string(),
            message: "no skins defined".to_string(),
        }),
        Err(e) => errors.push(e),
    }

    (registry, errors)
}
