//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

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

/// Everything read from assets/data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedContent {
    pub kinematics: KinematicsFile,
    pub scene: SceneConfig,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from a string. `file` is only used for errors.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_ron(&file_name, &contents)
}

/// Load kinematics.ron and scene.ron from `base_path`.
/// Returns every file error rather than stopping at the first.
pub fn load_all_content(base_path: &Path) -> Result<LoadedContent, Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    let kinematics = load_single_file::<KinematicsFile>(&base_path.join("kinematics.ron"))
        .map_err(|e| errors.push(e))
        .ok();
    let scene = load_single_file::<SceneConfig>(&base_path.join("scene.ron"))
        .map_err(|e| errors.push(e))
        .ok();

    match (kinematics, scene) {
        (Some(kinematics), Some(scene)) => Ok(LoadedContent { kinematics, scene }),
        _ => Err(errors),
    }
}
