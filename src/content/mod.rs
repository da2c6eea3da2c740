//! Content domain: RON configuration for kinematics, controls and the scene.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{ControlsConfig, KinematicsFile, PipeDef, SceneConfig};
pub use loader::{ContentLoadError, LoadedContent, load_all_content, parse_ron};
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::Path;

const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let content = load_or_default(Path::new(CONTENT_DIR));

        app.insert_resource(content.kinematics.tuning)
            .insert_resource(content.kinematics.controls)
            .insert_resource(content.scene);
    }
}

/// Load and validate content, falling back to built-in defaults on any error.
pub fn load_or_default(base_path: &Path) -> LoadedContent {
    let content = match load_all_content(base_path) {
        Ok(content) => content,
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!("Content failed to load, using built-in defaults");
            return LoadedContent::default();
        }
    };

    let errors = validate_content(&content.kinematics, &content.scene);
    if !errors.is_empty() {
        for error in &errors {
            error!("Invalid content: {}", error);
        }
        warn!(
            "{} content validation error(s), using built-in defaults",
            errors.len()
        );
        return LoadedContent::default();
    }

    info!(
        "Content loaded from {}: {} pipe(s), gravity={}, jump_power={}",
        base_path.display(),
        content.scene.pipes.len(),
        content.kinematics.tuning.gravity,
        content.kinematics.tuning.jump_power
    );
    content
}
