//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron. Every field has a default, so a
//! file only needs to list what it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::kinematics::KinematicsTuning;

// ============================================================================
// Kinematics (kinematics.ron)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KinematicsFile {
    pub schema_version: u32,
    pub tuning: KinematicsTuning,
    pub controls: ControlsConfig,
}

/// Keyboard behaviour for the sprite.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Impulse size for one left/right key press.
    pub move_step: f32,
    /// Seconds a move key must be held before it starts repeating.
    pub repeat_delay: f32,
    /// Seconds between repeats while held.
    pub repeat_interval: f32,
    /// Max horizontal distance from a pipe center that still allows entry.
    pub pipe_entry_range: f32,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            move_step: 40.0,
            repeat_delay: 0.3,
            repeat_interval: 0.033,
            pipe_entry_range: 80.0,
        }
    }
}

// ============================================================================
// Scene (scene.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    pub schema_version: u32,
    /// Distance from the bottom of the window to the ground line.
    pub ground_clearance: f32,
    pub starting_coins: u32,
    /// Coins granted per pickup.
    pub coin_value: u32,
    /// Coins granted by the secret code.
    pub super_mode_bonus: u32,
    pub super_mode_duration: f32,
    /// Seed for cosmetic randomness. `None` picks one at startup.
    pub effects_seed: Option<u64>,
    pub coin_spawn_interval: f32,
    pub coin_fall_duration: f32,
    pub pipes: Vec<PipeDef>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            ground_clearance: 200.0,
            starting_coins: 1000,
            coin_value: 10,
            super_mode_bonus: 1000,
            super_mode_duration: 10.0,
            effects_seed: None,
            coin_spawn_interval: 8.0,
            coin_fall_duration: 4.0,
            pipes: default_pipes(),
        }
    }
}

/// One pipe. Its rectangle is laid out from the current viewport.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PipeDef {
    /// Section this pipe leads to.
    pub section: String,
    /// Horizontal center as a fraction of the viewport width.
    pub center: f32,
    pub width: f32,
    pub height: f32,
}

impl PipeDef {
    pub fn new(section: &str, center: f32) -> Self {
        Self {
            section: section.to_string(),
            center,
            width: 80.0,
            height: 90.0,
        }
    }
}

fn default_pipes() -> Vec<PipeDef> {
    vec![
        PipeDef::new("about", 0.25),
        PipeDef::new("skills", 0.4),
        PipeDef::new("projects", 0.55),
        PipeDef::new("experience", 0.7),
        PipeDef::new("contact", 0.85),
    ]
}
