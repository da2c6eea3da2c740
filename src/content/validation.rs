//! Validation for loaded content values.

use std::collections::HashSet;

use super::data::*;
use crate::kinematics::KinematicsTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub file: &'static str,
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: '{}' {}", self.file, self.field, self.message)
    }
}

/// Helper macro for checking a numeric rule
macro_rules! check {
    ($errors:expr, $file:expr, $field:expr, $ok:expr, $message:expr) => {
        if !$ok {
            $errors.push(ValidationError {
                file: $file,
                field: $field.to_string(),
                message: $message.to_string(),
            });
        }
    };
}

/// Validate tuning, controls and scene values.
/// Returns a list of validation errors, empty if everything is usable.
pub fn validate_content(kinematics: &KinematicsFile, scene: &SceneConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_tuning(&kinematics.tuning, &mut errors);
    validate_controls(&kinematics.controls, &mut errors);
    validate_scene(scene, &kinematics.tuning, &mut errors);
    errors
}

fn validate_tuning(tuning: &KinematicsTuning, errors: &mut Vec<ValidationError>) {
    const FILE: &str = "kinematics.ron";

    check!(errors, FILE, "tuning.gravity", tuning.gravity > 0.0, "must be positive");
    check!(
        errors,
        FILE,
        "tuning.jump_power",
        tuning.jump_power < 0.0,
        "must be negative (upward)"
    );
    check!(
        errors,
        FILE,
        "tuning.friction",
        (0.0..1.0).contains(&tuning.friction),
        "must be in [0, 1)"
    );
    check!(
        errors,
        FILE,
        "tuning.move_scale",
        tuning.move_scale >= 0.0,
        "must not be negative"
    );
    check!(errors, FILE, "tuning.min_x", tuning.min_x >= 0.0, "must not be negative");
    for (field, value) in [
        ("tuning.landing_tolerance_above", tuning.landing_tolerance_above),
        ("tuning.landing_tolerance_below", tuning.landing_tolerance_below),
        ("tuning.landing_margin", tuning.landing_margin),
        ("tuning.departure_margin", tuning.departure_margin),
    ] {
        check!(errors, FILE, field, value >= 0.0, "must not be negative");
    }
    check!(
        errors,
        FILE,
        "tuning.stand_offset",
        tuning.stand_offset < 0.0,
        "must be above the ground line"
    );
    check!(
        errors,
        FILE,
        "tuning.sprite_size",
        tuning.sprite_width() > 0.0 && tuning.sprite_height() > 0.0,
        "must be positive"
    );
}

fn validate_controls(controls: &ControlsConfig, errors: &mut Vec<ValidationError>) {
    const FILE: &str = "kinematics.ron";

    check!(
        errors,
        FILE,
        "controls.move_step",
        controls.move_step > 0.0,
        "must be positive"
    );
    check!(
        errors,
        FILE,
        "controls.repeat_delay",
        controls.repeat_delay >= 0.0,
        "must not be negative"
    );
    check!(
        errors,
        FILE,
        "controls.repeat_interval",
        controls.repeat_interval > 0.0,
        "must be positive"
    );
    check!(
        errors,
        FILE,
        "controls.pipe_entry_range",
        controls.pipe_entry_range >= 0.0,
        "must not be negative"
    );
}

fn validate_scene(scene: &SceneConfig, tuning: &KinematicsTuning, errors: &mut Vec<ValidationError>) {
    const FILE: &str = "scene.ron";

    check!(
        errors,
        FILE,
        "ground_clearance",
        scene.ground_clearance >= 0.0,
        "must not be negative"
    );
    check!(
        errors,
        FILE,
        "coin_spawn_interval",
        scene.coin_spawn_interval > 0.0,
        "must be positive"
    );
    check!(
        errors,
        FILE,
        "coin_fall_duration",
        scene.coin_fall_duration > 0.0,
        "must be positive"
    );
    check!(
        errors,
        FILE,
        "super_mode_duration",
        scene.super_mode_duration >= 0.0,
        "must not be negative"
    );

    let mut seen = HashSet::new();
    for (index, pipe) in scene.pipes.iter().enumerate() {
        let field = |name: &str| format!("pipes[{}].{}", index, name);

        check!(
            errors,
            FILE,
            field("section"),
            !pipe.section.trim().is_empty(),
            "must not be empty"
        );
        check!(
            errors,
            FILE,
            field("section"),
            seen.insert(pipe.section.as_str()),
            format!("duplicates section '{}'", pipe.section)
        );
        check!(
            errors,
            FILE,
            field("center"),
            (0.0..=1.0).contains(&pipe.center),
            "must be a fraction of the viewport width in [0, 1]"
        );
        check!(
            errors,
            FILE,
            field("width"),
            pipe.width > 0.0,
            "must be positive"
        );
        check!(
            errors,
            FILE,
            field("height"),
            pipe.height > 0.0,
            "must be positive"
        );
        check!(
            errors,
            FILE,
            field("height"),
            (pipe.height + tuning.stand_offset).abs() < 0.5,
            format!(
                "is {} but sprites stand {} above the ground",
                pipe.height, -tuning.stand_offset
            )
        );
    }
}
