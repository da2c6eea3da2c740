//! Content domain: tests for RON parsing and the shipped data files.

use super::{KinematicsFile, SceneConfig, parse_ron, validate_content};
use crate::kinematics::KinematicsTuning;

const KINEMATICS_RON: &str = include_str!("../../assets/data/kinematics.ron");
const SCENE_RON: &str = include_str!("../../assets/data/scene.ron");

#[test]
fn test_shipped_kinematics_matches_defaults() {
    let file: KinematicsFile = parse_ron("kinematics.ron", KINEMATICS_RON).unwrap();
    assert_eq!(file.schema_version, 1);
    assert_eq!(file.tuning, KinematicsTuning::default());
    assert_eq!(file.controls.move_step, 40.0);
}

#[test]
fn test_shipped_scene_is_valid() {
    let kinematics: KinematicsFile = parse_ron("kinematics.ron", KINEMATICS_RON).unwrap();
    let scene: SceneConfig = parse_ron("scene.ron", SCENE_RON).unwrap();

    assert_eq!(scene.pipes.len(), 5);
    assert_eq!(scene.pipes[0].section, "about");
    assert!(scene.effects_seed.is_none());
    assert!(validate_content(&kinematics, &scene).is_empty());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file: KinematicsFile = parse_ron("inline", "(tuning: (gravity: 1.5))").unwrap();
    assert_eq!(file.tuning.gravity, 1.5);
    assert_eq!(file.tuning.jump_power, -30.0);
    assert_eq!(file.controls.repeat_interval, 0.033);
}

#[test]
fn test_implicit_some_seed() {
    let scene: SceneConfig = parse_ron("inline", "(effects_seed: 42, pipes: [])").unwrap();
    assert_eq!(scene.effects_seed, Some(42));
    assert!(scene.pipes.is_empty());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_ron::<SceneConfig>("scene.ron", "(pipes: [").unwrap_err();
    assert_eq!(err.file, "scene.ron");
    assert!(err.to_string().starts_with("Failed to load scene.ron: Parse error"));
}

#[test]
fn test_missing_directory_falls_back_to_defaults() {
    let content = super::load_or_default(std::path::Path::new("does/not/exist"));
    assert_eq!(content, super::LoadedContent::default());
}
