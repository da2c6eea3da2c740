//! Pipes domain: components, resources and messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::kinematics::{Platform, PlatformId};

/// A pipe entity. `id` is its index in the scene config.
#[derive(Component, Debug)]
pub struct Pipe {
    pub id: PlatformId,
    pub section: String,
}

/// Rim drawn across the top of a pipe.
#[derive(Component, Debug)]
pub struct PipeRim;

pub const PIPE_COLOR: Color = Color::srgb(0.1, 0.62, 0.18);
pub const PIPE_HOVER_COLOR: Color = Color::srgb(0.3, 0.82, 0.36);
pub const PIPE_RIM_COLOR: Color = Color::srgb(0.05, 0.45, 0.1);
pub const PIPE_RIM_HEIGHT: f32 = 16.0;

/// Platform rectangles handed to the kinematics tick, in scene config order.
#[derive(Resource, Debug, Default, Clone)]
pub struct PlatformLayout {
    pub platforms: Vec<Platform>,
}

impl PlatformLayout {
    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }
}

/// The section the sprite last travelled to.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CurrentSection(pub String);

impl Default for CurrentSection {
    fn default() -> Self {
        Self("home".to_string())
    }
}

/// The sprite started going down a pipe.
#[derive(Debug, Clone)]
pub struct PipeEntryStarted {
    pub section: String,
    /// Screen position of the pipe mouth.
    pub at: Vec2,
}

impl Message for PipeEntryStarted {}

/// The sprite came back out after travelling to `section`.
#[derive(Debug, Clone)]
pub struct PipeEntered {
    pub section: String,
    /// Screen position of the sprite's feet on re-appearing.
    pub at: Vec2,
}

impl Message for PipeEntered {}
