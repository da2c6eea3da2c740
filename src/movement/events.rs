//! Movement domain: support transitions published after each tick.
//!
//! Positions are screen pixels at the middle of the sprite's feet.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::kinematics::{PlatformId, Support};

/// The sprite left its support with a jump.
#[derive(Debug, Clone, Copy)]
pub struct SpriteJumped {
    pub at: Vec2,
}

impl Message for SpriteJumped {}

/// The sprite came to rest on the ground or a platform.
#[derive(Debug, Clone, Copy)]
pub struct SpriteLanded {
    pub surface: Support,
    pub at: Vec2,
}

impl Message for SpriteLanded {}

/// The sprite stopped being supported by a platform.
#[derive(Debug, Clone, Copy)]
pub struct SpriteLeftPlatform {
    pub platform: PlatformId,
}

impl Message for SpriteLeftPlatform {}
