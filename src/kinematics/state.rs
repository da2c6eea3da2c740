//! Kinematics domain: the sprite's simulated state.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::PlatformId;

/// What currently bears the sprite's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum Support {
    #[default]
    Ground,
    Platform(PlatformId),
    Airborne,
}

/// Position and velocity of the controllable sprite.
///
/// `position.x` is the sprite's left edge in screen pixels. `position.y` is
/// an offset from the ground line: 0 on the ground, negative when raised.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SpriteState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub support: Support,
}

impl Default for SpriteState {
    fn default() -> Self {
        Self::grounded_at(50.0)
    }
}

impl SpriteState {
    pub fn grounded_at(x: f32) -> Self {
        Self {
            position: Vec2::new(x, 0.0),
            velocity: Vec2::ZERO,
            support: Support::Ground,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.support == Support::Ground
    }

    pub fn on_platform(&self) -> bool {
        matches!(self.support, Support::Platform(_))
    }

    pub fn is_airborne(&self) -> bool {
        self.support == Support::Airborne
    }

    pub fn is_supported(&self) -> bool {
        !self.is_airborne()
    }

    pub fn current_platform(&self) -> Option<PlatformId> {
        match self.support {
            Support::Platform(id) => Some(id),
            _ => None,
        }
    }

    /// Screen-space y of the sprite's feet for a given ground line.
    pub fn bottom(&self, ground_line: f32) -> f32 {
        ground_line + self.position.y
    }

    pub fn snapshot(&self) -> SpriteSnapshot {
        SpriteSnapshot {
            x: self.position.x,
            y: self.position.y,
            vx: self.velocity.x,
            vy: self.velocity.y,
            on_ground: self.on_ground(),
            on_platform: self.on_platform(),
            current_platform: self.current_platform(),
        }
    }
}

/// Flat, serializable copy of a [`SpriteState`] for readers outside the tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpriteSnapshot {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub on_platform: bool,
    pub current_platform: Option<PlatformId>,
}
