//! Kinematics domain: tunable constants for the per-tick simulation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick physics constants. Units are pixels and pixels per tick.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct KinematicsTuning {
    /// Added to `velocity.y` every airborne tick (+y is downward).
    pub gravity: f32,
    /// Vertical velocity set by a jump. Negative, i.e. upward.
    pub jump_power: f32,
    /// Horizontal velocity multiplier applied every tick.
    pub friction: f32,
    /// Scales a move impulse into horizontal velocity.
    pub move_scale: f32,
    /// Leftmost allowed `position.x`.
    pub min_x: f32,
    /// `max_x` is the viewport width minus this inset.
    pub max_x_inset: f32,
    /// How far above a platform top the sprite bottom may be and still land.
    pub landing_tolerance_above: f32,
    /// How far below a platform top the sprite bottom may be and still land.
    pub landing_tolerance_below: f32,
    /// Horizontal shrink of the platform span for the landing test.
    pub landing_margin: f32,
    /// Horizontal shrink of the platform span for the departure test.
    pub departure_margin: f32,
    /// `position.y` of a sprite standing on any platform.
    pub stand_offset: f32,
    /// Sprite bounding box in pixels.
    pub sprite_size: (f32, f32),
}

impl Default for KinematicsTuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            jump_power: -30.0,
            friction: 0.8,
            move_scale: 0.5,
            min_x: 20.0,
            max_x_inset: 80.0,
            landing_tolerance_above: 5.0,
            landing_tolerance_below: 10.0,
            landing_margin: 20.0,
            departure_margin: 30.0,
            stand_offset: -90.0,
            sprite_size: (60.0, 60.0),
        }
    }
}

impl KinematicsTuning {
    pub fn sprite_width(&self) -> f32 {
        self.sprite_size.0
    }

    pub fn sprite_height(&self) -> f32 {
        self.sprite_size.1
    }

    /// Rightmost allowed `position.x` for a viewport of the given width.
    /// Never below `min_x`, so tiny windows pin the sprite to the left edge.
    pub fn max_x(&self, viewport_width: f32) -> f32 {
        (viewport_width - self.max_x_inset).max(self.min_x)
    }

    /// Peak height of a jump from rest, in pixels above the take-off point.
    /// Uses the discrete sum of the per-tick velocities, not v²/2g.
    pub fn jump_apex(&self) -> f32 {
        if self.gravity <= 0.0 {
            return f32::INFINITY;
        }
        let mut vy = self.jump_power;
        let mut height = 0.0;
        loop {
            vy += self.gravity;
            if vy >= 0.0 {
                break;
            }
            height -= vy;
        }
        height
    }

    /// Terminal horizontal speed when the same impulse is applied every tick.
    pub fn terminal_speed(&self, move_delta: f32) -> f32 {
        let impulse = move_delta * self.move_scale;
        if self.friction >= 1.0 {
            return f32::INFINITY;
        }
        // v = (v + i) * f converges to i * f / (1 - f)
        impulse.abs() * self.friction / (1.0 - self.friction)
    }
}
