//! Kinematics domain: the screen frame the simulation runs in.

use bevy::prelude::*;

/// Screen dimensions in logical pixels, y growing downward from the top edge.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Screen y of the ground surface.
    pub ground_line: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 200.0)
    }
}

impl Viewport {
    /// Ground sits `ground_clearance` pixels above the bottom edge.
    pub fn new(width: f32, height: f32, ground_clearance: f32) -> Self {
        Self {
            width,
            height,
            ground_line: height - ground_clearance,
        }
    }

    /// Screen point to world point for a `Camera2d` centered on the origin.
    pub fn to_world(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x - self.width * 0.5, self.height * 0.5 - screen.y)
    }

    /// Center of a screen rectangle given its left edge, bottom edge and size.
    pub fn rect_center_world(&self, left: f32, bottom: f32, size: Vec2) -> Vec2 {
        self.to_world(Vec2::new(left + size.x * 0.5, bottom - size.y * 0.5))
    }
}
