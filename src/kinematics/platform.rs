//! Kinematics domain: read-only platform geometry.

use serde::{Deserialize, Serialize};

/// Stable handle for a platform across layout recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PlatformId(pub u32);

/// A surface the sprite can stand on, in screen pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Platform {
    pub id: PlatformId,
    pub left: f32,
    pub right: f32,
    pub top: f32,
}

impl Platform {
    pub fn new(id: PlatformId, left: f32, right: f32, top: f32) -> Self {
        Self {
            id,
            left,
            right,
            top,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    /// True if `[left, right]` overlaps this platform's span shrunk by
    /// `margin` on both sides. Edges that only touch do not overlap.
    pub fn overlaps_span(&self, left: f32, right: f32, margin: f32) -> bool {
        right > self.left + margin && left < self.right - margin
    }

    /// True if a sprite bottom moving from `from` down to `to` passes
    /// through the band `[top - above, top + below]`.
    pub fn band_crossed(&self, from: f32, to: f32, above: f32, below: f32) -> bool {
        from <= self.top + below && to >= self.top - above
    }
}
