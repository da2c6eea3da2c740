//! Movement domain: sprite marker and look.

use bevy::prelude::*;

/// Marker for the controllable sprite.
#[derive(Component, Debug)]
pub struct Player;

/// Base tint of the sprite when no effect is overriding it.
pub const PLAYER_COLOR: Color = Color::srgb(0.86, 0.12, 0.1);
