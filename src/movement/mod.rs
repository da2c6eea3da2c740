//! Movement domain: ECS wiring around the kinematics tick.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{PLAYER_COLOR, Player};
pub use events::{SpriteJumped, SpriteLanded, SpriteLeftPlatform};
pub use resources::{KeyRepeat, MovementInput};

use bevy::prelude::*;

use crate::core::{FrameSet, controls_active};
use crate::kinematics::{KinematicsTuning, SpriteState, Viewport};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    advance_sprite, read_keyboard, read_sprite_click, sync_sprite_transform,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<SpriteJumped>()
            .add_message::<SpriteLanded>()
            .add_message::<SpriteLeftPlatform>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_keyboard.in_set(FrameSet::Input))
            .add_systems(
                Update,
                read_sprite_click
                    .in_set(FrameSet::Input)
                    .run_if(controls_active),
            )
            .add_systems(Update, advance_sprite.in_set(FrameSet::Simulate))
            .add_systems(Update, sync_sprite_transform.in_set(FrameSet::Present));
    }
}

/// The sprite's bounding box in screen pixels.
pub fn sprite_screen_rect(state: &SpriteState, viewport: &Viewport, tuning: &KinematicsTuning) -> Rect {
    let bottom = state.bottom(viewport.ground_line);
    Rect::new(
        state.position.x,
        bottom - tuning.sprite_height(),
        state.position.x + tuning.sprite_width(),
        bottom,
    )
}

/// Middle of the sprite's feet in screen pixels.
pub fn feet_position(state: &SpriteState, viewport: &Viewport, tuning: &KinematicsTuning) -> Vec2 {
    Vec2::new(
        state.position.x + tuning.sprite_width() * 0.5,
        state.bottom(viewport.ground_line),
    )
}

/// Middle of the sprite in screen pixels.
pub fn sprite_center(state: &SpriteState, viewport: &Viewport, tuning: &KinematicsTuning) -> Vec2 {
    sprite_screen_rect(state, viewport, tuning).center()
}
