//! Debug tooling for inspecting the sprite while tuning.
//!
//! - F3: toggle the kinematics overlay
//! - F4: log the sprite state as JSON

mod state;
mod systems;

pub use state::{DebugInfoOverlay, DebugState};
pub use systems::overlay_text;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::debug::systems::{handle_debug_hotkeys, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_debug_hotkeys, update_debug_info_overlay)
                .chain()
                .in_set(FrameSet::Present),
        );
    }
}
