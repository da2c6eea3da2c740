//! Core domain: camera, viewport tracking and per-frame system ordering.

mod resources;
mod systems;

pub use resources::{ControlLock, LockSource, controls_active};

use bevy::prelude::*;

use crate::core::systems::{setup_camera, sync_viewport};
use crate::kinematics::Viewport;

/// Per-frame phases. Everything that reads the sprite state runs after
/// `Simulate`, so it always sees this frame's tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Window size.
    Window,
    /// Platform rectangles.
    Layout,
    /// Keyboard and pointer capture.
    Input,
    /// The single kinematics tick.
    Simulate,
    /// Rendering, effects and HUD.
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .init_resource::<ControlLock>()
            .configure_sets(
                Update,
                (
                    FrameSet::Window,
                    FrameSet::Layout,
                    FrameSet::Input,
                    FrameSet::Simulate,
                    FrameSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, sync_viewport.in_set(FrameSet::Window));
    }
}
