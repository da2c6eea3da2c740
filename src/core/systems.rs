//! Core domain: camera setup and window tracking.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::SceneConfig;
use crate::kinematics::Viewport;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Mirror the primary window size into the `Viewport` resource.
/// Only writes on change so `is_changed` readers relayout once per resize.
pub(crate) fn sync_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    scene: Res<SceneConfig>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let next = Viewport::new(window.width(), window.height(), scene.ground_clearance);
    if *viewport != next {
        debug!(
            "Viewport {}x{} -> {}x{}, ground line at {}",
            viewport.width, viewport.height, next.width, next.height, next.ground_line
        );
        *viewport = next;
    }
}
