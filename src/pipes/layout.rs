//! Pipes domain: placing pipes from the viewport and publishing platforms.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::{PipeDef, SceneConfig};
use crate::kinematics::{Platform, PlatformId, Viewport};
use crate::pipes::{
    PIPE_COLOR, PIPE_HOVER_COLOR, PIPE_RIM_COLOR, PIPE_RIM_HEIGHT, Pipe, PipeRim, PlatformLayout,
};

/// Screen rectangle for each pipe, in config order.
pub fn layout_platforms(pipes: &[PipeDef], viewport: &Viewport) -> Vec<Platform> {
    pipes
        .iter()
        .enumerate()
        .map(|(index, pipe)| {
            let center = pipe.center * viewport.width;
            Platform::new(
                PlatformId(index as u32),
                center - pipe.width * 0.5,
                center + pipe.width * 0.5,
                viewport.ground_line - pipe.height,
            )
        })
        .collect()
}

/// Nearest pipe whose center is strictly within `range` of `x`.
pub fn nearest_pipe(platforms: &[Platform], x: f32, range: f32) -> Option<&Platform> {
    platforms
        .iter()
        .map(|p| (p, (p.center_x() - x).abs()))
        .filter(|(_, distance)| *distance < range)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

pub(crate) fn spawn_pipes(mut commands: Commands, scene: Res<SceneConfig>) {
    for (index, def) in scene.pipes.iter().enumerate() {
        commands
            .spawn((
                Pipe {
                    id: PlatformId(index as u32),
                    section: def.section.clone(),
                },
                Sprite {
                    color: PIPE_COLOR,
                    custom_size: Some(Vec2::new(def.width, def.height)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 1.0),
            ))
            .with_children(|parent| {
                parent.spawn((
                    PipeRim,
                    Sprite {
                        color: PIPE_RIM_COLOR,
                        custom_size: Some(Vec2::new(def.width + 12.0, PIPE_RIM_HEIGHT)),
                        ..default()
                    },
                    Transform::from_xyz(0.0, (def.height - PIPE_RIM_HEIGHT) * 0.5, 0.1),
                ));
            });
    }

    info!("Spawned {} pipe(s)", scene.pipes.len());
}

/// Recompute pipe rectangles whenever the viewport changes.
pub(crate) fn relayout_pipes(
    viewport: Res<Viewport>,
    scene: Res<SceneConfig>,
    mut layout: ResMut<PlatformLayout>,
    mut pipes: Query<(&Pipe, &mut Transform)>,
) {
    if !viewport.is_changed() && layout.platforms.len() == scene.pipes.len() {
        return;
    }

    layout.platforms = layout_platforms(&scene.pipes, &viewport);

    for (pipe, mut transform) in &mut pipes {
        let Some(platform) = layout.get(pipe.id) else {
            continue;
        };
        let size = Vec2::new(platform.width(), viewport.ground_line - platform.top);
        let center = viewport.rect_center_world(platform.left, viewport.ground_line, size);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }

    debug!("Laid out {} platform(s)", layout.platforms.len());
}

pub(crate) fn highlight_hovered_pipe(
    windows: Query<&Window, With<PrimaryWindow>>,
    viewport: Res<Viewport>,
    layout: Res<PlatformLayout>,
    mut pipes: Query<(&Pipe, &mut Sprite)>,
) {
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());

    for (pipe, mut sprite) in &mut pipes {
        let hovered = match (cursor, layout.get(pipe.id)) {
            (Some(cursor), Some(platform)) => {
                cursor.x >= platform.left
                    && cursor.x <= platform.right
                    && cursor.y >= platform.top
                    && cursor.y <= viewport.ground_line
            }
            _ => false,
        };
        let color = if hovered { PIPE_HOVER_COLOR } else { PIPE_COLOR };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}
