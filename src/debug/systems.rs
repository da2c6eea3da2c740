//! Debug domain: hotkeys and the info overlay.

use bevy::prelude::*;

use crate::core::{ControlLock, LockSource};
use crate::debug::{DebugInfoOverlay, DebugState};
use crate::kinematics::{SpriteState, Support};
use crate::movement::Player;
use crate::pipes::PlatformLayout;

/// F3 toggles the overlay, F4 dumps the sprite state.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    sprites: Query<&SpriteState, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "[DEBUG] Info overlay {}",
            if debug_state.show_info { "ON" } else { "OFF" }
        );
    }

    if keyboard.just_pressed(KeyCode::F4) {
        for state in &sprites {
            match serde_json::to_string(&state.snapshot()) {
                Ok(json) => info!("[DEBUG] Sprite state: {}", json),
                Err(e) => warn!("[DEBUG] Could not serialize sprite state: {}", e),
            }
        }
    }
}

pub fn overlay_text(state: &SpriteState, platform_count: usize, lock: &ControlLock) -> String {
    let support = match state.support {
        Support::Ground => "ground".to_string(),
        Support::Platform(id) => format!("platform {}", id.0),
        Support::Airborne => "airborne".to_string(),
    };
    let controls = if lock.is_held_by(LockSource::PipeEntry) {
        "in pipe"
    } else {
        "free"
    };
    format!(
        "Pos: ({:.1}, {:.1})\nVel: ({:.2}, {:.2})\nSupport: {}\nPlatforms: {}\nControls: {}",
        state.position.x,
        state.position.y,
        state.velocity.x,
        state.velocity.y,
        support,
        platform_count,
        controls
    )
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    layout: Res<PlatformLayout>,
    lock: Res<ControlLock>,
    sprites: Query<&SpriteState, With<Player>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    if overlay_query.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some(state), Ok((_, mut text))) = (sprites.iter().next(), overlay_query.single_mut()) {
        **text = overlay_text(state, layout.platforms.len(), &lock);
    }
}
