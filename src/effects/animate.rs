//! Effects domain: per-frame motion, fading and cleanup.

use bevy::prelude::*;

use crate::coins::SuperMode;
use crate::effects::{Drift, Fade, Lifetime};
use crate::movement::{PLAYER_COLOR, Player};

pub(crate) fn animate_effects(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut Lifetime,
        &mut Transform,
        Option<&Drift>,
        Option<&Fade>,
        Option<&mut Sprite>,
        Option<&mut TextColor>,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime, mut transform, drift, fade, sprite, text_color) in &mut query {
        lifetime.timer.tick(time.delta());
        if lifetime.timer.just_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        if let Some(drift) = drift {
            transform.translation += (drift.velocity * dt).extend(0.0);
            transform.rotate_z(drift.spin * dt);
        }

        let Some(fade) = fade else {
            continue;
        };
        let fraction = lifetime.fraction();
        if let Some(scale) = fade.scale(fraction) {
            transform.scale = Vec3::new(scale, scale, 1.0);
        }
        if let Some(alpha) = fade.alpha(fraction) {
            if let Some(mut sprite) = sprite {
                sprite.color.set_alpha(alpha);
            }
            if let Some(mut text_color) = text_color {
                text_color.0.set_alpha(alpha);
            }
        }
    }
}

/// Hue cycling through the rainbow while super mode runs.
pub fn super_mode_color(elapsed_secs: f32) -> Color {
    Color::hsl((elapsed_secs * 360.0).rem_euclid(360.0), 0.9, 0.55)
}

pub(crate) fn tint_super_mode(
    time: Res<Time>,
    super_mode: Res<SuperMode>,
    mut was_active: Local<bool>,
    mut sprites: Query<&mut Sprite, With<Player>>,
) {
    let active = super_mode.is_active();
    if !active && !*was_active {
        return;
    }

    let color = if active {
        super_mode_color(time.elapsed_secs())
    } else {
        PLAYER_COLOR
    };
    for mut sprite in &mut sprites {
        sprite.color = color;
    }
    *was_active = active;
}
