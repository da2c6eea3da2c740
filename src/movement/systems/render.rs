//! Movement domain: state to transform.

use bevy::prelude::*;

use crate::kinematics::{KinematicsTuning, SpriteState, Viewport};
use crate::movement::Player;

pub(crate) fn sync_sprite_transform(
    viewport: Res<Viewport>,
    tuning: Res<KinematicsTuning>,
    mut query: Query<(&SpriteState, &mut Transform), With<Player>>,
) {
    let size = Vec2::new(tuning.sprite_width(), tuning.sprite_height());

    for (state, mut transform) in &mut query {
        let center = viewport.rect_center_world(
            state.position.x,
            state.bottom(viewport.ground_line),
            size,
        );
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}
