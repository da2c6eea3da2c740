//! Movement domain: sprite spawn.

use bevy::prelude::*;

use crate::kinematics::{KinematicsTuning, SpriteState};
use crate::movement::{PLAYER_COLOR, Player};

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<KinematicsTuning>) {
    let state = SpriteState::default();
    info!(
        "Spawning sprite at ({}, {}), jump apex {:.0}px",
        state.position.x,
        state.position.y,
        tuning.jump_apex()
    );

    commands.spawn((
        Player,
        state,
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(Vec2::new(tuning.sprite_width(), tuning.sprite_height())),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
    ));
}
