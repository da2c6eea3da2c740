//! Movement domain: the per-frame kinematics tick.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::kinematics::{KinematicsTuning, SpriteState, Viewport, tick};
use crate::movement::{
    MovementInput, Player, SpriteJumped, SpriteLanded, SpriteLeftPlatform, feet_position,
};
use crate::pipes::PlatformLayout;

/// Advance the sprite by exactly one tick and publish support transitions.
pub(crate) fn advance_sprite(
    mut input: ResMut<MovementInput>,
    tuning: Res<KinematicsTuning>,
    viewport: Res<Viewport>,
    layout: Res<PlatformLayout>,
    mut query: Query<&mut SpriteState, With<Player>>,
    mut jumped: MessageWriter<SpriteJumped>,
    mut landed: MessageWriter<SpriteLanded>,
    mut left: MessageWriter<SpriteLeftPlatform>,
) {
    let tick_input = input.take();

    for mut state in &mut query {
        let outcome = tick(
            &mut state,
            &layout.platforms,
            tick_input,
            &viewport,
            &tuning,
        );

        let at = feet_position(&state, &viewport, &tuning);

        if outcome.jumped {
            debug!("Jump from ({:.0}, {:.0})", state.position.x, state.position.y);
            jumped.write(SpriteJumped { at });
        }
        if let Some(platform) = outcome.left_platform {
            debug!("Left platform {:?}", platform);
            left.write(SpriteLeftPlatform { platform });
        }
        if let Some(surface) = outcome.landed {
            debug!("Landed on {:?} at x={:.0}", surface, state.position.x);
            landed.write(SpriteLanded { surface, at });
        }
    }
}
