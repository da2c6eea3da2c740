//! Effects domain: spawning effects in reaction to gameplay messages.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::coins::{CoinCollected, SuperModeActivated};
use crate::effects::{
    DUST_COLOR, Drift, Fade, JUMP_PARTICLE_COLOR, Lifetime, PIPE_BURST_COLOR, POPUP_COLOR,
};
use crate::kinematics::Viewport;
use crate::movement::{SpriteJumped, SpriteLanded};
use crate::pipes::{PipeEntered, PipeEntryStarted};

const EFFECT_Z: f32 = 20.0;

/// Pipe suction swells while it fades.
pub const SUCTION_FADE: Fade = Fade::OutScaled { from: 1.0, to: 2.0 };
/// Pipe exit pops out from half size.
pub const EXIT_FADE: Fade = Fade::OutScaled { from: 0.5, to: 1.5 };

fn spawn_burst(
    commands: &mut Commands,
    position: Vec2,
    size: Vec2,
    color: Color,
    drift: Drift,
    fade: Fade,
    duration: f32,
) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(EFFECT_Z)),
        drift,
        fade,
        Lifetime::new(duration),
    ));
}

/// Gold spark rising from the feet of a jump.
pub(crate) fn spawn_jump_particles(
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut jumps: MessageReader<SpriteJumped>,
) {
    for jump in jumps.read() {
        spawn_burst(
            &mut commands,
            viewport.to_world(jump.at),
            Vec2::splat(10.0),
            JUMP_PARTICLE_COLOR,
            Drift {
                velocity: Vec2::new(0.0, 100.0),
                spin: 0.0,
            },
            Fade::Scale { from: 1.0, to: 0.0 },
            1.0,
        );
    }
}

pub(crate) fn spawn_landing_dust(
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut landings: MessageReader<SpriteLanded>,
) {
    for landing in landings.read() {
        let at = viewport.to_world(landing.at);
        for direction in [-1.0, 1.0] {
            spawn_burst(
                &mut commands,
                at + Vec2::new(direction * 12.0, 4.0),
                Vec2::new(14.0, 8.0),
                DUST_COLOR,
                Drift {
                    velocity: Vec2::new(direction * 60.0, 20.0),
                    spin: 0.0,
                },
                Fade::OutScaled { from: 1.0, to: 1.8 },
                0.4,
            );
        }
    }
}

/// "+N" text floating up from a coin pickup.
pub(crate) fn spawn_coin_popups(
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut pickups: MessageReader<CoinCollected>,
) {
    for pickup in pickups.read() {
        commands.spawn((
            Text2d::new(format!("+{}", pickup.amount)),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(POPUP_COLOR),
            Transform::from_translation(viewport.to_world(pickup.at).extend(EFFECT_Z + 1.0)),
            Drift {
                velocity: Vec2::new(0.0, 50.0),
                spin: 0.0,
            },
            Fade::Out,
            Lifetime::new(1.0),
        ));
    }
}

/// Green burst pulled into the pipe mouth.
pub(crate) fn spawn_pipe_suction(
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut started: MessageReader<PipeEntryStarted>,
) {
    for entry in started.read() {
        spawn_burst(
            &mut commands,
            viewport.to_world(entry.at),
            Vec2::new(80.0, 40.0),
            PIPE_BURST_COLOR,
            Drift::default(),
            SUCTION_FADE,
            1.0,
        );
    }
}

pub(crate) fn spawn_pipe_exit(
    mut commands: Commands,
    viewport: Res<Viewport>,
    mut entered: MessageReader<PipeEntered>,
) {
    for exit in entered.read() {
        spawn_burst(
            &mut commands,
            viewport.to_world(exit.at),
            Vec2::new(60.0, 30.0),
            PIPE_BURST_COLOR,
            Drift {
                velocity: Vec2::new(0.0, 40.0),
                spin: 0.0,
            },
            EXIT_FADE,
            0.5,
        );
    }
}

pub(crate) fn spawn_super_mode_banner(
    mut commands: Commands,
    mut activated: MessageReader<SuperModeActivated>,
) {
    for _ in activated.read() {
        commands.spawn((
            Text2d::new("SUPER MODE ACTIVATED!"),
            TextFont {
                font_size: 36.0,
                ..default()
            },
            TextColor(POPUP_COLOR),
            Transform::from_xyz(0.0, 120.0, EFFECT_Z + 2.0),
            Drift::default(),
            Fade::Out,
            Lifetime::new(2.0),
        ));
    }
}
