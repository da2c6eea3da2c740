//! Effects domain: particles, popups and floating coins.

mod animate;
mod components;
mod floating;
mod spawn;


pub use animate::super_mode_color;
pub use components::{
    COIN_COLOR, CoinSpawnTimer, DUST_COLOR, Drift, EffectsRng, FLOATING_COIN_SIZE, Fade,
    FloatingCoin, JUMP_PARTICLE_COLOR, Lifetime, PIPE_BURST_COLOR, POPUP_COLOR,
};
pub use floating::coin_hit;
pub use spawn::{EXIT_FADE, SUCTION_FADE};

use bevy::prelude::*;

use crate::content::SceneConfig;
use crate::core::FrameSet;
use crate::effects::animate::{animate_effects, tint_super_mode};
use crate::effects::floating::{collect_floating_coins, spawn_floating_coins};
use crate::effects::spawn::{
    spawn_coin_popups, spawn_jump_particles, spawn_landing_dust, spawn_pipe_exit,
    spawn_pipe_suction, spawn_super_mode_banner,
};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        let scene = app
            .world()
            .get_resource::<SceneConfig>()
            .cloned()
            .unwrap_or_default();
        info!(
            "Effects seed: {}",
            scene
                .effects_seed
                .map_or_else(|| "random".to_string(), |seed| seed.to_string())
        );

        app.insert_resource(EffectsRng::from_seed(scene.effects_seed))
            .insert_resource(CoinSpawnTimer(Timer::from_seconds(
                scene.coin_spawn_interval,
                TimerMode::Repeating,
            )))
            .add_systems(Update, collect_floating_coins.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (
                    spawn_jump_particles,
                    spawn_landing_dust,
                    spawn_coin_popups,
                    spawn_pipe_suction,
                    spawn_pipe_exit,
                    spawn_super_mode_banner,
                    spawn_floating_coins,
                    animate_effects,
                    tint_super_mode,
                )
                    .in_set(FrameSet::Present),
            );
    }
}
