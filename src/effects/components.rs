//! Effects domain: short-lived decoration entities.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const JUMP_PARTICLE_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
pub const DUST_COLOR: Color = Color::srgba(0.85, 0.8, 0.7, 0.8);
pub const PIPE_BURST_COLOR: Color = Color::srgba(0.3, 0.9, 0.3, 0.8);
pub const COIN_COLOR: Color = Color::srgb(1.0, 0.84, 0.0);
pub const POPUP_COLOR: Color = Color::srgb(1.0, 0.95, 0.4);

pub const FLOATING_COIN_SIZE: f32 = 40.0;

/// Despawns the entity when the timer runs out.
#[derive(Component, Debug)]
pub struct Lifetime {
    pub timer: Timer,
}

impl Lifetime {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(duration_secs, TimerMode::Once),
        }
    }

    pub fn fraction(&self) -> f32 {
        self.timer.fraction()
    }
}

/// Constant world-space motion, in pixels and radians per second.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Drift {
    pub velocity: Vec2,
    pub spin: f32,
}

/// How an effect changes as its lifetime runs out.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum Fade {
    /// Alpha goes to zero.
    Out,
    /// Scale goes from `from` to `to`.
    Scale { from: f32, to: f32 },
    /// Alpha goes to zero while scale goes from `from` to `to`.
    OutScaled { from: f32, to: f32 },
}

impl Fade {
    pub fn alpha(&self, fraction: f32) -> Option<f32> {
        match self {
            Fade::Out | Fade::OutScaled { .. } => Some((1.0 - fraction).clamp(0.0, 1.0)),
            Fade::Scale { .. } => None,
        }
    }

    pub fn scale(&self, fraction: f32) -> Option<f32> {
        match *self {
            Fade::Scale { from, to } | Fade::OutScaled { from, to } => {
                Some(from + (to - from) * fraction.clamp(0.0, 1.0))
            }
            Fade::Out => None,
        }
    }
}

/// A coin drifting down the screen.
#[derive(Component, Debug)]
pub struct FloatingCoin;

/// Randomness for cosmetic effects only.
#[derive(Resource)]
pub struct EffectsRng(pub ChaCha8Rng);

impl EffectsRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Left edge for a new floating coin, kept fully on screen.
    pub fn coin_left(&mut self, viewport_width: f32) -> f32 {
        let max = (viewport_width - FLOATING_COIN_SIZE).max(0.0);
        if max <= 0.0 {
            return 0.0;
        }
        self.0.random_range(0.0..=max)
    }
}

/// Interval between floating coins.
#[derive(Resource, Debug)]
pub struct CoinSpawnTimer(pub Timer);
