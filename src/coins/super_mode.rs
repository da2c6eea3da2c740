//! Coins domain: the secret key sequence and the super mode it unlocks.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;
use std::collections::VecDeque;

use crate::coins::{CoinCollected, CoinSource};
use crate::content::SceneConfig;
use crate::kinematics::Viewport;

pub const KONAMI_SEQUENCE: [KeyCode; 10] = [
    KeyCode::ArrowUp,
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::ArrowDown,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::KeyB,
    KeyCode::KeyA,
];

/// Rolling window of the most recent key presses.
#[derive(Resource, Debug, Default)]
pub struct KonamiTracker {
    recent: VecDeque<KeyCode>,
}

impl KonamiTracker {
    /// Record a press. Returns true when it completes the sequence, which
    /// also clears the window.
    pub fn push(&mut self, key: KeyCode) -> bool {
        self.recent.push_back(key);
        if self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }

        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().eq(KONAMI_SEQUENCE.iter());
        if matched {
            self.recent.clear();
        }
        matched
    }
}

/// Seconds of super mode left. Zero when inactive.
#[derive(Resource, Debug, Default)]
pub struct SuperMode {
    pub remaining: f32,
}

impl SuperMode {
    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn activate(&mut self, duration: f32) {
        self.remaining = duration;
    }

    /// Count down. Returns true on the step that ends super mode.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_active() {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        !self.is_active()
    }
}

/// Super mode just started.
#[derive(Debug, Clone, Copy)]
pub struct SuperModeActivated;

impl Message for SuperModeActivated {}

pub(crate) fn detect_konami_code(
    keyboard: Res<ButtonInput<KeyCode>>,
    scene: Res<SceneConfig>,
    viewport: Res<Viewport>,
    mut tracker: ResMut<KonamiTracker>,
    mut super_mode: ResMut<SuperMode>,
    mut activated: MessageWriter<SuperModeActivated>,
    mut coins: MessageWriter<CoinCollected>,
) {
    for key in keyboard.get_just_pressed() {
        if !tracker.push(*key) {
            continue;
        }

        info!("Super mode activated for {}s", scene.super_mode_duration);
        super_mode.activate(scene.super_mode_duration);
        activated.write(SuperModeActivated);
        coins.write(CoinCollected {
            amount: scene.super_mode_bonus,
            source: CoinSource::SuperMode,
            at: Vec2::new(viewport.width * 0.5, viewport.height * 0.5),
        });
    }
}

pub(crate) fn tick_super_mode(time: Res<Time>, mut super_mode: ResMut<SuperMode>) {
    if !super_mode.is_active() {
        return;
    }
    if super_mode.tick(time.delta_secs()) {
        info!("Super mode ended");
    }
}
