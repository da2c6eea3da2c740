//! Coins domain: wallet, pickups and super mode.

mod super_mode;
mod wallet;


pub use super_mode::{KONAMI_SEQUENCE, KonamiTracker, SuperMode, SuperModeActivated};
pub use wallet::{CoinCollected, CoinSource, CoinWallet};

use bevy::prelude::*;

use crate::coins::super_mode::{detect_konami_code, tick_super_mode};
use crate::coins::wallet::process_coin_messages;
use crate::core::FrameSet;

pub struct CoinsPlugin;

impl Plugin for CoinsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CoinWallet>()
            .init_resource::<KonamiTracker>()
            .init_resource::<SuperMode>()
            .add_message::<CoinCollected>()
            .add_message::<SuperModeActivated>()
            .add_systems(Update, detect_konami_code.in_set(FrameSet::Input))
            .add_systems(
                Update,
                (process_coin_messages, tick_super_mode).in_set(FrameSet::Present),
            );
    }
}
