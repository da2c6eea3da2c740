//! Coins domain: currency tracking and pickup messages.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::content::SceneConfig;

/// Coins collected so far.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CoinWallet {
    pub coins: u32,
}

// Inherent (not `Default`) so it doesn't collide with bevy's blanket
// `impl<T: Default> FromWorld for T` and the explicit `FromWorld` below.
impl CoinWallet {
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self {
            coins: SceneConfig::default().starting_coins,
        }
    }
}

impl FromWorld for CoinWallet {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<SceneConfig>() {
            Some(scene) => Self {
                coins: scene.starting_coins,
            },
            None => Self::default(),
        }
    }
}

impl CoinWallet {
    pub fn add(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }
}

/// Where a pickup came from, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSource {
    SpriteClick,
    FloatingCoin,
    SuperMode,
}

/// Message fired when coins are picked up
#[derive(Debug, Clone)]
pub struct CoinCollected {
    pub amount: u32,
    pub source: CoinSource,
    /// Screen position for the pickup popup.
    pub at: Vec2,
}

impl Message for CoinCollected {}

/// Process pickup messages and update the wallet
pub(crate) fn process_coin_messages(
    mut pickups: MessageReader<CoinCollected>,
    mut wallet: ResMut<CoinWallet>,
) {
    for pickup in pickups.read() {
        wallet.add(pickup.amount);
        info!(
            "Collected {} coins from {:?}. Total: {}",
            pickup.amount, pickup.source, wallet.coins
        );
    }
}
