//! Rewards domain: persistent coin wallet and per-level loot.

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

/// Resource tracking the player's banked coins across levels
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct PlayerWallet {
    pub coins: u32,
}

impl PlayerWallet {
    pub fn add(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    pub fn spend(&mut self, amount: u32) -> bool {
        if self.coins >= amount {
            self.coins -= amount;
            true
        } else {
            false
        }
    }
}

/// Coins and diamonds picked up in the current level attempt. Only banked
/// into the wallet when the level is finished.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct RunLoot {
    pub pending_coins: u32,
    pub diamonds: u32,
}

impl RunLoot {
    pub fn collect_diamond(&mut self, coins: u32) {
        self.pending_coins = self.pending_coins.saturating_add(coins);
        self.diamonds += 1;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Move pending coins into the wallet. Returns the amount banked.
    pub fn bank_into(&mut self, wallet: &mut PlayerWallet) -> u32 {
        let banked = self.pending_coins;
        wallet.add(banked);
        self.pending_coins = 0;
        banked
    }
}

/// Event fired when a diamond is picked up
#[derive(Debug)]
pub struct DiamondCollectedEvent {
    pub coins: u32,
}

impl Message for DiamondCollectedEvent {}

/// Process diamond pickups into the current run's loot
pub(crate) fn process_diamond_events(
    mut diamond_events: MessageReader<DiamondCollectedEvent>,
    mut loot: ResMut<RunLoot>,
) {
    for event in diamond_events.read() {
        loot.collect_diamond(event.coins);
        info!(
            "Diamond collected (+{} coins pending). Diamonds this run: {}",
            event.coins, loot.diamonds
        );
    }
}
