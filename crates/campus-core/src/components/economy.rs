//! Economy components: coin wallet and upgrade levels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use campus_logic::upgrades::UpgradeKind;

/// Coin balance. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    coins: u32,
}

impl Wallet {
    pub fn new(coins: u32) -> Self {
        Self { coins }
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn earn(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Deduct `amount` if the balance covers it.
    pub fn spend(&mut self, amount: u32) -> bool {
        match self.coins.checked_sub(amount) {
            Some(rest) => {
                self.coins = rest;
                true
            }
            None => false,
        }
    }
}

/// Purchased level per upgrade, bounded by each ladder's length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    levels: BTreeMap<UpgradeKind, u8>,
}

impl Default for UpgradeLevels {
    fn default() -> Self {
        Self {
            levels: UpgradeKind::ALL.iter().map(|k| (*k, 0)).collect(),
        }
    }
}

impl UpgradeLevels {
    pub fn level(&self, kind: UpgradeKind) -> u8 {
        self.levels.get(&kind).copied().unwrap_or(0)
    }

    pub fn is_maxed(&self, kind: UpgradeKind) -> bool {
        self.level(kind) >= kind.max_level()
    }

    /// Raise a level by one, refusing to pass the ladder length.
    pub(crate) fn increment(&mut self, kind: UpgradeKind) -> Option<u8> {
        if self.is_maxed(kind) {
            return None;
        }
        let level = self.levels.entry(kind).or_insert(0);
        *level += 1;
        Some(*level)
    }

    pub fn iter(&self) -> impl Iterator<Item = (UpgradeKind, u8)> + '_ {
        self.levels.iter().map(|(k, v)| (*k, *v))
    }
}
