//! Upgrade shop - spend coins to raise upgrade levels.

use serde::{Deserialize, Serialize};

use campus_logic::upgrades::UpgradeKind;

use crate::state::GameState;

/// Why a purchase was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpgradeError {
    /// No upgrade has this key.
    #[error("unknown upgrade: {0}")]
    InvalidUpgrade(String),

    /// Every level of the ladder is already bought.
    #[error("{upgrade} is already at max level")]
    MaxLevel {
        /// Display name of the upgrade.
        upgrade: String,
    },

    /// The next level costs more than the wallet holds.
    #[error("not enough coins: need {required}, have {available}")]
    InsufficientFunds {
        /// Cost of the next level.
        required: u32,
        /// Current coin balance.
        available: u32,
    },
}

/// A completed purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseReceipt {
    pub upgrade: UpgradeKind,
    pub new_level: u8,
    pub cost: u32,
    pub coins_left: u32,
}

/// Buy the next level of the upgrade with map key `key`.
pub fn purchase(state: &mut GameState, key: &str) -> Result<PurchaseReceipt, UpgradeError> {
    let kind =
        UpgradeKind::from_key(key).ok_or_else(|| UpgradeError::InvalidUpgrade(key.to_string()))?;
    purchase_kind(state, kind)
}

pub fn purchase_kind(state: &mut GameState, kind: UpgradeKind) -> Result<PurchaseReceipt, UpgradeError> {
    let level = state.upgrades.level(kind);
    let cost = kind.next_cost(level).ok_or_else(|| UpgradeError::MaxLevel {
        upgrade: kind.name().to_string(),
    })?;

    let available = state.coins();
    if !state.wallet.spend(cost) {
        return Err(UpgradeError::InsufficientFunds {
            required: cost,
            available,
        });
    }
    let new_level = state
        .upgrades
        .increment(kind)
        .ok_or_else(|| UpgradeError::MaxLevel {
            upgrade: kind.name().to_string(),
        })?;

    if kind == UpgradeKind::Speed {
        state.movement.apply_speed_level(new_level);
    }
    log::info!(
        "Upgrade purchased: {} level {} for {} coins",
        kind.key(),
        new_level,
        cost
    );
    Ok(PurchaseReceipt {
        upgrade: kind,
        new_level,
        cost,
        coins_left: state.coins(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rich_state(coins: u32) -> GameState {
        let mut state = GameState::default();
        state.wallet.earn(coins);
        state
    }

    #[test]
    fn test_unknown_key() {
        let mut state = rich_state(100);
        assert_eq!(
            purchase(&mut state, "jetpack"),
            Err(UpgradeError::InvalidUpgrade("jetpack".into()))
        );
        assert_eq!(state.coins(), 100);
    }

    #[test]
    fn test_speed_ladder_then_max() {
        let mut state = rich_state(500);
        let costs = [10, 20, 35, 50, 75];
        let mut balance = 500;
        for (i, cost) in costs.iter().enumerate() {
            let receipt = purchase(&mut state, "speed").unwrap();
            balance -= cost;
            assert_eq!(receipt.cost, *cost);
            assert_eq!(receipt.new_level as usize, i + 1);
            assert_eq!(state.coins(), balance);
            assert_eq!(state.movement.speed, 3.0 + (i + 1) as f32);
        }
        let err = purchase(&mut state, "speed").unwrap_err();
        assert!(matches!(err, UpgradeError::MaxLevel { .. }));
        assert_eq!(state.coins(), balance);
        assert_eq!(err.to_string(), "Running Shoes is already at max level");
    }

    #[test]
    fn test_insufficient_funds() {
        let mut state = rich_state(14);
        assert_eq!(
            purchase(&mut state, "energy"),
            Err(UpgradeError::InsufficientFunds {
                required: 15,
                available: 14
            })
        );
        assert_eq!(state.upgrades.level(UpgradeKind::Energy), 0);
        assert_eq!(state.coins(), 14);
    }

    #[test]
    fn test_magnet_radius_grows() {
        let mut state = rich_state(10);
        assert_eq!(state.coin_pickup_radius(), 24.0);
        purchase(&mut state, "magnet").unwrap();
        assert_eq!(state.coin_pickup_radius(), 32.0);
    }
}
