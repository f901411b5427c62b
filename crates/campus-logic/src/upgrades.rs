//! Upgrade catalog - cost ladders and the derived effect values.
//!
//! Each upgrade has an ordered ladder of coin costs; the ladder length is the
//! maximum level. Level `n` is bought for `ladder[n]` coins.

use serde::{Deserialize, Serialize};

use crate::constants::{energy, movement, stat_bounds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// Walking speed, applied immediately on purchase.
    Speed,
    /// Raises the energy ceiling below which repeat meals still help.
    Energy,
    /// Coin pickup radius.
    Magnet,
    /// Slows passive stress gain.
    StressResistance,
    /// Multiplies knowledge gains.
    KnowledgeBoost,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 5] = [
        UpgradeKind::Speed,
        UpgradeKind::Energy,
        UpgradeKind::Magnet,
        UpgradeKind::StressResistance,
        UpgradeKind::KnowledgeBoost,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "speed" => Some(UpgradeKind::Speed),
            "energy" => Some(UpgradeKind::Energy),
            "magnet" => Some(UpgradeKind::Magnet),
            "stress_resistance" => Some(UpgradeKind::StressResistance),
            "knowledge_boost" => Some(UpgradeKind::KnowledgeBoost),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            UpgradeKind::Speed => "speed",
            UpgradeKind::Energy => "energy",
            UpgradeKind::Magnet => "magnet",
            UpgradeKind::StressResistance => "stress_resistance",
            UpgradeKind::KnowledgeBoost => "knowledge_boost",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::Speed => "Running Shoes",
            UpgradeKind::Energy => "Energy Drink Subscription",
            UpgradeKind::Magnet => "Coin Magnet",
            UpgradeKind::StressResistance => "Meditation App",
            UpgradeKind::KnowledgeBoost => "Study Guide",
        }
    }

    /// Coin cost of each successive level.
    pub fn cost_ladder(&self) -> &'static [u32] {
        match self {
            UpgradeKind::Speed => &[10, 20, 35, 50, 75],
            UpgradeKind::Energy => &[15, 30, 60],
            UpgradeKind::Magnet => &[10, 25, 50],
            UpgradeKind::StressResistance => &[20, 40, 80],
            UpgradeKind::KnowledgeBoost => &[25, 50, 100],
        }
    }

    pub fn max_level(&self) -> u8 {
        // ladders are at most five entries long
        self.cost_ladder().len() as u8
    }

    /// Cost of the level after `current_level`, or `None` when maxed.
    pub fn next_cost(&self, current_level: u8) -> Option<u32> {
        self.cost_ladder().get(usize::from(current_level)).copied()
    }
}

/// Movement speed at a given speed-upgrade level: `base + level`.
pub fn movement_speed(base: f32, level: u8) -> f32 {
    base + f32::from(level)
}

/// Coin pickup radius for the magnet level, read by collision code.
pub fn coin_pickup_radius(level: u8) -> f32 {
    movement::BASE_PICKUP_RADIUS + movement::PICKUP_RADIUS_PER_LEVEL * f32::from(level)
}

/// Energy ceiling for the energy-upgrade level: repeat meals restore
/// energy only while it is below this value. Never above the stat maximum.
pub fn energy_ceiling(level: u8) -> f64 {
    (energy::REPEAT_MEAL_BELOW + energy::CEILING_PER_LEVEL * f64::from(level))
        .min(stat_bounds::MAX)
}
