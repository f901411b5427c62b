//! Decay system - passive per-tick stat drift.

use campus_logic::upgrades::UpgradeKind;

use crate::state::GameState;

/// Apply one tick of stat decay, dampened by the stress-resistance upgrade.
pub fn decay_system(state: &mut GameState) {
    let resistance = state.upgrades.level(UpgradeKind::StressResistance);
    state.stats.process_decay(resistance);
}
