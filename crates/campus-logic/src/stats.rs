//! Player stat model - five clamped stats with decay and boost math.
//!
//! Every stat lives in `[0, 100]` and is clamped after each mutation, so no
//! sequence of calls can leave a stat outside that range.
//!
//! ```
//! use campus_logic::stats::{PlayerStats, StatKind};
//!
//! let mut stats = PlayerStats::default();
//! stats.add(StatKind::Stress, 500.0);
//! assert_eq!(stats.get(StatKind::Stress), 100.0);
//! ```
//!
//! # Decay
//!
//! [`PlayerStats::process_decay`] runs once per tick. Stress creeps up,
//! dampened by discipline and the stress-resistance upgrade. Low discipline
//! also erodes knowledge and reputation.

use serde::{Deserialize, Serialize};

use crate::constants::{decay, stat_bounds};

/// The five player stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Energy,
    Knowledge,
    Stress,
    Reputation,
    Discipline,
}

impl StatKind {
    /// All stats in display order.
    pub const ALL: [StatKind; 5] = [
        StatKind::Energy,
        StatKind::Knowledge,
        StatKind::Stress,
        StatKind::Reputation,
        StatKind::Discipline,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Energy => "Energy",
            StatKind::Knowledge => "Knowledge",
            StatKind::Stress => "Stress",
            StatKind::Reputation => "Reputation",
            StatKind::Discipline => "Discipline",
        }
    }
}

/// Current stat values, each in `[0, 100]`.
///
/// Deserialized values go through [`PlayerStats::new`] and are clamped too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StatsRecord")]
pub struct PlayerStats {
    energy: f64,
    knowledge: f64,
    stress: f64,
    reputation: f64,
    discipline: f64,
}

#[derive(Deserialize)]
struct StatsRecord {
    energy: f64,
    knowledge: f64,
    stress: f64,
    reputation: f64,
    discipline: f64,
}

impl From<StatsRecord> for PlayerStats {
    fn from(r: StatsRecord) -> Self {
        Self::new(r.energy, r.knowledge, r.stress, r.reputation, r.discipline)
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(80.0, 10.0, 20.0, 10.0, 50.0)
    }
}

impl PlayerStats {
    /// Create a stat block; out-of-range inputs are clamped.
    pub fn new(energy: f64, knowledge: f64, stress: f64, reputation: f64, discipline: f64) -> Self {
        Self {
            energy: clamp_stat(energy),
            knowledge: clamp_stat(knowledge),
            stress: clamp_stat(stress),
            reputation: clamp_stat(reputation),
            discipline: clamp_stat(discipline),
        }
    }

    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Energy => self.energy,
            StatKind::Knowledge => self.knowledge,
            StatKind::Stress => self.stress,
            StatKind::Reputation => self.reputation,
            StatKind::Discipline => self.discipline,
        }
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn knowledge(&self) -> f64 {
        self.knowledge
    }

    pub fn stress(&self) -> f64 {
        self.stress
    }

    pub fn reputation(&self) -> f64 {
        self.reputation
    }

    pub fn discipline(&self) -> f64 {
        self.discipline
    }

    fn slot(&mut self, kind: StatKind) -> &mut f64 {
        match kind {
            StatKind::Energy => &mut self.energy,
            StatKind::Knowledge => &mut self.knowledge,
            StatKind::Stress => &mut self.stress,
            StatKind::Reputation => &mut self.reputation,
            StatKind::Discipline => &mut self.discipline,
        }
    }

    /// Set a stat, clamped to `[0, 100]`.
    pub fn set(&mut self, kind: StatKind, value: f64) {
        *self.slot(kind) = clamp_stat(value);
    }

    /// Add `delta` (may be negative) to a stat, then clamp.
    pub fn add(&mut self, kind: StatKind, delta: f64) {
        let slot = self.slot(kind);
        *slot = clamp_stat(*slot + delta);
    }

    /// Add knowledge scaled by the knowledge-boost upgrade.
    ///
    /// The delta is multiplied by `1 + 0.2 * boost_level` and truncated to an
    /// integer before it is applied, so small gains lose their fractional
    /// part on every call. Returns the boosted delta that was added (before
    /// clamping).
    pub fn add_knowledge(&mut self, delta: i32, boost_level: u8) -> i32 {
        let boosted = boosted_knowledge(delta, boost_level);
        self.add(StatKind::Knowledge, f64::from(boosted));
        boosted
    }

    /// Dampening applied to decay: disciplined students decay slower.
    ///
    /// `max(0.3, 1 - discipline / 150)`
    pub fn discipline_factor(&self) -> f64 {
        (1.0 - self.discipline / decay::DISCIPLINE_SCALE).max(decay::MIN_DISCIPLINE_FACTOR)
    }

    /// Apply one tick of passive stat decay.
    pub fn process_decay(&mut self, stress_resistance_level: u8) {
        let factor = self.discipline_factor();

        let resistance =
            (1.0 - f64::from(stress_resistance_level) * decay::RESISTANCE_PER_LEVEL).max(0.0);
        let mut stress_gain = decay::STRESS_PER_TICK * factor * resistance;
        if self.stress > decay::HIGH_STRESS {
            stress_gain *= decay::HIGH_STRESS_MULTIPLIER;
        }
        self.add(StatKind::Stress, stress_gain);

        if self.discipline < decay::KNOWLEDGE_DECAY_DISCIPLINE {
            self.add(StatKind::Knowledge, -decay::KNOWLEDGE_DECAY_RATE * (1.0 - factor));
        }
        if self.discipline < decay::REPUTATION_DECAY_DISCIPLINE {
            self.add(StatKind::Reputation, -decay::REPUTATION_DECAY_RATE * (1.0 - factor));
        }
    }
}

/// Knowledge delta after the boost multiplier, truncated toward zero.
///
/// `1 + 0.2 * level` is evaluated as `(5 + level) / 5` in integer arithmetic
/// so the result is exact: `boosted_knowledge(10, 2) == 14`.
pub fn boosted_knowledge(delta: i32, boost_level: u8) -> i32 {
    delta.saturating_mul(5 + i32::from(boost_level)) / 5
}

fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return stat_bounds::MIN;
    }
    value.clamp(stat_bounds::MIN, stat_bounds::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_range(stats: &PlayerStats) -> bool {
        StatKind::ALL
            .iter()
            .all(|k| (0.0..=100.0).contains(&stats.get(*k)))
    }

    #[test]
    fn test_set_clamps() {
        let mut stats = PlayerStats::default();
        stats.set(StatKind::Energy, 140.0);
        assert_eq!(stats.energy(), 100.0);
        stats.set(StatKind::Energy, -3.0);
        assert_eq!(stats.energy(), 0.0);
    }

    #[test]
    fn test_add_clamps_every_stat() {
        let mut stats = PlayerStats::default();
        for kind in StatKind::ALL {
            stats.add(kind, 1000.0);
            assert!(in_range(&stats));
            stats.add(kind, -5000.0);
            assert!(in_range(&stats));
            assert_eq!(stats.get(kind), 0.0);
        }
    }

    #[test]
    fn test_new_clamps_inputs() {
        let stats = PlayerStats::new(120.0, -1.0, 50.0, f64::NAN, 101.0);
        assert_eq!(stats.energy(), 100.0);
        assert_eq!(stats.knowledge(), 0.0);
        assert_eq!(stats.reputation(), 0.0);
        assert_eq!(stats.discipline(), 100.0);
    }

    #[test]
    fn test_knowledge_boost_level_two() {
        let mut stats = PlayerStats::new(80.0, 0.0, 0.0, 0.0, 50.0);
        let added = stats.add_knowledge(10, 2);
        assert_eq!(added, 14);
        assert_eq!(stats.knowledge(), 14.0);
    }

    #[test]
    fn test_knowledge_boost_truncates_small_gains() {
        // 1 * 1.2 = 1.2 -> 1, the fraction is lost every call
        let mut stats = PlayerStats::new(80.0, 0.0, 0.0, 0.0, 50.0);
        for _ in 0..5 {
            stats.add_knowledge(1, 1);
        }
        assert_eq!(stats.knowledge(), 5.0);
    }

    #[test]
    fn test_knowledge_boost_negative_and_clamped() {
        assert_eq!(boosted_knowledge(-10, 1), -12);
        let mut stats = PlayerStats::new(80.0, 95.0, 0.0, 0.0, 50.0);
        stats.add_knowledge(10, 3);
        assert_eq!(stats.knowledge(), 100.0);
    }

    #[test]
    fn test_discipline_factor_floor() {
        let stats = PlayerStats::new(80.0, 10.0, 20.0, 10.0, 100.0);
        assert!((stats.discipline_factor() - 0.3334).abs() < 0.001);
        let stats = PlayerStats::new(80.0, 10.0, 20.0, 10.0, 0.0);
        assert_eq!(stats.discipline_factor(), 1.0);
    }

    #[test]
    fn test_decay_stress_growth() {
        // discipline 75 -> factor 0.5 -> +0.25 stress
        let mut stats = PlayerStats::new(80.0, 10.0, 20.0, 10.0, 75.0);
        stats.process_decay(0);
        assert!((stats.stress() - 20.25).abs() < 1e-9);
    }

    #[test]
    fn test_decay_high_stress_compounds() {
        let mut stats = PlayerStats::new(80.0, 10.0, 80.0, 10.0, 75.0);
        stats.process_decay(0);
        assert!((stats.stress() - 80.375).abs() < 1e-9);
    }

    #[test]
    fn test_decay_stress_resistance() {
        // level 2 removes 30% of the gain
        let mut stats = PlayerStats::new(80.0, 10.0, 20.0, 10.0, 75.0);
        stats.process_decay(2);
        assert!((stats.stress() - 20.175).abs() < 1e-9);
    }

    #[test]
    fn test_decay_low_discipline_erodes() {
        // discipline 15 -> factor 0.9
        let mut stats = PlayerStats::new(80.0, 50.0, 20.0, 50.0, 15.0);
        stats.process_decay(0);
        assert!((stats.knowledge() - (50.0 - 0.2 * 0.1)).abs() < 1e-9);
        assert!((stats.reputation() - (50.0 - 0.1 * 0.1)).abs() < 1e-9);
    }

    #[test]
    fn test_decay_mid_discipline_only_reputation() {
        let mut stats = PlayerStats::new(80.0, 50.0, 20.0, 50.0, 35.0);
        stats.process_decay(0);
        assert_eq!(stats.knowledge(), 50.0);
        assert!(stats.reputation() < 50.0);
    }

    #[test]
    fn test_decay_stays_in_range() {
        let mut stats = PlayerStats::new(0.0, 0.0, 99.9, 0.0, 0.0);
        for _ in 0..10_000 {
            stats.process_decay(0);
        }
        assert!(in_range(&stats));
        assert_eq!(stats.stress(), 100.0);
    }

    #[test]
    fn test_deserialize_clamps() {
        let json = r#"{"energy":500.0,"knowledge":-20.0,"stress":40.0,"reputation":101.0,"discipline":50.0}"#;
        let stats: PlayerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.energy(), 100.0);
        assert_eq!(stats.knowledge(), 0.0);
        assert_eq!(stats.stress(), 40.0);
        assert_eq!(stats.reputation(), 100.0);
        assert!(in_range(&stats));
    }
}
