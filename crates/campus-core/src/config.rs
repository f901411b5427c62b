//! Game configuration - tunables for a new game.
//!
//! [`GameConfig::default`] reproduces the standard rules. A JSON document
//! may override any subset of fields; missing fields keep their defaults.
//!
//! ```
//! use campus_core::config::GameConfig;
//!
//! let config = GameConfig::from_json_str(r#"{ "starting_coins": 25, "seed": 7 }"#).unwrap();
//! assert_eq!(config.starting_coins, 25);
//! assert_eq!(config.ticks_per_period, 600);
//! ```

use serde::{Deserialize, Serialize};

use campus_logic::constants::{events, movement, timing};
use campus_logic::stats::PlayerStats;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of its allowed range.
    #[error("invalid config: {reason}")]
    Invalid {
        /// What is wrong with the configuration.
        reason: String,
    },
}

/// Stat values a new game starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingStats {
    pub energy: f64,
    pub knowledge: f64,
    pub stress: f64,
    pub reputation: f64,
    pub discipline: f64,
}

impl Default for StartingStats {
    fn default() -> Self {
        let stats = PlayerStats::default();
        Self {
            energy: stats.energy(),
            knowledge: stats.knowledge(),
            stress: stats.stress(),
            reputation: stats.reputation(),
            discipline: stats.discipline(),
        }
    }
}

impl StartingStats {
    pub fn to_stats(&self) -> PlayerStats {
        PlayerStats::new(
            self.energy,
            self.knowledge,
            self.stress,
            self.reputation,
            self.discipline,
        )
    }

    fn values(&self) -> [(&'static str, f64); 5] {
        [
            ("energy", self.energy),
            ("knowledge", self.knowledge),
            ("stress", self.stress),
            ("reputation", self.reputation),
            ("discipline", self.discipline),
        ]
    }
}

/// Tunables for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Ticks in one time-of-day period.
    pub ticks_per_period: u32,
    /// Per-tick chance of a random event once the cooldown has elapsed.
    pub event_chance: f64,
    /// Ticks to wait after a random event.
    pub event_cooldown_ticks: u32,
    pub starting_stats: StartingStats,
    pub starting_coins: u32,
    pub base_speed: f32,
    /// Seed for the event RNG; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ticks_per_period: timing::TICKS_PER_PERIOD,
            event_chance: events::TRIGGER_CHANCE,
            event_cooldown_ticks: events::COOLDOWN_TICKS,
            starting_stats: StartingStats::default(),
            starting_coins: 0,
            base_speed: movement::BASE_SPEED,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is within its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_period == 0 {
            return Err(invalid("ticks_per_period must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.event_chance) {
            return Err(invalid(format!(
                "event_chance must be within [0, 1], got {}",
                self.event_chance
            )));
        }
        for (name, value) in self.starting_stats.values() {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid(format!(
                    "starting {} must be within [0, 100], got {}",
                    name, value
                )));
            }
        }
        if !self.base_speed.is_finite() || self.base_speed < 0.0 {
            return Err(invalid("base_speed must be a non-negative number"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    let reason = reason.into();
    log::warn!("Rejected game config: {}", reason);
    ConfigError::Invalid { reason }
}
