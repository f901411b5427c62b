//! Player-side components: inventory and movement parameters.

use serde::{Deserialize, Serialize};

use campus_logic::upgrades;

/// Items collected so far, in pickup order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<String>,
}

impl Inventory {
    /// Add an item. Returns `false` if it was already held.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Walking parameters read by the (external) movement code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub base_speed: f32,
    pub speed: f32,
}

impl Movement {
    pub fn new(base_speed: f32) -> Self {
        Self {
            base_speed,
            speed: base_speed,
        }
    }

    /// Recompute speed for a speed-upgrade level.
    pub fn apply_speed_level(&mut self, level: u8) {
        self.speed = upgrades::movement_speed(self.base_speed, level);
    }
}
