//! Systems - logic that operates on the game state

mod achievements;
mod activities;
mod challenges;
mod decay;
mod events;
mod quests;
mod upgrades;

pub use achievements::*;
pub use activities::*;
pub use challenges::*;
pub use decay::*;
pub use events::*;
pub use quests::*;
pub use upgrades::*;
