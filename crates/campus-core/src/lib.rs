//! Campus Core - campus life progression engine
//!
//! Drives a single student through their first days on campus: stats that
//! drift every frame, a four-period day cycle, an academic quest chain,
//! achievements, daily challenges, a coin shop, and random events.
//!
//! # Architecture
//!
//! - **State**: one [`GameState`](state::GameState) aggregate, built from a
//!   [`GameConfig`](config::GameConfig) and owned by the engine
//! - **Components**: plain data grouped by concern (progress, economy, player)
//! - **Systems**: functions that read and update the state
//! - **Notifications**: toasts and rebuild requests queued for the caller
//!
//! Rules that need no state (formulas, catalogs, cost ladders) live in
//! `campus-logic`.
//!
//! # Example
//!
//! ```rust,no_run
//! use campus_core::prelude::*;
//!
//! let mut engine = CampusEngine::with_seed(42);
//! engine.choose_school(SchoolId::Ece);
//!
//! // Run the game
//! loop {
//!     let report = engine.tick(); // once per frame
//!     for note in engine.drain_notifications() {
//!         println!("{:?}", note);
//!     }
//!     if report.day_changed {
//!         break;
//!     }
//! }
//! ```

pub mod components;
pub mod config;
pub mod engine;
pub mod notify;
pub mod state;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::{ConfigError, GameConfig};
    pub use crate::engine::{CampusEngine, TickReport};
    pub use crate::notify::Notification;
    pub use crate::state::GameState;
    pub use crate::systems::{
        AchievementId, ActionOutcome, ChallengeId, EventKind, PurchaseReceipt, UpgradeError,
    };
    pub use campus_logic::catalog::{DepartmentId, SchoolId};
    pub use campus_logic::progression::{Flag, Quest, Rank};
    pub use campus_logic::stats::StatKind;
    pub use campus_logic::time::TimeOfDay;
    pub use campus_logic::upgrades::UpgradeKind;
}
