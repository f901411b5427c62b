//! Pure game logic for the campus life progression game.
//!
//! This crate contains the data tables and formulas that are independent of
//! any engine state, RNG, or renderer. Functions take plain data and return
//! results, so they are unit-testable in isolation and shared by the engine
//! crate and the headless simtest.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Schools, departments, ordered course lists, library shelves |
//! | [`constants`] | Stat bounds, tick timing, XP rewards, thresholds |
//! | [`progression`] | Quest/flag identifiers, academic stages, XP ranks |
//! | [`stats`] | Clamped player stats, knowledge boost, per-tick decay |
//! | [`time`] | Period/day cycle and building opening hours |
//! | [`upgrades`] | Upgrade cost ladders and derived effect values |

pub mod catalog;
pub mod constants;
pub mod progression;
pub mod stats;
pub mod time;
pub mod upgrades;
