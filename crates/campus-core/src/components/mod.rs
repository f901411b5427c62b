//! Component definitions for the campus game state.
//!
//! Components are plain data structs owned by [`GameState`](crate::state::GameState).
//! They guard their own invariants (monotonic flags, bounded levels) but the
//! gameplay rules that combine them live in systems.

mod economy;
mod player;
mod progress;

pub use economy::*;
pub use player::*;
pub use progress::*;
