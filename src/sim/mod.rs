//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Tick-derived time, never wall clock
//! - No rendering or platform dependencies

pub mod collision;
pub mod session;
pub mod spawn;
pub mod state;

pub use collision::{player_hit, rects_overlap};
pub use session::{Session, TickOutcome};
pub use spawn::spawn_wave;
pub use state::{Asteroid, Bounds, Direction, GameState, Player};
