//! Astro Dodge - dodge the incoming asteroids for as long as you can
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, movement, collisions, session)
//! - `besttime`: Best survival time persisted to LocalStorage
//! - `renderer`: Canvas 2D painting
//!
//! The simulation has no platform dependencies and runs natively for tests;
//! the wasm entry point in `main.rs` wires browser timers, the keyboard and
//! the canvas to it.

pub mod besttime;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use besttime::{BestTime, format_time};
pub use sim::{GameState, Session};

/// Game configuration constants
pub mod consts {
    /// Player square edge length (px)
    pub const PLAYER_SIZE: f32 = 30.0;
    /// Asteroid diameter (px); collision treats asteroids as squares of this edge
    pub const ASTEROID_SIZE: f32 = 30.0;
    /// Distance the player moves per keypress (px)
    pub const PLAYER_STEP: f32 = 15.0;

    /// Speed given to asteroids spawned before any ramping (px per tick)
    pub const MIN_ASTEROID_SPEED: f32 = 1.0;
    /// Ceiling for the ramped spawn speed (px per tick)
    pub const MAX_ASTEROID_SPEED: f32 = 5.0;

    /// Asteroids in the opening wave of every run
    pub const INITIAL_ASTEROIDS: u32 = 10;

    /// Simulation tick period (nominal 60 Hz)
    pub const TICK_MS: u64 = 16;
    /// Difficulty escalation period
    pub const ESCALATION_MS: u32 = 10_000;
    /// Escalations between spawn-speed bumps
    pub const SPEED_RAMP_EVERY: u32 = 4;
}
