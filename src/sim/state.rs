//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]; there are no
//! module-level globals, so every operation can be tested with injected state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn;
use crate::consts::*;

/// Visible play field, sampled from the display surface at session (re)start
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Top-left corner that centers a square of the given size
    pub fn center_for(&self, size: f32) -> Vec2 {
        Vec2::new(self.width / 2.0 - size / 2.0, self.height / 2.0 - size / 2.0)
    }
}

/// One keypress worth of movement; a single event moves a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A moving hazard. Velocity is fixed at spawn and never changes, even when
/// the spawn speed floor ramps up later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Asteroid {
    /// One tick of straight-line motion. Asteroids are never wrapped or
    /// despawned; they may drift off-screen indefinitely.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// The player square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
}

impl Player {
    pub fn centered(bounds: Bounds) -> Self {
        Self {
            pos: bounds.center_for(PLAYER_SIZE),
        }
    }

    /// Apply one discrete move, then wrap each axis independently.
    ///
    /// Leaving through one edge re-enters at the opposite edge's origin, not
    /// mirrored: below 0 lands at `bound - PLAYER_SIZE`, past
    /// `bound - PLAYER_SIZE` lands at 0.
    pub fn step(&mut self, dir: Direction, bounds: Bounds) {
        match dir {
            Direction::Up => self.pos.y -= PLAYER_STEP,
            Direction::Down => self.pos.y += PLAYER_STEP,
            Direction::Left => self.pos.x -= PLAYER_STEP,
            Direction::Right => self.pos.x += PLAYER_STEP,
        }
        self.pos.x = wrap(self.pos.x, bounds.width);
        self.pos.y = wrap(self.pos.y, bounds.height);
    }
}

fn wrap(coord: f32, bound: f32) -> f32 {
    if coord < 0.0 {
        bound - PLAYER_SIZE
    } else if coord > bound - PLAYER_SIZE {
        0.0
    } else {
        coord
    }
}

/// Complete game state (deterministic under a fixed seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded generator; all simulation randomness flows through here
    pub rng: Pcg32,
    pub bounds: Bounds,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    /// Escalation counter; monotonic for the process lifetime
    pub difficulty: u32,
    /// Speed handed to newly spawned asteroids
    pub min_speed: f32,
    /// Ticks since the current run started
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new state with the opening wave already spawned
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            player: Player::centered(bounds),
            asteroids: Vec::new(),
            difficulty: 0,
            min_speed: MIN_ASTEROID_SPEED,
            time_ticks: 0,
        };
        spawn::spawn_wave(&mut state, INITIAL_ASTEROIDS);
        state
    }

    /// Begin a fresh run: new bounds, player recentered, field cleared and
    /// respawned, clock reset. The difficulty ramp is deliberately kept.
    pub fn restart(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.player = Player::centered(bounds);
        self.asteroids.clear();
        self.time_ticks = 0;
        spawn::spawn_wave(self, INITIAL_ASTEROIDS);
    }

    /// Milliseconds survived in the current run
    pub fn elapsed_ms(&self) -> u64 {
        self.time_ticks * TICK_MS
    }

    /// Advance every asteroid by its fixed velocity
    pub fn advance_asteroids(&mut self) {
        for asteroid in &mut self.asteroids {
            asteroid.advance();
        }
    }
}
