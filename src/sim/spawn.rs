//! Off-screen asteroid spawning
//!
//! Asteroids enter from exactly one asteroid-size outside a random edge (any
//! of the four sides) and head for a uniformly chosen point inside the
//! bounds. The heading and speed are fixed at spawn; nothing steers or
//! accelerates afterwards, and overlapping spawns are allowed.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, GameState};
use crate::consts::ASTEROID_SIZE;

/// Append `count` asteroids to the current field
pub fn spawn_wave(state: &mut GameState, count: u32) {
    for _ in 0..count {
        let asteroid = spawn_one(state);
        state.asteroids.push(asteroid);
    }
}

fn spawn_one(state: &mut GameState) -> Asteroid {
    let (width, height) = (state.bounds.width, state.bounds.height);
    let rng = &mut state.rng;

    let pos = if rng.random_bool(0.5) {
        // Enter from above or below
        let x = rng.random_range(0.0..width);
        let y = if rng.random_bool(0.5) {
            -ASTEROID_SIZE
        } else {
            height + ASTEROID_SIZE
        };
        Vec2::new(x, y)
    } else {
        // Enter from the left or the right
        let x = if rng.random_bool(0.5) {
            -ASTEROID_SIZE
        } else {
            width + ASTEROID_SIZE
        };
        let y = rng.random_range(0.0..height);
        Vec2::new(x, y)
    };

    // Aim at a random point inside the field
    let target = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
    let angle = (target.y - pos.y).atan2(target.x - pos.x);
    let vel = state.min_speed * Vec2::new(angle.cos(), angle.sin());

    Asteroid { pos, vel }
}
