//! Axis-aligned overlap between the player and the asteroid field
//!
//! Both entities are treated as squares of their configured size regardless
//! of how they are drawn. The comparisons are strict, so rects that merely
//! touch edges are still a miss.

use glam::Vec2;

use super::state::{Asteroid, Player};
use crate::consts::{ASTEROID_SIZE, PLAYER_SIZE};

/// Strict AABB overlap between two squares given by top-left corner and edge
#[inline]
pub fn rects_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> bool {
    a.x < b.x + b_size && a.x + a_size > b.x && a.y < b.y + b_size && a.y + a_size > b.y
}

/// True if any asteroid overlaps the player. Stops at the first hit; which
/// asteroid it was does not matter to the caller.
pub fn player_hit(player: &Player, asteroids: &[Asteroid]) -> bool {
    asteroids
        .iter()
        .any(|a| rects_overlap(player.pos, PLAYER_SIZE, a.pos, ASTEROID_SIZE))
}
