//! Run lifecycle: tick ordering, best-time bookkeeping, difficulty ramp
//!
//! A session is either ticking or, for the duration of one tick that detects
//! contact, finalizing a run. The shell owns the timers; everything here is a
//! plain function of state so tests can drive it tick by tick.

use super::collision::player_hit;
use super::spawn::spawn_wave;
use super::state::{Bounds, Direction, GameState};
use crate::besttime::{BestTime, format_time};
use crate::consts::{MAX_ASTEROID_SPEED, SPEED_RAMP_EVERY};

/// What a single tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The run continues
    Running,
    /// The player was hit; stats are final and the caller should persist the
    /// record if it improved, then restart with freshly sampled bounds
    Collided { elapsed_ms: u64, new_best: bool },
}

/// One run-after-run game session: the game state plus the best-time record
#[derive(Debug)]
pub struct Session {
    pub state: GameState,
    pub best: BestTime,
}

impl Session {
    pub fn new(bounds: Bounds, seed: u64, best: BestTime) -> Self {
        Self {
            state: GameState::new(bounds, seed),
            best,
        }
    }

    /// Advance one frame: move the field, then test for contact.
    ///
    /// On a hit the elapsed time is folded into the best-time record in
    /// memory; persisting and restarting are left to the caller so the core
    /// never touches the platform.
    pub fn tick(&mut self) -> TickOutcome {
        self.state.time_ticks += 1;
        self.state.advance_asteroids();

        if player_hit(&self.state.player, &self.state.asteroids) {
            let elapsed_ms = self.state.elapsed_ms();
            let new_best = self.best.record(elapsed_ms);
            if new_best {
                log::info!("new best time: {}", format_time(elapsed_ms));
            }
            TickOutcome::Collided {
                elapsed_ms,
                new_best,
            }
        } else {
            TickOutcome::Running
        }
    }

    /// Begin the next run. Resets player, field and clock against the given
    /// bounds; the difficulty ramp carries over.
    pub fn restart(&mut self, bounds: Bounds) {
        self.state.restart(bounds);
    }

    /// Route one keypress to the player
    pub fn input(&mut self, dir: Direction) {
        let bounds = self.state.bounds;
        self.state.player.step(dir, bounds);
    }

    /// Periodic difficulty escalation: the counter grows by one and that many
    /// extra asteroids join the current field, never replacing it. Every
    /// fourth firing also lifts the spawn speed floor by one, capped at
    /// [`MAX_ASTEROID_SPEED`]; asteroids already in flight keep the speed
    /// they spawned with.
    pub fn escalate(&mut self) {
        let state = &mut self.state;
        state.difficulty += 1;
        if state.difficulty % SPEED_RAMP_EVERY == 0 {
            state.min_speed = (state.min_speed + 1.0).min(MAX_ASTEROID_SPEED);
        }
        spawn_wave(state, state.difficulty);
        log::debug!(
            "difficulty {}: field holds {} asteroids",
            state.difficulty,
            state.asteroids.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{INITIAL_ASTEROIDS, MIN_ASTEROID_SPEED, PLAYER_SIZE, TICK_MS};
    use crate::sim::state::Asteroid;
    use glam::Vec2;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn session(seed: u64) -> Session {
        Session::new(BOUNDS, seed, BestTime::new())
    }

    /// Park a stationary asteroid on top of the player
    fn plant_collision(s: &mut Session) {
        let pos = s.state.player.pos + Vec2::splat(PLAYER_SIZE / 2.0);
        s.state.asteroids.push(Asteroid {
            pos,
            vel: Vec2::ZERO,
        });
    }

    #[test]
    fn test_tick_advances_clock_and_field() {
        let mut s = session(3);
        let before: Vec<_> = s.state.asteroids.clone();
        assert_eq!(s.tick(), TickOutcome::Running);
        assert_eq!(s.state.time_ticks, 1);
        for (a, b) in before.iter().zip(&s.state.asteroids) {
            assert_eq!(b.pos, a.pos + a.vel);
        }
    }

    #[test]
    fn test_collision_ends_run_with_elapsed_time() {
        let mut s = session(3);
        for _ in 0..9 {
            assert_eq!(s.tick(), TickOutcome::Running);
        }
        plant_collision(&mut s);
        let outcome = s.tick();
        assert_eq!(
            outcome,
            TickOutcome::Collided {
                elapsed_ms: 10 * TICK_MS,
                new_best: true,
            }
        );
        assert_eq!(s.best.millis, 10 * TICK_MS);
    }

    #[test]
    fn test_best_time_is_monotonic_across_runs() {
        let mut best = BestTime::new();
        let mut persisted = Vec::new();
        for elapsed in [500, 300, 900] {
            best.record(elapsed);
            persisted.push(best.millis);
        }
        assert_eq!(persisted, [500, 500, 900]);
    }

    #[test]
    fn test_restart_resets_run_but_keeps_ramp() {
        let mut s = session(3);
        for _ in 0..6 {
            s.escalate();
        }
        s.tick();
        s.state.player.pos = Vec2::ZERO;

        let difficulty = s.state.difficulty;
        let min_speed = s.state.min_speed;
        s.restart(Bounds::new(1024.0, 768.0));

        assert_eq!(s.state.asteroids.len(), INITIAL_ASTEROIDS as usize);
        assert_eq!(s.state.time_ticks, 0);
        assert_eq!(s.state.player.pos, Bounds::new(1024.0, 768.0).center_for(PLAYER_SIZE));
        assert_eq!(s.state.difficulty, difficulty);
        assert_eq!(s.state.min_speed, min_speed);
    }

    #[test]
    fn test_escalation_is_additive() {
        let mut s = session(3);
        let n = 5u32;
        for _ in 0..n {
            s.escalate();
        }
        // After N firings the field holds the opening wave plus 1 + 2 + ... + N
        let expected = INITIAL_ASTEROIDS + n * (n + 1) / 2;
        assert_eq!(s.state.asteroids.len(), expected as usize);
    }

    #[test]
    fn test_speed_ramps_every_fourth_escalation_and_clamps() {
        let mut s = session(3);
        for i in 1..=3 {
            s.escalate();
            assert_eq!(s.state.min_speed, MIN_ASTEROID_SPEED, "fire {i}");
        }
        s.escalate();
        assert_eq!(s.state.min_speed, 2.0);

        for _ in 5..=20 {
            s.escalate();
        }
        // Bumps at 4, 8, 12, 16, 20 would reach 6; the ceiling holds it at 5
        assert_eq!(s.state.min_speed, MAX_ASTEROID_SPEED);
    }

    #[test]
    fn test_ramped_speed_applies_to_new_spawns_only() {
        let mut s = session(3);
        let old: Vec<_> = s.state.asteroids.clone();
        for _ in 0..4 {
            s.escalate();
        }
        // Pre-ramp asteroids keep their original velocity
        for (before, after) in old.iter().zip(&s.state.asteroids) {
            assert_eq!(before.vel, after.vel);
        }
        // Everything spawned after the bump moves at the lifted floor
        let newest = s.state.asteroids.last().unwrap();
        assert!((newest.vel.length() - s.state.min_speed).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut s1 = session(99999);
        let mut s2 = session(99999);

        let moves = [
            Direction::Up,
            Direction::Left,
            Direction::Left,
            Direction::Down,
        ];
        for dir in moves {
            s1.input(dir);
            s2.input(dir);
            s1.tick();
            s2.tick();
        }
        s1.escalate();
        s2.escalate();

        assert_eq!(s1.state.player, s2.state.player);
        assert_eq!(s1.state.asteroids, s2.state.asteroids);
        assert_eq!(s1.state.time_ticks, s2.state.time_ticks);
    }
}
