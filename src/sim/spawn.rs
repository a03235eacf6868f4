//! Hostile spawning with a time-driven difficulty curve
//!
//! Difficulty grows linearly with time survived and is never capped. It
//! shortens the spawn interval, raises the elite chance (up to a ceiling)
//! and speeds hostiles up.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hostile::Hostile;
use super::state::Bounds;
use crate::consts::*;
use crate::{clamp_f32, decay};

/// Difficulty scalar after `elapsed` seconds of play
pub fn difficulty_at(elapsed: f32) -> f32 {
    1.0 + elapsed * DIFFICULTY_RATE
}

/// `[min, max]` window the next spawn countdown is drawn from
pub fn spawn_interval(difficulty: f32) -> (f32, f32) {
    let min = (ENEMY_MIN_SPAWN / difficulty).max(ENEMY_SPAWN_FLOOR);
    let max = (ENEMY_MAX_SPAWN / difficulty).max(min + ENEMY_SPAWN_GAP);
    (min, max)
}

/// Probability that a spawn is elite
pub fn elite_chance(difficulty: f32) -> f32 {
    clamp_f32(ELITE_CHANCE_PER_DIFFICULTY * difficulty, 0.0, ELITE_CHANCE_MAX)
}

/// Speed multiplier applied on top of the rolled base speed
pub fn speed_scale(difficulty: f32) -> f32 {
    0.8 + 0.25 * difficulty
}

/// Countdown-driven spawner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Seconds until the next spawn
    pub timer: f32,
    /// Seconds of play this session
    pub elapsed: f32,
    pub difficulty: f32,
    /// Hostiles spawned so far
    pub spawned: u32,
}

impl SpawnDirector {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            timer: rng.random_range(ENEMY_MIN_SPAWN..=ENEMY_MAX_SPAWN),
            elapsed: 0.0,
            difficulty: 1.0,
            spawned: 0,
        }
    }

    /// Draw the next countdown for the current difficulty
    pub fn next_interval<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let (min, max) = spawn_interval(self.difficulty);
        rng.random_range(min..=max)
    }

    /// Advance the clock and the countdown; returns a hostile when it expires
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        bounds: Bounds,
        rng: &mut R,
    ) -> Option<Hostile> {
        self.elapsed += dt;
        self.difficulty = difficulty_at(self.elapsed);

        self.timer = decay(self.timer, dt);
        if self.timer > 0.0 {
            return None;
        }
        let hostile = self.spawn(bounds, rng);
        self.timer = self.next_interval(rng);
        Some(hostile)
    }

    /// Roll a hostile just above the top edge
    pub fn spawn<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) -> Hostile {
        let lo = ENEMY_SPAWN_MARGIN;
        let hi = bounds.width - ENEMY_SPAWN_MARGIN;
        // Resizing below twice the margin collapses the lane to its center
        let x = if hi > lo {
            rng.random_range(lo..=hi)
        } else {
            bounds.width / 2.0
        };
        let elite = rng.random::<f32>() < elite_chance(self.difficulty);
        let speed = (ENEMY_BASE_SPEED
            + rng.random_range(-ENEMY_SPEED_VARIANCE..=ENEMY_SPEED_VARIANCE))
            * speed_scale(self.difficulty);
        let phase = rng.random::<f32>() * 10.0;

        self.spawned += 1;
        log::debug!(
            "Spawn #{} {} at x={:.0} speed={:.0} (difficulty {:.2})",
            self.spawned,
            if elite { "elite" } else { "hostile" },
            x,
            speed,
            self.difficulty
        );
        Hostile::new(Vec2::new(x, ENEMY_SPAWN_Y), speed, elite, phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_interval_at_base_difficulty() {
        let (min, max) = spawn_interval(1.0);
        assert_eq!(min, ENEMY_MIN_SPAWN);
        assert_eq!(max, ENEMY_MAX_SPAWN);

        let mut rng = Pcg32::seed_from_u64(5);
        let director = SpawnDirector::new(&mut rng);
        for _ in 0..200 {
            let t = director.next_interval(&mut rng);
            assert!((ENEMY_MIN_SPAWN..=ENEMY_MAX_SPAWN).contains(&t));
        }
    }

    #[test]
    fn test_interval_narrows_with_difficulty() {
        let (min1, max1) = spawn_interval(1.0);
        let (min4, max4) = spawn_interval(4.0);
        assert!(max4 - min4 < max1 - min1);
        assert!(min4 < min1);
        assert!(min4 >= ENEMY_SPAWN_FLOOR);
        assert!(max4 - min4 >= ENEMY_SPAWN_GAP - 1e-6);

        let (min100, max100) = spawn_interval(100.0);
        assert_eq!(min100, ENEMY_SPAWN_FLOOR);
        assert!(max100 > min100);
    }

    #[test]
    fn test_elite_chance_ceiling() {
        assert!((elite_chance(1.0) - 0.05).abs() < 1e-6);
        assert!((elite_chance(4.0) - 0.2).abs() < 1e-6);
        assert_eq!(elite_chance(50.0), ELITE_CHANCE_MAX);
    }

    #[test]
    fn test_difficulty_is_linear_and_uncapped() {
        assert_eq!(difficulty_at(0.0), 1.0);
        assert!((difficulty_at(50.0) - 2.0).abs() < 1e-6);
        assert!(difficulty_at(10_000.0) > 100.0);
    }

    #[test]
    fn test_hostiles_speed_up_with_difficulty() {
        assert!(speed_scale(4.0) > speed_scale(2.0));
        assert!(speed_scale(2.0) > speed_scale(1.0));

        let mut rng = Pcg32::seed_from_u64(9);
        let mut director = SpawnDirector::new(&mut rng);
        let bounds = Bounds::default();
        let mut mean_speed = |difficulty: f32| {
            director.difficulty = difficulty;
            let total: f32 = (0..200).map(|_| director.spawn(bounds, &mut rng).speed).sum();
            total / 200.0
        };
        let calm = mean_speed(1.0);
        let hard = mean_speed(4.0);
        // Expected means: 90 * 1.05 and 90 * 1.8
        assert!((calm - ENEMY_BASE_SPEED * speed_scale(1.0)).abs() < 10.0);
        assert!((hard - ENEMY_BASE_SPEED * speed_scale(4.0)).abs() < 15.0);
        assert!(hard > calm + 40.0);
    }

    #[test]
    fn test_spawn_placement() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut director = SpawnDirector::new(&mut rng);
        let bounds = Bounds::default();
        for _ in 0..100 {
            let h = director.spawn(bounds, &mut rng);
            assert!(h.pos.x >= ENEMY_SPAWN_MARGIN && h.pos.x <= bounds.width - ENEMY_SPAWN_MARGIN);
            assert_eq!(h.pos.y, ENEMY_SPAWN_Y);
            let lo = (ENEMY_BASE_SPEED - ENEMY_SPEED_VARIANCE) * speed_scale(1.0);
            let hi = (ENEMY_BASE_SPEED + ENEMY_SPEED_VARIANCE) * speed_scale(1.0);
            assert!(h.speed >= lo - 1e-3 && h.speed <= hi + 1e-3);
        }
        assert_eq!(director.spawned, 100);
    }

    #[test]
    fn test_update_spawns_on_expiry() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut director = SpawnDirector::new(&mut rng);
        director.timer = 0.05;
        assert!(director.update(0.01, Bounds::default(), &mut rng).is_none());
        assert!(director.update(0.05, Bounds::default(), &mut rng).is_some());
        assert!(director.timer >= ENEMY_SPAWN_FLOOR);
        assert!((director.elapsed - 0.06).abs() < 1e-6);
    }
}
