//! Hostile ships: seek the player with a circular wobble

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub elite: bool,
    pub hp: u32,
    /// Wobble phase accumulator (radians)
    pub phase: f32,
}

impl Hostile {
    pub fn new(pos: Vec2, speed: f32, elite: bool, phase: f32) -> Self {
        Self {
            pos,
            speed,
            radius: if elite { ELITE_RADIUS } else { ENEMY_RADIUS },
            elite,
            hp: if elite { ELITE_HP } else { ENEMY_HP },
            phase,
        }
    }

    pub fn wobble_amplitude(&self) -> f32 {
        if self.elite {
            ELITE_WOBBLE
        } else {
            ENEMY_WOBBLE
        }
    }

    fn wobble_rate(&self) -> f32 {
        if self.elite {
            ELITE_WOBBLE_RATE
        } else {
            ENEMY_WOBBLE_RATE
        }
    }

    /// Points awarded on destruction
    pub fn score_value(&self) -> u64 {
        if self.elite { ELITE_SCORE } else { ENEMY_SCORE }
    }

    /// Steer toward `target` at `speed`, plus the wobble offset
    pub fn update(&mut self, dt: f32, target: Vec2) {
        let to_target = target - self.pos;
        // Epsilon keeps the direction finite when sitting on the target
        let dir = to_target / (to_target.length() + 1e-5);
        self.phase += dt * self.wobble_rate();
        let wobble = Vec2::new(self.phase.cos(), self.phase.sin()) * self.wobble_amplitude();
        self.pos += (dir * self.speed + wobble) * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        let normal = Hostile::new(Vec2::ZERO, 90.0, false, 0.0);
        let elite = Hostile::new(Vec2::ZERO, 90.0, true, 0.0);
        assert_eq!(normal.hp, 1);
        assert_eq!(elite.hp, 3);
        assert!(elite.radius > normal.radius);
        assert!(elite.wobble_amplitude() > normal.wobble_amplitude());
        assert!(elite.score_value() > normal.score_value());
    }

    #[test]
    fn test_seeks_target() {
        let mut h = Hostile::new(Vec2::new(0.0, 0.0), 100.0, false, 0.0);
        let target = Vec2::new(0.0, 1000.0);
        let start = h.pos.distance(target);
        for _ in 0..60 {
            h.update(1.0 / 60.0, target);
        }
        // 100 px/s toward target, wobble (40 px/s) cannot cancel it
        assert!(start - h.pos.distance(target) > 50.0);
    }

    #[test]
    fn test_elite_phase_advances_faster() {
        let mut normal = Hostile::new(Vec2::ZERO, 90.0, false, 0.0);
        let mut elite = Hostile::new(Vec2::ZERO, 90.0, true, 0.0);
        normal.update(1.0, Vec2::new(0.0, 100.0));
        elite.update(1.0, Vec2::new(0.0, 100.0));
        assert!((normal.phase - ENEMY_WOBBLE_RATE).abs() < 1e-6);
        assert!((elite.phase - ELITE_WOBBLE_RATE).abs() < 1e-6);
    }

    #[test]
    fn test_on_target_stays_finite() {
        let mut h = Hostile::new(Vec2::new(5.0, 5.0), 90.0, false, 0.0);
        h.update(0.01, Vec2::new(5.0, 5.0));
        assert!(h.pos.is_finite());
    }
}
