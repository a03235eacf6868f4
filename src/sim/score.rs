//! Score with a decaying combo multiplier

use serde::{Deserialize, Serialize};

use crate::consts::{MULTIPLIER_MAX, MULTIPLIER_WINDOW};
use crate::decay;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    pub score: u64,
    /// Always in `1..=MULTIPLIER_MAX`
    pub multiplier: u32,
    /// Seconds until the multiplier falls back to 1
    pub timer: f32,
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self {
            score: 0,
            multiplier: 1,
            timer: 0.0,
        }
    }
}

impl ScoreTracker {
    /// Award `base` at the current multiplier, then bump the combo.
    /// Returns the points actually added.
    pub fn add(&mut self, base: u64) -> u64 {
        let awarded = base * u64::from(self.multiplier);
        self.score += awarded;
        self.multiplier = (self.multiplier + 1).min(MULTIPLIER_MAX);
        self.timer = MULTIPLIER_WINDOW;
        awarded
    }

    pub fn decay(&mut self, dt: f32) {
        self.timer = decay(self.timer, dt);
        if self.timer <= 0.0 {
            self.multiplier = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combo_builds_and_caps() {
        let mut s = ScoreTracker::default();
        assert_eq!(s.add(7), 7);
        assert_eq!(s.add(7), 14);
        for _ in 0..20 {
            s.add(1);
        }
        assert_eq!(s.multiplier, MULTIPLIER_MAX);
        assert_eq!(s.timer, MULTIPLIER_WINDOW);
    }

    #[test]
    fn test_multiplier_resets_exactly_at_zero() {
        let mut s = ScoreTracker::default();
        s.add(10);
        s.add(10);
        assert_eq!(s.multiplier, 3);

        s.decay(3.0);
        assert_eq!(s.multiplier, 3);
        s.decay(0.5);
        assert_eq!(s.multiplier, 3);
        s.decay(0.5);
        assert_eq!(s.timer, 0.0);
        assert_eq!(s.multiplier, 1);
    }

    #[test]
    fn test_score_event_refreshes_window() {
        let mut s = ScoreTracker::default();
        s.add(10);
        s.decay(3.9);
        s.add(10);
        s.decay(3.9);
        assert_eq!(s.multiplier, 3);
        assert_eq!(s.score, 30);
    }
}
