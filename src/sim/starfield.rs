//! Scrolling background stars

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Bounds;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Fall speed in px/s
    pub speed: f32,
    pub size: u8,
}

impl Star {
    fn random<R: Rng + ?Sized>(bounds: Bounds, rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..=bounds.width.max(0.0)),
                rng.random_range(0.0..=bounds.height.max(0.0)),
            ),
            speed: rng.random_range(20.0..=120.0),
            size: rng.random_range(1..=3),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(bounds: Bounds, count: usize, rng: &mut R) -> Self {
        Self {
            stars: (0..count).map(|_| Star::random(bounds, rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Scroll down at `rate` times each star's speed; stars leaving the
    /// bottom re-enter at the top with a new column and speed.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rate: f32, bounds: Bounds, rng: &mut R) {
        for star in self.stars.iter_mut() {
            star.pos.y += star.speed * dt * rate;
            if star.pos.y > bounds.height {
                star.pos.x = rng.random_range(0.0..=bounds.width.max(0.0));
                star.pos.y = -5.0;
                star.speed = rng.random_range(20.0..=120.0);
            }
        }
    }
}
