//! Bounded pool of cosmetic particles
//!
//! Particles never affect gameplay. The pool holds at most `capacity` of them;
//! when a burst overflows it, the oldest are dropped first.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Bounds;
use crate::consts::{PARTICLE_BOUNDS_PAD, PARTICLE_DAMPING};

/// Burst palette: warm orange, ember red, ice blue
pub const PALETTE: [[u8; 3]; 3] = [[255, 200, 120], [255, 150, 90], [200, 240, 255]];

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left
    pub life: f32,
    pub color: [u8; 3],
    pub radius: f32,
}

/// Burst presets: (count, power)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub count: usize,
    pub power: f32,
}

impl Burst {
    pub const IMPACT: Burst = Burst { count: 6, power: 0.5 };
    pub const HOSTILE_DESTROYED: Burst = Burst { count: 16, power: 1.0 };
    pub const ELITE_DESTROYED: Burst = Burst { count: 24, power: 1.4 };
    pub const RAMMED: Burst = Burst { count: 12, power: 0.9 };
    pub const PLAYER_HIT: Burst = Burst { count: 20, power: 1.2 };
    pub const PICKUP: Burst = Burst { count: 10, power: 0.7 };
}

#[derive(Debug, Clone, Default)]
pub struct ParticlePool {
    /// Oldest first
    particles: Vec<Particle>,
    capacity: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Spray `burst.count` particles outward from `pos`
    pub fn burst<R: Rng + ?Sized>(&mut self, pos: Vec2, burst: Burst, rng: &mut R) {
        if self.capacity == 0 {
            return;
        }
        for _ in 0..burst.count {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let magnitude = rng.random_range(80.0f32..=260.0) * burst.power;
            let color = PALETTE[rng.random_range(0..PALETTE.len())];
            let life: f32 = rng.random_range(0.3..=1.2);
            let radius = rng.random_range(1..=2) as f32;
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * magnitude,
                life,
                color,
                radius,
            });
        }
        // Keep the newest `capacity`
        if self.particles.len() > self.capacity {
            let excess = self.particles.len() - self.capacity;
            self.particles.drain(..excess);
        }
    }

    /// Age, move and damp every particle
    pub fn update(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.life -= dt;
            particle.pos += particle.vel * dt;
            particle.vel *= PARTICLE_DAMPING;
        }
    }

    /// Remove dead particles and those outside the padded arena
    pub fn prune(&mut self, bounds: Bounds) {
        let pad = PARTICLE_BOUNDS_PAD;
        self.particles
            .retain(|p| p.life > 0.0 && bounds.contains_padded(p.pos, pad, pad, pad));
    }
}
