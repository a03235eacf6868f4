//! World state and plain entity types
//!
//! `EntityWorld` owns every live collection for one play session. It has no
//! behavior beyond storage and pruning; the component modules mutate it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hostile::Hostile;
use super::particles::ParticlePool;
use super::player::Player;
use super::spawn::SpawnDirector;
use super::starfield::Starfield;
use crate::consts::*;

/// Arena extent. The origin is the top-left corner and +y points down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if `pos` lies inside the arena grown by the given paddings
    #[inline]
    pub fn contains_padded(&self, pos: Vec2, side: f32, top: f32, bottom: f32) -> bool {
        pos.x >= -side && pos.x <= self.width + side && pos.y >= -top && pos.y <= self.height + bottom
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

/// A player projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BULLET_RADIUS,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Power-up types (also the buff kinds they grant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    /// Shorter fire cooldown
    Rapid,
    /// Damage immunity
    Shield,
    /// Three-way shot
    Spread,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Rapid, PowerupKind::Shield, PowerupKind::Spread];

    /// Uniformly pick a kind
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// HUD glyph
    pub fn symbol(&self) -> char {
        match self {
            PowerupKind::Rapid => 'R',
            PowerupKind::Shield => 'S',
            PowerupKind::Spread => 'W',
        }
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerup {
    pub pos: Vec2,
    pub kind: PowerupKind,
    pub radius: f32,
    /// Seconds since drop, drives the sideways sway
    pub age: f32,
}

impl Powerup {
    pub fn new(pos: Vec2, kind: PowerupKind) -> Self {
        Self {
            pos,
            kind,
            radius: POWERUP_RADIUS,
            age: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.pos.y += POWERUP_FALL_SPEED * dt;
        self.pos.x += (self.age * 2.0).cos() * POWERUP_SWAY * dt;
    }
}

/// Per-run counters for the HUD and end-of-run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub kills: u32,
    pub elite_kills: u32,
    pub shots_fired: u32,
    pub powerups_collected: u32,
    pub hits_taken: u32,
    pub hits_absorbed: u32,
}

/// Every live entity of one session
#[derive(Debug, Clone)]
pub struct EntityWorld {
    pub bounds: Bounds,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub hostiles: Vec<Hostile>,
    pub powerups: Vec<Powerup>,
    pub particles: ParticlePool,
    pub stars: Starfield,
    pub spawner: SpawnDirector,
    pub stats: RunStats,
}

impl EntityWorld {
    /// Fresh world: player at the lower-middle, nothing else alive
    pub fn new<R: Rng + ?Sized>(
        bounds: Bounds,
        particle_cap: usize,
        star_count: usize,
        rng: &mut R,
    ) -> Self {
        Self {
            bounds,
            player: Player::new(Vec2::new(bounds.width / 2.0, bounds.height * 0.75)),
            bullets: Vec::new(),
            hostiles: Vec::new(),
            powerups: Vec::new(),
            particles: ParticlePool::new(particle_cap),
            stars: Starfield::new(bounds, star_count, rng),
            spawner: SpawnDirector::new(rng),
            stats: RunStats::default(),
        }
    }

    /// Drop everything that left its allowed window (or expired)
    pub fn prune(&mut self) {
        let bounds = self.bounds;
        self.bullets
            .retain(|b| bounds.contains_padded(b.pos, 20.0, 60.0, 60.0));
        self.hostiles
            .retain(|h| h.pos.y >= -60.0 && h.pos.y <= bounds.height + 120.0);
        self.powerups
            .retain(|p| bounds.contains_padded(p.pos, 40.0, 60.0, 40.0));
        self.particles.prune(bounds);
    }

    /// Number of live entities (player excluded)
    pub fn entity_count(&self) -> usize {
        self.bullets.len() + self.hostiles.len() + self.powerups.len() + self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn world() -> EntityWorld {
        let mut rng = Pcg32::seed_from_u64(1);
        EntityWorld::new(Bounds::default(), PARTICLE_MAX, MAX_STARS, &mut rng)
    }

    #[test]
    fn test_new_world_is_empty() {
        let w = world();
        assert_eq!(w.entity_count(), 0);
        assert_eq!(w.player.pos, Vec2::new(450.0, 525.0));
        assert_eq!(w.stars.len(), MAX_STARS);
    }

    #[test]
    fn test_prune_windows() {
        let mut w = world();
        w.bullets.push(Bullet::new(Vec2::new(100.0, -59.0), Vec2::ZERO));
        w.bullets.push(Bullet::new(Vec2::new(100.0, -61.0), Vec2::ZERO));
        w.bullets.push(Bullet::new(Vec2::new(921.0, 100.0), Vec2::ZERO));
        w.hostiles.push(Hostile::new(Vec2::new(-500.0, 10.0), 90.0, false, 0.0));
        w.hostiles.push(Hostile::new(Vec2::new(100.0, 821.0), 90.0, false, 0.0));
        w.powerups.push(Powerup::new(Vec2::new(100.0, 741.0), PowerupKind::Rapid));
        w.powerups.push(Powerup::new(Vec2::new(100.0, 739.0), PowerupKind::Shield));

        w.prune();

        assert_eq!(w.bullets.len(), 1);
        // Hostiles are only bounded vertically
        assert_eq!(w.hostiles.len(), 1);
        assert_eq!(w.hostiles[0].pos.x, -500.0);
        assert_eq!(w.powerups.len(), 1);
        assert_eq!(w.powerups[0].kind, PowerupKind::Shield);
    }

    #[test]
    fn test_powerup_falls_and_sways() {
        let mut p = Powerup::new(Vec2::new(100.0, 100.0), PowerupKind::Spread);
        p.update(0.5);
        assert!((p.pos.y - 130.0).abs() < 1e-4);
        assert!(p.pos.x > 100.0);
        assert!((p.age - 0.5).abs() < 1e-6);
    }
}
