//! Read-only frame snapshot for renderers
//!
//! Everything a frontend needs to draw one frame and its HUD. Serializable so
//! headless tools can dump it as JSON.

use glam::Vec2;
use serde::Serialize;

use super::buffs::Buffs;
use super::session::SessionState;
use super::state::{Bounds, EntityWorld, PowerupKind, RunStats};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub radius: f32,
    /// Facing angle in radians
    pub heading: f32,
    pub hp: u32,
    pub max_hp: u32,
    /// Remaining invulnerability (renderers flicker while > 0)
    pub invulnerable: f32,
    pub dashing: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HostileView {
    pub pos: Vec2,
    pub radius: f32,
    pub elite: bool,
    pub hp: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerupView {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerupKind,
    pub symbol: char,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
    /// Fade factor in [0, 1]
    pub alpha: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StarView {
    pub pos: Vec2,
    pub size: u8,
}

/// Everything visible this frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub state: SessionState,
    pub bounds: Bounds,
    pub player: PlayerView,
    pub score: u64,
    pub multiplier: u32,
    pub multiplier_timer: f32,
    pub buffs: Buffs,
    pub elapsed: f32,
    pub difficulty: f32,
    pub stats: RunStats,
    pub bullets: Vec<BulletView>,
    pub hostiles: Vec<HostileView>,
    pub powerups: Vec<PowerupView>,
    pub particles: Vec<ParticleView>,
    pub stars: Vec<StarView>,
}

/// Particle alpha: full above 1.2 s of life, never below a faint floor
fn particle_alpha(life: f32) -> f32 {
    (life / 1.2).clamp(40.0 / 255.0, 1.0)
}

impl Snapshot {
    pub fn capture(state: SessionState, world: &EntityWorld) -> Self {
        let player = &world.player;
        Self {
            state,
            bounds: world.bounds,
            player: PlayerView {
                pos: player.pos,
                radius: player.radius,
                heading: player.heading(),
                hp: player.hp,
                max_hp: player.max_hp,
                invulnerable: player.invulnerable,
                dashing: player.dashing(),
            },
            score: player.score.score,
            multiplier: player.score.multiplier,
            multiplier_timer: player.score.timer,
            buffs: player.buffs,
            elapsed: world.spawner.elapsed,
            difficulty: world.spawner.difficulty,
            stats: world.stats,
            bullets: world
                .bullets
                .iter()
                .map(|b| BulletView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            hostiles: world
                .hostiles
                .iter()
                .map(|h| HostileView {
                    pos: h.pos,
                    radius: h.radius,
                    elite: h.elite,
                    hp: h.hp,
                })
                .collect(),
            powerups: world
                .powerups
                .iter()
                .map(|p| PowerupView {
                    pos: p.pos,
                    radius: p.radius,
                    kind: p.kind,
                    symbol: p.kind.symbol(),
                })
                .collect(),
            particles: world
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    radius: p.radius,
                    color: p.color,
                    alpha: particle_alpha(p.life),
                })
                .collect(),
            stars: world
                .stars
                .stars
                .iter()
                .map(|s| StarView {
                    pos: s.pos,
                    size: s.size,
                })
                .collect(),
        }
    }

    /// One-line HUD text (hp, score, multiplier, buff timers)
    pub fn hud_line(&self) -> String {
        format!(
            "HP {}/{}  Score {}  x{}  [Rapid {:.1}] [Shield {:.1}] [Spread {:.1}]",
            self.player.hp,
            self.player.max_hp,
            self.score,
            self.multiplier,
            self.buffs.rapid,
            self.buffs.shield,
            self.buffs.spread
        )
    }
}
