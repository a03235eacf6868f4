//! Circle-overlap collision detection and response
//!
//! Each pass walks a stable view of its collections, marks what should go,
//! and removes the marked entries once the walk is done. Nothing is removed
//! from a `Vec` while it is being iterated.

use glam::Vec2;
use rand::Rng;

use super::hostile::Hostile;
use super::particles::{Burst, ParticlePool};
use super::player::Player;
use super::state::{Bullet, EntityWorld, Powerup, PowerupKind};
use crate::consts::*;

/// Two circles collide iff the squared center distance is within the squared
/// radius sum (touching counts).
#[inline]
pub fn overlap(p1: Vec2, r1: f32, p2: Vec2, r2: f32) -> bool {
    let reach = r1 + r2;
    p1.distance_squared(p2) <= reach * reach
}

/// What happened during one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Bullets consumed by hostiles
    pub bullet_hits: u32,
    pub kills: u32,
    pub elite_kills: u32,
    /// Hostiles that rammed the player
    pub rams: u32,
    /// Rams that actually cost hp
    pub player_hits: u32,
    /// Power-ups collected, in pickup order
    pub pickups: Vec<PowerupKind>,
    /// Power-ups dropped by kills
    pub drops: u32,
}

/// Drop `items[i]` for every `true` in `remove`
fn remove_marked<T>(items: &mut Vec<T>, remove: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !remove[index];
        index += 1;
        keep
    });
}

/// Bullets against hostiles.
///
/// A bullet is spent on its first overlap. Once a hostile dies it matches
/// no further bullets this pass, but several bullets may each land a
/// non-lethal hit on the same hostile.
pub fn bullets_vs_hostiles<R: Rng + ?Sized>(
    bullets: &mut Vec<Bullet>,
    hostiles: &mut Vec<Hostile>,
    powerups: &mut Vec<Powerup>,
    particles: &mut ParticlePool,
    player: &mut Player,
    report: &mut CollisionReport,
    rng: &mut R,
) {
    let mut spent = vec![false; bullets.len()];
    let mut destroyed = vec![false; hostiles.len()];

    for (hi, hostile) in hostiles.iter_mut().enumerate() {
        for (bi, bullet) in bullets.iter().enumerate() {
            if spent[bi] || !overlap(hostile.pos, hostile.radius, bullet.pos, bullet.radius) {
                continue;
            }
            spent[bi] = true;
            report.bullet_hits += 1;
            hostile.hp = hostile.hp.saturating_sub(1);
            particles.burst(bullet.pos, Burst::IMPACT, rng);

            if hostile.hp == 0 {
                destroyed[hi] = true;
                report.kills += 1;
                let awarded = player.add_score(hostile.score_value());
                let burst = if hostile.elite {
                    report.elite_kills += 1;
                    Burst::ELITE_DESTROYED
                } else {
                    Burst::HOSTILE_DESTROYED
                };
                particles.burst(hostile.pos, burst, rng);
                log::debug!(
                    "Destroyed {} at ({:.0}, {:.0}) for {} points",
                    if hostile.elite { "elite" } else { "hostile" },
                    hostile.pos.x,
                    hostile.pos.y,
                    awarded
                );

                let drop_chance = if hostile.elite {
                    POWERUP_CHANCE * ELITE_DROP_BONUS
                } else {
                    POWERUP_CHANCE
                };
                if rng.random::<f32>() < drop_chance {
                    let kind = PowerupKind::random(rng);
                    powerups.push(Powerup::new(hostile.pos, kind));
                    report.drops += 1;
                }
                break;
            }
        }
    }

    remove_marked(bullets, &spent);
    remove_marked(hostiles, &destroyed);
}

/// Hostiles ramming the player. The hostile is always consumed, even when
/// invulnerability or the shield absorbs the hit.
pub fn hostiles_vs_player<R: Rng + ?Sized>(
    hostiles: &mut Vec<Hostile>,
    particles: &mut ParticlePool,
    player: &mut Player,
    report: &mut CollisionReport,
    rng: &mut R,
) {
    if !player.alive() {
        return;
    }
    let mut rammed = vec![false; hostiles.len()];
    for (i, hostile) in hostiles.iter().enumerate() {
        if !overlap(hostile.pos, hostile.radius, player.pos, player.radius) {
            continue;
        }
        if player.damage(1) {
            report.player_hits += 1;
            particles.burst(player.pos, Burst::PLAYER_HIT, rng);
            log::debug!("Player hit, hp {}/{}", player.hp, player.max_hp);
        }
        rammed[i] = true;
        report.rams += 1;
        particles.burst(hostile.pos, Burst::RAMMED, rng);
    }
    remove_marked(hostiles, &rammed);
}

/// Power-up collection, with a forgiving pickup radius
pub fn powerups_vs_player<R: Rng + ?Sized>(
    powerups: &mut Vec<Powerup>,
    particles: &mut ParticlePool,
    player: &mut Player,
    report: &mut CollisionReport,
    rng: &mut R,
) {
    if !player.alive() {
        return;
    }
    let reach = player.radius + POWERUP_PICKUP_BONUS;
    let mut collected = vec![false; powerups.len()];
    for (i, powerup) in powerups.iter().enumerate() {
        if !overlap(powerup.pos, powerup.radius, player.pos, reach) {
            continue;
        }
        let remaining = player.apply_powerup(powerup.kind);
        log::debug!("Picked up {:?} ({remaining:.1}s)", powerup.kind);
        collected[i] = true;
        report.pickups.push(powerup.kind);
        particles.burst(powerup.pos, Burst::PICKUP, rng);
    }
    remove_marked(powerups, &collected);
}

/// Run every collision pass in order: bullets, rams, pickups
pub fn resolve<R: Rng + ?Sized>(world: &mut EntityWorld, rng: &mut R) -> CollisionReport {
    let mut report = CollisionReport::default();
    let EntityWorld {
        player,
        bullets,
        hostiles,
        powerups,
        particles,
        ..
    } = world;

    bullets_vs_hostiles(bullets, hostiles, powerups, particles, player, &mut report, rng);
    hostiles_vs_player(hostiles, particles, player, &mut report, rng);
    powerups_vs_player(powerups, particles, player, &mut report, rng);
    report
}
