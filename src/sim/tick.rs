//! Variable timestep simulation tick
//!
//! Advances one frame of play. The update order is fixed because later
//! stages read what earlier ones wrote (collisions see post-spawn,
//! post-integration positions). Physics is frame-rate dependent: friction
//! and particle damping are applied per tick, not per second.

use rand::Rng;

use super::collision::{self, CollisionReport};
use super::state::EntityWorld;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Held movement
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire held (continuous, jittered)
    pub fire: bool,
    /// Dash held; a dash starts on the rising edge
    pub dash: bool,
    /// Fire pressed this frame (single straight shot)
    pub fire_tap: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart after game over
    pub restart: bool,
    /// Start from the menu
    pub start: bool,
    /// Quit from anywhere
    pub quit: bool,
}

impl FrameInput {
    /// Clear one-shot press events, keeping held controls
    pub fn clear_presses(&mut self) {
        self.fire_tap = false;
        self.pause = false;
        self.restart = false;
        self.start = false;
        self.quit = false;
    }
}

/// Clock glitches (negative or non-finite dt) become a zero step
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Advance the world by one frame of play
pub fn tick<R: Rng + ?Sized>(
    world: &mut EntityWorld,
    input: &FrameInput,
    dt: f32,
    rng: &mut R,
) -> CollisionReport {
    let dt = sanitize_dt(dt);
    let bounds = world.bounds;

    // Player
    world.player.update(dt, input, bounds);

    // Spawn decision
    if let Some(hostile) = world.spawner.update(dt, bounds, rng) {
        world.hostiles.push(hostile);
    }

    // Firing: a tap shoots straight, holding adds jitter
    if world.player.alive() {
        let mut fired = 0;
        if input.fire_tap {
            fired += world.player.try_fire(&mut world.bullets, false, rng);
        }
        if input.fire {
            fired += world.player.try_fire(&mut world.bullets, true, rng);
        }
        world.stats.shots_fired += fired as u32;
    }

    // Integration
    for bullet in world.bullets.iter_mut() {
        bullet.update(dt);
    }
    let target = world.player.pos;
    for hostile in world.hostiles.iter_mut() {
        hostile.update(dt, target);
    }
    for powerup in world.powerups.iter_mut() {
        powerup.update(dt);
    }
    world.particles.update(dt);
    world.stars.update(dt, 0.5, bounds, rng);

    // Collisions
    let report = collision::resolve(world, rng);
    world.stats.kills += report.kills;
    world.stats.elite_kills += report.elite_kills;
    world.stats.hits_taken += report.player_hits;
    world.stats.hits_absorbed += report.rams - report.player_hits;
    world.stats.powerups_collected += report.pickups.len() as u32;

    // Buff and multiplier decay
    world.player.decay_effects(dt);

    // Pruning
    world.prune();

    log::trace!(
        "tick dt={dt:.4} bullets={} hostiles={} powerups={} particles={}",
        world.bullets.len(),
        world.hostiles.len(),
        world.powerups.len(),
        world.particles.len()
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::hostile::Hostile;
    use crate::sim::state::{Bounds, Bullet};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 120.0;

    fn setup() -> (EntityWorld, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(12345);
        let world = EntityWorld::new(Bounds::default(), PARTICLE_MAX, MAX_STARS, &mut rng);
        (world, rng)
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(-0.5), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
        assert_eq!(sanitize_dt(0.016), 0.016);
    }

    #[test]
    fn test_negative_dt_freezes_timers() {
        let (mut world, mut rng) = setup();
        let before = world.player.invulnerable;
        let spawn_timer = world.spawner.timer;
        tick(&mut world, &FrameInput::default(), -1.0, &mut rng);
        assert_eq!(world.player.invulnerable, before);
        assert_eq!(world.spawner.timer, spawn_timer);
        assert_eq!(world.spawner.elapsed, 0.0);
    }

    #[test]
    fn test_hold_fire_spawns_bullets() {
        let (mut world, mut rng) = setup();
        let input = FrameInput {
            fire: true,
            ..Default::default()
        };
        for _ in 0..60 {
            tick(&mut world, &input, DT, &mut rng);
        }
        // 0.5 s at a 0.14 s cooldown
        assert_eq!(world.stats.shots_fired, 4);
    }

    #[test]
    fn test_tap_and_hold_same_frame_fire_once() {
        let (mut world, mut rng) = setup();
        let input = FrameInput {
            fire: true,
            fire_tap: true,
            ..Default::default()
        };
        tick(&mut world, &input, DT, &mut rng);
        assert_eq!(world.bullets.len(), 1);
        // The tap went first, so the shot is straight
        assert!(world.bullets[0].vel.x.abs() < 1e-2);
    }

    #[test]
    fn test_hostiles_spawn_over_time() {
        let (mut world, mut rng) = setup();
        for _ in 0..240 {
            tick(&mut world, &FrameInput::default(), DT, &mut rng);
        }
        assert!(world.spawner.spawned >= 2);
        assert!(world.spawner.difficulty > 1.0);
    }

    #[test]
    fn test_collisions_see_integrated_positions() {
        let (mut world, mut rng) = setup();
        world.spawner.timer = 100.0;
        // Bullet just below the hostile, moving up into it this frame
        let hostile_pos = Vec2::new(100.0, 100.0);
        world.hostiles.push(Hostile::new(hostile_pos, 0.0, false, 0.0));
        world.bullets.push(Bullet::new(
            hostile_pos + Vec2::new(0.0, 22.0),
            Vec2::new(0.0, -BULLET_SPEED),
        ));
        let report = tick(&mut world, &FrameInput::default(), DT, &mut rng);
        assert_eq!(report.kills, 1);
        assert_eq!(world.stats.kills, 1);
        assert!(world.hostiles.is_empty());
    }

    #[test]
    fn test_offscreen_bullets_pruned() {
        let (mut world, mut rng) = setup();
        world.bullets.push(Bullet::new(
            Vec2::new(100.0, -55.0),
            Vec2::new(0.0, -BULLET_SPEED),
        ));
        tick(&mut world, &FrameInput::default(), DT, &mut rng);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_hp_stays_in_range_under_pressure() {
        let (mut world, mut rng) = setup();
        for _ in 0..700 {
            let target = world.player.pos;
            world
                .hostiles
                .push(Hostile::new(target, 0.0, false, 0.0));
            tick(&mut world, &FrameInput::default(), DT, &mut rng);
            assert!(world.player.hp <= world.player.max_hp);
        }
        assert_eq!(world.player.hp, 0);
    }
}
