//! The player ship: movement, dash, firing, damage
//!
//! All timers are in seconds and floored at zero.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::buffs::Buffs;
use super::score::ScoreTracker;
use super::state::{Bounds, Bullet, PowerupKind};
use super::tick::FrameInput;
use crate::consts::*;
use crate::{UP_ANGLE, clamp_f32, decay, direction};

/// Angular offsets from "up" for the spread pattern and the single shot
const SPREAD_OFFSETS: [f32; 3] = [-BULLET_SPREAD, 0.0, BULLET_SPREAD];
const SINGLE_OFFSET: [f32; 1] = [0.0];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hp: u32,
    pub max_hp: u32,
    pub fire_cooldown: f32,
    pub invulnerable: f32,
    /// Remaining dash time (> 0 while dashing)
    pub dash_timer: f32,
    pub dash_cooldown: f32,
    pub score: ScoreTracker,
    pub buffs: Buffs,
    /// Dash control state last frame, for edge detection
    #[serde(skip)]
    dash_held: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
            fire_cooldown: 0.0,
            invulnerable: PLAYER_HIT_GRACE,
            dash_timer: 0.0,
            dash_cooldown: 0.0,
            score: ScoreTracker::default(),
            buffs: Buffs::default(),
            dash_held: false,
        }
    }

    #[inline]
    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn dashing(&self) -> bool {
        self.dash_timer > 0.0
    }

    /// Facing angle for rendering: along velocity when moving, else up
    pub fn heading(&self) -> f32 {
        if self.vel.length_squared() > 10.0 {
            self.vel.y.atan2(self.vel.x)
        } else {
            UP_ANGLE
        }
    }

    /// Movement, dash and per-frame timers
    pub fn update(&mut self, dt: f32, input: &FrameInput, bounds: Bounds) {
        // Axes are summed without normalizing, so diagonals are faster
        let mut acc = Vec2::ZERO;
        if input.left {
            acc.x -= PLAYER_ACCEL;
        }
        if input.right {
            acc.x += PLAYER_ACCEL;
        }
        if input.up {
            acc.y -= PLAYER_ACCEL;
        }
        if input.down {
            acc.y += PLAYER_ACCEL;
        }
        self.vel += acc * dt;
        self.vel *= PLAYER_FRICTION;

        self.dash_cooldown = decay(self.dash_cooldown, dt);
        let dash_pressed = input.dash && !self.dash_held;
        self.dash_held = input.dash;
        if dash_pressed
            && self.dash_cooldown <= 0.0
            && !self.dashing()
            && self.vel.length_squared() > PLAYER_DASH_MIN_SPEED_SQ
        {
            self.dash_timer = PLAYER_DASH_TIME;
            self.invulnerable = self.invulnerable.max(PLAYER_DASH_TIME + PLAYER_DASH_GRACE);
            log::debug!("Dash at ({:.0}, {:.0})", self.pos.x, self.pos.y);
        }

        if self.dashing() {
            self.dash_timer = decay(self.dash_timer, dt);
            self.pos += self.vel * (PLAYER_DASH_MULT * dt);
            if !self.dashing() {
                self.dash_cooldown = PLAYER_DASH_COOLDOWN;
            }
        } else {
            self.pos += self.vel * dt;
        }

        self.invulnerable = decay(self.invulnerable, dt);

        self.pos.x = clamp_f32(self.pos.x, self.radius, bounds.width - self.radius);
        self.pos.y = clamp_f32(self.pos.y, self.radius, bounds.height - self.radius);

        self.fire_cooldown = decay(self.fire_cooldown, dt);
    }

    /// Fire if the cooldown allows. Returns the number of bullets emitted.
    ///
    /// `holding` marks continuous fire, which jitters every shot; taps fly
    /// straight.
    pub fn try_fire<R: Rng + ?Sized>(
        &mut self,
        bullets: &mut Vec<Bullet>,
        holding: bool,
        rng: &mut R,
    ) -> usize {
        if self.fire_cooldown > 0.0 {
            return 0;
        }
        let mut rate = PLAYER_FIRE_COOLDOWN;
        if self.buffs.is_active(PowerupKind::Rapid) {
            rate *= RAPID_FIRE_FACTOR;
        }
        self.fire_cooldown = rate;

        let offsets: &[f32] = if self.buffs.is_active(PowerupKind::Spread) {
            &SPREAD_OFFSETS
        } else {
            &SINGLE_OFFSET
        };
        let jitter = BULLET_SPREAD * BULLET_JITTER_FACTOR;
        let muzzle = self.pos + Vec2::new(0.0, -self.radius - 2.0);

        for &offset in offsets {
            let mut angle = UP_ANGLE + offset;
            if holding {
                angle += rng.random_range(-jitter..=jitter);
            }
            bullets.push(Bullet::new(muzzle, direction(angle) * BULLET_SPEED));
        }
        offsets.len()
    }

    /// Apply a hit. Returns `false` (and leaves hp alone) while invulnerable
    /// or shielded.
    pub fn damage(&mut self, amount: u32) -> bool {
        if self.invulnerable > 0.0 || self.buffs.is_active(PowerupKind::Shield) {
            return false;
        }
        self.hp = self.hp.saturating_sub(amount);
        self.invulnerable = PLAYER_HIT_GRACE;
        true
    }

    /// Award points through the combo multiplier
    pub fn add_score(&mut self, base: u64) -> u64 {
        self.score.add(base)
    }

    pub fn apply_powerup(&mut self, kind: PowerupKind) -> f32 {
        self.buffs.apply(kind)
    }

    /// Buff and multiplier decay, run after collisions each frame
    pub fn decay_effects(&mut self, dt: f32) {
        self.buffs.decay(dt);
        self.score.decay(dt);
    }
}
