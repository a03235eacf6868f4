//! Void Raid - A top-down arcade space shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (player, hostiles, collisions, session state)
//! - `settings`: Arena size, particle quality and RNG seed
//! - `error`: Errors raised at the edges (settings loading)
//!
//! Rendering, audio and windowing are external collaborators: they feed
//! [`sim::FrameInput`] in and read [`sim::Snapshot`] out.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 700.0;

    /// Player movement
    pub const PLAYER_ACCEL: f32 = 720.0;
    /// Per-frame velocity multiplier (applied once per tick, not per second)
    pub const PLAYER_FRICTION: f32 = 0.90;
    pub const PLAYER_RADIUS: f32 = 12.0;
    pub const PLAYER_MAX_HP: u32 = 5;
    /// Invulnerability granted on spawn and after each applied hit
    pub const PLAYER_HIT_GRACE: f32 = 1.0;

    /// Firing
    pub const PLAYER_FIRE_COOLDOWN: f32 = 0.14;
    /// Cooldown multiplier while the rapid buff is active
    pub const RAPID_FIRE_FACTOR: f32 = 0.55;

    /// Dash
    pub const PLAYER_DASH_TIME: f32 = 0.18;
    pub const PLAYER_DASH_COOLDOWN: f32 = 0.9;
    pub const PLAYER_DASH_MULT: f32 = 4.6;
    /// Extra invulnerability past the end of a dash
    pub const PLAYER_DASH_GRACE: f32 = 0.05;
    /// Squared speed required to start a dash
    pub const PLAYER_DASH_MIN_SPEED_SQ: f32 = 1.0;

    /// Bullets
    pub const BULLET_SPEED: f32 = 900.0;
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Angular offset (radians) of the outer spread shots
    pub const BULLET_SPREAD: f32 = 0.18;
    /// Held-fire jitter as a fraction of BULLET_SPREAD
    pub const BULLET_JITTER_FACTOR: f32 = 0.6;

    /// Hostiles
    pub const ENEMY_BASE_SPEED: f32 = 90.0;
    pub const ENEMY_SPEED_VARIANCE: f32 = 50.0;
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const ELITE_RADIUS: f32 = 18.0;
    pub const ENEMY_HP: u32 = 1;
    pub const ELITE_HP: u32 = 3;
    pub const ENEMY_WOBBLE: f32 = 40.0;
    pub const ELITE_WOBBLE: f32 = 60.0;
    pub const ENEMY_WOBBLE_RATE: f32 = 1.0;
    pub const ELITE_WOBBLE_RATE: f32 = 1.3;
    pub const ENEMY_SCORE: u64 = 7;
    pub const ELITE_SCORE: u64 = 15;

    /// Spawn scheduling (seconds)
    pub const ENEMY_MIN_SPAWN: f32 = 0.33;
    pub const ENEMY_MAX_SPAWN: f32 = 0.8;
    /// Absolute floor on the spawn interval lower bound
    pub const ENEMY_SPAWN_FLOOR: f32 = 0.18;
    /// Minimum gap kept between the interval bounds
    pub const ENEMY_SPAWN_GAP: f32 = 0.05;
    /// Horizontal inset of spawn positions from the arena edges
    pub const ENEMY_SPAWN_MARGIN: f32 = 40.0;
    pub const ENEMY_SPAWN_Y: f32 = -30.0;
    /// Difficulty growth per second survived
    pub const DIFFICULTY_RATE: f32 = 0.02;
    pub const ELITE_CHANCE_PER_DIFFICULTY: f32 = 0.05;
    pub const ELITE_CHANCE_MAX: f32 = 0.4;

    /// Powerups
    pub const POWERUP_CHANCE: f32 = 0.18;
    pub const ELITE_DROP_BONUS: f32 = 1.2;
    pub const POWERUP_RADIUS: f32 = 10.0;
    /// Extra pickup reach added to the player radius
    pub const POWERUP_PICKUP_BONUS: f32 = 4.0;
    pub const POWERUP_FALL_SPEED: f32 = 60.0;
    pub const POWERUP_SWAY: f32 = 30.0;

    /// Score multiplier
    pub const MULTIPLIER_MAX: u32 = 8;
    pub const MULTIPLIER_WINDOW: f32 = 4.0;

    /// Particles
    pub const PARTICLE_MAX: usize = 600;
    pub const PARTICLE_DAMPING: f32 = 0.96;
    pub const PARTICLE_BOUNDS_PAD: f32 = 40.0;

    /// Background stars
    pub const MAX_STARS: usize = 140;
}

/// Clamp `value` into `[lo, hi]`, preferring `lo` if the range is inverted.
///
/// Unlike `f32::clamp` this never panics, which matters when the arena is
/// resized smaller than the player's diameter.
#[inline]
pub fn clamp_f32(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// Count a timer down by `dt`, never below zero
#[inline]
pub fn decay(timer: f32, dt: f32) -> f32 {
    (timer - dt).max(0.0)
}

/// Unit vector pointing at `angle` radians (screen space, +y down)
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of "up" on screen (negative y)
pub const UP_ANGLE: f32 = -std::f32::consts::FRAC_PI_2;
