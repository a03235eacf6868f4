//! Simulation module
//!
//! All gameplay logic lives here. Rules the module keeps:
//! - One variable `dt` step per frame, in a fixed stage order
//! - Randomness is always injected (`&mut impl Rng`), never global
//! - No rendering or platform dependencies

pub mod buffs;
pub mod collision;
pub mod hostile;
pub mod particles;
pub mod player;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod starfield;
pub mod state;
pub mod tick;

pub use buffs::Buffs;
pub use collision::{CollisionReport, overlap, resolve};
pub use hostile::Hostile;
pub use particles::{Burst, Particle, ParticlePool};
pub use player::Player;
pub use score::ScoreTracker;
pub use session::{Session, SessionState};
pub use snapshot::Snapshot;
pub use spawn::{SpawnDirector, difficulty_at, spawn_interval};
pub use starfield::{Star, Starfield};
pub use state::{Bounds, Bullet, EntityWorld, Powerup, PowerupKind, RunStats};
pub use tick::{FrameInput, sanitize_dt, tick};
