//! Top-level session state machine
//!
//! ```text
//! Menu --start--> Playing <--pause--> Paused
//!                    |
//!                 hp == 0
//!                    v
//!                 GameOver --restart--> Playing (fresh world)
//!
//! any --quit--> Terminated
//! ```

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::snapshot::Snapshot;
use super::starfield::Starfield;
use super::state::{Bounds, EntityWorld};
use super::tick::{FrameInput, sanitize_dt, tick};
use crate::consts::MAX_STARS;
use crate::settings::Settings;

/// Current mode of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Title screen; only the starfield moves
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen; input still polled, snapshot still rendered
    Paused,
    /// Player destroyed, waiting for restart
    GameOver,
    /// Quit requested
    Terminated,
}

/// One play session: state machine, world and its RNG
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    world: EntityWorld,
    settings: Settings,
    rng: Pcg32,
    /// Frames simulated in the current run
    frames: u64,
}

impl Session {
    /// Create a session in the menu. Uses `settings.seed` if set, otherwise
    /// seeds from OS entropy.
    pub fn new(settings: Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        Self::with_rng(settings, rng)
    }

    /// Create a session with an explicit RNG
    pub fn with_rng(settings: Settings, mut rng: Pcg32) -> Self {
        let world = Self::fresh_world(&settings, &mut rng);
        Self {
            state: SessionState::Menu,
            world,
            settings,
            rng,
            frames: 0,
        }
    }

    fn fresh_world(settings: &Settings, rng: &mut Pcg32) -> EntityWorld {
        let stars = if settings.starfield { MAX_STARS } else { 0 };
        EntityWorld::new(
            Bounds::new(settings.width, settings.height),
            settings.max_particles(),
            stars,
            rng,
        )
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn world(&self) -> &EntityWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut EntityWorld {
        &mut self.world
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_running(&self) -> bool {
        self.state != SessionState::Terminated
    }

    /// Discard the world and start over at time zero
    fn reset(&mut self) {
        self.world = Self::fresh_world(&self.settings, &mut self.rng);
        self.frames = 0;
    }

    /// Process one frame: handle press events, then simulate if playing.
    /// Returns the state after the frame.
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> SessionState {
        let dt = sanitize_dt(dt);

        if input.quit {
            if self.state != SessionState::Terminated {
                log::info!("Quit requested");
            }
            self.state = SessionState::Terminated;
            return self.state;
        }

        match self.state {
            SessionState::Terminated => return self.state,
            SessionState::Menu => {
                if !input.start {
                    let bounds = self.world.bounds;
                    self.world.stars.update(dt, 1.0, bounds, &mut self.rng);
                    return self.state;
                }
                self.reset();
                self.state = SessionState::Playing;
                log::info!("Run started");
            }
            SessionState::Playing => {
                if input.pause && self.world.player.alive() {
                    self.state = SessionState::Paused;
                    log::info!("Paused");
                    return self.state;
                }
            }
            SessionState::Paused => {
                if !input.pause {
                    return self.state;
                }
                self.state = SessionState::Playing;
                log::info!("Resumed");
            }
            SessionState::GameOver => {
                if !input.restart {
                    return self.state;
                }
                self.reset();
                self.state = SessionState::Playing;
                log::info!("Run restarted");
            }
        }

        tick(&mut self.world, input, dt, &mut self.rng);
        self.frames += 1;

        if !self.world.player.alive() {
            self.state = SessionState::GameOver;
            let stats = &self.world.stats;
            log::info!(
                "Game over: score {} after {:.1}s ({} kills, {} elite)",
                self.world.player.score.score,
                self.world.spawner.elapsed,
                stats.kills,
                stats.elite_kills
            );
        }
        self.state
    }

    /// Change the arena size. Entities keep their positions; the next frame
    /// clamps the player and prunes whatever fell outside.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Bounds::new(width, height);
        self.world.bounds = bounds;
        self.settings.width = width;
        self.settings.height = height;
        let count = self.world.stars.len();
        self.world.stars = Starfield::new(bounds, count, &mut self.rng);
        log::debug!("Resized arena to {width}x{height}");
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.state, &self.world)
    }
}
