//! Void Raid entry point
//!
//! Headless runner: drives a session with a scripted autopilot at a fixed
//! frame rate and prints the final snapshot as JSON. Frontends embed
//! `void_raid::sim::Session` directly instead.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use void_raid::SettingsError;
use void_raid::settings::{QualityPreset, Settings};
use void_raid::sim::{FrameInput, Session, SessionState, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "void-raid", version, about = "Headless Void Raid simulation runner")]
struct Cli {
    /// Frames to simulate
    #[arg(short, long, default_value_t = 7200)]
    frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 120.0)]
    fps: f32,

    /// RNG seed (overrides the settings file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Settings JSON file; unreadable or invalid files fall back to defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quality preset: low, medium or high (overrides the settings file)
    #[arg(short, long, value_parser = parse_quality)]
    quality: Option<QualityPreset>,

    /// Runs to play; game over restarts until this many have ended
    #[arg(short, long, default_value_t = 1)]
    runs: u32,

    /// Pretty-print the final snapshot
    #[arg(long)]
    pretty: bool,
}

fn parse_quality(s: &str) -> Result<QualityPreset, String> {
    QualityPreset::parse(s).ok_or_else(|| format!("unknown quality preset '{s}'"))
}

/// Scripted pilot: chase the nearest hostile's column, keep firing, dash
/// sideways when something gets close.
struct Autopilot {
    input: FrameInput,
}

impl Autopilot {
    fn new() -> Self {
        Self {
            input: FrameInput::default(),
        }
    }

    fn next(&mut self, snapshot: &Snapshot) -> &FrameInput {
        self.input.clear_presses();
        match snapshot.state {
            SessionState::Menu => self.input.start = true,
            SessionState::GameOver => self.input.restart = true,
            _ => {}
        }

        let player = snapshot.player.pos;
        let nearest = snapshot
            .hostiles
            .iter()
            .min_by(|a, b| {
                a.pos
                    .distance_squared(player)
                    .total_cmp(&b.pos.distance_squared(player))
            })
            .map(|h| h.pos);

        self.input.fire = true;
        self.input.left = false;
        self.input.right = false;
        self.input.dash = false;
        if let Some(target) = nearest {
            let dx = target.x - player.x;
            if dx.abs() > 8.0 {
                self.input.left = dx < 0.0;
                self.input.right = dx > 0.0;
            }
            if target.distance(player) < 80.0 {
                // Break away from the threat
                let away = player - target;
                self.input.left = away.x < 0.0;
                self.input.right = away.x >= 0.0;
                self.input.dash = true;
            }
        }
        // Hold the lower band of the arena
        self.input.down = player.y < snapshot.bounds.height * 0.75;
        self.input.up = player.y > snapshot.bounds.height * 0.9;
        &self.input
    }
}

fn run(cli: Cli) -> Result<(), SettingsError> {
    let mut settings = Settings::load_or_default(cli.config.as_deref());
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if let Some(quality) = cli.quality {
        settings.quality = quality;
    }
    settings.validate()?;
    log::info!(
        "Arena {}x{}, quality {} ({} particles)",
        settings.width,
        settings.height,
        settings.quality.as_str(),
        settings.max_particles()
    );

    // Same clamp the interactive loop uses against long frames
    let dt = (1.0 / cli.fps.max(1.0)).min(0.1);
    let mut session = Session::new(settings);
    let mut pilot = Autopilot::new();
    let mut runs_ended = 0;
    let mut last_state = session.state();

    for frame in 0..cli.frames {
        let snapshot = session.snapshot();
        let input = if runs_ended >= cli.runs {
            FrameInput {
                quit: true,
                ..Default::default()
            }
        } else {
            pilot.next(&snapshot).clone()
        };

        let state = session.frame(&input, dt);
        if state == SessionState::GameOver && last_state != SessionState::GameOver {
            runs_ended += 1;
            log::info!("Run {runs_ended}/{} over: {}", cli.runs, session.snapshot().hud_line());
        }
        last_state = state;
        if !session.is_running() {
            break;
        }

        if frame % (cli.fps.max(1.0) as u64) == 0 && state == SessionState::Playing {
            log::debug!("{}", session.snapshot().hud_line());
        }
    }

    let snapshot = session.snapshot();
    let json = if cli.pretty {
        serde_json::to_string_pretty(&snapshot)
    } else {
        serde_json::to_string(&snapshot)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Void Raid (headless) starting...");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("void-raid: {e}");
            ExitCode::FAILURE
        }
    }
}
