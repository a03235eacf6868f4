//! Game settings and preferences
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Particle pool capacity for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 200,
            QualityPreset::Medium => PARTICLE_MAX,
            QualityPreset::High => 1500,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width in pixels
    pub width: f32,
    /// Arena height in pixels
    pub height: f32,
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Particle effects (explosions, sparks, pickups)
    pub particles: bool,
    /// Scrolling background stars
    pub starfield: bool,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            quality: QualityPreset::Medium,
            particles: true,
            starfield: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Effective particle cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Reject arenas that cannot fit the spawn lane or the player
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(SettingsError::Invalid(
                "arena dimensions must be finite".to_string(),
            ));
        }
        if self.width <= ENEMY_SPAWN_MARGIN * 2.0 {
            return Err(SettingsError::Invalid(format!(
                "arena width {} must exceed {}",
                self.width,
                ENEMY_SPAWN_MARGIN * 2.0
            )));
        }
        if self.height <= PLAYER_RADIUS * 2.0 {
            return Err(SettingsError::Invalid(format!(
                "arena height {} must exceed {}",
                self.height,
                PLAYER_RADIUS * 2.0
            )));
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
