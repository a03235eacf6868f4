//! Error types
//!
//! The simulation step itself is infallible; only settings loading can fail.

use thiserror::Error;

/// Errors raised while loading or validating [`crate::Settings`]
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`crate::Settings`]
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Values parsed but cannot host a playable arena
    #[error("invalid settings: {0}")]
    Invalid(String),
}
