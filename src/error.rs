//! Errors of the outer shell (config files, terminal I/O).
//!
//! The simulation itself never fails: exhaustion and cooldowns are silent
//! no-ops and losing is a scene transition.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The tuning parsed but describes a playfield or speeds the
    /// simulation cannot run with.
    #[error(
        "invalid tuning{}: {reason}",
        .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default()
    )]
    InvalidConfig {
        path: Option<PathBuf>,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
