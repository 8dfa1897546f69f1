//! Beam Shooter - per-frame simulation core of a small arcade shooter.
//!
//! Core modules:
//! - `pool`: fixed-capacity slot pools for projectiles and enemies
//! - `spawn`, `movement`, `collision`: the three GamePlay stages
//! - `compute`: one GamePlay frame in order
//! - `scene`: Title / GamePlay / GameClear / GameOver state machine
//! - `host`: input, audio and draw capabilities supplied by the front end
//! - `config`: difficulty presets and TOML overrides

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod host;
pub mod ledger;
pub mod movement;
pub mod pool;
pub mod scene;
pub mod spawn;

pub use config::{GameConfig, Playfield, Tuning};
pub use entities::{Level, SceneMode};
pub use error::{GameError, Result};
pub use scene::Game;
