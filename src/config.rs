//! Game configuration: difficulty presets and the TOML override file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::Level;
use crate::error::{GameError, Result};

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Axis-aligned play area on the ground plane (x lateral, z depth).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playfield {
    pub min_x: f32,
    pub max_x: f32,
    /// Edge closest to the camera. Enemies passing it are released.
    pub near_z: f32,
    /// Far edge. Projectiles passing it are released; enemies spawn here.
    pub far_z: f32,
    /// Depth range the player may move within.
    pub player_min_z: f32,
    pub player_max_z: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            min_x: -4.0,
            max_x: 4.0,
            near_z: -5.0,
            far_z: 40.0,
            player_min_z: 0.0,
            player_max_z: 6.0,
        }
    }
}

impl Playfield {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.near_z..=self.far_z).contains(&z)
    }
}

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Every gameplay constant. Speeds are in world units per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: Playfield,
    pub player_speed: f32,
    pub starting_life: u32,
    /// Frames of invulnerability after the player is hit.
    pub invulnerable_frames: u32,
    /// Frames between shots while fire is held.
    pub fire_cooldown: u32,
    pub projectile_speed: f32,
    /// Frames between enemy spawn attempts.
    pub wave_interval: u32,
    pub enemy_approach_speed: f32,
    pub enemy_patrol_speed: f32,
    pub enemy_jump_speed: f32,
    pub enemy_gravity: f32,
    /// Length of the death animation in frames.
    pub death_frames: u32,
    /// Centre distance below which two entities touch.
    pub hit_radius: f32,
    pub kill_score: u32,
    /// Score that wins the round.
    pub clear_score: u32,
    pub stage_scroll_speed: f32,
    /// Frames a result screen is shown before confirm is accepted.
    pub result_delay: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field: Playfield::default(),
            player_speed: 0.1,
            starting_life: 3,
            invulnerable_frames: 60,
            fire_cooldown: 10,
            projectile_speed: 0.3,
            wave_interval: 30,
            enemy_approach_speed: 0.2,
            enemy_patrol_speed: 0.1,
            enemy_jump_speed: 1.0,
            enemy_gravity: 0.1,
            death_frames: 20,
            hit_radius: 1.0,
            kill_score: 100,
            clear_score: 2000,
            stage_scroll_speed: 0.1,
            result_delay: 60,
        }
    }
}

// ── Difficulty tables ────────────────────────────────────────────────────────

fn wave_interval(level: &Level) -> u32 {
    match level {
        Level::Easy => 50,
        Level::Medium => 30,
        Level::Hard => 15,
    }
}

fn enemy_approach_speed(level: &Level) -> f32 {
    match level {
        Level::Easy => 0.15,
        Level::Medium => 0.2,
        Level::Hard => 0.3,
    }
}

fn enemy_patrol_speed(level: &Level) -> f32 {
    match level {
        Level::Easy => 0.05,
        Level::Medium => 0.1,
        Level::Hard => 0.15,
    }
}

fn clear_score(level: &Level) -> u32 {
    match level {
        Level::Easy => 1500,
        Level::Medium => 2000,
        Level::Hard => 3000,
    }
}

impl Level {
    pub fn tuning(&self) -> Tuning {
        Tuning {
            wave_interval: wave_interval(self),
            enemy_approach_speed: enemy_approach_speed(self),
            enemy_patrol_speed: enemy_patrol_speed(self),
            clear_score: clear_score(self),
            ..Tuning::default()
        }
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

impl Tuning {
    /// Reject tables the simulation cannot run with: non-finite numbers and
    /// empty or inverted ranges.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let f = &self.field;
        let numbers = [
            ("field.min_x", f.min_x),
            ("field.max_x", f.max_x),
            ("field.near_z", f.near_z),
            ("field.far_z", f.far_z),
            ("field.player_min_z", f.player_min_z),
            ("field.player_max_z", f.player_max_z),
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("enemy_approach_speed", self.enemy_approach_speed),
            ("enemy_patrol_speed", self.enemy_patrol_speed),
            ("enemy_jump_speed", self.enemy_jump_speed),
            ("enemy_gravity", self.enemy_gravity),
            ("hit_radius", self.hit_radius),
            ("stage_scroll_speed", self.stage_scroll_speed),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{} must be finite, got {}", name, value));
        }
        if f.min_x >= f.max_x {
            return Err(format!("field.min_x ({}) must be below field.max_x ({})", f.min_x, f.max_x));
        }
        if f.near_z >= f.far_z {
            return Err(format!("field.near_z ({}) must be below field.far_z ({})", f.near_z, f.far_z));
        }
        if f.player_min_z > f.player_max_z {
            return Err(format!(
                "field.player_min_z ({}) must not exceed field.player_max_z ({})",
                f.player_min_z, f.player_max_z
            ));
        }
        if self.hit_radius < 0.0 {
            return Err(format!("hit_radius must not be negative, got {}", self.hit_radius));
        }
        Ok(())
    }
}

// ── Config file ───────────────────────────────────────────────────────────────

/// Top-level config file.
///
/// ```toml
/// level = "hard"
/// seed = 7
///
/// [tuning]          # optional; keys override the level preset
/// fire_cooldown = 6
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub level: Level,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Partial tuning table laid over the level preset.
    pub tuning: Option<toml::Table>,
}

impl GameConfig {
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.tuning().map_err(|e| match e {
            GameError::InvalidConfig { reason, .. } => GameError::InvalidConfig {
                path: Some(path.to_path_buf()),
                reason,
            },
            other => other,
        })?;
        log::info!("Loaded config from {} (level {:?})", path.display(), config.level);
        Ok(config)
    }

    /// Tuning in effect: the level preset with any `[tuning]` keys laid on top.
    pub fn tuning(&self) -> Result<Tuning> {
        let preset = self.level.tuning();
        let tuning = match &self.tuning {
            None => preset,
            Some(overrides) => {
                let mut merged = toml::Value::try_from(&preset).map_err(invalid)?;
                if let toml::Value::Table(base) = &mut merged {
                    overlay(base, overrides);
                }
                merged.try_into::<Tuning>().map_err(invalid)?
            }
        };
        tuning.validate().map_err(|reason| GameError::InvalidConfig { path: None, reason })?;
        Ok(tuning)
    }
}

fn invalid(e: impl std::fmt::Display) -> GameError {
    GameError::InvalidConfig {
        path: None,
        reason: e.to_string(),
    }
}

/// Recursively replace keys of `base` with those of `overrides`.
fn overlay(base: &mut toml::Table, overrides: &toml::Table) {
    for (key, value) in overrides {
        if let (Some(toml::Value::Table(inner)), toml::Value::Table(nested)) = (base.get_mut(key), value) {
            overlay(inner, nested);
            continue;
        }
        base.insert(key.clone(), value.clone());
    }
}
