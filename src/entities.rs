//! All game entity types — plain records, no frame logic.
//!
//! Entities never reference each other; pools hand out slot indices and
//! every cross-entity relation is resolved by index at the call site.

use glam::Vec3;
use serde::Deserialize;

use crate::ledger::Ledger;
use crate::pool::SlotPool;
use crate::spawn::SpawnController;

pub const PROJECTILE_CAPACITY: usize = 10;
pub const ENEMY_CAPACITY: usize = 10;
pub const STAGE_SEGMENTS: usize = 20;

/// Distance between consecutive stage segments along the depth axis.
pub const STAGE_SPACING: f32 = 2.0;

pub type ProjectilePool = SlotPool<Projectile, PROJECTILE_CAPACITY>;
pub type EnemyPool = SlotPool<Enemy, ENEMY_CAPACITY>;

// ── Enumerations ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Top-level phase of the game. Exactly one is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneMode {
    Title,
    GamePlay,
    GameClear,
    GameOver,
}

/// Lifecycle of an occupied enemy slot. A vacant slot is the inactive state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyState {
    Alive,
    /// Hit and playing the death jump; released when `frames_left` reaches 0.
    Dying { frames_left: u32 },
}

/// Tri-state view of an enemy slot, including the vacant case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyPhase {
    Alive,
    Dying,
    Inactive,
}

// ── Transform ─────────────────────────────────────────────────────────────────

/// Position / orientation / scale of a drawable entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }
}

// ── Player, projectile & enemy ────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub transform: Transform,
    /// Frames until the next shot is allowed.
    pub fire_cooldown: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub transform: Transform,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub transform: Transform,
    pub state: EnemyState,
    /// Horizontal patrol speed (units per frame, sign is direction).
    pub speed: f32,
    /// Vertical speed of the death jump. Only meaningful while dying.
    pub jump_speed: f32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.state == EnemyState::Alive
    }

    pub fn phase(&self) -> EnemyPhase {
        match self.state {
            EnemyState::Alive => EnemyPhase::Alive,
            EnemyState::Dying { .. } => EnemyPhase::Dying,
        }
    }
}

// ── Stage ─────────────────────────────────────────────────────────────────────

/// Scrolling floor. Segment transforms are fixed at construction; only the
/// scroll offset changes, and drawn positions wrap inside the stage length.
#[derive(Clone, Debug)]
pub struct Stage {
    segments: [Transform; STAGE_SEGMENTS],
    near_z: f32,
    scroll: f32,
}

impl Stage {
    pub fn new(near_z: f32) -> Self {
        let segments = std::array::from_fn(|i| {
            Transform::at(Vec3::new(0.0, -1.0, near_z + i as f32 * STAGE_SPACING))
        });
        Self {
            segments,
            near_z,
            scroll: 0.0,
        }
    }

    pub fn length() -> f32 {
        STAGE_SEGMENTS as f32 * STAGE_SPACING
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn advance(&mut self, distance: f32) {
        self.scroll = (self.scroll + distance).rem_euclid(Self::length());
    }

    pub fn base_segments(&self) -> &[Transform; STAGE_SEGMENTS] {
        &self.segments
    }

    /// Segment transforms as they should be drawn this frame.
    pub fn segments(&self) -> impl Iterator<Item = Transform> + '_ {
        self.segments.iter().map(move |base| {
            let offset = (base.translation.z - self.near_z - self.scroll).rem_euclid(Self::length());
            let mut t = *base;
            t.translation.z = self.near_z + offset;
            t
        })
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything a round of play owns. Rebuilt from scratch on every
/// Title → GamePlay transition.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub player: Player,
    pub projectiles: ProjectilePool,
    pub enemies: EnemyPool,
    pub stage: Stage,
    pub spawner: SpawnController,
    pub ledger: Ledger,
}

impl GameWorld {
    /// Tri-state phase of an enemy slot; out-of-range indices are inactive.
    pub fn enemy_phase(&self, index: usize) -> EnemyPhase {
        self.enemies
            .get(index)
            .map(Enemy::phase)
            .unwrap_or(EnemyPhase::Inactive)
    }
}
