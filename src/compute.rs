//! One GamePlay frame, start to finish.
//!
//! Order is fixed: spawn → move → collide → ledger bookkeeping → outcome.
//! All randomness comes through the injected RNG so callers control
//! determinism (tests use a seeded `StdRng`).

use glam::Vec3;
use rand::Rng;

use crate::collision::{self, CollisionReport};
use crate::config::Tuning;
use crate::entities::{EnemyPool, GameWorld, Player, ProjectilePool, Stage, Transform};
use crate::host::{AudioProvider, Button, InputProvider};
use crate::ledger::Ledger;
use crate::movement;
use crate::spawn::SpawnController;

/// How a GamePlay frame ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Last life lost.
    Depleted,
    /// Win condition reached.
    Cleared,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh round: player centred at the near end of its lane, full life,
/// every pool empty.
pub fn init_world(tuning: &Tuning) -> GameWorld {
    let field = &tuning.field;
    let start = Vec3::new((field.min_x + field.max_x) / 2.0, 0.0, field.player_min_z);
    GameWorld {
        player: Player {
            transform: Transform::at(start),
            fire_cooldown: 0,
        },
        projectiles: ProjectilePool::new(),
        enemies: EnemyPool::new(),
        stage: Stage::new(field.near_z),
        spawner: SpawnController::new(),
        ledger: Ledger::new(tuning.starting_life),
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance a round by one frame.
pub fn gameplay_tick(
    world: &mut GameWorld,
    tuning: &Tuning,
    input: &impl InputProvider,
    audio: &mut impl AudioProvider,
    rng: &mut impl Rng,
) -> (FrameOutcome, CollisionReport) {
    // ── 1. Spawn ─────────────────────────────────────────────────────────────
    let fire_held = input.is_pressed(Button::Fire) || input.is_triggered(Button::Fire);
    world.spawner.tick(
        &mut world.player,
        &mut world.projectiles,
        &mut world.enemies,
        fire_held,
        tuning,
        rng,
    );

    // ── 2. Move ──────────────────────────────────────────────────────────────
    movement::apply_all(world, input.axis(), tuning);

    // ── 3. Collide ───────────────────────────────────────────────────────────
    let report = collision::resolve(world, tuning, audio);

    // ── 4. Ledger & outcome ──────────────────────────────────────────────────
    world.ledger.advance_frame();
    (outcome(&world.ledger, tuning), report)
}

/// Losing takes precedence over a win reached on the same frame.
pub fn outcome(ledger: &Ledger, tuning: &Tuning) -> FrameOutcome {
    if ledger.is_depleted() {
        FrameOutcome::Depleted
    } else if ledger.score >= tuning.clear_score {
        FrameOutcome::Cleared
    } else {
        FrameOutcome::Continue
    }
}
