//! Pairwise contact resolution between pools.
//!
//! Both passes scan in ascending slot order and apply their side effects on
//! the spot. A flag flip at one index never changes which pairs an earlier
//! index already tested, so a single forward scan is enough. Only alive
//! enemies take part: dying ones are scenery until their slot is released.

use glam::Vec3;

use crate::config::Tuning;
use crate::entities::{EnemyPool, EnemyState, GameWorld, ENEMY_CAPACITY, PROJECTILE_CAPACITY};
use crate::host::{AudioProvider, Sound};

/// What one resolution pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Slot of the enemy that touched the player this frame, if any.
    pub player_hit_by: Option<usize>,
    /// Enemies shot down this frame.
    pub kills: u32,
}

/// Sphere overlap test between two entity centres.
pub fn touching(a: Vec3, b: Vec3, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Run both passes: player ↔ enemy first, then projectile ↔ enemy.
pub fn resolve(world: &mut GameWorld, tuning: &Tuning, audio: &mut impl AudioProvider) -> CollisionReport {
    CollisionReport {
        player_hit_by: resolve_player_enemies(world, tuning, audio),
        kills: resolve_projectiles_enemies(world, tuning, audio),
    }
}

/// At most one contact per frame. The lowest-index alive enemy touching the
/// player costs one life and is removed outright (no death jump); the hit
/// starts the invulnerability window, during which contacts are ignored and
/// touching enemies fly on.
pub fn resolve_player_enemies(
    world: &mut GameWorld,
    tuning: &Tuning,
    audio: &mut impl AudioProvider,
) -> Option<usize> {
    if world.ledger.is_depleted() || world.ledger.is_invulnerable() {
        return None;
    }

    let player_pos = world.player.transform.translation;
    let hit = (0..ENEMY_CAPACITY).find(|&i| {
        world
            .enemies
            .get(i)
            .is_some_and(|e| e.is_alive() && touching(player_pos, e.transform.translation, tuning.hit_radius))
    })?;

    world.enemies.deactivate(hit);
    let depleted = world.ledger.lose_life(tuning.invulnerable_frames);
    audio.play_one_shot(Sound::PlayerHit);
    log::debug!(
        "player hit by enemy {} ({} lives left{})",
        hit,
        world.ledger.life,
        if depleted { ", depleted" } else { "" }
    );
    Some(hit)
}

/// Each projectile takes at most one enemy: the first alive one in slot
/// order within range. The shot is released, the enemy starts dying and the
/// kill is scored.
pub fn resolve_projectiles_enemies(
    world: &mut GameWorld,
    tuning: &Tuning,
    audio: &mut impl AudioProvider,
) -> u32 {
    let mut kills = 0;
    for pi in 0..PROJECTILE_CAPACITY {
        let Some(shot) = world.projectiles.get(pi) else {
            continue;
        };
        let Some(ei) = first_target(&world.enemies, shot.transform.translation, tuning.hit_radius) else {
            continue;
        };

        world.projectiles.deactivate(pi);
        if let Some(enemy) = world.enemies.get_mut(ei) {
            enemy.state = EnemyState::Dying {
                frames_left: tuning.death_frames,
            };
            enemy.jump_speed = tuning.enemy_jump_speed;
        }
        world.ledger.award_kill(tuning.kill_score);
        audio.play_one_shot(Sound::EnemyHit);
        log::debug!("projectile {} hit enemy {} (score {})", pi, ei, world.ledger.score);
        kills += 1;
    }
    kills
}

/// Lowest-index alive enemy within `radius` of `pos`.
fn first_target(enemies: &EnemyPool, pos: Vec3, radius: f32) -> Option<usize> {
    enemies
        .iter()
        .find(|(_, e)| e.is_alive() && touching(pos, e.transform.translation, radius))
        .map(|(index, _)| index)
}
