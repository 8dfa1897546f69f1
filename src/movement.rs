//! Per-kind motion rules, one frame at a time.

use glam::Vec2;

use crate::config::Tuning;
use crate::entities::{EnemyPool, EnemyState, GameWorld, Player, ProjectilePool, Stage};

/// Spin applied to projectiles (and, reversed, to alive enemies) each frame.
const SPIN_PER_FRAME: f32 = 0.1;

/// Sideways drift multiplier while an enemy plays its death jump.
const DYING_DRIFT: f32 = 4.0;

/// Move everything in the world by one frame.
pub fn apply_all(world: &mut GameWorld, axis: Vec2, tuning: &Tuning) {
    move_player(&mut world.player, axis, tuning);
    move_projectiles(&mut world.projectiles, tuning);
    move_enemies(&mut world.enemies, tuning);
    scroll_stage(&mut world.stage, tuning);
}

/// Input-driven motion, clamped to the player's part of the playfield.
pub fn move_player(player: &mut Player, axis: Vec2, tuning: &Tuning) {
    let field = &tuning.field;
    let step = axis.clamp_length_max(1.0) * tuning.player_speed;
    let t = &mut player.transform.translation;
    t.x = (t.x + step.x).clamp(field.min_x, field.max_x);
    t.z = (t.z + step.y).clamp(field.player_min_z, field.player_max_z);
}

/// Straight-line flight along +z. Shots beyond the far edge are released.
///
/// Returns the number of released projectiles.
pub fn move_projectiles(projectiles: &mut ProjectilePool, tuning: &Tuning) -> usize {
    let far_z = tuning.field.far_z;
    projectiles.retain(|_, shot| {
        let t = &mut shot.transform;
        t.translation.z += tuning.projectile_speed;
        t.rotation.x += SPIN_PER_FRAME;
        t.translation.z <= far_z
    })
}

/// Patrol / approach for alive enemies, death jump for dying ones.
///
/// Returns the number of released enemies (passed the near edge, or death
/// animation finished).
pub fn move_enemies(enemies: &mut EnemyPool, tuning: &Tuning) -> usize {
    let field = &tuning.field;
    enemies.retain(|index, enemy| match enemy.state {
        EnemyState::Alive => {
            let t = &mut enemy.transform;
            t.translation.z -= tuning.enemy_approach_speed;
            t.translation.x += enemy.speed;
            if t.translation.x > field.max_x {
                t.translation.x = field.max_x;
                enemy.speed = -enemy.speed.abs();
            } else if t.translation.x < field.min_x {
                t.translation.x = field.min_x;
                enemy.speed = enemy.speed.abs();
            }
            t.rotation.x -= SPIN_PER_FRAME;

            let inside = t.translation.z >= field.near_z;
            if !inside {
                log::trace!("enemy {} passed the near edge", index);
            }
            inside
        }
        EnemyState::Dying { frames_left } => {
            let t = &mut enemy.transform;
            t.translation.y += enemy.jump_speed;
            t.translation.x += enemy.speed * DYING_DRIFT;
            enemy.jump_speed -= tuning.enemy_gravity;

            let frames_left = frames_left.saturating_sub(1);
            enemy.state = EnemyState::Dying { frames_left };
            frames_left > 0
        }
    })
}

pub fn scroll_stage(stage: &mut Stage, tuning: &Tuning) {
    stage.advance(tuning.stage_scroll_speed);
}
