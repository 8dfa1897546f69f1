//! Timer-gated creation of projectiles and enemies.
//!
//! Pool exhaustion and cooldowns are silent: a refused spawn simply does not
//! happen and nothing is queued for later.

use glam::Vec3;
use rand::Rng;

use crate::config::Tuning;
use crate::entities::{Enemy, EnemyPool, EnemyState, Player, Projectile, ProjectilePool, Transform};

/// Owns the wave timer. The fire cooldown lives on the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnController {
    wave_timer: u32,
}

impl SpawnController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wave_timer(&self) -> u32 {
        self.wave_timer
    }

    /// Run both spawners for one GamePlay frame.
    pub fn tick(
        &mut self,
        player: &mut Player,
        projectiles: &mut ProjectilePool,
        enemies: &mut EnemyPool,
        fire_held: bool,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) {
        try_fire(player, projectiles, fire_held, tuning);
        self.tick_wave(enemies, tuning, rng);
    }

    /// Advance the wave timer; on reaching the interval, spawn one enemy and
    /// restart the timer. The timer restarts even when the pool is full.
    pub fn tick_wave(
        &mut self,
        enemies: &mut EnemyPool,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Option<usize> {
        self.wave_timer += 1;
        if self.wave_timer < tuning.wave_interval.max(1) {
            return None;
        }
        self.wave_timer = 0;

        let index = enemies.try_allocate(new_enemy(tuning, rng));
        match index {
            Some(i) => log::debug!("enemy spawned in slot {}", i),
            None => log::trace!("enemy pool full, wave skipped"),
        }
        index
    }
}

/// Fire from the player's current position when fire is held and the
/// cooldown has run out. Returns the projectile's slot.
pub fn try_fire(
    player: &mut Player,
    projectiles: &mut ProjectilePool,
    fire_held: bool,
    tuning: &Tuning,
) -> Option<usize> {
    player.fire_cooldown = player.fire_cooldown.saturating_sub(1);
    if !fire_held || player.fire_cooldown > 0 {
        return None;
    }

    let shot = Projectile {
        transform: Transform::at(player.transform.translation),
    };
    let index = projectiles.try_allocate(shot)?;
    player.fire_cooldown = tuning.fire_cooldown;
    log::trace!("projectile fired from slot {}", index);
    Some(index)
}

/// Fresh enemy at the far edge with a random lane and patrol direction.
fn new_enemy(tuning: &Tuning, rng: &mut impl Rng) -> Enemy {
    let field = &tuning.field;
    let x = if field.max_x > field.min_x {
        rng.gen_range(field.min_x..field.max_x)
    } else {
        field.min_x
    };
    let speed = if rng.gen_bool(0.5) {
        tuning.enemy_patrol_speed
    } else {
        -tuning.enemy_patrol_speed
    };
    Enemy {
        transform: Transform::at(Vec3::new(x, 0.0, field.far_z)),
        state: EnemyState::Alive,
        speed,
        jump_speed: 0.0,
    }
}
