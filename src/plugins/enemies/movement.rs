//! Enemy tick: constant-speed descent toward the player's row.

use bevy::prelude::*;

use crate::common::pool::PoolState;
use crate::common::tunables::Tunables;

use super::components::Enemy;

/// Advance one enemy by one tick.
///
/// Enemies that slip past `floor_y` wrap back to `spawn_y`, so every wave stays clearable.
#[inline]
pub fn step_enemy(translation: &mut Vec3, speed: f32, dt: f32, floor_y: f32, spawn_y: f32) {
    translation.y -= speed * dt;
    if translation.y < floor_y {
        translation.y = spawn_y;
    }
}

pub fn advance_enemies(
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut q: Query<(&PoolState, &mut Transform), With<Enemy>>,
) {
    let dt = time.delta_secs();

    for (state, mut tf) in &mut q {
        if *state != PoolState::Active {
            continue;
        }
        step_enemy(
            &mut tf.translation,
            tunables.enemy_speed,
            dt,
            tunables.enemy_floor_y,
            tunables.enemy_spawn_y,
        );
    }
}
