//! Projectile tick: constant-speed travel along +Y, self-retire past the bound.

use bevy::prelude::*;

use crate::common::pool::PoolState;
use crate::common::tunables::Tunables;

use super::components::Projectile;
use super::pool::ProjectilePool;

/// Advance one projectile by one tick. Returns `true` once it is out of bounds.
#[inline]
pub fn step_projectile(translation: &mut Vec3, speed: f32, dt: f32, bound_y: f32) -> bool {
    translation.y += speed * dt;
    translation.y > bound_y
}

pub fn advance_projectiles(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<(Entity, &PoolState, &mut Transform), With<Projectile>>,
) {
    let dt = time.delta_secs();

    for (e, state, mut tf) in &mut q {
        if *state != PoolState::Active {
            continue;
        }

        if step_projectile(
            &mut tf.translation,
            tunables.projectile_speed,
            dt,
            tunables.projectile_bound_y,
        ) {
            pool.release(&mut commands, e);
        }
    }
}
