//! Fire consumer: activate projectiles from the pool.

use bevy::prelude::*;

use super::messages::FireProjectile;
use super::pool::ProjectilePool;

pub fn fire_projectiles_from_pool(
    mut commands: Commands,
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<FireProjectile>,
) {
    for req in reader.read() {
        let e = pool.acquire(&mut commands);
        let z = pool.origin().z;
        // Queued after the pool's origin reset, so this placement wins.
        commands.entity(e).insert(Transform::from_translation(req.pos.extend(z)));
    }
}
