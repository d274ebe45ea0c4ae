//! Contact rule: an active enemy touching an active projectile dies.
//!
//! Collision events come from Avian (`CollisionStart`). We only *report* the death here; the wave
//! manager owns pool release and bookkeeping.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::pool::PoolState;
use crate::plugins::projectiles::components::Projectile;

use super::components::{Enemy, EnemyDied};

#[inline]
fn owner(collider: Entity, body: Option<Entity>) -> Entity {
    body.unwrap_or(collider)
}

pub fn detect_projectile_contacts(
    mut started: MessageReader<CollisionStart>,
    q_enemies: Query<&PoolState, With<Enemy>>,
    q_projectiles: Query<&PoolState, With<Projectile>>,
    mut writer: MessageWriter<EnemyDied>,
    // Per-run dedupe: two projectiles hitting one enemy in the same step is one death.
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let a = owner(ev.collider1, ev.body1);
        let b = owner(ev.collider2, ev.body2);

        let (enemy, other) = if q_enemies.contains(a) {
            (a, b)
        } else if q_enemies.contains(b) {
            (b, a)
        } else {
            continue;
        };

        let Ok(enemy_state) = q_enemies.get(enemy) else {
            continue;
        };
        if *enemy_state != PoolState::Active {
            continue;
        }

        // Only projectile contact kills; touching the player does nothing.
        let Ok(projectile_state) = q_projectiles.get(other) else {
            continue;
        };
        if *projectile_state != PoolState::Active {
            continue;
        }

        if !seen.insert(enemy) {
            continue;
        }

        writer.write(EnemyDied { enemy });
    }
}
